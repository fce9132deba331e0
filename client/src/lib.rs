mod error;
mod fetch;
mod source;
#[cfg(test)]
mod test_server;

use std::sync::Arc;

use tokio::sync::{OnceCell, SetError};

pub use error::LoadError;
pub use fetch::fetch_registry;
pub use source::{
    ABILITIES_URL_ENV, DataSource, RACES_URL, RACES_URL_ENV, UNITS_URL, UNITS_URL_ENV,
};

pub use wbc_protocol::AbilityCatalog;
pub use wbc_units::{RaceSet, UnitRegistry, UnitTable, derive_races};

/// Loads the unit registry once and hands out shared handles to it.
///
/// Concurrent first callers wait on a single fetch. A failed load leaves the
/// loader empty, so the next call fetches again.
pub struct UnitLoader {
    source: DataSource,
    abilities: Option<AbilityCatalog>,
    registry: OnceCell<Arc<UnitRegistry>>,
}

impl UnitLoader {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            abilities: None,
            registry: OnceCell::new(),
        }
    }

    /// Override ability text per unit id
    pub fn with_abilities(mut self, abilities: AbilityCatalog) -> Self {
        self.abilities = Some(abilities);
        self
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// The registry, fetched on first use
    pub async fn registry(&self) -> Result<Arc<UnitRegistry>, LoadError> {
        self.registry
            .get_or_try_init(|| async {
                fetch_registry(&self.source, self.abilities.as_ref())
                    .await
                    .map(Arc::new)
                    .inspect_err(|e| {
                        tracing::warn!(error = %e, "Unit dataset failed to load");
                    })
            })
            .await
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.registry.initialized()
    }
}

impl Default for UnitLoader {
    fn default() -> Self {
        Self::new(DataSource::from_env())
    }
}

static SHARED: OnceCell<UnitLoader> = OnceCell::const_new();

async fn shared_loader() -> &'static UnitLoader {
    SHARED.get_or_init(|| async { UnitLoader::default() }).await
}

/// Install the loader behind [`load_registry`] before its first use.
///
/// Gives the loader back if the session-wide one is already in place.
pub fn init_shared(loader: UnitLoader) -> Result<(), UnitLoader> {
    SHARED.set(loader).map_err(|e| match e {
        SetError::AlreadyInitializedError(loader) | SetError::InitializingError(loader) => loader,
    })
}

/// Session-wide registry, fetched from the default (or env-overridden) source
pub async fn load_registry() -> Result<Arc<UnitRegistry>, LoadError> {
    shared_loader().await.registry().await
}

/// Every playable unit of the session-wide registry
pub async fn load_units() -> Result<UnitTable, LoadError> {
    Ok(load_registry().await?.units().clone())
}

/// Race directory of the session-wide registry
pub async fn load_races() -> Result<RaceSet, LoadError> {
    Ok(load_registry().await?.races().clone())
}
