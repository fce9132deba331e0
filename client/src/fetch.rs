use wbc_protocol::{AbilityCatalog, parse_abilities};
use wbc_units::{DataError, UnitRegistry};

use crate::error::LoadError;
use crate::source::{ABILITIES_URL_ENV, DataSource};

/// Fetch the documents concurrently and join them into a registry.
///
/// A fetched ability catalog is layered under `abilities`, so caller entries
/// win for the same id.
pub async fn fetch_registry(
    source: &DataSource,
    abilities: Option<&AbilityCatalog>,
) -> Result<UnitRegistry, LoadError> {
    let http = reqwest::Client::builder()
        .timeout(source.timeout)
        .build()
        .map_err(|e| LoadError::DataUnavailable {
            url: source.races_url.clone(),
            source: e,
        })?;

    tracing::info!(
        races_url = %source.races_url,
        units_url = %source.units_url,
        abilities_url = ?source.abilities_url,
        "Fetching unit dataset"
    );

    let (races_body, units_body, abilities_body) = tokio::try_join!(
        fetch_document(&http, &source.races_url),
        fetch_document(&http, &source.units_url),
        fetch_optional(&http, source.abilities_url.as_deref()),
    )?;

    let catalog = layer_abilities(abilities_body.as_deref(), abilities)?;
    let registry = UnitRegistry::from_json(&races_body, &units_body, catalog.as_ref())?;

    let fliers = registry.units().iter().filter(|unit| unit.is_flier()).count();
    tracing::info!(
        units = registry.units().len(),
        races = registry.races().len(),
        fliers,
        "Unit dataset loaded"
    );
    if fliers == 0 && !registry.units().is_empty() {
        tracing::warn!(
            env = ABILITIES_URL_ENV,
            "No unit has flying ability text, air matchups will be empty"
        );
    }

    Ok(registry)
}

fn layer_abilities(
    body: Option<&str>,
    overrides: Option<&AbilityCatalog>,
) -> Result<Option<AbilityCatalog>, LoadError> {
    let Some(body) = body else {
        return Ok(overrides.cloned());
    };

    let mut catalog = parse_abilities(body).map_err(DataError::from)?;
    if let Some(overrides) = overrides {
        catalog.merge(overrides);
    }
    Ok(Some(catalog))
}

async fn fetch_optional(
    http: &reqwest::Client,
    url: Option<&str>,
) -> Result<Option<String>, LoadError> {
    match url {
        Some(url) => fetch_document(http, url).await.map(Some),
        None => Ok(None),
    }
}

async fn fetch_document(http: &reqwest::Client, url: &str) -> Result<String, LoadError> {
    let unavailable = |e: reqwest::Error| LoadError::DataUnavailable {
        url: url.to_string(),
        source: e,
    };

    let response = http
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(unavailable)?;

    let body = response.text().await.map_err(unavailable)?;
    tracing::debug!(url, bytes = body.len(), "Fetched dataset document");

    Ok(body)
}
