use std::env;
use std::time::Duration;

pub const RACES_URL: &str =
    "https://raw.githubusercontent.com/xandros15/wbc-sg-races/gh-pages/races.json";
pub const UNITS_URL: &str =
    "https://raw.githubusercontent.com/xandros15/wbc-sg-races/gh-pages/units.json";

/// Environment overrides for the document addresses
pub const RACES_URL_ENV: &str = "WBC_RACES_URL";
pub const UNITS_URL_ENV: &str = "WBC_UNITS_URL";
pub const ABILITIES_URL_ENV: &str = "WBC_ABILITIES_URL";

/// Where the race and unit documents are fetched from.
///
/// `abilities_url` points at an optional id to ability text catalog. Without
/// one, flier detection relies on ability text inside the unit document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub races_url: String,
    pub units_url: String,
    pub abilities_url: Option<String>,
    pub timeout: Duration,
}

impl Default for DataSource {
    fn default() -> Self {
        Self {
            races_url: RACES_URL.to_string(),
            units_url: UNITS_URL.to_string(),
            abilities_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl DataSource {
    pub fn new(races_url: impl Into<String>, units_url: impl Into<String>) -> Self {
        Self {
            races_url: races_url.into(),
            units_url: units_url.into(),
            ..Self::default()
        }
    }

    /// Defaults, with `WBC_RACES_URL` / `WBC_UNITS_URL` / `WBC_ABILITIES_URL`
    /// taking precedence when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            races_url: var(RACES_URL_ENV).unwrap_or(defaults.races_url),
            units_url: var(UNITS_URL_ENV).unwrap_or(defaults.units_url),
            abilities_url: var(ABILITIES_URL_ENV).or(defaults.abilities_url),
            timeout: defaults.timeout,
        }
    }

    pub fn with_abilities_url(mut self, url: impl Into<String>) -> Self {
        self.abilities_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
