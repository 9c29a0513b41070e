// crates/streetfind-core/src/config.rs
use std::env;

/// Public endpoint of the French national address database (BAN).
pub const DEFAULT_ENDPOINT: &str = "https://api-adresse.data.gouv.fr/search/";

/// Maximum number of features requested per search.
pub const DEFAULT_LIMIT: u16 = 50;

pub const ENV_ENDPOINT: &str = "STREETFIND_ENDPOINT";
pub const ENV_LIMIT: &str = "STREETFIND_LIMIT";

/// Settings for one geocoder + pipeline pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Address-search endpoint queried with `GET`.
    pub endpoint: String,
    /// Result cap sent as `limit`.
    pub limit: u16,
    /// Prepended to the user's input to form the full street name.
    pub street_prefix: String,
    /// Value of the `index` parameter.
    pub index: String,
    /// Value of the `type` parameter and the feature type kept by the filter.
    pub street_type: String,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            street_prefix: "rue ".to_string(),
            index: "address".to_string(),
            street_type: "street".to_string(),
            user_agent: concat!("streetfind/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SearchConfig {
    /// Defaults, overridden by `STREETFIND_ENDPOINT` and `STREETFIND_LIMIT`.
    ///
    /// Unparseable or zero limits are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = env::var(ENV_ENDPOINT) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.endpoint = endpoint.to_string();
            }
        }
        if let Ok(limit) = env::var(ENV_LIMIT) {
            match limit.trim().parse::<u16>() {
                Ok(n) if n > 0 => config.limit = n,
                _ => tracing::warn!(value = %limit, "ignoring invalid {ENV_LIMIT}"),
            }
        }
        config
    }

    /// The full street name searched for, e.g. `"rue Victor Hugo"`.
    pub fn full_street_name(&self, street_name: &str) -> String {
        format!("{}{}", self.street_prefix, street_name)
    }
}
