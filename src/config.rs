use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ProbeError, Result};
use crate::urls::{Region, UrlBuilder, DEFAULT_DOMAIN, DEFAULT_URL_PREFIX};

pub const DEFAULT_LOAD_ITERATIONS: usize = 350;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub url_prefix: String,
    pub domain: String,
    pub regions: Vec<Region>,
    pub primary_region: Region,
    pub load_iterations: usize,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
            regions: Region::ALL.to_vec(),
            primary_region: Region::Us1,
            load_iterations: DEFAULT_LOAD_ITERATIONS,
            timeout_seconds: None,
        }
    }
}

impl ProbeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ProbeError::Config(e.to_string()))?;
        let config: ProbeConfig =
            serde_json::from_str(&content).map_err(|e| ProbeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(ProbeError::Config("regions must not be empty".to_string()));
        }
        if self.load_iterations == 0 {
            return Err(ProbeError::Config(
                "load_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn url_builder(&self) -> UrlBuilder {
        UrlBuilder::new(self.url_prefix.clone(), self.domain.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ProbeConfig =
            serde_json::from_value(json!({"load_iterations": 150})).unwrap();
        assert_eq!(config.load_iterations, 150);
        assert_eq!(config.url_prefix, "https://api-");
        assert_eq!(config.regions, Region::ALL.to_vec());
        assert_eq!(config.primary_region, Region::Us1);
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut config = ProbeConfig::default();
        assert!(config.validate().is_ok());

        config.regions.clear();
        assert!(matches!(config.validate(), Err(ProbeError::Config(_))));

        let config = ProbeConfig {
            load_iterations: 0,
            ..ProbeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ProbeError::Config(_))));
    }
}
