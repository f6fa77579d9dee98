use std::path::Path;
use std::sync::Arc;

use crate::config::ProbeConfig;
use crate::error::Result;
use crate::interfaces::fetcher::Fetcher;
use crate::providers::http::HttpFetcher;
use crate::services::checks::{CheckName, ProbeChecks};
use crate::services::suite::{CheckReport, ProbeSuite, SuiteReport};

pub struct WhatsllyProbe {
    suite: ProbeSuite,
}

impl WhatsllyProbe {
    pub fn from_config(config: ProbeConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = Arc::new(HttpFetcher::new(config.timeout_seconds)?);
        Ok(Self::with_fetcher(fetcher, &config))
    }

    pub fn from_config_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = ProbeConfig::from_file(path)?;
        Self::from_config(config)
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, config: &ProbeConfig) -> Self {
        Self {
            suite: ProbeSuite::new(ProbeChecks::new(fetcher, config)),
        }
    }

    pub fn checks(&self) -> &ProbeChecks {
        self.suite.checks()
    }

    pub async fn run(&self, name: CheckName) -> CheckReport {
        self.suite.run(name).await
    }

    pub async fn run_all(&self) -> SuiteReport {
        self.suite.run_all().await
    }
}
