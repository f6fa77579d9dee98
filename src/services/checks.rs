use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::interfaces::fetcher::Fetcher;
use crate::urls::{Endpoint, Region, UrlBuilder};

pub const OK_RESPONSE_CODE: u16 = 200;
pub const NOT_FOUND_RESPONSE_CODE: u16 = 404;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckName {
    AllRegionsOk,
    InvalidUrl,
    SuccessStatusValid,
    HostStatusValid,
    Load,
}

impl CheckName {
    pub const ALL: [CheckName; 5] = [
        CheckName::AllRegionsOk,
        CheckName::InvalidUrl,
        CheckName::SuccessStatusValid,
        CheckName::HostStatusValid,
        CheckName::Load,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::AllRegionsOk => "all_regions_ok",
            CheckName::InvalidUrl => "invalid_url",
            CheckName::SuccessStatusValid => "success_status_valid",
            CheckName::HostStatusValid => "host_status_valid",
            CheckName::Load => "load",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn failure(check: CheckName, detail: impl fmt::Display) -> ProbeError {
    ProbeError::Check(format!("{check}: {detail}"))
}

fn expect_eq<T>(check: CheckName, expected: T, actual: T, url: &str) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    if expected == actual {
        return Ok(());
    }
    Err(failure(
        check,
        format!("expected {expected:?} but was {actual:?} for URL = {url}"),
    ))
}

pub struct ProbeChecks {
    fetcher: Arc<dyn Fetcher>,
    urls: UrlBuilder,
    regions: Vec<Region>,
    primary: Region,
    load_iterations: usize,
}

impl ProbeChecks {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &ProbeConfig) -> Self {
        Self {
            fetcher,
            urls: config.url_builder(),
            regions: config.regions.clone(),
            primary: config.primary_region,
            load_iterations: config.load_iterations,
        }
    }

    pub fn load_iterations(&self) -> usize {
        self.load_iterations
    }

    pub async fn run(&self, check: CheckName) -> Result<()> {
        match check {
            CheckName::AllRegionsOk => self.all_regions_ok().await,
            CheckName::InvalidUrl => self.invalid_url().await,
            CheckName::SuccessStatusValid => self.success_status_valid().await,
            CheckName::HostStatusValid => self.host_status_valid().await,
            CheckName::Load => self.load(self.load_iterations).await,
        }
    }

    pub async fn all_regions_ok(&self) -> Result<()> {
        let check = CheckName::AllRegionsOk;
        for region in &self.regions {
            let url = self.urls.url(*region, Endpoint::Ping);
            let code = self.fetcher.get_response_code(&url).await.map_err(|e| {
                warn!(%region, error = %e, "ping request failed");
                failure(check, format!("failed to load URL = {url}"))
            })?;
            expect_eq(check, OK_RESPONSE_CODE, code, &url)?;
        }
        Ok(())
    }

    pub async fn invalid_url(&self) -> Result<()> {
        let check = CheckName::InvalidUrl;
        let url = self.urls.url(self.primary, Endpoint::Missing);
        let code = self.fetcher.get_response_code(&url).await.map_err(|e| {
            warn!(error = %e, "missing-path request failed");
            failure(check, "unexpected error occurred.")
        })?;
        expect_eq(check, NOT_FOUND_RESPONSE_CODE, code, &url)
    }

    pub async fn success_status_valid(&self) -> Result<()> {
        let check = CheckName::SuccessStatusValid;
        let url = self.urls.url(self.primary, Endpoint::Ping);
        let success = self
            .fetcher
            .read_ping(&url)
            .await
            .map_err(|e| {
                warn!(error = %e, "ping body unreadable");
                failure(check, "failed to validate.")
            })?
            .success
            .ok_or_else(|| failure(check, "failed to validate."))?;
        expect_eq(check, true, success, &url)
    }

    pub async fn host_status_valid(&self) -> Result<()> {
        let check = CheckName::HostStatusValid;
        let url = self.urls.url(self.primary, Endpoint::Ping);
        let host = self
            .fetcher
            .read_ping(&url)
            .await
            .map_err(|e| {
                warn!(error = %e, "ping body unreadable");
                failure(check, "failed to validate.")
            })?
            .host
            .ok_or_else(|| failure(check, "failed to validate."))?;
        expect_eq(check, self.urls.host(self.primary), host, &url)
    }

    // Non-200 codes are counted over every iteration; a transport error aborts at once.
    pub async fn load(&self, iterations: usize) -> Result<()> {
        let check = CheckName::Load;
        let url = self.urls.url(self.primary, Endpoint::Ping);
        let mut bad = 0usize;
        for attempt in 0..iterations {
            let code = self.fetcher.get_response_code(&url).await.map_err(|e| {
                warn!(attempt, error = %e, "load request failed");
                failure(check, "failed to validate.")
            })?;
            if code != OK_RESPONSE_CODE {
                debug!(attempt, code, "load request returned non-200");
                bad += 1;
            }
        }
        if bad > 0 {
            return Err(failure(
                check,
                format!("{bad} of {iterations} requests to {url} did not return {OK_RESPONSE_CODE}"),
            ));
        }
        Ok(())
    }
}
