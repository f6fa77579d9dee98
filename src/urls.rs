use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_URL_PREFIX: &str = "https://api-";
pub const DEFAULT_DOMAIN: &str = ".whatslly.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us1,
    Br1,
    Eu1,
    St1,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Us1, Region::Br1, Region::Eu1, Region::St1];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us1 => "us1",
            Region::Br1 => "br1",
            Region::Eu1 => "eu1",
            Region::St1 => "st1",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ping,
    Missing,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Ping => "/test/ping.json",
            Endpoint::Missing => "/test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    prefix: String,
    domain: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_URL_PREFIX, DEFAULT_DOMAIN)
    }
}

impl UrlBuilder {
    pub fn new(prefix: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            domain: domain.into(),
        }
    }

    pub fn host(&self, region: Region) -> String {
        format!("{}{}{}", self.prefix, region.as_str(), self.domain)
    }

    pub fn url(&self, region: Region, endpoint: Endpoint) -> String {
        format!("{}{}", self.host(region), endpoint.path())
    }
}
