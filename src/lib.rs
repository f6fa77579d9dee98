pub mod client;
pub mod config;
pub mod domains;
pub mod error;
pub mod interfaces;
pub mod providers;
pub mod services;
pub mod urls;

pub use crate::client::WhatsllyProbe;
pub use crate::config::ProbeConfig;
pub use crate::error::{ProbeError, Result};
pub use crate::services::checks::CheckName;
pub use crate::services::suite::{CheckReport, SuiteReport};
pub use crate::urls::{Endpoint, Region, UrlBuilder};
