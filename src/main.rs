use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use whatslly_probe::config::ProbeConfig;
use whatslly_probe::error::Result;
use whatslly_probe::services::checks::CheckName;
use whatslly_probe::WhatsllyProbe;

#[derive(Parser, Debug)]
#[command(name = "whatslly-probe")]
#[command(about = "Checks the regional Whatslly API endpoints")]
struct Cli {
    #[arg(long, env = "WHATSLLY_PROBE_CONFIG")]
    config: Option<String>,

    #[arg(long, help = "Number of requests issued by the load check")]
    iterations: Option<usize>,

    #[arg(long, value_enum, help = "Run a single check (default: all)")]
    check: Option<CheckName>,
}

fn load_config(cli: &Cli) -> Result<ProbeConfig> {
    let mut config = match &cli.config {
        Some(path) => ProbeConfig::from_file(path)?,
        None => ProbeConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.load_iterations = iterations;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,whatslly_probe=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let cli = Cli::parse();

    let probe = WhatsllyProbe::from_config(load_config(&cli)?)?;
    let passed = match cli.check {
        Some(name) => {
            let report = probe.run(name).await;
            println!("{report}");
            report.passed
        }
        None => {
            let report = probe.run_all().await;
            println!("{report}");
            report.passed()
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn iterations_flag_overrides_config_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), json!({"load_iterations": 150}).to_string()).unwrap();
        let path = tmp.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["whatslly-probe", "--config", path]).unwrap();
        assert_eq!(load_config(&cli).unwrap().load_iterations, 150);

        let cli =
            Cli::try_parse_from(["whatslly-probe", "--config", path, "--iterations", "20"]).unwrap();
        assert_eq!(load_config(&cli).unwrap().load_iterations, 20);
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["whatslly-probe", "--check", "host-status-valid"]).unwrap();
        assert_eq!(cli.check, Some(CheckName::HostStatusValid));
        let config = load_config(&Cli {
            config: None,
            ..cli
        })
        .unwrap();
        assert_eq!(config, ProbeConfig::default());
    }
}
