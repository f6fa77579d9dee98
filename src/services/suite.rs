use std::fmt;

use tracing::{info, warn};

use crate::services::checks::{CheckName, ProbeChecks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: CheckName,
    pub passed: bool,
    pub message: Option<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.passed, &self.message) {
            (true, _) => write!(f, "PASS {}", self.name),
            (false, Some(message)) => write!(f, "FAIL {} - {}", self.name, message),
            (false, None) => write!(f, "FAIL {}", self.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub reports: Vec<CheckReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.reports.iter().all(|report| report.passed)
    }

    pub fn failures(&self) -> Vec<&CheckReport> {
        self.reports.iter().filter(|report| !report.passed).collect()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{report}")?;
        }
        write!(
            f,
            "{} passed, {} failed",
            self.reports.len() - self.failures().len(),
            self.failures().len()
        )
    }
}

pub struct ProbeSuite {
    checks: ProbeChecks,
}

impl ProbeSuite {
    pub fn new(checks: ProbeChecks) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> &ProbeChecks {
        &self.checks
    }

    pub async fn run(&self, name: CheckName) -> CheckReport {
        match self.checks.run(name).await {
            Ok(()) => {
                info!(check = %name, "passed");
                CheckReport {
                    name,
                    passed: true,
                    message: None,
                }
            }
            Err(e) => {
                warn!(check = %name, error = %e, "failed");
                CheckReport {
                    name,
                    passed: false,
                    message: Some(e.to_string()),
                }
            }
        }
    }

    pub async fn run_all(&self) -> SuiteReport {
        let mut reports = Vec::with_capacity(CheckName::ALL.len());
        for name in CheckName::ALL {
            reports.push(self.run(name).await);
        }
        SuiteReport { reports }
    }
}
