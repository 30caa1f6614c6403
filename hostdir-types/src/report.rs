use serde::{Deserialize, Serialize};

/// Outcome of one validation run over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: ReportStatus,

    pub plans_checked: u64,

    #[serde(default)]
    pub violations: Vec<String>,
}

impl ValidationReport {
    pub fn new(plans_checked: u64, violations: Vec<String>) -> Self {
        let status = if violations.is_empty() {
            ReportStatus::Pass
        } else {
            ReportStatus::Fail
        };
        Self {
            status,
            plans_checked,
            violations,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == ReportStatus::Pass
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pass,
    Fail,
}
