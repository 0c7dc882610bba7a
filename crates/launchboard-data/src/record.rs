//! A single launch record and its CSV wire form.

use serde::{Deserialize, Serialize};

/// One row of the launch table. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. "CCAFS LC-40".
    pub site: String,
    /// Binary outcome: 0 = failure, 1 = success.
    pub outcome: u8,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Booster version category, used only for color-coding.
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn succeeded(&self) -> bool {
        self.outcome == 1
    }
}

/// One row of the source CSV. Column names follow the upstream
/// spacex_launch_dash.csv export; columns not listed here are ignored.
#[derive(Debug, Deserialize)]
pub struct CsvLaunchRow {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "class")]
    pub outcome: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl From<CsvLaunchRow> for LaunchRecord {
    fn from(row: CsvLaunchRow) -> Self {
        Self {
            site: row.site,
            outcome: row.outcome,
            payload_mass_kg: row.payload_mass_kg,
            booster_category: row.booster_category,
        }
    }
}
