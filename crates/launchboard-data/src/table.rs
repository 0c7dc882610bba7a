//! The immutable in-memory launch table.

use std::io::Read;
use std::path::Path;

use launchboard_common::{LaunchboardError, Result};
use tracing::{debug, info};

use crate::record::{CsvLaunchRow, LaunchRecord};

/// The full set of launch records, loaded once at startup and read-only
/// for the lifetime of the process.
///
/// Alongside the records themselves the table keeps the ordered set of
/// launch sites, in first-seen order, with no duplicates. Every `site`
/// value in the table appears in that set by construction.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
}

impl LaunchTable {
    /// Build a table from already-parsed records, validating the
    /// dataset invariants. Violations are startup-fatal for callers.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(LaunchboardError::Dataset(
                "launch table is empty".to_string(),
            ));
        }

        for (i, record) in records.iter().enumerate() {
            if record.outcome > 1 {
                return Err(LaunchboardError::Dataset(format!(
                    "row {}: outcome {} is not 0 or 1",
                    i, record.outcome
                )));
            }
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(LaunchboardError::Dataset(format!(
                    "row {}: payload mass {} is not a non-negative number",
                    i, record.payload_mass_kg
                )));
            }
        }

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }

        Ok(Self { records, sites })
    }

    /// Load the launch table from a CSV file on disk.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading launch records from {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let table = Self::from_csv_reader(content.as_bytes())?;

        info!(
            "Loaded {} launch records across {} sites from {:?}",
            table.records.len(),
            table.sites.len(),
            path
        );
        Ok(table)
    }

    /// Parse launch records from any CSV source with headers.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);

        let mut records = Vec::new();
        for result in reader.deserialize::<CsvLaunchRow>() {
            let row = result?;
            records.push(LaunchRecord::from(row));
        }

        Self::from_records(records)
    }

    /// All launch sites in first-seen order, without duplicates.
    pub fn all_sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Records whose site matches exactly; empty for unknown sites.
    pub fn records_for_site(&self, site: &str) -> Vec<&LaunchRecord> {
        self.records.iter().filter(|r| r.site == site).collect()
    }

    pub fn all_records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed (min, max) payload mass. The table is non-empty, so the
    /// extent is always defined.
    pub fn payload_extent(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in &self.records {
            min = min.min(record.payload_mass_kg);
            max = max.max(record.payload_mass_kg);
        }
        (min, max)
    }
}
