//! Payload-vs-outcome correlation: (site, payload range) → scatter ChartSpec.

use std::sync::Arc;

use launchboard_data::{LaunchRecord, LaunchTable};

use crate::selection::{PayloadRange, SiteSelection};
use crate::spec::{ChartKind, ChartRow, ChartSpec, ScatterRow};

/// Derives the filtered payload scatter for the current selection.
///
/// Source rows are the whole table for `ALL` or the selected site's
/// records otherwise; rows survive when their payload mass falls inside
/// the inclusive range. Surviving rows keep their original relative
/// order, and an empty result is a valid (empty) scatter.
#[derive(Debug, Clone)]
pub struct PayloadCorrelation {
    table: Arc<LaunchTable>,
}

impl PayloadCorrelation {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        Self { table }
    }

    pub fn derive(&self, selection: &SiteSelection, range: &PayloadRange) -> ChartSpec {
        let source: Vec<&LaunchRecord> = match selection {
            SiteSelection::All => self.table.all_records().iter().collect(),
            SiteSelection::Site(site) => self.table.records_for_site(site),
        };

        let rows = source
            .into_iter()
            .filter(|r| range.contains(r.payload_mass_kg))
            .map(|r| {
                ChartRow::Scatter(ScatterRow {
                    outcome: r.outcome,
                    payload_mass_kg: r.payload_mass_kg,
                    booster_category: r.booster_category.clone(),
                })
            })
            .collect();

        let title = match selection {
            SiteSelection::All => {
                "Correlation between payload and success for all sites".to_string()
            }
            SiteSelection::Site(site) => {
                format!("Correlation between payload and success for site {}", site)
            }
        };

        ChartSpec::new(
            ChartKind::Scatter,
            title,
            &[
                ("x", "payload_mass_kg"),
                ("y", "outcome"),
                ("color", "booster_category"),
            ],
            rows,
        )
    }
}
