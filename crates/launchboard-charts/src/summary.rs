//! Outcome-distribution summary: site selector → pie ChartSpec.

use std::sync::Arc;

use launchboard_data::LaunchTable;

use crate::selection::SiteSelection;
use crate::spec::{ChartKind, ChartRow, ChartSpec, OutcomeRateRow, SiteMeanRow};

/// Derives the outcome pie for the current site selection.
///
/// With `ALL` selected, one row per site carries the mean outcome for
/// that site, in the table's first-seen site order. With a specific
/// site selected, exactly two rows carry the failure and success rates,
/// in that fixed order, even when a rate is zero.
#[derive(Debug, Clone)]
pub struct OutcomeSummary {
    table: Arc<LaunchTable>,
}

impl OutcomeSummary {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        Self { table }
    }

    pub fn derive(&self, selection: &SiteSelection) -> ChartSpec {
        match selection {
            SiteSelection::All => self.mean_outcome_by_site(),
            SiteSelection::Site(site) => self.outcome_rates_for_site(site),
        }
    }

    fn mean_outcome_by_site(&self) -> ChartSpec {
        let rows = self
            .table
            .all_sites()
            .iter()
            .map(|site| {
                let records = self.table.records_for_site(site);
                let mean_outcome = if records.is_empty() {
                    0.0
                } else {
                    let outcome_sum: f64 = records.iter().map(|r| r.outcome as f64).sum();
                    outcome_sum / records.len() as f64
                };
                ChartRow::SiteMean(SiteMeanRow {
                    site: site.clone(),
                    mean_outcome,
                })
            })
            .collect();

        ChartSpec::new(
            ChartKind::Pie,
            "Total launches by site",
            &[("values", "mean_outcome"), ("names", "site")],
            rows,
        )
    }

    fn outcome_rates_for_site(&self, site: &str) -> ChartSpec {
        let records = self.table.records_for_site(site);
        let total = records.len();
        let successes = records.iter().filter(|r| r.succeeded()).count();

        // An empty restricted set cannot happen for a known site, but
        // degrade to zero rates rather than dividing by zero.
        let (failure_rate, success_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                (total - successes) as f64 / total as f64,
                successes as f64 / total as f64,
            )
        };

        // Fixed row order; a zero-count outcome still gets its row so
        // the category never silently disappears from the chart.
        let rows = vec![
            ChartRow::OutcomeRate(OutcomeRateRow {
                outcome: 0,
                rate: failure_rate,
            }),
            ChartRow::OutcomeRate(OutcomeRateRow {
                outcome: 1,
                rate: success_rate,
            }),
        ];

        ChartSpec::new(
            ChartKind::Pie,
            format!("Success rate of launches for site {}", site),
            &[("values", "rate"), ("names", "outcome")],
            rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchboard_data::LaunchRecord;

    fn record(site: &str, outcome: u8, payload: f64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            outcome,
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
        }
    }

    fn summary_over(records: Vec<LaunchRecord>) -> OutcomeSummary {
        OutcomeSummary::new(Arc::new(LaunchTable::from_records(records).unwrap()))
    }

    fn three_row_table() -> Vec<LaunchRecord> {
        vec![
            record("A", 1, 500.0, "v1"),
            record("A", 0, 1500.0, "v2"),
            record("B", 1, 3000.0, "v1"),
        ]
    }

    #[test]
    fn all_sites_pie_has_one_row_per_site_in_table_order() {
        let spec = summary_over(three_row_table()).derive(&SiteSelection::All);

        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.title, "Total launches by site");
        assert_eq!(
            spec.rows,
            vec![
                ChartRow::SiteMean(SiteMeanRow {
                    site: "A".to_string(),
                    mean_outcome: 0.5,
                }),
                ChartRow::SiteMean(SiteMeanRow {
                    site: "B".to_string(),
                    mean_outcome: 1.0,
                }),
            ]
        );
    }

    #[test]
    fn all_sites_means_lie_in_unit_interval() {
        let spec = summary_over(three_row_table()).derive(&SiteSelection::All);
        for row in &spec.rows {
            let ChartRow::SiteMean(row) = row else {
                panic!("unexpected row variant");
            };
            assert!((0.0..=1.0).contains(&row.mean_outcome));
        }
    }

    #[test]
    fn single_site_pie_has_fixed_failure_then_success_order() {
        let spec =
            summary_over(three_row_table()).derive(&SiteSelection::Site("A".to_string()));

        assert_eq!(spec.kind, ChartKind::Pie);
        assert!(spec.title.contains('A'));
        assert_eq!(
            spec.rows,
            vec![
                ChartRow::OutcomeRate(OutcomeRateRow {
                    outcome: 0,
                    rate: 0.5,
                }),
                ChartRow::OutcomeRate(OutcomeRateRow {
                    outcome: 1,
                    rate: 0.5,
                }),
            ]
        );
    }

    #[test]
    fn rates_sum_to_one_for_every_site() {
        let summary = summary_over(three_row_table());
        let table = LaunchTable::from_records(three_row_table()).unwrap();
        for site in table.all_sites() {
            let spec = summary.derive(&SiteSelection::Site(site.clone()));
            assert_eq!(spec.rows.len(), 2);
            let total: f64 = spec
                .rows
                .iter()
                .map(|row| match row {
                    ChartRow::OutcomeRate(r) => r.rate,
                    other => panic!("unexpected row variant: {:?}", other),
                })
                .sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_count_outcome_still_appears_as_zero_row() {
        let summary = summary_over(vec![
            record("B", 1, 3000.0, "v1"),
            record("B", 1, 4000.0, "v1"),
        ]);
        let spec = summary.derive(&SiteSelection::Site("B".to_string()));

        assert_eq!(
            spec.rows,
            vec![
                ChartRow::OutcomeRate(OutcomeRateRow {
                    outcome: 0,
                    rate: 0.0,
                }),
                ChartRow::OutcomeRate(OutcomeRateRow {
                    outcome: 1,
                    rate: 1.0,
                }),
            ]
        );
    }

    #[test]
    fn per_site_summary_is_invariant_under_row_permutation() {
        let forward = summary_over(vec![
            record("A", 1, 500.0, "v1"),
            record("A", 0, 1500.0, "v2"),
            record("A", 0, 2500.0, "v1"),
        ]);
        let reversed = summary_over(vec![
            record("A", 0, 2500.0, "v1"),
            record("A", 0, 1500.0, "v2"),
            record("A", 1, 500.0, "v1"),
        ]);

        let selection = SiteSelection::Site("A".to_string());
        assert_eq!(forward.derive(&selection), reversed.derive(&selection));
    }
}
