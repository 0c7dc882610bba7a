//! Renderer-agnostic chart specifications.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
}

/// One output row of a derivation. Serializes to a flat JSON object
/// with named fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartRow {
    SiteMean(SiteMeanRow),
    OutcomeRate(OutcomeRateRow),
    Scatter(ScatterRow),
}

/// Per-site mean outcome, one row per site ("ALL" pie).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMeanRow {
    pub site: String,
    pub mean_outcome: f64,
}

/// Rate of one outcome value for a single site (per-site pie).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRateRow {
    pub outcome: u8,
    pub rate: f64,
}

/// One filtered launch record (scatter).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterRow {
    pub outcome: u8,
    pub payload_mass_kg: f64,
    pub booster_category: String,
}

/// An abstract chart description: kind, title, data rows, and the
/// mapping of visual channel to row field. Produced by a derivation,
/// consumed verbatim by the presentation layer, never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Visual channel name → row field name.
    pub encoding: BTreeMap<String, String>,
    pub rows: Vec<ChartRow>,
}

impl ChartSpec {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        channels: &[(&str, &str)],
        rows: Vec<ChartRow>,
    ) -> Self {
        let encoding = channels
            .iter()
            .map(|(channel, field)| (channel.to_string(), field.to_string()))
            .collect();
        Self {
            kind,
            title: title.into(),
            encoding,
            rows,
        }
    }
}
