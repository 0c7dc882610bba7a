//! Transient per-request selection state.

use std::fmt;

use launchboard_common::{LaunchboardError, Result};

/// Sentinel value the site selector uses for "every site".
pub const ALL_SITES: &str = "ALL";

/// The site-selector value: all sites, or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw selector value. `"ALL"` means every site; any
    /// other value names a specific site. Whether that site actually
    /// exists is checked at the UI boundary, not here.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SITES {
            Self::All
        } else {
            Self::Site(raw.to_string())
        }
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Site(site) => Some(site),
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SITES),
            Self::Site(site) => f.write_str(site),
        }
    }
}

/// An inclusive payload-mass range in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    min_kg: f64,
    max_kg: f64,
}

impl PayloadRange {
    /// Build a range, rejecting negative bounds and inverted ranges.
    /// Bounds outside the dataset's observed extremes are fine and
    /// simply yield smaller (possibly empty) results downstream.
    pub fn new(min_kg: f64, max_kg: f64) -> Result<Self> {
        if !min_kg.is_finite() || !max_kg.is_finite() {
            return Err(LaunchboardError::InvalidSelection(
                "payload range bounds must be finite".to_string(),
            ));
        }
        if min_kg < 0.0 || max_kg < 0.0 {
            return Err(LaunchboardError::InvalidSelection(format!(
                "payload range [{}, {}] has a negative bound",
                min_kg, max_kg
            )));
        }
        if min_kg > max_kg {
            return Err(LaunchboardError::InvalidSelection(format!(
                "payload range [{}, {}] is inverted",
                min_kg, max_kg
            )));
        }
        Ok(Self { min_kg, max_kg })
    }

    pub fn min_kg(&self) -> f64 {
        self.min_kg
    }

    pub fn max_kg(&self) -> f64 {
        self.max_kg
    }

    /// Inclusive on both ends: boundary payloads are kept.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min_kg && payload_mass_kg <= self.max_kg
    }
}
