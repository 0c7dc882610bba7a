//! launchboard-charts — Chart derivations for the launch dashboard.
//!
//! Two stateless derivations sit on top of the shared immutable
//! [`LaunchTable`](launchboard_data::LaunchTable):
//!
//! - [`OutcomeSummary`]: site selector → grouped outcome pie summary.
//! - [`PayloadCorrelation`]: (site selector, payload range) → filtered
//!   payload-vs-outcome scatter.
//!
//! Both are pure functions of their inputs and the table; each produces
//! a renderer-agnostic [`ChartSpec`] the presentation layer consumes
//! verbatim. There is no dependency between the two derivations, and no
//! I/O anywhere in this crate.

pub mod correlation;
pub mod selection;
pub mod spec;
pub mod summary;

pub use correlation::PayloadCorrelation;
pub use selection::{PayloadRange, SiteSelection, ALL_SITES};
pub use spec::{ChartKind, ChartRow, ChartSpec};
pub use summary::OutcomeSummary;
