//! launchboard-data — Launch-record dataset access for Launchboard.
//!
//! Loads the launch-record CSV once at startup into an immutable
//! [`LaunchTable`] and exposes the read-only queries the chart
//! derivations are built on: the ordered set of launch sites, per-site
//! record lookup, and the full record sequence.
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard_data::LaunchTable;
//!
//! fn main() -> launchboard_common::Result<()> {
//!     let table = LaunchTable::load_csv("data/spacex_launch_dash.csv")?;
//!
//!     for site in table.all_sites() {
//!         println!("{}: {} launches", site, table.records_for_site(site).len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod record;
pub mod table;

pub use record::LaunchRecord;
pub use table::LaunchTable;
