//! launchboard-web — Web GUI for Launchboard.
//! Provides the launch-records dashboard:
//!   - Launch site selector and payload range slider
//!   - Outcome pie chart (per site, or across all sites)
//!   - Payload-vs-outcome scatter colored by booster category
//!   - JSON chart API consumed by the page

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
