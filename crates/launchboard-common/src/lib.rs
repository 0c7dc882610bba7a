//! launchboard-common — Shared error taxonomy used across all Launchboard crates.

pub mod error;

pub use error::{LaunchboardError, Result};
