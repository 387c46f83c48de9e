//! Core data models for the contribution projection engine.
//!
//! This module contains all the domain models used throughout the engine.

mod check_report;
mod paystub;
mod projection;

pub use check_report::CheckReport;
pub use paystub::{PAYSTUB_FIELDS, Paystub};
pub use projection::{ContributionLimits, ProjectedResult};
