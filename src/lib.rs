//! 401(k) Contribution Projection Engine
//!
//! This crate projects a salaried employee's year-end 401(k) contribution
//! status from a single pay-period snapshot, compares actual and projected
//! contributions against IRS annual limits, and flags missed employer-match
//! or true-up conditions.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
