//! Data processing for state health-indicator records.
//!
//! This crate handles transforming parsed indicator rows and region records
//! into the joined, classified form the map and chart render from.

pub mod join;
pub mod rank;
pub mod scale;
