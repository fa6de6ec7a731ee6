//! Coordination core for the indicator dashboard.
//!
//! This crate owns the shared "expressed attribute" state, the hover
//! highlight state machine, and the orchestration that keeps the map and
//! bar chart consistent. It has no rendering dependencies: the views are
//! traits, so the whole crate is testable against stubs that record calls.

pub mod dashboard;
pub mod highlight;
pub mod view_state;
pub mod views;
