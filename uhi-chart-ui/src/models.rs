//! Payload structs passed to D3.js as JSON.
//!
//! All structs derive `Serialize` so they can cross the bridge from the
//! Dioxus WASM frontend without hand-built JSON.

use serde::Serialize;

/// Fill assignment for one map shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionFill {
    pub code: String,
    pub color: String,
}

/// One bar, already in ranked order.
///
/// `value` is `None` for a no-data region, which the chart draws as a
/// zero-height bar in the trailing no-data run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarDatum {
    pub code: String,
    pub name: String,
    pub value: Option<f64>,
    pub color: String,
}
