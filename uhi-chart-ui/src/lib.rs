//! Shared Dioxus components and D3.js bridge for the health-map app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `views`: bridge-backed implementations of the engine's view traits
//! - `fetch`: async text fetch over web-sys
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (selector, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod models;
pub mod state;
pub mod views;
