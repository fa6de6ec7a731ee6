//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use uhi_cdc::attribute::AttributeDescriptor;

/// Shared application state for the health-map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading its data sources
    pub loading: Signal<bool>,
    /// Error message if something went wrong (fatal: no charts below it)
    pub error_msg: Signal<Option<String>>,
    /// Currently expressed attribute code
    pub expressed: Signal<String>,
    /// Description of the expressed attribute, shown verbatim
    pub description: Signal<String>,
    /// Selectable attributes, in catalog order
    pub attributes: Signal<Vec<AttributeDescriptor>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            expressed: Signal::new(String::new()),
            description: Signal::new(String::new()),
            attributes: Signal::new(Vec::new()),
        }
    }
}
