//! Attribute description panel.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the expressed attribute's catalog description verbatim.
#[component]
pub fn DescriptionPanel() -> Element {
    let state = use_context::<AppState>();
    let description = (state.description)();

    rsx! {
        if !description.is_empty() {
            p {
                style: "margin: 4px 0 8px 0; font-size: 12px; color: #555; line-height: 1.4;",
                "{description}"
            }
        }
    }
}
