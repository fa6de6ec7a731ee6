//! Expressed-attribute selector.

use crate::state::AppState;
use dioxus::prelude::*;

/// Dropdown selector for the expressed attribute.
///
/// Only writes the `expressed` signal; the app's effect runs the actual
/// attribute-change orchestration against the dashboard.
#[component]
pub fn AttributeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.expressed)();
    let attributes = (state.attributes)();

    let on_change = move |evt: Event<FormData>| {
        state.expressed.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Indicator: "
                select {
                    onchange: on_change,
                    for attribute in attributes {
                        option {
                            key: "{attribute.code}",
                            value: "{attribute.code}",
                            selected: current == attribute.code,
                            "{attribute.label}"
                        }
                    }
                }
            }
        }
    }
}
