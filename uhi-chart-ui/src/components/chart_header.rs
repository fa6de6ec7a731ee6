//! Header component with app title and the expressed attribute label.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// App title
    pub title: String,
    /// Label of the expressed attribute
    #[props(default = String::new())]
    pub attribute_label: String,
}

/// Header showing the title and which attribute the views express.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.attribute_label.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Showing: {props.attribute_label}"
                }
            }
        }
    }
}
