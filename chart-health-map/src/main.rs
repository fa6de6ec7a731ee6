//! US Health-Indicator Map
//!
//! Coordinated choropleth + ranked bar chart over CDC alcohol indicators,
//! with an attribute selector and a cross-view hover label.
//!
//! Data flow:
//! 1. On mount: fetch the indicator CSV and the states TopoJSON. The join
//!    and initial render are gated on **both** arriving -- the pipeline
//!    runs exactly once per page lifecycle, never on partial data.
//! 2. Rows are joined into region records; the dashboard owns the joined
//!    records, the expressed attribute, and the classification scale.
//! 3. Selector changes flow through the `expressed` signal into the
//!    dashboard's attribute-change orchestration.
//! 4. Hover events come back from D3 through window callbacks into the
//!    highlight coordinator.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;

use uhi_cdc::attribute::AttributeCatalog;
use uhi_cdc::indicator::IndicatorRow;
use uhi_cdc::region::regions_from_topojson;
use uhi_chart_ui::components::{
    AttributeSelector, ChartContainer, ChartHeader, DescriptionPanel, ErrorDisplay,
    LoadingSpinner,
};
use uhi_chart_ui::fetch::fetch_text;
use uhi_chart_ui::js_bridge;
use uhi_chart_ui::state::AppState;
use uhi_chart_ui::views::{D3BarChart, D3Choropleth, D3HighlightSink};
use uhi_data::join::join_rows;
use uhi_data::scale::ScaleConfig;
use uhi_engine::dashboard::Dashboard;

/// DOM ids for the D3 chart containers.
const MAP_CONTAINER_ID: &str = "health-map";
const BARS_CONTAINER_ID: &str = "health-bars";

/// Data sources, served from the app's assets directory.
const INDICATOR_CSV_URL: &str = "assets/data/cdc_alcohol_by_state.csv";
const STATES_TOPOJSON_URL: &str = "assets/data/ne_states_dc.topojson";

/// Key of the states layer inside the TopoJSON `objects` table.
const STATES_OBJECT_KEY: &str = "states";

type AppDashboard = Dashboard<D3Choropleth, D3BarChart, D3HighlightSink>;
type SharedDashboard = Rc<RefCell<AppDashboard>>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("health-map-root"))
        .launch(App);
}

/// Register the hover callbacks the D3 layer invokes. The closures forward
/// into the dashboard's highlight coordinator and live for the whole page
/// lifecycle.
fn register_hover_callbacks(dashboard: &SharedDashboard) {
    let enter = {
        let dashboard = dashboard.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |code: JsValue| {
            if let Some(code) = code.as_string() {
                dashboard.borrow_mut().hover_enter(&code);
            }
        })
    };
    let leave = {
        let dashboard = dashboard.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |code: JsValue| {
            if let Some(code) = code.as_string() {
                dashboard.borrow_mut().hover_leave(&code);
            }
        })
    };
    let global = js_sys::global();
    let _ = js_sys::Reflect::set(&global, &JsValue::from_str("__uhiHoverEnter"), enter.as_ref());
    let _ = js_sys::Reflect::set(&global, &JsValue::from_str("__uhiHoverLeave"), leave.as_ref());
    enter.forget();
    leave.forget();
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut dashboard: Signal<Option<SharedDashboard>> = use_signal(|| None);

    // ─── Effect 1: fetch both sources once, then join, build, render ───
    use_effect(move || {
        js_bridge::init_charts();

        spawn(async move {
            // Either fetch failing is terminal for the visualization.
            let csv_text = match fetch_text(INDICATOR_CSV_URL).await {
                Ok(text) => text,
                Err(e) => {
                    state.error_msg.set(Some(e));
                    state.loading.set(false);
                    return;
                }
            };
            let topology = match fetch_text(STATES_TOPOJSON_URL).await {
                Ok(text) => text,
                Err(e) => {
                    state.error_msg.set(Some(e));
                    state.loading.set(false);
                    return;
                }
            };

            // Both sources are in hand; the pipeline below runs once.
            let rows = match IndicatorRow::parse_indicator_csv(&csv_text) {
                Ok(rows) => rows,
                Err(e) => {
                    state.error_msg.set(Some(format!("indicator data: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };
            let mut regions = match regions_from_topojson(&topology, STATES_OBJECT_KEY) {
                Ok(regions) => regions,
                Err(e) => {
                    state.error_msg.set(Some(format!("geometry data: {}", e)));
                    state.loading.set(false);
                    return;
                }
            };

            let catalog = AttributeCatalog::cdc_alcohol();
            let report = join_rows(&rows, &mut regions, &catalog);
            info!(
                "joined {} rows ({} dropped, {} duplicate)",
                report.matched, report.dropped_rows, report.duplicate_rows
            );

            let map = D3Choropleth::new(MAP_CONTAINER_ID, topology, STATES_OBJECT_KEY);
            let bars = D3BarChart::new(BARS_CONTAINER_ID);
            let mut board = Dashboard::new(
                catalog,
                regions,
                ScaleConfig::default(),
                map,
                bars,
                D3HighlightSink::default(),
            );
            board.render();

            let expressed = board.expressed().to_string();
            let description = board
                .catalog()
                .get(&expressed)
                .map(|d| d.description.clone())
                .unwrap_or_default();
            state.attributes.set(board.catalog().descriptors().to_vec());
            state.expressed.set(expressed);
            state.description.set(description);

            let shared: SharedDashboard = Rc::new(RefCell::new(board));
            register_hover_callbacks(&shared);
            dashboard.set(Some(shared));
            state.loading.set(false);
        });
    });

    // ─── Effect 2: attribute-change orchestration on selector change ───
    use_effect(move || {
        let expressed = (state.expressed)();
        if expressed.is_empty() {
            return;
        }
        let shared = match dashboard() {
            Some(shared) => shared,
            None => return,
        };
        let mut board = shared.borrow_mut();
        if board.expressed() == expressed {
            return;
        }
        match board.set_attribute(&expressed) {
            Ok(descriptor) => {
                let description = descriptor.description.clone();
                drop(board);
                state.description.set(description);
            }
            Err(e) => {
                // Rejected at the ViewState boundary: snap the selector
                // back to the prior valid state.
                warn!("{}", e);
                let prior = board.expressed().to_string();
                drop(board);
                state.expressed.set(prior);
            }
        }
    });

    // ─── Render ───
    let attribute_label = {
        let expressed = (state.expressed)();
        (state.attributes)()
            .iter()
            .find(|a| a.code == expressed)
            .map(|a| a.label.clone())
            .unwrap_or_default()
    };

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: "US Alcohol Indicators by State".to_string(),
                    attribute_label: attribute_label.clone(),
                }
                AttributeSelector {}
                DescriptionPanel {}

                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    min_height: 420,
                }
                ChartContainer {
                    id: BARS_CONTAINER_ID.to_string(),
                    min_height: 280,
                }

                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "Hover a state or a bar to highlight it in both views."
                }
            }
        }
    }
}
