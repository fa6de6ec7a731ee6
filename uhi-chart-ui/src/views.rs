//! Bridge-backed implementations of the engine's view traits.
//!
//! Each view serializes the colors/order/heights the engine computed and
//! hands them to the D3 globals; no classification or ordering decisions
//! are made on the JS side.

use uhi_cdc::region::{RegionRecord, CODE_PROPERTY};
use uhi_data::rank::{axis_max, ranked_indices};
use uhi_data::scale::ClassificationScale;
use uhi_engine::views::{ChoroplethView, HighlightSink, RankedBarView};

use crate::js_bridge;
use crate::models::{BarDatum, RegionFill};

fn fills_json(regions: &[RegionRecord], scale: &ClassificationScale) -> String {
    let fills: Vec<RegionFill> = regions
        .iter()
        .map(|region| RegionFill {
            code: region.code.clone(),
            color: scale.color_for_region(region).to_string(),
        })
        .collect();
    serde_json::to_string(&fills).unwrap_or_default()
}

fn scale_config_json(object_key: &str, scale: &ClassificationScale) -> String {
    serde_json::json!({
        "objectKey": object_key,
        "codeProperty": CODE_PROPERTY,
        "noDataColor": scale.no_data_color(),
        "colors": scale.colors(),
        "breaks": scale.breaks(),
    })
    .to_string()
}

/// Choropleth drawn by D3 into a container div. Owns the raw TopoJSON
/// text; the engine never sees the geometry.
pub struct D3Choropleth {
    container_id: String,
    topology: String,
    object_key: String,
}

impl D3Choropleth {
    pub fn new(container_id: &str, topology: String, object_key: &str) -> Self {
        D3Choropleth {
            container_id: container_id.to_string(),
            topology,
            object_key: object_key.to_string(),
        }
    }
}

impl ChoroplethView for D3Choropleth {
    fn render(&mut self, regions: &[RegionRecord], scale: &ClassificationScale) {
        js_bridge::render_choropleth(
            &self.container_id,
            &self.topology,
            &fills_json(regions, scale),
            &scale_config_json(&self.object_key, scale),
        );
    }

    fn recolor(&mut self, regions: &[RegionRecord], scale: &ClassificationScale) {
        js_bridge::recolor_choropleth(
            &self.container_id,
            &fills_json(regions, scale),
            &scale_config_json(&self.object_key, scale),
        );
    }
}

/// Ranked bar chart drawn by D3 into a container div.
pub struct D3BarChart {
    container_id: String,
}

impl D3BarChart {
    pub fn new(container_id: &str) -> Self {
        D3BarChart {
            container_id: container_id.to_string(),
        }
    }

    fn payload(
        regions: &[RegionRecord],
        scale: &ClassificationScale,
        expressed: &str,
    ) -> (String, String) {
        let bars: Vec<BarDatum> = ranked_indices(regions, expressed)
            .into_iter()
            .map(|i| {
                let region = &regions[i];
                BarDatum {
                    code: region.code.clone(),
                    name: region.name.clone(),
                    value: region.value(expressed).as_f64(),
                    color: scale.color_for_region(region).to_string(),
                }
            })
            .collect();
        let bars_json = serde_json::to_string(&bars).unwrap_or_default();
        let config_json = serde_json::json!({
            "axisMax": axis_max(regions, expressed),
        })
        .to_string();
        (bars_json, config_json)
    }
}

impl RankedBarView for D3BarChart {
    fn render(&mut self, regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str) {
        let (bars_json, config_json) = D3BarChart::payload(regions, scale, expressed);
        js_bridge::render_bar_chart(&self.container_id, &bars_json, &config_json);
    }

    fn update(&mut self, regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str) {
        let (bars_json, config_json) = D3BarChart::payload(regions, scale, expressed);
        js_bridge::update_bar_chart(&self.container_id, &bars_json, &config_json);
    }
}

/// Highlight styling and the floating label, applied across both views by
/// shared class names on the JS side.
#[derive(Default)]
pub struct D3HighlightSink;

impl HighlightSink for D3HighlightSink {
    fn apply_highlight(&mut self, code: &str) {
        js_bridge::set_highlight(code);
    }

    fn clear_highlight(&mut self, code: &str) {
        js_bridge::clear_highlight(code);
    }

    fn show_label(&mut self, code: &str, name: &str, value_text: &str) {
        js_bridge::show_info_label(code, name, value_text);
    }

    fn hide_label(&mut self) {
        js_bridge::hide_info_label();
    }
}
