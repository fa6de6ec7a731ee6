//! Rendering seams. The engine drives these traits; the chart-ui crate
//! implements them over the D3.js bridge, and tests implement them with
//! recording stubs.

use uhi_cdc::region::RegionRecord;
use uhi_data::scale::ClassificationScale;

/// The geographic view: one shape per region, filled by the scale.
pub trait ChoroplethView {
    /// Draw all region shapes from scratch.
    fn render(&mut self, regions: &[RegionRecord], scale: &ClassificationScale);

    /// Restyle existing shapes for a new scale without recreating geometry.
    /// Must be idempotent.
    fn recolor(&mut self, regions: &[RegionRecord], scale: &ClassificationScale);
}

/// The ranked bar view: one bar per region, tallest first.
pub trait RankedBarView {
    /// Draw all bars from scratch for the expressed attribute.
    fn render(&mut self, regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str);

    /// Re-sort, re-size, and re-color existing bars for a new attribute.
    /// Bar colors come from the same scale as the map.
    fn update(&mut self, regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str);
}

/// Where highlight styling and the hover label land. Styling decisions
/// stay behind this trait; the coordinator only decides which region (if
/// any) is emphasized.
pub trait HighlightSink {
    fn apply_highlight(&mut self, code: &str);
    fn clear_highlight(&mut self, code: &str);
    /// Show (or replace) the hover label for a region.
    fn show_label(&mut self, code: &str, name: &str, value_text: &str);
    fn hide_label(&mut self);
}
