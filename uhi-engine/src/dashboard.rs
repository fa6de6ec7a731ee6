//! Orchestration of the map, bar chart, and hover label.

use log::info;
use uhi_cdc::attribute::{AttributeCatalog, AttributeDescriptor};
use uhi_cdc::indicator::IndicatorValue;
use uhi_cdc::region::RegionRecord;
use uhi_data::scale::{ClassificationScale, ScaleConfig};

use crate::highlight::HighlightCoordinator;
use crate::view_state::{InvalidAttribute, ViewState};
use crate::views::{ChoroplethView, HighlightSink, RankedBarView};

/// Label text for one value: one decimal place, or "No data".
pub fn format_value(value: IndicatorValue) -> String {
    match value {
        IndicatorValue::Recorded(v) => format!("{:.1}", v),
        IndicatorValue::NoData => "No data".to_string(),
    }
}

/// Owns the joined region records, the expressed-attribute state, and the
/// current classification scale, and drives all three views through every
/// state transition. Views hold no attribute state of their own; they
/// receive the records and scale as parameters on each call, so they can
/// never disagree about the expressed attribute.
pub struct Dashboard<M, B, H> {
    catalog: AttributeCatalog,
    regions: Vec<RegionRecord>,
    config: ScaleConfig,
    view_state: ViewState,
    scale: ClassificationScale,
    highlight: HighlightCoordinator,
    map: M,
    bars: B,
    sink: H,
}

impl<M, B, H> Dashboard<M, B, H>
where
    M: ChoroplethView,
    B: RankedBarView,
    H: HighlightSink,
{
    /// Build a dashboard over joined region records. The expressed
    /// attribute starts at the catalog default and the initial scale is
    /// computed immediately; nothing is rendered until [`render`].
    ///
    /// [`render`]: Dashboard::render
    pub fn new(
        catalog: AttributeCatalog,
        regions: Vec<RegionRecord>,
        config: ScaleConfig,
        map: M,
        bars: B,
        sink: H,
    ) -> Self {
        let view_state = ViewState::new(&catalog);
        let scale = ClassificationScale::build(&regions, view_state.current(), &config);
        Dashboard {
            catalog,
            regions,
            config,
            view_state,
            scale,
            highlight: HighlightCoordinator::new(),
            map,
            bars,
            sink,
        }
    }

    /// Initial render of both views from the current records and scale.
    pub fn render(&mut self) {
        info!(
            "rendering {} regions, expressed attribute {}",
            self.regions.len(),
            self.view_state.current()
        );
        self.map.render(&self.regions, &self.scale);
        self.bars
            .render(&self.regions, &self.scale, self.view_state.current());
    }

    /// Switch the expressed attribute.
    ///
    /// An invalid code is rejected before any other step runs: no scale
    /// rebuild, no view calls, prior state intact. On success the scale is
    /// rebuilt and both views are updated against it before this returns,
    /// so no partially-updated attribute is ever observable. Returns the
    /// descriptor whose description the caller displays verbatim.
    pub fn set_attribute(&mut self, code: &str) -> Result<&AttributeDescriptor, InvalidAttribute> {
        self.view_state.set_expressed(code, &self.catalog)?;
        self.scale = ClassificationScale::build(&self.regions, code, &self.config);
        self.bars
            .update(&self.regions, &self.scale, self.view_state.current());
        self.map.recolor(&self.regions, &self.scale);

        // An active hover label must not keep showing the old attribute.
        if let Some(active) = self.highlight.active().map(str::to_string) {
            if let Some(region) = self.regions.iter().find(|r| r.code == active) {
                let text = format_value(region.value(code));
                self.sink.show_label(&region.code, &region.name, &text);
            }
        }

        match self.catalog.get(code) {
            Some(descriptor) => Ok(descriptor),
            None => Err(InvalidAttribute(code.to_string())),
        }
    }

    /// Pointer entered a region shape or bar. Unknown codes are ignored.
    pub fn hover_enter(&mut self, code: &str) {
        let region = match self.regions.iter().find(|r| r.code == code) {
            Some(region) => region,
            None => return,
        };
        let text = format_value(region.value(self.view_state.current()));
        self.highlight
            .enter(&region.code, &region.name, &text, &mut self.sink);
    }

    /// Pointer left a region shape or bar.
    pub fn hover_leave(&mut self, code: &str) {
        self.highlight.leave(code, &mut self.sink);
    }

    pub fn expressed(&self) -> &str {
        self.view_state.current()
    }

    pub fn regions(&self) -> &[RegionRecord] {
        &self.regions
    }

    pub fn scale(&self) -> &ClassificationScale {
        &self.scale
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    pub fn active_highlight(&self) -> Option<&str> {
        self.highlight.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use uhi_cdc::attribute::AttributeDescriptor;
    use uhi_cdc::region::GeometryHandle;
    use uhi_data::rank::ranked_indices;

    type Log = Rc<RefCell<Vec<String>>>;

    struct StubMap(Log);
    impl ChoroplethView for StubMap {
        fn render(&mut self, regions: &[RegionRecord], scale: &ClassificationScale) {
            self.0
                .borrow_mut()
                .push(format!("map.render:{}:{}", scale.attribute(), regions.len()));
        }
        fn recolor(&mut self, _regions: &[RegionRecord], scale: &ClassificationScale) {
            self.0
                .borrow_mut()
                .push(format!("map.recolor:{}", scale.attribute()));
        }
    }

    struct StubBars(Log);
    impl RankedBarView for StubBars {
        fn render(&mut self, _regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str) {
            assert_eq!(scale.attribute(), expressed);
            self.0.borrow_mut().push(format!("bars.render:{}", expressed));
        }
        fn update(&mut self, _regions: &[RegionRecord], scale: &ClassificationScale, expressed: &str) {
            assert_eq!(scale.attribute(), expressed);
            self.0.borrow_mut().push(format!("bars.update:{}", expressed));
        }
    }

    struct StubSink(Log);
    impl HighlightSink for StubSink {
        fn apply_highlight(&mut self, code: &str) {
            self.0.borrow_mut().push(format!("apply:{}", code));
        }
        fn clear_highlight(&mut self, code: &str) {
            self.0.borrow_mut().push(format!("clear:{}", code));
        }
        fn show_label(&mut self, code: &str, _name: &str, value_text: &str) {
            self.0
                .borrow_mut()
                .push(format!("label:{}:{}", code, value_text));
        }
        fn hide_label(&mut self) {
            self.0.borrow_mut().push("hide".to_string());
        }
    }

    fn catalog_xy() -> AttributeCatalog {
        AttributeCatalog::new(vec![
            AttributeDescriptor::new("x", "X", "about x"),
            AttributeDescriptor::new("y", "Y", "about y"),
        ])
    }

    /// Regions A/B/C with x = 10/30/20 and C missing y.
    fn scenario_regions() -> Vec<RegionRecord> {
        let rows = [
            ("A", Some(10.0), Some(1.0)),
            ("B", Some(30.0), Some(2.0)),
            ("C", Some(20.0), None),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, (code, x, y))| {
                let mut region = RegionRecord::new(code, code, GeometryHandle(i));
                let to_value = |v: &Option<f64>| match v {
                    Some(v) => IndicatorValue::Recorded(*v),
                    None => IndicatorValue::NoData,
                };
                region.values.insert("x".to_string(), to_value(x));
                region.values.insert("y".to_string(), to_value(y));
                region
            })
            .collect()
    }

    fn dashboard(log: &Log) -> Dashboard<StubMap, StubBars, StubSink> {
        Dashboard::new(
            catalog_xy(),
            scenario_regions(),
            ScaleConfig::default(),
            StubMap(log.clone()),
            StubBars(log.clone()),
            StubSink(log.clone()),
        )
    }

    #[test]
    fn test_initial_render_drives_both_views() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        assert_eq!(dashboard.expressed(), "x");
        dashboard.render();
        assert_eq!(
            *log.borrow(),
            vec!["map.render:x:3", "bars.render:x"]
        );
    }

    #[test]
    fn test_attribute_change_updates_both_views_before_returning() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        dashboard.render();
        log.borrow_mut().clear();

        let descriptor = dashboard.set_attribute("y").unwrap();
        assert_eq!(descriptor.description, "about y");
        assert_eq!(dashboard.expressed(), "y");
        assert_eq!(dashboard.scale().attribute(), "y");
        assert_eq!(*log.borrow(), vec!["bars.update:y", "map.recolor:y"]);
    }

    #[test]
    fn test_invalid_attribute_is_rejected_with_no_side_effects() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        dashboard.render();
        log.borrow_mut().clear();
        let scale_before = dashboard.scale().clone();

        let err = dashboard.set_attribute("bogus").unwrap_err();
        assert_eq!(err, InvalidAttribute("bogus".to_string()));
        assert_eq!(dashboard.expressed(), "x");
        assert_eq!(dashboard.scale(), &scale_before);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_hover_flows_through_coordinator() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        dashboard.render();
        log.borrow_mut().clear();

        dashboard.hover_enter("B");
        assert_eq!(dashboard.active_highlight(), Some("B"));
        dashboard.hover_enter("C");
        dashboard.hover_leave("C");
        dashboard.hover_leave("C"); // stale, no-op
        dashboard.hover_enter("ZZ"); // unknown, ignored
        assert_eq!(
            *log.borrow(),
            vec![
                "apply:B",
                "label:B:30.0",
                "clear:B",
                "apply:C",
                "label:C:20.0",
                "clear:C",
                "hide",
            ]
        );
        assert_eq!(dashboard.active_highlight(), None);
    }

    #[test]
    fn test_attribute_change_refreshes_active_label() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        dashboard.render();
        dashboard.hover_enter("C");
        log.borrow_mut().clear();

        dashboard.set_attribute("y").unwrap();
        // C has no y value: the refreshed label says so.
        assert_eq!(
            *log.borrow(),
            vec!["bars.update:y", "map.recolor:y", "label:C:No data"]
        );
        assert_eq!(dashboard.active_highlight(), Some("C"));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut dashboard = dashboard(&log);
        dashboard.render();

        // Expressed x over {10, 20, 30}: quantile boundaries at the
        // 20/40/60/80th percentiles.
        assert_eq!(dashboard.scale().breaks(), &[14.0, 18.0, 22.0, 26.0]);

        // Bar order is B, C, A.
        let order = ranked_indices(dashboard.regions(), "x");
        let codes: Vec<&str> = order
            .iter()
            .map(|&i| dashboard.regions()[i].code.as_str())
            .collect();
        assert_eq!(codes, vec!["B", "C", "A"]);

        // Switching to y: C is no-data colored, A and B keep bucket colors.
        dashboard.set_attribute("y").unwrap();
        let scale = dashboard.scale();
        let regions = dashboard.regions();
        let c = regions.iter().find(|r| r.code == "C").unwrap();
        assert_eq!(scale.color_for_region(c), scale.no_data_color());
        for code in ["A", "B"] {
            let region = regions.iter().find(|r| r.code == code).unwrap();
            assert_ne!(scale.color_for_region(region), scale.no_data_color());
        }
    }
}
