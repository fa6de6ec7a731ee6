//! Cross-view hover emphasis.

use crate::views::HighlightSink;

/// At most one region carries hover emphasis at any instant.
#[derive(Debug, PartialEq, Clone)]
pub enum HighlightState {
    Idle,
    Highlighted(String),
}

/// Two-state machine driving highlight styling and the hover label across
/// every view, keyed by region code.
#[derive(Debug, PartialEq, Clone)]
pub struct HighlightCoordinator {
    state: HighlightState,
}

impl Default for HighlightCoordinator {
    fn default() -> Self {
        HighlightCoordinator::new()
    }
}

impl HighlightCoordinator {
    pub fn new() -> Self {
        HighlightCoordinator {
            state: HighlightState::Idle,
        }
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    /// Code of the highlighted region, if any.
    pub fn active(&self) -> Option<&str> {
        match &self.state {
            HighlightState::Idle => None,
            HighlightState::Highlighted(code) => Some(code),
        }
    }

    /// Pointer entered region `code`.
    ///
    /// From idle: apply emphasis and show the label. While another region
    /// is active: retarget directly -- clear the old emphasis and apply the
    /// new within this one call, with no idle pass-through. Re-entering the
    /// already-active region is a no-op.
    pub fn enter(&mut self, code: &str, name: &str, value_text: &str, sink: &mut dyn HighlightSink) {
        if let HighlightState::Highlighted(active) = &self.state {
            if active == code {
                return;
            }
            sink.clear_highlight(active);
        }
        sink.apply_highlight(code);
        sink.show_label(code, name, value_text);
        self.state = HighlightState::Highlighted(code.to_string());
    }

    /// Pointer left region `code`. A leave for a region that is not the
    /// active one is a no-op.
    pub fn leave(&mut self, code: &str, sink: &mut dyn HighlightSink) {
        let is_active =
            matches!(&self.state, HighlightState::Highlighted(active) if active == code);
        if !is_active {
            return;
        }
        sink.clear_highlight(code);
        sink.hide_label();
        self.state = HighlightState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<String>,
    }

    impl HighlightSink for RecordingSink {
        fn apply_highlight(&mut self, code: &str) {
            self.events.push(format!("apply:{}", code));
        }
        fn clear_highlight(&mut self, code: &str) {
            self.events.push(format!("clear:{}", code));
        }
        fn show_label(&mut self, code: &str, _name: &str, value_text: &str) {
            self.events.push(format!("label:{}:{}", code, value_text));
        }
        fn hide_label(&mut self) {
            self.events.push("hide".to_string());
        }
    }

    #[test]
    fn test_enter_from_idle() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        coordinator.enter("CA", "California", "16.2", &mut sink);
        assert_eq!(coordinator.active(), Some("CA"));
        assert_eq!(sink.events, vec!["apply:CA", "label:CA:16.2"]);
    }

    #[test]
    fn test_retarget_without_idle_pass() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        coordinator.enter("CA", "California", "16.2", &mut sink);
        coordinator.enter("NV", "Nevada", "16.6", &mut sink);
        assert_eq!(coordinator.active(), Some("NV"));
        assert_eq!(
            sink.events,
            vec!["apply:CA", "label:CA:16.2", "clear:CA", "apply:NV", "label:NV:16.6"]
        );
    }

    #[test]
    fn test_leave_clears() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        coordinator.enter("CA", "California", "16.2", &mut sink);
        coordinator.leave("CA", &mut sink);
        assert_eq!(coordinator.active(), None);
        assert_eq!(
            sink.events,
            vec!["apply:CA", "label:CA:16.2", "clear:CA", "hide"]
        );
    }

    #[test]
    fn test_stale_leave_is_no_op() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        coordinator.leave("CA", &mut sink);
        assert!(sink.events.is_empty());

        coordinator.enter("CA", "California", "16.2", &mut sink);
        let before = sink.events.len();
        coordinator.leave("NV", &mut sink);
        assert_eq!(coordinator.active(), Some("CA"));
        assert_eq!(sink.events.len(), before);
    }

    #[test]
    fn test_reenter_active_region_is_no_op() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        coordinator.enter("CA", "California", "16.2", &mut sink);
        let before = sink.events.len();
        coordinator.enter("CA", "California", "16.2", &mut sink);
        assert_eq!(sink.events.len(), before);
    }

    #[test]
    fn test_exclusivity_over_event_sequences() {
        let mut coordinator = HighlightCoordinator::new();
        let mut sink = RecordingSink::default();
        for code in ["CA", "NV", "AZ", "NV"] {
            coordinator.enter(code, code, "1.0", &mut sink);
        }
        coordinator.leave("AZ", &mut sink); // stale
        assert_eq!(coordinator.active(), Some("NV"));
        coordinator.leave("NV", &mut sink);
        assert_eq!(coordinator.active(), None);
    }
}
