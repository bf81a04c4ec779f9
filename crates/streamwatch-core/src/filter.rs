// ── Row filtering ──
//
// Applies a `FilterMode` over a session's registry without re-fetching,
// and keeps the three filter controls in sync with the active mode.

use crate::model::FilterMode;
use crate::render::{Element, RenderSession};

/// The three filter affordances. Exactly one is active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    active: FilterMode,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterControls {
    /// Controls with `All` active.
    pub fn new() -> Self {
        Self {
            active: FilterMode::All,
        }
    }

    pub fn active(&self) -> FilterMode {
        self.active
    }

    pub fn is_active(&self, mode: FilterMode) -> bool {
        self.active == mode
    }

    pub fn set_active(&mut self, mode: FilterMode) {
        self.active = mode;
    }

    /// `div.filters` holding one `button.filter` per mode.
    pub fn to_element(&self) -> Element {
        FilterMode::ALL
            .into_iter()
            .fold(Element::new("div").class("filters"), |bar, mode| {
                let mut button = Element::new("button")
                    .with_id(mode.control_id())
                    .class("filter")
                    .attr("type", "button")
                    .attr("data-filter", mode.to_string())
                    .text(mode.label());
                if self.is_active(mode) {
                    button.add_class("active");
                }
                bar.child(button)
            })
    }
}

impl RenderSession {
    /// Show or hide every registered row according to `mode`, and mark the
    /// matching control active. Re-applying the same mode changes nothing.
    pub fn apply_filter(&mut self, mode: FilterMode) {
        for entry in &self.registry {
            if let Some(node) = self.container.child_mut(entry.node.index()) {
                node.set_hidden(!mode.admits(entry.online, entry.closed));
            }
        }
        self.controls.set_active(mode);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::convert::build_row;
    use crate::model::Identity;
    use crate::{ChannelRecord, StreamRecord};

    /// One online, one closed, one offline row.
    fn mixed_session() -> RenderSession {
        let live: StreamRecord =
            serde_json::from_value(json!({ "stream": { "game": "Chess", "viewers": 3 } })).unwrap();
        let gone: ChannelRecord = serde_json::from_value(json!({ "error": "Not Found" })).unwrap();

        let mut session = RenderSession::new();
        session.render_row(build_row(&Identity::from("on"), None, Some(&live)));
        session.render_row(build_row(&Identity::from("gone"), Some(&gone), None));
        session.render_row(build_row(&Identity::from("off"), None, None));
        session
    }

    fn visible(session: &RenderSession) -> Vec<String> {
        session
            .visible_rows()
            .iter()
            .map(|r| r.identity.to_string())
            .collect()
    }

    #[test]
    fn all_shows_everything() {
        let mut session = mixed_session();
        session.apply_filter(FilterMode::Online);
        session.apply_filter(FilterMode::All);
        assert_eq!(visible(&session), ["on", "gone", "off"]);
    }

    #[test]
    fn online_shows_only_live_rows() {
        let mut session = mixed_session();
        session.apply_filter(FilterMode::Online);
        assert_eq!(visible(&session), ["on"]);
    }

    #[test]
    fn offline_hides_closed_and_online() {
        let mut session = mixed_session();
        session.apply_filter(FilterMode::Offline);
        assert_eq!(visible(&session), ["off"]);
    }

    #[test]
    fn exactly_one_control_is_active() {
        let mut session = mixed_session();
        for mode in FilterMode::ALL {
            session.apply_filter(mode);
            let bar = session.controls().to_element();
            let active: Vec<_> = bar
                .find_all_class("active")
                .iter()
                .filter_map(|b| b.id().map(str::to_owned))
                .collect();
            assert_eq!(active, [mode.control_id()]);
        }
    }

    #[test]
    fn reapplying_is_idempotent() {
        let mut session = mixed_session();
        session.apply_filter(FilterMode::Offline);
        let once = session.to_html();
        session.apply_filter(FilterMode::Offline);
        assert_eq!(session.to_html(), once);
        assert_eq!(session.mode(), FilterMode::Offline);
    }

    #[test]
    fn filtering_empty_session_is_harmless() {
        let mut session = RenderSession::new();
        session.begin_loading();
        session.apply_filter(FilterMode::Online);
        assert!(session.visible_rows().is_empty());
        assert!(session.container().find_class("loading").is_some());
    }
}
