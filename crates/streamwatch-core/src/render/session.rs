// ── Render session ──
//
// One load cycle's worth of rendered state: the container, the registry
// of rendered rows, and the filter controls. Passed explicitly from the
// load operation to the filter operation instead of living in globals.

use serde::Serialize;

use crate::filter::FilterControls;
use crate::model::{FilterMode, Identity, PresentationRow};

use super::node::Element;
use super::row::row_node;

/// Id of the container element rows are appended to.
pub const CONTAINER_ID: &str = "streams";

/// Handle to a row node: its index among the container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Filter-relevant metadata about one rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub node: NodeId,
    pub identity: Identity,
    pub online: bool,
    pub closed: bool,
}

/// Per-classification counts for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub online: usize,
    pub closed: usize,
    pub offline: usize,
}

impl StatusSummary {
    pub fn total(&self) -> usize {
        self.online + self.closed + self.offline
    }
}

/// Container, registry and controls for one dashboard.
#[derive(Debug, Clone)]
pub struct RenderSession {
    pub(crate) container: Element,
    pub(crate) registry: Vec<RegistryEntry>,
    pub(crate) rows: Vec<PresentationRow>,
    pub(crate) controls: FilterControls,
    pub(crate) loading: bool,
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSession {
    pub fn new() -> Self {
        Self {
            container: Element::new("div").with_id(CONTAINER_ID),
            registry: Vec::new(),
            rows: Vec::new(),
            controls: FilterControls::new(),
            loading: false,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Drop every rendered row and registry entry.
    pub fn clear(&mut self) {
        self.container.clear_children();
        self.registry.clear();
        self.rows.clear();
        self.loading = false;
    }

    /// Clear, then show the transient loading indicator.
    pub fn begin_loading(&mut self) {
        self.clear();
        self.container
            .push(Element::new("p").class("loading").text("Loading..."));
        self.loading = true;
    }

    /// Remove the loading indicator (and anything else in the container).
    pub fn finish_loading(&mut self) {
        self.clear();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Materialize `row`, append it to the container and register it.
    ///
    /// Call once per identity per cycle, in identity order: display order
    /// is append order.
    pub fn render_row(&mut self, row: PresentationRow) -> NodeId {
        let node = NodeId(self.container.push(row_node(&row)));
        self.registry.push(RegistryEntry {
            node,
            identity: row.identity.clone(),
            online: row.is_online(),
            closed: row.is_closed(),
        });
        self.rows.push(row);
        node
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn registry(&self) -> &[RegistryEntry] {
        &self.registry
    }

    /// Rows in render order.
    pub fn rows(&self) -> &[PresentationRow] {
        &self.rows
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Currently active filter mode.
    pub fn mode(&self) -> FilterMode {
        self.controls.active()
    }

    pub fn node(&self, id: NodeId) -> Option<&Element> {
        self.container.child_at(id.0)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|el| !el.is_hidden())
    }

    /// Rows whose node is currently visible, in render order.
    pub fn visible_rows(&self) -> Vec<&PresentationRow> {
        self.registry
            .iter()
            .zip(&self.rows)
            .filter(|(entry, _)| self.is_visible(entry.node))
            .map(|(_, row)| row)
            .collect()
    }

    pub fn summary(&self) -> StatusSummary {
        self.registry
            .iter()
            .fold(StatusSummary::default(), |mut acc, entry| {
                if entry.online {
                    acc.online += 1;
                } else if entry.closed {
                    acc.closed += 1;
                } else {
                    acc.offline += 1;
                }
                acc
            })
    }

    // ── Serialization ────────────────────────────────────────────────

    /// The container alone.
    pub fn to_html(&self) -> String {
        self.container.to_html()
    }

    /// A standalone HTML page: filter controls followed by the container.
    pub fn to_document(&self, title: &str) -> String {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text(title));
        let body = Element::new("body")
            .child(Element::new("h1").text(title))
            .child(self.controls.to_element())
            .child(self.container.clone());
        let html = Element::new("html").attr("lang", "en").child(head).child(body);
        format!("<!DOCTYPE html>\n{html}\n")
    }
}
