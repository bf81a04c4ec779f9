// ── Minimal document node tree ──
//
// Just enough structure to build status cards, toggle visibility and
// serialize to HTML. Text and attribute values are escaped on output.

use std::fmt::{self, Write};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Element(el) => el.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element with an id, classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    hidden: bool,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    // ── Builders ─────────────────────────────────────────────────────

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when present.
    pub fn maybe_child(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// First descendant (depth-first, excluding self) carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.child_elements()
            .find_map(|el| if el.has_class(class) { Some(el) } else { el.find_class(class) })
    }

    /// Every descendant carrying `class`, in document order.
    pub fn find_all_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for el in self.child_elements() {
            if el.has_class(class) {
                found.push(el);
            }
            el.collect_class(class, found);
        }
    }

    // ── Mutation ─────────────────────────────────────────────────────

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn push(&mut self, node: impl Into<Node>) -> usize {
        self.children.push(node.into());
        self.children.len() - 1
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Element> {
        match self.children.get_mut(index) {
            Some(Node::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn child_at(&self, index: usize) -> Option<&Element> {
        self.children.get(index).and_then(Node::as_element)
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn write_html(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        if let Some(ref id) = self.id {
            write!(out, " id=\"{}\"", escape(id, true))?;
        }
        if !self.classes.is_empty() {
            write!(out, " class=\"{}\"", escape(&self.classes.join(" "), true))?;
        }
        for (name, value) in &self.attrs {
            write!(out, " {}=\"{}\"", name, escape(value, true))?;
        }
        if self.hidden {
            out.write_str(" style=\"display:none\"")?;
        }
        out.write_char('>')?;

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return Ok(());
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out)?,
                Node::Text(t) => out.write_str(&escape(t, false))?,
            }
        }
        write!(out, "</{}>", self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(el) => el.write_html(f),
            Self::Text(t) => f.write_str(&escape(t, false)),
        }
    }
}

/// Escape `&`, `<`, `>` and, inside attributes, `"`.
pub fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_elements() {
        let el = Element::new("div")
            .with_id("streams")
            .class("list wide")
            .child(Element::new("p").class("loading").text("Loading..."));
        assert_eq!(
            el.to_html(),
            r#"<div id="streams" class="list wide"><p class="loading">Loading...</p></div>"#
        );
    }

    #[test]
    fn void_tags_have_no_closing_tag() {
        let el = Element::new("img").attr("src", "a.png");
        assert_eq!(el.to_html(), r#"<img src="a.png">"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("href", "x?a=1&b=\"2\"")
            .text("<b>Tom & Jerry</b> \"live\"");
        assert_eq!(
            el.to_html(),
            r#"<a href="x?a=1&amp;b=&quot;2&quot;">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt; "live"</a>"#
        );
    }

    #[test]
    fn hidden_elements_get_display_none() {
        let mut el = Element::new("div");
        el.set_hidden(true);
        assert_eq!(el.to_html(), r#"<div style="display:none"></div>"#);
        el.set_hidden(false);
        assert_eq!(el.to_html(), "<div></div>");
    }

    #[test]
    fn class_helpers_are_set_like() {
        let mut el = Element::new("button").class("filter");
        el.add_class("active");
        el.add_class("active");
        assert_eq!(el.classes(), ["filter", "active"]);
        el.remove_class("active");
        assert!(!el.has_class("active"));
    }

    #[test]
    fn finds_descendants_by_class() {
        let el = Element::new("div").child(
            Element::new("div")
                .class("top")
                .child(Element::new("span").class("badge online").text("ONLINE")),
        );
        assert_eq!(el.find_class("badge").map(Element::text_content).as_deref(), Some("ONLINE"));
        assert_eq!(el.find_all_class("badge").len(), 1);
        assert!(el.find_class("missing").is_none());
    }
}
