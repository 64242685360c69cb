//! Display-structure description handed to the host surface.
//!
//! The renderer never touches a real DOM. It produces a small tree of
//! [`Node`]s which a host either walks directly or serializes with
//! [`Node::to_html`] and swaps in as a single bulk replacement.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use std::fmt::Write;

/// A node in the display tree: an element with attributes and children, or
/// a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

/// Shorthand for an empty element.
pub fn el(tag: &str) -> Node {
    Node::Element {
        tag: tag.to_string(),
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// Shorthand for a text node.
pub fn text(text: impl Into<String>) -> Node {
    Node::Text { text: text.into() }
}

impl Node {
    /// Adds an attribute. Has no effect on text nodes.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name.to_string(), value.into()));
        }
        self
    }

    /// Appends to the `class` attribute, creating it if needed.
    pub fn class(mut self, class: &str) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            match attrs.iter_mut().find(|(name, _)| name == "class") {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(class);
                }
                None => attrs.push(("class".to_string(), class.to_string())),
            }
        }
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Appends a text child.
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            Node::Text { .. } => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(text),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First descendant (or self) carrying the given class, depth first.
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_nodes()
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// Every descendant (or self) carrying the given class, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.collect_by_class(class, found);
        }
    }

    /// Serializes the tree as HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(&encode_text(text)),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    let _ = write!(out, " {}=\"{}\"", name, encode_double_quoted_attribute(value));
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_serialize() {
        let node = el("div")
            .class("recipe-card")
            .attr("data-recipe-id", "1")
            .child(el("h3").text("Pasta"));

        assert_eq!(
            node.to_html(),
            r#"<div class="recipe-card" data-recipe-id="1"><h3>Pasta</h3></div>"#
        );
    }

    #[test]
    fn test_class_appends() {
        let node = el("button").class("toggle-btn").class("active");
        assert_eq!(node.get_attr("class"), Some("toggle-btn active"));
        assert!(node.has_class("active"));
        assert!(!node.has_class("toggle"));
    }

    #[test]
    fn test_escaping() {
        let node = el("p").attr("title", "\"quoted\"").text("Salt & <pepper>");
        assert_eq!(
            node.to_html(),
            r#"<p title="&quot;quoted&quot;">Salt &amp; &lt;pepper&gt;</p>"#
        );
    }

    #[test]
    fn test_attribute_cannot_break_out() {
        let node = el("div").attr("data-title", r#"x" onclick="alert(1)"#);
        let html = node.to_html();
        assert!(!html.contains(r#"" onclick=""#));
        assert!(html.starts_with(r#"<div data-title="x&quot; onclick=&quot;alert(1)">"#));
    }

    #[test]
    fn test_text_content_and_lookup() {
        let node = el("ul")
            .child(el("li").class("step").text("a"))
            .child(el("li").class("step").text("b").child(el("ul").child(el("li").class("step").text("c"))));

        assert_eq!(node.text_content(), "abc");
        assert_eq!(node.find_all_by_class("step").len(), 3);
        assert_eq!(node.find_by_class("step").unwrap().text_content(), "a");
        assert!(node.find_by_class("missing").is_none());
    }

    #[test]
    fn test_text_node_ignores_element_builders() {
        let node = text("plain").attr("x", "y").class("c").child(el("b"));
        assert_eq!(node, text("plain"));
        assert_eq!(node.tag(), None);
    }
}
