//! Serialization of annotated trees to HTML.
//!
//! The serialized fragment is the system's output contract: standalone
//! markup whose only presentation mechanism is inline `style` attributes,
//! safe to paste into hosts that strip `<style>` blocks and class
//! attributes.
//!
//! Output is byte-stable: attributes serialize in a fixed order (`class`,
//! `style`, then any plain attributes) and style properties in declaration
//! order, so identical trees always produce identical markup.

use crate::dom::{Element, Node};

impl Node {
    /// Serializes this subtree as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

impl Element {
    /// Serializes this element (and subtree) as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => escape_text(out, text),
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);

    if !el.classes.is_empty() {
        out.push_str(" class=\"");
        for (i, class) in el.classes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            escape_attr(out, class);
        }
        out.push('"');
    }

    if !el.style.is_empty() {
        out.push_str(" style=\"");
        escape_attr(out, &el.style.to_attr());
        out.push('"');
    }

    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(out, value);
        out.push('"');
    }

    out.push('>');
    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn escape_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Wraps a fragment in a minimal standalone document, for previewing in a
/// browser before pasting. The fragment itself remains the paste artifact.
pub fn page(fragment: &str, title: &str) -> String {
    let mut escaped_title = String::new();
    escape_text(&mut escaped_title, title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escaped_title, fragment
    )
}
