//! The snippet pipeline: tokenize, materialize, serialize.
//!
//! [`render_snippet`] is the one entry point hosts call per render pass. It
//! owns the pass lifecycle the correctness contract depends on: a fresh
//! annotated tree is built for every call and discarded afterwards, so no
//! inline style can survive from a previous theme.

use crate::dom::{Element, Node};
use crate::error::RenderError;
use crate::html;
use crate::materialize::{materialize, MaterializeOptions};
use crate::theme::Theme;
use crate::tokenize;

/// Link target of the attribution footer.
pub const ATTRIBUTION_URL: &str = "https://github.com/arthur-debert/inkpaste";

/// Text of the attribution footer link.
pub const ATTRIBUTION_TEXT: &str = "highlighted with inkpaste";

/// Options for one snippet render.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnippetOptions {
    /// Retain token classes alongside inline styles (theme authoring only).
    pub keep_debug_classes: bool,
    /// Append the attribution footer, styled with the theme's footer rule.
    pub attribution: bool,
}

/// Renders `source` as a self-contained inline-styled HTML fragment.
///
/// Pipeline: build a fresh annotated tree for (`source`, `language`),
/// materialize it under `theme`, optionally append the attribution footer,
/// and serialize. The output's only presentation mechanism is inline
/// `style` attributes.
///
/// # Example
///
/// ```rust
/// use inkpaste_render::{render_snippet, SnippetOptions, ThemeRegistry};
///
/// let registry = ThemeRegistry::builtin();
/// let theme = registry.resolve("toxic");
/// let html = render_snippet("let x = 1;", "rs", theme, &SnippetOptions::default()).unwrap();
///
/// assert!(html.starts_with("<pre style="));
/// assert!(!html.contains("class="));
/// ```
pub fn render_snippet(
    source: &str,
    language: &str,
    theme: &Theme,
    options: &SnippetOptions,
) -> Result<String, RenderError> {
    let mut tree = tokenize::tokenize(source, language)?;
    materialize(
        &mut tree,
        theme,
        &MaterializeOptions {
            keep_debug_classes: options.keep_debug_classes,
        },
    )?;

    if options.attribution {
        // Appended after materialization so the engine neither strips nor
        // restyles it; the footer takes the theme's footer rule verbatim.
        if let Some(root) = tree.as_element_mut() {
            root.push(footer(theme));
        }
    }

    Ok(tree.to_html())
}

/// Wraps an already-rendered fragment in a minimal preview document.
pub fn render_page(fragment: &str, title: &str) -> String {
    html::page(fragment, title)
}

fn footer(theme: &Theme) -> Element {
    let mut footer = Element::new("span");
    footer.style = theme.footer_style().clone();
    footer.push(
        Element::new("a")
            .attr("href", ATTRIBUTION_URL)
            .child(Node::text(ATTRIBUTION_TEXT)),
    );
    footer
}
