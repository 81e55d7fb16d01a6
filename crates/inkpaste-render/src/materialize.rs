//! The inline-style materialization engine.
//!
//! [`materialize`] converts a class-annotated tree into a class-free,
//! inline-styled tree under a chosen theme. This is the one operation every
//! render pass funnels through, and the correctness contract lives here:
//!
//! - **Idempotent**: materializing an already-materialized tree with the same
//!   theme reproduces the identical result. Each element's inline style is
//!   reset before anything new is applied, so reapplication is a fixed point.
//! - **No leakage**: the mandatory per-element reset means a tree styled by a
//!   previous theme can never smuggle declarations into the next pass — even
//!   though callers are expected to hand the engine a freshly built tree
//!   every time anyway.
//! - **Deterministic conflicts**: an element with several token classes gets
//!   the union of their declarations; where two classes set the same
//!   property, the class iterated later wins, matching the last-write-wins
//!   semantics of repeated property assignment.
//!
//! The engine performs no validation of theme completeness. A token class no
//! theme rule covers contributes nothing, silently; an incomplete theme
//! yields under-styled output, never an error.

use crate::dom::{Element, Node};
use crate::error::RenderError;
use crate::theme::Theme;

/// The fixed marker class placed on the root element.
///
/// The marker replaces the root's token classes during the pass and, in
/// debug mode, stays in the output so a CSS-capable host can still target
/// "the rendered block". In default mode it is stripped with every other
/// class — the shipped artifact carries no class attributes at all.
pub const ROOT_MARKER: &str = "inkpaste";

/// Options for one materialization pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterializeOptions {
    /// Retain descendant class attributes alongside the inline styles.
    ///
    /// For theme-authoring inspection only; never enable this for a shipped
    /// artifact, since the target hosts strip classes.
    pub keep_debug_classes: bool,
}

/// Rewrites `root` and its descendants in place: theme styles become inline
/// declarations, token classes are erased.
///
/// The root element always receives exactly the theme's root rule (its own
/// token classes, if any, are not consulted) and its class list is replaced
/// by [`ROOT_MARKER`] — retained only in debug mode, since default mode
/// strips every class attribute from the output. Every descendant element
/// is visited exactly once in document order; text nodes pass through
/// untouched.
///
/// # Errors
///
/// Returns [`RenderError::InvalidRoot`] when `root` is a text node. That is
/// a caller bug — continuing would style the wrong tree — so no partial
/// output is produced.
///
/// # Example
///
/// ```rust
/// use inkpaste_render::{materialize, Element, MaterializeOptions, Node, StyleMap, Theme};
///
/// let theme = Theme::new("demo", "Demo")
///     .root(StyleMap::from([("padding", "1rem")]))
///     .token("keyword", StyleMap::from([("color", "#ff0000")]));
///
/// let mut tree = Node::from(Element::new("pre").child(
///     Element::new("code").class("keyword").child(Node::text("foo")),
/// ));
/// materialize(&mut tree, &theme, &MaterializeOptions::default()).unwrap();
///
/// assert_eq!(
///     tree.to_html(),
///     r#"<pre style="padding:1rem"><code style="color:#ff0000">foo</code></pre>"#
/// );
/// ```
pub fn materialize(
    root: &mut Node,
    theme: &Theme,
    options: &MaterializeOptions,
) -> Result<(), RenderError> {
    let root = root.as_element_mut().ok_or(RenderError::InvalidRoot)?;

    // The root is special-cased: marker class plus the theme's root rule,
    // regardless of whatever classes the tokenizer put on it. The marker is
    // subject to the same stripping rule as every other class.
    root.style.clear();
    root.style.merge_from(theme.root_style());
    root.classes.clear();
    if options.keep_debug_classes {
        root.classes.push(ROOT_MARKER.to_string());
    }

    for child in &mut root.children {
        apply(child, theme, options);
    }
    Ok(())
}

/// Styles one descendant node and recurses into its children.
fn apply(node: &mut Node, theme: &Theme, options: &MaterializeOptions) {
    let Node::Element(el) = node else {
        return;
    };

    restyle(el, theme);
    if !options.keep_debug_classes {
        el.classes.clear();
    }

    for child in &mut el.children {
        apply(child, theme, options);
    }
}

/// Resets an element's inline style and rebuilds it from its token classes.
///
/// The reset happens unconditionally, before any lookup: the same nodes may
/// be revisited across re-renders under a different theme, and skipping the
/// reset would leak the previous theme's declarations.
fn restyle(el: &mut Element, theme: &Theme) {
    el.style.clear();
    for class in &el.classes {
        el.style.merge_from(theme.token_style(class));
    }
}
