//! # Inkpaste Render - Inline-Styled Snippet Rendering
//!
//! `inkpaste-render` turns a source-code snippet into a single
//! self-contained HTML fragment: token-level syntax highlighting with every
//! color and font choice written as literal inline `style` attributes, no
//! stylesheet or class names required. The target is hosts that strip
//! `<style>` blocks and CSS classes but preserve inline styles.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: named, immutable bundle of style rules — one per token
//!   class, plus dedicated root and footer rules
//! - [`ThemeRegistry`]: id → theme resolution with a designated fallback;
//!   unknown ids never fail
//! - [`Node`]/[`Element`]: the class-annotated tree the tokenizer produces
//! - [`materialize`]: THE CORE — rewrites a tree's class-based presentation
//!   into inline styles, idempotently and without cross-theme leakage
//! - [`render_snippet`]: the full pipeline (tokenize → materialize →
//!   serialize) hosts call once per render pass
//!
//! ## Quick Start
//!
//! ```rust
//! use inkpaste_render::{render_snippet, SnippetOptions, ThemeRegistry};
//!
//! let registry = ThemeRegistry::builtin();
//! let theme = registry.resolve("toxic");
//!
//! let html = render_snippet(
//!     "fn main() {}",
//!     "rs",
//!     theme,
//!     &SnippetOptions::default(),
//! ).unwrap();
//!
//! // Paste-ready: inline styles only, no class attributes on tokens.
//! assert!(html.contains("style="));
//! ```
//!
//! ## Themes
//!
//! Themes are declarative data. Build them in code:
//!
//! ```rust
//! use inkpaste_render::{StyleMap, Theme};
//!
//! let theme = Theme::new("night", "Night")
//!     .root(StyleMap::from([("padding", "1rem"), ("background", "#101014")]))
//!     .token("keyword", StyleMap::from([("color", "#c678dd")]));
//! ```
//!
//! or load them from YAML files (one theme per file, id defaulting to the
//! filename):
//!
//! ```rust
//! use inkpaste_render::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! meta:
//!   id: night
//! tokens:
//!   keyword:
//!     color: "#c678dd"
//! "##).unwrap();
//! ```
//!
//! ## The Materialization Contract
//!
//! Each render pass builds a fresh annotated tree, and [`materialize`]
//! resets every element's inline style before reapplying the theme. The two
//! together make re-theming safe by construction: switching themes is just
//! another render pass, with no "un-theme" step and no possibility of a
//! previous theme's declarations surviving.

// Internal modules
mod classed;
pub mod colorspace;
mod dom;
mod error;
mod html;
mod materialize;
pub mod prelude;
mod snippet;
mod style;
pub mod theme;
pub mod tokenize;

// Error types
pub use error::{RenderError, ThemeError};

// Tree model
pub use dom::{Element, Node};

// Style primitives
pub use style::StyleMap;

// Theme exports
pub use theme::{Theme, ThemeMeta, ThemeRegistry};

// Engine exports
pub use materialize::{materialize, MaterializeOptions, ROOT_MARKER};

// Pipeline exports
pub use snippet::{
    render_page, render_snippet, SnippetOptions, ATTRIBUTION_TEXT, ATTRIBUTION_URL,
};

// Tokenizer boundary exports
pub use tokenize::{languages, tokenize, LanguageInfo};
