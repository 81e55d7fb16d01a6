//! Declarative color themes and the registry that resolves them.
//!
//! A [`Theme`] is a named, immutable bundle of style rules: one rule for the
//! root container, one for the attribution footer, and one per token class
//! the theme cares to style. Themes carry data only — the decisions about
//! *where* those rules land are the materialization engine's.
//!
//! ## Design Decision: Absent Rules Are Silent
//!
//! The token vocabulary is an open set owned by the tokenizer, so a theme
//! can never be "complete". Looking up a class the theme does not style
//! yields an empty rule, not an error; an under-specified theme simply
//! produces under-styled output.
//!
//! ## Construction
//!
//! Programmatic (for the built-in themes):
//!
//! ```rust
//! use inkpaste_render::{StyleMap, Theme};
//!
//! let theme = Theme::new("night", "Night")
//!     .root(StyleMap::from([("background", "#101014"), ("padding", "1rem")]))
//!     .token("keyword", StyleMap::from([("color", "#c678dd")]));
//! ```
//!
//! YAML (for user theme files):
//!
//! ```rust
//! use inkpaste_render::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! meta:
//!   id: night
//!   name: Night
//! root:
//!   background: "#101014"
//! tokens:
//!   keyword:
//!     color: "#c678dd"
//! "##).unwrap();
//! assert_eq!(theme.id(), "night");
//! ```
//!
//! ## Resolution
//!
//! A [`ThemeRegistry`] maps ids to themes and designates one theme as the
//! fallback; [`ThemeRegistry::resolve`] never fails — an unknown id quietly
//! resolves to the fallback.

pub mod builtin;
mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use registry::ThemeRegistry;
pub use theme::{Theme, ThemeMeta};
