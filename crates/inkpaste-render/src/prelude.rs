//! Convenience re-exports for the common rendering path.
//!
//! ```rust
//! use inkpaste_render::prelude::*;
//!
//! let registry = ThemeRegistry::builtin();
//! let html = render_snippet(
//!     "x = 1",
//!     "py",
//!     registry.resolve("ember"),
//!     &SnippetOptions::default(),
//! ).unwrap();
//! assert!(html.starts_with("<pre"));
//! ```

pub use crate::error::{RenderError, ThemeError};
pub use crate::materialize::{materialize, MaterializeOptions};
pub use crate::snippet::{render_page, render_snippet, SnippetOptions};
pub use crate::style::StyleMap;
pub use crate::theme::{Theme, ThemeRegistry};
pub use crate::tokenize::{languages, tokenize};
pub use crate::{Element, Node};
