//! Error types for snippet rendering.
//!
//! The error surface is deliberately narrow: the engine is a total
//! transformation, so almost every "odd" input (unknown theme id, unstyled
//! token class, unknown language) is defined behavior, not an error. What
//! remains is [`RenderError`], the single public error type for rendering
//! operations, and [`ThemeError`], the structured error for theme loading.

use std::fmt;
use std::path::PathBuf;

/// Error type for rendering operations.
#[derive(Debug)]
pub enum RenderError {
    /// `materialize` was invoked with a text node as the traversal root.
    ///
    /// This is a precondition violation by the caller; the engine refuses to
    /// continue rather than styling the wrong tree.
    InvalidRoot,

    /// The tokenizer failed while highlighting a line.
    Tokenize(String),

    /// A theme could not be loaded or parsed.
    Theme(ThemeError),

    /// I/O error (e.g. reading a theme file from disk).
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidRoot => {
                write!(f, "materialization root must be an element node")
            }
            RenderError::Tokenize(msg) => write!(f, "tokenizer error: {}", msg),
            RenderError::Theme(err) => write!(f, "theme error: {}", err),
            RenderError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Theme(err) => Some(err),
            RenderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ThemeError> for RenderError {
    fn from(err: ThemeError) -> Self {
        RenderError::Theme(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<syntect::Error> for RenderError {
    fn from(err: syntect::Error) -> Self {
        RenderError::Tokenize(err.to_string())
    }
}

/// Error type for theme loading and parsing.
#[derive(Debug)]
pub enum ThemeError {
    /// The theme file could not be read.
    Load {
        /// Source file path.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// The YAML content is not a valid theme document.
    Parse {
        /// Source file path, when the theme came from disk.
        path: Option<PathBuf>,
        /// Message from the YAML parser.
        message: String,
    },

    /// The theme declares no usable id.
    MissingId {
        /// Source file path, when the theme came from disk.
        path: Option<PathBuf>,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Load { path, message } => {
                write!(f, "failed to read theme {}: {}", path.display(), message)
            }
            ThemeError::Parse { path, message } => match path {
                Some(p) => write!(f, "failed to parse theme {}: {}", p.display(), message),
                None => write!(f, "failed to parse theme: {}", message),
            },
            ThemeError::MissingId { path } => match path {
                Some(p) => write!(f, "theme {} declares an empty id", p.display()),
                None => write!(f, "theme declares an empty id"),
            },
        }
    }
}

impl std::error::Error for ThemeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_root_display() {
        let err = RenderError::InvalidRoot;
        assert!(err.to_string().contains("element node"));
    }

    #[test]
    fn theme_error_display_includes_path() {
        let err = ThemeError::Parse {
            path: Some(PathBuf::from("themes/broken.yaml")),
            message: "mapping expected".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("broken.yaml"));
        assert!(msg.contains("mapping expected"));
    }

    #[test]
    fn render_error_wraps_theme_error() {
        let err: RenderError = ThemeError::MissingId { path: None }.into();
        assert!(matches!(err, RenderError::Theme(_)));
        assert!(err.to_string().contains("empty id"));
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RenderError = io.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
