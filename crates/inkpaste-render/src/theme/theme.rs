//! The Theme type: identity plus declarative style rules.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ThemeError;
use crate::style::StyleMap;

static EMPTY_STYLE: Lazy<StyleMap> = Lazy::new(StyleMap::new);

/// Theme identity: the stable selection key and the user-facing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMeta {
    /// Stable selection key, used by the registry and persisted state.
    pub id: String,
    /// Display name shown in listings.
    pub name: String,
}

/// A named, immutable bundle of style rules.
///
/// Three kinds of rules exist:
///
/// - `root`: applied to the top-level container of every rendered snippet,
///   regardless of token classes.
/// - `footer`: applied to the optional attribution element.
/// - `tokens`: one rule per token-class name the theme chooses to style.
///
/// Once a theme is handed to a [`ThemeRegistry`](super::ThemeRegistry) it is
/// never mutated; re-theming always goes through a fresh materialization
/// pass, never through editing a live theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    meta: ThemeMeta,
    root: StyleMap,
    footer: StyleMap,
    tokens: HashMap<String, StyleMap>,
}

impl Theme {
    /// Creates an empty theme with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            meta: ThemeMeta {
                id: id.into(),
                name: name.into(),
            },
            root: StyleMap::new(),
            footer: StyleMap::new(),
            tokens: HashMap::new(),
        }
    }

    /// Sets the root-container rule, returning `self` for chaining.
    pub fn root(mut self, style: StyleMap) -> Self {
        self.root = style;
        self
    }

    /// Sets the attribution-footer rule, returning `self` for chaining.
    pub fn footer(mut self, style: StyleMap) -> Self {
        self.footer = style;
        self
    }

    /// Declares the rule for one token class, returning `self` for chaining.
    ///
    /// Declaring the same class twice replaces the earlier rule.
    pub fn token(mut self, class: impl Into<String>, style: StyleMap) -> Self {
        self.tokens.insert(class.into(), style);
        self
    }

    /// The stable selection key.
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// The user-facing display name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Identity metadata.
    pub fn meta(&self) -> &ThemeMeta {
        &self.meta
    }

    /// The rule applied to the root container.
    pub fn root_style(&self) -> &StyleMap {
        &self.root
    }

    /// The rule applied to the attribution footer.
    pub fn footer_style(&self) -> &StyleMap {
        &self.footer
    }

    /// The rule for a token class, or an empty rule if the theme does not
    /// style it.
    ///
    /// Absence is a normal, silent case — the tokenizer's vocabulary is an
    /// open set and no theme covers all of it.
    pub fn token_style(&self, class: &str) -> &StyleMap {
        self.tokens.get(class).unwrap_or(&EMPTY_STYLE)
    }

    /// Number of token classes this theme styles.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Parses a theme from YAML content.
    ///
    /// The document must carry a `meta.id`; `meta.name` defaults to the id.
    /// `root`, `footer`, and `tokens` sections are all optional.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the YAML does not parse or no id is
    /// declared.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Self::parse(yaml, None, None)
    }

    /// Loads a theme from a YAML file.
    ///
    /// When the document omits `meta`, the id is derived from the filename
    /// (without extension), matching how stylesheet files are named after
    /// their theme.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let stem = path.file_stem().and_then(|s| s.to_str());
        Self::parse(&content, Some(path), stem)
    }

    fn parse(
        yaml: &str,
        path: Option<&Path>,
        fallback_id: Option<&str>,
    ) -> Result<Self, ThemeError> {
        let doc: ThemeDoc = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })?;

        let id = doc
            .meta
            .as_ref()
            .map(|m| m.id.trim().to_string())
            .filter(|id| !id.is_empty())
            .or_else(|| fallback_id.map(str::to_string))
            .ok_or(ThemeError::MissingId {
                path: path.map(Path::to_path_buf),
            })?;

        let name = doc
            .meta
            .and_then(|m| m.name)
            .unwrap_or_else(|| id.clone());

        Ok(Self {
            meta: ThemeMeta { id, name },
            root: doc.root.unwrap_or_default(),
            footer: doc.footer.unwrap_or_default(),
            tokens: doc.tokens.unwrap_or_default(),
        })
    }
}

/// On-disk theme document shape. Sections are `Option` so an empty YAML
/// section (`root:` with no body) reads as absent rather than an error.
#[derive(Deserialize)]
struct ThemeDoc {
    #[serde(default)]
    meta: Option<MetaDoc>,
    #[serde(default)]
    root: Option<StyleMap>,
    #[serde(default)]
    footer: Option<StyleMap>,
    #[serde(default)]
    tokens: Option<HashMap<String, StyleMap>>,
}

#[derive(Deserialize)]
struct MetaDoc {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_identity() {
        let theme = Theme::new("night", "Night");
        assert_eq!(theme.id(), "night");
        assert_eq!(theme.name(), "Night");
        assert_eq!(theme.token_count(), 0);
    }

    #[test]
    fn token_style_returns_declared_rule() {
        let theme =
            Theme::new("t", "T").token("keyword", StyleMap::from([("color", "#ff0000")]));
        assert_eq!(theme.token_style("keyword").get("color"), Some("#ff0000"));
    }

    #[test]
    fn token_style_of_unknown_class_is_empty() {
        let theme = Theme::new("t", "T");
        assert!(theme.token_style("totally-unknown-token").is_empty());
    }

    #[test]
    fn token_redeclaration_replaces() {
        let theme = Theme::new("t", "T")
            .token("keyword", StyleMap::from([("color", "red")]))
            .token("keyword", StyleMap::from([("color", "blue")]));
        assert_eq!(theme.token_style("keyword").get("color"), Some("blue"));
        assert_eq!(theme.token_count(), 1);
    }

    // =========================================================================
    // YAML parsing
    // =========================================================================

    #[test]
    fn from_yaml_complete_document() {
        let theme = Theme::from_yaml(
            r##"
            meta:
              id: night
              name: Night Shift
            root:
              padding: 1rem
              background: "#101014"
            footer:
              font-size: 0.75rem
            tokens:
              keyword:
                color: "#c678dd"
                font-weight: bold
              comment:
                color: "#5c6370"
            "##,
        )
        .unwrap();

        assert_eq!(theme.id(), "night");
        assert_eq!(theme.name(), "Night Shift");
        assert_eq!(theme.root_style().to_attr(), "padding:1rem;background:#101014");
        assert_eq!(theme.footer_style().get("font-size"), Some("0.75rem"));
        assert_eq!(theme.token_count(), 2);
        assert_eq!(
            theme.token_style("keyword").to_attr(),
            "color:#c678dd;font-weight:bold"
        );
    }

    #[test]
    fn from_yaml_name_defaults_to_id() {
        let theme = Theme::from_yaml("meta:\n  id: bare\n").unwrap();
        assert_eq!(theme.name(), "bare");
    }

    #[test]
    fn from_yaml_sections_optional() {
        let theme = Theme::from_yaml("meta:\n  id: bare\n").unwrap();
        assert!(theme.root_style().is_empty());
        assert!(theme.footer_style().is_empty());
        assert_eq!(theme.token_count(), 0);
    }

    #[test]
    fn from_yaml_empty_sections_read_as_absent() {
        let theme = Theme::from_yaml("meta:\n  id: bare\nroot:\ntokens:\n").unwrap();
        assert!(theme.root_style().is_empty());
        assert_eq!(theme.token_count(), 0);
    }

    #[test]
    fn from_yaml_missing_id_is_error() {
        let result = Theme::from_yaml("root:\n  padding: 1rem\n");
        assert!(matches!(result, Err(ThemeError::MissingId { .. })));
    }

    #[test]
    fn from_yaml_blank_id_is_error() {
        let result = Theme::from_yaml("meta:\n  id: \"  \"\n");
        assert!(matches!(result, Err(ThemeError::MissingId { .. })));
    }

    #[test]
    fn from_yaml_invalid_document_is_error() {
        let result = Theme::from_yaml("meta: [not, a, mapping");
        assert!(matches!(result, Err(ThemeError::Parse { .. })));
    }

    // =========================================================================
    // File loading
    // =========================================================================

    #[test]
    fn from_file_derives_id_from_stem() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seafoam.yaml");
        fs::write(&path, "tokens:\n  string:\n    color: \"#7fd7c4\"\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.id(), "seafoam");
        assert_eq!(theme.name(), "seafoam");
        assert_eq!(theme.token_style("string").get("color"), Some("#7fd7c4"));
    }

    #[test]
    fn from_file_meta_overrides_stem() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("whatever.yaml");
        fs::write(&path, "meta:\n  id: real-id\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.id(), "real-id");
    }

    #[test]
    fn from_file_not_found_is_load_error() {
        let result = Theme::from_file("/nonexistent/theme.yaml");
        assert!(matches!(result, Err(ThemeError::Load { .. })));
    }
}
