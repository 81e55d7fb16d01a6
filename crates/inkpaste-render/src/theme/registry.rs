//! Theme registry with fallback resolution.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::theme::Theme;
use crate::error::ThemeError;

/// Recognized theme file extensions, in priority order.
///
/// When a directory contains both `night.yaml` and `night.yml`, the earlier
/// extension wins.
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// A fixed mapping from theme id to [`Theme`], with a designated fallback.
///
/// The registry is an explicitly constructed value owned by the host — not
/// ambient global state — so the engine stays a pure function of its inputs.
/// Resolution is total by construction: the fallback theme is stored outside
/// the id map and can never be removed, so [`resolve`](Self::resolve) always
/// has something to return.
///
/// # Example
///
/// ```rust
/// use inkpaste_render::ThemeRegistry;
///
/// let registry = ThemeRegistry::builtin();
/// assert_eq!(registry.fallback_id(), "toxic");
///
/// // Unknown ids resolve to the fallback instead of failing.
/// assert_eq!(registry.resolve("nonexistent").id(), "toxic");
/// ```
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    fallback: Theme,
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Creates a registry containing only `fallback`.
    pub fn new(fallback: Theme) -> Self {
        Self {
            fallback,
            themes: HashMap::new(),
        }
    }

    /// The built-in registry: every bundled theme, with `"toxic"` as the
    /// fallback.
    pub fn builtin() -> Self {
        let mut registry = Self::new(builtin::toxic());
        registry.add(builtin::inkwash());
        registry.add(builtin::ember());
        registry
    }

    /// Registers a theme under its own id.
    ///
    /// Re-registering an id replaces the earlier theme; registering the
    /// fallback's id replaces the fallback itself.
    pub fn add(&mut self, theme: Theme) {
        if theme.id() == self.fallback.id() {
            self.fallback = theme;
        } else {
            self.themes.insert(theme.id().to_string(), theme);
        }
    }

    /// Parses YAML content and registers the resulting theme.
    ///
    /// Returns the registered id.
    pub fn add_yaml(&mut self, yaml: &str) -> Result<String, ThemeError> {
        let theme = Theme::from_yaml(yaml)?;
        let id = theme.id().to_string();
        self.add(theme);
        Ok(id)
    }

    /// Loads one theme file and registers it.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> Result<String, ThemeError> {
        let theme = Theme::from_file(path)?;
        let id = theme.id().to_string();
        self.add(theme);
        Ok(id)
    }

    /// Loads every theme file in a directory and registers them.
    ///
    /// Files are recognized by extension ([`THEME_EXTENSIONS`]); other
    /// entries are ignored. When two files share a stem, the higher-priority
    /// extension wins. Returns the number of themes loaded.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable directory or on the first file that fails to
    /// parse — a broken theme file should be fixed, not silently skipped.
    pub fn add_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, ThemeError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|e| ThemeError::Load {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| THEME_EXTENSIONS.contains(&ext))
            })
            .collect();

        // Lower-priority extensions load first so higher-priority ones
        // overwrite them on stem collisions.
        paths.sort_by_key(|path| {
            let priority = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| THEME_EXTENSIONS.iter().position(|e| *e == ext))
                .unwrap_or(0);
            (std::cmp::Reverse(priority), path.clone())
        });

        let mut loaded = 0;
        for path in paths {
            self.add_file(&path)?;
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Resolves a theme id, falling back to the designated fallback theme
    /// when the id is not registered. Never fails.
    pub fn resolve(&self, id: &str) -> &Theme {
        if id == self.fallback.id() {
            &self.fallback
        } else {
            self.themes.get(id).unwrap_or(&self.fallback)
        }
    }

    /// Returns the theme for `id` only if it is actually registered.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        if id == self.fallback.id() {
            Some(&self.fallback)
        } else {
            self.themes.get(id)
        }
    }

    /// The id of the designated fallback theme.
    pub fn fallback_id(&self) -> &str {
        self.fallback.id()
    }

    /// All registered themes, sorted by id for stable listings.
    pub fn themes(&self) -> Vec<&Theme> {
        let mut all: Vec<&Theme> = self.themes.values().collect();
        all.push(&self.fallback);
        all.sort_by_key(|theme| theme.id());
        all
    }

    /// Number of registered themes, including the fallback.
    pub fn len(&self) -> usize {
        self.themes.len() + 1
    }

    /// A registry always contains at least the fallback.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleMap;

    fn minimal(id: &str) -> Theme {
        Theme::new(id, id.to_uppercase()).token("keyword", StyleMap::from([("color", "#fff")]))
    }

    #[test]
    fn resolve_known_id() {
        let mut registry = ThemeRegistry::new(minimal("base"));
        registry.add(minimal("other"));
        assert_eq!(registry.resolve("other").id(), "other");
    }

    #[test]
    fn resolve_unknown_id_falls_back() {
        let registry = ThemeRegistry::new(minimal("base"));
        assert_eq!(registry.resolve("nonexistent").id(), "base");
    }

    #[test]
    fn resolve_fallback_id_directly() {
        let registry = ThemeRegistry::new(minimal("base"));
        assert_eq!(registry.resolve("base").id(), "base");
    }

    #[test]
    fn get_distinguishes_missing_from_fallback() {
        let registry = ThemeRegistry::new(minimal("base"));
        assert!(registry.get("base").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn add_replaces_same_id() {
        let mut registry = ThemeRegistry::new(minimal("base"));
        registry.add(minimal("other"));
        registry.add(Theme::new("other", "Replacement"));
        assert_eq!(registry.resolve("other").name(), "Replacement");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn add_can_replace_fallback() {
        let mut registry = ThemeRegistry::new(minimal("base"));
        registry.add(Theme::new("base", "New Base"));
        assert_eq!(registry.resolve("base").name(), "New Base");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn builtin_contains_toxic_fallback() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.fallback_id(), "toxic");
        assert!(registry.get("toxic").is_some());
        assert!(registry.len() >= 3);
    }

    #[test]
    fn themes_listing_is_sorted() {
        let registry = ThemeRegistry::builtin();
        let ids: Vec<&str> = registry.themes().iter().map(|t| t.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn add_yaml_registers_by_document_id() {
        let mut registry = ThemeRegistry::new(minimal("base"));
        let id = registry
            .add_yaml("meta:\n  id: custom\ntokens:\n  string:\n    color: \"#0f0\"\n")
            .unwrap();
        assert_eq!(id, "custom");
        assert_eq!(
            registry.resolve("custom").token_style("string").get("color"),
            Some("#0f0")
        );
    }

    // =========================================================================
    // Directory loading
    // =========================================================================

    #[test]
    fn add_dir_loads_theme_files() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("alpha.yaml"), "meta:\n  id: alpha\n").unwrap();
        fs::write(dir.path().join("beta.yml"), "meta:\n  id: beta\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a theme").unwrap();

        let mut registry = ThemeRegistry::new(minimal("base"));
        let loaded = registry.add_dir(dir.path()).unwrap();
        assert_eq!(loaded, 2);
        assert!(registry.get("alpha").is_some());
        assert!(registry.get("beta").is_some());
    }

    #[test]
    fn add_dir_yaml_beats_yml_on_stem_collision() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("dusk.yml"),
            "meta:\n  id: dusk\n  name: From Yml\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("dusk.yaml"),
            "meta:\n  id: dusk\n  name: From Yaml\n",
        )
        .unwrap();

        let mut registry = ThemeRegistry::new(minimal("base"));
        registry.add_dir(dir.path()).unwrap();
        assert_eq!(registry.resolve("dusk").name(), "From Yaml");
    }

    #[test]
    fn add_dir_missing_directory_is_error() {
        let mut registry = ThemeRegistry::new(minimal("base"));
        assert!(registry.add_dir("/nonexistent/themes").is_err());
    }

    #[test]
    fn add_dir_broken_file_is_error() {
        use std::fs;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.yaml"), "meta: [").unwrap();

        let mut registry = ThemeRegistry::new(minimal("base"));
        assert!(registry.add_dir(dir.path()).is_err());
    }
}
