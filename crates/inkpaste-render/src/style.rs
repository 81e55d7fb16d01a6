//! Ordered CSS declaration maps.
//!
//! [`StyleMap`] is the representation for every style rule in a theme and for
//! an element's resolved inline style. It differs from a plain `HashMap` in
//! two ways that the rendering contract depends on:
//!
//! - **Insertion order is preserved.** Serialized output must be byte-stable,
//!   so `padding` declared before `background` stays before `background`.
//! - **Re-setting a property overwrites in place.** Repeated assignment keeps
//!   the property's original position but takes the new value — the same
//!   "last write wins" semantics CSS itself has for repeated declarations.
//!
//! The map stores property names and values as opaque strings. Nothing in
//! this crate parses or validates CSS values; themes are trusted to declare
//! sensible ones.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// An ordered mapping from CSS property name to value string.
///
/// # Example
///
/// ```rust
/// use inkpaste_render::StyleMap;
///
/// let mut style = StyleMap::new();
/// style.set("color", "#39ff14");
/// style.set("font-weight", "bold");
/// style.set("color", "#ff0000"); // overwrites in place
///
/// assert_eq!(style.to_attr(), "color:#ff0000;font-weight:bold");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty style map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets a property, overwriting any existing value in place.
    ///
    /// A property that is already declared keeps its position in the
    /// declaration order; only its value changes.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Sets a property, returning `self` for chaining.
    ///
    /// This is the builder-style counterpart of [`set`](Self::set), used when
    /// constructing theme rules programmatically:
    ///
    /// ```rust
    /// use inkpaste_render::StyleMap;
    ///
    /// let rule = StyleMap::new()
    ///     .with("color", "#8be9fd")
    ///     .with("font-style", "italic");
    /// assert_eq!(rule.len(), 2);
    /// ```
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Returns the declared value for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Applies every declaration from `other` onto this map via [`set`](Self::set).
    ///
    /// Properties already present are overwritten (last write wins), new ones
    /// are appended. This is the primitive the materialization engine uses to
    /// fold multiple token-class rules onto one element.
    pub fn merge_from(&mut self, other: &StyleMap) {
        for (property, value) in &other.entries {
            self.set(property.clone(), value.clone());
        }
    }

    /// Removes every declaration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Renders the map as the content of an inline `style` attribute.
    ///
    /// Declarations are joined with `;` and carry no trailing semicolon:
    /// `"color:#ff0000;font-weight:bold"`.
    pub fn to_attr(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(property);
            out.push(':');
            out.push_str(value);
        }
        out
    }
}

impl<const N: usize> From<[(&str, &str); N]> for StyleMap {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in pairs {
            map.set(property, value);
        }
        map
    }
}

// Deserialization goes through a map visitor rather than a derived HashMap so
// that YAML declaration order survives into the StyleMap. Scalar values that
// YAML types as numbers or booleans (`tab-size: 4`) are rendered to strings.
impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of CSS property names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<StyleMap, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = StyleMap::new();
                while let Some((property, value)) =
                    access.next_entry::<String, ScalarValue>()?
                {
                    map.set(property, value.into_string());
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// A YAML scalar accepted as a CSS value.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl ScalarValue {
    fn into_string(self) -> String {
        match self {
            ScalarValue::Text(s) => s,
            ScalarValue::Integer(n) => n.to_string(),
            ScalarValue::Float(n) => n.to_string(),
            ScalarValue::Flag(b) => b.to_string(),
        }
    }
}
