//! The tokenizer boundary: source text in, annotated tree out.
//!
//! Highlighting proper is delegated to `syntect`; this module adapts its
//! classed-HTML output into the engine's [`Node`] tree and exposes the
//! language catalog. The engine itself never touches `syntect` types — it
//! consumes the annotated tree and nothing else.
//!
//! The syntax set is expensive to build and immutable, so it lives in a
//! process-wide `Lazy` static shared by every render pass.

use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::classed;
use crate::dom::{Element, Node};
use crate::error::RenderError;

static SYNTAXES: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Tag of the root element every tokenize pass produces.
pub const ROOT_TAG: &str = "pre";

/// One entry of the language catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Human-readable language name, e.g. `"Rust"`.
    pub name: String,
    /// File extensions and shorthand tokens recognized for this language.
    pub extensions: Vec<String>,
}

/// The language catalog, sorted by name.
///
/// Drawn from the bundled syntax definitions; hidden helper syntaxes are
/// excluded. This is what populates the CLI's `languages` listing and what
/// [`tokenize`] resolves language identifiers against.
pub fn languages() -> Vec<LanguageInfo> {
    let mut catalog: Vec<LanguageInfo> = SYNTAXES
        .syntaxes()
        .iter()
        .filter(|syntax| !syntax.hidden)
        .map(|syntax| LanguageInfo {
            name: syntax.name.clone(),
            extensions: syntax.file_extensions.clone(),
        })
        .collect();
    catalog.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    catalog
}

/// Resolves a language identifier (name, shorthand token, or extension).
fn find_language(language: &str) -> Option<&'static SyntaxReference> {
    SYNTAXES
        .find_syntax_by_token(language)
        .or_else(|| SYNTAXES.find_syntax_by_extension(language))
}

/// Whether a language identifier resolves to a bundled syntax.
pub fn language_known(language: &str) -> bool {
    find_language(language).is_some()
}

/// Builds a fresh annotated tree for `source` highlighted as `language`.
///
/// The returned tree is a `<pre>` root whose descendants are `<span>`
/// elements carrying token-class names from the tokenizer's open vocabulary.
/// An unrecognized language falls back to a single unstyled text child —
/// the snippet still renders, just without token coloring.
///
/// Every call builds a new tree; nothing is cached or reused, so each
/// materialization pass starts from an unstyled state.
///
/// # Errors
///
/// Returns [`RenderError::Tokenize`] only when the highlighter itself fails
/// on a line (malformed grammar state), which is not reachable through
/// ordinary input.
pub fn tokenize(source: &str, language: &str) -> Result<Node, RenderError> {
    let mut root = Element::new(ROOT_TAG);

    match find_language(language) {
        Some(syntax) => {
            let mut generator =
                ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);
            for line in LinesWithEndings::from(source) {
                generator.parse_html_for_line_which_includes_newline(line)?;
            }
            let markup = generator.finalize();
            root.children = classed::parse_fragment(&markup);
        }
        None => {
            if !source.is_empty() {
                root.push(Node::text(source));
            }
        }
    }

    Ok(Node::Element(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_nonempty_and_sorted() {
        let catalog = languages();
        assert!(!catalog.is_empty());
        for pair in catalog.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn catalog_includes_rust() {
        let catalog = languages();
        let rust = catalog.iter().find(|l| l.name == "Rust").unwrap();
        assert!(rust.extensions.iter().any(|e| e == "rs"));
    }

    #[test]
    fn known_language_by_extension_and_name() {
        assert!(language_known("rs"));
        assert!(language_known("rust"));
        assert!(!language_known("definitely-not-a-language"));
    }

    #[test]
    fn tokenize_produces_pre_root() {
        let tree = tokenize("let x = 1;", "rs").unwrap();
        let root = tree.as_element().unwrap();
        assert_eq!(root.tag, ROOT_TAG);
        assert!(!root.children.is_empty());
    }

    #[test]
    fn tokenize_preserves_source_text() {
        let source = "fn main() { println!(\"<hello>\"); }\n";
        let tree = tokenize(source, "rs").unwrap();
        assert_eq!(tree.as_element().unwrap().text_content(), source);
    }

    #[test]
    fn tokenize_annotates_with_open_vocabulary() {
        let tree = tokenize("let x = 1;", "rs").unwrap();
        let root = tree.as_element().unwrap();

        fn any_classed(node: &Node) -> bool {
            match node {
                Node::Text(_) => false,
                Node::Element(el) => {
                    !el.classes.is_empty() || el.children.iter().any(any_classed)
                }
            }
        }
        assert!(root.children.iter().any(any_classed));
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let tree = tokenize("some opaque text", "definitely-not-a-language").unwrap();
        let root = tree.as_element().unwrap();
        assert_eq!(root.children, vec![Node::text("some opaque text")]);
    }

    #[test]
    fn empty_source_yields_childless_root() {
        let tree = tokenize("", "definitely-not-a-language").unwrap();
        assert!(tree.as_element().unwrap().children.is_empty());
    }

    #[test]
    fn fresh_tree_per_call() {
        let a = tokenize("let x = 1;", "rs").unwrap();
        let b = tokenize("let x = 1;", "rs").unwrap();
        // Equal in structure but independently owned.
        assert_eq!(a, b);
    }
}
