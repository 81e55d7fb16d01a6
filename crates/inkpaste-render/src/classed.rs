//! Parser for the tokenizer's class-annotated span markup.
//!
//! The tokenizer emits flat markup in a narrow grammar: `<span class="…">`
//! openers, `</span>` closers, and HTML-escaped text. This module turns that
//! markup into the annotated [`Node`](crate::Node) tree the engine operates
//! on.
//!
//! The parser is deliberately tolerant. Tokenizer output should always be
//! well-formed, but malformed input must never panic or distort text:
//! orphan closers are dropped, unclosed spans are closed at end of input,
//! and anything that does not scan as a span tag passes through as literal
//! text.

use crate::dom::{Element, Node};

/// One lexical unit of classed markup.
#[derive(Debug, PartialEq)]
enum Token<'a> {
    /// A run of (still-escaped) text.
    Text(&'a str),
    /// `<span class="…">` with the raw class attribute value.
    Open(&'a str),
    /// `</span>`.
    Close,
}

/// Lexer over classed markup.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tries to scan a span tag at `pos`; returns the token and its length.
    fn scan_tag(&self) -> Option<(Token<'a>, usize)> {
        let rest = &self.input[self.pos..];
        if rest.starts_with("</span>") {
            return Some((Token::Close, "</span>".len()));
        }
        if rest.starts_with("<span>") {
            return Some((Token::Open(""), "<span>".len()));
        }
        if let Some(after) = rest.strip_prefix("<span class=\"") {
            let classes_len = after.find('"')?;
            let tail = &after[classes_len..];
            if !tail.starts_with("\">") {
                return None;
            }
            let consumed = "<span class=\"".len() + classes_len + "\">".len();
            return Some((Token::Open(&after[..classes_len]), consumed));
        }
        None
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }

        if self.input[self.pos..].starts_with('<') {
            if let Some((token, len)) = self.scan_tag() {
                self.pos += len;
                return Some(token);
            }
            // Not a span tag — emit the `<` as literal text and move on.
            let start = self.pos;
            self.pos += 1;
            return Some(Token::Text(&self.input[start..self.pos]));
        }

        let start = self.pos;
        let end = self.input[self.pos..]
            .find('<')
            .map_or(self.input.len(), |i| self.pos + i);
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }
}

/// Parses classed markup into a list of sibling nodes.
///
/// Class attribute values split on whitespace into ordered class lists, and
/// text is unescaped back to its literal content.
pub fn parse_fragment(markup: &str) -> Vec<Node> {
    fn attach(stack: &mut [Element], roots: &mut Vec<Node>, node: Node) {
        match stack.last_mut() {
            Some(parent) => parent.push(node),
            None => roots.push(node),
        }
    }

    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    for token in Scanner::new(markup) {
        match token {
            Token::Text(text) => {
                let unescaped = unescape(text);
                // Adjacent text runs merge so escaping never splits a word
                // into multiple text nodes.
                let siblings = match stack.last_mut() {
                    Some(parent) => &mut parent.children,
                    None => &mut roots,
                };
                if let Some(Node::Text(prev)) = siblings.last_mut() {
                    prev.push_str(&unescaped);
                } else {
                    siblings.push(Node::Text(unescaped));
                }
            }
            Token::Open(classes) => {
                stack.push(Element::new("span").classes(classes.split_whitespace()));
            }
            Token::Close => {
                // Orphan closers (empty stack) are dropped.
                if let Some(done) = stack.pop() {
                    attach(&mut stack, &mut roots, Node::Element(done));
                }
            }
        }
    }

    // Close anything left open at end of input.
    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, Node::Element(done));
    }

    roots
}

/// Undoes the tokenizer's HTML escaping.
fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let mut replaced = false;
        for (entity, ch) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&#39;", '\''),
            ("&#x27;", '\''),
        ] {
            if let Some(after) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = after;
                replaced = true;
                break;
            }
        }
        if !replaced {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}
