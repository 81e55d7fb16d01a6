//! Bundled themes.
//!
//! Every color here is specified in OKLCH and converted to hex once, at
//! construction. Chroma/lightness pairs stay consistent across a theme's
//! token vocabulary so the palette reads as one family; hue carries the
//! semantic distinctions.
//!
//! Token-class keys follow the tokenizer's scope-atom vocabulary
//! ("keyword", "string", "constant", "numeric", …). A later atom on the
//! same element overrides an earlier one, so the specific entry (`numeric`)
//! only needs to differ from the general one (`constant`) where it matters.

use crate::colorspace::Oklch;
use crate::style::StyleMap;

use super::theme::Theme;

const MONO_STACK: &str = "'Fira Mono','Cascadia Code',Consolas,monospace";

fn root_style(bg: Oklch, fg: Oklch) -> StyleMap {
    StyleMap::new()
        .with("display", "block")
        .with("padding", "1rem")
        .with("border-radius", "6px")
        .with("overflow-x", "auto")
        .with("font-family", MONO_STACK)
        .with("font-size", "0.9rem")
        .with("line-height", "1.5")
        .with("background", bg.to_hex())
        .with("color", fg.to_hex())
}

fn footer_style(fg: Oklch) -> StyleMap {
    StyleMap::new()
        .with("display", "block")
        .with("margin-top", "0.75rem")
        .with("font-size", "0.75rem")
        .with("color", fg.to_hex())
}

fn color(value: Oklch) -> StyleMap {
    StyleMap::new().with("color", value.to_hex())
}

/// The default (and fallback) theme: acid green on a near-black green cast.
pub fn toxic() -> Theme {
    let bg = Oklch::new(0.17, 0.02, 150.0);
    let fg = Oklch::new(0.90, 0.03, 140.0);
    let acid = Oklch::new(0.85, 0.26, 142.0);
    let moss = Oklch::new(0.62, 0.05, 145.0);

    Theme::new("toxic", "Toxic")
        .root(root_style(bg, fg))
        .footer(footer_style(moss))
        .token(
            "comment",
            color(Oklch::new(0.55, 0.04, 145.0)).with("font-style", "italic"),
        )
        .token("string", color(Oklch::new(0.84, 0.14, 110.0)))
        .token("keyword", color(acid).with("font-weight", "bold"))
        .token("operator", color(Oklch::new(0.72, 0.07, 145.0)))
        .token("punctuation", color(moss))
        .token("function", color(Oklch::new(0.84, 0.13, 170.0)))
        .token("storage", color(Oklch::new(0.78, 0.12, 160.0)))
        .token("type", color(Oklch::new(0.80, 0.11, 165.0)))
        .token("constant", color(Oklch::new(0.80, 0.15, 95.0)))
        .token("numeric", color(Oklch::new(0.82, 0.16, 90.0)))
        .token("variable", color(fg))
        .token("entity", color(Oklch::new(0.86, 0.15, 155.0)))
        .token("tag", color(acid))
        .token("attribute-name", color(Oklch::new(0.82, 0.10, 120.0)))
        .token("support", color(Oklch::new(0.78, 0.10, 175.0)))
        .token(
            "invalid",
            color(Oklch::new(0.65, 0.20, 25.0)).with("text-decoration", "underline"),
        )
}

/// A light theme: cool grays with restrained accents, for pale hosts.
pub fn inkwash() -> Theme {
    let bg = Oklch::new(0.97, 0.004, 100.0);
    let fg = Oklch::new(0.28, 0.01, 270.0);
    let slate = Oklch::new(0.52, 0.02, 260.0);

    Theme::new("inkwash", "Inkwash")
        .root(root_style(bg, fg))
        .footer(footer_style(slate))
        .token(
            "comment",
            color(Oklch::new(0.58, 0.01, 270.0)).with("font-style", "italic"),
        )
        .token("string", color(Oklch::new(0.50, 0.10, 180.0)))
        .token(
            "keyword",
            color(Oklch::new(0.45, 0.17, 300.0)).with("font-weight", "bold"),
        )
        .token("operator", color(slate))
        .token("punctuation", color(Oklch::new(0.45, 0.01, 270.0)))
        .token("function", color(Oklch::new(0.46, 0.15, 262.0)))
        .token("storage", color(Oklch::new(0.48, 0.14, 290.0)))
        .token("type", color(Oklch::new(0.45, 0.12, 220.0)))
        .token("constant", color(Oklch::new(0.52, 0.13, 50.0)))
        .token("numeric", color(Oklch::new(0.55, 0.14, 45.0)))
        .token("variable", color(fg))
        .token("entity", color(Oklch::new(0.42, 0.13, 250.0)))
        .token("tag", color(Oklch::new(0.46, 0.15, 262.0)))
        .token("attribute-name", color(Oklch::new(0.50, 0.10, 70.0)))
        .token("support", color(Oklch::new(0.45, 0.10, 200.0)))
        .token(
            "invalid",
            color(Oklch::new(0.50, 0.19, 25.0)).with("text-decoration", "underline"),
        )
}

/// A warm dark theme: embers and golds on charcoal.
pub fn ember() -> Theme {
    let bg = Oklch::new(0.19, 0.015, 50.0);
    let fg = Oklch::new(0.90, 0.025, 80.0);
    let ash = Oklch::new(0.60, 0.03, 60.0);

    Theme::new("ember", "Ember")
        .root(root_style(bg, fg))
        .footer(footer_style(ash))
        .token(
            "comment",
            color(Oklch::new(0.56, 0.03, 60.0)).with("font-style", "italic"),
        )
        .token("string", color(Oklch::new(0.85, 0.12, 90.0)))
        .token(
            "keyword",
            color(Oklch::new(0.74, 0.16, 55.0)).with("font-weight", "bold"),
        )
        .token("operator", color(Oklch::new(0.72, 0.06, 60.0)))
        .token("punctuation", color(ash))
        .token("function", color(Oklch::new(0.80, 0.13, 35.0)))
        .token("storage", color(Oklch::new(0.76, 0.12, 45.0)))
        .token("type", color(Oklch::new(0.78, 0.10, 20.0)))
        .token("constant", color(Oklch::new(0.80, 0.13, 75.0)))
        .token("numeric", color(Oklch::new(0.82, 0.14, 80.0)))
        .token("variable", color(fg))
        .token("entity", color(Oklch::new(0.82, 0.13, 65.0)))
        .token("tag", color(Oklch::new(0.74, 0.16, 55.0)))
        .token("attribute-name", color(Oklch::new(0.80, 0.10, 95.0)))
        .token("support", color(Oklch::new(0.76, 0.10, 30.0)))
        .token(
            "invalid",
            color(Oklch::new(0.62, 0.21, 25.0)).with("text-decoration", "underline"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Theme> {
        vec![toxic(), inkwash(), ember()]
    }

    #[test]
    fn ids_are_unique() {
        let themes = all();
        let mut ids: Vec<&str> = themes.iter().map(Theme::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), themes.len());
    }

    #[test]
    fn every_theme_styles_the_core_vocabulary() {
        for theme in all() {
            for class in ["comment", "string", "keyword", "function", "numeric"] {
                assert!(
                    !theme.token_style(class).is_empty(),
                    "{} lacks a rule for {}",
                    theme.id(),
                    class
                );
            }
        }
    }

    #[test]
    fn root_styles_carry_background_and_padding() {
        for theme in all() {
            assert!(theme.root_style().get("background").is_some(), "{}", theme.id());
            assert_eq!(theme.root_style().get("padding"), Some("1rem"));
        }
    }

    #[test]
    fn footer_styles_are_block_level() {
        for theme in all() {
            assert_eq!(theme.footer_style().get("display"), Some("block"));
        }
    }

    #[test]
    fn colors_resolved_to_hex_at_construction() {
        let theme = toxic();
        let keyword = theme.token_style("keyword").get("color").unwrap();
        assert!(keyword.starts_with('#') && keyword.len() == 7, "{keyword}");
    }
}
