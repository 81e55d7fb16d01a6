//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Environment variable that enables the theme-authoring debug mode
/// (classes retained alongside inline styles).
pub const DEBUG_CLASSES_ENV: &str = "INKPASTE_DEBUG_CLASSES";

#[derive(Debug, Parser)]
#[command(
    name = "inkpaste",
    version,
    about = "Paste-ready syntax highlighting: self-contained inline-styled HTML",
    long_about = "Renders a source snippet as a single HTML fragment whose only \
presentation mechanism is inline style attributes — safe to paste into hosts \
that strip <style> blocks and CSS classes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a snippet as a paste-ready HTML fragment
    Render(RenderArgs),
    /// List available themes
    Themes(ThemesArgs),
    /// List the language catalog
    Languages,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Source file to highlight; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Language name, shorthand, or extension (default: inferred from the
    /// file name, then the last-used language)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Theme id (default: the last-used theme, then the built-in fallback)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Write the fragment to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also copy the fragment to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Append the attribution footer link
    #[arg(long, overrides_with = "no_attribution")]
    pub attribution: bool,

    /// Omit the attribution footer link
    #[arg(long = "no-attribution", overrides_with = "attribution")]
    pub no_attribution: bool,

    /// Wrap the fragment in a minimal HTML document for previewing
    #[arg(long)]
    pub standalone: bool,

    /// Load additional theme files (*.yaml, *.yml) from a directory
    #[arg(long, value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Keep token classes alongside inline styles (theme authoring)
    #[arg(long, hide = true)]
    pub keep_classes: bool,
}

#[derive(Debug, Args)]
pub struct ThemesArgs {
    /// Include theme files from a directory in the listing
    #[arg(long, value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn render_parses_flags() {
        let cli = Cli::parse_from([
            "inkpaste", "render", "main.rs", "--theme", "ember", "--copy", "--attribution",
        ]);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.file.unwrap().to_str(), Some("main.rs"));
                assert_eq!(args.theme.as_deref(), Some("ember"));
                assert!(args.copy);
                assert!(args.attribution);
                assert!(!args.no_attribution);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn attribution_flags_override_each_other() {
        let cli = Cli::parse_from([
            "inkpaste",
            "render",
            "--attribution",
            "--no-attribution",
        ]);
        match cli.command {
            Command::Render(args) => {
                assert!(!args.attribution);
                assert!(args.no_attribution);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
