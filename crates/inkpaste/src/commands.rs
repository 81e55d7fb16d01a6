//! Command handlers.
//!
//! Each invocation is a single synchronous pass: resolve selections from
//! flags and persisted state, render, route the output, persist the
//! selections that worked. Clipboard and file failures are user-visible
//! notifications, never silent, and never affect the rendering core.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use inkpaste_render::{render_page, render_snippet, SnippetOptions, ThemeRegistry};

use crate::cli::{RenderArgs, ThemesArgs, DEBUG_CLASSES_ENV};
use crate::state::{State, StateStore};

/// Prints a dim informational notice to stderr.
fn notice(message: &str) {
    eprintln!("{}", style(message).dim());
}

/// Builds the theme registry: built-ins plus an optional user directory.
fn registry_with(themes_dir: Option<&Path>) -> Result<ThemeRegistry> {
    let mut registry = ThemeRegistry::builtin();
    if let Some(dir) = themes_dir {
        let loaded = registry
            .add_dir(dir)
            .with_context(|| format!("loading themes from {}", dir.display()))?;
        if loaded == 0 {
            notice(&format!("no theme files found in {}", dir.display()));
        }
    }
    Ok(registry)
}

/// Loads persisted state, degrading to defaults on a corrupt file.
fn load_state(store: Option<&StateStore>) -> State {
    let Some(store) = store else {
        return State::default();
    };
    match store.load() {
        Ok(state) => state,
        Err(err) => {
            notice(&format!("{} (continuing with defaults)", err));
            State::default()
        }
    }
}

/// Reads the snippet source: explicit file, piped stdin, or — when invoked
/// interactively with neither — the persisted last-used source.
fn read_source(file: Option<&Path>, state: &State) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("reading stdin")?;
        return Ok(source);
    }

    match &state.source {
        Some(source) => {
            notice("rendering last-used source");
            Ok(source.clone())
        }
        None => anyhow::bail!("no source: pass a file, pipe input on stdin, or render something first"),
    }
}

/// The `render` command.
pub fn render(args: &RenderArgs, store: Option<&StateStore>) -> Result<()> {
    let registry = registry_with(args.themes_dir.as_deref())?;
    let state = load_state(store);

    let language = args
        .lang
        .clone()
        .or_else(|| {
            args.file
                .as_deref()
                .and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .map(str::to_string)
        })
        .or_else(|| state.language.clone())
        .unwrap_or_else(|| "txt".to_string());

    let theme_id = args
        .theme
        .clone()
        .or_else(|| state.theme.clone())
        .unwrap_or_else(|| registry.fallback_id().to_string());
    if registry.get(&theme_id).is_none() {
        notice(&format!(
            "theme '{}' is not registered; using '{}'",
            theme_id,
            registry.fallback_id()
        ));
    }
    let theme = registry.resolve(&theme_id);

    let attribution = if args.attribution {
        true
    } else if args.no_attribution {
        false
    } else {
        state.attribution
    };

    let keep_debug_classes = args.keep_classes
        || std::env::var(DEBUG_CLASSES_ENV).is_ok_and(|v| !v.is_empty() && v != "0");

    if !inkpaste_render::tokenize::language_known(&language) {
        notice(&format!(
            "unknown language '{}'; rendering without token coloring",
            language
        ));
    }

    let source = read_source(args.file.as_deref(), &state)?;
    let options = SnippetOptions {
        keep_debug_classes,
        attribution,
    };
    let fragment = render_snippet(&source, &language, theme, &options)?;

    let artifact = if args.standalone {
        let title = args
            .file
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .unwrap_or("snippet");
        render_page(&fragment, title)
    } else {
        fragment.clone()
    };

    match args.output.as_deref() {
        Some(path) => {
            std::fs::write(path, &artifact)
                .with_context(|| format!("writing {}", path.display()))?;
            notice(&format!("wrote {}", path.display()));
        }
        None => println!("{}", artifact),
    }

    if args.copy {
        // Clipboard always receives the bare fragment — that is the paste
        // artifact, even when a preview page was requested.
        inkpaste_pipe::copy_to_clipboard(&fragment).context("copying to clipboard")?;
        eprintln!("{} copied to clipboard", style("✓").green());
    }

    // Persist what actually rendered, so the next run repeats it.
    if let Some(store) = store {
        let next = State {
            language: Some(language),
            theme: Some(theme.id().to_string()),
            attribution,
            source: Some(source),
        };
        if next != state {
            if let Err(err) = store.save(&next) {
                notice(&format!("{}", err));
            }
        }
    }

    Ok(())
}

/// The `themes` command.
pub fn themes(args: &ThemesArgs, store: Option<&StateStore>) -> Result<()> {
    let registry = registry_with(args.themes_dir.as_deref())?;
    let state = load_state(store);

    for theme in registry.themes() {
        let mut line = format!("{:<12} {}", theme.id(), theme.name());
        if theme.id() == registry.fallback_id() {
            line.push_str("  (default)");
        }
        if state.theme.as_deref() == Some(theme.id()) {
            line.push_str("  (last used)");
        }
        println!("{}", line);
    }
    Ok(())
}

/// The `languages` command.
pub fn languages() -> Result<()> {
    for language in inkpaste_render::languages() {
        if language.extensions.is_empty() {
            println!("{}", language.name);
        } else {
            println!("{:<28} {}", language.name, language.extensions.join(", "));
        }
    }
    Ok(())
}
