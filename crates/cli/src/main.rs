//! CLI tool for compiling pitch scripts into themed slide decks.

use anyhow::{Context, Result};
use clap::Parser;
use pitch_core::ThemeSpec;
use pitch_pptx::PptxEmitter;
use std::path::PathBuf;

/// Compile a pitch script into a themed PPTX deck with speaker notes.
#[derive(Parser, Debug)]
#[command(name = "pitch-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input pitch script (markdown with [Screen]/[Note] markers)
    input: PathBuf,

    /// Output deck path (default: input path with .pptx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Theme configuration file (JSON); defaults to the built-in theme
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Logo image for the opening slide (overrides the theme file)
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Background image drawn behind every slide (overrides the theme file)
    #[arg(long)]
    background: Option<PathBuf>,

    /// Print the compiled slide model as JSON instead of writing a deck
    #[arg(short, long)]
    dump: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let source = pitch_core::read_document(&args.input)?;
    log::debug!("Read {} bytes from {}", source.len(), args.input.display());
    let deck = pitch_core::compile(&source);

    if args.verbose {
        eprintln!("Compiled {} slides from {}", deck.len(), args.input.display());
    }

    if args.dump {
        let json = serde_json::to_string_pretty(&deck).context("Failed to serialize slide model")?;
        println!("{json}");
        return Ok(());
    }

    let theme = load_theme(&args)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("pptx"));

    let mut emitter = PptxEmitter::new();
    pitch_core::emit_deck(&mut emitter, &theme, &deck, &output)
        .with_context(|| format!("Failed to emit deck to {}", output.display()))?;

    println!("Deck written: {} ({} slides)", output.display(), deck.len());
    Ok(())
}

/// Resolve the theme: built-in defaults, optionally replaced by a JSON
/// theme file, with asset paths overridable from the command line.
fn load_theme(args: &Args) -> Result<ThemeSpec> {
    let mut theme = match &args.theme {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read theme file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid theme file {}", path.display()))?
        }
        None => ThemeSpec::default(),
    };

    if let Some(logo) = &args.logo {
        theme.logo = Some(logo.clone());
    }
    if let Some(background) = &args.background {
        theme.background_image = Some(background.clone());
    }

    Ok(theme)
}
