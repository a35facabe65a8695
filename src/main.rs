use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use svg_placeholder::commands::Session;
use svg_placeholder::dimensions::{self, DEFAULT_MAX_DIMENSION, Limits};
use svg_placeholder::host::{HostError, InsertionTarget};
use svg_placeholder::prefs::{JsonFileStore, MemoryStore, PreferenceStore};
use svg_placeholder::presets::Preset;
use svg_placeholder::ratio::{Orientation, RatioSpec, ResolveMode};
use svg_placeholder::svg;

#[derive(Parser)]
#[command(name = "svg-placeholder")]
#[command(about = "Emit SVG placeholder images as data URIs")]
#[command(long_about = "\
Emit SVG placeholder images as data URIs

Each command resolves a size, renders a gray placeholder SVG with a
centered WIDTH × HEIGHT label, and writes the encoded data URI to
stdout — ready to paste into an src attribute or CSS url(). Status
goes to stderr, so the URI pipes cleanly.

Sizes come in three shapes:

  insert 1200x600              Literal dimensions (also '1200 600', '1200×600')
  ratio 4:3 1200               Aspect ratio plus a base size
  preset hero                  Stock sizes: hero, card, avatar

With --state, the last-used values persist between runs and fill in
when the size argument is omitted.")]
#[command(version)]
struct Cli {
    /// Maximum allowed size of either axis, in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION, global = true)]
    max_dimension: u32,

    /// JSON file for last-used values (omit for no persistence)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit a placeholder from literal dimensions like 1200x600
    Insert {
        /// Dimensions as WxH; omitted, the last-used pair is reused
        dims: Option<String>,
    },
    /// Emit a placeholder computed from an aspect ratio
    Ratio {
        /// Aspect ratio like 4:3 (stock choices: 1:1, 4:3, 4:5, 16:9)
        ratio: RatioSpec,
        /// Base size in pixels; omitted, the last-used base is reused
        base: Option<u32>,
        /// Landscape applies the ratio as given, portrait swaps it
        #[arg(long, default_value = "landscape")]
        orientation: Orientation,
        /// Which axis the base size fixes
        #[arg(long, default_value = "from-width")]
        mode: ResolveMode,
    },
    /// Emit one of the stock presets
    Preset { preset: Preset },
    /// List the stock presets with their dimensions
    Presets,
    /// Print the raw SVG markup for literal dimensions, unencoded
    Markup { dims: String },
}

/// The CLI's "document": insertions append lines to stdout.
struct StdoutTarget;

impl InsertionTarget for StdoutTarget {
    fn insert_at_selections(&mut self, text: &str) -> Result<(), HostError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let limits = Limits {
        max_dimension: cli.max_dimension,
    };

    match &cli.state {
        Some(path) => run(&cli, limits, &mut JsonFileStore::new(path.clone())),
        None => run(&cli, limits, &mut MemoryStore::new()),
    }
}

fn run(
    cli: &Cli,
    limits: Limits,
    store: &mut impl PreferenceStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut target = StdoutTarget;
    let mut session = Session::new(&mut target, store, limits);

    match &cli.command {
        Command::Insert { dims } => {
            let input = match dims {
                Some(dims) => dims.clone(),
                None => session.suggested_literal().to_string(),
            };
            let pair = session.insert_literal(&input)?;
            eprintln!("Placeholder inserted: {pair}");
        }
        Command::Ratio {
            ratio,
            base,
            orientation,
            mode,
        } => {
            let base = base.unwrap_or_else(|| session.suggested_base());
            let pair = session.insert_from_ratio(*ratio, *orientation, *mode, base)?;
            eprintln!("Placeholder inserted: {pair} ({ratio} {orientation})");
        }
        Command::Preset { preset } => {
            let pair = session.insert_preset(*preset)?;
            eprintln!("Placeholder inserted: {pair} ({preset})");
        }
        Command::Presets => {
            for preset in Preset::ALL {
                println!("{:<8} {}", preset.name(), preset.dimensions());
            }
        }
        Command::Markup { dims } => {
            let pair = dimensions::parse_literal(dims, &limits)?;
            println!("{}", svg::markup(pair).into_string());
        }
    }

    Ok(())
}
