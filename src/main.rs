use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use inkbleed::grid::Grid;
use inkbleed::input::{self, PointerEvent};
use inkbleed::{Config, Session};
use std::fs;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("INKBLEED_GIT_HASH"),
    ")"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One row per grid line of `index:opacity` pairs
    Text,
    /// Full grid snapshot as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "inkbleed")]
#[command(version, long_version = LONG_VERSION, about = "Ink-bleed painting on a bead grid")]
struct Cli {
    /// Config file to use instead of ~/.config/inkbleed/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Drag path to replay, e.g. "5,5;5,6;6,6"
    #[arg(long, short = 'd', value_name = "POINTS", conflicts_with = "script")]
    drag: Option<String>,

    /// Event script to replay (one "press|release|enter|exit X Y" per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Grid dimension override (1-32)
    #[arg(long, value_name = "BEADS")]
    size: Option<u32>,

    /// How to print the final grid
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let Some(events) = load_events(&cli)? else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(size) = cli.size {
        config.set_dimension(size);
    }

    let mut session = Session::new(Grid::default(), config.build_handler());
    let stats = session.run(events);
    log::info!(
        "Replayed {} events ({} dropped, {} bead repaints)",
        stats.handled + stats.dropped,
        stats.dropped,
        stats.repainted
    );

    let snapshot = session.snapshot();
    match cli.format {
        OutputFormat::Text => print!("{}", snapshot.to_table()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
    }

    Ok(())
}

fn load_events(cli: &Cli) -> anyhow::Result<Option<Vec<PointerEvent>>> {
    if let Some(drag) = &cli.drag {
        let events = input::parse_drag(drag).context("Invalid drag path")?;
        return Ok(Some(events));
    }

    match &cli.script {
        Some(path) => read_script(path).map(Some),
        None => Ok(None),
    }
}

fn read_script(path: &Path) -> anyhow::Result<Vec<PointerEvent>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    input::parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

fn print_usage() {
    println!("inkbleed: Ink-bleed painting on a bead grid");
    println!();
    println!("Usage:");
    println!("  inkbleed --drag \"5,5;5,6;6,6\"   Replay a drag and print the grid");
    println!("  inkbleed --script events.txt     Replay an event script");
    println!("  inkbleed --init-config           Write ~/.config/inkbleed/config.toml");
    println!("  inkbleed --help                  Show help");
    println!();
    println!("Script format (one event per line, # starts a comment):");
    println!("  press 5 5");
    println!("  enter 5 6");
    println!("  release 5 6");
    println!();
    println!("Output cells are printed as palette_index:opacity.");
}
