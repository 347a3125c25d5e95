//! Magic Layout CLI
//!
//! Usage:
//!   magic-layout [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Configuration file (TOML format)
//!   -r, --raw            Input is a bare node tree instead of a payload
//!   -d, --debug          Print an outline of the normalized tree to stderr
//!   --compact            Write JSON on a single line
//!   -v, --verbose        Log normalization decisions
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use magic_layout::{
    normalize_json, normalize_raw_json, to_json, Config, MagicLayoutError, NormalizedTree,
    PayloadOutcome,
};

#[derive(Parser)]
#[command(name = "magic-layout")]
#[command(about = "Normalize Figma scene graphs into layout-ready trees")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input is a bare node tree (one node or an array) instead of a
    /// `{ "kind": "figma", "data": ... }` payload
    #[arg(short, long)]
    raw: bool,

    /// Debug mode: print node ids and boxes to stderr
    #[arg(short, long)]
    debug: bool,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log normalization decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    if cli.compact {
        config = config.with_pretty(false);
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let result = if cli.raw {
        normalize_raw_json(&source, &config).map(PayloadOutcome::Normalized)
    } else {
        normalize_json(&source, &config)
    };

    match result.and_then(|outcome| write_outcome(outcome, &config, cli.debug)) {
        Ok(()) => {}
        Err(MagicLayoutError::Input(e)) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn write_outcome(
    outcome: PayloadOutcome,
    config: &Config,
    debug: bool,
) -> Result<(), MagicLayoutError> {
    match outcome {
        PayloadOutcome::Normalized(tree) => {
            if debug {
                print_outline(&tree);
            }
            println!("{}", to_json(&tree, config)?);
        }
        PayloadOutcome::Unsupported { kind } => {
            println!("No type found: '{}'", kind);
        }
    }
    Ok(())
}

fn print_outline(tree: &NormalizedTree) {
    eprintln!("{} nodes", tree.len());
    eprintln!("{}", tree.outline());
}

fn print_intro() {
    println!(
        r#"Magic Layout - Normalize Figma scene graphs into layout-ready trees

USAGE:
    magic-layout [OPTIONS] [FILE]
    cat payload.json | magic-layout

OPTIONS:
    -c, --config    Configuration file (TOML)
    -r, --raw       Input is a bare node tree, not a {{ kind, data }} payload
    -d, --debug     Print node ids and boxes to stderr
    --compact       Write JSON on a single line
    -v, --verbose   Log normalization decisions (or set RUST_LOG)
    -h, --help      Print help

QUICK START:
    echo '{{"kind": "figma", "data": {{"type": "FRAME", "id": "1:1", "children": []}}}}' | magic-layout

This prints the normalized tree as JSON: here the empty frame becomes a
rectangle with the same id and geometry."#
    );
}
