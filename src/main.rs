//! swatch-picker - CLI for the desktop color picker.
//!
//! Logs go to stderr; stdout only carries results so the output can be piped.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use swatch_picker::config::HOST_SETTLE_DELAY_MS;
use swatch_picker::{swatch, ColorCatalog, Match, PickerConfig, Rgb, SnippetTable};

/// Desktop color picker: screen eyedropper, named colors, code snippets and PNG swatches.
#[derive(Parser, Debug)]
#[command(name = "swatch-picker")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pick a color anywhere on screen (Esc or right click cancels)
    Pick {
        /// Wait before capturing, so the launching window can get out of the way
        #[arg(long, default_value_t = HOST_SETTLE_DELAY_MS)]
        delay_ms: u64,

        /// JSON file overriding eyedropper settings
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Name the catalog color closest to COLOR (#RRGGBB, #RGB or "r, g, b")
    Find { color: String },

    /// Print a code snippet embedding COLOR for LANGUAGE
    Snippet { language: String, color: String },

    /// List the languages available for snippets
    Languages,

    /// List catalog categories, or the colors of one category
    Catalog { category: Option<String> },

    /// Write a solid-color PNG swatch
    Swatch {
        color: String,

        #[arg(long, default_value_t = 100)]
        width: u32,

        #[arg(long, default_value_t = 100)]
        height: u32,

        /// Output file (default: Color_RRGGBB_WxH_timestamp.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Couleur imprimée en sortie JSON
/// Color printed as JSON output
#[derive(Serialize)]
struct ColorReport {
    hex: String,
    rgb: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    nearest: Option<Match>,
}

impl ColorReport {
    fn new(color: Rgb, catalog: &ColorCatalog) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color,
            nearest: catalog.exact_or_nearest(color),
        }
    }
}

fn parse_color(text: &str) -> Result<Rgb> {
    text.parse::<Rgb>()
        .with_context(|| format!("Cannot read color '{}'", text))
}

fn describe(hit: &Match) -> String {
    let entry = hit.entry();
    match hit {
        Match::Exact(_) => format!("{} ({})", entry.name, entry.category),
        Match::Closest { distance, .. } => {
            format!("~{} ({}, {}, distance {})", entry.name, entry.category, entry.color, distance)
        }
    }
}

fn print_color(color: Rgb, json: bool) -> Result<()> {
    let report = ColorReport::new(color, &ColorCatalog::builtin());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.hex);
        println!("{}", color.rgb_label());
        if let Some(hit) = &report.nearest {
            println!("{}", describe(hit));
        }
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Pick { delay_ms, config } => {
            let config = match config {
                Some(path) => PickerConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                None => PickerConfig::default(),
            };
            debug!(?config, "Eyedropper settings");

            std::thread::sleep(Duration::from_millis(delay_ms));
            match swatch_picker::pick_color_with(&config) {
                Some(color) => print_color(color, args.json)?,
                None => {
                    info!("No color picked");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Command::Find { color } => print_color(parse_color(&color)?, args.json)?,

        Command::Snippet { language, color } => {
            let color = parse_color(&color)?;
            let text = SnippetTable::builtin()
                .render(&language, color)
                .with_context(|| {
                    format!("Unknown language '{}' (see `swatch-picker languages`)", language)
                })?;
            println!("{}", text);
        }

        Command::Languages => {
            let table = SnippetTable::builtin();
            if args.json {
                let snippets: Vec<_> = table.iter().collect();
                println!("{}", serde_json::to_string_pretty(&snippets)?);
            } else {
                for name in table.display_names() {
                    println!("{}", name);
                }
            }
        }

        Command::Catalog { category } => {
            let catalog = ColorCatalog::builtin();
            match category {
                None if args.json => {
                    println!("{}", serde_json::to_string_pretty(&catalog.categories())?)
                }
                None => {
                    for name in catalog.categories() {
                        println!("{}", name);
                    }
                }
                Some(category) => {
                    let colors = catalog.colors_in(&category);
                    anyhow::ensure!(!colors.is_empty(), "Unknown category '{}'", category);
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&colors)?);
                    } else {
                        for entry in colors {
                            println!("{}  {}", entry.color, entry.name);
                        }
                    }
                }
            }
        }

        Command::Swatch { color, width, height, output } => {
            let color = parse_color(&color)?;
            let path = output
                .unwrap_or_else(|| PathBuf::from(swatch::default_file_name(color, width, height)));
            swatch::export_png(color, width, height, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}
