//! Command-line interface for gamecolor.
//!
//! Handles CLI argument parsing and prints resolved colors.

use crate::errors::Result;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use tracing::Level;

use crate::{
    colors::{self, ColorResolver, HexColor},
    config::{CliOverrides, Config},
    games::Game,
    scheme::{ColorScheme, ColorSchemeSource},
};

/// Command-line arguments for gamecolor.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The label to resolve, e.g. a game title. Absent means the default color.
    #[arg(conflicts_with_all = ["game", "list"])]
    pub label: Option<String>,

    /// Resolve a known game by id, short code, or title.
    #[arg(short, long, conflicts_with = "list")]
    pub game: Option<Game>,

    /// Color scheme to resolve for. Read from the environment when omitted.
    #[arg(short, long, value_name = "light|dark")]
    pub scheme: Option<ColorScheme>,

    /// List every known game with both variants.
    #[arg(short, long)]
    pub list: bool,

    /// Print JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Set the logging level.
    #[arg(long, short = 'L', value_name = "LEVEL", default_value_t = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })]
    pub log_level: Level,
}

#[derive(Serialize)]
struct Resolution<'a> {
    label: Option<&'a str>,
    scheme: ColorScheme,
    color: HexColor,
}

#[derive(Serialize)]
struct ListEntry {
    id: &'static str,
    code: &'static str,
    label: &'static str,
    light: HexColor,
    dark: HexColor,
}

fn list_entries() -> Vec<ListEntry> {
    Game::ALL
        .into_iter()
        .filter_map(|game| {
            let pair = game.colors()?;
            Some(ListEntry {
                id: game.id(),
                code: game.code(),
                label: game.label(),
                light: pair.light,
                dark: pair.dark,
            })
        })
        .collect()
}

/// Executes the CLI command, writing the result to `out`.
///
/// # Arguments
/// * `cli` - Parsed command-line arguments
/// * `out` - Destination for the printed colors
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if cli.list {
        let entries = list_entries();
        tracing::debug!(count = entries.len(), "Listing known games");

        if cli.json {
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        } else {
            for entry in &entries {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    entry.code, entry.label, entry.light, entry.dark
                )?;
            }
        }
        return Ok(());
    }

    let config = Config::load(Some(CliOverrides::from_cli_args(cli.scheme)));
    let label = match cli.game {
        Some(game) => Some(game.label()),
        None => cli.label.as_deref(),
    };

    let resolver = ColorResolver::new(config);
    let color = resolver.resolve(label);
    let scheme = resolver.source().color_scheme();

    tracing::debug!(label = ?label, %scheme, %color, known = label.and_then(colors::get_pair).is_some(), "Resolved color");

    if cli.json {
        serde_json::to_writer(&mut *out, &Resolution { label, scheme, color })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", color)?;
    }

    Ok(())
}
