use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use fen_board::logging::init_logging;
use fen_board::{
    BoardRenderer, CacheSource, CacheStatus, ImageCache, PieceAtlas, RenderConfig, SideToMove,
    substitute,
};

/// JSON output of `render --json`.
#[derive(Serialize)]
struct RenderReport<'a> {
    fen: &'a str,
    path: PathBuf,
    created: bool,
    side_to_move: SideToMove,
}

fn cache_args() -> [Arg; 2] {
    [
        Arg::new("out-dir")
            .long("out-dir")
            .value_name("DIR")
            .help("Directory holding the cached <md5>.png boards")
            .default_value("."),
        Arg::new("media-dir")
            .long("media-dir")
            .value_name("DIR")
            .help("Directory with the Chess_<piece><l|d>t<size>.png glyphs")
            .default_value("chess_fen_media"),
    ]
}

fn cli() -> Command {
    Command::new("fen-board")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders FEN positions to cached PNG chess boards")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log atlas and cache details")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("render")
                .about("Render one FEN string (or reuse its cached image)")
                .arg(Arg::new("fen").value_name("FEN").required(true))
                .args(cache_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a JSON report instead of a status line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("markup")
                .about("Replace [fen]...[/fen] spans in text with board images")
                .arg(
                    Arg::new("input")
                        .value_name("FILE")
                        .help("Input text file; stdin when omitted"),
                )
                .args(cache_args()),
        )
}

fn build_cache(matches: &ArgMatches) -> ImageCache {
    let config = RenderConfig::default();
    // Safe unwrap: defaulted argument
    let media_dir = matches.get_one::<String>("media-dir").unwrap();
    let atlas = PieceAtlas::load(media_dir, config.cell_size);
    ImageCache::new(BoardRenderer::new(config), Arc::new(atlas))
}

fn out_dir(matches: &ArgMatches) -> PathBuf {
    PathBuf::from(matches.get_one::<String>("out-dir").unwrap())
}

fn run_render(matches: &ArgMatches) -> Result<()> {
    let fen = matches.get_one::<String>("fen").unwrap().trim();
    let cache = build_cache(matches);
    let entry = cache
        .fetch(fen, out_dir(matches))
        .context("Failed to render board")?;

    if matches.get_flag("json") {
        let report = RenderReport {
            fen,
            created: entry.status == CacheStatus::Rendered,
            path: entry.path,
            side_to_move: SideToMove::detect(fen),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        match entry.status {
            CacheStatus::Hit => println!("Already exists: {}", entry.path.display()),
            CacheStatus::Rendered => println!("Created: {}", entry.path.display()),
        }
    }
    Ok(())
}

fn run_markup(matches: &ArgMatches) -> Result<()> {
    let text = match matches.get_one::<String>("input") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let cache = build_cache(matches);
    let source = CacheSource::new(&cache, out_dir(matches));
    print!("{}", substitute(&text, &source)?);
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let filter = if matches.get_flag("verbose") { "debug" } else { "info" };
    init_logging(filter);

    match matches.subcommand() {
        Some(("render", sub)) => run_render(sub),
        Some(("markup", sub)) => run_markup(sub),
        _ => unreachable!("subcommand_required"),
    }
}
