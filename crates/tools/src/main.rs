use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use level::{Coordinate, LevelConfig, LevelFile, Path, TileGrid, resolve_variants, texture_path};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level layout: a `.json` level file or a plain glyph map
    level: PathBuf,
    /// TOML file with the seed and design to build the level with
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Dump the level with `W`, `F` and `E` glyphs
    Print,
    /// Shortest path between two tiles, start to end by default
    Path {
        #[arg(long, value_parser = parse_coordinate)]
        from: Option<Coordinate>,
        #[arg(long, value_parser = parse_coordinate)]
        to: Option<Coordinate>,
    },
    /// Texture path of every tile
    Textures,
    /// Size, node count, start, end and layout hash
    Info,
}

#[derive(Serialize)]
struct LevelInfo {
    width: usize,
    height: usize,
    design: &'static str,
    node_count: usize,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    layout_hash: u64,
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (x, y) = value.split_once(',').ok_or_else(|| format!("expected x,y, got {value:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {value:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {value:?}: {e}"))?;
    Ok(Coordinate::new(x, y))
}

fn load_level(args: &Args) -> Result<TileGrid> {
    let base = match &args.config {
        Some(path) => LevelConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => LevelConfig::default(),
    };
    let file = LevelFile::load(&args.level)
        .with_context(|| format!("Failed to read level file: {}", args.level.display()))?;
    let config = file.config(&base);
    let kinds = file.kinds().with_context(|| "Failed to parse level layout")?;
    info!(seed = config.seed, design = config.design.as_str(), "building level");
    Ok(TileGrid::from_kinds_with_config(kinds, &config)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Failed to serialize output")?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let level = load_level(&args)?;

    match &args.command {
        Command::Print => print!("{}", level.print_level()),
        Command::Path { from, to } => {
            let Some(from) = from.or_else(|| level.get_start().map(|tile| tile.coordinate()))
            else {
                bail!("level has no start tile; pass --from");
            };
            let Some(to) = to.or_else(|| level.get_end().map(|tile| tile.coordinate())) else {
                bail!("level has no exit tile; pass --to");
            };
            let path = level.find_path(from, to);
            if args.json {
                print_json(&path)?;
            } else {
                match path {
                    Path::Found(tiles) => {
                        for tile in tiles {
                            println!("{},{}", tile.x, tile.y);
                        }
                    }
                    Path::NoPath => println!("no path"),
                }
            }
        }
        Command::Textures => {
            let design = level.design();
            for (coordinate, variant) in resolve_variants(&level) {
                let kind = level.get_tile_at(coordinate).map(|tile| tile.kind().glyph());
                println!(
                    "{},{} {} {}",
                    coordinate.x,
                    coordinate.y,
                    kind.unwrap_or('?'),
                    texture_path(design, variant)
                );
            }
        }
        Command::Info => {
            let info = LevelInfo {
                width: level.width(),
                height: level.height(),
                design: level.design().as_str(),
                node_count: level.get_node_count(),
                start: level.get_start().map(|tile| tile.coordinate()),
                end: level.get_end().map(|tile| tile.coordinate()),
                layout_hash: level.layout_hash(),
            };
            if args.json {
                print_json(&info)?;
            } else {
                println!("Size: {}x{}", info.width, info.height);
                println!("Design: {}", info.design);
                println!("Nodes: {}", info.node_count);
                println!("Start: {:?}", info.start);
                println!("End: {:?}", info.end);
                println!("Layout Hash: {}", info.layout_hash);
            }
        }
    }

    Ok(())
}
