use std::io;

use anyhow::{Result, bail};
use clap::Parser;
use level::{Coordinate, DesignLabel, LevelConfig, TileGrid, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1000)]
    steps: u32,
    /// Largest width and height of the random level
    #[arg(long, default_value_t = 12)]
    max_size: usize,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn random_coordinate(rng: &mut ChaCha8Rng, level: &TileGrid) -> Coordinate {
    Coordinate::new(
        (rng.next_u64() % level.width() as u64) as i32,
        (rng.next_u64() % level.height() as u64) as i32,
    )
}

fn check_indices(level: &TileGrid) -> Result<()> {
    let mut next = 0;
    for tile in level.tiles() {
        let expected = tile.is_accessible().then_some(next);
        if tile.index() != expected {
            bail!(
                "Invariant failed: tile {:?} has index {:?}, expected {:?}",
                tile.coordinate(),
                tile.index(),
                expected
            );
        }
        if expected.is_some() {
            next += 1;
        }
    }
    if level.get_node_count() != next {
        bail!("Invariant failed: node count {} != {}", level.get_node_count(), next);
    }
    Ok(())
}

fn check_path(level: &TileGrid, from: Coordinate, to: Coordinate) -> Result<()> {
    let path = level.find_path(from, to);
    let tiles = path.tiles();
    for pair in tiles.windows(2) {
        if pair[0].chebyshev(pair[1]) != 1 {
            bail!("Invariant failed: path step {:?} -> {:?}", pair[0], pair[1]);
        }
    }
    for &coordinate in tiles {
        if !level.get_tile_at(coordinate).is_some_and(|tile| tile.is_accessible()) {
            bail!("Invariant failed: path crosses inaccessible {coordinate:?}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let max_size = args.max_size.max(1) as u64;

    println!("Starting Fuzz harness on seed {} for {} steps...", args.seed, args.steps);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let width = 1 + (rng.next_u64() % max_size) as usize;
    let height = 1 + (rng.next_u64() % max_size) as usize;
    let kinds = (0..height)
        .map(|_| (0..width).map(|_| choose(&mut rng, &TileKind::ALL)).collect())
        .collect();
    let config = LevelConfig { seed: args.seed, design: DesignLabel::random(&mut rng) };
    let mut level = TileGrid::from_kinds_with_config(kinds, &config)?;
    println!("{}", level.print_level());

    if level.tiles().iter().any(|tile| tile.is_accessible()) && level.get_end().is_none() {
        bail!("Invariant failed: accessible level without an exit");
    }
    check_indices(&level)?;

    for step in 0..args.steps {
        let at = random_coordinate(&mut rng, &level);
        let kind = choose(&mut rng, &TileKind::ALL);
        debug!(step, ?at, ?kind, "changing tile kind");
        level.change_tile_kind(at, kind);
        check_indices(&level)?;

        let from = random_coordinate(&mut rng, &level);
        let to = random_coordinate(&mut rng, &level);
        check_path(&level, from, to)?;
    }

    println!("Final Layout Hash: {}", level.layout_hash());
    println!("Fuzzing completed successfully.");
    Ok(())
}
