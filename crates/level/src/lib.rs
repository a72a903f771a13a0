pub mod config;
pub mod error;
pub mod grid;
mod hash;
pub mod layout;
pub mod pathfinding;
pub mod texture;
pub mod types;

pub use config::{DEFAULT_SEED, LevelConfig};
pub use error::LevelError;
pub use grid::TileGrid;
pub use layout::{KindGrid, LevelFile, parse_glyphs, render_glyphs};
pub use pathfinding::Path;
pub use texture::{Neighborhood, VariantId, resolve_variants, select_variant, texture_path};
pub use types::*;
