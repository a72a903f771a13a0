//! The tile grid of a single level and its walkable-tile indexing.
//! This module exists so every consumer sees one owner of tile state and one
//! source of truth for graph indices.
//! It does not own texture selection or level generation.

mod indexing;
mod queries;

pub(crate) use queries::NEIGHBOUR_OFFSETS;

use std::slice::Chunks;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use tracing::debug;

use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::layout::{KindGrid, grid_dimensions};
use crate::types::{Coordinate, DesignLabel, Tile, TileKind};

/// Row-major grid of tiles. `tiles[y * width + x]` holds the tile at `(x, y)`.
///
/// Accessible tiles carry a dense graph index in scan order; the index is
/// recomputed from scratch whenever a tile changes kind.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    /// Graph index -> cell position in `tiles`.
    nodes: Vec<usize>,
    design: DesignLabel,
    start: Option<usize>,
    rng: ChaCha8Rng,
}

impl TileGrid {
    pub fn from_kinds(kinds: KindGrid, design: DesignLabel) -> Result<Self, LevelError> {
        Self::from_kinds_with_config(kinds, &LevelConfig::with_design(design))
    }

    pub fn from_kinds_with_config(
        kinds: KindGrid,
        config: &LevelConfig,
    ) -> Result<Self, LevelError> {
        let (width, height) = grid_dimensions(&kinds)?;
        let tiles = kinds
            .into_iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.into_iter().enumerate().map(move |(x, kind)| {
                    Tile::new(Coordinate::new(x as i32, y as i32), kind)
                })
            })
            .collect();
        Ok(Self::assemble(width, height, tiles, config))
    }

    /// Adopts pre-built tiles. Coordinates are re-stamped from each tile's
    /// position in `rows` and indices are always recomputed.
    pub fn from_tiles(rows: Vec<Vec<Tile>>) -> Result<Self, LevelError> {
        Self::from_tiles_with_config(rows, &LevelConfig::default())
    }

    pub fn from_tiles_with_config(
        rows: Vec<Vec<Tile>>,
        config: &LevelConfig,
    ) -> Result<Self, LevelError> {
        let (width, height) = grid_dimensions(&rows)?;
        let mut tiles = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, mut tile) in row.into_iter().enumerate() {
                let position = Coordinate::new(x as i32, y as i32);
                if tile.coordinate != position {
                    debug!(?position, stated = ?tile.coordinate, "re-stamping tile coordinate");
                    tile.coordinate = position;
                }
                tile.index = None;
                tiles.push(tile);
            }
        }
        Ok(Self::assemble(width, height, tiles, config))
    }

    fn assemble(width: usize, height: usize, tiles: Vec<Tile>, config: &LevelConfig) -> Self {
        let mut grid = Self {
            width,
            height,
            tiles,
            nodes: Vec::new(),
            design: config.design,
            start: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        };
        grid.rebuild_indices();
        grid.place_start_and_exit();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn design(&self) -> DesignLabel {
        self.design
    }

    /// Read view of the grid, one slice per row.
    pub fn get_layout(&self) -> Chunks<'_, Tile> {
        self.tiles.chunks(self.width)
    }

    /// All tiles in scan order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Snapshot of the tile kinds, `rows[y][x]`.
    pub fn kinds(&self) -> KindGrid {
        self.get_layout().map(|row| row.iter().map(Tile::kind).collect()).collect()
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.y >= 0
            && (coordinate.x as usize) < self.width
            && (coordinate.y as usize) < self.height
    }

    pub(crate) fn cell_index(&self, coordinate: Coordinate) -> Option<usize> {
        self.in_bounds(coordinate)
            .then(|| (coordinate.y as usize) * self.width + (coordinate.x as usize))
    }

    pub fn get_tile_at(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.cell_index(coordinate).map(|cell| &self.tiles[cell])
    }

    pub fn get_start(&self) -> Option<&Tile> {
        self.start.map(|cell| &self.tiles[cell])
    }

    pub fn set_start(&mut self, coordinate: Coordinate) -> Result<(), LevelError> {
        let cell = self.cell_index(coordinate).ok_or(LevelError::OutOfBounds(coordinate))?;
        self.start = Some(cell);
        Ok(())
    }

    /// The first Exit tile in scan order.
    pub fn get_end(&self) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.kind == TileKind::Exit)
    }

    pub fn get_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The accessible tile carrying graph index `index`.
    pub fn tile_by_index(&self, index: usize) -> Option<&Tile> {
        self.nodes.get(index).map(|&cell| &self.tiles[cell])
    }

    pub fn tiles_of_kind(&self, kind: TileKind) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |tile| tile.kind == kind)
    }

    /// Replaces the kind of the tile at `coordinate` and reindexes the whole grid.
    ///
    /// The coordinate must belong to this grid; anything else is a caller bug
    /// and is ignored outside debug builds.
    pub fn change_tile_kind(&mut self, coordinate: Coordinate, kind: TileKind) {
        debug_assert!(
            self.in_bounds(coordinate),
            "change_tile_kind called with {coordinate:?} outside a {}x{} level",
            self.width,
            self.height
        );
        let Some(cell) = self.cell_index(coordinate) else {
            return;
        };
        let tile = &mut self.tiles[cell];
        tile.kind = kind;
        tile.texture_variant = None;
        self.rebuild_indices();
    }

    /// Stores a texture variant chosen by the renderer. Cleared when the kind changes.
    pub fn set_texture_variant(
        &mut self,
        coordinate: Coordinate,
        variant: impl Into<String>,
    ) -> Result<(), LevelError> {
        let cell = self.cell_index(coordinate).ok_or(LevelError::OutOfBounds(coordinate))?;
        self.tiles[cell].texture_variant = Some(variant.into());
        Ok(())
    }

    /// Uniform choice over tiles of `kind`, or over all tiles without a filter.
    pub fn get_random_tile(&mut self, kind: Option<TileKind>) -> Option<&Tile> {
        let candidates: Vec<usize> = (0..self.tiles.len())
            .filter(|&cell| kind.is_none_or(|kind| self.tiles[cell].kind == kind))
            .collect();
        let cell = self.pick(&candidates)?;
        Some(&self.tiles[cell])
    }

    pub fn get_random_tile_point(&mut self, kind: Option<TileKind>) -> Option<Coordinate> {
        self.get_random_tile(kind).map(Tile::coordinate)
    }

    pub(crate) fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.next_u64() as usize % candidates.len()])
    }

    /// Debug dump: `W` for walls, `F` for floors and `E` for every other kind.
    pub fn print_level(&self) -> String {
        let mut output = String::with_capacity((self.width + 1) * self.height);
        for row in self.get_layout() {
            for tile in row {
                output.push(match tile.kind {
                    TileKind::Wall => 'W',
                    TileKind::Floor => 'F',
                    _ => 'E',
                });
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests;
