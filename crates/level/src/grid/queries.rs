//! Neighbourhood, range and area lookups over a level.

use std::collections::{BTreeSet, VecDeque};

use super::TileGrid;
use crate::types::{Coordinate, Tile};

/// Up, right, down, left.
pub(crate) const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// All eight neighbours in scan order.
pub(crate) const NEIGHBOUR_OFFSETS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

impl TileGrid {
    /// In-bounds orthogonal neighbours of `coordinate`, regardless of kind.
    pub fn neighbours(&self, coordinate: Coordinate) -> Vec<&Tile> {
        ORTHOGONAL_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.get_tile_at(coordinate.offset(dx, dy)))
            .collect()
    }

    /// Tiles whose centre lies within `radius` of the centre of `center`,
    /// flooding outward from `center`. Returned in scan order.
    pub fn tiles_in_range(&self, center: Coordinate, radius: f32) -> Vec<&Tile> {
        let Some(origin) = self.cell_index(center) else {
            return Vec::new();
        };
        let mut found = BTreeSet::from([origin]);
        let mut queue = VecDeque::from([center]);
        while let Some(current) = queue.pop_front() {
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                let next = current.offset(dx, dy);
                let Some(cell) = self.cell_index(next) else {
                    continue;
                };
                if within_radius(center, next, radius) && found.insert(cell) {
                    queue.push_back(next);
                }
            }
        }
        found.into_iter().map(|cell| &self.tiles[cell]).collect()
    }

    pub fn accessible_tiles_in_range(&self, center: Coordinate, radius: f32) -> Vec<&Tile> {
        let mut tiles = self.tiles_in_range(center, radius);
        tiles.retain(|tile| tile.is_accessible());
        tiles
    }

    pub fn random_accessible_coordinate_in_range(
        &mut self,
        center: Coordinate,
        radius: f32,
    ) -> Option<Coordinate> {
        let candidates: Vec<usize> = self
            .accessible_tiles_in_range(center, radius)
            .into_iter()
            .filter_map(|tile| self.cell_index(tile.coordinate))
            .collect();
        let cell = self.pick(&candidates)?;
        Some(self.tiles[cell].coordinate)
    }

    /// Tiles inside the inclusive rectangle spanned by two corners, clamped to
    /// the grid. Corner order does not matter.
    pub fn tiles_in_area(&self, corner_a: Coordinate, corner_b: Coordinate) -> Vec<&Tile> {
        let min_x = corner_a.x.min(corner_b.x).max(0);
        let max_x = corner_a.x.max(corner_b.x).min(self.width as i32 - 1);
        let min_y = corner_a.y.min(corner_b.y).max(0);
        let max_y = corner_a.y.max(corner_b.y).min(self.height as i32 - 1);
        let mut tiles = Vec::new();
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if let Some(tile) = self.get_tile_at(Coordinate::new(x, y)) {
                    tiles.push(tile);
                }
            }
        }
        tiles
    }
}

fn within_radius(center: Coordinate, other: Coordinate, radius: f32) -> bool {
    let dx = (other.x - center.x) as f32;
    let dy = (other.y - center.y) as f32;
    dx * dx + dy * dy <= radius * radius
}
