//! Neighbourhood-based texture variant selection.
//! This module exists so renderers can resolve a tile's look from its 3x3
//! surroundings with a pure function and no shared factory state.
//! It does not own tiles or cache results; callers decide what to keep.

mod rules;

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::grid::TileGrid;
use crate::types::{Coordinate, DesignLabel, TileKind};

/// Relative texture name such as `wall/wall_top`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VariantId(&'static str);

impl VariantId {
    pub const EMPTY: VariantId = VariantId("floor/empty");
    pub const FLOOR: VariantId = VariantId("floor/floor_1");
    pub const LADDER: VariantId = VariantId("floor/floor_ladder");
    pub const HOLE: VariantId = VariantId("floor/floor_hole");
    pub const HOLE_STACKED: VariantId = VariantId("floor/floor_hole1");

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The 3x3 kinds around a tile. `None` marks a cell outside the level.
///
/// Offsets follow the level's y-up world: "above" is `y + 1`, "below" is `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    /// `cells[dy + 1][dx + 1]`.
    cells: [[Option<TileKind>; 3]; 3],
}

impl Neighborhood {
    pub fn new(cells: [[Option<TileKind>; 3]; 3]) -> Self {
        Self { cells }
    }

    pub fn from_kinds(rows: &[Vec<TileKind>], center: Coordinate) -> Self {
        Self::collect(center, |coordinate| {
            if coordinate.x < 0 || coordinate.y < 0 {
                return None;
            }
            rows.get(coordinate.y as usize)?.get(coordinate.x as usize).copied()
        })
    }

    pub fn from_grid(grid: &TileGrid, center: Coordinate) -> Self {
        Self::collect(center, |coordinate| grid.get_tile_at(coordinate).map(|tile| tile.kind()))
    }

    fn collect(center: Coordinate, kind_at: impl Fn(Coordinate) -> Option<TileKind>) -> Self {
        let mut cells = [[None; 3]; 3];
        for (row, dy) in (-1..=1).enumerate() {
            for (column, dx) in (-1..=1).enumerate() {
                cells[row][column] = kind_at(center.offset(dx, dy));
            }
        }
        Self { cells }
    }

    pub fn at(&self, dx: i32, dy: i32) -> Option<TileKind> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
            return None;
        }
        self.cells[(dy + 1) as usize][(dx + 1) as usize]
    }
}

/// Picks the texture variant for a tile of kind `center`.
///
/// Pure: the same kind and neighbourhood always give the same variant.
pub fn select_variant(
    center: TileKind,
    neighborhood: &Neighborhood,
    coordinate: Coordinate,
) -> VariantId {
    let variant = match center {
        TileKind::Skip => Some(VariantId::EMPTY),
        TileKind::Floor => Some(VariantId::FLOOR),
        TileKind::Exit => Some(VariantId::LADDER),
        TileKind::Hole => Some(rules::hole_variant(neighborhood)),
        TileKind::Wall => rules::wall_variant(neighborhood),
        TileKind::Door => rules::door_variant(neighborhood),
    };
    variant.unwrap_or_else(|| {
        trace!(x = coordinate.x, y = coordinate.y, ?center, "no texture rule matched");
        VariantId::EMPTY
    })
}

/// `dungeon/<design>/<variant>.png`
pub fn texture_path(design: DesignLabel, variant: VariantId) -> String {
    format!("dungeon/{}/{}.png", design.as_str(), variant)
}

/// Variant of every tile of `grid`, in scan order.
pub fn resolve_variants(grid: &TileGrid) -> Vec<(Coordinate, VariantId)> {
    grid.tiles()
        .iter()
        .map(|tile| {
            let coordinate = tile.coordinate();
            let neighborhood = Neighborhood::from_grid(grid, coordinate);
            (coordinate, select_variant(tile.kind(), &neighborhood, coordinate))
        })
        .collect()
}
