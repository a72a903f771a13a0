//! Graph index maintenance and construction-time start/exit placement.

use tracing::{debug, trace};

use super::TileGrid;
use crate::types::TileKind;

impl TileGrid {
    /// Recomputes every graph index with one scan in row-major order.
    ///
    /// Indices depend only on the current kinds, never on mutation history.
    pub fn rebuild_indices(&mut self) {
        self.nodes.clear();
        for (cell, tile) in self.tiles.iter_mut().enumerate() {
            tile.index = if tile.kind.is_accessible() {
                self.nodes.push(cell);
                Some(self.nodes.len() - 1)
            } else {
                None
            };
        }
        trace!(node_count = self.nodes.len(), "rebuilt tile indices");
    }

    /// Picks a random Floor start, then promotes a tile to Exit if the layout has none.
    pub(super) fn place_start_and_exit(&mut self) {
        let floors = self.cells_where(|kind| kind == TileKind::Floor);
        self.start = self.pick(&floors);

        if self.tiles.iter().any(|tile| tile.kind == TileKind::Exit) {
            return;
        }

        let start = self.start;
        let candidates: Vec<usize> = self
            .cells_where(TileKind::is_accessible)
            .into_iter()
            .filter(|&cell| Some(cell) != start)
            .collect();
        let Some(cell) = self.pick(&candidates).or(start) else {
            debug!("level has no accessible tile to promote to exit");
            return;
        };
        debug!(coordinate = ?self.tiles[cell].coordinate, "promoting tile to exit");
        self.tiles[cell].kind = TileKind::Exit;
        self.rebuild_indices();
    }

    fn cells_where(&self, predicate: impl Fn(TileKind) -> bool) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| predicate(tile.kind))
            .map(|(cell, _)| cell)
            .collect()
    }
}
