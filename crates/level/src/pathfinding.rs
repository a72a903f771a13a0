//! Deterministic shortest paths over the walkable tiles of a level.
//! This module exists so movement queries share one adjacency and tie-break rule.
//! It does not own the graph indices; those come from `TileGrid`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::grid::{NEIGHBOUR_OFFSETS, TileGrid};
use crate::types::{Coordinate, Tile};

/// Result of a path query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Path {
    /// Start-to-end inclusive, never empty.
    Found(Vec<Coordinate>),
    NoPath,
}

impl Path {
    pub fn is_found(&self) -> bool {
        matches!(self, Path::Found(_))
    }

    pub fn tiles(&self) -> &[Coordinate] {
        match self {
            Path::Found(tiles) => tiles,
            Path::NoPath => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.tiles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles().is_empty()
    }

    pub fn first(&self) -> Option<Coordinate> {
        self.tiles().first().copied()
    }

    pub fn last(&self) -> Option<Coordinate> {
        self.tiles().last().copied()
    }
}

/// Open-set entry. Ordering is (f, h, graph index), and graph indices follow
/// scan order, so ties resolve the same way on every run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    node: usize,
}

impl TileGrid {
    /// A* over accessible tiles with 8-way movement and unit step cost.
    ///
    /// Diagonal steps may not cut a corner: both orthogonal cells sharing the
    /// corner must be accessible too.
    pub fn find_path(&self, from: Coordinate, to: Coordinate) -> Path {
        let (Some(start), Some(goal)) = (self.node_at(from), self.node_at(to)) else {
            return Path::NoPath;
        };
        if start == goal {
            return Path::Found(vec![from]);
        }

        let node_count = self.get_node_count();
        let mut open_set = BTreeSet::new();
        let mut g_score = vec![u32::MAX; node_count];
        let mut came_from: Vec<Option<usize>> = vec![None; node_count];
        let mut closed = vec![false; node_count];

        let h = from.chebyshev(to);
        open_set.insert(OpenNode { f: h, h, node: start });
        g_score[start] = 0;

        let mut expanded = 0_usize;
        while let Some(current) = open_set.pop_first() {
            if current.node == goal {
                trace!(?from, ?to, expanded, "path found");
                return Path::Found(self.reconstruct_path(&came_from, start, goal));
            }
            if closed[current.node] {
                continue;
            }
            closed[current.node] = true;
            expanded += 1;

            let position = self.node_coordinate(current.node);
            let tentative = g_score[current.node] + 1;
            for next in self.walkable_neighbours(position) {
                if tentative < g_score[next] {
                    came_from[next] = Some(current.node);
                    g_score[next] = tentative;
                    let h = self.node_coordinate(next).chebyshev(to);
                    open_set.insert(OpenNode { f: tentative + h, h, node: next });
                }
            }
        }
        trace!(?from, ?to, expanded, "no path");
        Path::NoPath
    }

    pub fn find_path_between_tiles(&self, from: &Tile, to: &Tile) -> Path {
        self.find_path(from.coordinate(), to.coordinate())
    }

    fn node_at(&self, coordinate: Coordinate) -> Option<usize> {
        self.get_tile_at(coordinate).and_then(Tile::index)
    }

    fn node_coordinate(&self, node: usize) -> Coordinate {
        self.tile_by_index(node).map_or(Coordinate::new(-1, -1), Tile::coordinate)
    }

    fn is_accessible_at(&self, coordinate: Coordinate) -> bool {
        self.get_tile_at(coordinate).is_some_and(Tile::is_accessible)
    }

    fn walkable_neighbours(&self, position: Coordinate) -> impl Iterator<Item = usize> + '_ {
        NEIGHBOUR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let diagonal = dx != 0 && dy != 0;
            if diagonal
                && !(self.is_accessible_at(position.offset(dx, 0))
                    && self.is_accessible_at(position.offset(0, dy)))
            {
                return None;
            }
            self.node_at(position.offset(dx, dy))
        })
    }

    fn reconstruct_path(
        &self,
        came_from: &[Option<usize>],
        start: usize,
        goal: usize,
    ) -> Vec<Coordinate> {
        let mut node = goal;
        let mut result = vec![self.node_coordinate(node)];
        while node != start {
            let Some(previous) = came_from[node] else {
                break;
            };
            node = previous;
            result.push(self.node_coordinate(node));
        }
        result.reverse();
        result
    }
}
