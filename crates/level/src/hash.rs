//! Stable layout hashing for determinism checks.
//! This module exists so tools and tests can compare two levels with one number.
//! It does not hash texture choices or random stream position.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::grid::TileGrid;
use crate::types::TileKind;

impl TileGrid {
    pub fn layout_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.width() as u64);
        hasher.write_u64(self.height() as u64);
        for tile in self.tiles() {
            hasher.write_u8(match tile.kind() {
                TileKind::Skip => 0,
                TileKind::Floor => 1,
                TileKind::Wall => 2,
                TileKind::Exit => 3,
                TileKind::Hole => 4,
                TileKind::Door => 5,
            });
        }
        if let Some(start) = self.get_start() {
            hasher.write_i32(start.coordinate().x);
            hasher.write_i32(start.coordinate().y);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::parse_glyphs;
    use crate::types::{Coordinate, DesignLabel, TileKind};
    use crate::TileGrid;

    fn grid(glyphs: &str) -> TileGrid {
        TileGrid::from_kinds(parse_glyphs(glyphs).expect("layout"), DesignLabel::Default)
            .expect("grid")
    }

    #[test]
    fn hash_tracks_kinds_not_design() {
        let a = grid("FWE\nFFF");
        let b = TileGrid::from_kinds(a.kinds(), DesignLabel::Dark).expect("grid");
        assert_eq!(a.layout_hash(), b.layout_hash());

        let mut c = a.clone();
        c.change_tile_kind(Coordinate::new(1, 0), TileKind::Door);
        assert_ne!(a.layout_hash(), c.layout_hash());
    }

    #[test]
    fn hash_covers_dimensions() {
        assert_ne!(grid("WW\nWW").layout_hash(), grid("WWWW").layout_hash());
    }
}
