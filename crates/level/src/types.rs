use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

/// Grid cell address. Fields are declared `y` first so the derived ordering is
/// row-major scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub y: i32,
    pub x: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    /// Wraps at the `i32` edges; callers bounds-check the result.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y.wrapping_add(dy), x: self.x.wrapping_add(dx) }
    }

    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Skip,
    Floor,
    Wall,
    Exit,
    Hole,
    Door,
}

impl TileKind {
    pub const ALL: [TileKind; 6] = [
        TileKind::Skip,
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Exit,
        TileKind::Hole,
        TileKind::Door,
    ];

    /// Floor, Exit and Door can be walked on. Holes are deliberately not.
    pub const fn is_accessible(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Exit | TileKind::Door)
    }

    /// Glyph used by the level text format.
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Skip => 'S',
            TileKind::Floor => 'F',
            TileKind::Wall => 'W',
            TileKind::Exit => 'E',
            TileKind::Hole => 'H',
            TileKind::Door => 'D',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        TileKind::ALL.into_iter().find(|kind| kind.glyph() == glyph.to_ascii_uppercase())
    }
}

/// Visual theme of a level. Only affects texture paths, never rule matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignLabel {
    #[default]
    Default,
    Forest,
    Ice,
    Fire,
    Temple,
    Dark,
    Rainbow,
}

impl DesignLabel {
    pub const ALL: [DesignLabel; 7] = [
        DesignLabel::Default,
        DesignLabel::Forest,
        DesignLabel::Ice,
        DesignLabel::Fire,
        DesignLabel::Temple,
        DesignLabel::Dark,
        DesignLabel::Rainbow,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DesignLabel::Default => "default",
            DesignLabel::Forest => "forest",
            DesignLabel::Ice => "ice",
            DesignLabel::Fire => "fire",
            DesignLabel::Temple => "temple",
            DesignLabel::Dark => "dark",
            DesignLabel::Rainbow => "rainbow",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.next_u64() as usize % Self::ALL.len()]
    }
}

/// A single cell of a [`TileGrid`](crate::TileGrid).
///
/// Tiles are owned by their grid. The graph index is assigned by the grid and
/// is `None` for every tile that cannot be walked on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub(crate) coordinate: Coordinate,
    pub(crate) kind: TileKind,
    pub(crate) index: Option<usize>,
    pub(crate) texture_variant: Option<String>,
}

impl Tile {
    pub fn new(coordinate: Coordinate, kind: TileKind) -> Self {
        Self { coordinate, kind, index: None, texture_variant: None }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_accessible(&self) -> bool {
        self.kind.is_accessible()
    }

    pub fn texture_variant(&self) -> Option<&str> {
        self.texture_variant.as_deref()
    }
}
