//! Matching rules for holes, walls and doors.
//!
//! "Inside" means a cell a player could see as part of the room: accessible
//! or a hole. Cells outside the level are never inside and never walls.

use super::{Neighborhood, VariantId};
use crate::types::TileKind;

const CROSS_UPPER_LEFT_BOTTOM_RIGHT: VariantId =
    VariantId("wall/wall_cross_upper_left_bottom_right");
const CROSS_UPPER_RIGHT_BOTTOM_LEFT: VariantId =
    VariantId("wall/wall_cross_upper_right_bottom_left");
const INNER_BOTTOM_LEFT: VariantId = VariantId("wall/wall_inner_corner_bottom_left");
const INNER_BOTTOM_RIGHT: VariantId = VariantId("wall/wall_inner_corner_bottom_right");
const INNER_UPPER_RIGHT: VariantId = VariantId("wall/wall_inner_corner_upper_right");
const INNER_UPPER_LEFT: VariantId = VariantId("wall/wall_inner_corner_upper_left");
const OUTER_BOTTOM_LEFT: VariantId = VariantId("wall/wall_outer_corner_bottom_left");
const OUTER_BOTTOM_RIGHT: VariantId = VariantId("wall/wall_outer_corner_bottom_right");
const OUTER_UPPER_RIGHT: VariantId = VariantId("wall/wall_outer_corner_upper_right");
const OUTER_UPPER_LEFT: VariantId = VariantId("wall/wall_outer_corner_upper_left");
const WALL_RIGHT: VariantId = VariantId("wall/wall_right");
const WALL_LEFT: VariantId = VariantId("wall/wall_left");
const WALL_TOP: VariantId = VariantId("wall/wall_top");
const WALL_BOTTOM: VariantId = VariantId("wall/wall_bottom");
const DOOR_TOP: VariantId = VariantId("door/top");
const DOOR_RIGHT: VariantId = VariantId("door/right");
const DOOR_LEFT: VariantId = VariantId("door/left");
const DOOR_BOTTOM: VariantId = VariantId("door/bottom");

/// Named views of the eight neighbours.
struct Around {
    above: Option<TileKind>,
    below: Option<TileKind>,
    left: Option<TileKind>,
    right: Option<TileKind>,
    upper_left: Option<TileKind>,
    upper_right: Option<TileKind>,
    bottom_left: Option<TileKind>,
    bottom_right: Option<TileKind>,
}

impl Around {
    fn of(n: &Neighborhood) -> Self {
        Self {
            above: n.at(0, 1),
            below: n.at(0, -1),
            left: n.at(-1, 0),
            right: n.at(1, 0),
            upper_left: n.at(-1, 1),
            upper_right: n.at(1, 1),
            bottom_left: n.at(-1, -1),
            bottom_right: n.at(1, -1),
        }
    }
}

fn is_wall(kind: Option<TileKind>) -> bool {
    kind == Some(TileKind::Wall)
}

fn is_wall_or_door(kind: Option<TileKind>) -> bool {
    matches!(kind, Some(TileKind::Wall | TileKind::Door))
}

fn is_accessible(kind: Option<TileKind>) -> bool {
    kind.is_some_and(TileKind::is_accessible)
}

fn is_inside(kind: Option<TileKind>) -> bool {
    is_accessible(kind) || kind == Some(TileKind::Hole)
}

pub(super) fn hole_variant(n: &Neighborhood) -> VariantId {
    if n.at(0, 1) == Some(TileKind::Hole) { VariantId::HOLE_STACKED } else { VariantId::HOLE }
}

/// A door with no accessible orthogonal side gets no variant, even if it
/// would match a wall rule.
pub(super) fn door_variant(n: &Neighborhood) -> Option<VariantId> {
    let a = Around::of(n);
    if is_accessible(a.below) {
        Some(DOOR_TOP)
    } else if is_accessible(a.left) {
        Some(DOOR_RIGHT)
    } else if is_accessible(a.right) {
        Some(DOOR_LEFT)
    } else if is_accessible(a.above) {
        Some(DOOR_BOTTOM)
    } else {
        None
    }
}

pub(super) fn wall_variant(n: &Neighborhood) -> Option<VariantId> {
    let a = Around::of(n);
    cross(&a).or_else(|| inner_corner(&a)).or_else(|| outer_corner(&a)).or_else(|| side(&a))
}

fn cross(a: &Around) -> Option<VariantId> {
    let boxed_in = is_wall(a.above) && is_wall(a.below) && is_wall(a.left) && is_wall(a.right);
    if !boxed_in {
        return None;
    }
    if is_inside(a.upper_left) && is_inside(a.bottom_right) {
        Some(CROSS_UPPER_LEFT_BOTTOM_RIGHT)
    } else if is_inside(a.upper_right) && is_inside(a.bottom_left) {
        Some(CROSS_UPPER_RIGHT_BOTTOM_LEFT)
    } else {
        None
    }
}

fn inner_corner(a: &Around) -> Option<VariantId> {
    let (above, below, left, right) =
        (is_inside(a.above), is_inside(a.below), is_inside(a.left), is_inside(a.right));
    if is_wall(a.above)
        && is_wall(a.right)
        && (left && is_inside(a.bottom_right)
            || below && is_inside(a.upper_left)
            || below && left)
    {
        Some(INNER_BOTTOM_LEFT)
    } else if is_wall(a.above)
        && is_wall(a.left)
        && (right && is_inside(a.bottom_left)
            || below && is_inside(a.upper_right)
            || below && right)
    {
        Some(INNER_BOTTOM_RIGHT)
    } else if is_wall(a.below)
        && is_wall(a.left)
        && (right && is_inside(a.upper_left)
            || above && is_inside(a.bottom_right)
            || above && right)
    {
        Some(INNER_UPPER_RIGHT)
    } else if is_wall(a.below)
        && is_wall(a.right)
        && (left && is_inside(a.upper_right)
            || above && is_inside(a.bottom_left)
            || above && left)
    {
        Some(INNER_UPPER_LEFT)
    } else {
        None
    }
}

fn outer_corner(a: &Around) -> Option<VariantId> {
    if is_wall(a.above) && is_wall(a.right) && is_inside(a.upper_right) {
        Some(OUTER_BOTTOM_LEFT)
    } else if is_wall(a.above) && is_wall(a.left) && is_inside(a.upper_left) {
        Some(OUTER_BOTTOM_RIGHT)
    } else if is_wall(a.below) && is_wall(a.left) && is_inside(a.bottom_left) {
        Some(OUTER_UPPER_RIGHT)
    } else if is_wall(a.below) && is_wall(a.right) && is_inside(a.bottom_right) {
        Some(OUTER_UPPER_LEFT)
    } else {
        None
    }
}

/// Straight wall segments, named for the side of the room the wall closes.
fn side(a: &Around) -> Option<VariantId> {
    let vertical_run = is_wall_or_door(a.above) && is_wall_or_door(a.below);
    let horizontal_run = is_wall_or_door(a.left) && is_wall_or_door(a.right);
    if vertical_run && is_inside(a.left) {
        Some(WALL_RIGHT)
    } else if vertical_run && is_inside(a.right) {
        Some(WALL_LEFT)
    } else if horizontal_run && is_inside(a.below) {
        Some(WALL_TOP)
    } else if horizontal_run && is_inside(a.above) {
        Some(WALL_BOTTOM)
    } else {
        None
    }
}
