use super::*;
use crate::layout::parse_glyphs;

fn grid(glyphs: &str) -> TileGrid {
    TileGrid::from_kinds(parse_glyphs(glyphs).expect("layout"), DesignLabel::Default)
        .expect("grid")
}

fn assert_indices_contiguous(level: &TileGrid) {
    let mut expected = 0;
    for tile in level.tiles() {
        if tile.is_accessible() {
            assert_eq!(tile.index(), Some(expected), "tile {:?}", tile.coordinate());
            assert_eq!(level.tile_by_index(expected), Some(tile));
            expected += 1;
        } else {
            assert_eq!(tile.index(), None, "tile {:?}", tile.coordinate());
        }
    }
    assert_eq!(level.get_node_count(), expected);
}

#[test]
fn accessible_tiles_are_indexed_in_scan_order() {
    let level = grid("WFD\nHEF\nSFW");
    assert_indices_contiguous(&level);
    assert_eq!(level.get_node_count(), 5);
    assert_eq!(level.get_tile_at(Coordinate::new(2, 0)).and_then(Tile::index), Some(1));
    assert_eq!(level.get_tile_at(Coordinate::new(0, 1)).and_then(Tile::index), None);
}

#[test]
fn changing_a_kind_reindexes_the_whole_grid() {
    let mut level = grid("FFF");
    assert_eq!(level.get_node_count(), 3);

    level.change_tile_kind(Coordinate::new(0, 0), TileKind::Wall);
    assert_eq!(level.get_node_count(), 2);
    let indices: Vec<_> = level.tiles().iter().filter_map(Tile::index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_indices_contiguous(&level);

    level.change_tile_kind(Coordinate::new(0, 0), TileKind::Exit);
    assert_eq!(level.get_node_count(), 3);
    assert_indices_contiguous(&level);
}

#[test]
fn indices_do_not_depend_on_mutation_history() {
    let mut churned = grid("FFFF\nFWFF");
    churned.change_tile_kind(Coordinate::new(3, 0), TileKind::Hole);
    churned.change_tile_kind(Coordinate::new(1, 1), TileKind::Door);
    churned.change_tile_kind(Coordinate::new(3, 0), TileKind::Floor);

    let fresh = TileGrid::from_kinds(churned.kinds(), DesignLabel::Default).expect("grid");
    let churned_indices: Vec<_> = churned.tiles().iter().map(Tile::index).collect();
    let fresh_indices: Vec<_> = fresh.tiles().iter().map(Tile::index).collect();
    assert_eq!(churned_indices, fresh_indices);
}

#[test]
fn existing_exit_is_kept_and_start_is_a_floor() {
    let level = grid("FWE\nFWF\nFFF");
    assert_eq!(level.tiles_of_kind(TileKind::Exit).count(), 1);
    assert_eq!(level.get_end().map(Tile::coordinate), Some(Coordinate::new(2, 0)));
    assert_eq!(level.get_start().map(Tile::kind), Some(TileKind::Floor));
}

#[test]
fn missing_exit_is_promoted_away_from_the_start() {
    let level = grid("FFF\nWWW");
    assert_eq!(level.tiles_of_kind(TileKind::Exit).count(), 1);
    let start = level.get_start().expect("start");
    let end = level.get_end().expect("end");
    assert_ne!(start.coordinate(), end.coordinate());
    assert_eq!(start.kind(), TileKind::Floor);
    assert_indices_contiguous(&level);
}

#[test]
fn lone_floor_becomes_both_start_and_exit() {
    let level = grid("WFW");
    let start = level.get_start().expect("start");
    assert_eq!(start.coordinate(), Coordinate::new(1, 0));
    assert_eq!(start.kind(), TileKind::Exit);
    assert_eq!(level.get_end().map(Tile::coordinate), Some(Coordinate::new(1, 0)));
}

#[test]
fn level_without_accessible_tiles_has_no_start_or_exit() {
    let level = grid("WHS\nWWW");
    assert_eq!(level.get_node_count(), 0);
    assert!(level.get_start().is_none());
    assert!(level.get_end().is_none());
}

#[test]
fn door_only_level_promotes_a_door() {
    let level = grid("WDW");
    assert!(level.get_start().is_none());
    assert_eq!(level.get_end().map(Tile::coordinate), Some(Coordinate::new(1, 0)));
}

#[test]
fn print_level_collapses_non_wall_non_floor_kinds() {
    assert_eq!(grid("WF\nEW").print_level(), "WF\nEW\n");
    let mut level = grid("DHSE");
    level.change_tile_kind(Coordinate::new(0, 0), TileKind::Floor);
    assert_eq!(level.print_level(), "FEEE\n");
}

#[test]
fn out_of_bounds_lookups_return_none() {
    let level = grid("FE\nWW");
    for coordinate in [
        Coordinate::new(-1, 0),
        Coordinate::new(0, -1),
        Coordinate::new(2, 0),
        Coordinate::new(0, 2),
    ] {
        assert!(!level.in_bounds(coordinate));
        assert!(level.get_tile_at(coordinate).is_none());
    }
    assert!(level.tile_by_index(2).is_none());
}

#[test]
fn set_start_rejects_outside_coordinates() {
    let mut level = grid("FE");
    let err = level.set_start(Coordinate::new(5, 0)).expect_err("outside");
    assert!(matches!(err, LevelError::OutOfBounds(c) if c == Coordinate::new(5, 0)));

    level.set_start(Coordinate::new(1, 0)).expect("inside");
    assert_eq!(level.get_start().map(Tile::kind), Some(TileKind::Exit));
}

#[test]
fn random_tile_respects_the_kind_filter() {
    let mut level = grid("FWF\nWHW\nFWE");
    for _ in 0..32 {
        let tile = level.get_random_tile(Some(TileKind::Wall)).expect("wall");
        assert_eq!(tile.kind(), TileKind::Wall);
    }
    assert!(level.get_random_tile(Some(TileKind::Door)).is_none());
    assert!(level.get_random_tile_point(None).is_some());
    assert_eq!(
        level.get_random_tile_point(Some(TileKind::Hole)),
        Some(Coordinate::new(1, 1))
    );
}

#[test]
fn same_seed_gives_same_choices() {
    let kinds = parse_glyphs("FFFF\nFFFF\nFFFF").expect("layout");
    let config = LevelConfig { seed: 7, design: DesignLabel::Temple };
    let mut first = TileGrid::from_kinds_with_config(kinds.clone(), &config).expect("grid");
    let mut second = TileGrid::from_kinds_with_config(kinds, &config).expect("grid");

    assert_eq!(first.get_start(), second.get_start());
    assert_eq!(first.get_end(), second.get_end());
    for _ in 0..16 {
        assert_eq!(first.get_random_tile_point(None), second.get_random_tile_point(None));
    }
    assert_eq!(first.design(), DesignLabel::Temple);
}

#[test]
fn adopted_tiles_are_restamped_and_reindexed() {
    let mut stray = Tile::new(Coordinate::new(9, 9), TileKind::Floor);
    stray.index = Some(42);
    let rows = vec![
        vec![Tile::new(Coordinate::new(0, 0), TileKind::Wall), stray],
        vec![
            Tile::new(Coordinate::new(0, 1), TileKind::Exit),
            Tile::new(Coordinate::new(1, 1), TileKind::Hole),
        ],
    ];
    let level = TileGrid::from_tiles(rows).expect("grid");
    let tile = level.get_tile_at(Coordinate::new(1, 0)).expect("tile");
    assert_eq!(tile.coordinate(), Coordinate::new(1, 0));
    assert_eq!(tile.index(), Some(0));
    assert_indices_contiguous(&level);
}

#[test]
fn ragged_input_is_rejected() {
    let rows = vec![vec![TileKind::Floor, TileKind::Floor], vec![TileKind::Floor]];
    assert!(matches!(
        TileGrid::from_kinds(rows, DesignLabel::Default),
        Err(LevelError::RaggedRow { row: 1, .. })
    ));
    assert!(matches!(TileGrid::from_tiles(Vec::new()), Err(LevelError::EmptyLayout)));
}

#[test]
fn layout_rows_match_dimensions() {
    let level = grid("FFF\nWWW");
    assert_eq!((level.width(), level.height()), (3, 2));
    let rows: Vec<_> = level.get_layout().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].iter().all(|tile| tile.kind() == TileKind::Wall));
}

#[test]
fn kind_change_clears_the_texture_variant() {
    let mut level = grid("FWE");
    level.set_texture_variant(Coordinate::new(1, 0), "wall/wall_top").expect("set");
    assert_eq!(
        level.get_tile_at(Coordinate::new(1, 0)).and_then(Tile::texture_variant),
        Some("wall/wall_top")
    );
    level.change_tile_kind(Coordinate::new(1, 0), TileKind::Floor);
    assert_eq!(level.get_tile_at(Coordinate::new(1, 0)).and_then(Tile::texture_variant), None);
    assert!(level.set_texture_variant(Coordinate::new(3, 0), "x").is_err());
}

#[test]
fn neighbours_stay_inside_the_grid() {
    let level = grid("FFF\nFFF\nFFE");
    assert_eq!(level.neighbours(Coordinate::new(0, 0)).len(), 2);
    assert_eq!(level.neighbours(Coordinate::new(1, 0)).len(), 3);
    let centre: Vec<_> =
        level.neighbours(Coordinate::new(1, 1)).iter().map(|tile| tile.coordinate()).collect();
    assert_eq!(
        centre,
        vec![
            Coordinate::new(1, 0),
            Coordinate::new(2, 1),
            Coordinate::new(1, 2),
            Coordinate::new(0, 1),
        ]
    );
}

#[test]
fn range_queries_use_centre_distance() {
    let mut level = grid("FFFFF\nFFFFF\nFFWFF\nFFFFF\nFFFFE");
    let centre = Coordinate::new(2, 2);
    assert_eq!(level.tiles_in_range(centre, 0.0).len(), 1);
    assert_eq!(level.tiles_in_range(centre, 1.0).len(), 5);
    assert_eq!(level.tiles_in_range(centre, 1.5).len(), 9);
    assert_eq!(level.accessible_tiles_in_range(centre, 1.5).len(), 8);
    assert!(level.tiles_in_range(Coordinate::new(-3, 0), 2.0).is_empty());

    let in_range = level.tiles_in_range(centre, 1.5);
    assert!(in_range.windows(2).all(|pair| pair[0].coordinate() < pair[1].coordinate()));

    for _ in 0..16 {
        let picked = level.random_accessible_coordinate_in_range(centre, 1.0).expect("pick");
        assert!(picked.chebyshev(centre) == 1);
    }
}

#[test]
fn area_is_inclusive_and_clamped() {
    let level = grid("FFF\nWWE");
    assert_eq!(level.tiles_in_area(Coordinate::new(3, 0), Coordinate::new(-1, 1)).len(), 6);
    let column: Vec<_> = level
        .tiles_in_area(Coordinate::new(1, 1), Coordinate::new(1, 0))
        .iter()
        .map(|tile| tile.coordinate())
        .collect();
    assert_eq!(column, vec![Coordinate::new(1, 0), Coordinate::new(1, 1)]);
    assert!(level.tiles_in_area(Coordinate::new(5, 5), Coordinate::new(7, 7)).is_empty());
}

#[test]
fn neighbours_of_extreme_coordinates_are_empty() {
    let level = grid("FE");
    assert!(level.neighbours(Coordinate::new(i32::MAX, 0)).is_empty());
    assert!(level.neighbours(Coordinate::new(0, i32::MIN)).is_empty());
    assert!(level.tiles_in_range(Coordinate::new(i32::MIN, i32::MAX), 3.0).is_empty());
}
