//! Sight system integration tests

use hexsight::core::config::SightConfig;
use hexsight::core::error::LosError;
use hexsight::grid::*;
use hexsight::session::*;
use hexsight::sight::*;
use proptest::prelude::*;

fn base_pair_map(map_size: i32) -> HexGrid {
    let mut map = HexGrid::new(map_size, 1.0);
    map.set_kind(HexCoord::new(0, 0), CellKind::Base).unwrap();
    map.set_kind(HexCoord::new(2, 0), CellKind::Base).unwrap();
    map
}

#[test]
fn test_single_wall_obstruction() {
    let mut map = base_pair_map(2);
    map.set_kind(HexCoord::new(1, 0), CellKind::Wall).unwrap();

    let result = evaluate(&map, HexCoord::new(0, 0), HexCoord::new(2, 0), SIDE_EPSILON)
        .expect("both endpoints are Base cells");

    // The line from the far-left edge of the origin to the far-right edge of
    // the destination runs straight through the wall.
    assert!(result.blocked.is_blocked(3, 0));
    assert!((0..EDGE_COUNT).any(|edge| result.blocked.row_count(edge) >= 1));
    assert!(!result.fallback_used);

    // Removing the wall clears everything
    map.set_kind(HexCoord::new(1, 0), CellKind::Empty).unwrap();
    let result = evaluate(&map, HexCoord::new(0, 0), HexCoord::new(2, 0), SIDE_EPSILON).unwrap();
    assert_eq!(result.blocked.total(), 0);
}

#[test]
fn test_boundary_query_rejection() {
    let mut map = HexGrid::new(3, 1.0);
    assert!(matches!(
        map.cell_at(HexCoord::new(4, 0)),
        Err(LosError::OutOfBounds { q: 4, r: 0, map_size: 3 })
    ));
    assert!(matches!(
        map.set_kind(HexCoord::new(0, -4), CellKind::Wall),
        Err(LosError::OutOfBounds { .. })
    ));
}

#[test]
fn test_invalid_endpoint_short_circuit() {
    let mut map = base_pair_map(2);
    map.set_kind(HexCoord::new(2, 0), CellKind::Wall).unwrap();

    let mut query = LosQuery::new();
    query.evaluate(&map, HexCoord::new(0, 0), HexCoord::new(-2, 0), SIDE_EPSILON);
    assert!(query.result().is_some());

    assert!(query
        .evaluate(&map, HexCoord::new(0, 0), HexCoord::new(2, 0), SIDE_EPSILON)
        .is_none());
    assert!(query.result().is_none());
    assert!(query.origin().is_none());
    assert!(query.destination().is_none());
}

#[test]
fn test_walled_in_origin_falls_back_to_edge_zero() {
    // A ring of walls around the origin blocks every line leaving it
    let mut map = HexGrid::new(4, 1.0);
    for neighbor in HexCoord::new(0, 0).neighbors() {
        map.set_kind(neighbor, CellKind::Wall).unwrap();
    }
    for ring_two in HexCoord::region(2) {
        if HexCoord::new(0, 0).distance(&ring_two) == 2 {
            map.set_kind(ring_two, CellKind::Wall).unwrap();
        }
    }

    let mut query = LosQuery::new();
    let result = query
        .evaluate(&map, HexCoord::new(0, 0), HexCoord::new(4, 0), SIDE_EPSILON)
        .cloned()
        .unwrap();

    if result.blocked.total() == EDGE_COUNT * EDGE_COUNT {
        assert_eq!(result.best_edge, 0);
        assert!(result.fallback_used);
        assert_eq!(query.unresolved_count(), 1);
    } else {
        assert!(!result.fallback_used);
    }
    assert_eq!(result.grade(), SightGrade::from_blocked_count(result.best_blocked_count));
}

#[test]
fn test_session_click_flow() {
    let config = SightConfig {
        map_size: 3,
        ..SightConfig::default()
    };
    let mut session = LosSession::new(config).unwrap();
    session.set_mode(Mode::Edit);
    // Empty -> Base -> Character -> Wall
    for _ in 0..3 {
        session.pick(Some(HexCoord::new(1, 0)));
    }
    assert_eq!(session.grid().kind_at(HexCoord::new(1, 0)).unwrap(), CellKind::Wall);

    session.set_mode(Mode::Los);
    session.pick(Some(HexCoord::new(0, 0)));
    let outcome = session.pick(Some(HexCoord::new(2, 0)));
    assert_eq!(
        outcome,
        PickOutcome::Selection(SelectionOutcome::Evaluated(HexCoord::new(2, 0)))
    );
    let result = session.result().unwrap().clone();
    assert!(result.blocked.is_blocked(3, 0));

    let lines = session.sight_lines();
    assert_eq!(lines.len(), EDGE_COUNT);
    let blocked_lines = lines.iter().filter(|l| l.tone == SightGrade::Blocked).count();
    assert_eq!(blocked_lines, result.best_blocked_count);

    session.clear_query();
    assert!(session.result().is_none());
    assert!(session.sight_lines().is_empty());
}

#[test]
fn test_character_blocks_then_leaves() {
    let mut session = LosSession::with_grid(SightConfig::default(), base_pair_map(2));
    session.set_kind(HexCoord::new(1, 0), CellKind::Base).unwrap();

    session.set_mode(Mode::Character);
    session.pick(Some(HexCoord::new(1, 0)));
    let blocked = session
        .evaluate(HexCoord::new(0, 0), HexCoord::new(2, 0))
        .unwrap()
        .blocked;
    assert!(blocked.is_blocked(3, 0));

    session.pick(Some(HexCoord::new(1, 0)));
    assert_eq!(session.grid().kind_at(HexCoord::new(1, 0)).unwrap(), CellKind::Base);
    let blocked = session
        .evaluate(HexCoord::new(0, 0), HexCoord::new(2, 0))
        .unwrap()
        .blocked;
    assert_eq!(blocked.total(), 0);
}

#[test]
fn test_load_bundled_assault_scenario() {
    let config = hexsight::core::config::load_config("data/sight.toml").expect("bundled config");
    let mut session = LosSession::new(config).unwrap();
    session.load_scenario(Scenario::Assault).expect("bundled Assault map");

    assert_eq!(session.grid().len(), 271);
    assert!(session.grid().count_kind(CellKind::Wall) > 0);
    assert!(session.grid().count_kind(CellKind::Base) > 0);

    // Bases on opposite flanks; the central wall band sits between them
    let result = session
        .try_evaluate(HexCoord::new(-8, 4), HexCoord::new(8, -4))
        .expect("both flanks are Base cells")
        .clone();
    for edge in 0..EDGE_COUNT {
        assert!(result.best_blocked_count <= result.blocked.row_count(edge));
    }
}

fn kind_strategy() -> impl Strategy<Value = CellKind> {
    prop::sample::select(CellKind::CYCLE.to_vec())
}

/// A radius-3 map with random kinds
fn map_strategy() -> impl Strategy<Value = HexGrid> {
    prop::collection::vec(prop::collection::vec(kind_strategy(), 7), 7)
        .prop_map(|kinds| HexGrid::load(3, 1.0, &kinds).unwrap())
}

fn coord_strategy() -> impl Strategy<Value = HexCoord> {
    (-3i32..=3, -3i32..=3)
        .prop_map(|(q, r)| HexCoord::new(q, r))
        .prop_filter("inside radius 3", |c| c.within_radius(3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn endpoint_validity_matches_kind(kind in kind_strategy()) {
        let expected = kind == CellKind::Empty || kind == CellKind::Base;
        prop_assert_eq!(kind.is_valid_endpoint(), expected);
        prop_assert_eq!(Cell::new(HexCoord::new(0, 0), kind).is_valid_endpoint(), expected);
    }

    #[test]
    fn evaluation_is_deterministic(
        map in map_strategy(),
        origin in coord_strategy(),
        destination in coord_strategy(),
    ) {
        let first = evaluate(&map, origin, destination, SIDE_EPSILON);
        let second = evaluate(&map, origin, destination, SIDE_EPSILON);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn best_edge_is_minimal(
        mut map in map_strategy(),
        origin in coord_strategy(),
        destination in coord_strategy(),
    ) {
        prop_assume!(origin != destination);
        map.set_kind(origin, CellKind::Base).unwrap();
        map.set_kind(destination, CellKind::Empty).unwrap();

        let result = evaluate(&map, origin, destination, SIDE_EPSILON).unwrap();
        for edge in 0..EDGE_COUNT {
            prop_assert!(result.best_blocked_count <= result.blocked.row_count(edge));
        }
        prop_assert_eq!(result.best_blocked_count, result.blocked.row_count(result.best_edge));
    }

    #[test]
    fn endpoints_never_block_themselves(
        origin in coord_strategy(),
        destination in coord_strategy(),
        origin_kind in kind_strategy(),
        destination_kind in kind_strategy(),
    ) {
        prop_assume!(origin != destination);
        let mut map = HexGrid::new(3, 1.0);
        map.set_kind(origin, origin_kind).unwrap();
        map.set_kind(destination, destination_kind).unwrap();

        let test = EdgePairTest::new(&map, origin, destination, SIDE_EPSILON);
        for o in 0..EDGE_COUNT {
            for d in 0..EDGE_COUNT {
                prop_assert!(!test.is_blocked(o, d));
            }
        }
    }

    #[test]
    fn open_map_is_fully_visible(
        origin in coord_strategy(),
        destination in coord_strategy(),
        obstacles in prop::collection::vec(coord_strategy(), 0..6),
    ) {
        prop_assume!(origin != destination);
        let mut map = HexGrid::new(3, 1.0);
        for coord in obstacles {
            map.set_kind(coord, CellKind::Obstacle).unwrap();
        }
        map.set_kind(origin, CellKind::Base).unwrap();
        map.set_kind(destination, CellKind::Empty).unwrap();

        let result = evaluate(&map, origin, destination, SIDE_EPSILON).unwrap();
        prop_assert_eq!(result.blocked, BlockedMatrix::default());
        prop_assert_eq!(result.best_blocked_count, 0);
        prop_assert_eq!(result.grade(), SightGrade::Clear);
    }
}
