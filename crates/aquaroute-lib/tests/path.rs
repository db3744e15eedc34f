mod common;

use aquaroute_lib::{build_navigable_graph, find_route_a_star, SearchLimits};
use common::{cell, mask_from_ascii};

/// 5x5 all-water grid with a blocking cell at (2,2) and the wrap-around
/// shortcut at (2,0) closed off, so every route from (2,1) to (2,3) must
/// detour through a neighbouring row.
fn obstacle_mask() -> aquaroute_lib::GeoMask {
    mask_from_ascii(
        "~~~~~
         ~~~~~
         #~#~~
         ~~~~~
         ~~~~~",
    )
}

#[test]
fn detour_path_has_minimum_hop_count() {
    let graph = build_navigable_graph(&obstacle_mask());
    let path = find_route_a_star(&graph, cell(2, 1), cell(2, 3), SearchLimits::default())
        .expect("detour exists");

    // Shortest detour around (2,2) is four hops.
    assert_eq!(path.len(), 5);
    assert_eq!(path.first(), Some(&cell(2, 1)));
    assert_eq!(path.last(), Some(&cell(2, 3)));
}

#[test]
fn equal_inputs_yield_identical_paths() {
    let graph = build_navigable_graph(&obstacle_mask());
    let first = find_route_a_star(&graph, cell(2, 1), cell(2, 3), SearchLimits::default());
    let second = find_route_a_star(&graph, cell(2, 1), cell(2, 3), SearchLimits::default());
    assert_eq!(first, second);

    // A graph rebuilt from the same mask routes the same way.
    let rebuilt = build_navigable_graph(&obstacle_mask());
    let third = find_route_a_star(&rebuilt, cell(2, 1), cell(2, 3), SearchLimits::default());
    assert_eq!(first, third);
}

#[test]
fn wrap_around_route_beats_the_long_way() {
    let mask = mask_from_ascii(
        "~~~~~~~~
         ~~~~~~~~
         ~~~~~~~~
         ~~~~~~~~",
    );
    let graph = build_navigable_graph(&mask);
    let path = find_route_a_star(&graph, cell(1, 0), cell(1, 6), SearchLimits::default())
        .expect("route exists");

    // Two hops west across the antimeridian instead of six hops east.
    assert_eq!(path.len(), 3);
    assert_eq!(path[1], cell(1, 7));
}

#[test]
fn same_cell_is_a_single_element_path() {
    let graph = build_navigable_graph(&obstacle_mask());
    let path = find_route_a_star(&graph, cell(2, 1), cell(2, 1), SearchLimits::default())
        .expect("trivial route");
    assert_eq!(path, vec![cell(2, 1)]);
}

#[test]
fn disconnected_regions_return_none() {
    // Walls at columns 1 and 3 split the water into two regions; longitude
    // wrap joins column 4 back to column 0 but neither wall is crossable.
    let mask = mask_from_ascii(
        "~#~#~
         ~#~#~
         ~#~#~
         ~#~#~
         ~#~#~",
    );
    let graph = build_navigable_graph(&mask);

    assert_eq!(
        find_route_a_star(&graph, cell(2, 2), cell(2, 0), SearchLimits::default()),
        None
    );
}

#[test]
fn expansion_bound_reports_no_path() {
    let mask = mask_from_ascii(
        "~~~~~~~~
         ~~~~~~~~
         ~~~~~~~~
         ~~~~~~~~",
    );
    let graph = build_navigable_graph(&mask);
    let start = cell(1, 0);
    let goal = cell(2, 4);

    let bounded = SearchLimits {
        max_expanded: Some(1),
    };
    assert_eq!(find_route_a_star(&graph, start, goal, bounded), None);

    let unbounded = SearchLimits::default();
    assert!(find_route_a_star(&graph, start, goal, unbounded).is_some());
}

#[test]
fn empty_graph_finds_nothing() {
    let mask = mask_from_ascii(
        "#####
         #####
         #####",
    );
    let graph = build_navigable_graph(&mask);
    assert_eq!(
        find_route_a_star(&graph, cell(1, 1), cell(1, 3), SearchLimits::default()),
        None
    );
}
