use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

use aquaroute_lib::{
    build_navigable_graph, find_route_a_star, GeoMask, GeoPoint, NavigableGraph, RoutePlanner,
    RouteQuery, SearchLimits,
};

static WORLD: Lazy<GeoMask> = Lazy::new(GeoMask::coarse_world);
static GRAPH: Lazy<NavigableGraph> = Lazy::new(|| build_navigable_graph(&WORLD));

static PACIFIC: Lazy<RouteQuery> = Lazy::new(|| {
    RouteQuery::new(
        GeoPoint::new(5.0, -150.0).expect("valid point"),
        GeoPoint::new(-30.0, -110.0).expect("valid point"),
    )
});

static ATLANTIC_TO_INDIAN: Lazy<RouteQuery> = Lazy::new(|| {
    RouteQuery::new(
        GeoPoint::new(20.0, -30.0).expect("valid point"),
        GeoPoint::new(-20.0, 80.0).expect("valid point"),
    )
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let projection = WORLD.projection();

    let graph = &*GRAPH;

    c.bench_function("a_star_pacific", |b| {
        let start = projection.cell_of(&PACIFIC.start);
        let goal = projection.cell_of(&PACIFIC.stop);
        b.iter(|| {
            let path = find_route_a_star(graph, start, goal, SearchLimits::default())
                .expect("route exists");
            black_box(path.len())
        });
    });

    c.bench_function("a_star_atlantic_to_indian", |b| {
        let start = projection.cell_of(&ATLANTIC_TO_INDIAN.start);
        let goal = projection.cell_of(&ATLANTIC_TO_INDIAN.stop);
        b.iter(|| {
            let path = find_route_a_star(graph, start, goal, SearchLimits::default())
                .expect("route exists");
            black_box(path.len())
        });
    });

    c.bench_function("cached_plan_pacific", |b| {
        let planner = RoutePlanner::new(GeoMask::coarse_world());
        let _ = planner.plan_route(&PACIFIC).expect("route exists");
        b.iter(|| {
            let result = planner.plan_route(&PACIFIC).expect("route exists");
            black_box(result.points.len())
        });
    });

    c.bench_function("build_world_graph", |b| {
        b.iter(|| {
            let graph = build_navigable_graph(&WORLD);
            black_box(graph.edge_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
