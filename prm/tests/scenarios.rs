use nalgebra as na;
use rand::prelude::*;

use prm::{build_roadmap, EdgeChecker, ObstacleField, ObstacleMap, PrmBuilder, PrmError, Rectangle, Roadmap};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
    Rectangle::new(x, y, w, h).unwrap()
}

/// The three obstacle layout used by the demo, scaled to the map.
fn demo_map(width: f64, height: f64) -> ObstacleMap {
    ObstacleMap::new(width, height).unwrap().extend_obstacles(vec![
        rect(0.0, 0.0, width * 0.5, height * 0.1),
        rect(width * 0.4, height * 0.3, width * 0.3, height * 0.3),
        rect(width * 0.2, height * 0.8, width * 0.6, height * 0.1),
    ])
}

fn assert_roadmap_invariants<F: ObstacleField>(field: &F, roadmap: &Roadmap, r: f64) {
    let checker = EdgeChecker::default();
    let vertices = roadmap.vertices();

    for (u, p) in vertices.iter().enumerate() {
        assert!(!field.contains_point(p), "vertex {} at {:?} is inside an obstacle", u, p);

        let neighbors = roadmap.neighbors(u);
        for (idx, &v) in neighbors.iter().enumerate() {
            assert_ne!(u, v, "self loop at {}", u);
            assert!(!neighbors[..idx].contains(&v), "duplicate edge {}-{}", u, v);
            assert!(roadmap.neighbors(v).contains(&u), "edge {}-{} is not symmetric", u, v);

            let d = na::distance(p, &vertices[v]);
            assert!(d <= r, "edge {}-{} has length {} > {}", u, v, d, r);
            assert!(checker.is_edge_valid(p, &vertices[v], field));
        }
    }
}

#[test]
fn empty_field_every_vertex_reaches_k() {
    let map = ObstacleMap::new(400.0, 400.0).unwrap();
    let roadmap = PrmBuilder::new(&map, 3, f64::INFINITY)
        .with_num_vertices(10)
        .build()
        .unwrap();

    assert_eq!(roadmap.num_vertices(), 10);
    assert_roadmap_invariants(&map, &roadmap, f64::INFINITY);
    for i in 0..roadmap.num_vertices() {
        assert!(roadmap.degree(i) >= 3, "vertex {} has {} neighbours", i, roadmap.degree(i));
    }
    assert_eq!(roadmap.under_connected(3).count(), 0);
    assert_eq!(roadmap.num_components(), 1);
}

#[test]
fn fully_covered_map_fails_to_sample() {
    let map = ObstacleMap::new(100.0, 100.0)
        .unwrap()
        .with_obstacle(rect(0.0, 0.0, 100.0, 100.0));

    let build = || {
        PrmBuilder::new(&map, 3, 50.0)
            .with_num_vertices(10)
            .build()
    };

    let err = build().unwrap_err();
    assert_eq!(
        err,
        PrmError::SamplingExhausted {
            accepted: 1,
            target: 10,
            samples: 1_000,
        }
    );
    assert_eq!(build().unwrap_err(), err);
    assert!(err.to_string().starts_with("unable to sample"));
}

#[test]
fn strip_separates_the_two_halves() {
    let map = ObstacleMap::new(400.0, 400.0)
        .unwrap()
        .with_obstacle(rect(160.0, 0.0, 80.0, 400.0));

    for &(k, r) in &[(3, f64::INFINITY), (10, f64::INFINITY), (20, 150.0), (100, f64::INFINITY)] {
        let roadmap = PrmBuilder::new(&map, k, r)
            .with_num_vertices(60)
            .build()
            .unwrap();

        assert_roadmap_invariants(&map, &roadmap, r);

        let left = |i: usize| roadmap.vertices()[i].x < 200.0;
        assert!(
            roadmap.edges().all(|(u, v)| left(u) == left(v)),
            "an edge crosses the strip with k = {}, r = {}",
            k,
            r,
        );
        assert!(roadmap.num_components() >= 2);
    }
}

#[test]
fn k_larger_than_vertex_pool_is_tolerated() {
    let map = ObstacleMap::new(100.0, 100.0).unwrap();
    let roadmap = PrmBuilder::new(&map, 20, f64::INFINITY)
        .with_num_vertices(8)
        .build()
        .unwrap();

    assert_roadmap_invariants(&map, &roadmap, f64::INFINITY);
    for i in 0..8 {
        assert_eq!(roadmap.degree(i), 7);
    }
    assert_eq!(roadmap.num_edges(), 28);
}

#[test]
fn demo_map_roadmap_holds_invariants() {
    let map = demo_map(400.0, 400.0);
    let roadmap = build_roadmap(&map, 5, 100.0).unwrap();

    assert_eq!(roadmap.num_vertices(), 150);
    assert_roadmap_invariants(&map, &roadmap, 100.0);

    let again = build_roadmap(&map, 5, 100.0).unwrap();
    assert_eq!(roadmap, again);
}

#[test]
fn random_layouts_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let n_obstacles = rng.gen_range(1..15);
        let obstacles: Vec<Rectangle> = (0..n_obstacles)
            .map(|_| {
                rect(
                    rng.gen_range(0.0..350.0),
                    rng.gen_range(0.0..350.0),
                    rng.gen_range(0.0..60.0),
                    rng.gen_range(0.0..60.0),
                )
            })
            .collect();
        let map = ObstacleMap::new(400.0, 400.0).unwrap().extend_obstacles(obstacles);

        let k = rng.gen_range(1..8);
        let r = rng.gen_range(20.0..200.0);
        let roadmap = PrmBuilder::new(&map, k, r)
            .with_num_vertices(80)
            .build()
            .unwrap();

        assert_eq!(roadmap.num_vertices(), 80);
        assert_roadmap_invariants(&map, &roadmap, r);
    }
}
