//! Tests for the public generation and lookup contract.

use assert_approx_eq::assert_approx_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use corridor_maps::generator::{GenerationRequest, GeneratorConfig, RunConfig};
use corridor_maps::map::Cell;
use corridor_maps::utils::Point2D;
use corridor_maps::{generate, MapGenError, MapGenerator};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_single_map_scenario() {
    let maps = generate(&GenerationRequest::new(1, 5, 10), &mut rng(2016)).unwrap();
    assert_eq!(maps.len(), 1);
    let map = maps.get(0).unwrap();
    assert_eq!((map.width(), map.height()), (7, 12));
    assert!(map.has_wall_border());
    for x in 1..=2 {
        assert_eq!(map.corridor(x), Some(1..11));
    }
}

#[test]
fn test_get_one_past_end() {
    let maps = generate(&GenerationRequest::new(2, 6, 8), &mut rng(1)).unwrap();
    assert!(maps.get(1).is_ok());
    assert!(matches!(
        maps.get(2),
        Err(MapGenError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_invalid_parameters() {
    let cases = [
        GenerationRequest::new(0, 5, 10),
        GenerationRequest::new(1, 2, 10),
        GenerationRequest::new(1, 5, 6),
        GenerationRequest::new(1, 5, 10).with_easiness(0),
        GenerationRequest::new(1, 5, 2).with_easiness(2),
    ];
    for request in cases {
        assert!(
            matches!(
                generate(&request, &mut rng(0)),
                Err(MapGenError::InvalidParameter { .. })
            ),
            "{:?} should be rejected",
            request
        );
    }
}

#[test]
fn test_boundary_dimensions() {
    for easiness in 3..=9 {
        let request = GenerationRequest::new(1, 3, easiness).with_easiness(easiness);
        let maps = generate(&request, &mut rng(easiness as u64)).unwrap();
        let map = maps.get(0).unwrap();
        assert_eq!(map.width(), 5);
        assert_eq!(map.height(), easiness + 2);
        assert_eq!(map.path_runs(3), 1);
    }
}

#[test]
fn test_parallel_matches_single_stream_seeds() {
    // Maps in a batch come from per-map seeds drawn in order, so the first
    // map of a batch of three equals a batch of one from the same rng.
    let request = GenerationRequest::new(3, 25, 14);
    let batch = generate(&request, &mut rng(77)).unwrap();
    let single = generate(&GenerationRequest { count: 1, ..request }, &mut rng(77)).unwrap();
    assert_eq!(batch.get(0).unwrap(), single.get(0).unwrap());
    assert_eq!(batch.stats().map_count, 3);
}

#[test]
fn test_collision_lookup() {
    let maps = generate(&GenerationRequest::new(1, 10, 8), &mut rng(4)).unwrap();
    let map = maps.get(0).unwrap();
    let scale = 12.0;

    assert!(map.is_blocked_at(&Point2D::cell_center(0, 0, scale), scale));
    assert!(!map.is_blocked_at(&Point2D::cell_center(1, 4, scale), scale));
    assert!(map.is_blocked_at(&Point2D::new(-1.0, 30.0), scale));
    assert!(map.is_blocked_at(&Point2D::new(1000.0, 30.0), scale));

    let origin = Point2D::cell_origin(1, 1, scale);
    assert_approx_eq!(origin.x, 12.0);
    assert_approx_eq!(origin.y, 12.0);
    assert_eq!(map.get(1, 1), Some(Cell::Path));
}

#[test]
fn test_run_config_drives_generator() {
    let run = RunConfig::from_json(
        r#"{ "seed": 5, "request": { "count": 2, "width": 8, "height": 9, "easiness_factor": 5 } }"#,
    )
    .unwrap();
    let generator = MapGenerator::new(run.generator.clone());
    assert_eq!(generator.config(), &GeneratorConfig::default());
    let maps = generator
        .generate(&run.request, &mut rng(run.seed.unwrap()))
        .unwrap();
    assert_eq!(maps.len(), 2);
    assert_eq!(maps.get(1).unwrap().width(), 10);
}
