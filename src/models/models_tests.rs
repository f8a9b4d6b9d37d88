use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::models::{direction, distance, distance2, normalized_direction, BoundingCube, Octant, Particle, Point3, Vector3};
use crate::utils::BarnesHutError;

#[test]
fn test_vector_arithmetic() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-1.0, 0.5, 2.0);

    assert_eq!(a + b, Vector3::new(0.0, 2.5, 5.0));
    assert_eq!(a - b, Vector3::new(2.0, 1.5, 1.0));
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));

    let mut acc = Vector3::zero();
    acc += a;
    acc += b;
    assert_eq!(acc, a + b);
}

#[test]
fn test_vector_magnitude_and_normalize() {
    let v = Vector3::new(2.0, 3.0, 6.0);
    assert_eq!(v.magnitude2(), 49.0);
    assert_eq!(v.magnitude(), 7.0);

    let unit = v.normalize().expect("non-zero vector");
    assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(unit.x, 2.0 / 7.0, epsilon = 1e-12);
}

#[test]
fn test_normalize_zero_vector_fails() {
    assert!(Vector3::zero().is_zero());
    assert_eq!(Vector3::zero().normalize(), Err(BarnesHutError::ZeroLengthVector));
}

#[test]
fn test_point_arithmetic() {
    let p = Point3::new(1.0, 1.0, 1.0);
    let q = Point3::new(4.0, 5.0, 1.0);

    assert_eq!(q - p, Vector3::new(3.0, 4.0, 0.0));
    assert_eq!(p + Vector3::new(3.0, 4.0, 0.0), q);
    assert_eq!(q - Vector3::new(3.0, 4.0, 0.0), p);
    assert_eq!(p * 3.0, Point3::new(3.0, 3.0, 3.0));
    assert_eq!(q / 2.0, Point3::new(2.0, 2.5, 0.5));

    let mut moved = p;
    moved += Vector3::new(0.0, 0.0, -1.0);
    assert_eq!(moved, Point3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_distances() {
    let p = Point3::new(1.0, 1.0, 1.0);
    let q = Point3::new(4.0, 5.0, 1.0);

    assert_eq!(distance(p, q), 5.0);
    assert_eq!(distance2(p, q), 25.0);
    assert_eq!(p.distance(q), q.distance(p));
}

#[test]
fn test_direction_points_away_from_target() {
    let from = Point3::new(0.0, 0.0, 0.0);
    let to = Point3::new(0.0, 3.0, 4.0);

    assert_eq!(direction(from, to), Vector3::new(0.0, -3.0, -4.0));
    let unit = normalized_direction(from, to).expect("distinct points");
    assert_relative_eq!(unit.y, -0.6, epsilon = 1e-12);
    assert_relative_eq!(unit.z, -0.8, epsilon = 1e-12);

    assert_eq!(normalized_direction(to, to), Err(BarnesHutError::ZeroLengthVector));
}

#[test]
fn test_octant_of_all_sign_combinations() {
    let reference = Point3::new(10.0, -5.0, 2.0);
    let mut seen = [false; 8];

    for dx in [-1.0, 1.0] {
        for dy in [-1.0, 1.0] {
            for dz in [-1.0, 1.0] {
                let p = Point3::new(reference.x + dx, reference.y + dy, reference.z + dz);
                let octant = p.octant_of(reference);
                assert_eq!(octant.x_positive(), dx > 0.0);
                assert_eq!(octant.y_positive(), dy > 0.0);
                assert_eq!(octant.z_positive(), dz > 0.0);
                seen[octant.index()] = true;
            }
        }
    }

    assert!(seen.iter().all(|&s| s), "every octant index should be reachable");
}

#[test]
fn test_octant_ties_go_positive() {
    let reference = Point3::new(1.0, 2.0, 3.0);

    assert_eq!(Point3::new(1.0, 0.0, 0.0).octant_of(reference), Octant::new(true, false, false));
    assert_eq!(Point3::new(0.0, 2.0, 0.0).octant_of(reference), Octant::new(false, true, false));
    assert_eq!(Point3::new(0.0, 0.0, 3.0).octant_of(reference), Octant::new(false, false, true));
    assert_eq!(reference.octant_of(reference), Octant::new(true, true, true));
}

#[test]
fn test_octant_index_round_trip_and_signs() {
    for (i, octant) in Octant::ALL.iter().enumerate() {
        assert_eq!(octant.index(), i);
        assert_eq!(Octant::from_index(i), Some(*octant));

        let (sx, sy, sz) = octant.signs();
        assert_eq!(sx > 0.0, octant.x_positive());
        assert_eq!(sy > 0.0, octant.y_positive());
        assert_eq!(sz > 0.0, octant.z_positive());
    }
    assert_eq!(Octant::from_index(8), None);
}

#[test]
fn test_octant_cube_contains_classified_points() {
    let cube = BoundingCube::new(Point3::new(1.0, 1.0, 1.0), 8.0);
    let probes = [
        Point3::new(4.0, 4.0, 4.0),
        Point3::new(-2.5, 3.0, -0.5),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(-3.0, -3.0, 5.0),
    ];

    for p in probes {
        let octant = p.octant_of(cube.center);
        assert!(cube.octant_cube(octant).contains(p), "{} should be inside its octant cube", p);
    }
}

#[test]
fn test_bounding_cube_corners() {
    let cube = BoundingCube::new(Point3::new(0.0, 10.0, -10.0), 4.0);
    assert_eq!(cube.half_length(), 2.0);
    assert_eq!(cube.min(), Point3::new(-2.0, 8.0, -12.0));
    assert_eq!(cube.max(), Point3::new(2.0, 12.0, -8.0));
    assert!(cube.contains(cube.min()));
    assert!(cube.contains(cube.max()));
    assert!(!cube.contains(Point3::new(0.0, 12.5, -10.0)));
}

#[test]
fn test_enclosing_contains_every_position() {
    let positions = vec![
        Point3::new(-3.0, 0.5, 7.0),
        Point3::new(12.0, -4.0, 1.0),
        Point3::new(0.0, 9.0, -2.0),
    ];
    let cube = BoundingCube::enclosing(positions.iter().copied(), 0.05).expect("non-empty set");

    assert_relative_eq!(cube.length, 15.0 * 1.05, epsilon = 1e-12);
    for p in positions {
        assert!(cube.contains(p));
    }
}

#[test]
fn test_enclosing_without_padding_contains_extremes() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..5000 {
        let positions: Vec<Point3> = (0..3)
            .map(|_| Point3::new(
                rng.random_range(-7.3..9.1),
                rng.random_range(-7.3..9.1),
                rng.random_range(-7.3..9.1),
            ))
            .collect();
        let cube = BoundingCube::enclosing(positions.iter().copied(), 0.0).expect("non-empty set");
        for p in &positions {
            assert!(cube.contains(*p), "{} outside cube at {} with edge {}", p, cube.center, cube.length);
        }
    }
}

#[test]
fn test_enclosing_far_from_origin() {
    let positions = [Point3::new(1e308, 1e308, 1e308), Point3::new(1.5e308, 1e308, 1.2e308)];
    let cube = BoundingCube::enclosing(positions, 0.0).expect("non-empty set");
    assert!(cube.center.is_finite());
    for p in positions {
        assert!(cube.contains(p));
    }
}

#[test]
fn test_enclosing_edge_cases() {
    assert_eq!(
        BoundingCube::enclosing(Vec::<Point3>::new(), 0.1),
        Err(BarnesHutError::EmptyParticleSet)
    );

    let single = BoundingCube::enclosing([Point3::new(2.0, 2.0, 2.0)], 0.1).expect("one point");
    assert_eq!(single.center, Point3::new(2.0, 2.0, 2.0));
    assert_eq!(single.length, 1.0);

    assert_eq!(
        BoundingCube::enclosing([Point3::new(f64::NAN, 0.0, 0.0)], 0.1),
        Err(BarnesHutError::InvalidPosition)
    );
    assert_eq!(
        BoundingCube::enclosing([Point3::origin()], -1.0),
        Err(BarnesHutError::InvalidRootLength(-1.0))
    );
}

#[test]
fn test_particle_validation() {
    assert!(Particle::new(Point3::origin(), 1.0).is_ok());
    assert_eq!(Particle::new(Point3::origin(), -1.0), Err(BarnesHutError::InvalidMass(-1.0)));
    assert_eq!(
        Particle::new(Point3::new(0.0, f64::INFINITY, 0.0), 1.0),
        Err(BarnesHutError::InvalidPosition)
    );
}
