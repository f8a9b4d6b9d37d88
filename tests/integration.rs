//! Integration tests for the rs_barnes_hut public API.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rs_barnes_hut::{
    apis::easy_repulsion::EasyRepulsion,
    barnes_hut::{direct_force, BarnesHutApproximator, FixedFiller, InsertOutcome},
    models::{BoundingCube, Particle, Point3, Vector3},
    utils::{ApproximatorConfig, BarnesHutError, BoundsPolicy},
};

/// Two gaussian-ish clusters, the kind of cloud a force-directed layout produces.
fn clustered_cloud(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = [Point3::new(-30.0, 5.0, 0.0), Point3::new(25.0, -10.0, 15.0)];
    (0..count)
        .map(|i| {
            let c = centers[i % 2];
            let offset = Vector3::new(
                rng.random_range(-8.0..8.0) + rng.random_range(-8.0..8.0),
                rng.random_range(-8.0..8.0) + rng.random_range(-8.0..8.0),
                rng.random_range(-8.0..8.0) + rng.random_range(-8.0..8.0),
            );
            Particle { position: c + offset, mass: rng.random_range(1.0..3.0) }
        })
        .collect()
}

/// Summed error over summed magnitude of the exact forces.
fn aggregate_error(particles: &[Particle], forces: &[Vector3]) -> f64 {
    let mut error = 0.0;
    let mut total = 0.0;
    for (p, f) in particles.iter().zip(forces) {
        let exact = direct_force(particles, p.position, p.mass);
        error += (*f - exact).magnitude();
        total += exact.magnitude();
    }
    error / total
}

#[test]
fn test_layout_pass_is_close_to_exact_forces() {
    let particles = clustered_cloud(800, 3);
    let repulsion = EasyRepulsion::with_config(ApproximatorConfig::default().with_theta(0.3)).unwrap();
    let forces = repulsion.compute_forces(&particles).unwrap();

    assert_eq!(forces.len(), particles.len());
    assert!(aggregate_error(&particles, &forces) < 0.02);
}

#[test]
fn test_tiny_theta_gives_exact_forces() {
    let particles = clustered_cloud(200, 5);
    let repulsion = EasyRepulsion::with_config(ApproximatorConfig::default().with_theta(1e-9)).unwrap();
    let forces = repulsion.compute_forces(&particles).unwrap();

    assert!(aggregate_error(&particles, &forces) < 1e-12);
}

#[test]
fn test_reset_and_rebuild_matches_fresh_tree() {
    let first = clustered_cloud(300, 8);
    let second = clustered_cloud(300, 9);
    let bounds = BoundingCube::enclosing(
        first.iter().chain(&second).map(|p| p.position),
        0.05,
    ).unwrap();

    let mut reused = BarnesHutApproximator::new(bounds.center, bounds.length, 0.5).unwrap();
    reused.insert_particles(&first).unwrap();
    reused.reset(bounds.center, bounds.length).unwrap();
    assert!(reused.is_empty());
    reused.insert_particles(&second).unwrap();

    let mut fresh = BarnesHutApproximator::new(bounds.center, bounds.length, 0.5).unwrap();
    fresh.insert_particles(&second).unwrap();

    assert_eq!(reused.root(), fresh.root());
    assert_eq!(reused.approximate_forces(&second), fresh.approximate_forces(&second));
}

#[test]
fn test_jittered_particles_outside_bounds_are_dropped() {
    let mut tree = BarnesHutApproximator::new(Point3::origin(), 10.0, 0.5).unwrap();
    let particles = [
        Particle { position: Point3::new(4.0, 4.0, 4.0), mass: 1.0 },
        Particle { position: Point3::new(-4.0, 1.0, 0.0), mass: 1.0 },
        Particle { position: Point3::new(5.001, 0.0, 0.0), mass: 1.0 },
    ];

    assert_eq!(tree.insert_particles(&particles), Ok(2));
    assert_eq!(tree.root().unwrap().mass_total(), 2.0);

    // The dropped particle can still be queried against the tree.
    let force = tree.approximate_force(particles[2].position, 1.0, 0.5);
    assert!(force.x > 0.0);
}

#[test]
fn test_strict_policy_reports_out_of_bounds() {
    let config = ApproximatorConfig::default().with_bounds_policy(BoundsPolicy::Strict);
    let mut tree = BarnesHutApproximator::with_config(Point3::origin(), 10.0, &config).unwrap();

    let result = tree.insert(Particle { position: Point3::new(0.0, 0.0, -6.0), mass: 1.0 });
    assert!(matches!(result, Err(BarnesHutError::PositionOutOfBounds { length, .. }) if length == 10.0));
}

#[test]
fn test_degenerate_query_returns_filler() {
    let filler = Vector3::new(0.25, 0.5, 0.75);
    let mut tree = BarnesHutApproximator::new(Point3::origin(), 4.0, 0.5)
        .unwrap()
        .with_filler(Box::new(FixedFiller(filler)));

    assert_eq!(tree.try_insert_particle(Point3::new(1.0, 1.0, 0.0), 2.0), Ok(InsertOutcome::Root));
    assert_eq!(
        tree.try_insert_particle(Point3::new(-1.0, -1.0, 0.0), 2.0),
        Ok(InsertOutcome::NewLeaf { depth: 1 })
    );

    assert_eq!(tree.approximate_force(Point3::origin(), 1.0, 0.5), filler);
}

#[test]
fn test_coincident_particles_act_as_one() {
    let mut merged = BarnesHutApproximator::new(Point3::origin(), 20.0, 0.5).unwrap();
    merged.insert_particle(Point3::new(3.0, 3.0, 3.0), 1.0);
    assert_eq!(
        merged.try_insert_particle(Point3::new(3.0, 3.0, 3.0), 2.0),
        Ok(InsertOutcome::Merged { depth: 0 })
    );

    let mut single = BarnesHutApproximator::new(Point3::origin(), 20.0, 0.5).unwrap();
    single.insert_particle(Point3::new(3.0, 3.0, 3.0), 3.0);

    let probe = Point3::new(-5.0, 2.0, 0.0);
    let a = merged.approximate_force(probe, 1.5, 0.5);
    let b = single.approximate_force(probe, 1.5, 0.5);
    assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
}
