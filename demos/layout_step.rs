// demos/layout_step.rs

use log::info;
use rand::Rng;
use rs_barnes_hut::apis::easy_repulsion::EasyRepulsion;
use rs_barnes_hut::models::{Particle, Point3};
use rs_barnes_hut::utils::{ApproximatorConfig, BarnesHutError};

fn main() -> Result<(), BarnesHutError> {
    env_logger::init();

    // Scatter a small graph's nodes around the origin
    let mut rng = rand::rng();
    let mut particles: Vec<Particle> = (0..200)
        .map(|_| {
            let position = Point3::new(
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
                rng.random_range(-10.0..10.0),
            );
            Particle::new(position, 1.0)
        })
        .collect::<Result<_, _>>()?;

    let repulsion = EasyRepulsion::with_config(ApproximatorConfig::new(Some(0.7), None, None, None))?;
    let step_size = 0.05;

    for step in 0..10 {
        let forces = repulsion.compute_forces(&particles)?;
        for (p, f) in particles.iter_mut().zip(&forces) {
            p.position += *f * step_size;
        }

        let tree = repulsion.build_tree(&particles)?;
        info!(
            "Step {}: root edge length {:.3}, {} cells, depth {}",
            step,
            tree.root_length(),
            tree.root().map_or(0, |root| root.cell_count()),
            tree.root().map_or(0, |root| root.depth())
        );
    }

    println!("Particle 0 after 10 steps: {}", particles[0].position);
    Ok(())
}
