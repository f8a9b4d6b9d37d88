//! Barnes-Hut octree approximating the pairwise repulsive force between particles in
//! three-dimensional force-directed graph layouts.
//!
//! The [`barnes_hut::BarnesHutApproximator`] is the core: reset it to root bounds, insert
//! the particles, then query the approximate force on each one. [`apis::easy_repulsion`]
//! wraps the whole pass for callers that only have a list of particles.
pub mod utils;
pub mod models;
pub mod barnes_hut;
pub mod apis;
