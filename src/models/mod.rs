mod vector_3d;
mod point_3d;
mod octant;
mod particle;
mod bounding_cube;

pub use vector_3d::*;
pub use point_3d::*;
pub use octant::*;
pub use particle::*;
pub use bounding_cube::*;

#[cfg(test)]
mod models_tests;
