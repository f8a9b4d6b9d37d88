mod cell;
mod filler;
mod approximator;
#[cfg(feature = "bulk-build")]
mod morton;

pub use cell::*;
pub use filler::*;
pub use approximator::*;
#[cfg(feature = "bulk-build")]
pub use morton::*;
