//! Domain models for the WaterWise platform

mod records;
mod snapshot;
mod verdict;

pub use records::*;
pub use snapshot::*;
pub use verdict::*;
