//! Wigwam listing use cases.

mod browse;

pub use browse::BrowseWigwams;
