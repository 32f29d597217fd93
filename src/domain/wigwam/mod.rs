//! Wigwam domain: the rentable-listing entity, its availability windows,
//! and deep-link resolution.

mod deep_link;
mod model;

pub use deep_link::parse_deep_link;
pub use model::{Listing, Wigwam};
