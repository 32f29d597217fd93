//! Backend API adapters.

mod client;
mod mock;

pub use client::HttpWigwamApi;
pub use mock::MockWigwamApi;
