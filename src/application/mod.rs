//! Application layer - orchestration over the domain and ports.

pub mod handlers;
