//! Use-case handlers.

pub mod social;
pub mod wigwams;
