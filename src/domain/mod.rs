//! Domain layer - pure types and state machines, no I/O.

pub mod social;
pub mod wigwam;
