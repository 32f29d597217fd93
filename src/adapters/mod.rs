//! Adapters - concrete implementations of the ports: the reqwest-backed
//! backend client, persisted auth stores, mock vendor sessions for tests
//! and demos, and notifier implementations.

pub mod http;
pub mod notify;
pub mod social;
pub mod store;
