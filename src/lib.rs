//! WigwamNow - social sign-in and social actions for a listing/booking app
//!
//! This crate implements the provider-independent core of the WigwamNow
//! sample: resolving the signed-in social provider, dispatching social
//! actions (share, structured share, rent, post-photo) against it, deferring
//! actions that fail for lack of authorization, and exchanging vendor
//! credentials for a server-side session (hybrid auth).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
