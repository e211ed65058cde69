//! Immutable domain core of a crowdfunding client.
//!
//! [`Project`] and its nested [`Urls`]/[`Web`]/[`Api`] records hold
//! server-sourced campaign state. Construction goes through builders that
//! validate required fields; everything after `build` is read-only, and a
//! "change" is `to_builder()` plus a fresh `build()`. The `adapters` module
//! maps records to and from the wire payload and the cross-boundary
//! transfer representation.

pub mod adapters;
pub mod domain;

pub use domain::*;
