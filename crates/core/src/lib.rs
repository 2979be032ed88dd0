//! Pure domain logic for the Arena matching engine.
//!
//! This crate has zero internal dependencies so it can be used by the DB
//! and API layers as well as any future worker or CLI tooling. Nothing in
//! here performs I/O.

pub mod error;
pub mod match_state;
pub mod profile;
pub mod rationale;
pub mod schedule;
pub mod scoring;
pub mod types;
