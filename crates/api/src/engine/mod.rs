//! The matching engine: discovery of new matches and lifecycle responses.
//!
//! Orchestrates `arena_core` scoring over the repository layer. The pure
//! math lives in `arena_core::scoring`; everything here is I/O glue plus
//! the concurrency-sensitive persistence rules (pair uniqueness, atomic
//! status transitions).

pub mod generator;
pub mod lifecycle;
