//! Observable state primitives.
//!
//! # Responsibility
//! - Provide the single-slot "latest value + notify" mechanism the store
//!   and facades publish through.
//!
//! # Invariants
//! - Readers only ever receive clones of the guarded value, never a
//!   reference into it.
//! - New subscribers synchronously receive the current value without
//!   waiting for the next write.

pub mod state_cell;
