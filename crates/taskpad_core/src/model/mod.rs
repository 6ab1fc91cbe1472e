//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical data structure shared by store and facades.
//!
//! # Invariants
//! - Tasks are immutable value objects; an "update" replaces the stored
//!   record, it never mutates fields in place.

pub mod task;
