//! Repository layer: canonical task storage.
//!
//! # Responsibility
//! - Define the data access contract consumed by facade services.
//! - Own the only mutable task sequence in the process and publish
//!   immutable snapshots of it.
//!
//! # Invariants
//! - At most one stored task per id; write paths enforce it.
//! - Every snapshot handed out is a copy, never a live reference.

pub mod task_repo;
