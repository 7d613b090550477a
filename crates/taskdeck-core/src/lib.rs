//! Domain types and core logic for the taskdeck board.
//!
//! Two components carry all the rules: [`TaskStore`] owns the authoritative
//! task collection and its identity/status invariants, and the [`eta`]
//! module converts duration shorthand to the canonical `H:MM` form and
//! derives the aggregate total shown in the statistics header.

/// Validation error type.
pub mod error;
/// Duration normalization, parsing and aggregation.
pub mod eta;
/// Identifier types.
pub mod id;
/// Task collection ownership and mutation.
pub mod store;
/// Task entity and status lanes.
pub mod task;

pub use error::InvalidInput;
pub use id::TaskId;
pub use store::TaskStore;
pub use task::{Status, Task};
