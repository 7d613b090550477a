//! Application layer for taskdeck.
//!
//! Packages the core store and statistics engine behind a board controller.
//! A front end collects user intent (a submitted add-task form, a resolved
//! drag gesture) and routes it through [`Board`]; it reads lane projections
//! and statistics back on every state change. Nothing here performs I/O.

pub mod board;
pub mod snapshot;

pub use board::Board;
pub use snapshot::{BoardSnapshot, BoardStats, LaneView};
