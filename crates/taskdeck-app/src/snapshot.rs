//! Read-only views handed to front ends for rendering.

use serde::Serialize;
use taskdeck_core::{Status, Task};

/// Aggregate statistics for the board header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    /// Number of tasks on the board regardless of lane.
    pub total_tasks: usize,
    /// Human-readable sum of every task's ETA.
    pub total_eta: String,
}

impl BoardStats {
    /// Statistics of an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_tasks: 0,
            total_eta: "0h".to_owned(),
        }
    }
}

/// One lane column with its tasks in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct LaneView {
    /// The lane's status.
    pub status: Status,
    /// Tasks currently in the lane.
    pub tasks: Vec<Task>,
}

/// The whole board for a single render pass.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    /// The three lanes in board order.
    pub lanes: Vec<LaneView>,
    /// Statistics for the header cards.
    pub stats: BoardStats,
}
