//! Board controller: the single owner of task state for a session.

use taskdeck_core::{InvalidInput, Status, Task, TaskId, TaskStore, eta};

use crate::snapshot::{BoardSnapshot, BoardStats, LaneView};

/// Controller owning the task state for one board session.
///
/// Exactly one `Board` exists per session and every mutation is routed
/// through its operations; the underlying store is never reachable for
/// direct field assignment from the view layer.
#[derive(Debug, Default)]
pub struct Board {
    store: TaskStore,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// Create a task from submitted form fields.
    ///
    /// # Errors
    /// Returns [`InvalidInput`] for an empty title or an empty/unparsable
    /// ETA; the board is unchanged.
    pub fn add_task(&mut self, title: &str, raw_eta: &str) -> Result<Task, InvalidInput> {
        self.store.create_task(title, raw_eta)
    }

    /// Resolve a completed drag gesture onto a drop target's lane label.
    ///
    /// The label must be one of the exact lane spellings (`"To Do"`,
    /// `"In Progress"`, `"Done"`). A stale task id is tolerated as a no-op,
    /// so a gesture that outlives its task cannot corrupt state.
    ///
    /// # Errors
    /// Returns [`InvalidInput`] if the label does not map to a lane; the
    /// board is unchanged.
    pub fn drop_on_lane(&mut self, id: TaskId, lane_label: &str) -> Result<(), InvalidInput> {
        let status: Status = lane_label.parse()?;
        self.store.move_task(id, status);
        Ok(())
    }

    /// Move a task to a lane the caller has already resolved.
    pub fn move_task(&mut self, id: TaskId, status: Status) {
        self.store.move_task(id, status);
    }

    /// Tasks in one lane, in insertion order.
    #[must_use]
    pub fn lane(&self, status: Status) -> Vec<&Task> {
        self.store.tasks_by_status(status).collect()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Statistics for the board header.
    ///
    /// # Errors
    /// Propagates [`InvalidInput`] if a stored ETA turns out malformed.
    /// Stored tasks only ever carry normalized values, so an error here
    /// signals corrupted state and must not be papered over with a zero.
    pub fn stats(&self) -> Result<BoardStats, InvalidInput> {
        Ok(BoardStats {
            total_tasks: self.store.total_task_count(),
            total_eta: eta::aggregate(self.store.tasks())?,
        })
    }

    /// Full read-only snapshot for one render pass.
    ///
    /// # Errors
    /// Propagates [`InvalidInput`] from the statistics computation.
    pub fn snapshot(&self) -> Result<BoardSnapshot, InvalidInput> {
        let lanes = Status::ALL
            .iter()
            .map(|&status| LaneView {
                status,
                tasks: self.store.tasks_by_status(status).cloned().collect(),
            })
            .collect();
        Ok(BoardSnapshot {
            lanes,
            stats: self.stats()?,
        })
    }
}
