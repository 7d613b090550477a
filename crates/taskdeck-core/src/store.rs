//! Authoritative task collection for one board session.

use time::OffsetDateTime;

use crate::error::InvalidInput;
use crate::eta;
use crate::id::TaskId;
use crate::task::{Status, Task};

/// Single source of truth for the board's tasks.
///
/// Owns the ordered collection; all mutation goes through [`Self::create_task`]
/// and [`Self::move_task`], so ids stay unique and every stored ETA is in
/// canonical form. Insertion order is preserved and a status change never
/// reorders the collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Create a task and append it to the collection.
    ///
    /// The title is trimmed before validation and storage, and the raw ETA
    /// is normalized to `H:MM` before it is stored; raw input never reaches
    /// the collection. New tasks always start in [`Status::ToDo`].
    ///
    /// # Errors
    /// Returns [`InvalidInput`] if the title trims to empty or the ETA does
    /// not normalize; the collection is left unchanged.
    pub fn create_task(&mut self, title: &str, raw_eta: &str) -> Result<Task, InvalidInput> {
        let title = title.trim();
        if title.is_empty() {
            return Err(InvalidInput::EmptyTitle);
        }
        let eta = eta::normalize(raw_eta)?;
        let task = Task {
            id: TaskId::new(),
            title: title.to_owned(),
            eta,
            status: Status::ToDo,
            created_at: OffsetDateTime::now_utc(),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Move the task with the given id to a new lane.
    ///
    /// All other fields and the task's position in the collection are
    /// preserved. An unknown id is a benign no-op: a drag gesture may
    /// resolve against a reference that has gone stale, and that must not
    /// corrupt state.
    pub fn move_task(&mut self, id: TaskId, new_status: Status) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.status = new_status;
        }
    }

    /// Tasks currently in the given lane, in insertion order.
    pub fn tasks_by_status(&self, status: Status) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| task.status == status)
    }

    /// Number of tasks regardless of lane.
    #[must_use]
    pub fn total_task_count(&self) -> usize {
        self.tasks.len()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane_titles(store: &TaskStore, status: Status) -> Vec<&str> {
        store
            .tasks_by_status(status)
            .map(|task| task.title.as_str())
            .collect()
    }

    #[test]
    fn created_tasks_start_in_todo_with_canonical_eta() {
        let mut store = TaskStore::new();
        let task = store.create_task("Write report", "30").expect("must create");

        assert_eq!(task.status, Status::ToDo);
        assert_eq!(task.eta, "0:30");
        assert_eq!(store.total_task_count(), 1);
        assert_eq!(lane_titles(&store, Status::ToDo), vec!["Write report"]);
    }

    #[test]
    fn created_ids_are_unique() {
        let mut store = TaskStore::new();
        let first = store.create_task("a", "5").expect("must create");
        let second = store.create_task("b", "5").expect("must create");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn titles_are_trimmed_before_storage() {
        let mut store = TaskStore::new();
        let task = store.create_task("  padded  ", "1:00").expect("must create");
        assert_eq!(task.title, "padded");
    }

    #[test]
    fn blank_title_is_rejected_without_mutation() {
        let mut store = TaskStore::new();
        let err = store.create_task("   ", "30").expect_err("must reject");
        assert_eq!(err, InvalidInput::EmptyTitle);
        assert_eq!(store.total_task_count(), 0);
    }

    #[test]
    fn unparsable_eta_is_rejected_without_mutation() {
        let mut store = TaskStore::new();
        let err = store.create_task("task", "soon").expect_err("must reject");
        assert_eq!(err, InvalidInput::EtaSegment("soon".to_owned()));
        assert_eq!(store.total_task_count(), 0);
    }

    #[test]
    fn move_changes_lane_membership_only() {
        let mut store = TaskStore::new();
        let task = store.create_task("task", "30").expect("must create");

        store.move_task(task.id, Status::InProgress);

        assert!(lane_titles(&store, Status::ToDo).is_empty());
        assert_eq!(lane_titles(&store, Status::InProgress), vec!["task"]);
        assert_eq!(store.total_task_count(), 1);

        let moved = store.get(task.id).expect("task must still exist");
        assert_eq!(moved.title, task.title);
        assert_eq!(moved.eta, task.eta);
        assert_eq!(moved.created_at, task.created_at);
    }

    #[test]
    fn move_with_stale_id_is_a_noop() {
        let mut store = TaskStore::new();
        store.create_task("task", "30").expect("must create");

        store.move_task(TaskId::new(), Status::Done);

        assert_eq!(lane_titles(&store, Status::ToDo), vec!["task"]);
        assert!(lane_titles(&store, Status::Done).is_empty());
    }

    #[test]
    fn moves_preserve_insertion_order_within_lanes() {
        let mut store = TaskStore::new();
        let first = store.create_task("first", "10").expect("must create");
        store.create_task("second", "10").expect("must create");
        let third = store.create_task("third", "10").expect("must create");

        // Bounce a task through another lane and back; it keeps its slot.
        store.move_task(first.id, Status::Done);
        store.move_task(first.id, Status::ToDo);
        store.move_task(third.id, Status::Done);

        assert_eq!(lane_titles(&store, Status::ToDo), vec!["first", "second"]);
        assert_eq!(lane_titles(&store, Status::Done), vec!["third"]);
    }
}
