use std::sync::Arc;

use crate::model::task::Task;

/// An immutable view of the task sequence at one point in time.
///
/// Every mutation publishes a fresh snapshot; snapshots already handed out
/// are never touched, so a holder can keep a stale one for comparison or
/// check for change cheaply with `Arc::ptr_eq`.
pub type Snapshot = Arc<Vec<Task>>;

/// Result of an add attempt. A duplicate title is the one user-visible
/// rejection in this store; every other miss is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOutcome {
    Added(u64),
    DuplicateTitle,
}

/// The single authoritative holder of the task sequence.
///
/// Tasks keep insertion order; toggle and edit update in place. Removal is
/// a two-phase gate: `request_removal` marks an id as awaiting the user's
/// yes/no answer, `resolve_removal` applies it.
pub struct TaskStore {
    tasks: Snapshot,
    next_id: u64,
    pending_removal: Option<u64>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Arc::new(Vec::new()),
            next_id: 1,
            pending_removal: None,
        }
    }

    /// The current published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tasks)
    }

    /// The id awaiting removal confirmation, if any.
    pub fn pending_removal(&self) -> Option<u64> {
        self.pending_removal
    }

    /// Appends a task with a fresh id and `done = false`, unless a task
    /// with exactly this title is already held. Titles are compared
    /// verbatim, no trimming or case folding.
    pub fn add_task(&mut self, title: &str) -> AddOutcome {
        if self.tasks.iter().any(|t| t.title == title) {
            return AddOutcome::DuplicateTitle;
        }

        let id = self.next_id;
        self.next_id += 1;

        let mut tasks = self.tasks.as_ref().clone();
        tasks.push(Task::new(id, title.to_string()));
        self.publish(tasks);
        AddOutcome::Added(id)
    }

    /// Flips the `done` flag of the matching task, keeping its position.
    /// Unknown ids are ignored.
    pub fn toggle_task_done(&mut self, id: u64) {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let mut tasks = self.tasks.as_ref().clone();
            tasks[pos].done = !tasks[pos].done;
            self.publish(tasks);
        }
    }

    /// Retitles the matching task, keeping its position. Unknown ids are
    /// ignored. Duplicates are only checked on add, not here.
    pub fn edit_task(&mut self, id: u64, new_title: &str) {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let mut tasks = self.tasks.as_ref().clone();
            tasks[pos].title = new_title.to_string();
            self.publish(tasks);
        }
    }

    /// First half of the removal gate: records the id as awaiting
    /// confirmation and returns without touching the sequence. The caller
    /// is expected to prompt the user and report back via
    /// `resolve_removal`.
    pub fn request_removal(&mut self, id: u64) {
        self.pending_removal = Some(id);
    }

    /// Second half of the removal gate. The task is removed only when the
    /// answer is affirmative and `id` matches the pending request; a
    /// decline, a mismatched id, or a resolve with nothing pending all
    /// leave the sequence unchanged. The pending marker is consumed either
    /// way.
    pub fn resolve_removal(&mut self, id: u64, confirmed: bool) {
        let pending = self.pending_removal.take();
        if !confirmed || pending != Some(id) {
            return;
        }
        if self.tasks.iter().any(|t| t.id == id) {
            let mut tasks = self.tasks.as_ref().clone();
            tasks.retain(|t| t.id != id);
            self.publish(tasks);
        }
    }

    fn publish(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::new(tasks);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
