use std::cell::RefCell;
use std::rc::Rc;

use crate::store::{AddOutcome, Snapshot, TaskStore};

/// Shared accessor to a single `TaskStore`.
///
/// Every presentation component holds its own clone and observes the same
/// store; the store itself stays behind the handle, so callers never learn
/// how it is constructed or represented. The UI event queue runs one
/// callback at a time, so `Rc<RefCell<_>>` covers the sharing story — no
/// locking, no `Send` requirement.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Rc<RefCell<TaskStore>>,
}

impl StoreHandle {
    pub fn new() -> Self {
        StoreHandle {
            inner: Rc::new(RefCell::new(TaskStore::new())),
        }
    }

    /// The current snapshot of the task sequence.
    pub fn tasks(&self) -> Snapshot {
        self.inner.borrow().snapshot()
    }

    pub fn add_task(&self, title: &str) -> AddOutcome {
        self.inner.borrow_mut().add_task(title)
    }

    pub fn toggle_task_done(&self, id: u64) {
        self.inner.borrow_mut().toggle_task_done(id);
    }

    pub fn edit_task(&self, id: u64, new_title: &str) {
        self.inner.borrow_mut().edit_task(id, new_title);
    }

    pub fn request_removal(&self, id: u64) {
        self.inner.borrow_mut().request_removal(id);
    }

    pub fn resolve_removal(&self, id: u64, confirmed: bool) {
        self.inner.borrow_mut().resolve_removal(id, confirmed);
    }

    pub fn pending_removal(&self) -> Option<u64> {
        self.inner.borrow().pending_removal()
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_observe_the_same_store() {
        let writer = StoreHandle::new();
        let reader = writer.clone();

        writer.add_task("Buy milk");

        let tasks = reader.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[test]
    fn stale_snapshot_survives_later_mutations() {
        let store = StoreHandle::new();
        store.add_task("Buy milk");

        let stale = store.tasks();
        store.add_task("Walk dog");
        store.toggle_task_done(stale[0].id);

        assert_eq!(stale.len(), 1);
        assert!(!stale[0].done);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn removal_gate_round_trips_through_the_handle() {
        let store = StoreHandle::new();
        store.add_task("Buy milk");
        let id = store.tasks()[0].id;

        store.request_removal(id);
        assert_eq!(store.pending_removal(), Some(id));

        store.resolve_removal(id, true);
        assert!(store.tasks().is_empty());
    }
}
