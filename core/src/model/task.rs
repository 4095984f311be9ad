use serde::{Deserialize, Serialize};

/// A titled, completable unit of work.
///
/// Ids are assigned by the store from a monotonic counter and stay unique
/// for the lifetime of the process, including after removals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_pending() {
        let task = Task::new(1, "Buy milk".to_string());
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn serializes_to_flat_record() {
        let task = Task::new(1, "Buy milk".to_string());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "title": "Buy milk", "done": false })
        );
    }
}
