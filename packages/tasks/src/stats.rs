use crate::task::{Priority, Task};

/// Aggregate counts over the full collection.
///
/// Always computed from the authoritative list, not the filtered view, so the
/// numbers stay put while the user searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
}

impl Stats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority = tasks
            .iter()
            .filter(|t| t.priority == Priority::High)
            .count();
        Self {
            total,
            completed,
            pending: total - completed,
            high_priority,
        }
    }
}
