//! # View projection: search, filter, sort
//!
//! [`visible_tasks`] is a pure function from the authoritative task list plus
//! a [`TaskQuery`] to the list the screen shows. It never mutates its input,
//! so callers can memoise it on (tasks, query) and re-run it only when one of
//! those changes.
//!
//! A task is visible when it matches the search text (case-insensitive
//! substring over title and description) **and** the active [`Filter`]. The
//! surviving records are then ordered by the [`SortKey`]:
//!
//! - `Date`: newest first.
//! - `Priority`: high before medium before low; ties keep their relative order.
//! - `Name`: case-insensitive title, ascending.

use crate::task::{Category, Task};

/// Which slice of the collection to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Pending,
    Completed,
    Category(Category),
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
            Filter::Category(category) => task.category == *category,
        }
    }

    /// Value for the filter `<select>`.
    pub fn value(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
            Filter::Category(category) => category.as_str(),
        }
    }

    /// Parse a `<select>` value. Unrecognised input falls back to `All`.
    pub fn from_value(value: &str) -> Filter {
        match value {
            "all" => Filter::All,
            "pending" => Filter::Pending,
            "completed" => Filter::Completed,
            other => Category::from_value(other)
                .map(Filter::Category)
                .unwrap_or(Filter::All),
        }
    }
}

/// Ordering applied to the visible tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Priority,
    Name,
}

impl SortKey {
    pub fn value(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Priority => "priority",
            SortKey::Name => "name",
        }
    }

    pub fn from_value(value: &str) -> SortKey {
        match value {
            "priority" => SortKey::Priority,
            "name" => SortKey::Name,
            _ => SortKey::Date,
        }
    }
}

/// The full set of view parameters. Never persisted, resets on reload.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskQuery {
    pub search: String,
    pub filter: Filter,
    pub sort: SortKey,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: Filter::All,
            sort: SortKey::Date,
        }
    }
}

/// Project the authoritative list into what the screen shows.
pub fn visible_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let needle = query.search.to_lowercase();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_search(task, &needle) && query.filter.matches(task))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Date => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        // sort_by is stable, so equal ranks keep their incoming order
        SortKey::Priority => visible.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        SortKey::Name => {
            visible.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    visible
}

fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: Category::Personal,
            priority: Priority::Medium,
            completed: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn query() -> TaskQuery {
        TaskQuery::default()
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let mut groceries = task("1", "Buy groceries");
        groceries.description = "milk and eggs".to_string();
        let report = task("2", "Write report");
        let tasks = vec![groceries, report];

        let q = TaskQuery {
            search: "GROCER".to_string(),
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        // Description matches too
        let q = TaskQuery {
            search: "eggs".to_string(),
            ..query()
        };
        assert_eq!(visible_tasks(&tasks, &q).len(), 1);

        let q = TaskQuery {
            search: "nothing here".to_string(),
            ..query()
        };
        assert!(visible_tasks(&tasks, &q).is_empty());
    }

    #[test]
    fn test_filter_by_completion() {
        let mut done = task("1", "Done");
        done.completed = true;
        let open = task("2", "Open");
        let tasks = vec![done, open];

        let q = TaskQuery {
            filter: Filter::Completed,
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");

        let q = TaskQuery {
            filter: Filter::Pending,
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        let q = TaskQuery {
            filter: Filter::All,
            ..query()
        };
        assert_eq!(visible_tasks(&tasks, &q).len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let mut work = task("1", "Standup");
        work.category = Category::Work;
        let personal = task("2", "Call mum");
        let tasks = vec![work, personal];

        let q = TaskQuery {
            filter: Filter::Category(Category::Work),
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_search_and_filter_combine() {
        let mut a = task("1", "Pay rent");
        a.category = Category::Finance;
        let mut b = task("2", "Pay insurance");
        b.category = Category::Finance;
        b.completed = true;
        let mut c = task("3", "Pay attention");
        c.category = Category::Learning;
        let tasks = vec![a, b, c];

        let q = TaskQuery {
            search: "pay".to_string(),
            filter: Filter::Category(Category::Finance),
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|t| t.category == Category::Finance));
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let mut old = task("old", "Old");
        old.created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut newer = task("newer", "Newer");
        newer.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut newest = task("newest", "Newest");
        newest.created_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let tasks = vec![old, newest, newer];

        let visible = visible_tasks(&tasks, &query());
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["newest", "newer", "old"]);
    }

    #[test]
    fn test_sort_by_priority_high_first() {
        let mut low = task("low", "A");
        low.priority = Priority::Low;
        let mut high = task("high", "B");
        high.priority = Priority::High;
        let mut medium = task("medium", "C");
        medium.priority = Priority::Medium;
        let tasks = vec![low, high, medium];

        let q = TaskQuery {
            sort: SortKey::Priority,
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["high", "medium", "low"]);
    }

    #[test]
    fn test_priority_ties_keep_incoming_order() {
        let mut first = task("first", "A");
        first.priority = Priority::High;
        let mut second = task("second", "B");
        second.priority = Priority::High;
        let tasks = vec![first, second];

        let q = TaskQuery {
            sort: SortKey::Priority,
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let tasks = vec![task("1", "Banana"), task("2", "apple"), task("3", "Cherry")];

        let q = TaskQuery {
            sort: SortKey::Name,
            ..query()
        };
        let visible = visible_tasks(&tasks, &q);
        let titles: Vec<&str> = visible.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_projection_leaves_input_untouched() {
        let tasks = vec![task("1", "B"), task("2", "A")];
        let q = TaskQuery {
            sort: SortKey::Name,
            ..query()
        };
        let _ = visible_tasks(&tasks, &q);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[1].id, "2");
    }

    #[test]
    fn test_filter_select_values_round_trip() {
        let filters = [
            Filter::All,
            Filter::Pending,
            Filter::Completed,
            Filter::Category(Category::Health),
        ];
        for filter in filters {
            assert_eq!(Filter::from_value(filter.value()), filter);
        }
        // Anything unknown falls back to All rather than erroring
        assert_eq!(Filter::from_value("bogus"), Filter::All);
    }
}
