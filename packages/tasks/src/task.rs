//! # Task records and the types that travel with them
//!
//! Defines the task data model shared by the API client and the UI. All of
//! these types are `Serialize`/`Deserialize` so they can cross the wire as
//! JSON in the exact shape the backend uses.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Task`] | A single stored task. Field names map to the backend's JSON (`_id`, `createdAt`). |
//! | [`Category`] / [`Priority`] | Closed enums serialised lowercase. An unknown value coming off the wire fails deserialisation instead of leaking into the UI. |
//! | [`TaskDraft`] | Input for creating a task. Its `Default` matches the empty add-task form. |
//! | [`TaskPatch`] | Partial update. `None` fields are omitted from the serialised body, so the backend only sees what changed. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier, opaque to the client.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Task category, serialised lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Work,
    Learning,
    Health,
    Finance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Learning,
        Category::Health,
        Category::Finance,
    ];

    /// Wire value: "personal", "work", ...
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Learning => "learning",
            Category::Health => "health",
            Category::Finance => "finance",
        }
    }

    /// Display label: "Personal", "Work", ...
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Learning => "Learning",
            Category::Health => "Health",
            Category::Finance => "Finance",
        }
    }

    /// Parse a wire value. Returns `None` for anything outside the closed set.
    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Task priority, serialised lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Ordering weight used by the priority sort: high outranks medium outranks low.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_value(value: &str) -> Option<Priority> {
        Priority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Input for creating a task. Mirrors the add-task form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::Personal,
            priority: Priority::Medium,
        }
    }
}

/// Partial task update. Unset fields stay untouched on the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that flips nothing but the completion flag.
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_format() {
        let json = r#"{
            "_id": "65a1b2c3",
            "title": "Write report",
            "description": "Quarterly numbers",
            "category": "work",
            "priority": "high",
            "completed": false,
            "createdAt": "2024-01-15T10:30:00.000Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "65a1b2c3");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);

        // Round-trips back to the backend's field names
        let out = serde_json::to_value(&task).unwrap();
        assert_eq!(out["_id"], "65a1b2c3");
        assert_eq!(out["createdAt"], "2024-01-15T10:30:00Z");
        assert_eq!(out["category"], "work");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{
            "_id": "x",
            "title": "t",
            "description": "",
            "category": "chores",
            "priority": "low",
            "completed": false,
            "createdAt": "2024-01-15T10:30:00.000Z"
        }"#;

        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let json = r#"{
            "_id": "x",
            "title": "t",
            "description": "",
            "category": "work",
            "priority": "urgent",
            "completed": false,
            "createdAt": "2024-01-15T10:30:00.000Z"
        }"#;

        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_draft_default_matches_empty_form() {
        let draft = TaskDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.category, Category::Personal);
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn test_patch_serialises_only_set_fields() {
        let patch = TaskPatch::completed(true);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));

        let patch = TaskPatch {
            title: Some("New title".to_string()),
            description: Some("".to_string()),
            ..TaskPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "title": "New title", "description": "" })
        );
    }

    #[test]
    fn test_category_value_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_value(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_value("errands"), None);
    }

    #[test]
    fn test_priority_ranks() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }
}
