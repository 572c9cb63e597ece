//! # TaskManager: collection operations over the API
//!
//! [`TaskManager`] is how the UI changes the task collection. Every mutation
//! takes the current list as a snapshot, talks to the backend, and returns
//! the confirmed next list as a fresh `Vec`. Nothing changes locally until
//! the backend has answered, and the caller's list is never mutated in
//! place, so views derived from it can be replaced wholesale.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](TaskManager::load) | Fetches the authoritative list. |
//! | [`create`](TaskManager::create) | Validates the draft title locally (an empty title never reaches the wire), then stores it and prepends the backend's record. |
//! | [`toggle`](TaskManager::toggle) | Looks up the record's current completion in the snapshot and sends a one-field patch with the inverse. |
//! | [`update`](TaskManager::update) | Applies a partial edit; the matching record is replaced with the backend's response. |
//! | [`delete`](TaskManager::delete) | Removes the record only after the backend confirms by status. |
//!
//! Concurrent operations are not coordinated: each one computes from the
//! snapshot it was handed, and the last response to land wins.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::Transport;
use tasks::{Task, TaskDraft, TaskPatch};

/// Task collection operations backed by an [`ApiClient`].
pub struct TaskManager<T: Transport> {
    client: ApiClient<T>,
}

impl<T: Transport> TaskManager<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// Fetch the authoritative task list.
    pub async fn load(&self) -> Result<Vec<Task>, ApiError> {
        self.client.fetch_tasks().await
    }

    /// Create a task from the draft and prepend the stored record.
    ///
    /// A title that is empty after trimming is rejected before any request
    /// goes out.
    pub async fn create(&self, current: &[Task], draft: &TaskDraft) -> Result<Vec<Task>, ApiError> {
        if draft.title.trim().is_empty() {
            return Err(ApiError::EmptyTitle);
        }

        let created = self.client.create_task(draft).await?;
        tracing::debug!(id = %created.id, "task created");

        let mut next = Vec::with_capacity(current.len() + 1);
        next.push(created);
        next.extend_from_slice(current);
        Ok(next)
    }

    /// Flip a task's completion flag.
    ///
    /// The current value comes from the snapshot, the patch carries exactly
    /// one field, and the record ends up as whatever the backend returned.
    pub async fn toggle(&self, current: &[Task], id: &str) -> Result<Vec<Task>, ApiError> {
        let task = current
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::UnknownTask(id.to_string()))?;

        let patch = TaskPatch::completed(!task.completed);
        let updated = self.client.update_task(id, &patch).await?;
        Ok(replace_task(current, updated))
    }

    /// Apply a partial edit and replace the matching record with the
    /// backend's version of it.
    pub async fn update(
        &self,
        current: &[Task],
        id: &str,
        patch: &TaskPatch,
    ) -> Result<Vec<Task>, ApiError> {
        let updated = self.client.update_task(id, patch).await?;
        Ok(replace_task(current, updated))
    }

    /// Delete a task. The record leaves the list only on a confirmed delete.
    pub async fn delete(&self, current: &[Task], id: &str) -> Result<Vec<Task>, ApiError> {
        self.client.delete_task(id).await?;
        tracing::debug!(id, "task deleted");
        Ok(current.iter().filter(|t| t.id != id).cloned().collect())
    }
}

fn replace_task(current: &[Task], updated: Task) -> Vec<Task> {
    current
        .iter()
        .map(|t| {
            if t.id == updated.id {
                updated.clone()
            } else {
                t.clone()
            }
        })
        .collect()
}
