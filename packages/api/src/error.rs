use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// `Display` is what the user sees in the error banner, so each variant
/// renders as a complete sentence. A non-success status shows the backend's
/// own `message` when one could be read, and a generic fallback otherwise.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{}", message.as_deref().unwrap_or("Request failed"))]
    Status { status: u16, message: Option<String> },
    /// A success response carried a body we could not decode.
    #[error("Unexpected response: {0}")]
    Decode(String),
    /// Creation was rejected locally before any request went out.
    #[error("Title is required")]
    EmptyTitle,
    /// The id is not in the list the operation was handed.
    #[error("No task with id {0}")]
    UnknownTask(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_shows_backend_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Title too long".to_string()),
        };
        assert_eq!(err.to_string(), "Title too long");
    }

    #[test]
    fn test_status_falls_back_when_message_unreadable() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_empty_title_message() {
        assert_eq!(ApiError::EmptyTitle.to_string(), "Title is required");
    }
}
