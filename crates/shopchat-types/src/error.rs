use thiserror::Error;

/// Errors from the outbound chat transport.
///
/// The controller collapses all variants into one "failed" outcome (a fixed
/// fallback message in the transcript); the distinction exists for logging.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Deserialization(String),
}

/// Errors from the persistent session surface.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors fatal to widget activation.
///
/// Anything that happens after successful initialization is absorbed at the
/// component that produced it and surfaced as a conversational message,
/// never as one of these.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("required mount point missing: {0}")]
    MissingMount(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: overloaded");
    }

    #[test]
    fn test_widget_error_from_session() {
        let err: WidgetError = SessionError::Storage("disk full".to_string()).into();
        assert!(err.to_string().contains("disk full"));
    }
}
