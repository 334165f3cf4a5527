use std::collections::TryReserveError;
use std::fmt;

/// Errors that can occur when operating on a [`Queue`](crate::Queue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The operation was applied to an absent queue.
    MissingQueue,

    /// No room could be allocated for a node or its payload.
    Allocation(TryReserveError),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::MissingQueue => f.write_str("queue does not exist"),
            QueueError::Allocation(_) => f.write_str("failed to allocate a queue element"),
        }
    }
}

impl std::error::Error for QueueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueueError::MissingQueue => None,
            QueueError::Allocation(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for QueueError {
    fn from(err: TryReserveError) -> Self {
        QueueError::Allocation(err)
    }
}
