use thiserror::Error;

/// Errors from positional access to the medicine list.
///
/// Positions handed out by the list itself are always valid until the next
/// removal, so hitting this usually means the caller held on to a stale index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Position {position} out of range for list of {len} medicines")]
    IndexOutOfRange { position: usize, len: usize },
}

impl ListError {
    pub(crate) fn out_of_range(position: usize, len: usize) -> Self {
        tracing::warn!(position, len, "Rejected out-of-range list position");
        Self::IndexOutOfRange { position, len }
    }
}
