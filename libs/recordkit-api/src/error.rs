/// Error kind for record construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidState,
}

/// Record construction error — returned by generated `build()` methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A `#[record(required)]` field was still unset at `build()`.
    #[error("invalid state: {record}.{field} is required but was never set")]
    InvalidState {
        record: &'static str,
        field: &'static str,
    },
}

impl RecordError {
    pub fn invalid_state(record: &'static str, field: &'static str) -> Self {
        Self::InvalidState { record, field }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    /// Name of the record type the error was raised for.
    pub fn record(&self) -> &'static str {
        match self {
            Self::InvalidState { record, .. } => record,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidState { field, .. } => field,
        }
    }
}
