use recordkit_api::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Record(#[from] RecordError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl DemoError {
    /// Prepend `ctx` to config errors; other variants pass through.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            DemoError::Config(msg) => DemoError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}
