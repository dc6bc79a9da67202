/// Errors during scene export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize export metadata: {0}")]
    Metadata(String),

    #[error("failed to write {path}: {reason}")]
    Io { path: String, reason: String },
}
