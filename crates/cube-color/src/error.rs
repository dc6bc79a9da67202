/// Errors from color parsing and derivation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color '{input}': expected a hex RGB string such as #3a7bd5")]
    InvalidColor { input: String },
}
