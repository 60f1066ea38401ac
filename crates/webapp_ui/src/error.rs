//! Error type shared by the button primitive and its style/icon collaborators.

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures raised while resolving button configuration.
pub enum UiError {
    /// A button kind name outside the closed `default | primary | secondary | danger` set.
    #[error("Unsupported kind {0}")]
    UnsupportedKind(String),
    /// A button element type other than `button` or `submit`.
    #[error("Unsupported button type {0}")]
    UnsupportedType(String),
    /// An icon name missing from the built-in catalog.
    #[error("Unknown icon {0}")]
    UnknownIcon(String),
    /// A style class map that is not valid JSON.
    #[error("invalid style map: {0}")]
    StyleMap(#[from] serde_json::Error),
}
