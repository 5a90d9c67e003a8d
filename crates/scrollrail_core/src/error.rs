//! Engine error types

use thiserror::Error;

/// Errors reported by the instance registry
///
/// The engine itself is best-effort: capability gaps are resolved at
/// construction by backend selection and degenerate geometry collapses to
/// no-op mappings. Only id bookkeeping can genuinely fail.
#[derive(Error, Debug)]
pub enum ScrollError {
    /// No live controller is registered under the given instance tag
    #[error("no scroll instance registered under id {0}")]
    UnknownInstance(u64),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, ScrollError>;
