//! Common error types used across the workspace.
//!
//! Adapters define their own typed errors and convert into [`RosterError`]
//! via `From`, so the application core never sees adapter error types.
//! A missing record is not an error: lookups return `Option`.

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The persistence layer failed (query, connection, constraint, ...).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
