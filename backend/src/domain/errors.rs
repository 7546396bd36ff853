use thiserror::Error;

/// Domain-level failures that callers are expected to branch on.
///
/// Missing records on `get` are not errors (the result carries an
/// `Option`); an update addressed to an unknown id is, so that a typo'd
/// id is surfaced instead of silently dropped.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Mother not found: {id}")]
    MotherNotFound { id: String },
}
