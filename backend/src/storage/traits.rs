//! # Storage Traits
//!
//! Storage abstraction for the mother registry, so the domain layer does
//! not care whether records live in memory (the only backend today) or
//! somewhere durable later.

use anyhow::Result;

use crate::domain::models::mother::Mother;

/// Trait defining the interface for mother registry storage operations.
///
/// All operations are synchronous: there is a single in-process registry
/// with one writer path, so nothing here needs to suspend.
pub trait MotherStorage: Send + Sync {
    /// Append a new record to the registry. No duplicate detection; the
    /// caller is responsible for assigning a unique id.
    fn store_mother(&self, mother: &Mother) -> Result<()>;

    /// Retrieve a specific mother by id
    fn get_mother(&self, mother_id: &str) -> Result<Option<Mother>>;

    /// List all mothers in insertion order
    fn list_mothers(&self) -> Result<Vec<Mother>>;

    /// Replace the stored record with the same id
    fn update_mother(&self, mother: &Mother) -> Result<()>;
}
