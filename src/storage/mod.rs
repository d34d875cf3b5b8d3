pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::application::{Application, NewApplication};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Persistence backend for the application registry. Validation, defaulting
/// and timestamping happen above this trait; implementations only move fully
/// formed records in and out of storage.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// All records in id order, optionally restricted to an exact status
    /// match. The filter value is validated by the caller.
    async fn list(&self, status: Option<&str>) -> Result<Vec<Application>>;

    async fn get(&self, id: i64) -> Result<Option<Application>>;

    /// Assigns the next id and persists the record. Ids are monotonically
    /// increasing and never reused, even after deletes.
    async fn insert(&self, new: NewApplication) -> Result<Application>;

    /// Overwrites the record with the given id. Returns false if no such id.
    /// The caller performs read-merge-write, so updates to one record are
    /// assumed not to run concurrently; simultaneous writers to the same id
    /// are last-write-wins on the whole row.
    async fn replace(&self, record: &Application) -> Result<bool>;

    /// Returns false if no such id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub type SharedStore = Arc<dyn ApplicationStore>;
