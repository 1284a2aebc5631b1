use crate::core::error::Result;
use async_trait::async_trait;

/// Base repository trait for read access to reference data.
///
/// Persistence of record lives in the external ERP; repositories here hold
/// the snapshot the engine computes against.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;
}
