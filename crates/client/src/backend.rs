use async_trait::async_trait;
use ghost_legion_core::map_element::MapElementDraft;
use ghost_legion_core::types::DbId;

use crate::error::ClientError;
use crate::models::{MapElement, MapElementPatch};

/// Where map elements are read from and written to.
///
/// [`crate::ApiClient`] is the production implementation; tests substitute
/// an in-memory store.
#[async_trait]
pub trait MapElementBackend: Send + Sync {
    async fn list(&self) -> Result<Vec<MapElement>, ClientError>;

    async fn create(&self, draft: &MapElementDraft) -> Result<MapElement, ClientError>;

    async fn update(&self, id: DbId, patch: &MapElementPatch) -> Result<MapElement, ClientError>;

    async fn delete(&self, id: DbId) -> Result<(), ClientError>;
}
