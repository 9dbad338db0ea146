//! Client-side mirror of the map-element store.
//!
//! [`ElementCache`] holds the elements keyed by id. [`MapSync`] owns a cache
//! and a backend and applies the outcome of each write: the server's answer
//! on success, nothing on failure.

use std::collections::HashMap;

use ghost_legion_core::map_editor::{AnnotationForm, MapEditor};
use ghost_legion_core::types::DbId;

use crate::backend::MapElementBackend;
use crate::error::ClientError;
use crate::models::{MapElement, MapElementPatch};

/// In-memory copy of the elements, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ElementCache {
    elements: HashMap<DbId, MapElement>,
}

impl ElementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: DbId) -> Option<&MapElement> {
        self.elements.get(&id)
    }

    /// Elements in list order: newest first, ties broken by id.
    pub fn sorted(&self) -> Vec<&MapElement> {
        let mut elements: Vec<&MapElement> = self.elements.values().collect();
        elements.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        elements
    }

    /// Drop everything and take `elements` as the new contents.
    pub fn replace_all(&mut self, elements: Vec<MapElement>) {
        self.elements = elements.into_iter().map(|e| (e.id, e)).collect();
    }

    /// Insert or overwrite by id.
    pub fn upsert(&mut self, element: MapElement) {
        self.elements.insert(element.id, element);
    }

    pub fn remove(&mut self, id: DbId) -> Option<MapElement> {
        self.elements.remove(&id)
    }
}

/// Keeps an [`ElementCache`] consistent with a [`MapElementBackend`].
///
/// Every failed call is logged and returned; the cache is only touched after
/// the backend confirms a write. Nothing is retried.
pub struct MapSync<B> {
    backend: B,
    cache: ElementCache,
}

impl<B: MapElementBackend> MapSync<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: ElementCache::new(),
        }
    }

    pub fn cache(&self) -> &ElementCache {
        &self.cache
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch the full list and replace the cache with it.
    pub async fn load(&mut self) -> Result<usize, ClientError> {
        match self.backend.list().await {
            Ok(elements) => {
                self.cache.replace_all(elements);
                tracing::debug!(count = self.cache.len(), "Map elements loaded");
                Ok(self.cache.len())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load map elements");
                Err(e)
            }
        }
    }

    /// Submit the editor's finished shape and cache the created element.
    ///
    /// A form that fails local validation never reaches the backend and
    /// leaves the shape pending in the editor.
    pub async fn submit_drawing(
        &mut self,
        editor: &mut MapEditor,
        form: &AnnotationForm,
    ) -> Result<MapElement, ClientError> {
        let draft = editor.submit(form)?;
        match self.backend.create(&draft).await {
            Ok(element) => {
                tracing::debug!(element_id = element.id, kind = %element.kind, "Map element created");
                self.cache.upsert(element.clone());
                Ok(element)
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = %draft.kind, "Failed to create map element");
                Err(e)
            }
        }
    }

    pub async fn update(
        &mut self,
        id: DbId,
        patch: &MapElementPatch,
    ) -> Result<MapElement, ClientError> {
        match self.backend.update(id, patch).await {
            Ok(element) => {
                self.cache.upsert(element.clone());
                Ok(element)
            }
            Err(e) => {
                tracing::warn!(error = %e, element_id = id, "Failed to update map element");
                Err(e)
            }
        }
    }

    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        match self.backend.delete(id).await {
            Ok(()) => {
                self.cache.remove(id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, element_id = id, "Failed to delete map element");
                Err(e)
            }
        }
    }
}
