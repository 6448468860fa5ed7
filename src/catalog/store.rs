//! Category store backed by the remote document store.

use std::collections::HashMap;

use dashmap::DashMap;
use uuid::Uuid;

use crate::backend::documents::DocumentStore;
use crate::backend::persistence::OfflineCache;
use crate::backend::types::BackendResult;
use crate::catalog::types::{Category, CategoryKind};

const COLLECTION: &str = "categories";

/// Client-side category store.
///
/// Holds an in-memory mirror of the remote collection; reads are served from
/// the mirror, writes go to the remote store first and update the mirror
/// (and the offline cache, when present) only on success.
pub struct CategoryStore {
    documents: DocumentStore,
    cache: Option<OfflineCache>,
    mirror: DashMap<Uuid, Category>,
    user_id: String,
}

impl CategoryStore {
    /// Build a store and populate the mirror.
    ///
    /// When the remote listing fails and an offline cache is present, the
    /// mirror is seeded from the cache instead and the store starts in
    /// degraded (read-mostly) mode.
    pub async fn load(
        documents: DocumentStore,
        cache: Option<OfflineCache>,
        user_id: impl Into<String>,
    ) -> BackendResult<Self> {
        let store = Self {
            documents,
            cache,
            mirror: DashMap::new(),
            user_id: user_id.into(),
        };

        match store.refresh().await {
            Ok(()) => {}
            Err(e) => match &store.cache {
                Some(cache) if !cache.is_empty() => {
                    tracing::warn!(
                        error = %e,
                        "Remote listing failed, seeding categories from offline cache"
                    );
                    store.seed_from_cache(cache);
                }
                _ => return Err(e),
            },
        }

        Ok(store)
    }

    // Cache keys are "categories/{uuid}"; anything else is ignored.
    fn seed_from_cache(&self, cache: &OfflineCache) {
        for (key, value) in cache.snapshot() {
            let Some(id_str) = key.strip_prefix("categories/") else {
                continue;
            };
            let Ok(id) = id_str.parse::<Uuid>() else {
                continue;
            };
            match serde_json::from_value::<Category>(value) {
                Ok(category) => {
                    self.mirror.insert(id, category);
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping malformed cached category");
                }
            }
        }
    }

    /// Re-pull the full collection from the remote store.
    ///
    /// The mirror is updated in place: concurrent readers see old or new
    /// entries during the swap, never an empty mirror. Cache entries for
    /// documents that no longer exist remotely are pruned so an offline
    /// session cannot resurrect them.
    pub async fn refresh(&self) -> BackendResult<()> {
        let entries = self.documents.list(COLLECTION).await?;

        let mut fresh: HashMap<Uuid, (Category, serde_json::Value)> = HashMap::new();
        for (id, value) in entries {
            let Ok(id) = id.parse::<Uuid>() else {
                tracing::warn!(id = %id, "Skipping category with non-UUID id");
                continue;
            };
            match serde_json::from_value::<Category>(value.clone()) {
                Ok(category) => {
                    fresh.insert(id, (category, value));
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping malformed category document");
                }
            }
        }

        for (id, (category, _)) in &fresh {
            self.mirror.insert(*id, category.clone());
        }
        self.mirror.retain(|id, _| fresh.contains_key(id));

        if let Some(cache) = &self.cache {
            for (id, (_, value)) in &fresh {
                cache.put(COLLECTION, &id.to_string(), value.clone());
            }
            for (key, _) in cache.snapshot() {
                let Some(id_str) = key.strip_prefix("categories/") else {
                    continue;
                };
                let known = id_str.parse::<Uuid>().is_ok_and(|id| fresh.contains_key(&id));
                if !known {
                    cache.remove(COLLECTION, id_str);
                }
            }
        }
        self.flush_cache();

        tracing::debug!(count = self.mirror.len(), "Category mirror refreshed");
        Ok(())
    }

    /// Create a category, or return the existing one with the same name and
    /// kind. The name is trimmed before comparison.
    pub async fn add(&self, name: &str, kind: CategoryKind) -> BackendResult<Category> {
        let name = name.trim();

        if let Some(existing) = self
            .mirror
            .iter()
            .find(|entry| entry.value().name == name && entry.value().kind == kind)
        {
            tracing::debug!(id = %existing.key(), "Category already exists, reusing");
            return Ok(existing.value().clone());
        }

        let category = Category::new(name, self.user_id.clone(), kind);
        let value = serde_json::to_value(&category)?;
        self.documents
            .put(COLLECTION, &category.id.to_string(), &value)
            .await?;

        if let Some(cache) = &self.cache {
            cache.put(COLLECTION, &category.id.to_string(), value);
        }
        self.mirror.insert(category.id, category.clone());
        self.flush_cache();

        tracing::info!(id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }

    /// Rename a category. Returns `None` if the id is unknown.
    pub async fn rename(&self, id: Uuid, new_name: &str) -> BackendResult<Option<Category>> {
        let Some(mut category) = self.mirror.get(&id).map(|e| e.value().clone()) else {
            return Ok(None);
        };

        category.name = new_name.trim().to_string();
        let value = serde_json::to_value(&category)?;
        self.documents
            .put(COLLECTION, &id.to_string(), &value)
            .await?;

        if let Some(cache) = &self.cache {
            cache.put(COLLECTION, &id.to_string(), value);
        }
        self.mirror.insert(id, category.clone());
        self.flush_cache();

        tracing::info!(id = %id, name = %category.name, "Category renamed");
        Ok(Some(category))
    }

    /// Delete a category. Deleting an unknown id is a no-op.
    pub async fn remove(&self, id: Uuid) -> BackendResult<()> {
        self.documents.delete(COLLECTION, &id.to_string()).await?;

        self.mirror.remove(&id);
        if let Some(cache) = &self.cache {
            cache.remove(COLLECTION, &id.to_string());
        }
        self.flush_cache();

        tracing::info!(id = %id, "Category removed");
        Ok(())
    }

    /// All categories of one kind, sorted by name.
    pub fn list(&self, kind: CategoryKind) -> Vec<Category> {
        let mut out: Vec<Category> = self
            .mirror
            .iter()
            .filter(|entry| entry.value().kind == kind)
            .map(|entry| entry.value().clone())
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Case-insensitive substring search over category names of one kind.
    pub fn search(&self, query: &str, kind: CategoryKind) -> Vec<Category> {
        let query = query.to_lowercase();
        let mut out: Vec<Category> = self
            .mirror
            .iter()
            .filter(|entry| {
                entry.value().kind == kind
                    && entry.value().name.to_lowercase().contains(&query)
            })
            .map(|entry| entry.value().clone())
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    fn flush_cache(&self) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save() {
                tracing::warn!(error = %e, "Failed to flush offline cache");
            }
        }
    }
}
