use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap};

use crate::model::{Entity, GalleryItem, Id};
use crate::store::traits::{GalleryItemRepository, Repository};

/// In-process repository keeping entities in insertion order.
///
/// Backs the `memory` storage backend and the test suites. Locks are never
/// held across an await point.
#[derive(Debug)]
pub struct MemoryRepository<E> {
    entries: RwLock<Vec<E>>,
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Store the entity and return the saved copy together with the previous
    /// version when this was an update.
    fn upsert(&self, mut entity: E) -> (E, Option<E>) {
        let mut entries = self.entries.write();
        let position = entity
            .id()
            .and_then(|id| entries.iter().position(|e| e.id() == Some(id)));

        if let Some(index) = position {
            let created_at = entries[index].timestamps().created_at;
            entity.timestamps_mut().created_at = created_at;
        }
        entity.prepare_save(Utc::now());

        let previous = match position {
            Some(index) => Some(std::mem::replace(&mut entries[index], entity.clone())),
            None => {
                entries.push(entity.clone());
                None
            }
        };
        (entity, previous)
    }

    fn remove(&self, id: &Id) -> Option<E> {
        let mut entries = self.entries.write();
        let index = entries.iter().position(|e| e.id() == Some(*id))?;
        Some(entries.remove(index))
    }

    fn select(&self, ids: &BTreeSet<Id>) -> Vec<E> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.id().is_some_and(|id| ids.contains(&id)))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl<E: Entity> Repository<E> for MemoryRepository<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.entries.read().clone())
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<E>> {
        Ok(self
            .entries
            .read()
            .iter()
            .find(|e| e.id() == Some(*id))
            .cloned())
    }

    async fn save(&self, entity: E) -> Result<E> {
        Ok(self.upsert(entity).0)
    }

    async fn delete_by_id(&self, id: &Id) -> Result<()> {
        self.remove(id);
        Ok(())
    }
}

/// Gallery repository with a secondary index from foreign object id to the
/// items referencing it.
///
/// Writers hold the index write guard across the item write and the reindex,
/// so the index always matches the stored lists. Lock order is index, then
/// items.
#[derive(Debug, Default)]
pub struct MemoryGalleryRepository {
    items: MemoryRepository<GalleryItem>,
    by_foreign_object: RwLock<HashMap<String, BTreeSet<Id>>>,
}

type ForeignObjectIndex = HashMap<String, BTreeSet<Id>>;

impl MemoryGalleryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn unindex(index: &mut ForeignObjectIndex, item: &GalleryItem) {
        let Some(id) = item.id else {
            return;
        };
        for reference in &item.foreign_object {
            if let Some(owners) = index.get_mut(reference) {
                owners.remove(&id);
                if owners.is_empty() {
                    index.remove(reference);
                }
            }
        }
    }

    fn index(index: &mut ForeignObjectIndex, item: &GalleryItem) {
        let Some(id) = item.id else {
            return;
        };
        for reference in &item.foreign_object {
            index.entry(reference.clone()).or_default().insert(id);
        }
    }
}

#[async_trait::async_trait]
impl Repository<GalleryItem> for MemoryGalleryRepository {
    async fn find_all(&self) -> Result<Vec<GalleryItem>> {
        self.items.find_all().await
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<GalleryItem>> {
        self.items.find_by_id(id).await
    }

    async fn save(&self, entity: GalleryItem) -> Result<GalleryItem> {
        let mut index = self.by_foreign_object.write();
        let (saved, previous) = self.items.upsert(entity);
        if let Some(previous) = previous {
            Self::unindex(&mut index, &previous);
        }
        Self::index(&mut index, &saved);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &Id) -> Result<()> {
        let mut index = self.by_foreign_object.write();
        if let Some(removed) = self.items.remove(id) {
            Self::unindex(&mut index, &removed);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GalleryItemRepository for MemoryGalleryRepository {
    async fn find_by_foreign_objects_in(&self, ids: &[String]) -> Result<Vec<GalleryItem>> {
        // Select while the index is read-locked so no save lands in between
        let index = self.by_foreign_object.read();
        let matching: BTreeSet<Id> = ids
            .iter()
            .filter_map(|reference| index.get(reference))
            .flatten()
            .copied()
            .collect();
        Ok(self.items.select(&matching))
    }
}
