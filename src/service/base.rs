use anyhow::Result;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::model::{Entity, Id};
use crate::store::traits::Repository;

/// CRUD operations shared by the domain services, forwarding to a repository.
///
/// `R` defaults to the plain repository trait object; verticals with a richer
/// repository trait (gallery) plug that trait object in instead.
pub struct BaseService<E: Entity, R: ?Sized + Repository<E> = dyn Repository<E>> {
    repository: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, R: ?Sized + Repository<E>> Clone for BaseService<E, R> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

impl<E: Entity, R: ?Sized + Repository<E>> BaseService<E, R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub async fn find_all(&self) -> Result<Vec<E>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: &Id) -> Result<Option<E>> {
        self.repository.find_by_id(id).await
    }

    pub async fn save(&self, entity: E) -> Result<E> {
        self.repository.save(entity).await
    }

    pub async fn delete_by_id(&self, id: &Id) -> Result<()> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use crate::store::MemoryRepository;

    #[tokio::test]
    async fn forwards_to_repository() {
        let service: BaseService<Post> = BaseService::new(Arc::new(MemoryRepository::<Post>::new()));

        let saved = service.save(Post::new("t", "c", vec![])).await.unwrap();
        let id = saved.id.unwrap();
        assert_eq!(service.find_all().await.unwrap().len(), 1);
        assert_eq!(service.find_by_id(&id).await.unwrap(), Some(saved));

        service.delete_by_id(&id).await.unwrap();
        assert!(service.find_all().await.unwrap().is_empty());
    }
}
