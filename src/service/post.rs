use anyhow::Result;
use std::sync::Arc;

use crate::model::{Id, Post};
use crate::service::BaseService;
use crate::store::traits::Repository;

/// Domain service of the blog vertical
#[derive(Clone)]
pub struct PostService {
    base: BaseService<Post>,
}

impl PostService {
    pub fn new(repository: Arc<dyn Repository<Post>>) -> Self {
        Self {
            base: BaseService::new(repository),
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.base.find_all().await
    }

    pub async fn locate_post(&self, id: &Id) -> Result<Option<Post>> {
        self.base.find_by_id(id).await
    }

    pub async fn save(&self, post: Post) -> Result<Post> {
        self.base.save(post).await
    }
}
