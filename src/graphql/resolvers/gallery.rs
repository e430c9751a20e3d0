use async_graphql::{Object, Result};
use std::sync::Arc;

use crate::graphql::services::GalleryGraphQlService;
use crate::graphql::types::{GalleryItem, GalleryItemInput, QueryResult};

pub struct GalleryQueries {
    service: Arc<GalleryGraphQlService>,
}

impl GalleryQueries {
    pub fn new(service: Arc<GalleryGraphQlService>) -> Self {
        Self { service }
    }
}

#[Object]
impl GalleryQueries {
    async fn list(&self) -> Result<Vec<GalleryItem>> {
        Ok(self.service.list().await?)
    }

    async fn locate(&self, id: String) -> Result<GalleryItem> {
        Ok(self.service.locate(&id).await?)
    }

    /// Items referencing any of `ids`
    async fn list_by_foreign_object(&self, ids: Vec<String>) -> Result<Vec<GalleryItem>> {
        Ok(self.service.list_by_foreign_object(&ids).await?)
    }
}

pub struct GalleryMutations {
    service: Arc<GalleryGraphQlService>,
}

impl GalleryMutations {
    pub fn new(service: Arc<GalleryGraphQlService>) -> Self {
        Self { service }
    }
}

#[Object]
impl GalleryMutations {
    async fn create(&self, input: GalleryItemInput) -> QueryResult {
        self.service.create(&input).await
    }
}
