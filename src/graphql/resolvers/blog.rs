use async_graphql::{Object, Result};
use std::sync::Arc;

use crate::graphql::services::BlogGraphQlService;
use crate::graphql::types::{BlogPost, BlogPostInput, QueryResult};

pub struct BlogQueries {
    service: Arc<BlogGraphQlService>,
}

impl BlogQueries {
    pub fn new(service: Arc<BlogGraphQlService>) -> Self {
        Self { service }
    }
}

#[Object]
impl BlogQueries {
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>> {
        Ok(self.service.list_blog_posts().await?)
    }

    async fn locate_blog_post(&self, id: String) -> Result<BlogPost> {
        Ok(self.service.locate_blog_post(&id).await?)
    }
}

pub struct BlogMutations {
    service: Arc<BlogGraphQlService>,
}

impl BlogMutations {
    pub fn new(service: Arc<BlogGraphQlService>) -> Self {
        Self { service }
    }
}

#[Object]
impl BlogMutations {
    /// Never raises; failures come back as `StandardError`.
    async fn create_blog_post(&self, title: String, input: BlogPostInput) -> QueryResult {
        self.service.create_blog_post(&title, &input).await
    }
}
