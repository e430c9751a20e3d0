use std::sync::Arc;

use crate::error::{parse_id, ServiceResult};
use crate::graphql::mappers::BlogPostMapper;
use crate::graphql::services::{creation_result, found};
use crate::graphql::types::{BlogPost, BlogPostInput, QueryResult};
use crate::service::PostService;

/// GraphQL facing service of the blog.
pub struct BlogGraphQlService {
    posts: Arc<PostService>,
    mapper: BlogPostMapper,
}

impl BlogGraphQlService {
    pub fn new(posts: Arc<PostService>, mapper: BlogPostMapper) -> Self {
        Self { posts, mapper }
    }

    pub async fn list_blog_posts(&self) -> ServiceResult<Vec<BlogPost>> {
        log::info!("Retrieving blog posts");
        let posts = self
            .posts
            .list_posts()
            .await?
            .iter()
            .map(|post| self.mapper.map(post))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Retrieved {} blog posts", posts.len());
        Ok(posts)
    }

    pub async fn locate_blog_post(&self, id: &str) -> ServiceResult<BlogPost> {
        log::info!("Retrieving blog post by ID: {}", id);
        let post = found(self.posts.locate_post(&parse_id(id)?).await?, id)?;
        let post = self.mapper.map(&post)?;
        log::info!("Retrieved blog post {} with id {}", post.title, post.id);
        Ok(post)
    }

    pub async fn create_blog_post(&self, title: &str, input: &BlogPostInput) -> QueryResult {
        log::info!("Creating blog post with title: {}", title);
        let post = self.mapper.map_input(title, input);
        creation_result(self.posts.save(post).await.map_err(Into::into))
    }
}
