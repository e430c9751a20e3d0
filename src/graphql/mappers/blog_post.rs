use crate::error::MappingError;
use crate::graphql::mappers::wire_id;
use crate::graphql::types::{self, BlogPostInput};
use crate::model::Post;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogPostMapper;

impl BlogPostMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, post: &Post) -> Result<types::BlogPost, MappingError> {
        log::debug!("Mapping post {}", post.title);
        let mapped = types::BlogPost {
            id: wire_id(post)?,
            title: post.title.clone(),
            content: post.content.clone(),
            tags: post.tags.clone(),
            created_at: post.timestamps.created_at,
            updated_at: post.timestamps.updated_at,
        };
        log::debug!("Mapped blog post {} with id {}", mapped.title, mapped.id);
        Ok(mapped)
    }

    /// Build an unsaved post; id and timestamps are left to the repository.
    pub fn map_input(&self, title: &str, input: &BlogPostInput) -> Post {
        log::debug!("Mapping input for blog post with title: {}", title);
        Post::new(title, input.content.clone(), input.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generate_id;
    use chrono::{TimeZone, Utc};

    #[test]
    fn map_copies_all_fields() {
        let created_at = Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap();
        let updated_at = Utc.with_ymd_and_hms(2023, 1, 2, 11, 0, 0).unwrap();
        let mut post = Post::new(
            "Test Title",
            "Test Content",
            vec!["tag1".to_string(), "tag2".to_string()],
        );
        post.id = Some(generate_id());
        post.timestamps.created_at = Some(created_at);
        post.timestamps.updated_at = Some(updated_at);

        let mapped = BlogPostMapper::new().map(&post).unwrap();

        assert_eq!(mapped.id, post.id.unwrap().to_string());
        assert_eq!(mapped.title, "Test Title");
        assert_eq!(mapped.content, "Test Content");
        assert_eq!(mapped.tags, vec!["tag1", "tag2"]);
        assert_eq!(mapped.created_at, Some(created_at));
        assert_eq!(mapped.updated_at, Some(updated_at));
    }

    #[test]
    fn map_input_leaves_identity_unset() {
        let input = BlogPostInput {
            content: "Test Content".to_string(),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
        };

        let post = BlogPostMapper::new().map_input("Test Title", &input);

        assert_eq!(post.title, "Test Title");
        assert_eq!(post.content, "Test Content");
        assert_eq!(post.tags, vec!["tag1", "tag2"]);
        assert!(post.id.is_none());
        assert!(post.timestamps.created_at.is_none());
    }
}
