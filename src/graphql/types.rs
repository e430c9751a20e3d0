//! Wire shapes of the GraphQL schema.
//!
//! Identifiers are always rendered as strings on the wire.

use async_graphql::{InputObject, SimpleObject, Union};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub file_path: String,
    /// Public path of the song's audio file
    pub path: String,
    /// Null when the stems were not loaded, never an empty stand-in
    pub stems: Option<Vec<Stem>>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Stem {
    pub id: String,
    pub name: String,
    pub file_path: String,
    /// Public path of the stem's audio file
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    pub foreign_object: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a new blog post; the title is passed as a separate argument.
#[derive(Debug, Clone, PartialEq, InputObject)]
pub struct BlogPostInput {
    pub content: String,
    #[graphql(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, InputObject)]
pub struct GalleryItemInput {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    #[graphql(default)]
    pub foreign_object: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct QuerySuccess {
    pub success: bool,
    pub message: String,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct StandardError {
    pub success: bool,
    pub message: String,
    pub id: Option<String>,
}

/// Outcome of a mutation. Mutations report failures here instead of raising
/// GraphQL errors.
#[derive(Debug, Clone, PartialEq, Union)]
pub enum QueryResult {
    QuerySuccess(QuerySuccess),
    StandardError(StandardError),
}

impl QueryResult {
    pub fn success(message: impl Into<String>, id: impl Into<String>) -> Self {
        QueryResult::QuerySuccess(QuerySuccess {
            success: true,
            message: message.into(),
            id: Some(id.into()),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        QueryResult::StandardError(StandardError {
            success: false,
            message: message.into(),
            id: None,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, QueryResult::QuerySuccess(_))
    }

    pub fn message(&self) -> &str {
        match self {
            QueryResult::QuerySuccess(success) => &success.message,
            QueryResult::StandardError(error) => &error.message,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            QueryResult::QuerySuccess(success) => success.id.as_deref(),
            QueryResult::StandardError(error) => error.id.as_deref(),
        }
    }
}
