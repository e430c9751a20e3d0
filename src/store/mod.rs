pub mod datasource;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use datasource::*;
pub use memory::*;
pub use postgres::*;
pub use traits::*;

use anyhow::Result;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};
use crate::model::{Post, Song};

/// The repositories of all three verticals, built once at startup.
#[derive(Clone)]
pub struct Repositories {
    pub songs: Arc<dyn Repository<Song>>,
    pub posts: Arc<dyn Repository<Post>>,
    pub gallery: Arc<dyn GalleryItemRepository>,
}

impl Repositories {
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => {
                log::warn!("Using in-memory storage, data is lost on shutdown");
                Ok(Self::memory())
            }
            StorageBackend::Postgres => Self::postgres(config).await,
        }
    }

    pub fn memory() -> Self {
        Self {
            songs: Arc::new(MemoryRepository::<Song>::new()),
            posts: Arc::new(MemoryRepository::<Post>::new()),
            gallery: Arc::new(MemoryGalleryRepository::new()),
        }
    }

    /// Connect each vertical to its own datasource and make sure its tables exist
    pub async fn postgres(config: &AppConfig) -> Result<Self> {
        let songs = Datasource::connect("songs", &config.datasources.songs).await?;
        songs.apply_schema(SONG_SCHEMA).await?;

        let blog = Datasource::connect("blog", &config.datasources.blog).await?;
        blog.apply_schema(POST_SCHEMA).await?;

        let gallery = Datasource::connect("gallery", &config.datasources.gallery).await?;
        gallery.apply_schema(GALLERY_SCHEMA).await?;

        Ok(Self {
            songs: Arc::new(PgSongRepository::new(songs.pool().clone())),
            posts: Arc::new(PgPostRepository::new(blog.pool().clone())),
            gallery: Arc::new(PgGalleryItemRepository::new(gallery.pool().clone())),
        })
    }
}
