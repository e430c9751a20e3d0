use anyhow::Result;
use std::sync::Arc;

use crate::model::{Id, Song};
use crate::service::BaseService;
use crate::store::traits::Repository;

/// Domain service of the stem player vertical
#[derive(Clone)]
pub struct SongService {
    base: BaseService<Song>,
}

impl SongService {
    pub fn new(repository: Arc<dyn Repository<Song>>) -> Self {
        Self {
            base: BaseService::new(repository),
        }
    }

    pub async fn list_songs(&self) -> Result<Vec<Song>> {
        self.base.find_all().await
    }

    pub async fn locate_song(&self, id: &Id) -> Result<Option<Song>> {
        self.base.find_by_id(id).await
    }

    pub async fn save(&self, song: Song) -> Result<Song> {
        self.base.save(song).await
    }
}
