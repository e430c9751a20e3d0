use async_graphql::{Object, Result};
use std::sync::Arc;

use crate::graphql::services::StemPlayerGraphQlService;
use crate::graphql::types::Song;

pub struct StemPlayerQueries {
    service: Arc<StemPlayerGraphQlService>,
}

impl StemPlayerQueries {
    pub fn new(service: Arc<StemPlayerGraphQlService>) -> Self {
        Self { service }
    }
}

#[Object]
impl StemPlayerQueries {
    /// All songs with their stems
    async fn list(&self) -> Result<Vec<Song>> {
        Ok(self.service.list().await?)
    }

    async fn locate(&self, id: String) -> Result<Song> {
        Ok(self.service.locate(&id).await?)
    }
}
