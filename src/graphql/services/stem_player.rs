use std::sync::Arc;

use crate::error::{parse_id, ServiceResult};
use crate::graphql::mappers::SongMapper;
use crate::graphql::services::found;
use crate::graphql::types::Song;
use crate::service::SongService;

/// GraphQL facing service of the stem player. Songs are read-only here.
pub struct StemPlayerGraphQlService {
    songs: Arc<SongService>,
    mapper: SongMapper,
}

impl StemPlayerGraphQlService {
    pub fn new(songs: Arc<SongService>, mapper: SongMapper) -> Self {
        Self { songs, mapper }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Song>> {
        log::info!("Retrieving songs for stem player");
        let songs = self
            .songs
            .list_songs()
            .await?
            .iter()
            .map(|song| self.mapper.map(song))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Retrieved {} songs", songs.len());
        Ok(songs)
    }

    /// Song with all of its stems
    pub async fn locate(&self, id: &str) -> ServiceResult<Song> {
        log::info!("Retrieving song by ID: {}", id);
        let song = found(self.songs.locate_song(&parse_id(id)?).await?, id)?;
        let song = self.mapper.map(&song)?;
        log::info!("Retrieved song {} with id {}", song.name, song.id);
        Ok(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::graphql::services::test_support::FailingRepository;
    use crate::model::{self, generate_id, Stem};
    use crate::store::{MemoryRepository, Repository};

    fn service_with(repo: Arc<dyn Repository<model::Song>>) -> StemPlayerGraphQlService {
        StemPlayerGraphQlService::new(
            Arc::new(SongService::new(repo)),
            SongMapper::with_prefix("/stems/"),
        )
    }

    #[tokio::test]
    async fn list_maps_songs_with_stems() {
        let repo = Arc::new(MemoryRepository::<model::Song>::new());
        repo.save(
            model::Song::new("Test Song 1", "song1.mp3")
                .with_stems(vec![Stem::new("Drums", "drums.mp3")]),
        )
        .await
        .unwrap();
        repo.save(model::Song::new("Test Song 2", "song2.mp3").with_stems(vec![]))
            .await
            .unwrap();

        let songs = service_with(repo).list().await.unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].name, "Test Song 1");
        let stems = songs[0].stems.as_ref().unwrap();
        assert_eq!(stems.len(), 1);
        assert_eq!(stems[0].name, "Drums");
        assert_eq!(songs[1].name, "Test Song 2");
        assert_eq!(songs[1].stems, Some(vec![]));
    }

    #[tokio::test]
    async fn list_is_empty_without_songs() {
        let songs = service_with(Arc::new(MemoryRepository::<model::Song>::new()))
            .list()
            .await
            .unwrap();
        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn locate_returns_mapped_song() {
        let repo = Arc::new(MemoryRepository::<model::Song>::new());
        let saved = repo
            .save(
                model::Song::new("Test Song 1", "song1.mp3")
                    .with_stems(vec![Stem::new("Drums", "drums.mp3")]),
            )
            .await
            .unwrap();
        let id = saved.id.unwrap().to_string();

        let song = service_with(repo).locate(&id).await.unwrap();

        assert_eq!(song.id, id);
        assert_eq!(song.name, "Test Song 1");
        assert_eq!(song.stems.unwrap()[0].path, "/stems/drums.mp3");
    }

    #[tokio::test]
    async fn locate_missing_song_is_not_found() {
        let id = generate_id().to_string();
        let err = service_with(Arc::new(MemoryRepository::<model::Song>::new()))
            .locate(&id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert_eq!(err.to_string(), format!("Song not found with id: {}", id));
    }

    #[tokio::test]
    async fn locate_rejects_malformed_id() {
        let err = service_with(Arc::new(MemoryRepository::<model::Song>::new()))
            .locate("U1")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId { .. }));
    }

    #[tokio::test]
    async fn store_failure_propagates_on_reads() {
        let err = service_with(Arc::new(FailingRepository))
            .list()
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Store(_)));
        assert!(err.to_string().contains("Database error"));
    }
}
