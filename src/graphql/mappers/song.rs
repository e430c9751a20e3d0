use crate::error::MappingError;
use crate::graphql::mappers::wire_id;
use crate::graphql::types;
use crate::model;

/// Builds public media paths by prefixing stored file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath {
    prefix: String,
}

impl MediaPath {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn resolve(&self, file_path: &str) -> String {
        format!("{}{}", self.prefix, file_path)
    }
}

#[derive(Debug, Clone)]
pub struct StemMapper {
    media: MediaPath,
}

impl StemMapper {
    pub fn new(media: MediaPath) -> Self {
        Self { media }
    }

    pub fn map(&self, stem: &model::Stem) -> Result<types::Stem, MappingError> {
        log::debug!("Mapping stem {}", stem.name);
        let id = stem
            .id
            .map(|id| id.to_string())
            .ok_or(MappingError::MissingId { label: "Stem" })?;

        Ok(types::Stem {
            id,
            name: stem.name.clone(),
            file_path: stem.file_path.clone(),
            path: self.media.resolve(&stem.file_path),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SongMapper {
    media: MediaPath,
    stem_mapper: StemMapper,
}

impl SongMapper {
    pub fn new(media: MediaPath, stem_mapper: StemMapper) -> Self {
        Self { media, stem_mapper }
    }

    /// Mapper whose songs and stems share one path prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let media = MediaPath::new(prefix);
        Self::new(media.clone(), StemMapper::new(media))
    }

    pub fn map(&self, song: &model::Song) -> Result<types::Song, MappingError> {
        log::debug!("Mapping song {}", song.name);
        let stems = song
            .stems
            .as_ref()
            .map(|stems| {
                stems
                    .iter()
                    .map(|s| self.stem_mapper.map(s))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let mapped = types::Song {
            id: wire_id(song)?,
            name: song.name.clone(),
            file_path: song.file_path.clone(),
            path: self.media.resolve(&song.file_path),
            stems,
        };
        log::debug!("Mapped song {} with id {}", mapped.name, mapped.id);
        Ok(mapped)
    }
}
