use crate::model::{generate_id, Entity, Id, Timestamps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song of the stem player. Stems are owned and deleted with the song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: Option<Id>,
    pub name: String,
    pub file_path: String,
    /// `None` when the stems were never attached, as opposed to an empty list.
    pub stems: Option<Vec<Stem>>,
    #[serde(default)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stem {
    pub id: Option<Id>,
    pub name: String,
    pub file_path: String,
}

impl Song {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            file_path: file_path.into(),
            stems: None,
            timestamps: Timestamps::default(),
        }
    }

    pub fn with_stems(mut self, stems: Vec<Stem>) -> Self {
        self.stems = Some(stems);
        self
    }
}

impl Stem {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            file_path: file_path.into(),
        }
    }
}

impl Entity for Song {
    const LABEL: &'static str = "Song";

    fn id(&self) -> Option<Id> {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    fn prepare_save(&mut self, now: DateTime<Utc>) -> Id {
        for stem in self.stems.iter_mut().flatten() {
            stem.id.get_or_insert_with(generate_id);
        }
        self.timestamps.touch(now);
        *self.id.get_or_insert_with(generate_id)
    }
}
