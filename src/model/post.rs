use crate::model::{generate_id, Entity, Id, Timestamps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<Id>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>, // stored as a JSONB document
    #[serde(default)]
    pub timestamps: Timestamps,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            tags,
            timestamps: Timestamps::default(),
        }
    }
}

impl Entity for Post {
    const LABEL: &'static str = "Blog post";

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
        self.timestamps.touch(now);
        *self.id.get_or_insert_with(generate_id)
    }
}
