use crate::model::{generate_id, Entity, Id, Timestamps};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: Option<Id>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image_path: Option<String>,
    /// External ids this item refers to. Several items may share an id.
    pub foreign_object: Vec<String>,
    #[serde(default)]
    pub timestamps: Timestamps,
}

impl GalleryItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            content: None,
            image_path: None,
            foreign_object: Vec::new(),
            timestamps: Timestamps::default(),
        }
    }
}

impl Entity for GalleryItem {
    const LABEL: &'static str = "Gallery item";

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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prepare_save_assigns_id_once() {
        let first = Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2023, 1, 2, 11, 0, 0).unwrap();
        let mut item = GalleryItem::new("Sunset");

        let id = item.prepare_save(first);
        assert_eq!(item.prepare_save(second), id);
        assert_eq!(item.timestamps.created_at, Some(first));
        assert_eq!(item.timestamps.updated_at, Some(second));
    }
}
