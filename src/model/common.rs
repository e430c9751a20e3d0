use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Id = Uuid;

pub fn generate_id() -> Id {
    Uuid::new_v4()
}

/// Audit timestamps maintained by the repositories, never by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// Record a save at `now`. The creation time is only set once.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.created_at.get_or_insert(now);
        self.updated_at = Some(now);
    }
}

/// A persisted record with a generated identifier.
///
/// An entity without an id has never been saved. Repositories assign the id
/// on first save and never change it afterwards.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable name used in lookup failures, e.g. "Blog post".
    const LABEL: &'static str;

    fn id(&self) -> Option<Id>;

    fn timestamps(&self) -> &Timestamps;

    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Assign ids to this record and any owned children that lack one, and
    /// refresh the audit timestamps. Returns the record's id.
    fn prepare_save(&mut self, now: DateTime<Utc>) -> Id;
}
