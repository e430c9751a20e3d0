use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use sqlx::{postgres::PgRow, types::Json, PgPool, Postgres, Row, Transaction};
use std::collections::HashMap;

use crate::model::{Entity, GalleryItem, Id, Post, Song, Stem, Timestamps};
use crate::store::traits::{GalleryItemRepository, Repository};

pub const SONG_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS songs (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS stems (
        id UUID PRIMARY KEY,
        song_id UUID NOT NULL REFERENCES songs (id) ON DELETE CASCADE,
        position INTEGER NOT NULL,
        name TEXT NOT NULL,
        file_path TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS stems_song_position_idx ON stems (song_id, position)",
];

pub const POST_SCHEMA: &[&str] = &[r#"
    CREATE TABLE IF NOT EXISTS posts (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        tags JSONB NOT NULL DEFAULT '[]'::jsonb,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#];

pub const GALLERY_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS gallery_items (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        content TEXT,
        image_path TEXT,
        foreign_object JSONB NOT NULL DEFAULT '[]'::jsonb,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // Secondary index: external id -> referencing items
    r#"
    CREATE TABLE IF NOT EXISTS gallery_item_foreign_objects (
        item_id UUID NOT NULL REFERENCES gallery_items (id) ON DELETE CASCADE,
        foreign_object TEXT NOT NULL,
        PRIMARY KEY (item_id, foreign_object)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS gallery_item_foreign_objects_lookup_idx ON gallery_item_foreign_objects (foreign_object)",
];

fn timestamps_from_row(row: &PgRow) -> Result<Timestamps> {
    Ok(Timestamps {
        created_at: Some(row.try_get("created_at")?),
        updated_at: Some(row.try_get("updated_at")?),
    })
}

/// Apply the `created_at`/`updated_at` a write returned
fn apply_written_timestamps<E: Entity>(entity: &mut E, row: &PgRow) -> Result<()> {
    *entity.timestamps_mut() = timestamps_from_row(row)?;
    Ok(())
}

/// Stored `position` column of the stem at `index`
fn stem_position(index: usize) -> Result<i32> {
    i32::try_from(index).context("too many stems")
}

fn save_time<E: Entity>(entity: &E) -> DateTime<Utc> {
    entity.timestamps().updated_at.unwrap_or_else(Utc::now)
}

// ---------------------------------------------------------------------------
// Songs

#[derive(Debug, Clone)]
pub struct PgSongRepository {
    pool: PgPool,
}

impl PgSongRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn song_from_row(row: &PgRow) -> Result<Song> {
        Ok(Song {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            file_path: row.try_get("file_path")?,
            stems: None,
            timestamps: timestamps_from_row(row)?,
        })
    }

    /// Load the ordered stems of every song in `song_ids`.
    async fn load_stems(
        tx: &mut Transaction<'_, Postgres>,
        song_ids: &[Id],
    ) -> Result<HashMap<Id, Vec<Stem>>> {
        let rows = sqlx::query(
            "SELECT id, song_id, name, file_path FROM stems WHERE song_id = ANY($1) ORDER BY song_id, position",
        )
        .bind(song_ids)
        .fetch_all(&mut **tx)
        .await
        .context("Failed to load stems")?;

        let stems = rows
            .iter()
            .map(|row| -> Result<(Id, Stem)> {
                Ok((
                    row.try_get("song_id")?,
                    Stem {
                        id: Some(row.try_get("id")?),
                        name: row.try_get("name")?,
                        file_path: row.try_get("file_path")?,
                    },
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(stems.into_iter().into_group_map())
    }
}

#[async_trait::async_trait]
impl Repository<Song> for PgSongRepository {
    async fn find_all(&self) -> Result<Vec<Song>> {
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query(
            "SELECT id, name, file_path, created_at, updated_at FROM songs ORDER BY created_at, id",
        )
        .fetch_all(&mut *tx)
        .await
        .context("Failed to list songs")?;

        let mut songs = rows
            .iter()
            .map(Self::song_from_row)
            .collect::<Result<Vec<_>>>()?;
        let ids: Vec<Id> = songs.iter().filter_map(|s| s.id).collect();
        let mut stems = Self::load_stems(&mut tx, &ids).await?;
        tx.commit().await?;

        for song in &mut songs {
            let owned = song.id.and_then(|id| stems.remove(&id)).unwrap_or_default();
            song.stems = Some(owned);
        }
        Ok(songs)
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Song>> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            "SELECT id, name, file_path, created_at, updated_at FROM songs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to fetch song")?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut song = Self::song_from_row(&row)?;
        let mut stems = Self::load_stems(&mut tx, &[*id]).await?;
        tx.commit().await?;

        song.stems = Some(stems.remove(id).unwrap_or_default());
        Ok(Some(song))
    }

    async fn save(&self, mut song: Song) -> Result<Song> {
        let id = song.prepare_save(Utc::now());
        let now = save_time(&song);
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO songs (id, name, file_path, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                file_path = EXCLUDED.file_path,
                updated_at = EXCLUDED.updated_at
            RETURNING created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&song.name)
        .bind(&song.file_path)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to save song")?;
        apply_written_timestamps(&mut song, &row)?;

        // A song saved without loaded stems keeps its stored stems
        if let Some(stems) = &song.stems {
            sqlx::query("DELETE FROM stems WHERE song_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .context("Failed to replace stems")?;

            for (position, stem) in stems.iter().enumerate() {
                let position = stem_position(position)?;
                sqlx::query(
                    "INSERT INTO stems (id, song_id, position, name, file_path) VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(stem.id)
                .bind(id)
                .bind(position)
                .bind(&stem.name)
                .bind(&stem.file_path)
                .execute(&mut *tx)
                .await
                .context("Failed to save stem")?;
            }
        }

        tx.commit().await?;
        Ok(song)
    }

    async fn delete_by_id(&self, id: &Id) -> Result<()> {
        sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete song")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Posts

#[derive(Debug, Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn post_from_row(row: &PgRow) -> Result<Post> {
        let tags: Json<Vec<String>> = row.try_get("tags")?;
        Ok(Post {
            id: Some(row.try_get("id")?),
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            tags: tags.0,
            timestamps: timestamps_from_row(row)?,
        })
    }
}

#[async_trait::async_trait]
impl Repository<Post> for PgPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            "SELECT id, title, content, tags, created_at, updated_at FROM posts ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list posts")?;

        rows.iter().map(Self::post_from_row).collect()
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<Post>> {
        let row = sqlx::query(
            "SELECT id, title, content, tags, created_at, updated_at FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch post")?;

        row.as_ref().map(Self::post_from_row).transpose()
    }

    async fn save(&self, mut post: Post) -> Result<Post> {
        let id = post.prepare_save(Utc::now());
        let now = save_time(&post);

        let row = sqlx::query(
            r#"
            INSERT INTO posts (id, title, content, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                tags = EXCLUDED.tags,
                updated_at = EXCLUDED.updated_at
            RETURNING created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(Json(&post.tags))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to save post")?;

        apply_written_timestamps(&mut post, &row)?;
        Ok(post)
    }

    async fn delete_by_id(&self, id: &Id) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete post")?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Gallery items

#[derive(Debug, Clone)]
pub struct PgGalleryItemRepository {
    pool: PgPool,
}

const GALLERY_COLUMNS: &str =
    "id, title, description, content, image_path, foreign_object, created_at, updated_at";

impl PgGalleryItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn item_from_row(row: &PgRow) -> Result<GalleryItem> {
        let foreign_object: Json<Vec<String>> = row.try_get("foreign_object")?;
        Ok(GalleryItem {
            id: Some(row.try_get("id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            content: row.try_get("content")?,
            image_path: row.try_get("image_path")?,
            foreign_object: foreign_object.0,
            timestamps: timestamps_from_row(row)?,
        })
    }
}

#[async_trait::async_trait]
impl Repository<GalleryItem> for PgGalleryItemRepository {
    async fn find_all(&self) -> Result<Vec<GalleryItem>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM gallery_items ORDER BY created_at, id",
            GALLERY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .context("Failed to list gallery items")?;

        rows.iter().map(Self::item_from_row).collect()
    }

    async fn find_by_id(&self, id: &Id) -> Result<Option<GalleryItem>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM gallery_items WHERE id = $1",
            GALLERY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch gallery item")?;

        row.as_ref().map(Self::item_from_row).transpose()
    }

    async fn save(&self, mut item: GalleryItem) -> Result<GalleryItem> {
        let id = item.prepare_save(Utc::now());
        let now = save_time(&item);
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO gallery_items (id, title, description, content, image_path, foreign_object, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                content = EXCLUDED.content,
                image_path = EXCLUDED.image_path,
                foreign_object = EXCLUDED.foreign_object,
                updated_at = EXCLUDED.updated_at
            RETURNING created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.content)
        .bind(&item.image_path)
        .bind(Json(&item.foreign_object))
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to save gallery item")?;
        apply_written_timestamps(&mut item, &row)?;

        sqlx::query("DELETE FROM gallery_item_foreign_objects WHERE item_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear foreign object index")?;
        sqlx::query(
            r#"
            INSERT INTO gallery_item_foreign_objects (item_id, foreign_object)
            SELECT $1, reference FROM UNNEST($2::text[]) AS reference
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(&item.foreign_object)
        .execute(&mut *tx)
        .await
        .context("Failed to index foreign objects")?;

        tx.commit().await?;
        Ok(item)
    }

    async fn delete_by_id(&self, id: &Id) -> Result<()> {
        sqlx::query("DELETE FROM gallery_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete gallery item")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl GalleryItemRepository for PgGalleryItemRepository {
    async fn find_by_foreign_objects_in(&self, ids: &[String]) -> Result<Vec<GalleryItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM gallery_items
            WHERE id IN (
                SELECT item_id FROM gallery_item_foreign_objects WHERE foreign_object = ANY($1)
            )
            ORDER BY created_at, id
            "#,
            GALLERY_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .context("Failed to look up gallery items by foreign object")?;

        rows.iter().map(Self::item_from_row).collect()
    }
}
