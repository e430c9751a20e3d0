use anyhow::{Context, Result};

use crate::model::{GalleryItem, Post, Song, Stem};
use crate::store::{Repositories, Repository};

const DEMO_SONG_DIR: &str = "fell-in-again";

const DEMO_STEMS: [&str; 8] = [
    "Ambience",
    "Bass",
    "Drums",
    "Flute",
    "Percussion",
    "Piano",
    "Strings",
    "Synths",
];

/// Load demonstration content into all three verticals.
///
/// Skipped when the song store already holds data, so restarting with
/// `LOAD_SEED_DATA=true` does not duplicate anything.
pub async fn load_seed_data(repositories: &Repositories) -> Result<()> {
    if !repositories.songs.find_all().await?.is_empty() {
        log::info!("Songs already present, skipping seed data");
        return Ok(());
    }

    let song = repositories
        .songs
        .save(demo_song())
        .await
        .context("Failed to seed demo song")?;
    log::info!(
        "Seeded song {} with {} stems",
        song.name,
        song.stems.as_ref().map_or(0, Vec::len)
    );

    let post = repositories
        .posts
        .save(demo_post())
        .await
        .context("Failed to seed demo blog post")?;

    let mut item = demo_gallery_item();
    if let Some(post_id) = post.id {
        item.foreign_object.push(post_id.to_string());
    }
    repositories
        .gallery
        .save(item)
        .await
        .context("Failed to seed demo gallery item")?;

    Ok(())
}

fn demo_song() -> Song {
    let stems = DEMO_STEMS
        .iter()
        .map(|name| {
            Stem::new(
                *name,
                format!("{}/stems/{}.mp3", DEMO_SONG_DIR, name.to_lowercase()),
            )
        })
        .collect();

    Song::new("Fell In Again", format!("{}/mix.mp3", DEMO_SONG_DIR)).with_stems(stems)
}

fn demo_post() -> Post {
    Post::new(
        "Hello, world",
        "First post on the new site.",
        vec!["meta".to_string()],
    )
}

fn demo_gallery_item() -> GalleryItem {
    let mut item = GalleryItem::new("Fell In Again artwork");
    item.description = Some("Cover art for the demo song".to_string());
    item.image_path = Some(format!("/gallery/{}.jpg", DEMO_SONG_DIR));
    item
}
