//! Song pool loading.
//!
//! The data file is a map with a `songs` list. Entries may be bare strings or
//! records; records keep any fields we don't know about so templates can use
//! them later.

use crate::deck::SONGS_PER_CARD;
use crate::error::BingoError;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SongEntry")]
pub struct Song {
    pub title: String,
    pub artist: Option<String>,
    /// Fields passed through to rendering unchanged
    pub extra: BTreeMap<String, Value>,
}

impl Song {
    pub fn new<S: ToString>(title: S) -> Song {
        Song {
            title: title.to_string(),
            artist: None,
            extra: BTreeMap::default(),
        }
    }

    #[cfg(test)]
    pub fn with_artist<S: ToString>(mut self, artist: S) -> Song {
        self.artist = Some(artist.to_string());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SongEntry {
    Title(Scalar),
    Record {
        #[serde(alias = "name")]
        title: Scalar,
        #[serde(default)]
        artist: Option<Scalar>,
        #[serde(flatten)]
        extra: BTreeMap<String, Value>,
    },
}

/// A title or artist as written in the data file. YAML reads `1999` or
/// `yes` as something other than a string, but they are still names.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> String {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

impl From<SongEntry> for Song {
    fn from(entry: SongEntry) -> Song {
        match entry {
            SongEntry::Title(title) => Song::new(String::from(title)),
            SongEntry::Record {
                title,
                artist,
                extra,
            } => Song {
                title: title.into(),
                artist: artist.map(String::from),
                extra,
            },
        }
    }
}

#[derive(Deserialize, Default)]
struct SongList {
    #[serde(default)]
    songs: Vec<Song>,
}

/// Load the song pool from a YAML, JSON or TOML file.
///
/// Fails with [`BingoError::NotEnoughSongs`] when the pool can't fill one card.
pub fn load_songs(path: &Path) -> Result<Vec<Song>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read song data from {}", path.display()))?;
    let list = parse_songs(path, &contents)
        .with_context(|| format!("Failed to parse song data in {}", path.display()))?;

    check_pool(&list.songs)?;
    log::info!("Loaded {} songs from {}", list.songs.len(), path.display());
    Ok(list.songs)
}

fn parse_songs(path: &Path, contents: &str) -> Result<SongList> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let list = match ext.as_deref() {
        Some("json") => serde_json::from_str(contents)?,
        Some("toml") => toml::from_str(contents)?,
        _ => {
            // an empty YAML document has no map at all
            if contents.trim().is_empty() {
                SongList::default()
            } else {
                serde_yaml::from_str(contents)?
            }
        }
    };
    Ok(list)
}

/// Make sure the pool is large enough to draw one card from.
pub fn check_pool(songs: &[Song]) -> Result<(), BingoError> {
    if songs.len() < SONGS_PER_CARD {
        return Err(BingoError::NotEnoughSongs {
            found: songs.len(),
            required: SONGS_PER_CARD,
        });
    }
    Ok(())
}
