//! Decorative title images.
//!
//! Images are resolved once per run into references a browser can load from
//! wherever the rendered document ends up, then shared by every card.

use anyhow::{Context, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which side of the title an image sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
}

impl Position {
    /// Images alternate sides, starting on the left.
    pub fn for_index(index: usize) -> Position {
        if index % 2 == 0 {
            Position::Left
        } else {
            Position::Right
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How an image path is turned into something a document can reference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetMode {
    /// Absolute `file://` URI; documents stay small but only work on this machine
    #[default]
    FileUri,
    /// `data:` URI with the image bytes inlined
    Embedded,
}

impl AssetMode {
    pub fn reference(&self, path: &Path) -> Result<String> {
        match self {
            AssetMode::FileUri => {
                let abs = std::path::absolute(path).with_context(|| {
                    format!("Failed to resolve image path {}", path.display())
                })?;
                Ok(format!("file://{}", abs.display()))
            }
            AssetMode::Embedded => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("Failed to read image {}", path.display()))?;
                let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
                Ok(format!("data:{};base64,{encoded}", mime_from_path(path)))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleImage {
    pub src: String,
    pub alt: String,
    pub position: Position,
    pub style: String,
}

impl TitleImage {
    /// Resolve every path into a title image, alternating left and right.
    pub fn from_paths(paths: &[PathBuf], mode: AssetMode) -> Result<Vec<TitleImage>> {
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                Ok(TitleImage {
                    src: mode.reference(path)?,
                    alt: format!("decor-{}", i + 1),
                    position: Position::for_index(i),
                    style: String::new(),
                })
            })
            .collect()
    }
}

/// Determine MIME type from file extension.
fn mime_from_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positions_alternate_starting_left() {
        let paths: Vec<PathBuf> = ["a.png", "b.png", "c.png", "d.png"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let images = TitleImage::from_paths(&paths, AssetMode::FileUri).expect("can resolve");

        let positions: Vec<Position> = images.iter().map(|i| i.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::Left,
                Position::Right,
                Position::Left,
                Position::Right
            ]
        );
        assert_eq!(images[0].alt, "decor-1");
        assert_eq!(images[3].alt, "decor-4");
    }

    #[test]
    fn file_uris_are_absolute() {
        let images = TitleImage::from_paths(&[PathBuf::from("images/hat.png")], AssetMode::FileUri)
            .expect("can resolve");
        let src = &images[0].src;
        assert!(src.starts_with("file://"));
        let path = PathBuf::from(src.trim_start_matches("file://"));
        assert!(path.is_absolute());
        assert!(path.ends_with("images/hat.png"));
    }

    #[test]
    fn embedded_images_become_data_uris() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("notes.svg");
        std::fs::write(&path, "<svg/>").expect("can write image");

        let images = TitleImage::from_paths(&[path], AssetMode::Embedded).expect("can embed");
        assert_eq!(images[0].src, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn missing_embedded_image_fails() {
        let result = TitleImage::from_paths(
            &[PathBuf::from("does/not/exist.png")],
            AssetMode::Embedded,
        );
        assert!(result.is_err());
    }

    #[test]
    fn can_guess_mime_types() {
        assert_eq!(mime_from_path(Path::new("hat.PNG")), "image/png");
        assert_eq!(mime_from_path(Path::new("hat.jpeg")), "image/jpeg");
        assert_eq!(mime_from_path(Path::new("hat")), "application/octet-stream");
    }
}
