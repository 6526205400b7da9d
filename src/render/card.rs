//! Card rendering.
//!
//! Songs and title images are turned into escaped markup here; the template
//! only decides where that markup goes.

use super::templates::expand;
use crate::deck::{Card, Position, TitleImage};
use crate::songs::Song;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::Value;
use std::collections::BTreeSet;

/// Render a card into a standalone document.
pub fn render(card: &Card, template: &str) -> String {
    let vars = card_vars(card);
    let vars: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (*k, v.as_str())).collect();
    expand(template, &vars)
}

/// The placeholder values for a card, shared by the card and sheet templates.
pub(super) fn card_vars(card: &Card) -> Vec<(&'static str, String)> {
    vec![
        ("title", encode_text(&card.title).to_string()),
        ("card_number", card.number.to_string()),
        (
            "background_color",
            encode_double_quoted_attribute(&card.background_color).to_string(),
        ),
        ("songs", songs_markup(&card.songs)),
        ("title_images", images_markup(card.title_images.iter())),
        (
            "title_images_left",
            images_markup(
                card.title_images
                    .iter()
                    .filter(|i| i.position == Position::Left),
            ),
        ),
        (
            "title_images_right",
            images_markup(
                card.title_images
                    .iter()
                    .filter(|i| i.position == Position::Right),
            ),
        ),
    ]
}

fn songs_markup(songs: &[Song]) -> String {
    songs
        .iter()
        .map(song_markup)
        .collect::<Vec<_>>()
        .join("\n")
}

fn song_markup(song: &Song) -> String {
    // distinct field names can normalise to the same attribute; first one wins
    let mut seen = BTreeSet::new();
    let data_attrs: String = song
        .extra
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // nested values have no sensible attribute form
                _ => return None,
            };
            let key = attribute_key(key)?;
            if !seen.insert(key.clone()) {
                return None;
            }
            Some(format!(
                r#" data-{key}="{}""#,
                encode_double_quoted_attribute(&value)
            ))
        })
        .collect();

    let artist = song
        .artist
        .as_ref()
        .map(|a| format!(r#" <span class="song-artist">{}</span>"#, encode_text(a)))
        .unwrap_or_default();

    format!(
        r#"<li class="song"{data_attrs}><span class="song-title">{}</span>{artist}</li>"#,
        encode_text(&song.title)
    )
}

/// Turn a free-form field name into something usable after `data-`.
fn attribute_key(key: &str) -> Option<String> {
    let key: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let key = key.trim_matches('-');
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}

fn images_markup<'a, I: Iterator<Item = &'a TitleImage>>(images: I) -> String {
    images
        .map(|image| {
            format!(
                r#"<img class="title-image {}" src="{}" alt="{}" style="{}"/>"#,
                image.position,
                encode_double_quoted_attribute(&image.src),
                encode_double_quoted_attribute(&image.alt),
                encode_double_quoted_attribute(&image.style),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::deck::{AssetMode, TitleImage};
    use std::path::PathBuf;

    fn card(songs: Vec<Song>, images: Vec<TitleImage>) -> Card {
        Card {
            number: 7,
            title: "Bingo <Musical> & Friends".to_string(),
            background_color: "#FFEAB3".to_string(),
            songs,
            title_images: images.into(),
        }
    }

    #[test]
    fn can_render_every_variable() {
        let songs = vec![Song::new("La Bamba").with_artist("Ritchie Valens")];
        let template =
            "{title}|{card_number}|{background_color}|{songs}|{title_images}".to_string();
        let html = render(&card(songs, Vec::new()), &template);

        assert_eq!(
            html,
            "Bingo &lt;Musical&gt; &amp; Friends|7|#FFEAB3|\
<li class=\"song\"><span class=\"song-title\">La Bamba</span> \
<span class=\"song-artist\">Ritchie Valens</span></li>|"
        );
    }

    #[test]
    fn escapes_song_text() {
        let songs = vec![Song::new("Rock & Roll <All Nite>")];
        let html = render(&card(songs, Vec::new()), "{songs}");
        assert!(html.contains("Rock &amp; Roll &lt;All Nite&gt;"));
        assert!(!html.contains("<All Nite>"));
    }

    #[test]
    fn extra_fields_become_data_attributes() {
        let mut song = Song::new("Waterloo");
        song.extra.insert("Year".to_string(), Value::from(1974));
        song.extra
            .insert("spotify id".to_string(), Value::from("abc\"def"));
        song.extra
            .insert("tags".to_string(), Value::from(vec!["pop", "eurovision"]));

        let html = render(&card(vec![song], Vec::new()), "{songs}");
        assert!(html.contains(r#" data-year="1974""#));
        assert!(html.contains(r#" data-spotify-id="abc&quot;def""#));
        assert!(!html.contains("data-tags"));
    }

    #[test]
    fn colliding_field_names_give_one_attribute() {
        let mut song = Song::new("Waterloo");
        song.extra.insert("Year".to_string(), Value::from(1974));
        song.extra.insert("year".to_string(), Value::from(1975));
        song.extra.insert("spotify id".to_string(), Value::from("a"));
        song.extra.insert("spotify-id".to_string(), Value::from("b"));

        let html = render(&card(vec![song], Vec::new()), "{songs}");
        assert_eq!(html.matches(" data-year=").count(), 1);
        assert_eq!(html.matches(" data-spotify-id=").count(), 1);
        assert!(html.contains(r#" data-year="1974""#));
        assert!(html.contains(r#" data-spotify-id="a""#));
    }

    #[test]
    fn images_split_by_side() {
        let images = TitleImage::from_paths(
            &[PathBuf::from("hat.png"), PathBuf::from("notes.png")],
            AssetMode::FileUri,
        )
        .expect("can resolve images");
        let card = card(Vec::new(), images);

        let left = render(&card, "{title_images_left}");
        let right = render(&card, "{title_images_right}");
        assert!(left.contains(r#"class="title-image left""#));
        assert!(left.contains(r#"alt="decor-1""#));
        assert!(!left.contains("decor-2"));
        assert!(right.contains(r#"class="title-image right""#));
        assert!(right.contains(r#"alt="decor-2""#));

        let all = render(&card, "{title_images}");
        assert!(all.contains("decor-1") && all.contains("decor-2"));
    }
}
