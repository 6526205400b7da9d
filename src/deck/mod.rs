//! Cards and how they get dealt from the song pool.

mod images;
mod sampler;

pub use images::*;
pub use sampler::*;

use crate::songs::Song;
use anyhow::Result;
use derive_builder::Builder;
use rand::Rng;
use std::rc::Rc;

/// Songs printed on every card
pub const SONGS_PER_CARD: usize = 8;
/// Cards laid out on every printed sheet
pub const CARDS_PER_SHEET: usize = 4;

/// Styling shared by every card of a run.
#[derive(Builder, Debug, Clone)]
#[builder(setter(into))]
pub struct CardStyle {
    pub title: String,
    pub background_color: String,
    #[builder(default)]
    pub title_images: Vec<TitleImage>,
}

#[derive(Debug, Clone)]
pub struct Card {
    /// 1-based, unique within a run
    pub number: usize,
    pub title: String,
    pub background_color: String,
    pub songs: Vec<Song>,
    pub title_images: Rc<[TitleImage]>,
}

/// Deal `count` cards, drawing each card's songs from `rng` in card order.
pub fn deal<R: Rng + ?Sized>(
    pool: &[Song],
    style: &CardStyle,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Card>> {
    let title_images: Rc<[TitleImage]> = style.title_images.clone().into();
    let sets = sample_sets(pool, SONGS_PER_CARD, count, rng)?;

    Ok(sets
        .into_iter()
        .enumerate()
        .map(|(i, songs)| Card {
            number: i + 1,
            title: style.title.clone(),
            background_color: style.background_color.clone(),
            songs,
            title_images: Rc::clone(&title_images),
        })
        .collect())
}
