//! The card generation pipeline.
//!
//! Load the pool, deal every card from one seeded generator, write each card,
//! then group the cards onto sheets and write those. Nothing is written until
//! the pool has been checked and every card dealt.

use crate::deck::{self, CARDS_PER_SHEET};
use crate::output::{card_file_name, sheet_file_name, write_document};
use crate::render::{card, sheet, Templates};
use crate::settings::CardSettings;
use crate::sheets::assemble;
use crate::songs::load_songs;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// What a generation run wrote.
#[derive(Debug)]
pub struct GenerateStats {
    pub cards_dir: PathBuf,
    pub sheets_dir: PathBuf,
    pub card_files: Vec<PathBuf>,
    pub sheet_files: Vec<PathBuf>,
}

/// Generate `count` cards and their sheets under `outdir`.
pub fn run(
    settings: &CardSettings,
    count: usize,
    outdir: &Path,
    progress: &ProgressBar,
) -> Result<GenerateStats> {
    let songs = load_songs(&settings.data)?;
    let templates = Templates::load(settings.templates.as_deref())?;
    let style = settings.card_style()?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let cards = deck::deal(&songs, &style, count, &mut rng)
        .with_context(|| "Failed to deal cards")?;
    log::info!("Dealt {} cards with seed {}", cards.len(), settings.seed);

    let cards_dir = outdir.join("cards");
    let sheets_dir = outdir.join("sheets");
    std::fs::create_dir_all(&cards_dir)
        .with_context(|| format!("Failed to create {}", cards_dir.display()))?;
    std::fs::create_dir_all(&sheets_dir)
        .with_context(|| format!("Failed to create {}", sheets_dir.display()))?;

    let mut card_files = Vec::with_capacity(cards.len());
    for card in &cards {
        let html = card::render(card, &templates.card);
        card_files.push(write_document(
            &cards_dir,
            &card_file_name(card.number),
            &html,
        )?);
        progress.inc(1);
    }

    let mut sheet_files = Vec::new();
    for sheet in assemble(&cards, &settings.title, CARDS_PER_SHEET) {
        let html = sheet::render(&sheet, &templates);
        sheet_files.push(write_document(
            &sheets_dir,
            &sheet_file_name(sheet.number),
            &html,
        )?);
    }

    Ok(GenerateStats {
        cards_dir,
        sheets_dir,
        card_files,
        sheet_files,
    })
}

/// Render a single card, numbered 1, to `out`.
pub fn preview(settings: &CardSettings, out: &Path) -> Result<PathBuf> {
    let songs = load_songs(&settings.data)?;
    let templates = Templates::load(settings.templates.as_deref())?;
    let style = settings.card_style()?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let cards = deck::deal(&songs, &style, 1, &mut rng)?;
    let html = cards
        .first()
        .map(|card| card::render(card, &templates.card))
        .unwrap_or_default();

    let dir = out.parent().unwrap_or_else(|| Path::new(""));
    let name = out
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "test_card.html".to_string());
    write_document(dir, &name, &html)
}
