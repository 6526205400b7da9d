use crate::cli::CardArgs;
use crate::config::Configuration;
use crate::deck::{AssetMode, CardStyle, CardStyleBuilder, TitleImage};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Card options after merging command line flags over the configuration.
#[derive(Debug, Clone)]
pub struct CardSettings {
    pub data: PathBuf,
    pub templates: Option<PathBuf>,
    pub title: String,
    pub background_color: String,
    pub seed: u64,
    pub images: Vec<PathBuf>,
    pub asset_mode: AssetMode,
}

impl CardSettings {
    pub fn resolve(args: CardArgs, config: &Configuration) -> CardSettings {
        let CardArgs {
            title,
            background_color,
            seed,
            images,
            data,
            templates,
        } = args;

        CardSettings {
            data: data.unwrap_or_else(|| config.paths.data.clone()),
            templates: templates.or_else(|| config.paths.templates.clone()),
            title: title.unwrap_or_else(|| config.cards.title.clone()),
            background_color: background_color
                .unwrap_or_else(|| config.cards.background_color.clone()),
            seed: seed.unwrap_or(config.cards.seed),
            images: images.unwrap_or_else(|| config.cards.images.clone()),
            asset_mode: config.cards.asset_mode,
        }
    }

    /// Resolve the title images and build the styling shared by every card.
    pub fn card_style(&self) -> Result<CardStyle> {
        let title_images = TitleImage::from_paths(&self.images, self.asset_mode)?;
        CardStyleBuilder::default()
            .title(self.title.clone())
            .background_color(self.background_color.clone())
            .title_images(title_images)
            .build()
            .with_context(|| "Failed to build card style")
    }
}
