use anyhow::{Context, Result};
use cli::{Cli, Commands, PdfArgs};
use config::Configuration;
use export::Exporter;
use indicatif::{ProgressBar, ProgressStyle};
use settings::CardSettings;
use std::process::ExitCode;

mod cli;
mod config;
mod deck;
mod error;
mod export;
mod generate;
mod logging;
mod output;
mod pdf;
mod render;
mod settings;
mod sheets;
mod songs;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose)?;
    let config = Configuration::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => {
            let count = args.count.unwrap_or(config.cards.count);
            let outdir = args.outdir.unwrap_or_else(|| config.paths.output.clone());
            let settings = CardSettings::resolve(args.card, &config);

            let progress = progress_bar(count as u64);
            progress.set_message("Rendering cards...");
            let stats = generate::run(&settings, count, &outdir, &progress)
                .with_context(|| "Failed to generate cards")?;
            progress.finish_and_clear();

            println!(
                "Done. {} cards -> {}, {} sheets -> {}",
                stats.card_files.len(),
                stats.cards_dir.display(),
                stats.sheet_files.len(),
                stats.sheets_dir.display()
            );
            Ok(())
        }
        Commands::Preview(args) => {
            let settings = CardSettings::resolve(args.card, &config);
            let path = generate::preview(&settings, &args.out)
                .with_context(|| "Failed to render preview card")?;
            println!("Done. Test card created at {}", path.display());
            Ok(())
        }
        Commands::Pdf(args) => convert(args, &config),
    }
}

fn convert(args: PdfArgs, config: &Configuration) -> Result<()> {
    let progress = progress_bar(0);
    let outcomes = pdf::run(args, &config.pdf.glob, &Exporter::default(), &progress)?;
    progress.finish_and_clear();

    for outcome in &outcomes {
        log::debug!(
            "{} -> {} ({})",
            outcome.input.display(),
            outcome.output.display(),
            if outcome.converted { "ok" } else { "failed" }
        );
    }

    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress
}
