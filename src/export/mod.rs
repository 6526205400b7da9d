//! HTML to PDF export.
//!
//! Conversion is delegated to external tools tried in order of preference.
//! An attempt only counts if it leaves a non-empty PDF behind; otherwise the
//! next converter gets a go. Running out of converters is reported, never
//! raised.

mod converter;
#[cfg(test)]
pub mod testing;

pub use converter::*;

use anyhow::{Context, Result};
use globset::GlobMatcher;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// Result of converting one file in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub converted: bool,
}

pub struct Exporter {
    converters: Vec<Box<dyn Converter>>,
}

impl Default for Exporter {
    /// Chrome first, then WeasyPrint, then wkhtmltopdf.
    fn default() -> Self {
        Exporter::new(vec![
            Box::new(CommandConverter::chrome()),
            Box::new(CommandConverter::weasyprint()),
            Box::new(CommandConverter::wkhtmltopdf()),
        ])
    }
}

impl Exporter {
    pub fn new(converters: Vec<Box<dyn Converter>>) -> Exporter {
        Exporter { converters }
    }

    /// Convert one document, returning whether any converter succeeded.
    pub fn export(&self, input: &Path, output: &Path) -> bool {
        self.export_reporting(input, output, &ProgressBar::hidden())
    }

    /// Like [`Exporter::export`], printing the result around a live progress bar.
    fn export_reporting(&self, input: &Path, output: &Path, progress: &ProgressBar) -> bool {
        for converter in &self.converters {
            if !converter.is_available() {
                log::debug!("{} is not available", converter.name());
                continue;
            }

            match attempt(converter.as_ref(), input, output) {
                Ok(()) => {
                    progress.suspend(|| {
                        println!("{} OK -> {}", converter.name(), output.display())
                    });
                    return true;
                }
                Err(e) => {
                    log::warn!(
                        "{} failed to convert {}: {e}",
                        converter.name(),
                        input.display()
                    );
                    discard(output);
                }
            }
        }

        progress.suspend(|| println!("FAILED to convert {}", input.display()));
        false
    }

    /// Convert every file in `dir` whose name matches `pattern`, in sorted order.
    ///
    /// Each file is converted to `outdir/<stem>.pdf`. A failed file doesn't
    /// stop the batch.
    pub fn export_dir(
        &self,
        dir: &Path,
        pattern: &GlobMatcher,
        outdir: &Path,
        progress: &ProgressBar,
    ) -> Result<Vec<ExportOutcome>> {
        std::fs::create_dir_all(outdir)
            .with_context(|| format!("Failed to create output directory {}", outdir.display()))?;

        let inputs = matching_files(dir, pattern)?;
        progress.set_length(inputs.len() as u64);

        let mut outcomes = Vec::with_capacity(inputs.len());
        for input in inputs {
            let mut name = input.file_stem().unwrap_or_default().to_os_string();
            name.push(".pdf");
            let output = outdir.join(name);
            progress.set_message(input.display().to_string());

            let converted = self.export_reporting(&input, &output, progress);
            outcomes.push(ExportOutcome {
                input,
                output,
                converted,
            });
            progress.inc(1);
        }

        Ok(outcomes)
    }
}

fn attempt(
    converter: &dyn Converter,
    input: &Path,
    output: &Path,
) -> Result<(), ConversionFailure> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // a PDF from an earlier run must not pass for this attempt's output
    if output.exists() {
        std::fs::remove_file(output)?;
    }

    converter.convert(input, output)?;

    match std::fs::metadata(output) {
        Ok(meta) if meta.len() > 0 => Ok(()),
        Ok(_) => Err(ConversionFailure::EmptyOutput),
        Err(_) => Err(ConversionFailure::MissingOutput),
    }
}

/// Remove whatever a failed attempt left behind.
fn discard(output: &Path) {
    if output.exists() {
        if let Err(e) = std::fs::remove_file(output) {
            log::warn!("Failed to remove {}: {e}", output.display());
        }
    }
}

/// Files directly inside `dir` whose names match `pattern`, sorted.
fn matching_files(dir: &Path, pattern: &GlobMatcher) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && pattern.is_match(entry.file_name()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
