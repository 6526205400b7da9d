//! The `pdf` command: one file, or every matching file in a directory.

use crate::cli::PdfArgs;
use crate::error::BingoError;
use crate::export::{ExportOutcome, Exporter};
use anyhow::{anyhow, Context, Result};
use globset::Glob;
use indicatif::ProgressBar;

/// Convert the input named by `args`.
///
/// A file input needs `--out`; a directory input converts every file matching
/// `--glob` (or `default_glob`) into `--outdir`, which defaults to `<input>/pdf`.
/// A single file that no converter can handle is an error, while failures
/// inside a batch are only reported in the returned outcomes.
pub fn run(
    args: PdfArgs,
    default_glob: &str,
    exporter: &Exporter,
    progress: &ProgressBar,
) -> Result<Vec<ExportOutcome>> {
    let input = args.input;

    if input.is_file() {
        let output = args.out.ok_or(BingoError::MissingOutput)?;
        if !exporter.export(&input, &output) {
            return Err(anyhow!("No converter could produce {}", output.display()));
        }
        return Ok(vec![ExportOutcome {
            input,
            output,
            converted: true,
        }]);
    }

    if !input.is_dir() {
        return Err(anyhow!("Input {} doesn't exist", input.display()));
    }

    let pattern = args.glob.unwrap_or_else(|| default_glob.to_string());
    let matcher = Glob::new(&pattern)
        .with_context(|| format!("Invalid glob pattern: {pattern}"))?
        .compile_matcher();
    let outdir = args.outdir.unwrap_or_else(|| input.join("pdf"));

    exporter
        .export_dir(&input, &matcher, &outdir, progress)
        .with_context(|| format!("Failed to convert files in {}", input.display()))
}
