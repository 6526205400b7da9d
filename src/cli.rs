use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Styling and data options shared by `generate` and `preview`.
///
/// Anything left unset falls back to `bingo.toml`, then to the built-in defaults.
#[derive(Args, Debug, Default)]
pub struct CardArgs {
    /// Title printed on every card [default: "BINGO MUSICAL"]
    #[arg(long)]
    pub title: Option<String>,
    /// Card background colour [default: "#FFEAB3"]
    #[arg(long = "bg")]
    pub background_color: Option<String>,
    /// Random seed, for reproducible decks [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,
    /// Images to decorate the title with, alternating left and right
    #[arg(long, num_args = 0..)]
    pub images: Option<Vec<PathBuf>>,
    /// Song data file [default: data/songs.yaml]
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// Directory with card.html, sheet.html or sheet_card.html overrides
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub card: CardArgs,
    /// How many cards to create [default: 30]
    #[arg(long)]
    pub count: Option<usize>,
    /// Output root; cards go to <OUTDIR>/cards and sheets to <OUTDIR>/sheets [default: output]
    #[arg(long)]
    pub outdir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub card: CardArgs,
    /// Where to write the preview card
    #[arg(long, default_value = "test_card.html")]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct PdfArgs {
    /// HTML file or directory
    pub input: PathBuf,
    /// Output PDF (single file mode)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// File name pattern when input is a directory [default: "*.html"]
    #[arg(long)]
    pub glob: Option<String>,
    /// Output directory when input is a directory [default: <INPUT>/pdf]
    #[arg(long)]
    pub outdir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates bingo cards and assembles them into printable sheets
    Generate(GenerateArgs),
    /// Renders a single card, for iterating on the design
    Preview(PreviewArgs),
    /// Converts rendered HTML cards or sheets to PDF
    Pdf(PdfArgs),
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file [default: bingo.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}
