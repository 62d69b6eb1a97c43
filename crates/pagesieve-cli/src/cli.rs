use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pagesieve::{MatchMode, Orientation, Parity};

/// Select pages from PDF documents by range, parity, orientation, and
/// bookmark-label match.
#[derive(Debug, Parser)]
#[command(name = "pagesieve", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the page numbers matching the configured filters
    Select {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page ranges (e.g. '1-10,30-46,50'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Keep only even or odd page numbers
        #[arg(long, value_enum)]
        parity: Option<ParityArg>,

        /// Keep only portrait or landscape pages
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,

        /// Bookmark-label match mode. Default: no label filtering
        #[arg(long = "match", value_enum)]
        match_mode: Option<MatchArg>,

        /// Search text for the label match modes
        #[arg(long, default_value = "")]
        text: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List bookmark labels per page
    Labels {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show page count and per-page geometry
    Info {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Values for `--parity`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ParityArg {
    Even,
    Odd,
}

impl From<ParityArg> for Parity {
    fn from(arg: ParityArg) -> Self {
        match arg {
            ParityArg::Even => Parity::Even,
            ParityArg::Odd => Parity::Odd,
        }
    }
}

/// Values for `--orientation`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Orientation::Portrait,
            OrientationArg::Landscape => Orientation::Landscape,
        }
    }
}

/// Values for `--match`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MatchArg {
    /// Pages with at least one label
    Any,
    /// Pages with a label equal to the search text
    Equals,
    /// Pages with a label containing the search text
    Contains,
    /// Pages with a label not exactly the search text
    NotEqual,
    /// Pages with a label the search text does not occur in
    DoesNotContain,
}

impl From<MatchArg> for MatchMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Any => MatchMode::MatchAny,
            MatchArg::Equals => MatchMode::Equals,
            MatchArg::Contains => MatchMode::Contains,
            MatchArg::NotEqual => MatchMode::NotEqual,
            MatchArg::DoesNotContain => MatchMode::DoesNotContain,
        }
    }
}
