use std::path::PathBuf;

use alexandria::{ExtractOptions, LineBreak, UnicodeNorm};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Extract titles, sections, references, citations and figures from a
/// rendered paper's page dump (JSON).
#[derive(Debug, Parser)]
#[command(name = "alexandria", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log extraction steps to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub extract: ExtractArgs,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Apply Unicode normalization to fragment text
    #[arg(long, value_enum, global = true)]
    pub unicode_norm: Option<UnicodeNormArg>,

    /// Separator used where a text line ends
    #[arg(long, value_enum, global = true, default_value_t = LineBreakArg::Space)]
    pub line_break: LineBreakArg,

    /// Number of leading pages searched for the title
    #[arg(long, global = true, default_value_t = 2)]
    pub title_pages: usize,
}

impl ExtractArgs {
    pub fn to_options(&self) -> ExtractOptions {
        ExtractOptions {
            unicode_norm: self.unicode_norm.map_or(UnicodeNorm::None, UnicodeNorm::from),
            line_break: self.line_break.into(),
            title_pages: self.title_pages,
            ..ExtractOptions::default()
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the paper title
    Title {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the text of a named section
    Section {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Heading to look for (case-insensitive, e.g. 'introduction')
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the parsed reference entries
    References {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also list URLs found in each entry
        #[arg(long)]
        urls: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List inline citations that resolve to a reference entry
    Citations {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Find occurrences of a text across fragment boundaries
    Search {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Text to search for
        #[arg(value_name = "TEXT")]
        text: String,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List figure bounding boxes
    Figures {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Display page dimensions and fonts
    Info {
        /// Path to the page dump
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, tab-separated where tabular
    Text,
    /// JSON
    Json,
}

/// Unicode normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnicodeNormArg {
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl From<UnicodeNormArg> for UnicodeNorm {
    fn from(arg: UnicodeNormArg) -> Self {
        match arg {
            UnicodeNormArg::Nfc => UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => UnicodeNorm::Nfkd,
        }
    }
}

/// Line-end separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LineBreakArg {
    Space,
    Newline,
}

impl From<LineBreakArg> for LineBreak {
    fn from(arg: LineBreakArg) -> Self {
        match arg {
            LineBreakArg::Space => LineBreak::Space,
            LineBreakArg::Newline => LineBreak::Newline,
        }
    }
}
