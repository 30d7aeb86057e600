use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trendpulse", about = "Search-grounded trend reports on research topics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a trend report
    Report {
        /// Research topics (duplicates and blanks are ignored)
        topics: Vec<String>,
        /// Time frame (any, week, month, year, 3years)
        #[arg(long, short = 't', default_value = "any")]
        time_frame: String,
        /// Add the preset topic of a trend tab (CMF, ID, TOOLING, UX, UI, PACKAGE, VISUAL_COMM)
        #[arg(long)]
        tab: Option<String>,
        /// Output format (json, markdown)
        #[arg(long, short = 'f', default_value = "json")]
        format: String,
        /// Drop items whose link answers 404
        #[arg(long)]
        verify_links: bool,
        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Print the prompt a report would send, without calling the provider
    Prompt {
        topics: Vec<String>,
        #[arg(long, short = 't', default_value = "any")]
        time_frame: String,
        #[arg(long)]
        tab: Option<String>,
    },
    /// Parse raw model output (file or stdin) into report items
    Normalize {
        /// File with the raw text; reads stdin when omitted
        path: Option<PathBuf>,
    },
    /// List the preset trend tabs
    Strategies,
}
