use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tubeprobe",
    version,
    about = "Check a video-platform API key and resolve a channel reference"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Platform API base url (overrides YT_API_BASE)"
    )]
    pub api_base: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the API and resolve a channel; always prints a report.
    Diagnose {
        #[arg(long, help = "Channel id, url, @handle or free text")]
        channel: Option<String>,
        #[arg(long, help = "Temporary API key used instead of YT_API_KEY")]
        key: Option<String>,
    },
    /// Resolve a channel reference to id, title and url.
    Resolve {
        reference: String,
        #[arg(long, help = "Temporary API key used instead of YT_API_KEY")]
        key: Option<String>,
    },
    /// Show how a channel reference is classified, without network access.
    Classify { reference: String },
}
