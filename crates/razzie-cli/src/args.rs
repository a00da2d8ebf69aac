use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "razzie")]
#[command(about = "Browse Golden Raspberry award statistics from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the awards API (overrides RAZZIE_API_URL and config.toml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the dashboard statistics as tables")]
    Dashboard,

    #[command(about = "Show the single aggregated dashboard-summary payload")]
    Summary,

    #[command(about = "List movies, one page at a time")]
    Movies {
        /// Zero-based page index
        #[arg(long, default_value = "0")]
        page: u32,

        #[arg(long, default_value = "10")]
        size: u32,

        /// Only movies of this award year
        #[arg(long)]
        year: Option<i32>,

        /// Only winners (true) or only nominees (false)
        #[arg(long)]
        winner: Option<bool>,
    },

    #[command(about = "List the winning movies of one year")]
    Winners {
        #[arg(long)]
        year: i32,
    },

    #[command(about = "Interactive dashboard and movie list (TUI)")]
    Tui,
}
