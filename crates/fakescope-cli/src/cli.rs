use clap::{Parser, Subcommand, ValueEnum};
use fakescope_core::DomainSelection;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fakescope")]
#[command(
    author,
    version,
    about = "Estimate fake news risk with pre-trained LIAR and FakeNewsNet models"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Registry configuration file
    #[arg(
        short,
        long,
        global = true,
        default_value = "fakescope.yaml",
        env = "FAKESCOPE_CONFIG"
    )]
    pub config: PathBuf,

    /// Directory holding model artifacts (overrides the config file)
    #[arg(long, global = true, env = "FAKESCOPE_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Stop word list, one word per line (overrides the config file)
    #[arg(long, global = true)]
    pub stopwords: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a news text; reads stdin when TEXT is omitted
    Analyze {
        /// News headline or article text
        text: Option<String>,

        /// Models to run: liar, fakenewsnet or both
        #[arg(short, long, default_value = "liar", value_parser = parse_selection)]
        dataset: DomainSelection,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List configured model artifacts and whether they load
    Models {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the text as the models see it
    Normalize {
        /// Text to normalize; reads stdin when omitted
        text: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_selection(s: &str) -> Result<DomainSelection, String> {
    s.parse()
}
