mod output;
mod render;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Reckon live calculator notepad.
#[derive(Parser)]
#[command(name = "reckon", version, about = "Reckon live calculator notepad")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a notepad file and print one display row per line
    Render {
        /// Path to the notepad text file
        file: PathBuf,
        /// Path to a rate-table JSON file ({"home_currency", "rates"})
        #[arg(long)]
        rates: Option<PathBuf>,
        /// Override the home currency code
        #[arg(long)]
        home: Option<String>,
        /// Fetch home currency and rates over HTTP at startup
        #[arg(long)]
        fetch_rates: bool,
    },

    /// Save a notepad file into a document store
    Save {
        /// Path to the notepad text file
        file: PathBuf,
        /// Document store directory
        #[arg(long)]
        store: PathBuf,
        /// Document id (a fresh one is generated when omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Print a stored document's text
    Load {
        /// Document id
        id: String,
        /// Document store directory
        #[arg(long)]
        store: PathBuf,
    },

    /// List stored document ids
    List {
        /// Document store directory
        #[arg(long)]
        store: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let outcome = match &cli.command {
        Commands::Render {
            file,
            rates,
            home,
            fetch_rates,
        } => render::run(
            file,
            rates.as_deref(),
            home.as_deref(),
            *fetch_rates,
            cli.output,
        ),
        Commands::Save { file, store, id } => store::save(file, store, id.as_deref()),
        Commands::Load { id, store } => store::load(id, store),
        Commands::List { store } => store::list(store),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
