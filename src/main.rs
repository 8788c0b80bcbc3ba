mod index;
mod output;
mod query;
mod suggest;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::index::LexiconReader;
use crate::suggest::{collect_suggestions, MeaningSuggestions};

#[derive(Parser)]
#[command(name = "scry")]
#[command(about = "Scripture search query interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query string and show the resulting search intent
    Parse {
        /// The query, e.g. "t=love of God in (KJV, ESV)"
        query: String,

        /// Emit the intent as JSON
        #[arg(long)]
        json: bool,
    },
    /// Collect meaning suggestions for a partial form from a lexicon file
    Suggest {
        /// The partial input form
        form: String,

        /// Path to a JSON lexicon ({"gloss": [...], "translations": [...]})
        #[arg(short, long)]
        lexicon: PathBuf,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = 10)]
        max: usize,

        /// Emit the suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Parse { query, json } => {
            let intent = query::parse(&query)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                output::print_intent(&intent, color)?;
            }
        }
        Commands::Suggest {
            form,
            lexicon,
            max,
            json,
        } => {
            let reader = LexiconReader::load(&lexicon)?;
            let service = MeaningSuggestions::new(&reader);
            let suggestions = collect_suggestions(&service, &form, max)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                output::print_suggestions(&suggestions, color)?;
            }
        }
    }

    Ok(())
}
