//! CLI entry point for the whitebox contributor indexer.

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use whitebox_indexer::{commands, Dependencies, IndexingError};
use whitebox_indexer_pipeline::catalog;

#[derive(Parser)]
#[command(name = "whitebox-indexer")]
#[command(about = "Publishes contributor projects and aliases into the search index", long_about = None)]
struct Cli {
    /// What to do with the derived documents.
    #[arg(value_enum)]
    mode: Mode,

    /// The public URL of the search cluster.
    #[arg(long)]
    host: Option<String>,

    /// The user name of the search cluster.
    #[arg(long)]
    user: Option<String>,

    /// The user token of the search cluster.
    #[arg(long)]
    passwd: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Print every derived document to stdout, no cluster contact.
    Check,
    /// Delete and reload both target indices.
    Import,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "Indexer run failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), IndexingError> {
    let catalog = catalog::load(catalog::CATALOG_PATH)?;

    match cli.mode {
        Mode::Check => commands::check(&catalog),
        Mode::Import => {
            let host = require(cli.host, "--host")?;
            let user = require(cli.user, "--user")?;
            let passwd = require(cli.passwd, "--passwd")?;

            let deps = Dependencies::new(&host, &user, &passwd)?;
            commands::import(&catalog, &deps.loader).await?;

            info!("Import finished");
            Ok(())
        }
    }
}

fn require(value: Option<String>, flag: &str) -> Result<String, IndexingError> {
    value.ok_or_else(|| IndexingError::config(format!("{flag} is required for import")))
}
