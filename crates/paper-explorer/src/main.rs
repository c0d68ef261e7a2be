//! Paper Explorer - Entry Point
//!
//! Usage: `paper-explorer <DOI>`

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_explorer::{Config, Explorer};

#[derive(Parser, Debug)]
#[command(name = "paper-explorer")]
#[command(about = "Explore a paper's citation network from Semantic Scholar")]
#[command(version)]
struct Cli {
    /// DOI of the paper, or a URL containing one
    #[arg(value_name = "DOI")]
    doi: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Optional; missing .env is fine.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        has_api_key = config.has_api_key(),
        output_dir = %config.output_dir.display(),
        "Starting paper explorer"
    );

    let explorer = Explorer::new(config)?;
    let mut stdout = std::io::stdout().lock();
    explorer.run(&cli.doi, &mut stdout).await?;

    Ok(())
}
