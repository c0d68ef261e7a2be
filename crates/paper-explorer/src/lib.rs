//! Paper Explorer
//!
//! Looks up a paper on the Semantic Scholar Graph API by DOI, prints it with
//! its citing and cited papers, draws the citation neighborhood as a PNG, and
//! saves the result as JSON.
//!
//! # Pipeline
//!
//! - **Fetcher**: DOI resolution and one API lookup, capped at 10 neighbors each way
//! - **Presenter**: console tables
//! - **Graph**: typed `petgraph` graph of main, cited and referencing papers
//! - **Renderer**: spring layout rasterized to PNG
//! - **Persister**: pretty JSON dump of the record
//!
//! # Example
//!
//! ```no_run
//! use paper_explorer::{Config, Explorer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let explorer = Explorer::new(Config::from_env()?)?;
//!     let report = explorer.run("10.1145/3341301.3359651", &mut std::io::stdout()).await?;
//!     println!("{} nodes", report.nodes);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod explorer;
pub mod fetcher;
pub mod formatters;
pub mod graph;
pub mod models;
pub mod persist;
pub mod render;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, FetchError, PersistError, RenderError};
pub use explorer::{Explorer, RunReport};
pub use fetcher::{FetchOutcome, Fetcher};
pub use graph::CitationGraph;
pub use models::{Doi, PaperRecord, PaperRef};
