//! The fetch → print → draw → save pipeline behind the binary.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::fetcher::{FetchOutcome, Fetcher};
use crate::formatters::Presenter;
use crate::graph::CitationGraph;
use crate::models::PaperRecord;
use crate::persist::save_record;
use crate::render::Renderer;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The fetched record (empty when the lookup failed).
    pub record: PaperRecord,
    /// Whether the lookup succeeded.
    pub fetched: bool,
    /// Nodes in the rendered graph.
    pub nodes: usize,
    /// Edges in the rendered graph.
    pub edges: usize,
    /// Written image, if any.
    pub graph_path: Option<PathBuf>,
    /// Written JSON, if any.
    pub data_path: Option<PathBuf>,
}

/// Runs one exploration.
#[derive(Debug, Clone)]
pub struct Explorer {
    config: Config,
    fetcher: Fetcher,
    presenter: Presenter,
    renderer: Renderer,
}

impl Explorer {
    /// Create an explorer from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fetcher = Fetcher::from_config(&config)?;
        Ok(Self { config, fetcher, presenter: Presenter::new(), renderer: Renderer::default() })
    }

    /// Replace the table presenter.
    #[must_use]
    pub fn with_presenter(mut self, presenter: Presenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// Replace the graph renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Explore `identifier`, writing tables and messages to `out`.
    ///
    /// A failed lookup is reported to `out` and ends the run early without
    /// touching the output directory.
    ///
    /// # Errors
    ///
    /// Returns error if console output, rendering or saving fails.
    pub async fn run<W: Write>(&self, identifier: &str, out: &mut W) -> anyhow::Result<RunReport> {
        let record = match self.fetcher.fetch(identifier).await {
            FetchOutcome::Found(record) => record,
            FetchOutcome::Failed(err) => {
                writeln!(out, "Error fetching paper: {}", err.to_user_message())?;
                writeln!(out, "No paper data found!")?;
                return Ok(RunReport {
                    record: PaperRecord::empty(),
                    fetched: false,
                    nodes: 0,
                    edges: 0,
                    graph_path: None,
                    data_path: None,
                });
            }
        };

        write!(out, "{}", self.presenter.format(&record))?;

        let graph = CitationGraph::build(&record);
        let summary = self.renderer.render(&graph, &self.config.graph_path())?;

        let data_path = self.config.data_path();
        save_record(&record, &data_path)?;

        writeln!(out, "\nGraph saved to {}", summary.path.display())?;
        writeln!(out, "Data saved to {}", data_path.display())?;

        Ok(RunReport {
            record,
            fetched: true,
            nodes: summary.nodes_drawn,
            edges: summary.edges_drawn,
            graph_path: Some(summary.path),
            data_path: Some(data_path),
        })
    }
}
