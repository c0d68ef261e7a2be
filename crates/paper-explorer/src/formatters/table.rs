//! Console table output.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::models::{PaperRecord, PaperRef};

/// Shown for absent values.
pub const MISSING: &str = "N/A";

/// Renders a [`PaperRecord`] as titled console tables.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    color: bool,
}

impl Presenter {
    /// Presenter that colors columns when writing to a terminal.
    #[must_use]
    pub const fn new() -> Self {
        Self { color: true }
    }

    /// Presenter that never emits ANSI escapes.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// "Paper Details", "Related Papers" and "Cited Papers" tables.
    #[must_use]
    pub fn format(&self, record: &PaperRecord) -> String {
        let mut output = String::new();

        output.push_str("Paper Details\n");
        output.push_str(&self.details_table(record).to_string());
        output.push_str("\n\nRelated Papers\n");
        output.push_str(&self.papers_table(&record.related_papers, Color::Green).to_string());
        output.push_str("\n\nCited Papers\n");
        output.push_str(&self.papers_table(&record.cited_papers, Color::Blue).to_string());
        output.push('\n');

        output
    }

    fn details_table(&self, record: &PaperRecord) -> Table {
        let mut table = self.table();
        table.set_header(vec![
            Cell::new("Attribute").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Magenta),
        ]);

        let authors = if record.authors.is_empty() {
            MISSING.to_string()
        } else {
            record.author_list()
        };

        let rows = [
            ("Title", record.title.clone()),
            ("Authors", authors),
            ("Year", year_text(record.year)),
            ("Related Papers", record.related_papers.len().to_string()),
            ("Cited Papers", record.cited_papers.len().to_string()),
        ];

        for (attribute, value) in rows {
            table.add_row(vec![
                Cell::new(attribute).fg(Color::Cyan),
                Cell::new(value).fg(Color::Magenta),
            ]);
        }

        table
    }

    fn papers_table(&self, papers: &[PaperRef], title_color: Color) -> Table {
        let mut table = self.table();
        table.set_header(vec![
            Cell::new("Title").fg(title_color),
            Cell::new("Year").fg(Color::Yellow),
            Cell::new("DOI").fg(Color::Red),
        ]);

        for paper in papers {
            table.add_row(vec![
                Cell::new(&paper.title).fg(title_color),
                Cell::new(year_text(paper.year)).fg(Color::Yellow),
                Cell::new(paper.doi.as_deref().unwrap_or(MISSING)).fg(Color::Red),
            ]);
        }

        table
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
        if !self.color {
            table.force_no_tty();
        }
        table
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

fn year_text(year: Option<i32>) -> String {
    year.map_or_else(|| MISSING.to_string(), |y| y.to_string())
}
