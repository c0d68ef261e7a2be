//! Property-based tests for the paper record and its graph.

use std::collections::HashSet;

use proptest::prelude::*;
use paper_explorer::graph::{CitationGraph, NodeKey};
use paper_explorer::models::{LinkedPaper, Paper, PaperRecord, PaperRef};
use paper_explorer::persist::{load_record, save_record};

fn arb_linked() -> impl Strategy<Value = LinkedPaper> {
    (
        proptest::option::of("[A-Za-z0-9 ]{1,60}"),   // title
        proptest::option::of(1900i32..2030),         // year
        proptest::option::of("10\\.[0-9]{4}/[a-z0-9.]{1,12}"), // doi
    )
        .prop_map(|(title, year, doi)| LinkedPaper { title, year, doi, ..Default::default() })
}

fn arb_paper_ref() -> impl Strategy<Value = PaperRef> {
    (
        "[A-Za-z0-9 ]{1,40}",
        proptest::option::of("10\\.[0-9]{4}/[a-z0-9.]{1,12}"),
        proptest::option::of(1900i32..2030),
    )
        .prop_map(|(title, doi, year)| PaperRef { title, doi, year })
}

fn arb_record() -> impl Strategy<Value = PaperRecord> {
    (
        "[A-Za-z0-9 ]{1,80}",
        proptest::collection::vec("[A-Za-z .'-]{1,30}", 0..6),
        proptest::option::of(1900i32..2030),
        proptest::option::of("10\\.[0-9]{4}/main[0-9]{1,4}"),
        proptest::collection::vec(arb_paper_ref(), 0..=10),
        proptest::collection::vec(arb_paper_ref(), 0..=10),
    )
        .prop_map(|(title, authors, year, doi, related_papers, cited_papers)| PaperRecord {
            title,
            authors,
            year,
            doi,
            related_papers,
            cited_papers,
        })
}

proptest! {
    /// Lists keep the first ten entries in API order.
    #[test]
    fn record_truncation_preserves_order(
        citations in proptest::collection::vec(arb_linked(), 0..25),
        references in proptest::collection::vec(arb_linked(), 0..25),
    ) {
        let paper = Paper {
            citations: Some(citations.clone()),
            references: Some(references.clone()),
            ..Default::default()
        };
        let record = PaperRecord::from_api(&paper, None, 10);

        prop_assert_eq!(record.related_papers.len(), citations.len().min(10));
        prop_assert_eq!(record.cited_papers.len(), references.len().min(10));

        for (got, want) in record.related_papers.iter().zip(&citations) {
            prop_assert_eq!(got, &PaperRef::from(want));
        }
        for (got, want) in record.cited_papers.iter().zip(&references) {
            prop_assert_eq!(got, &PaperRef::from(want));
        }
    }

    /// Saving and reloading gives back the same record.
    #[test]
    fn record_json_roundtrip(record in arb_record()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper_data.json");

        save_record(&record, &path).unwrap();
        let reloaded = load_record(&path).unwrap();

        prop_assert_eq!(reloaded, record);
    }

    /// One node per distinct key, main included; self-references dropped.
    #[test]
    fn graph_node_count_matches_distinct_keys(record in arb_record()) {
        let graph = CitationGraph::build(&record);

        let main_key = NodeKey::new(&record.title, record.doi.as_deref(), record.year);
        let neighbor_keys: HashSet<NodeKey> = record
            .cited_papers
            .iter()
            .chain(&record.related_papers)
            .map(NodeKey::from)
            .filter(|k| *k != main_key)
            .collect();

        prop_assert_eq!(graph.node_count(), 1 + neighbor_keys.len());
        prop_assert!(graph.edge_count() <= record.cited_papers.len() + record.related_papers.len());
    }
}

#[test]
fn distinct_neighbors_give_one_plus_c_plus_r_nodes() {
    let paper = |t: &str, y: i32| PaperRef { title: t.to_string(), doi: None, year: Some(y) };
    let mut record = PaperRecord::empty();
    record.cited_papers = (0..4).map(|i| paper("cited", 2000 + i)).collect();
    record.related_papers = (0..7).map(|i| paper("citing", 2000 + i)).collect();

    let graph = CitationGraph::build(&record);
    assert_eq!(graph.node_count(), 1 + 4 + 7);
    assert_eq!(graph.edge_count(), 4 + 7);
}
