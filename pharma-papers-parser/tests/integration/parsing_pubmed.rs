//! Fixture-based extraction and filtering tests for PubMed EFetch records

use std::fs;
use std::path::Path;

use pharma_papers_parser::{
    ParseError, filter_non_academic_authors, parse_paper_from_xml, parse_papers_from_xml,
};

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/test_data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

#[test]
fn test_fixture_extraction() {
    let xml = load_fixture("efetch_mixed_affiliations.xml");
    let paper = parse_paper_from_xml(&xml, "38012345").unwrap();

    assert_eq!(paper.pubmed_id, "38012345");
    assert_eq!(
        paper.title,
        "Discovery of a selective KRASG12C inhibitor with oral bioavailability."
    );
    assert_eq!(paper.publication_date, "2024");

    // The collective-name entry has neither a name nor an affiliation
    let names: Vec<&str> = paper.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Chidi Okafor",
            "Maja Lindqvist",
            "Hiro Tanaka",
            "Eszter Varga",
            "Jonas Müller"
        ]
    );
    assert_eq!(paper.company_affiliations.len(), paper.authors.len());
    assert_eq!(paper.company_affiliations[3], "");

    // Email token keeps its trailing period
    assert_eq!(
        paper.corresponding_author_email.as_deref(),
        Some("chidi.okafor@helixtx.com.")
    );
    assert_eq!(paper.authors[1].email.as_deref(), Some("maja.lindqvist@ki.se"));

    // Only the first affiliation of each author is used
    assert_eq!(
        paper.authors[2].affiliation.as_deref(),
        Some("Kyoto Biotech Co., Ltd., Kyoto, Japan.")
    );
}

#[test]
fn test_fixture_filtering() {
    let xml = load_fixture("efetch_mixed_affiliations.xml");
    let mut paper = parse_paper_from_xml(&xml, "38012345").unwrap();
    let before = paper.authors.clone();

    filter_non_academic_authors(&mut paper);

    assert_eq!(paper.authors, before);
    assert_eq!(
        paper.non_academic_author_names(),
        vec!["Chidi Okafor", "Hiro Tanaka"]
    );
    assert_eq!(
        paper.company_affiliations,
        vec![
            "Discovery Chemistry, Helix Therapeutics Inc., Cambridge, MA 02139, USA. chidi.okafor@helixtx.com.",
            "Kyoto Biotech Co., Ltd., Kyoto, Japan.",
        ]
    );
    // The corresponding email is not touched by filtering
    assert_eq!(
        paper.corresponding_author_email.as_deref(),
        Some("chidi.okafor@helixtx.com.")
    );
}

#[test]
fn test_batch_matches_single_parse() {
    let xml = load_fixture("efetch_mixed_affiliations.xml");
    let single = parse_paper_from_xml(&xml, "38012345").unwrap();
    let batch = parse_papers_from_xml(&xml).unwrap();

    assert_eq!(batch, vec![single]);
}

#[test]
fn test_malformed_record_does_not_affect_other_identifiers() {
    let good = load_fixture("efetch_mixed_affiliations.xml");
    let empty = "<PubmedArticleSet></PubmedArticleSet>";

    let responses = [("38012345", good.as_str()), ("1", empty)];
    let results: Vec<_> = responses
        .iter()
        .map(|(pmid, xml)| parse_paper_from_xml(xml, pmid))
        .collect();

    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(ParseError::MalformedRecord { ref pmid }) if pmid == "1"
    ));
}

#[test]
fn test_invalid_xml_is_an_xml_error() {
    let result = parse_paper_from_xml("<PubmedArticleSet><PubmedArticle>", "1");
    assert!(matches!(result, Err(ParseError::XmlError(_))));
}

#[test]
fn test_paper_serializes_to_json() {
    let xml = load_fixture("efetch_mixed_affiliations.xml");
    let paper = parse_paper_from_xml(&xml, "38012345").unwrap();

    let value = serde_json::to_value(&paper).unwrap();
    assert_eq!(value["pubmed_id"], "38012345");
    assert_eq!(value["authors"][3]["affiliation"], serde_json::Value::Null);
}
