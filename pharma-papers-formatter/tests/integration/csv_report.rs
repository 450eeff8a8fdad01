//! CSV report tests reading the written file back with the csv reader

use pharma_papers_formatter::{CSV_HEADERS, write_csv, write_csv_file};
use pharma_papers_parser::{Author, Paper};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn papers() -> Vec<Paper> {
    let mut industry = Paper::new("11111111", "Kinase profiling, at scale", "2022");
    industry.push_author(Author {
        name: "Jane Doe".to_string(),
        affiliation: Some(
            "Research Division, Acme Pharma Inc., contact: j.doe@acmepharma.com".to_string(),
        ),
        email: Some("j.doe@acmepharma.com".to_string()),
    });
    industry.push_author(Author {
        name: "John Smith".to_string(),
        affiliation: Some("Dept. of Oncology, Harvard University".to_string()),
        email: None,
    });

    let mut academic = Paper::new("22222222", "A \"quoted\" title", "2020 Jan-Feb");
    academic.push_author(Author {
        name: "Ada Lovelace".to_string(),
        affiliation: Some("Imperial College London".to_string()),
        email: None,
    });

    vec![industry.into_filtered(), academic.into_filtered()]
}

fn read_rows(data: &[u8]) -> Vec<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data);
    reader.records().map(|r| r.unwrap()).collect()
}

#[rstest]
fn test_csv_round_trips_through_reader(papers: Vec<Paper>) {
    let mut buffer = Vec::new();
    write_csv(&papers, &mut buffer).unwrap();

    let rows = read_rows(&buffer);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

    assert_eq!(&rows[1][0], "11111111");
    assert_eq!(&rows[1][1], "Kinase profiling, at scale");
    assert_eq!(&rows[1][2], "2022");
    assert_eq!(&rows[1][3], "Jane Doe");
    assert_eq!(
        &rows[1][4],
        "Research Division, Acme Pharma Inc., contact: j.doe@acmepharma.com"
    );
    assert_eq!(&rows[1][5], "j.doe@acmepharma.com");

    // Papers with no company authors still get a row
    assert_eq!(&rows[2][1], "A \"quoted\" title");
    assert_eq!(&rows[2][3], "");
    assert_eq!(&rows[2][4], "");
    assert_eq!(&rows[2][5], "");
}

#[rstest]
fn test_csv_file_is_written(papers: Vec<Paper>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    write_csv_file(&papers, &path).unwrap();

    let content = std::fs::read(&path).unwrap();
    let rows = read_rows(&content);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][0], "22222222");
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("results.csv");

    assert!(write_csv_file(&[], &path).is_err());
}
