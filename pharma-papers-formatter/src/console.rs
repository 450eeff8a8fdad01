//! Plain-text console output

use pharma_papers_parser::Paper;

/// One summary line: `"{title} ({publication_date}) - ID: {pubmed_id}"`
pub fn console_line(paper: &Paper) -> String {
    format!(
        "{} ({}) - ID: {}",
        paper.title, paper.publication_date, paper.pubmed_id
    )
}

/// Summary lines for all papers, newline separated
pub fn render_console(papers: &[Paper]) -> String {
    papers
        .iter()
        .map(console_line)
        .collect::<Vec<_>>()
        .join("\n")
}
