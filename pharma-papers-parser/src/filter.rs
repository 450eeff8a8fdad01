//! Narrowing a paper to its non-academic authors

use crate::classifier::is_non_academic;
use crate::models::Paper;
use tracing::debug;

/// Narrow `paper` to the authors with a non-academic affiliation
///
/// `non_academic_authors` and `company_affiliations` are recomputed from
/// `paper.authors`, preserving order and without deduplication. Authors with no
/// affiliation are never kept. Applying the filter twice gives the same result.
pub fn filter_non_academic_authors(paper: &mut Paper) {
    paper.non_academic_authors = paper
        .authors
        .iter()
        .filter(|author| author.affiliation.as_deref().is_some_and(is_non_academic))
        .cloned()
        .collect();

    paper.company_affiliations = paper
        .authors
        .iter()
        .filter_map(|author| author.affiliation.as_deref())
        .filter(|affiliation| is_non_academic(affiliation))
        .map(str::to_string)
        .collect();

    debug!(
        pmid = %paper.pubmed_id,
        authors = paper.authors.len(),
        non_academic = paper.non_academic_authors.len(),
        "Filtered non-academic authors"
    );
}

impl Paper {
    /// Consume the paper and return it narrowed to its non-academic authors
    pub fn into_filtered(mut self) -> Self {
        filter_non_academic_authors(&mut self);
        self
    }
}
