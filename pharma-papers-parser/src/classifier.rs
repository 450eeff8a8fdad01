//! Academic / non-academic affiliation classification
//!
//! Matching is case-insensitive substring containment: a marker embedded in a longer
//! word still counts, so `"inc"` matches `"Lincoln"`. Academic markers always win, which
//! treats joint academic-industry affiliations as academic.

use serde::{Deserialize, Serialize};

/// Markers of universities, hospitals and government or health agencies
pub const ACADEMIC_MARKERS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "centre",
    "department",
    "faculty",
    "nih",
    "gov",
];

/// Markers of companies and industry
pub const NON_ACADEMIC_MARKERS: &[&str] = &[
    "pharma", "biotech", "inc", "corp", "gmbh", "co.", "pvt", "llc", "ltd",
];

/// Outcome of classifying one affiliation string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffiliationKind {
    /// Contains at least one academic marker
    Academic,
    /// Contains a non-academic marker and no academic marker
    NonAcademic,
    /// Empty, or contains neither kind of marker
    Unclassified,
}

/// Classify an affiliation string
///
/// # Example
///
/// ```
/// use pharma_papers_parser::{AffiliationKind, classify_affiliation};
///
/// assert_eq!(
///     classify_affiliation("Dept. of Oncology, Harvard University"),
///     AffiliationKind::Academic
/// );
/// assert_eq!(
///     classify_affiliation("Acme Pharma Inc., Basel"),
///     AffiliationKind::NonAcademic
/// );
/// assert_eq!(classify_affiliation(""), AffiliationKind::Unclassified);
/// ```
pub fn classify_affiliation(affiliation: &str) -> AffiliationKind {
    let lowered = affiliation.to_lowercase();

    if contains_any(&lowered, ACADEMIC_MARKERS) {
        AffiliationKind::Academic
    } else if contains_any(&lowered, NON_ACADEMIC_MARKERS) {
        AffiliationKind::NonAcademic
    } else {
        AffiliationKind::Unclassified
    }
}

/// Whether an affiliation belongs to a commercial organization
pub fn is_non_academic(affiliation: &str) -> bool {
    classify_affiliation(affiliation) == AffiliationKind::NonAcademic
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}
