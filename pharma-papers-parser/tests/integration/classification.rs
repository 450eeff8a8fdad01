//! Table tests for affiliation classification

use pharma_papers_parser::{
    ACADEMIC_MARKERS, AffiliationKind, NON_ACADEMIC_MARKERS, classify_affiliation,
    extract_email, is_non_academic,
};
use rstest::rstest;

#[rstest]
#[case("Dept. of Oncology, Harvard University")]
#[case("Imperial College London, London, UK")]
#[case("Broad Institute of MIT and Harvard, Cambridge, MA")]
#[case("Harvard Medical School, Boston, MA")]
#[case("Massachusetts General Hospital, Boston")]
#[case("Francis Crick Centre, London")]
#[case("Faculty of Medicine, Lund")]
#[case("National Cancer Institute, NIH, Bethesda")]
#[case("Food and Drug Administration, Silver Spring, MD. reviewer@fda.hhs.gov")]
fn test_academic_affiliations(#[case] affiliation: &str) {
    assert_eq!(classify_affiliation(affiliation), AffiliationKind::Academic);
    assert!(!is_non_academic(affiliation));
}

#[rstest]
#[case("Research Division, Acme Pharma Inc., contact: j.doe@acmepharma.com")]
#[case("Amgen Biotech, Thousand Oaks, CA")]
#[case("Genentech Inc., South San Francisco, CA")]
#[case("Merck Sharp & Dohme Corp., Rahway, NJ")]
#[case("Boehringer Ingelheim Pharma GmbH & Co. KG, Biberach")]
#[case("Sun Pvt Ltd, Mumbai, India")]
#[case("BioGen Labs LLC, Austin, TX")]
fn test_non_academic_affiliations(#[case] affiliation: &str) {
    assert_eq!(classify_affiliation(affiliation), AffiliationKind::NonAcademic);
    assert!(is_non_academic(affiliation));
}

#[rstest]
#[case("Department of Chemistry, Stanford University and Gilead Sciences Inc.")]
#[case("Novartis Institutes for BioMedical Research, Novartis Pharma AG, Basel")]
#[case("School of Pharmacy, University of Nottingham")]
fn test_joint_affiliations_are_academic(#[case] affiliation: &str) {
    assert_eq!(classify_affiliation(affiliation), AffiliationKind::Academic);
    assert!(!is_non_academic(affiliation));
}

#[rstest]
#[case("")]
#[case("Mayo Clinic, Rochester, MN")]
#[case("Independent researcher, Berlin")]
fn test_unclassified_affiliations(#[case] affiliation: &str) {
    assert_eq!(
        classify_affiliation(affiliation),
        AffiliationKind::Unclassified
    );
    assert!(!is_non_academic(affiliation));
}

#[test]
fn test_each_marker_alone() {
    for marker in ACADEMIC_MARKERS {
        assert_eq!(
            classify_affiliation(marker),
            AffiliationKind::Academic,
            "{marker}"
        );
    }
    for marker in NON_ACADEMIC_MARKERS {
        assert_eq!(
            classify_affiliation(marker),
            AffiliationKind::NonAcademic,
            "{marker}"
        );
    }
}

#[test]
fn test_every_non_academic_marker_loses_to_every_academic_marker() {
    for academic in ACADEMIC_MARKERS {
        for commercial in NON_ACADEMIC_MARKERS {
            let affiliation = format!("{commercial} / {academic}");
            assert!(!is_non_academic(&affiliation), "{affiliation}");
        }
    }
}

#[test]
fn test_email_from_non_academic_affiliation() {
    let affiliation = "Research Division, Acme Pharma Inc., contact: j.doe@acmepharma.com";
    assert!(is_non_academic(affiliation));
    assert_eq!(
        extract_email(affiliation).as_deref(),
        Some("j.doe@acmepharma.com")
    );
}
