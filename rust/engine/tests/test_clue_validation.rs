use std::collections::HashSet;

use justone_engine::player::{normalize, Clue};
use justone_engine::rules::{validate_clues, FamilyFilter, Rejection};

fn clues(pairs: &[(&str, &str)]) -> Vec<Clue> {
    pairs
        .iter()
        .map(|(player, text)| Clue::new(*player, *text).unwrap())
        .collect()
}

#[test]
fn clue_equal_to_secret_is_void() {
    let report = validate_clues(
        "Virus",
        &clues(&[("Ivan", "virus"), ("Karel", "illness")]),
        &FamilyFilter::default(),
    );
    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].text, "illness");
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].text, "virus");
    assert_eq!(report.rejected[0].reason, Rejection::MatchesSecret);
}

#[test]
fn secret_comparison_is_case_insensitive() {
    let report = validate_clues(
        "Virus",
        &clues(&[("Ivan", "VIRUS")]),
        &FamilyFilter::default(),
    );
    assert!(report.all_rejected());
}

#[test]
fn duplicates_are_banned_for_everyone() {
    let report = validate_clues(
        "Crocodile",
        &clues(&[("Ivan", "nile"), ("Karel", "Nile"), ("Hatim", "swamp")]),
        &FamilyFilter::default(),
    );
    let valid: Vec<&str> = report.valid.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(valid, ["swamp"], "both copies of the duplicate are out");
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].reason, Rejection::Duplicate);
}

#[test]
fn family_roots_match_as_substrings() {
    let family = FamilyFilter::new(["king"]);
    let report = validate_clues(
        "Castle",
        &clues(&[("Ivan", "kingdom"), ("Karel", "tower")]),
        &family,
    );
    let valid: Vec<&str> = report.valid.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(valid, ["tower"]);
    assert_eq!(report.rejected[0].reason, Rejection::SameFamily);
}

#[test]
fn empty_filter_rejects_nothing() {
    let report = validate_clues(
        "Castle",
        &clues(&[("Ivan", "kingdom"), ("Karel", "tower")]),
        &FamilyFilter::default(),
    );
    assert_eq!(report.valid.len(), 2);
    assert!(report.rejected.is_empty());
}

#[test]
fn blank_family_roots_are_ignored() {
    let family = FamilyFilter::new(["", "  "]);
    let report = validate_clues("Castle", &clues(&[("Ivan", "tower")]), &family);
    assert_eq!(report.valid.len(), 1, "a blank root must not match everything");
}

#[test]
fn survivors_keep_submission_order() {
    let report = validate_clues(
        "Sun",
        &clues(&[
            ("A", "star"),
            ("B", "dupe"),
            ("C", "light"),
            ("D", "dupe"),
            ("E", "day"),
        ]),
        &FamilyFilter::default(),
    );
    let valid: Vec<&str> = report.valid.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(valid, ["star", "light", "day"]);
}

#[test]
fn valid_and_rejected_partition_the_submitted_texts() {
    let submitted = clues(&[
        ("A", "star"),
        ("B", "sun"),
        ("C", "light"),
        ("D", "light"),
        ("E", "sunny"),
    ]);
    let family = FamilyFilter::new(["sunn"]);
    let report = validate_clues("Sun", &submitted, &family);

    let valid: HashSet<String> = report.valid.iter().map(|c| c.normalized()).collect();
    let rejected: HashSet<String> = report.rejected.iter().map(|r| r.text.clone()).collect();

    assert!(
        valid.is_disjoint(&rejected),
        "no text may be both valid and rejected"
    );

    let all: HashSet<String> = submitted.iter().map(|c| c.normalized()).collect();
    let covered: HashSet<String> = valid.union(&rejected).cloned().collect();
    assert_eq!(all, covered, "every submitted text is accounted for");
}

#[test]
fn clue_failing_several_checks_is_excluded_exactly_once() {
    // "virus" matches the secret AND is duplicated; it appears once in the
    // rejected list, with the secret-match reason.
    let report = validate_clues(
        "Virus",
        &clues(&[("Ivan", "virus"), ("Karel", "virus"), ("Hatim", "germ")]),
        &FamilyFilter::default(),
    );
    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].reason, Rejection::MatchesSecret);
}

#[test]
fn all_rejected_flags_the_abort_condition() {
    let report = validate_clues(
        "Virus",
        &clues(&[("Ivan", "virus")]),
        &FamilyFilter::default(),
    );
    assert!(report.all_rejected());
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  CroCoDiLe "), "crocodile");
}

#[test]
fn clue_construction_enforces_the_single_token_contract() {
    assert!(Clue::new("Ivan", "two words").is_err());
    assert!(Clue::new("Ivan", "").is_err());
    assert!(Clue::new("Ivan", "   ").is_err());
    let clue = Clue::new("Ivan", "  swamp ").unwrap();
    assert_eq!(clue.text, "swamp", "stored text is trimmed");
}
