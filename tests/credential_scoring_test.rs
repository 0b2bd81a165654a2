/// End-to-end tests for the pure scoring pipeline:
/// classification → status detection → scoring → institution weighting.
mod utils;

use medigraph::domain::services::{classify, evaluate};
use medigraph::domain::value_objects::CredentialStatus;
use utils::factories::korean_university_ranks;

#[test]
fn seoul_graduate_scores_one_thousand() {
    // "대학" fires (base 1), "졸업" → modifier 1.0, 서울대학교 is rank 1
    let ranks = korean_university_ranks();
    let evaluation = evaluate("서울대학교 의과대학 졸업", &ranks).unwrap();

    assert_eq!(evaluation.category, "degree");
    assert_eq!(evaluation.status, CredentialStatus::Graduated);
    assert_eq!(evaluation.details.matched_keyword, "대학");
    assert_eq!(evaluation.details.base_score, 1.0);
    assert_eq!(evaluation.details.status_modifier, 1.0);
    assert_eq!(evaluation.institution_rank, Some(1));
    assert_eq!(evaluation.final_score, 1000.0);
}

#[test]
fn compound_degree_never_scores_as_partial_match() {
    // "석박사" contains "박사"; the compound keyword must win with base 5
    let evaluation = evaluate("의학 석박사 통합과정 수료", &[]).unwrap();
    assert_eq!(evaluation.details.matched_keyword, "석박사");
    assert_eq!(evaluation.details.base_score, 5.0);
}

#[test]
fn hospital_position_never_classifies_as_degree() {
    // "대학" matches degree keywords, but "병원" excludes the category
    let category = classify("고려대학병원 전임의").unwrap();
    assert_eq!(category.label, "position");

    let evaluation = evaluate("고려대학병원 전임의", &[]).unwrap();
    assert_eq!(evaluation.category, "position");
    assert_eq!(evaluation.details.matched_keyword, "전임의");
}

#[test]
fn missing_status_keyword_defaults_to_full_modifier() {
    let evaluation = evaluate("연세대학교 의학박사", &[]).unwrap();
    assert_eq!(evaluation.status, CredentialStatus::Other);
    assert_eq!(evaluation.details.status_modifier, 1.0);
}

#[test]
fn unknown_institution_uses_sentinel_rank() {
    // Not in the 3-entry list: rank must be 4, never zero
    let ranks = korean_university_ranks();
    let evaluation = evaluate("한림대학교 의과대학 졸업", &ranks).unwrap();

    assert_eq!(evaluation.institution_rank, Some(ranks.len() as i64 + 1));
    assert!(evaluation.final_score.is_finite());
    assert_eq!(
        evaluation.final_score,
        evaluation.details.raw_score * 1000.0 / (ranks.len() as f64 + 1.0)
    );
}

#[test]
fn credential_without_institution_token_keeps_raw_score() {
    let ranks = korean_university_ranks();
    let evaluation = evaluate("내과 전문의", &ranks).unwrap();

    assert_eq!(evaluation.institution_rank, None);
    assert_eq!(evaluation.final_score, evaluation.details.raw_score);
    assert_eq!(evaluation.details.base_score, 3.0);
}

#[test]
fn unclassifiable_text_yields_no_score() {
    assert!(evaluate("2005년 개원", &korean_university_ranks()).is_none());
}

#[test]
fn membership_is_the_last_resort_category() {
    let evaluation = evaluate("대한내과학회 정회원", &[]).unwrap();
    assert_eq!(evaluation.category, "membership");
    assert_eq!(evaluation.details.matched_keyword, "정회원");
    assert_eq!(evaluation.details.base_score, 2.0);
}

#[test]
fn scoring_is_deterministic() {
    let ranks = korean_university_ranks();
    let first = evaluate("연세대학교 의과대학 졸업", &ranks).unwrap();
    let second = evaluate("연세대학교 의과대학 졸업", &ranks).unwrap();
    assert_eq!(first, second);
}
