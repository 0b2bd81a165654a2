use serde::Serialize;

use super::credential_status::CredentialStatus;

/// How a category translates a credential's status into a score multiplier.
///
/// Kept as a small enumerable rule set (not closures) so categories stay
/// plain data that can be serialized and tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusRule {
    /// Academic degrees are discounted while still in progress.
    DegreeProgress,
    /// Status has no effect on the score.
    Flat,
}

impl StatusRule {
    pub fn modifier(&self, status: CredentialStatus) -> f64 {
        match self {
            StatusRule::DegreeProgress => match status {
                CredentialStatus::InProgress => 0.3,
                CredentialStatus::Completed => 0.5,
                CredentialStatus::Enrolled => 0.7,
                CredentialStatus::Graduated => 1.0,
                CredentialStatus::Other => 1.0,
            },
            StatusRule::Flat => 1.0,
        }
    }
}

/// One credential category: ordered keywords, a base-score table and a
/// status rule. Declaration order in [`CATEGORIES`] is the classification
/// priority.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialCategory {
    pub label: &'static str,
    /// Ordered most-specific first; the first keyword contained in the
    /// text wins ("석박사" before "박사"/"석사").
    pub keywords: &'static [&'static str],
    pub base_scores: &'static [(&'static str, f64)],
    pub status_rule: StatusRule,
    /// Substrings that disqualify this category for a given text even when
    /// a keyword matches (e.g. hospital names containing "대학").
    pub excluded_if: &'static [&'static str],
}

impl CredentialCategory {
    pub fn base_score(&self, keyword: &str) -> Option<f64> {
        self.base_scores
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, score)| *score)
    }
}

/// The fixed, ordered category table.
///
/// Degrees are tested before positions so that "OO대학교 의학박사" is scored
/// as a degree; the "병원" exclusion keeps hospital names like "대학병원"
/// from being mistaken for one.
pub const CATEGORIES: &[CredentialCategory] = &[
    CredentialCategory {
        label: "degree",
        keywords: &["석박사", "박사", "석사", "대학"],
        base_scores: &[("석박사", 5.0), ("박사", 3.0), ("석사", 2.0), ("대학", 1.0)],
        status_rule: StatusRule::DegreeProgress,
        excluded_if: &["병원"],
    },
    CredentialCategory {
        label: "certification",
        keywords: &["세부전문의", "지도전문의", "전문의", "인정의", "면허"],
        base_scores: &[
            ("세부전문의", 4.0),
            ("지도전문의", 4.0),
            ("전문의", 3.0),
            ("인정의", 2.0),
            ("면허", 1.0),
        ],
        status_rule: StatusRule::Flat,
        excluded_if: &[],
    },
    CredentialCategory {
        label: "position",
        keywords: &[
            "주임교수",
            "교수",
            "전임의",
            "펠로우",
            "전공의",
            "레지던트",
            "인턴",
            "병원",
        ],
        base_scores: &[
            ("주임교수", 5.0),
            ("교수", 4.0),
            ("전임의", 3.0),
            ("펠로우", 3.0),
            ("전공의", 2.0),
            ("레지던트", 2.0),
            ("인턴", 1.0),
            ("병원", 1.0),
        ],
        status_rule: StatusRule::Flat,
        excluded_if: &[],
    },
    CredentialCategory {
        label: "membership",
        keywords: &["정회원", "회원", "학회"],
        base_scores: &[("정회원", 2.0), ("회원", 1.0), ("학회", 1.0)],
        status_rule: StatusRule::Flat,
        excluded_if: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_has_a_base_score() {
        for category in CATEGORIES {
            for &keyword in category.keywords {
                assert!(
                    category.base_score(keyword).is_some(),
                    "keyword '{}' in category '{}' has no base score",
                    keyword,
                    category.label
                );
            }
        }
    }

    #[test]
    fn flat_rule_ignores_status() {
        assert_eq!(StatusRule::Flat.modifier(CredentialStatus::InProgress), 1.0);
        assert_eq!(StatusRule::Flat.modifier(CredentialStatus::Other), 1.0);
    }

    #[test]
    fn degree_rule_discounts_unfinished_work() {
        let rule = StatusRule::DegreeProgress;
        assert!(rule.modifier(CredentialStatus::InProgress) < rule.modifier(CredentialStatus::Completed));
        assert!(rule.modifier(CredentialStatus::Completed) < rule.modifier(CredentialStatus::Enrolled));
        assert_eq!(rule.modifier(CredentialStatus::Graduated), 1.0);
    }
}
