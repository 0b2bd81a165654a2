use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a credential, derived from its raw description.
///
/// Detection is a fixed-priority substring scan, independent of category
/// classification. A description can yield a status without being
/// classifiable, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    InProgress,
    Completed,
    Enrolled,
    Graduated,
    Other,
}

impl CredentialStatus {
    /// Derive the status label from credential text.
    ///
    /// Priority order matters: "재학중"/"수료중" must be tested before the
    /// bare "재학"/"수료" substrings they contain.
    pub fn detect(text: &str) -> Self {
        if text.contains("재학중") || text.contains("수료중") || text.contains("진행중") {
            CredentialStatus::InProgress
        } else if text.contains("수료") {
            CredentialStatus::Completed
        } else if text.contains("재직") || text.contains("재학") {
            CredentialStatus::Enrolled
        } else if text.contains("졸업") {
            CredentialStatus::Graduated
        } else {
            CredentialStatus::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialStatus::InProgress => "in_progress",
            CredentialStatus::Completed => "completed",
            CredentialStatus::Enrolled => "enrolled",
            CredentialStatus::Graduated => "graduated",
            CredentialStatus::Other => "other",
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrolled_suffix_wins_over_enrolled() {
        // "재학중" contains "재학", priority order must pick the longer one
        assert_eq!(
            CredentialStatus::detect("서울대학교 의과대학 재학중"),
            CredentialStatus::InProgress
        );
        assert_eq!(
            CredentialStatus::detect("서울대학교 의과대학 재학"),
            CredentialStatus::Enrolled
        );
    }

    #[test]
    fn graduation_detected() {
        assert_eq!(
            CredentialStatus::detect("연세대학교 의과대학 졸업"),
            CredentialStatus::Graduated
        );
    }

    #[test]
    fn unknown_text_falls_back_to_other() {
        assert_eq!(
            CredentialStatus::detect("대한내과학회 정회원"),
            CredentialStatus::Other
        );
    }
}
