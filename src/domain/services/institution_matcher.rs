use regex::Regex;

use crate::domain::entities::InstitutionRank;

/// Suffixes that mark a token as an institution name. Longer alternatives
/// first so "서울대학교" is captured whole rather than as "서울대".
const INSTITUTION_TOKEN_PATTERN: &str = r"[가-힣A-Za-z]+(?:대학교|대학|[Uu]niversity|대)";

/// Extract the first institution-looking token from credential text.
///
/// `None` means the credential is not institution-weighted at all; the
/// raw score is used unmodified.
pub fn find_institution_token(text: &str) -> Option<String> {
    let re = Regex::new(INSTITUTION_TOKEN_PATTERN).unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}

/// Resolve a token against the ranked institution list (assumed ordered by
/// rank ascending). Matching is bidirectional substring containment over the
/// institution's known spellings, case-insensitively; the first hit wins.
///
/// An unknown institution gets the sentinel rank `list_len + 1`, explicitly
/// "worst of the known set" rather than zero, which would blow up the
/// weighting division. Ranks start at 1 by construction, so the result is
/// never zero.
///
/// Known approximation: containment in both directions can over-match very
/// short names; downstream data depends on this behavior, so it is kept.
pub fn institution_rank(token: &str, institutions: &[InstitutionRank]) -> i64 {
    let token = token.to_lowercase();

    for institution in institutions {
        for variant in institution.match_variants() {
            let variant = variant.to_lowercase();
            if variant.contains(&token) || token.contains(&variant) {
                return i64::from(institution.rank);
            }
        }
    }

    institutions.len() as i64 + 1
}

/// `weighted = raw * (1000 / rank)`. Callers guarantee `rank >= 1`.
pub fn weighted_score(raw_score: f64, rank: i64) -> f64 {
    raw_score * (1000.0 / rank as f64)
}
