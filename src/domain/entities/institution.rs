use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the ranked institution list (1 = best). Read-only lookup
/// data for scoring; never mutated by the ingest pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstitutionRank {
    pub id: Uuid,
    pub name: String,
    pub rank: i32,
    /// Known alternate spellings ("서울의대", "SNU", ...).
    pub aliases: Vec<String>,
}

impl InstitutionRank {
    pub fn new(name: impl Into<String>, rank: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rank,
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = aliases;
        self
    }

    /// Spellings this institution can be matched under: the canonical name,
    /// its suffix-abbreviated variant ("서울대학교" → "서울대") and any
    /// recorded aliases.
    pub fn match_variants(&self) -> Vec<String> {
        let mut variants = vec![self.name.clone()];
        if let Some(stem) = self.name.strip_suffix("대학교") {
            variants.push(format!("{}대", stem));
        }
        variants.extend(self.aliases.iter().cloned());
        variants
    }
}
