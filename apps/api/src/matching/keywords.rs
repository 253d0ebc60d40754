//! Keyword matching: the 40-point component.

use std::collections::BTreeSet;

use crate::matching::equivalence::EquivalenceTable;

pub const KEYWORD_MAX: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    pub score: f64,
    pub matched: usize,
    pub total: usize,
}

/// Scores the fraction of job keywords the candidate covers.
///
/// A keyword counts when it resolves direct/transferable against the candidate's
/// skills, or when it (or one of its table forms) occurs in any experience
/// description. No keywords at all earns full credit.
pub fn score_keywords(
    keywords: &[String],
    candidate_terms: &BTreeSet<String>,
    descriptions: &[String],
    table: &EquivalenceTable,
) -> KeywordScore {
    let total = keywords.len();
    if total == 0 {
        return KeywordScore {
            score: KEYWORD_MAX,
            matched: 0,
            total: 0,
        };
    }

    let matched = keywords
        .iter()
        .filter(|kw| {
            table.resolve(kw, candidate_terms).is_match() || table.appears_in_any(kw, descriptions)
        })
        .count();

    KeywordScore {
        score: KEYWORD_MAX * matched as f64 / total as f64,
        matched,
        total,
    }
}
