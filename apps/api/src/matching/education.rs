//! Education matching: the 10-point component.
//!
//! Rules are evaluated in listed order; the first predicate that holds decides
//! the score.

use tracing::debug;

use crate::matching::models::{EducationEntry, EducationLevel};

pub const EDUCATION_MAX: f64 = 10.0;

/// An ordered scoring rule over (candidate ordinal, required ordinal).
pub struct EducationRule {
    pub name: &'static str,
    pub applies: fn(candidate: u8, required: u8) -> bool,
    pub score: f64,
}

pub const EDUCATION_RULES: &[EducationRule] = &[
    EducationRule {
        name: "no_requirement",
        applies: |_, required| required == 0,
        score: EDUCATION_MAX,
    },
    EducationRule {
        name: "meets_requirement",
        applies: |candidate, required| candidate >= required,
        score: EDUCATION_MAX,
    },
    EducationRule {
        name: "one_level_below",
        applies: |candidate, required| candidate + 1 == required,
        score: 5.0,
    },
];

/// Highest credential held; `None` when the list is empty.
pub fn highest_level(entries: &[EducationEntry]) -> EducationLevel {
    entries
        .iter()
        .map(|e| e.level)
        .max()
        .unwrap_or(EducationLevel::None)
}

pub fn score_education(entries: &[EducationEntry], required: EducationLevel) -> f64 {
    let candidate = highest_level(entries).ordinal();
    let required = required.ordinal();

    EDUCATION_RULES
        .iter()
        .find(|rule| (rule.applies)(candidate, required))
        .map(|rule| {
            debug!("Education rule '{}' applied", rule.name);
            rule.score
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(levels: &[EducationLevel]) -> Vec<EducationEntry> {
        levels.iter().map(|&level| EducationEntry { level }).collect()
    }

    #[test]
    fn test_no_requirement_full_marks() {
        assert_eq!(score_education(&[], EducationLevel::None), 10.0);
    }

    #[test]
    fn test_meets_or_exceeds() {
        assert_eq!(
            score_education(&held(&[EducationLevel::Bachelor]), EducationLevel::Bachelor),
            10.0
        );
        assert_eq!(
            score_education(&held(&[EducationLevel::Doctorate]), EducationLevel::Master),
            10.0
        );
    }

    #[test]
    fn test_one_level_below_half_marks() {
        assert_eq!(
            score_education(&held(&[EducationLevel::Diploma]), EducationLevel::Bachelor),
            5.0
        );
    }

    #[test]
    fn test_two_levels_below_zero() {
        assert_eq!(
            score_education(&held(&[EducationLevel::Diploma]), EducationLevel::Master),
            0.0
        );
        assert_eq!(score_education(&[], EducationLevel::Bachelor), 0.0);
    }

    #[test]
    fn test_highest_credential_used() {
        let entries = held(&[
            EducationLevel::Diploma,
            EducationLevel::Master,
            EducationLevel::Bachelor,
        ]);
        assert_eq!(highest_level(&entries), EducationLevel::Master);
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = EDUCATION_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EDUCATION_RULES.len());
    }
}
