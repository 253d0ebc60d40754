//! Recommendation text: fixed templates chosen by color band, gaps, and priorities.

use crate::matching::education::EDUCATION_MAX;
use crate::matching::experience::EXPERIENCE_MAX;
use crate::matching::keywords::KEYWORD_MAX;
use crate::matching::models::ColorBand;
use crate::matching::skills::SKILLS_MAX;

/// How many priorities get their own message.
const TOP_PRIORITIES: usize = 3;

pub const READY_TO_SUBMIT: &str =
    "Strong match. Your profile covers the key requirements; this application is ready to submit.";

const YELLOW_NO_GAPS: &str =
    "Solid match. Tighten how your experience reflects the role's wording before submitting.";

/// Component scores used to find the weakest dimension on a red result.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScores {
    pub keyword: f64,
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
}

impl ComponentScores {
    /// The component furthest below its maximum. Ties go to the earlier one
    /// in keyword, experience, skills, education order.
    pub fn largest_deficit(&self) -> &'static str {
        let deficits = [
            ("keyword match", KEYWORD_MAX - self.keyword),
            ("experience", EXPERIENCE_MAX - self.experience),
            ("skills", SKILLS_MAX - self.skills),
            ("education", EDUCATION_MAX - self.education),
        ];

        let mut worst = deficits[0];
        for candidate in &deficits[1..] {
            if candidate.1 > worst.1 {
                worst = *candidate;
            }
        }
        worst.0
    }
}

fn priority_message(term: &str) -> String {
    format!("Emphasize any {term} exposure you have, or build it through a short course or project.")
}

/// Builds the ordered recommendation list for a scored match.
pub fn generate_recommendations(
    band: ColorBand,
    components: &ComponentScores,
    priorities: &[String],
) -> Vec<String> {
    let top = priorities.iter().take(TOP_PRIORITIES);

    match band {
        ColorBand::Green => vec![READY_TO_SUBMIT.to_string()],
        ColorBand::Yellow => {
            let messages: Vec<String> = top.map(|t| priority_message(t)).collect();
            if messages.is_empty() {
                vec![YELLOW_NO_GAPS.to_string()]
            } else {
                messages
            }
        }
        ColorBand::Red => {
            let mut messages = vec![format!(
                "Weak match. Your biggest shortfall is {}; address it before applying, or target a closer role.",
                components.largest_deficit()
            )];
            messages.extend(top.map(|t| priority_message(t)));
            messages
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(keyword: f64, experience: f64, skills: f64, education: f64) -> ComponentScores {
        ComponentScores {
            keyword,
            experience,
            skills,
            education,
        }
    }

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_green_single_ready_message() {
        let recs = generate_recommendations(
            ColorBand::Green,
            &scores(40.0, 30.0, 20.0, 10.0),
            &terms(&["docker"]),
        );
        assert_eq!(recs, vec![READY_TO_SUBMIT.to_string()]);
    }

    #[test]
    fn test_yellow_one_message_per_top_three_priorities() {
        let recs = generate_recommendations(
            ColorBand::Yellow,
            &scores(20.0, 20.0, 10.0, 10.0),
            &terms(&["sql", "docker", "aws", "kafka"]),
        );
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("sql"));
        assert!(recs[2].contains("aws"));
        assert!(!recs.iter().any(|r| r.contains("kafka")));
    }

    #[test]
    fn test_yellow_without_gaps_gets_polish_message() {
        let recs =
            generate_recommendations(ColorBand::Yellow, &scores(40.0, 10.0, 20.0, 0.0), &[]);
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn test_red_names_largest_deficit_then_priorities() {
        let recs = generate_recommendations(
            ColorBand::Red,
            &scores(0.0, 15.0, 5.0, 10.0),
            &terms(&["python", "django"]),
        );
        assert_eq!(recs.len(), 3);
        assert!(recs[0].contains("keyword match"));
        assert!(recs[1].contains("python"));
    }

    #[test]
    fn test_deficit_ties_prefer_component_order() {
        // experience and skills both 10 short; keyword and education full.
        let s = scores(40.0, 20.0, 10.0, 10.0);
        assert_eq!(s.largest_deficit(), "experience");

        // everything at max: keyword wins the tie.
        assert_eq!(scores(40.0, 30.0, 20.0, 10.0).largest_deficit(), "keyword match");
    }
}
