//! Canned rationale text for a recommendation.
//!
//! Filled from the two dimensions contributing most to the match
//! (user score × profile weight). No free-text generation.

use crate::matching::catalog::CareerProfile;
use crate::questionnaire::models::{InterestDimension, InterestVector};
use crate::skills::models::SkillVector;

/// Up to two dimensions with a positive contribution, strongest first.
/// Equal contributions keep canonical dimension order.
pub fn top_contributing_dimensions(
    interests: &InterestVector,
    profile: &CareerProfile,
) -> Vec<InterestDimension> {
    let mut contributions: Vec<(InterestDimension, f64)> = InterestDimension::ALL
        .iter()
        .map(|d| (*d, interests.get(*d) as f64 * profile.weight(*d)))
        .filter(|(_, c)| *c > 0.0)
        .collect();

    // Stable: ties stay in canonical order
    contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    contributions.into_iter().take(2).map(|(d, _)| d).collect()
}

/// Required skills the user rates below the profile minimum, by name.
pub fn skill_gaps(skills: &SkillVector, profile: &CareerProfile) -> Vec<String> {
    profile
        .required_skills
        .iter()
        .filter(|(skill, minimum)| skills.level(skill) < **minimum)
        .map(|(skill, _)| skill.replace('_', " "))
        .collect()
}

pub fn build_reasoning(
    interests: &InterestVector,
    skills: &SkillVector,
    profile: &CareerProfile,
) -> String {
    let top = top_contributing_dimensions(interests, profile);

    let interest_sentence = match top.as_slice() {
        [first, second, ..] => format!(
            "Your {first} and {second} interests align closely with the work of a {}.",
            profile.role
        ),
        [only] => format!(
            "Your {only} interest aligns with the work of a {}.",
            profile.role
        ),
        [] => format!(
            "Your current interests overlap little with this role, so a {} path would stretch you in new directions.",
            profile.role
        ),
    };

    let gaps = skill_gaps(skills, profile);
    if gaps.is_empty() {
        format!("{interest_sentence} Your skill ratings already meet its requirements.")
    } else {
        format!("{interest_sentence} Build up {} to close the skill gap.", gaps.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::tests::profile;
    use std::collections::BTreeMap;

    fn interests(pairs: &[(InterestDimension, u32)]) -> InterestVector {
        InterestVector::from(pairs.iter().copied().collect::<BTreeMap<_, _>>())
    }

    #[test]
    fn test_top_two_ordered_by_contribution() {
        let p = profile(
            "Data Scientist",
            &[
                (InterestDimension::Analytical, 3.0),
                (InterestDimension::Science, 2.0),
                (InterestDimension::Technology, 1.0),
            ],
            &[],
        );
        let v = interests(&[
            (InterestDimension::Technology, 5),
            (InterestDimension::Science, 1),
            (InterestDimension::Analytical, 3),
        ]);
        // technology 5, science 2, analytical 9
        assert_eq!(
            top_contributing_dimensions(&v, &p),
            vec![InterestDimension::Analytical, InterestDimension::Technology]
        );
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let p = profile(
            "Generalist",
            &[(InterestDimension::Creative, 1.0), (InterestDimension::Business, 1.0)],
            &[],
        );
        let v = interests(&[(InterestDimension::Creative, 2), (InterestDimension::Business, 2)]);
        assert_eq!(
            top_contributing_dimensions(&v, &p),
            vec![InterestDimension::Business, InterestDimension::Creative]
        );
    }

    #[test]
    fn test_reasoning_names_two_dimensions_and_met_skills() {
        let p = profile(
            "Software Engineer",
            &[(InterestDimension::Technology, 3.0), (InterestDimension::Analytical, 2.0)],
            &[("programming", 6)],
        );
        let v = interests(&[(InterestDimension::Technology, 4), (InterestDimension::Analytical, 2)]);
        let s: SkillVector = [("programming".to_string(), 8)].into_iter().collect();

        assert_eq!(
            build_reasoning(&v, &s, &p),
            "Your technology and analytical interests align closely with the work of a Software Engineer. Your skill ratings already meet its requirements."
        );
    }

    #[test]
    fn test_reasoning_single_dimension_lists_gaps() {
        let p = profile(
            "Cloud Architect",
            &[(InterestDimension::Technology, 3.0)],
            &[("cloud_computing", 7), ("programming", 5)],
        );
        let v = interests(&[(InterestDimension::Technology, 1)]);
        let s: SkillVector = [("programming".to_string(), 5)].into_iter().collect();

        assert_eq!(
            build_reasoning(&v, &s, &p),
            "Your technology interest aligns with the work of a Cloud Architect. Build up cloud computing to close the skill gap."
        );
    }

    #[test]
    fn test_reasoning_without_overlap() {
        let p = profile("UX Designer", &[(InterestDimension::Design, 3.0)], &[]);
        let text = build_reasoning(&InterestVector::new(), &SkillVector::default(), &p);
        assert!(text.starts_with("Your current interests overlap little"));
    }
}
