//! Quiz definition validation.
//!
//! Checks a candidate [`QuizDef`] for structural completeness and semantic
//! consistency before the authoring workflow is allowed to persist it.
//! Every applicable rule runs; nothing short-circuits and nothing panics.
//! The outcome is a map of field-scoped error messages, empty when the
//! definition is acceptable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{QuestionKind, QuizDef};

/// The outcome of validating a quiz definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Validation {
    /// Field/question/range key to human-readable message.
    ///
    /// Keys: `title`, `slug`, `description`, `questions`, `question_{i}`,
    /// `range_{i}`, and `range_{i}_overlap`.
    pub errors: BTreeMap<String, String>,
}

impl Validation {
    /// True iff no rule produced an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a quiz definition.
///
/// A question or range reports at most one message under its own key; when
/// several of its sub-checks fail, the last one evaluated wins. Overlapping
/// range pairs are reported separately under the lower index's
/// `range_{i}_overlap` key.
pub fn validate(quiz: &QuizDef) -> Validation {
    let mut errors = BTreeMap::new();

    if quiz.title.trim().is_empty() {
        errors.insert("title".into(), "Title is required".into());
    }

    if quiz.slug.trim().is_empty() {
        errors.insert("slug".into(), "Slug is required".into());
    } else if !is_valid_slug(&quiz.slug) {
        errors.insert(
            "slug".into(),
            "Slug may only contain lowercase letters, numbers, and hyphens".into(),
        );
    }

    if quiz.description.trim().is_empty() {
        errors.insert("description".into(), "Description is required".into());
    }

    if quiz.questions.is_empty() {
        errors.insert("questions".into(), "At least one question is required".into());
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        let key = format!("question_{i}");

        if question.text.trim().is_empty() {
            errors.insert(key.clone(), format!("Question {} text is required", i + 1));
        }

        match &question.kind {
            QuestionKind::MultipleChoice { options, .. } => {
                if options.len() < 2 {
                    errors.insert(
                        key.clone(),
                        format!("Question {} needs at least two options", i + 1),
                    );
                }
                if options.iter().any(|o| o.trim().is_empty()) {
                    errors.insert(
                        key.clone(),
                        format!("Question {} has an empty option", i + 1),
                    );
                }
            }
            QuestionKind::Scale {
                scale_min,
                scale_max,
            } => {
                if scale_min.unwrap_or(0) >= scale_max.unwrap_or(0) {
                    errors.insert(
                        key.clone(),
                        format!("Question {} scale minimum must be less than maximum", i + 1),
                    );
                }
            }
            QuestionKind::Text => {}
        }
    }

    for (i, range) in quiz.score_ranges.iter().enumerate() {
        let key = format!("range_{i}");

        if range.min > range.max {
            errors.insert(
                key.clone(),
                format!("Range {} minimum cannot exceed maximum", i + 1),
            );
        }
        if range.status.trim().is_empty() {
            errors.insert(key.clone(), format!("Range {} status is required", i + 1));
        }

        for (j, other) in quiz.score_ranges.iter().enumerate().skip(i + 1) {
            if range.overlaps(other) {
                errors.insert(
                    format!("range_{i}_overlap"),
                    format!("Range {} overlaps with range {}", i + 1, j + 1),
                );
            }
        }
    }

    Validation { errors }
}

/// One or more of `[a-z0-9-]`.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
