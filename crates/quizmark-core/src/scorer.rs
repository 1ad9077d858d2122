//! Pure scoring engine.
//!
//! Turns a submission plus a quiz definition into a total score, optional
//! per-category sub-scores, and a matched result narrative. Scoring never
//! fails: a missing, unmapped, or malformed answer contributes zero rather
//! than producing an error, since the scorer must behave sanely even when
//! handed a partially-authored question.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::{Answer, AnswerValue, Question, QuestionKind, ScoreRange};

/// Result headline used when no score range matches the total.
pub const DEFAULT_RESULT_STATUS: &str = "Assessment Complete";
/// Result description used when no score range matches the total.
pub const DEFAULT_RESULT_DESCRIPTION: &str =
    "Thank you for completing this assessment. Your responses have been recorded.";

/// The computed outcome of scoring one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Sum of all question points, after the optional multiplier.
    pub total_score: i64,
    /// Per-category totals; absent when no answered question declared a
    /// category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<BTreeMap<String, i64>>,
    /// Headline from the matched score range, or the default.
    pub result_message: String,
    /// Description from the matched score range, or the default.
    pub result_description: String,
    /// The answers consumed, in definition order.
    pub answers: Vec<Answer>,
}

/// Score a submission against a quiz definition.
///
/// `submission` is the raw form input, keyed `"question_" + question.id`
/// with string values; numeric coercion for scale questions happens here.
/// Questions with no submitted value are skipped entirely. An optional
/// `multiplier` greater than zero scales the total and every sub-score
/// once, after all accumulation.
pub fn calculate_score(
    submission: &HashMap<String, String>,
    questions: &[Question],
    score_ranges: &[ScoreRange],
    multiplier: Option<i64>,
) -> ScoreResult {
    let mut total_score = 0i64;
    let mut sub_scores: BTreeMap<String, i64> = BTreeMap::new();
    let mut answers = Vec::new();

    for question in questions {
        let key = format!("question_{}", question.id);
        let Some(raw) = submission.get(&key) else {
            continue;
        };

        let (value, points) = match &question.kind {
            QuestionKind::Scale { .. } => {
                // Out-of-range values are scored at face value; the scale
                // bounds are an authoring hint, not a clamp.
                let n = raw.trim().parse::<i64>().unwrap_or(0);
                (AnswerValue::Number(n), n)
            }
            QuestionKind::MultipleChoice {
                options,
                score_mapping,
                points,
            } => {
                let earned = option_points(raw, options, score_mapping.as_ref(), points.as_deref());
                (AnswerValue::Text(raw.clone()), earned)
            }
            QuestionKind::Text => (AnswerValue::Text(raw.clone()), 0),
        };

        answers.push(Answer {
            question_id: question.id.clone(),
            value,
        });
        total_score += points;

        if let Some(category) = &question.category {
            let category = category.trim();
            if !category.is_empty() {
                *sub_scores.entry(category.to_string()).or_insert(0) += points;
            }
        }
    }

    if let Some(m) = multiplier {
        if m > 0 {
            total_score *= m;
            for value in sub_scores.values_mut() {
                *value *= m;
            }
        }
    }

    let matched = score_ranges.iter().find(|r| r.contains(total_score));
    let (result_message, result_description) = match matched {
        Some(range) => (range.status.clone(), range.description.clone()),
        None => (
            DEFAULT_RESULT_STATUS.to_string(),
            DEFAULT_RESULT_DESCRIPTION.to_string(),
        ),
    };

    ScoreResult {
        total_score,
        sub_scores: if sub_scores.is_empty() {
            None
        } else {
            Some(sub_scores)
        },
        result_message,
        result_description,
        answers,
    }
}

/// Points for a multiple-choice answer: the mapping wins over the
/// positional points array; anything unmapped is zero.
fn option_points(
    raw: &str,
    options: &[String],
    score_mapping: Option<&BTreeMap<String, i64>>,
    points: Option<&[i64]>,
) -> i64 {
    if let Some(mapping) = score_mapping {
        return mapping.get(raw).copied().unwrap_or(0);
    }
    if let Some(points) = points {
        return options
            .iter()
            .position(|o| o == raw)
            .and_then(|i| points.get(i))
            .copied()
            .unwrap_or(0);
    }
    0
}

/// The highest total a full, best-case submission can reach.
///
/// Scale questions contribute `scale_max` (default 10); multiple-choice
/// questions contribute the largest mapped or positional point value; text
/// questions contribute nothing. Used by presentation code to render a
/// score as a fraction of the maximum.
pub fn calculate_max_score(questions: &[Question], multiplier: Option<i64>) -> i64 {
    let mut max = 0i64;

    for question in questions {
        max += match &question.kind {
            QuestionKind::Scale { scale_max, .. } => scale_max.unwrap_or(10),
            QuestionKind::MultipleChoice {
                score_mapping,
                points,
                ..
            } => {
                if let Some(mapping) = score_mapping {
                    mapping.values().copied().max().unwrap_or(0)
                } else if let Some(points) = points {
                    points.iter().copied().max().unwrap_or(0)
                } else {
                    0
                }
            }
            QuestionKind::Text => 0,
        };
    }

    match multiplier {
        Some(m) if m > 0 => max * m,
        _ => max,
    }
}
