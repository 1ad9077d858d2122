//! Core data model types for quizmark.
//!
//! These are the fundamental types that the entire quizmark system uses
//! to represent quiz definitions, questions, score ranges, and answers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One prompt within a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable unique identifier within the quiz.
    pub id: String,
    /// Prompt text shown to the user.
    pub text: String,
    /// Type-specific shape of this question.
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Optional label bucketing this question's points into a named sub-score.
    #[serde(default)]
    pub category: Option<String>,
}

/// The type-specific shape of a question.
///
/// Each variant carries only the fields relevant to its type; fields of an
/// inactive type do not exist and are never validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    /// A fixed set of options, each mapping to a point value.
    MultipleChoice {
        /// Ordered option texts presented to the user.
        #[serde(default)]
        options: Vec<String>,
        /// Option text to point value. Takes precedence over `points`.
        #[serde(default)]
        score_mapping: Option<BTreeMap<String, i64>>,
        /// Point values positionally aligned with `options`, used when
        /// `score_mapping` is absent.
        #[serde(default)]
        points: Option<Vec<i64>>,
    },
    /// A numeric scale; the submitted number is the point value.
    Scale {
        #[serde(default)]
        scale_min: Option<i64>,
        #[serde(default)]
        scale_max: Option<i64>,
    },
    /// Free text; never contributes points.
    Text,
}

impl QuestionKind {
    /// The wire tag for this kind ("multiple-choice", "scale", "text").
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple-choice",
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::Text => "text",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One band of a result-interpretation table.
///
/// Bounds are inclusive on both ends. Ranges belonging to one quiz must not
/// overlap, but gaps between them are permitted; a score falling in no range
/// gets a default result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRange {
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Short label shown as the result headline.
    pub status: String,
    /// Longer explanatory text.
    #[serde(default)]
    pub description: String,
    /// Presentation hint, opaque to the core.
    #[serde(default)]
    pub color: Option<String>,
}

impl ScoreRange {
    /// Whether `score` falls within this closed interval.
    pub fn contains(&self, score: i64) -> bool {
        self.min <= score && score <= self.max
    }

    /// Closed-interval overlap test against another range.
    pub fn overlaps(&self, other: &ScoreRange) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

/// A complete authored assessment: metadata plus ordered questions and
/// score ranges.
///
/// Mutated only by the authoring workflow; read-only once handed to the
/// scorer. Revisions replace the whole definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDef {
    /// Display title.
    pub title: String,
    /// URL-safe identifier: lowercase letters, digits, and hyphens.
    pub slug: String,
    /// Description shown before taking the quiz.
    #[serde(default)]
    pub description: String,
    /// Ordered question list.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Ordered result-interpretation bands.
    #[serde(default)]
    pub score_ranges: Vec<ScoreRange>,
}

/// A single submitted answer, as recorded by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The id of the question this answers.
    pub question_id: String,
    /// The coerced value: numeric for scale questions, text otherwise.
    pub value: AnswerValue,
}

/// A submitted value after coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
}
