//! Persisted score records with JSON persistence.
//!
//! The scorer itself is pure; this module is the record the surrounding
//! application stores after a submission has been scored, carrying the
//! computed score alongside the raw answers and quiz identity.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Answer, QuizDef};
use crate::scorer::ScoreResult;

/// One scored submission, ready for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the submission was scored.
    pub created_at: DateTime<Utc>,
    /// Slug of the quiz that was taken.
    pub quiz_slug: String,
    /// Title of the quiz that was taken.
    pub quiz_title: String,
    /// Total score after any multiplier.
    pub total_score: i64,
    /// The best score a full submission could have reached.
    pub max_score: i64,
    /// Per-category totals, when any question contributed to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_scores: Option<BTreeMap<String, i64>>,
    /// Matched result headline.
    pub result_message: String,
    /// Matched result description.
    pub result_description: String,
    /// The answers consumed, in definition order.
    pub answers: Vec<Answer>,
}

impl ResultRecord {
    /// Build a record from a scored submission.
    pub fn from_score(quiz: &QuizDef, score: ScoreResult, max_score: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_slug: quiz.slug.clone(),
            quiz_title: quiz.title.clone(),
            total_score: score.total_score,
            max_score,
            sub_scores: score.sub_scores,
            result_message: score.result_message,
            result_description: score.result_description,
            answers: score.answers,
        }
    }

    /// Save the record as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize record")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write record to {}", path.display()))?;
        Ok(())
    }

    /// Load a record from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read record from {}", path.display()))?;
        let record: ResultRecord =
            serde_json::from_str(&content).context("failed to parse record JSON")?;
        Ok(record)
    }
}
