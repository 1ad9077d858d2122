//! TOML quiz definition parser.
//!
//! Loads quiz definitions from TOML files and directories. Parsing is
//! structural only; semantic checks (slug shape, range overlap, option
//! counts) belong to the [`validator`](crate::validator).

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DefinitionError;
use crate::model::{Question, QuestionKind, QuizDef, ScoreRange};

/// Intermediate TOML structure for parsing quiz definition files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
    #[serde(default)]
    ranges: Vec<TomlRange>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: String,
    slug: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(rename = "type")]
    question_type: TomlQuestionType,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    score_mapping: Option<BTreeMap<String, i64>>,
    #[serde(default)]
    points: Option<Vec<i64>>,
    #[serde(default)]
    scale_min: Option<i64>,
    #[serde(default)]
    scale_max: Option<i64>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TomlQuestionType {
    MultipleChoice,
    Scale,
    Text,
}

#[derive(Debug, Deserialize)]
struct TomlRange {
    min: i64,
    max: i64,
    #[serde(default)]
    status: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    color: Option<String>,
}

/// Parse a single TOML file into a `QuizDef`.
pub fn parse_quiz(path: &Path) -> Result<QuizDef, DefinitionError> {
    let content = std::fs::read_to_string(path).map_err(|source| DefinitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `QuizDef` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<QuizDef, DefinitionError> {
    let parsed: TomlQuizFile =
        toml::from_str(content).map_err(|source| DefinitionError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let kind = match q.question_type {
                TomlQuestionType::MultipleChoice => QuestionKind::MultipleChoice {
                    options: q.options,
                    score_mapping: q.score_mapping,
                    points: q.points,
                },
                TomlQuestionType::Scale => QuestionKind::Scale {
                    scale_min: q.scale_min,
                    scale_max: q.scale_max,
                },
                TomlQuestionType::Text => QuestionKind::Text,
            };
            Question {
                id: q.id,
                text: q.text,
                kind,
                category: q.category,
            }
        })
        .collect();

    let score_ranges = parsed
        .ranges
        .into_iter()
        .map(|r| ScoreRange {
            min: r.min,
            max: r.max,
            status: r.status,
            description: r.description,
            color: r.color,
        })
        .collect();

    Ok(QuizDef {
        title: parsed.quiz.title,
        slug: parsed.quiz.slug,
        description: parsed.quiz.description,
        questions,
        score_ranges,
    })
}

/// Recursively load all `.toml` quiz definitions from a directory.
///
/// Files that fail to parse are skipped with a warning so one broken
/// definition does not hide the rest.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<QuizDef>, DefinitionError> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        return Err(DefinitionError::NotADirectory(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| DefinitionError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| DefinitionError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
title = "Stress Check"
slug = "stress-check"
description = "A short stress self-assessment"

[[questions]]
id = "q1"
text = "How stressed do you feel today?"
type = "scale"
scale_min = 1
scale_max = 10
category = "Stress"

[[questions]]
id = "q2"
text = "How often do you sleep badly?"
type = "multiple-choice"
options = ["Never", "Sometimes", "Often"]

[questions.score_mapping]
Never = 0
Sometimes = 2
Often = 4

[[questions]]
id = "q3"
text = "Anything else you want to share?"
type = "text"

[[ranges]]
min = 0
max = 5
status = "Low"
description = "You seem to be doing fine."
color = "green"

[[ranges]]
min = 6
max = 14
status = "Elevated"
description = "Consider taking a break."
color = "orange"
"#;

    #[test]
    fn parse_valid_toml() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(quiz.slug, "stress-check");
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.score_ranges.len(), 2);
        assert_eq!(quiz.questions[0].kind.tag(), "scale");
        assert_eq!(quiz.questions[0].category.as_deref(), Some("Stress"));

        match &quiz.questions[1].kind {
            QuestionKind::MultipleChoice {
                options,
                score_mapping,
                ..
            } => {
                assert_eq!(options.len(), 3);
                assert_eq!(score_mapping.as_ref().unwrap()["Often"], 4);
            }
            other => panic!("expected multiple-choice, got {other}"),
        }
    }

    #[test]
    fn parse_minimal_definition() {
        let toml = r#"
[quiz]
title = "Minimal"
slug = "minimal"

[[questions]]
id = "q1"
text = "Rate it"
type = "scale"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap();
        assert!(quiz.description.is_empty());
        assert!(quiz.score_ranges.is_empty());
        match &quiz.questions[0].kind {
            QuestionKind::Scale {
                scale_min,
                scale_max,
            } => {
                assert!(scale_min.is_none());
                assert!(scale_max.is_none());
            }
            other => panic!("expected scale, got {other}"),
        }
    }

    #[test]
    fn parse_positional_points() {
        let toml = r#"
[quiz]
title = "Points"
slug = "points"

[[questions]]
id = "q1"
text = "Pick"
type = "multiple-choice"
options = ["A", "B"]
points = [1, 5]
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("test.toml")).unwrap();
        match &quiz.questions[0].kind {
            QuestionKind::MultipleChoice {
                score_mapping,
                points,
                ..
            } => {
                assert!(score_mapping.is_none());
                assert_eq!(points.as_deref(), Some(&[1, 5][..]));
            }
            other => panic!("expected multiple-choice, got {other}"),
        }
    }

    #[test]
    fn unknown_question_type_is_a_parse_error() {
        let toml = r#"
[quiz]
title = "Bad"
slug = "bad"

[[questions]]
id = "q1"
text = "Pick"
type = "dropdown"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(matches!(err, DefinitionError::Parse { .. }));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_quiz_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn load_directory_recurses_and_skips_broken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("broken.toml"), "not toml [").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("also-good.toml"), VALID_TOML).unwrap();

        let quizzes = load_quiz_directory(dir.path()).unwrap();
        assert_eq!(quizzes.len(), 2);
    }

    #[test]
    fn load_directory_on_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("quiz.toml");
        std::fs::write(&file, VALID_TOML).unwrap();
        let err = load_quiz_directory(&file).unwrap_err();
        assert!(matches!(err, DefinitionError::NotADirectory(_)));
    }
}
