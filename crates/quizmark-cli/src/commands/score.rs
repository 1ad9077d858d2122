//! The `quizmark score` command.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizmark_core::report::ResultRecord;
use quizmark_core::scorer::{calculate_max_score, calculate_score};

pub fn execute(
    quiz_path: PathBuf,
    answer_args: Vec<String>,
    answers_file: Option<PathBuf>,
    multiplier: Option<i64>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let quiz = quizmark_core::parser::parse_quiz(&quiz_path)?;

    let mut submission: HashMap<String, String> = HashMap::new();

    if let Some(path) = &answers_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers from {}", path.display()))?;
        let parsed: HashMap<String, String> =
            serde_json::from_str(&content).context("failed to parse answers JSON")?;
        for (id, value) in parsed {
            submission.insert(submission_key(&id), value);
        }
    }

    for arg in &answer_args {
        let (id, value) = arg
            .split_once('=')
            .with_context(|| format!("invalid --answer '{arg}', expected question-id=value"))?;
        submission.insert(submission_key(id.trim()), value.to_string());
    }

    tracing::debug!("scoring {} submitted values", submission.len());

    let score = calculate_score(&submission, &quiz.questions, &quiz.score_ranges, multiplier);
    let max_score = calculate_max_score(&quiz.questions, multiplier);
    let record = ResultRecord::from_score(&quiz, score, max_score);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&record)?),
        _ => print_record(&record),
    }

    if let Some(dir) = &output {
        std::fs::create_dir_all(dir)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = dir.join(format!("result-{}-{timestamp}.json", record.quiz_slug));
        record.save_json(&path)?;
        eprintln!("Result saved to: {}", path.display());
    }

    Ok(())
}

/// Raw form input arrives keyed `question_{id}`; accept either shape.
fn submission_key(id: &str) -> String {
    if id.starts_with("question_") {
        id.to_string()
    } else {
        format!("question_{id}")
    }
}

fn print_record(record: &ResultRecord) {
    println!("Quiz: {}", record.quiz_title);
    println!(
        "Score: {}/{} ({} answered)",
        record.total_score,
        record.max_score,
        record.answers.len()
    );
    println!("Result: {}", record.result_message);
    println!("  {}", record.result_description);

    if let Some(sub_scores) = &record.sub_scores {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Score"]);
        for (category, score) in sub_scores {
            table.add_row(vec![Cell::new(category), Cell::new(score)]);
        }
        println!("\n{table}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_key_prefixes_bare_ids() {
        assert_eq!(submission_key("q1"), "question_q1");
        assert_eq!(submission_key("question_q1"), "question_q1");
    }
}
