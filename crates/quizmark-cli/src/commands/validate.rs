//! The `quizmark validate` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;

use quizmark_core::validator::{validate, Validation};

pub fn execute(quiz_path: PathBuf, format: String, strict: bool) -> Result<()> {
    let quizzes = if quiz_path.is_dir() {
        quizmark_core::parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![quizmark_core::parser::parse_quiz(&quiz_path)?]
    };

    let validations: Vec<(String, usize, Validation)> = quizzes
        .iter()
        .map(|q| (q.title.clone(), q.questions.len(), validate(q)))
        .collect();

    let invalid = validations.iter().filter(|(_, _, v)| !v.is_valid()).count();

    match format.as_str() {
        "json" => {
            let by_quiz: BTreeMap<&str, &BTreeMap<String, String>> = validations
                .iter()
                .map(|(title, _, v)| (title.as_str(), &v.errors))
                .collect();
            println!("{}", serde_json::to_string_pretty(&by_quiz)?);
        }
        _ => {
            for (title, question_count, validation) in &validations {
                println!("Quiz: {title} ({question_count} questions)");
                for (key, message) in &validation.errors {
                    println!("  [{key}] {message}");
                }
            }

            if invalid == 0 {
                println!("All quiz definitions valid.");
            } else {
                println!("\n{invalid} invalid definition(s) found.");
            }
        }
    }

    if strict && invalid > 0 {
        anyhow::bail!("{invalid} quiz definition(s) failed validation");
    }

    Ok(())
}
