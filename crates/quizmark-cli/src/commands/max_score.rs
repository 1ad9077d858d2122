//! The `quizmark max-score` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizmark_core::scorer::calculate_max_score;

pub fn execute(quiz_path: PathBuf, multiplier: Option<i64>) -> Result<()> {
    let quiz = quizmark_core::parser::parse_quiz(&quiz_path)?;

    let mut table = Table::new();
    table.set_header(vec!["Question", "Type", "Max points"]);
    for question in &quiz.questions {
        // Per-question contribution, before the multiplier.
        let max = calculate_max_score(std::slice::from_ref(question), None);
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(question.kind.tag()),
            Cell::new(max),
        ]);
    }

    println!("Quiz: {}", quiz.title);
    println!("{table}");
    println!(
        "Maximum score: {}",
        calculate_max_score(&quiz.questions, multiplier)
    );

    Ok(())
}
