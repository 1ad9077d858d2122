use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizmark_core::model::{Question, QuestionKind, ScoreRange};
use quizmark_core::scorer::{calculate_max_score, calculate_score};
use quizmark_core::validator::validate;

fn make_questions(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Question {
                    id: format!("q{i}"),
                    text: format!("Scale question {i}"),
                    kind: QuestionKind::Scale {
                        scale_min: Some(1),
                        scale_max: Some(10),
                    },
                    category: Some(format!("Category {}", i % 5)),
                }
            } else {
                Question {
                    id: format!("q{i}"),
                    text: format!("Choice question {i}"),
                    kind: QuestionKind::MultipleChoice {
                        options: vec!["Never".into(), "Sometimes".into(), "Often".into()],
                        score_mapping: Some(
                            [("Never".to_string(), 0), ("Sometimes".to_string(), 2), ("Often".to_string(), 4)]
                                .into_iter()
                                .collect(),
                        ),
                        points: None,
                    },
                    category: None,
                }
            }
        })
        .collect()
}

fn make_submission(questions: &[Question]) -> HashMap<String, String> {
    questions
        .iter()
        .map(|q| {
            let value = match q.kind {
                QuestionKind::Scale { .. } => "7".to_string(),
                _ => "Often".to_string(),
            };
            (format!("question_{}", q.id), value)
        })
        .collect()
}

fn make_ranges(n: i64) -> Vec<ScoreRange> {
    (0..n)
        .map(|i| ScoreRange {
            min: i * 10,
            max: i * 10 + 9,
            status: format!("Band {i}"),
            description: format!("Band {i} description"),
            color: None,
        })
        .collect()
}

fn bench_calculate_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_score");

    for n in [10usize, 50, 200] {
        let questions = make_questions(n);
        let submission = make_submission(&questions);
        let ranges = make_ranges(20);

        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| {
                calculate_score(
                    black_box(&submission),
                    black_box(&questions),
                    black_box(&ranges),
                    Some(2),
                )
            })
        });
    }

    group.finish();
}

fn bench_max_score(c: &mut Criterion) {
    let questions = make_questions(200);
    c.bench_function("calculate_max_score/200_questions", |b| {
        b.iter(|| calculate_max_score(black_box(&questions), black_box(None)))
    });
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for n in [10usize, 50, 200] {
        let quiz = quizmark_core::model::QuizDef {
            title: "Benchmark".into(),
            slug: "benchmark".into(),
            description: "Benchmark quiz".into(),
            questions: make_questions(n),
            score_ranges: make_ranges(20),
        };

        group.bench_function(format!("{n}_questions"), |b| {
            b.iter(|| validate(black_box(&quiz)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculate_score, bench_max_score, bench_validate);
criterion_main!(benches);
