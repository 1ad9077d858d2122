//! The `quizmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quizzes/example.toml");
    println!("  2. Run: quizmark validate --quiz quizzes/example.toml");
    println!("  3. Run: quizmark score --quiz quizzes/example.toml --answer mood=7");

    Ok(())
}

const EXAMPLE_QUIZ: &str = r#"[quiz]
title = "Wellbeing Check"
slug = "wellbeing-check"
description = "A short self-assessment of stress and sleep"

[[questions]]
id = "mood"
text = "How would you rate your mood today?"
type = "scale"
scale_min = 1
scale_max = 10
category = "Mood"

[[questions]]
id = "sleep"
text = "How often do you sleep badly?"
type = "multiple-choice"
options = ["Never", "Sometimes", "Often"]
category = "Sleep"

[questions.score_mapping]
Never = 4
Sometimes = 2
Often = 0

[[questions]]
id = "notes"
text = "Anything else you want to share?"
type = "text"

[[ranges]]
min = 0
max = 6
status = "Needs attention"
description = "Your responses suggest things have been hard lately."
color = "red"

[[ranges]]
min = 7
max = 14
status = "Doing well"
description = "Your responses suggest you are doing well."
color = "green"
"#;
