use std::io::Write;

use anyhow::{Result, bail};
use chrono::Utc;
use strive_engine::plan::{Category, Topic, categories_for, difficulty_stars, find_lesson};
use strive_engine::{LearnerProgress, LocalStore, SavedLesson};

/// What to do with the chosen lesson besides showing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Action {
    pub save: bool,
    pub complete: bool,
}

/// Lists the lessons for `goal`, or shows one lesson and applies `action`
/// to the stored learner progress.
pub fn run<W: Write>(
    store: &LocalStore,
    goal: &str,
    lesson_id: Option<&str>,
    action: Action,
    out: &mut W,
) -> Result<()> {
    let categories = categories_for(Topic::detect(goal), goal);
    let mut progress = LearnerProgress::load(store)?;

    let Some(lesson_id) = lesson_id else {
        return write_overview(&categories, &progress, out);
    };
    let Some((category, lesson)) = find_lesson(&categories, lesson_id) else {
        bail!("No lesson '{lesson_id}' for this goal");
    };

    write!(out, "{}", lesson.to_markdown())?;

    if action.save {
        progress.save_lesson(SavedLesson::new(lesson, category, Utc::now()));
        writeln!(out, "🔖 Saved '{}' to your lessons", lesson.title)?;
    }
    if action.complete {
        let level_up = progress.complete_lesson(lesson.xp);
        writeln!(out, "✅ Lesson complete! +{} XP ({} total)", lesson.xp, progress.xp)?;
        if let Some(level) = level_up {
            writeln!(out, "🎉 Level up! You reached level {level}")?;
        }
    }
    if action.save || action.complete {
        progress.save(store)?;
    }

    Ok(())
}

fn write_overview<W: Write>(
    categories: &[Category],
    progress: &LearnerProgress,
    out: &mut W,
) -> Result<()> {
    writeln!(
        out,
        "Level {} | {} XP | {}/{} hearts | {} lessons completed",
        progress.level,
        progress.xp,
        progress.hearts,
        progress.max_hearts,
        progress.lessons_completed
    )?;

    for category in categories {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            category.title,
            difficulty_stars(category.average_difficulty())
        )?;
        for lesson in &category.lessons {
            let mark = if progress.saved_lessons.iter().any(|s| s.id == lesson.id) {
                " 🔖"
            } else {
                ""
            };
            writeln!(
                out,
                "  {}  {} ({} min, +{} XP){mark}",
                lesson.id, lesson.title, lesson.duration, lesson.xp
            )?;
        }
    }

    Ok(())
}
