//! Extracts todo tasks from a curriculum's list items.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum tasks taken from one curriculum.
pub const MAX_TASKS_PER_COURSE: usize = 8;

/// Titles shorter than this are treated as labels, not tasks.
const MIN_TITLE_CHARS: usize = 10;

/// Due dates are spread over this many days from today.
const DUE_SPREAD_DAYS: usize = 30;

static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+\.|[-*+])\s+(.+)$").expect("task line regex is valid")
});
static SECTION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(module|phase|week|chapter)").expect("section label regex is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// `{course}-{line index}`; identical across re-parses of the same text.
    pub id: String,
    pub title: String,
    /// Display string such as `Jan 6` or `Next week`.
    pub due: String,
    pub done: bool,
    pub course_title: String,
}

impl Task {
    fn new(id: String, title: &str, due: String, course_title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            due,
            done: false,
            course_title: course_title.to_string(),
        }
    }
}

/// Turns list items in `curriculum` into at most
/// [`MAX_TASKS_PER_COURSE`] tasks, or three placeholder tasks when no item
/// qualifies.
pub fn parse_curriculum_to_tasks(
    curriculum: &str,
    course_title: &str,
    today: NaiveDate,
) -> Vec<Task> {
    let lines: Vec<&str> = curriculum.split('\n').collect();

    let mut tasks: Vec<Task> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let caps = TASK_LINE.captures(line.trim())?;
            let title = caps[1].trim();
            if title.chars().count() < MIN_TITLE_CHARS || SECTION_LABEL.is_match(title) {
                return None;
            }
            Some(Task::new(
                format!("{course_title}-{i}"),
                title,
                due_label(today, i, lines.len()),
                course_title,
            ))
        })
        .take(MAX_TASKS_PER_COURSE)
        .collect();

    if tasks.is_empty() {
        log::debug!("No tasks found in curriculum for '{course_title}', using defaults");
        tasks = [
            ("Review course materials", "This week"),
            ("Complete first assignment", "Next week"),
            ("Practice key concepts", "In 2 weeks"),
        ]
        .into_iter()
        .enumerate()
        .map(|(n, (title, due))| {
            Task::new(
                format!("{course_title}-default-{}", n + 1),
                title,
                due.to_string(),
                course_title,
            )
        })
        .collect();
    }

    tasks
}

fn due_label(today: NaiveDate, index: usize, total: usize) -> String {
    let days_ahead = index * DUE_SPREAD_DAYS / total.max(1) + 1;
    today
        .checked_add_days(Days::new(days_ahead as u64))
        .unwrap_or(today)
        .format("%b %-d")
        .to_string()
}
