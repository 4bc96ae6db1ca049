use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lessons are grouped into weeks; the last day of each week is a rest day.
pub const WEEK_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLesson {
    pub id: String,
    pub title: String,
    pub estimated_minutes: u32,
    pub difficulty: u8,
}

/// One scheduled day of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub date: NaiveDate,
    /// English weekday name, e.g. `Monday`.
    pub day_of_week: String,
    pub lessons: Vec<DayLesson>,
    pub total_minutes: u32,
    pub rest_day: bool,
}

/// Schedules one day per date from `start` while the date is not past
/// `end` and fewer than `available_days` days have been scheduled.
pub fn generate_calendar(
    start: NaiveDate,
    end: NaiveDate,
    available_days: usize,
    daily_minutes: u32,
) -> Vec<PlanDay> {
    let mut calendar = vec![];
    let mut date = start;

    while date <= end && calendar.len() < available_days {
        let index = calendar.len();
        calendar.push(PlanDay {
            date,
            day_of_week: date.format("%A").to_string(),
            lessons: vec![lesson_for_day(index)],
            total_minutes: daily_minutes,
            rest_day: is_rest_day(index),
        });
        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }

    calendar
}

fn lesson_for_day(index: usize) -> DayLesson {
    DayLesson {
        id: format!("lesson-{}", index + 1),
        title: format!("Lesson {}", index + 1),
        estimated_minutes: 15,
        difficulty: (index / WEEK_LENGTH + 1).min(5) as u8,
    }
}

fn is_rest_day(index: usize) -> bool {
    (index + 1) % WEEK_LENGTH == 0
}
