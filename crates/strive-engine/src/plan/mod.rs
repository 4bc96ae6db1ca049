//! # Learning Plans
//!
//! Builds the gamified, Duolingo-style curriculum for a goal from static
//! lesson tables. No model is involved; the same goal and dates always
//! produce the same plan.
//!
//! ## Modules
//!
//! - **`content`**: lesson bodies keyed by lesson key, plus per-topic categories
//! - **`calendar`**: day-by-day schedule with weekly rest days
//! - **`gamification`**: XP, hearts, streaks, achievements, rubrics
//! - **`template`**: the plain markdown fallback curriculum

pub mod calendar;
pub mod content;
pub mod gamification;
pub mod template;

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use calendar::{DayLesson, PlanDay, generate_calendar};
pub use content::{
    Category, Lesson, LessonContent, categories_for, default_content, find_lesson, lesson_content,
};
pub use gamification::{AdaptiveRules, Gamification, Rubric, assessment_rubrics, difficulty_stars};
pub use template::fallback_curriculum;

/// Date format accepted for plan start and end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days of the schedule included in [`LearningPlan::to_markdown`].
const SCHEDULE_PREVIEW_DAYS: usize = 14;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| PlanError::InvalidDate(s.to_string()))
}

/// Subject area a goal falls into, which selects its lesson tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    Python,
    JavaScript,
    Design,
    Generic,
}

impl Topic {
    /// Picks a topic from keywords in the goal text, case-insensitively.
    pub fn detect(goal: &str) -> Self {
        let goal = goal.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| goal.contains(w));
        if has(&["python", "programming"]) {
            Topic::Python
        } else if has(&["javascript", "web"]) {
            Topic::JavaScript
        } else if has(&["design", "ui"]) {
            Topic::Design
        } else {
            Topic::Generic
        }
    }
}

/// Study time the learner can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConstraints {
    pub daily_minutes: u32,
    pub days_per_week: u32,
}

impl Default for PlanConstraints {
    fn default() -> Self {
        Self {
            daily_minutes: 60,
            days_per_week: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    /// Whole weeks in the range times the study days per week, with
    /// study days clamped to `1..=7`.
    pub available_days: u32,
}

impl Timeline {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        constraints: &PlanConstraints,
    ) -> Result<Self, PlanError> {
        if end_date < start_date {
            return Err(PlanError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        let total_days = u32::try_from((end_date - start_date).num_days()).unwrap_or(u32::MAX);
        let weeks = total_days / calendar::WEEK_LENGTH as u32;
        let study_days = constraints.days_per_week.clamp(1, calendar::WEEK_LENGTH as u32);
        Ok(Self {
            start_date,
            end_date,
            total_days,
            available_days: weeks.saturating_mul(study_days),
        })
    }
}

/// A complete structured plan for one goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub goal: String,
    pub topic: Topic,
    pub timeline: Timeline,
    pub categories: Vec<Category>,
    pub gamification: Gamification,
    pub adaptive_rules: AdaptiveRules,
    pub calendar: Vec<PlanDay>,
    pub assessment: Vec<Rubric>,
}

impl LearningPlan {
    pub fn generate(
        goal: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        constraints: &PlanConstraints,
    ) -> Result<Self, PlanError> {
        let timeline = Timeline::new(start_date, end_date, constraints)?;
        let topic = Topic::detect(goal);
        log::debug!(
            "Generating {topic:?} plan for '{goal}' over {} available days",
            timeline.available_days
        );

        Ok(Self {
            goal: goal.to_string(),
            topic,
            categories: categories_for(topic, goal),
            gamification: Gamification::default(),
            adaptive_rules: AdaptiveRules::default(),
            calendar: generate_calendar(
                start_date,
                end_date,
                timeline.available_days as usize,
                constraints.daily_minutes,
            ),
            assessment: assessment_rubrics(),
            timeline,
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.categories.iter().map(|c| c.lessons.len()).sum()
    }

    /// Renders the plan as markdown for the chat transcript and the todo
    /// extractor.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let t = &self.timeline;

        writeln!(md, "# 🎯 Goal: {}", self.goal).unwrap();
        writeln!(md).unwrap();
        writeln!(md, "**Timeline:** {} to {}", t.start_date, t.end_date).unwrap();
        writeln!(
            md,
            "**Total Days:** {} | **Available Days:** {}",
            t.total_days, t.available_days
        )
        .unwrap();
        writeln!(md).unwrap();
        writeln!(md, "## 📚 Learning Categories").unwrap();

        for category in &self.categories {
            writeln!(md, "### {}", category.title).unwrap();
            writeln!(
                md,
                "{} ({} lessons, {})",
                category.description,
                category.lessons.len(),
                difficulty_stars(category.average_difficulty())
            )
            .unwrap();
            for (n, lesson) in category.lessons.iter().enumerate() {
                writeln!(
                    md,
                    "{}. **{}**: {} ({} min, +{} XP)",
                    n + 1,
                    lesson.title,
                    lesson.description,
                    lesson.duration,
                    lesson.xp
                )
                .unwrap();
            }
        }

        writeln!(md).unwrap();
        writeln!(md, "## 📅 Daily Schedule").unwrap();
        for day in self.calendar.iter().take(SCHEDULE_PREVIEW_DAYS) {
            let label = day.date.format("%b %-d");
            if day.rest_day {
                writeln!(md, "- {label} ({}): Rest Day", day.day_of_week).unwrap();
            } else {
                writeln!(
                    md,
                    "- {label} ({}): {} min",
                    day.day_of_week, day.total_minutes
                )
                .unwrap();
            }
        }

        let g = &self.gamification;
        writeln!(md).unwrap();
        writeln!(md, "## 🎮 Gamification").unwrap();
        writeln!(
            md,
            "- 💎 **XP**: +{} per lesson, +{} for a perfect score",
            g.xp.lesson_complete, g.xp.perfect_score
        )
        .unwrap();
        writeln!(
            md,
            "- ❤️ **Hearts**: start with {}, lose {} per mistake",
            g.hearts.starting, g.hearts.lose_on_mistake
        )
        .unwrap();
        writeln!(
            md,
            "- 🔥 **Streaks**: +{} daily, +{} weekly, +{} monthly",
            g.streaks.daily, g.streaks.weekly, g.streaks.monthly
        )
        .unwrap();
        md.push_str("- 🏆 **Achievements**: ");
        let titles: Vec<&str> = g.achievements.iter().map(|a| a.title.as_str()).collect();
        md.push_str(&titles.join(", "));
        md.push('\n');

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[rstest]
    #[case("Learn Python in a month", Topic::Python)]
    #[case("Get better at PROGRAMMING", Topic::Python)]
    #[case("Master JavaScript", Topic::JavaScript)]
    #[case("Build a web app", Topic::JavaScript)]
    #[case("Graphic design basics", Topic::Design)]
    #[case("Run a marathon", Topic::Generic)]
    fn detects_topic(#[case] goal: &str, #[case] topic: Topic) {
        assert_eq!(Topic::detect(goal), topic);
    }

    #[test]
    fn timeline_counts_whole_weeks() {
        let t = Timeline::new(
            date("2025-01-01"),
            date("2025-01-31"),
            &PlanConstraints::default(),
        )
        .unwrap();
        assert_eq!(t.total_days, 30);
        // 4 whole weeks at 5 days each
        assert_eq!(t.available_days, 20);
    }

    #[rstest]
    #[case(u32::MAX, 8 * 7)]
    #[case(0, 8)]
    #[case(3, 8 * 3)]
    fn study_days_are_clamped_to_a_week(#[case] days_per_week: u32, #[case] expected: u32) {
        // Given a 59 day range, which holds 8 whole weeks
        let constraints = PlanConstraints {
            daily_minutes: 60,
            days_per_week,
        };

        // When building a plan
        let plan = LearningPlan::generate(
            "x",
            date("2025-01-01"),
            date("2025-03-01"),
            &constraints,
        )
        .unwrap();

        // Then available days never exceed seven per week
        assert_eq!(plan.timeline.available_days, expected);
        assert!(plan.calendar.len() <= expected as usize);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = Timeline::new(
            date("2025-02-01"),
            date("2025-01-01"),
            &PlanConstraints::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidDateRange { .. }));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(matches!(parse_date("01/02/2025"), Err(PlanError::InvalidDate(_))));
    }

    #[test]
    fn generates_python_plan() {
        let plan = LearningPlan::generate(
            "Learn Python",
            date("2025-01-01"),
            date("2025-01-31"),
            &PlanConstraints::default(),
        )
        .unwrap();
        assert_eq!(plan.topic, Topic::Python);
        assert_eq!(plan.lesson_count(), 10);
        assert_eq!(plan.calendar.len(), 20);
        assert_eq!(plan.assessment.len(), 4);
    }

    #[test]
    fn markdown_renders_with_balanced_lists() {
        let plan = LearningPlan::generate(
            "Learn Python",
            date("2025-01-06"),
            date("2025-02-28"),
            &PlanConstraints::default(),
        )
        .unwrap();
        let md = plan.to_markdown();
        assert!(md.contains("1. **Setting Up Python Environment**: "));
        assert!(md.contains("- Jan 6 (Monday): 60 min"));
        assert!(md.contains("- Jan 12 (Sunday): Rest Day"));

        let html = crate::render::render(&md);
        assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
        assert_eq!(html.matches("<ol>").count(), 4);
    }
}
