use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::io::{LocalStore, StoreError};
use crate::plan::{Category, Lesson};

/// Store key holding learner progress.
pub const PROGRESS_KEY: &str = "learningProgress";

/// XP needed per level.
pub const XP_PER_LEVEL: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedLesson {
    pub id: String,
    pub title: String,
    pub category: String,
    pub saved_at: DateTime<Utc>,
    pub progress: u8,
}

impl SavedLesson {
    /// Bookmark for `lesson`, labelled with its category title.
    pub fn new(lesson: &Lesson, category: &Category, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            category: category.title.clone(),
            saved_at,
            progress: 0,
        }
    }
}

/// Learner-wide XP, hearts and saved lessons.
///
/// Fields missing from stored JSON take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearnerProgress {
    pub xp: u32,
    pub hearts: u32,
    pub max_hearts: u32,
    pub streak: u32,
    pub level: u32,
    pub lessons_completed: u32,
    pub saved_lessons: Vec<SavedLesson>,
}

impl Default for LearnerProgress {
    fn default() -> Self {
        Self {
            xp: 0,
            hearts: 5,
            max_hearts: 5,
            streak: 0,
            level: 1,
            lessons_completed: 0,
            saved_lessons: vec![],
        }
    }
}

impl LearnerProgress {
    pub fn load(store: &LocalStore) -> Result<Self, StoreError> {
        store.get_or_default(PROGRESS_KEY)
    }

    pub fn save(&self, store: &LocalStore) -> Result<(), StoreError> {
        store.set(PROGRESS_KEY, self)
    }

    /// Adds XP and returns the new level when it went up.
    pub fn add_xp(&mut self, amount: u32) -> Option<u32> {
        self.xp = self.xp.saturating_add(amount);
        let level = self.xp / XP_PER_LEVEL + 1;
        if level > self.level {
            self.level = level;
            Some(level)
        } else {
            None
        }
    }

    /// Counts a finished lesson and awards its XP.
    pub fn complete_lesson(&mut self, xp: u32) -> Option<u32> {
        self.lessons_completed = self.lessons_completed.saturating_add(1);
        self.add_xp(xp)
    }

    /// Bookmarks a lesson, replacing an earlier bookmark with the same id.
    pub fn save_lesson(&mut self, lesson: SavedLesson) {
        match self.saved_lessons.iter_mut().find(|l| l.id == lesson.id) {
            Some(existing) => *existing = lesson,
            None => self.saved_lessons.push(lesson),
        }
    }

    /// Returns false when no hearts were left to lose.
    pub fn lose_heart(&mut self) -> bool {
        if self.hearts == 0 {
            return false;
        }
        self.hearts -= 1;
        true
    }

    pub fn regain_heart(&mut self) {
        self.hearts = self.hearts.saturating_add(1).min(self.max_hearts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{Topic, categories_for, find_lesson};
    use crate::tests::create_test_store;
    use pretty_assertions::assert_eq;

    fn saved(id: &str, title: &str) -> SavedLesson {
        SavedLesson {
            id: id.to_string(),
            title: title.to_string(),
            category: "🐍 Python Fundamentals".to_string(),
            saved_at: Utc::now(),
            progress: 0,
        }
    }

    #[test]
    fn test_defaults() {
        let p = LearnerProgress::default();
        assert_eq!((p.hearts, p.max_hearts, p.level), (5, 5, 1));
    }

    #[test]
    fn test_level_up_at_thousand_xp() {
        let mut p = LearnerProgress::default();
        assert_eq!(p.complete_lesson(999), None);
        assert_eq!(p.complete_lesson(1), Some(2));
        assert_eq!(p.complete_lesson(25), None);
        assert_eq!(p.add_xp(2000), Some(4));
        assert_eq!(p.lessons_completed, 3);
    }

    #[test]
    fn test_save_lesson_replaces_same_id() {
        let mut p = LearnerProgress::default();
        p.save_lesson(saved("lesson-1", "Old"));
        p.save_lesson(saved("lesson-2", "Other"));
        p.save_lesson(saved("lesson-1", "New"));

        let titles: Vec<&str> = p.saved_lessons.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Other"]);
    }

    #[test]
    fn test_saved_lesson_from_plan_lesson() {
        let categories = categories_for(Topic::Python, "python");
        let (category, lesson) = find_lesson(&categories, "lesson-4").unwrap();

        let saved = SavedLesson::new(lesson, category, Utc::now());

        assert_eq!(saved.id, "lesson-4");
        assert_eq!(saved.title, lesson.title);
        assert_eq!(saved.category, category.title);
        assert_eq!(saved.progress, 0);
    }

    #[test]
    fn test_hearts_stay_in_range() {
        let mut p = LearnerProgress::default();
        p.regain_heart();
        assert_eq!(p.hearts, 5);
        for _ in 0..5 {
            assert!(p.lose_heart());
        }
        assert!(!p.lose_heart());
        assert_eq!(p.hearts, 0);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        // Given stored progress written before hearts were tracked
        let (_dir, store) = create_test_store();
        std::fs::write(
            store.root().join("learningProgress.json"),
            r#"{"xp": 1500, "level": 2}"#,
        )
        .unwrap();

        // When loading it
        let p = LearnerProgress::load(&store).unwrap();

        // Then missing fields are filled in
        assert_eq!(p.xp, 1500);
        assert_eq!(p.hearts, 5);
        assert!(p.saved_lessons.is_empty());
    }
}
