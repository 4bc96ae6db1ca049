use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::io::{LocalStore, StoreError};

/// Store key holding the goal history.
pub const HISTORY_KEY: &str = "strive-goal-history";

/// Goals kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

pub const DEFAULT_NOTES: &str = "No additional notes";

/// What the learner asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub goal: String,
    /// `YYYY-MM-DD`, or empty when not given.
    pub start_date: String,
    pub end_date: String,
    pub details: String,
    /// Use the gamified plan generator instead of a free-form curriculum.
    pub structured: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub status: GoalStatus,
    /// 0 to 100.
    pub percent: u8,
}

/// A saved goal together with its curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: Uuid,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub details: String,
    pub structured: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// `None` when generation failed and nothing was saved.
    pub curriculum: Option<String>,
    #[serde(default)]
    pub progress: Progress,
    pub notes: String,
}

impl GoalRecord {
    pub fn new(request: &GoalRequest, curriculum: Option<String>, now: DateTime<Utc>) -> Self {
        let notes = match request.details.trim() {
            "" => DEFAULT_NOTES.to_string(),
            details => details.to_string(),
        };
        Self {
            id: Uuid::new_v4(),
            title: request.goal.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            details: request.details.clone(),
            structured: request.structured,
            created_at: now,
            updated_at: None,
            curriculum,
            progress: Progress::default(),
            notes,
        }
    }

    /// The request this goal was created from, for regenerating its plan.
    pub fn request(&self) -> GoalRequest {
        GoalRequest {
            goal: self.title.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            details: self.details.clone(),
            structured: self.structured,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress.status == GoalStatus::Completed
    }
}

/// Saved goals, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalHistory {
    goals: Vec<GoalRecord>,
}

impl GoalHistory {
    pub fn load(store: &LocalStore) -> Result<Self, StoreError> {
        store.get_or_default(HISTORY_KEY)
    }

    pub fn save(&self, store: &LocalStore) -> Result<(), StoreError> {
        store.set(HISTORY_KEY, self)
    }

    /// Inserts `record` at the front and drops the oldest goals beyond
    /// `limit`.
    pub fn add(&mut self, record: GoalRecord, limit: usize) {
        self.goals.insert(0, record);
        if self.goals.len() > limit {
            log::info!("Trimming goal history to {limit} entries");
            self.goals.truncate(limit);
        }
    }

    pub fn goals(&self) -> &[GoalRecord] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&GoalRecord> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Swaps in a regenerated curriculum. Returns false for an unknown id.
    pub fn replace_curriculum(&mut self, id: Uuid, curriculum: String, now: DateTime<Utc>) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.curriculum = Some(curriculum);
                goal.updated_at = Some(now);
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, id: Uuid, status: GoalStatus) -> bool {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.progress.status = status;
                if status == GoalStatus::Completed {
                    goal.progress.percent = 100;
                }
                true
            }
            None => false,
        }
    }
}
