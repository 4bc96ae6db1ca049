use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::io::{LocalStore, StoreError};
use crate::models::goal::GoalRecord;
use crate::tasks::{Task, parse_curriculum_to_tasks};

/// Store key holding task completion state.
pub const TODO_KEY: &str = "strive-todo-tasks";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    pub done: bool,
}

/// Completion state keyed by task id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoState {
    tasks: BTreeMap<String, TaskState>,
}

impl TodoState {
    pub fn load(store: &LocalStore) -> Result<Self, StoreError> {
        store.get_or_default(TODO_KEY)
    }

    pub fn save(&self, store: &LocalStore) -> Result<(), StoreError> {
        store.set(TODO_KEY, self)
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.tasks.get(id).is_some_and(|t| t.done)
    }

    /// Flips a task and returns its new state. A task never toggled before
    /// becomes done.
    pub fn toggle(&mut self, id: &str) -> bool {
        let state = self.tasks.entry(id.to_string()).or_insert(TaskState { done: false });
        state.done = !state.done;
        state.done
    }
}

/// Tasks for one course title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTasks {
    pub course_title: String,
    pub tasks: Vec<Task>,
}

/// Tasks of every goal that is not completed and has a non-empty curriculum,
/// grouped by course title in history order. Goals sharing a title share a
/// group.
pub fn todo_board(goals: &[GoalRecord], state: &TodoState, today: NaiveDate) -> Vec<CourseTasks> {
    let mut board: Vec<CourseTasks> = vec![];

    for goal in goals.iter().filter(|g| !g.is_completed()) {
        let Some(curriculum) = goal.curriculum.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };

        let mut tasks = parse_curriculum_to_tasks(curriculum, &goal.title, today);
        for task in &mut tasks {
            task.done = state.is_done(&task.id);
        }

        match board.iter_mut().find(|c| c.course_title == goal.title) {
            Some(group) => group.tasks.extend(tasks),
            None => board.push(CourseTasks {
                course_title: goal.title.clone(),
                tasks,
            }),
        }
    }

    board
}
