pub mod goal;
pub mod progress;
pub mod todo;

pub use goal::{GoalHistory, GoalRecord, GoalRequest, GoalStatus, Progress};
pub use progress::{LearnerProgress, SavedLesson};
pub use todo::{CourseTasks, TaskState, TodoState, todo_board};
