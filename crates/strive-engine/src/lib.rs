pub mod conversation;
pub mod io;
pub mod models;
pub mod plan;
pub mod render;
pub mod tasks;
pub mod typewriter;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use conversation::{ConversationState, LanguageModel, ModelError, Turn, generate_curriculum};
pub use io::{LocalStore, StoreError};
pub use models::*;
pub use plan::{LearningPlan, PlanConstraints, PlanError, Topic, fallback_curriculum, parse_date};
pub use render::{format_bold, render, render_fragments, render_inline};
pub use tasks::{Task, parse_curriculum_to_tasks};
pub use typewriter::{Frame, Typewriter, render_frames};
