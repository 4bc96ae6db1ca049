use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use strive_engine::{GoalRequest, GoalStatus};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "strive", about = "Goal planner with streamed markdown curricula", version)]
pub struct Cli {
    /// Directory holding saved goals and progress [default: from config]
    #[arg(long, env = "STRIVE_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Open the interactive viewer when no command is given
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render markdown to HTML
    Render {
        /// Markdown file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print the growing frames of a streamed render
    Stream {
        /// Markdown file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Characters revealed per frame [default: from config]
        #[arg(long)]
        chunk: Option<usize>,
    },

    /// Generate a curriculum for a goal and save it to history
    Plan(GoalArgs),

    /// Answer a few clarifying questions, then save the resulting plan
    Chat(GoalArgs),

    /// Browse lessons for a goal, bookmark them and earn XP
    Lesson {
        /// Goal text used to pick the lesson tables
        goal: String,
        /// Lesson id such as `lesson-3`; lists every lesson when omitted
        lesson: Option<String>,
        /// Bookmark the lesson
        #[arg(long, requires = "lesson")]
        save: bool,
        /// Mark the lesson complete and earn its XP
        #[arg(long, requires = "lesson")]
        complete: bool,
    },

    /// List saved goals, most recent first
    History,

    /// Rebuild the curriculum of a saved goal
    Regenerate {
        /// Goal id
        id: Uuid,
    },

    /// Change the status of a saved goal
    Status {
        /// Goal id
        id: Uuid,
        status: StatusArg,
    },

    /// Show tasks from active goals
    Todo {
        /// Toggle completion of a task id
        #[arg(long)]
        toggle: Option<String>,
        /// Print the board as HTML
        #[arg(long)]
        html: bool,
    },
}

#[derive(Args)]
pub struct GoalArgs {
    /// What you want to achieve
    pub goal: String,
    /// Start date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub start: String,
    /// End date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub end: String,
    /// Extra context about your experience or constraints
    #[arg(long, default_value = "")]
    pub details: String,
    /// Build a gamified lesson plan
    #[arg(long)]
    pub structured: bool,
}

impl From<GoalArgs> for GoalRequest {
    fn from(args: GoalArgs) -> Self {
        GoalRequest {
            goal: args.goal,
            start_date: args.start,
            end_date: args.end,
            details: args.details,
            structured: args.structured,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Paused,
    Completed,
}

impl From<StatusArg> for GoalStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => GoalStatus::Active,
            StatusArg::Paused => GoalStatus::Paused,
            StatusArg::Completed => GoalStatus::Completed,
        }
    }
}
