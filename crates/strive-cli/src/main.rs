mod chat;
mod cli;
mod lesson;
mod viewer;

use std::io::{Read, Write};
use std::path::Path;
use std::{thread, time::Duration};

use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::Parser;
use cli::{Cli, Command};
use strive_config::Config;
use strive_engine::{
    ConversationState, GoalHistory, GoalRecord, GoalRequest, LocalStore, PlanConstraints,
    TodoState, Typewriter, format_bold, generate_curriculum, parse_date, render, todo_board,
};
use uuid::Uuid;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default().with_context(|| {
        format!("Failed to load config from {}", Config::config_path().display())
    })?;
    let store = LocalStore::new(cli.data.clone().unwrap_or_else(|| config.data_path.clone()));
    log::debug!("Using data directory {}", store.root().display());

    match cli.command {
        None => viewer::run(&store)?,

        Some(Command::Render { file }) => {
            let text = read_input(file.as_deref())?;
            println!("{}", render(&text));
        }

        Some(Command::Stream { file, chunk }) => {
            let text = read_input(file.as_deref())?;
            let chunk = chunk.unwrap_or(config.typewriter_chunk);
            let delay = Duration::from_millis(config.typewriter_delay_ms);
            let mut out = std::io::stdout().lock();
            for frame in Typewriter::new(&text, chunk) {
                writeln!(out, "{}", frame.html)?;
                out.flush()?;
                thread::sleep(delay);
            }
        }

        Some(Command::Plan(args)) => {
            let request = GoalRequest::from(args);
            validate_dates(&request)?;

            let curriculum = generate_curriculum(&request, None, &constraints(&config));
            save_goal(&store, &config, &request, &curriculum)?;
            println!("{curriculum}");
        }

        Some(Command::Chat(args)) => {
            let request = GoalRequest::from(args);
            validate_dates(&request)?;

            let mut state = ConversationState::start(request, config.max_questions);
            let plan = chat::run(
                &mut state,
                None,
                &constraints(&config),
                std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )?;
            println!("{plan}");
            save_goal(&store, &config, &state.request, &plan)?;
        }

        Some(Command::Lesson {
            goal,
            lesson: lesson_id,
            save,
            complete,
        }) => {
            let action = lesson::Action { save, complete };
            lesson::run(
                &store,
                &goal,
                lesson_id.as_deref(),
                action,
                &mut std::io::stdout().lock(),
            )?;
        }

        Some(Command::History) => {
            let history = GoalHistory::load(&store)?;
            if history.is_empty() {
                println!("No goals yet. Create one with `strive plan <GOAL>`.");
            }
            for goal in history.goals() {
                println!(
                    "{}  {}  [{:?}]  {}",
                    goal.id,
                    goal.created_at.format("%Y-%m-%d"),
                    goal.progress.status,
                    goal.title
                );
            }
        }

        Some(Command::Regenerate { id }) => {
            let mut history = GoalHistory::load(&store)?;
            let request = find_goal(&history, id)?.request();
            let curriculum = generate_curriculum(&request, None, &constraints(&config));
            history.replace_curriculum(id, curriculum.clone(), Utc::now());
            history.save(&store)?;
            println!("{curriculum}");
        }

        Some(Command::Status { id, status }) => {
            let mut history = GoalHistory::load(&store)?;
            find_goal(&history, id)?;
            history.set_status(id, status.into());
            history.save(&store)?;
        }

        Some(Command::Todo { toggle, html }) => {
            let mut state = TodoState::load(&store)?;
            if let Some(id) = toggle {
                let done = state.toggle(&id);
                state.save(&store)?;
                println!("{} {id}", if done { "[x]" } else { "[ ]" });
            }

            let history = GoalHistory::load(&store)?;
            let board = todo_board(history.goals(), &state, Local::now().date_naive());
            if board.is_empty() {
                println!("No active courses. Create a new goal to see tasks here!");
            }
            for course in &board {
                if html {
                    println!("<h3>{}</h3><ul>", html_escape::encode_text(&course.course_title));
                } else {
                    println!("{}", course.course_title);
                }
                for task in &course.tasks {
                    if html {
                        println!(
                            "<li class=\"{}\">{} <span>{}</span></li>",
                            if task.done { "done" } else { "open" },
                            format_bold(&html_escape::encode_text(&task.title)),
                            task.due
                        );
                    } else {
                        let mark = if task.done { "[x]" } else { "[ ]" };
                        println!("  {mark} {}  ({})  {}", task.title, task.due, task.id);
                    }
                }
                if html {
                    println!("</ul>");
                }
            }
        }
    }

    Ok(())
}

fn save_goal(
    store: &LocalStore,
    config: &Config,
    request: &GoalRequest,
    curriculum: &str,
) -> Result<()> {
    let mut history = GoalHistory::load(store)?;
    let record = GoalRecord::new(request, Some(curriculum.to_string()), Utc::now());
    log::info!("Saved goal '{}' as {}", record.title, record.id);
    history.add(record, config.history_limit);
    history.save(store)?;
    Ok(())
}

fn constraints(config: &Config) -> PlanConstraints {
    PlanConstraints {
        daily_minutes: config.daily_minutes,
        days_per_week: config.days_per_week,
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Rejects malformed dates and reversed ranges before anything is saved.
fn validate_dates(request: &GoalRequest) -> Result<()> {
    let parse = |s: &str| -> Result<Option<chrono::NaiveDate>> {
        match s.trim() {
            "" => Ok(None),
            s => Ok(Some(parse_date(s)?)),
        }
    };
    if let (Some(start), Some(end)) = (parse(&request.start_date)?, parse(&request.end_date)?)
        && end < start
    {
        bail!("End date {end} is before start date {start}");
    }
    Ok(())
}

fn find_goal(history: &GoalHistory, id: Uuid) -> Result<&GoalRecord> {
    match history.find(id) {
        Some(goal) => Ok(goal),
        None => bail!("No goal with id {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str) -> GoalRequest {
        GoalRequest {
            goal: "Learn Go".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_dates_accepts_missing_dates() {
        assert!(validate_dates(&request("", "")).is_ok());
        assert!(validate_dates(&request("2025-01-01", "")).is_ok());
    }

    #[test]
    fn validate_dates_rejects_bad_input() {
        assert!(validate_dates(&request("2025-13-01", "")).is_err());
        let err = validate_dates(&request("2025-02-01", "2025-01-01")).unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }
}
