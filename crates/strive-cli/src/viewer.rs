use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};
use strive_engine::render::{LineClassifier, LineKind, ListKind};
use strive_engine::{CourseTasks, GoalHistory, GoalRecord, LocalStore, TodoState, todo_board};

struct App<'a> {
    store: &'a LocalStore,
    goals: Vec<GoalRecord>,
    goal_list_state: ListState,
    todo: TodoState,
    board: Vec<CourseTasks>,
    status: Option<String>,
}

impl<'a> App<'a> {
    fn new(store: &'a LocalStore) -> Result<Self> {
        let goals = GoalHistory::load(store)?.goals().to_vec();
        let todo = TodoState::load(store)?;

        let mut app = Self {
            store,
            goals,
            goal_list_state: ListState::default(),
            todo,
            board: vec![],
            status: None,
        };

        if !app.goals.is_empty() {
            app.goal_list_state.select(Some(0));
        }
        app.refresh_board();

        Ok(app)
    }

    fn next_goal(&mut self) {
        if self.goals.is_empty() {
            return;
        }
        let i = match self.goal_list_state.selected() {
            Some(i) => (i + 1) % self.goals.len(),
            None => 0,
        };
        self.goal_list_state.select(Some(i));
    }

    fn previous_goal(&mut self) {
        if self.goals.is_empty() {
            return;
        }
        let i = match self.goal_list_state.selected() {
            Some(0) | None => self.goals.len() - 1,
            Some(i) => i - 1,
        };
        self.goal_list_state.select(Some(i));
    }

    fn selected_goal(&self) -> Option<&GoalRecord> {
        self.goal_list_state
            .selected()
            .and_then(|i| self.goals.get(i))
    }

    fn selected_course(&self) -> Option<&CourseTasks> {
        let goal = self.selected_goal()?;
        self.board.iter().find(|c| c.course_title == goal.title)
    }

    fn refresh_board(&mut self) {
        self.board = todo_board(&self.goals, &self.todo, Local::now().date_naive());
    }

    /// Marks the first open task of the selected course as done.
    fn complete_next_task(&mut self) -> Result<()> {
        let Some(task_id) = self
            .selected_course()
            .and_then(|c| c.tasks.iter().find(|t| !t.done))
            .map(|t| t.id.clone())
        else {
            self.status = Some("No open tasks for this goal".to_string());
            return Ok(());
        };

        self.todo.toggle(&task_id);
        self.todo.save(self.store)?;
        self.refresh_board();
        self.status = Some(format!("Completed {task_id}"));
        Ok(())
    }
}

pub fn run(store: &LocalStore) -> Result<()> {
    let mut app = App::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_goal(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_goal(),
                KeyCode::Char(' ') => {
                    if let Err(e) = app.complete_next_task() {
                        app.status = Some(format!("Error saving tasks: {e}"));
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(columns[1]);

    // Goal list panel
    let goal_items: Vec<ListItem> = app
        .goals
        .iter()
        .map(|goal| {
            let icon = if goal.is_completed() { "✅ " } else { "🎯 " };
            ListItem::new(Line::from(format!("{icon}{}", goal.title)))
        })
        .collect();

    let goal_list = List::new(goal_items)
        .block(Block::default().borders(Borders::ALL).title("Goals"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(goal_list, columns[0], &mut app.goal_list_state);

    // Curriculum panel
    let curriculum_text = match app.selected_goal() {
        None => vec![Line::from("No goals yet. Create one with `strive plan <GOAL>`.")],
        Some(goal) => match &goal.curriculum {
            Some(curriculum) => curriculum_lines(curriculum),
            None => vec![Line::from("No curriculum was saved for this goal")],
        },
    };

    let curriculum = Paragraph::new(curriculum_text)
        .block(Block::default().borders(Borders::ALL).title("Curriculum"))
        .wrap(Wrap { trim: false });

    f.render_widget(curriculum, right[0]);

    // Todo panel
    let todo_text: Vec<Line> = match app.selected_course() {
        None => vec![Line::from("No active tasks")],
        Some(course) => course
            .tasks
            .iter()
            .map(|task| {
                let (mark, style) = if task.done {
                    ("[x] ", Style::default().fg(Color::DarkGray))
                } else {
                    ("[ ] ", Style::default())
                };
                Line::from(vec![
                    Span::styled(format!("{mark}{}", task.title), style),
                    Span::styled(format!("  {}", task.due), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect(),
    };

    let todo = Paragraph::new(todo_text)
        .block(Block::default().borders(Borders::ALL).title("Todo"))
        .wrap(Wrap { trim: true });

    f.render_widget(todo, right[1]);

    // Instructions
    let help = match &app.status {
        Some(status) => Line::from(status.as_str()),
        None => Line::from("q: Quit | ↑/k: Previous | ↓/j: Next | Space: Complete next task"),
    };
    f.render_widget(Paragraph::new(help), rows[1]);
}

/// Styles curriculum markdown line by line for the terminal.
fn curriculum_lines(curriculum: &str) -> Vec<Line<'static>> {
    let classifier = LineClassifier;

    curriculum
        .split('\n')
        .map(|raw| {
            let line = classifier.classify(raw);
            match line.kind {
                LineKind::Heading { content, .. } => Line::from(Span::styled(
                    content.to_string(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )),
                LineKind::Item { kind, content } => {
                    let marker = match kind {
                        ListKind::Unordered => "•".to_string(),
                        ListKind::Ordered => raw
                            .trim_start()
                            .split_once(char::is_whitespace)
                            .map_or("1.", |(number, _)| number)
                            .to_string(),
                    };
                    let indent = "  ".repeat(line.level);
                    let mut spans = vec![Span::raw(format!("{indent}{marker} "))];
                    spans.extend(emphasis_spans(content));
                    Line::from(spans)
                }
                LineKind::Blank => Line::from(""),
                LineKind::Text => Line::from(emphasis_spans(raw)),
            }
        })
        .collect()
}

/// Splits on `**` and bolds every other piece.
fn emphasis_spans(text: &str) -> Vec<Span<'static>> {
    text.split("**")
        .enumerate()
        .filter(|(_, piece)| !piece.is_empty())
        .map(|(i, piece)| {
            if i % 2 == 1 {
                Span::styled(piece.to_string(), Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw(piece.to_string())
            }
        })
        .collect()
}
