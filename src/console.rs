//! Line-oriented front end driving one search widget.

use std::fmt::Display;
use std::sync::Arc;

use chrono::{Datelike, Local};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, stdin};

use crate::cli::{Command, HELP};
use crate::domain::filter::{FieldKind, FilterSet};
use crate::domain::search::SearchDomain;
use crate::domain::session::SessionState;
use crate::dto::search::SearchEvent;
use crate::forms::date::year_choices;
use crate::models::config::ClientConfig;
use crate::repository::{SearchBackend, SessionBackend};
use crate::services::ServiceResult;
use crate::services::session;
use crate::services::widget::SearchWidget;

/// Opens the page for `D` on stdin and processes commands until `quit` or end of input.
pub async fn drive<D, B>(
    backend: Arc<B>,
    session_state: SessionState,
    config: &ClientConfig,
) -> ServiceResult<()>
where
    D: SearchDomain,
    B: SearchBackend + SessionBackend + ?Sized,
{
    drive_with::<D, B, _>(backend, session_state, config, BufReader::new(stdin())).await
}

/// Same as [`drive`], reading commands from `input`.
pub async fn drive_with<D, B, I>(
    backend: Arc<B>,
    session_state: SessionState,
    config: &ClientConfig,
    input: I,
) -> ServiceResult<()>
where
    D: SearchDomain,
    B: SearchBackend + SessionBackend + ?Sized,
    I: AsyncBufRead + Unpin,
{
    let mut widget = SearchWidget::<D, B>::new(backend.clone(), session_state, config.debounce())?;
    let current_year = Local::now().year();

    println!("{}", D::TITLE);
    print_lines(&describe_filters(widget.filters(), current_year));

    let mut lines = input.lines();
    let mut end_session = false;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match execute(&mut widget, &line, current_year) {
                    Step::Print(output) => print_lines(&output),
                    Step::Error(message) => eprintln!("ERROR: {message}"),
                    Step::Quit => break,
                    Step::Logout => {
                        end_session = true;
                        break;
                    }
                }
            }
            event = widget.next_event() => {
                let rendered = render_event(&event, widget.rows());
                match event {
                    SearchEvent::Failed { .. } => {
                        rendered.iter().for_each(|line| eprintln!("{line}"))
                    }
                    _ => print_lines(&rendered),
                }
            }
        }
    }

    if widget.is_fetching() {
        info!("Closing {} with a request in flight", D::ENDPOINT);
    }
    drop(widget);

    if end_session {
        session::logout(backend.as_ref()).await?;
    }
    Ok(())
}

/// Outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(Vec<String>),
    Error(String),
    Quit,
    Logout,
}

/// Parses and applies one input line. Failures leave the widget as it was.
pub fn execute<D, B>(widget: &mut SearchWidget<D, B>, line: &str, current_year: i32) -> Step
where
    D: SearchDomain,
    B: SearchBackend + ?Sized,
{
    if line.trim().is_empty() {
        return Step::Print(Vec::new());
    }
    let command = match line.parse::<Command>() {
        Ok(command) => command,
        Err(err) => return Step::Error(err.to_string()),
    };

    match command {
        Command::Quit => Step::Quit,
        Command::Logout => Step::Logout,
        Command::Help => Step::Print(vec![HELP.to_string()]),
        Command::Show => {
            let mut output = describe_filters(widget.filters(), current_year);
            output.extend(describe_rows(widget.rows()));
            Step::Print(output)
        }
        Command::Toggle(name) => match widget.toggle(&name) {
            Ok(active) => Step::Print(vec![format!(
                "{name}: {}",
                if active { "on" } else { "off" }
            )]),
            Err(err) => Step::Error(err.to_string()),
        },
        Command::Set { key, value } => match widget.set(&key, &value) {
            Ok(()) => Step::Print(Vec::new()),
            Err(err) => Step::Error(err.to_string()),
        },
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// One line per toggle, followed by an indented line per field it owns.
pub fn describe_filters(filters: &FilterSet, current_year: i32) -> Vec<String> {
    let mut lines = Vec::new();
    for toggle in filters.toggles() {
        let active = filters.is_active(toggle.name.as_str()).unwrap_or_else(|err| {
            warn!("{err}");
            false
        });
        lines.push(format!("[{}] {}", if active { "x" } else { " " }, toggle.name));
        if !active {
            continue;
        }
        for field in filters.toggle_fields(toggle) {
            let hint = match field.kind {
                FieldKind::Text => String::new(),
                FieldKind::Year { first } => {
                    let years = year_choices(first, current_year);
                    match (years.first(), years.last()) {
                        (Some(from), Some(to)) => format!(" ({from}-{to})"),
                        _ => String::new(),
                    }
                }
                FieldKind::Month => " (1-12)".to_string(),
            };
            lines.push(format!("    {} = {:?}{hint}", field.key, field.value));
        }
    }
    lines
}

pub fn describe_rows<R: Display>(rows: &[R]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["no results".to_string()];
    }
    rows.iter().map(ToString::to_string).collect()
}

pub fn render_event<R: Display>(event: &SearchEvent, rows: &[R]) -> Vec<String> {
    match event {
        SearchEvent::Cleared => vec!["results cleared".to_string()],
        SearchEvent::Started { query } => vec![format!("searching: {query}")],
        SearchEvent::Results { .. } => describe_rows(rows),
        SearchEvent::Failed { message } => vec![format!("ERROR: {message}")],
    }
}
