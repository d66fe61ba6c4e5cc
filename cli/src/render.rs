//! Plain-text rendering of board state and profiles.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use tasks::board::EMPTY_BOARD;
use tasks::time::{format_timestamp, meta_line};
use tasks::{Task, TaskBoardState, UserProfile};

/// Width at which collapsed descriptions are cut.
const DESCRIPTION_CLAMP: usize = 60;

/// First line of `text`, cut to [`DESCRIPTION_CLAMP`] characters.
pub fn clamp_description(text: &str) -> String {
    let first = text.lines().next().unwrap_or_default();
    let multiline = text.trim_end().contains('\n');
    if first.chars().count() > DESCRIPTION_CLAMP {
        let cut: String = first.chars().take(DESCRIPTION_CLAMP).collect();
        format!("{}...", cut.trim_end())
    } else if multiline {
        format!("{first}...")
    } else {
        first.to_owned()
    }
}

pub fn board(state: &TaskBoardState) -> String {
    if state.tasks.is_empty() {
        return EMPTY_BOARD.to_owned();
    }
    let mut out = String::new();
    for task in &state.tasks {
        let _ = writeln!(out, "[{}] {}", task.id, task.title);
        let _ = writeln!(out, "    {}", meta_line(&task.status, &format_timestamp(task.created_at.as_deref())));
        if let Some(description) = task.description_text() {
            if state.is_expanded(&task.id) {
                for line in description.lines() {
                    let _ = writeln!(out, "    {line}");
                }
            } else {
                let _ = writeln!(out, "    {}", clamp_description(description));
            }
        }
    }
    out.trim_end().to_owned()
}

pub fn task(task: &Task) -> String {
    let mut out = format!("[{}] {}\nstatus:  {}", task.id, task.title, task.status);
    let created = format_timestamp(task.created_at.as_deref());
    if !created.is_empty() {
        let _ = write!(out, "\ncreated: {created}");
    }
    let updated = format_timestamp(task.updated_at.as_deref());
    if !updated.is_empty() {
        let _ = write!(out, "\nupdated: {updated}");
    }
    if let Some(description) = task.description_text() {
        let _ = write!(out, "\n\n{description}");
    }
    out
}

pub fn profile(user: &UserProfile) -> String {
    format!("{} ({})", user.email, user.role)
}
