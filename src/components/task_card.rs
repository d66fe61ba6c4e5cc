//! One row of the dashboard task list.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;
use tasks::Task;
use tasks::time::{format_timestamp, meta_line};
use tasks::types::{DONE_STATUS, INITIAL_STATUS};

use crate::state::board::BoardContext;

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Show less" } else { "Show full description" }
}

/// Button caption and target status for the status toggle.
pub fn status_action(status: &str) -> (&'static str, &'static str) {
    if status == DONE_STATUS { ("Reopen", INITIAL_STATUS) } else { ("Mark done", DONE_STATUS) }
}

#[component]
pub fn TaskCard(task: Task, expanded: bool, board: BoardContext) -> impl IntoView {
    let meta = meta_line(&task.status, &format_timestamp(task.created_at.as_deref()));
    let (action_label, next_status) = status_action(&task.status);
    let description = task.description_text().map(str::to_owned);
    let description_class =
        if expanded { "task-card__description" } else { "task-card__description task-card__description--clamped" };

    let toggle_id = task.id.clone();
    let status_id = task.id.clone();
    let delete_id = task.id.clone();

    view! {
        <li class="task-card">
            <div class="task-card__info">
                <strong>{task.title}</strong>
                <div class="task-card__meta">{meta}</div>
                {description
                    .map(|text| {
                        view! {
                            <div class=description_class>{text}</div>
                            <div
                                class="task-card__toggle"
                                on:click=move |_| board.toggle_expanded(&toggle_id)
                            >
                                {toggle_label(expanded)}
                            </div>
                        }
                    })}
            </div>
            <div class="task-card__actions">
                <button type="button" on:click=move |_| board.set_status(status_id.clone(), next_status)>
                    {action_label}
                </button>
                <button type="button" on:click=move |_| board.delete(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
