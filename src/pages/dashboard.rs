//! Dashboard page: the signed-in user's task list with create, status and
//! delete actions.
//!
//! Rendered only behind `RequireSession`. The board is built from the
//! credential present at mount and loaded once; every mutation reloads the
//! whole list.

use leptos::prelude::*;
use tasks::TaskBoard;

use crate::components::task_card::TaskCard;
use crate::state::board::BoardContext;
use crate::state::session::{signed_in_label, use_session};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let handle = session.session();
    let Some(credential) = handle.credential() else {
        return ().into_any();
    };

    let board = BoardContext::new(TaskBoard::new(handle.api().clone(), credential));
    board.load();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        board.create();
    };

    let tasks_view = move || {
        if let Some(notice) = board.empty_notice() {
            return view! { <p class="dashboard-page__empty">{notice}</p> }.into_any();
        }
        board.state.with(|state| {
            let cards = state
                .tasks
                .iter()
                .map(|task| {
                    let expanded = state.is_expanded(&task.id);
                    view! { <TaskCard task=task.clone() expanded=expanded board=board/> }
                })
                .collect_view();
            view! { <ul class="dashboard-page__tasks">{cards}</ul> }.into_any()
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Dashboard"</h2>
                <button type="button" on:click=move |_| session.logout()>
                    "Logout"
                </button>
            </header>

            {move || {
                session
                    .state
                    .with(signed_in_label)
                    .map(|label| view! { <p class="dashboard-page__user">{label}</p> })
            }}

            <section class="dashboard-page__create">
                <h3>"Create Task"</h3>
                <form class="dashboard-page__form" on:submit=on_create>
                    <label>
                        "Title"
                        <input
                            required
                            prop:value=move || board.state.with(|s| s.draft.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                board.edit_draft(|draft| draft.title = value);
                            }
                        />
                    </label>
                    <label>
                        "Description"
                        <textarea
                            prop:value=move || board.state.with(|s| s.draft.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                board.edit_draft(|draft| draft.description = value);
                            }
                        ></textarea>
                    </label>
                    <button type="submit" disabled=move || board.state.with(|s| s.saving)>
                        {move || if board.state.with(|s| s.saving) { "Saving..." } else { "Add Task" }}
                    </button>
                </form>
            </section>

            <section class="dashboard-page__list">
                <h3>"Your Tasks"</h3>
                {tasks_view}
            </section>

            <Show when=move || board.state.with(|s| s.error.is_some())>
                <p class="dashboard-page__error">{move || board.state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
        </div>
    }
    .into_any()
}
