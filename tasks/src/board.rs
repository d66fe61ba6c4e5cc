//! Task board: the dashboard's model of the caller's task collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server scopes tasks to the bearer token, so the board only needs a
//! credential. The local list is a non-authoritative copy: it is replaced
//! wholesale by [`TaskBoard::load`] and every successful mutation reloads it.
//! There are no optimistic inserts or removals.
//!
//! Failures are recorded in [`TaskBoardState::error`] for the view and also
//! returned to the caller.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::ResourceError;
use crate::transport::Transport;
use crate::types::{Credential, NewTask, ResourceId, Task, TaskUpdate};

pub const TITLE_REQUIRED: &str = "Title is required";

/// Shown in place of the list when the collection is empty.
pub const EMPTY_BOARD: &str = "No tasks yet.";

/// Create-task form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Everything the dashboard renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskBoardState {
    pub tasks: Vec<Task>,
    pub draft: TaskDraft,
    /// The single task whose description is shown in full.
    pub expanded: Option<ResourceId>,
    pub error: Option<String>,
    /// A create request is in flight.
    pub saving: bool,
    /// At least one load has completed successfully.
    pub loaded: bool,
}

impl TaskBoardState {
    /// Expand `id`, collapsing any other task; collapse it if already expanded.
    pub fn toggle_expanded(&mut self, id: &ResourceId) {
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.clone());
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &ResourceId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ResourceId) -> bool {
        self.tasks.iter().any(|t| &t.id == id)
    }
}

/// Board handle bound to one credential. Clones share state.
#[derive(Clone)]
pub struct TaskBoard<T> {
    api: ApiClient<T>,
    credential: Credential,
    state: Rc<RefCell<TaskBoardState>>,
}

impl<T: Transport> TaskBoard<T> {
    #[must_use]
    pub fn new(api: ApiClient<T>, credential: Credential) -> Self {
        Self { api, credential, state: Rc::new(RefCell::new(TaskBoardState::default())) }
    }

    #[must_use]
    pub fn snapshot(&self) -> TaskBoardState {
        self.state.borrow().clone()
    }

    /// Apply a keystroke-level change to the draft.
    pub fn edit_draft(&self, edit: impl FnOnce(&mut TaskDraft)) {
        edit(&mut self.state.borrow_mut().draft);
    }

    pub fn toggle_expanded(&self, id: &ResourceId) {
        self.state.borrow_mut().toggle_expanded(id);
    }

    /// Replace the local list with the server's collection.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] (also recorded in state) when the fetch
    /// fails; the previous list is kept.
    pub async fn load(&self) -> Result<(), ResourceError> {
        self.state.borrow_mut().error = None;
        let result = self.api.list_tasks(&self.credential).await;
        let mut state = self.state.borrow_mut();
        match result {
            Ok(tasks) => {
                state.tasks = tasks;
                state.loaded = true;
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Submit the draft as a new `pending` task, then reload.
    ///
    /// On success the draft is cleared. A failed reload after a successful
    /// create is recorded in state but does not fail the create.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] (also recorded in state) when the title is
    /// empty or the server rejects the task; the draft is kept.
    pub async fn create(&self) -> Result<(), ResourceError> {
        let draft = {
            let mut state = self.state.borrow_mut();
            state.error = None;
            if state.draft.title.is_empty() {
                let err = ResourceError::Invalid(TITLE_REQUIRED.to_owned());
                state.error = Some(err.to_string());
                return Err(err);
            }
            state.saving = true;
            state.draft.clone()
        };

        let result = self.api.create_task(&self.credential, &NewTask::pending(draft.title, draft.description)).await;
        {
            let mut state = self.state.borrow_mut();
            state.saving = false;
            if let Err(err) = &result {
                state.error = Some(err.to_string());
            } else {
                state.draft.clear();
            }
        }
        let task = result?;
        log::debug!("created task {}", task.id);
        self.reload().await;
        Ok(())
    }

    /// Delete a task by id, then reload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] (also recorded in state) for any non-2xx
    /// status; the local list is left unchanged.
    pub async fn delete(&self, id: &ResourceId) -> Result<(), ResourceError> {
        self.state.borrow_mut().error = None;
        let result = self.api.delete_task(&self.credential, id).await;
        self.settle_mutation(result).await
    }

    /// Change a task's status, then reload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] (also recorded in state) when the update is
    /// rejected.
    pub async fn set_status(&self, id: &ResourceId, status: &str) -> Result<(), ResourceError> {
        self.state.borrow_mut().error = None;
        let result = self.api.update_task(&self.credential, id, &TaskUpdate::status(status)).await.map(|_| ());
        self.settle_mutation(result).await
    }

    async fn settle_mutation(&self, result: Result<(), ResourceError>) -> Result<(), ResourceError> {
        if let Err(err) = result {
            self.state.borrow_mut().error = Some(err.to_string());
            return Err(err);
        }
        self.reload().await;
        Ok(())
    }

    async fn reload(&self) {
        if let Err(err) = self.load().await {
            log::warn!("reload after mutation failed: {err}");
        }
    }
}
