#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use leptos::prelude::*;
use tasks::board::EMPTY_BOARD;
use tasks::{ResourceId, TaskBoard, TaskBoardState, TaskDraft};

use crate::net::transport::BrowserTransport;

pub type AppBoard = TaskBoard<BrowserTransport>;

/// Dashboard-scoped handle on a [`TaskBoard`].
#[derive(Clone, Copy)]
pub struct BoardContext {
    board: StoredValue<AppBoard, LocalStorage>,
    pub state: RwSignal<TaskBoardState>,
}

impl BoardContext {
    pub fn new(board: AppBoard) -> Self {
        let state = RwSignal::new(board.snapshot());
        Self { board: StoredValue::new_local(board), state }
    }

    pub fn sync(&self) {
        let snapshot = self.board.with_value(AppBoard::snapshot);
        self.state.set(snapshot);
    }

    /// Placeholder text for the list, when there is nothing to list.
    pub fn empty_notice(&self) -> Option<&'static str> {
        self.state.with(|s| s.tasks.is_empty().then_some(EMPTY_BOARD))
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut TaskDraft)) {
        self.board.with_value(|board| board.edit_draft(edit));
        self.sync();
    }

    pub fn toggle_expanded(&self, id: &ResourceId) {
        self.board.with_value(|board| board.toggle_expanded(id));
        self.sync();
    }

    pub fn load(&self) {
        let board = self.board.get_value();
        self.run(async move {
            let _ = board.load().await;
        });
    }

    pub fn create(&self) {
        if self.state.with_untracked(|s| s.saving) {
            return;
        }
        self.state.update(|s| s.saving = true);
        let board = self.board.get_value();
        self.run(async move {
            let _ = board.create().await;
        });
    }

    pub fn delete(&self, id: ResourceId) {
        let board = self.board.get_value();
        self.run(async move {
            let _ = board.delete(&id).await;
        });
    }

    pub fn set_status(&self, id: ResourceId, status: &'static str) {
        let board = self.board.get_value();
        self.run(async move {
            let _ = board.set_status(&id, status).await;
        });
    }

    /// Drive one board operation, then publish the resulting state. Errors
    /// are already recorded in board state.
    fn run(&self, op: impl Future<Output = ()> + 'static) {
        #[cfg(feature = "csr")]
        {
            let ctx = *self;
            leptos::task::spawn_local(async move {
                op.await;
                ctx.sync();
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = op;
        }
    }
}
