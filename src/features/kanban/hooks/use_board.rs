use leptos::prelude::*;
use crate::models::{Board, Column, Drafts};
use crate::features::kanban::services::{delete_item, move_item, submit_column_draft, update_draft};

/// Handle on the board and draft signals.
///
/// Both fields are arena-backed signals, so the hook is `Copy` and can be
/// captured by every row's event handlers or pulled from context.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<Board>,
    pub drafts: RwSignal<Drafts>,
}

impl BoardHook {
    pub fn submit(&self, column: Column) {
        submit_column_draft(column, self.board, self.drafts);
    }

    pub fn set_draft(&self, column: Column, text: String) {
        update_draft(column, text, self.drafts);
    }

    pub fn delete(&self, column: Column, index: usize) {
        delete_item(column, index, self.board);
    }

    pub fn move_item(&self, from: Column, to: Column, index: usize) {
        move_item(from, to, index, self.board);
    }
}

pub fn use_board() -> BoardHook {
    BoardHook {
        board: RwSignal::new(Board::new()),
        drafts: RwSignal::new(Drafts::new()),
    }
}

/// Board hook provided by the root component.
pub fn use_board_context() -> BoardHook {
    expect_context::<BoardHook>()
}
