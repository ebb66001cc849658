use leptos::prelude::*;
use crate::core::services::{log, log_board_snapshot, warn};
use crate::models::{submit_draft, Board, Column, Drafts, Rejected};

// Commit the column's draft as a new item
pub fn submit_column_draft(
    column: Column,
    board_signal: RwSignal<Board>,
    drafts_signal: RwSignal<Drafts>,
) {
    // Work on copies so a rejected submit leaves both signals untouched
    let mut board = board_signal.get_untracked();
    let mut drafts = drafts_signal.get_untracked();

    match submit_draft(&mut board, &mut drafts, column) {
        Ok(()) => {
            log(&format!("[Board] Added item to {}", column));
            log_board_snapshot(&board);
            board_signal.set(board);
            drafts_signal.set(drafts);
        }
        Err(e) => log_rejected(&e),
    }
}

// Update a column's pending draft text
pub fn update_draft(column: Column, text: String, drafts_signal: RwSignal<Drafts>) {
    drafts_signal.update(|drafts| drafts.set(column, text));
}

// Delete the item at `index` in `column`
pub fn delete_item(column: Column, index: usize, board_signal: RwSignal<Board>) {
    let mut board = board_signal.get_untracked();

    match board.delete(column, index) {
        Ok(item) => {
            log(&format!("[Board] Deleted \"{}\" from {} at index {}", item, column, index));
            log_board_snapshot(&board);
            board_signal.set(board);
        }
        Err(e) => log_rejected(&e),
    }
}

// Move the item at `index` in `from` to the end of `to`
pub fn move_item(from: Column, to: Column, index: usize, board_signal: RwSignal<Board>) {
    let mut board = board_signal.get_untracked();

    match board.move_item(from, to, index) {
        Ok(()) => {
            log(&format!("[Board] Moved item {} from {} to {}", index, from, to));
            log_board_snapshot(&board);
            board_signal.set(board);
        }
        Err(e) => log_rejected(&e),
    }
}

// Rejections never reach the UI, they only show up in the console
fn log_rejected(rejected: &Rejected) {
    warn(&format!("[Board] Ignored: {}", rejected));
}
