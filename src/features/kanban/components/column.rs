use leptos::prelude::*;
use crate::models::Column;
use crate::features::kanban::hooks::use_board_context;
use super::{DraftInput, ItemCard};

#[component]
pub fn KanbanColumn(column: Column) -> impl IntoView {
    let hook = use_board_context();

    view! {
        <div class="kanban-column" id=format!("column-{}", column.key())>
            <div class="column-header">
                <h3>{column.label()}</h3>
                <span class="task-count">{move || hook.board.with(|board| board.len(column))}</span>
            </div>
            <DraftInput column=column />
            // Rows are rebuilt on every change so indices always match the board
            <ul class="column-content">
                {move || {
                    hook.board.with(|board| {
                        board.items(column)
                            .iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! { <ItemCard column=column index=index text=text.clone() /> }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </div>
    }
}
