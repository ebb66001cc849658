use leptos::prelude::*;
use crate::models::Column;
use super::KanbanColumn;

// All four columns, left to right
#[component]
pub fn KanbanBoard() -> impl IntoView {
    view! {
        <div class="kanban-board">
            {Column::ALL
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
