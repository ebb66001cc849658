use leptos::prelude::*;
use crate::features::kanban::KanbanBoard;

#[component]
pub fn Kanban() -> impl IntoView {
    view! {
        <div class="kanban-page">
            <KanbanBoard />
        </div>
    }
}
