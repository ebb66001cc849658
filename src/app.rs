use leptos::prelude::*;
use crate::features::kanban::use_board;
use crate::pages::Kanban;

#[component]
pub fn App() -> impl IntoView {
    // Board and drafts live for the whole page; a reload starts empty
    let board = use_board();

    provide_context(board);

    view! {
        <main class="app">
            <Kanban />
        </main>
    }
}
