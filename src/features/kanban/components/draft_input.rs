use leptos::prelude::*;
use crate::models::Column;
use crate::features::kanban::hooks::use_board_context;

#[component]
pub fn DraftInput(column: Column) -> impl IntoView {
    let hook = use_board_context();

    // Enter inside the input submits the form
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        hook.submit(column);
    };

    view! {
        <form class="draft-form" on:submit=on_submit>
            <input
                type="text"
                class="draft-input"
                id=format!("draft-{}", column.key())
                placeholder=column.placeholder()
                prop:value=move || hook.drafts.with(|drafts| drafts.get(column).to_string())
                on:input=move |ev| hook.set_draft(column, event_target_value(&ev))
            />
        </form>
    }
}
