use leptos::prelude::*;
use crate::models::Column;
use crate::features::kanban::hooks::use_board_context;

/// One row of a column: move left, text, move right, delete.
///
/// Edge columns render their outward arrow disabled, which is the only place
/// adjacency between columns is enforced.
#[component]
pub fn ItemCard(column: Column, index: usize, #[prop(into)] text: String) -> impl IntoView {
    let hook = use_board_context();
    let left = column.left();
    let right = column.right();

    view! {
        <li class="item-card">
            <button
                class="item-action move-left"
                title="Move left"
                disabled=left.is_none()
                on:click=move |_| {
                    if let Some(to) = left {
                        hook.move_item(column, to, index);
                    }
                }
            >"‹"</button>
            <span class="item-text">{text}</span>
            <div class="item-actions">
                <button
                    class="item-action move-right"
                    title="Move right"
                    disabled=right.is_none()
                    on:click=move |_| {
                        if let Some(to) = right {
                            hook.move_item(column, to, index);
                        }
                    }
                >"›"</button>
                <button
                    class="item-action delete-btn"
                    title="Delete"
                    on:click=move |_| hook.delete(column, index)
                >"🗑"</button>
            </div>
        </li>
    }
}
