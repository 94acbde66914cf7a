//! Deck Controls
//!
//! Add, remove-last and edit-mode toggle buttons.

use leptos::*;

use crate::state::use_deck_state;

#[component]
pub fn Controls() -> impl IntoView {
    let state = use_deck_state();
    let locale = state.locale();

    let (add_label, remove_label) = match locale {
        flipdeck::Locale::ZhTw => ("新增卡片", "移除卡片"),
        flipdeck::Locale::En => ("Add card", "Remove card"),
    };

    view! {
        <div class="controls">
            <button id="addCard" on:click=move |_| { state.apply(|c| c.add_card(None)); }>
                {add_label}
            </button>
            <button id="removeCard" on:click=move |_| { state.apply(|c| c.remove_last()); }>
                {remove_label}
            </button>
            <button id="toggleEdit" on:click=move |_| { state.apply(|c| Ok(c.toggle_edit_mode())); }>
                {move || state.ui_state().toggle_label(locale)}
            </button>
        </div>
    }
}
