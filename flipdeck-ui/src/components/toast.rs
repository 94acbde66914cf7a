//! Toast Notification Component

use leptos::*;

use crate::state::use_deck_state;

/// Error toast, shown while the deck state holds an error message
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_deck_state();

    move || {
        state.error.get().map(|message| {
            view! {
                <div class="toast" role="alert">
                    <span>{message}</span>
                </div>
            }
        })
    }
}
