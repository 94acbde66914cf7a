//! App Root Component

use leptos::*;

use crate::components::{CardEditor, CardList, Controls, Toast};
use crate::state::provide_deck_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Load the saved deck before anything renders
    provide_deck_state();

    view! {
        <main>
            <Controls />
            <CardEditor />
            <CardList />
            <Toast />
        </main>
    }
}
