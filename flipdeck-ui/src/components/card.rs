//! Card Components
//!
//! The card container and a single flip card. Each card keeps its element
//! across updates so the flip transition plays; only the face contents are
//! re-rendered.

use flipdeck::deck::card_class;
use flipdeck::editor::ClickOutcome;
use flipdeck::Face;
use leptos::*;

use crate::state::use_deck_state;

/// Container holding every card in deck order
#[component]
pub fn CardList() -> impl IntoView {
    let state = use_deck_state();

    let container_class = move || {
        if state.ui_state().is_edit_mode() {
            "cards-container edit-mode"
        } else {
            "cards-container"
        }
    };

    view! {
        <div id="cardsContainer" class=container_class>
            <For
                each=move || state.controller.with(|c| 0..c.deck().len())
                key=|index| *index
                children=move |index| view! { <FlipCard index=index /> }
            />
        </div>
    }
}

#[component]
fn FlipCard(index: usize) -> impl IntoView {
    let state = use_deck_state();

    let class = move || {
        state.controller.with(|c| {
            c.deck()
                .get(index)
                .map(|view| card_class(view, c.is_selected(index)))
                .unwrap_or_default()
        })
    };

    // One handler for both modes; the controller decides flip or select
    let on_click = move |_| {
        if let Some(ClickOutcome::Selected(_)) = state.apply(|c| c.click_card(index)) {
            state.selection_epoch.update(|n| *n = n.wrapping_add(1));
        }
    };

    view! {
        <div class=class on:click=on_click>
            <div class="card-inner">
                <CardFace index=index face=Face::Front />
                <CardFace index=index face=Face::Back />
            </div>
        </div>
    }
}

#[component]
fn CardFace(index: usize, face: Face) -> impl IntoView {
    let state = use_deck_state();

    let content = create_memo(move |_| {
        state.controller.with(|c| {
            c.deck()
                .get(index)
                .map(|view| view.card.face(face).to_string())
                .unwrap_or_default()
        })
    });

    move || view! { <div class=face.class_name() inner_html=content.get()></div> }
}
