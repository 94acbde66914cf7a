//! HTML rendering for cards
//!
//! Produces the same element structure the browser frontend builds:
//!
//! ```text
//! div#cardsContainer.cards-container[.edit-mode]
//! └─ div.card[.flipped][.selected]
//!    └─ div.card-inner
//!       ├─ div.card-front
//!       └─ div.card-back
//! ```

use crate::deck::collection::{CardView, Deck};
use crate::deck::types::{Face, Locale};
use crate::editor::UiState;
use std::fmt::Write;

const PAGE_STYLE: &str = r#"
body { font-family: sans-serif; background: #f4f4f8; margin: 2rem; }
.cards-container { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.card { width: 220px; height: 300px; perspective: 1000px; cursor: pointer; }
.card-inner { position: relative; width: 100%; height: 100%; transition: transform 0.6s; transform-style: preserve-3d; }
.card.flipped .card-inner { transform: rotateY(180deg); }
.card-front, .card-back { position: absolute; inset: 0; backface-visibility: hidden; display: flex; align-items: center; justify-content: center; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.15); background: #fff; overflow: hidden; }
.card-back { transform: rotateY(180deg); background: #eef3ff; }
.card-front img, .card-back img { max-width: 100%; max-height: 100%; object-fit: contain; }
.edit-mode .card.selected .card-front, .edit-mode .card.selected .card-back { outline: 3px solid #3b82f6; }
"#;

/// Class list of a card element
pub fn card_class(view: &CardView, selected: bool) -> String {
    let mut class = String::from("card");
    if view.flipped {
        class.push_str(" flipped");
    }
    if selected {
        class.push_str(" selected");
    }
    class
}

/// Render one card element
pub fn render_card(view: &CardView, selected: bool) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{}"><div class="card-inner">"#,
        card_class(view, selected)
    );
    for face in Face::all() {
        let _ = write!(
            html,
            r#"<div class="{}">{}</div>"#,
            face.class_name(),
            view.card.face(face)
        );
    }
    html.push_str("</div></div>");
    html
}

/// Render the card container with every card in deck order
pub fn render_container(deck: &Deck, state: UiState) -> String {
    let mut html = String::from(r#"<div id="cardsContainer" class="cards-container"#);
    if state.is_edit_mode() {
        html.push_str(" edit-mode");
    }
    html.push_str(r#"">"#);
    for (index, view) in deck.iter().enumerate() {
        html.push_str(&render_card(view, state.selected() == Some(index)));
    }
    html.push_str("</div>");
    html
}

/// Render a standalone HTML page showing the deck
///
/// Cards flip on click through a small inline script; nothing is saved.
pub fn render_page(deck: &Deck, state: UiState, locale: Locale) -> String {
    let lang = locale.code();
    let title = match locale {
        Locale::ZhTw => "翻轉卡片",
        Locale::En => "Flip cards",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{PAGE_STYLE}</style>
</head>
<body>
{container}
<script>
document.querySelectorAll('.card').forEach(function (card) {{
  card.addEventListener('click', function () {{ card.classList.toggle('flipped'); }});
}});
</script>
</body>
</html>
"#,
        container = render_container(deck, state),
    )
}
