//! Card Editor
//!
//! Front/back text fields and image pickers, shown in edit mode. Saving
//! captures the selected card, reads both faces concurrently, then applies
//! them to that card if it is still on the page.

use flipdeck::editor::{resolve_form, EditorForm, FaceEdit};
use leptos::*;

use crate::image::BrowserImageLoader;
use crate::state::use_deck_state;

fn face_edit(text: NodeRef<html::Textarea>, file: NodeRef<html::Input>) -> FaceEdit<web_sys::File> {
    let text = text.get_untracked().map(|el| el.value()).unwrap_or_default();
    let image = file
        .get_untracked()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0));
    FaceEdit::new(text, image)
}

#[component]
pub fn CardEditor() -> impl IntoView {
    let state = use_deck_state();
    let locale = state.locale();

    let front_text = create_node_ref::<html::Textarea>();
    let back_text = create_node_ref::<html::Textarea>();
    let front_image = create_node_ref::<html::Input>();
    let back_image = create_node_ref::<html::Input>();

    // Clear every field when a card gets selected
    create_effect(move |_| {
        let _ = state.selection_epoch.get();
        for text in [front_text, back_text] {
            if let Some(el) = text.get_untracked() {
                el.set_value("");
            }
        }
        for file in [front_image, back_image] {
            if let Some(el) = file.get_untracked() {
                el.set_value("");
            }
        }
    });

    let on_save = move |_| {
        let Some(target) = state.controller.with_untracked(|c| c.edit_target()) else {
            return;
        };
        if state.saving.get_untracked() {
            return;
        }

        let form = EditorForm {
            front: face_edit(front_text, front_image),
            back: face_edit(back_text, back_image),
        };

        state.saving.set(true);
        spawn_local(async move {
            let edit = resolve_form(form, &BrowserImageLoader, locale).await;
            if let Some(report) = state.apply(|c| c.apply_edit(target, edit)) {
                for (face, err) in report.failures() {
                    state.show_error(&format!("{}: {}", face, err));
                }
            }
            state.saving.set(false);
        });
    };

    let (front_label, back_label, save_label) = match locale {
        flipdeck::Locale::ZhTw => ("正面", "背面", "儲存卡片"),
        flipdeck::Locale::En => ("Front", "Back", "Save card"),
    };

    let display = move || {
        if state.ui_state().is_edit_mode() {
            "display: block"
        } else {
            "display: none"
        }
    };

    view! {
        <div id="cardEditor" class="card-editor" style=display>
            <div class="face-fields">
                <label for="frontContent">{front_label}</label>
                <textarea id="frontContent" node_ref=front_text rows="2"></textarea>
                <input id="frontImage" type="file" accept="image/*" node_ref=front_image />
            </div>
            <div class="face-fields">
                <label for="backContent">{back_label}</label>
                <textarea id="backContent" node_ref=back_text rows="2"></textarea>
                <input id="backImage" type="file" accept="image/*" node_ref=back_image />
            </div>
            <button
                id="saveCard"
                on:click=on_save
                disabled=move || state.saving.get() || state.ui_state().selected().is_none()
            >
                {save_label}
            </button>
        </div>
    }
}
