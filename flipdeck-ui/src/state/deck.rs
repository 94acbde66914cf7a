//! Deck State
//!
//! One `EditController` in a signal, shared through context. Components
//! read it with `with` and mutate it through [`DeckState::apply`].

use flipdeck::editor::{EditController, EditResult, UiState};
use flipdeck::store::CardStore;
use flipdeck::Locale;
use leptos::*;

use crate::storage::LocalStorage;

pub type Controller = EditController<LocalStorage>;

#[derive(Clone, Copy)]
pub struct DeckState {
    pub controller: RwSignal<Controller>,
    /// A save is resolving image reads; further saves wait
    pub saving: RwSignal<bool>,
    /// Bumped on every card selection so the editor clears its fields
    pub selection_epoch: RwSignal<u32>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Locale from `navigator.language`, falling back to the default
fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .and_then(|lang| lang.parse().ok())
        .unwrap_or_default()
}

/// Load the saved deck and provide it to the component tree
pub fn provide_deck_state() {
    let locale = browser_locale();

    let (controller, load_error) =
        match EditController::open(CardStore::new(LocalStorage), locale) {
            Ok(controller) => (controller, None),
            Err(e) => {
                let message = format!("Could not load saved cards: {}", e);
                web_sys::console::error_1(&message.clone().into());
                (EditController::new(CardStore::new(LocalStorage), locale), Some(message))
            }
        };

    let state = DeckState::new(controller);
    state.error.set(load_error);
    provide_context(state);
}

pub fn use_deck_state() -> DeckState {
    use_context::<DeckState>().expect("DeckState not found")
}

impl DeckState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: create_rw_signal(controller),
            saving: create_rw_signal(false),
            selection_epoch: create_rw_signal(0),
            error: create_rw_signal(None),
        }
    }

    /// Run a controller operation, reporting failures as a toast
    pub fn apply<T>(&self, f: impl FnOnce(&mut Controller) -> EditResult<T>) -> Option<T> {
        match self.controller.try_update(f)? {
            Ok(value) => Some(value),
            Err(e) => {
                self.show_error(&e.to_string());
                None
            }
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.controller.with(|c| c.state())
    }

    pub fn locale(&self) -> Locale {
        self.controller.with_untracked(|c| c.locale())
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
