//! # Flipdeck
//!
//! Flip-card decks: create cards, edit their front and back faces with text or
//! images, and persist the whole deck to key-value storage.
//!
//! ## Modules
//!
//! - [`deck`]: Card model, ordered deck and HTML rendering
//! - [`store`]: Key-value backends and the `savedCards` card store
//! - [`editor`]: Edit-mode state machine and the edit controller
//! - [`config`]: TOML configuration with environment overrides (native only)
//! - [`shell`]: Line-oriented driver for the edit controller (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flipdeck::editor::{EditController, EditorForm, FsImageLoader};
//! use flipdeck::store::{CardStore, FileStore};
//! use flipdeck::Locale;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = CardStore::new(FileStore::new("./flipdeck_data/storage.json"));
//!     let mut controller = EditController::open(store, Locale::En)?;
//!
//!     let index = controller.add_card(None)?;
//!     controller.toggle_edit_mode();
//!     controller.click_card(index)?;
//!
//!     let form = EditorForm::new().front_text("Bonjour").back_text("Hello");
//!     controller.save_card_content(form, &FsImageLoader).await?;
//!
//!     println!("{} cards", controller.deck().len());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod deck;
pub mod editor;
#[cfg(feature = "native")]
pub mod shell;
pub mod store;

pub use deck::{Card, CardId, CardView, Deck, Face, FaceKind, Locale, SavedCard};

pub use editor::{
    ClickOutcome, EditController, EditError, EditResult, EditTarget, EditorForm, FaceEdit,
    FaceOutcome, ImageError, ImageLoader, SaveReport, UiState,
};

pub use store::{CardStore, KeyValueStore, MemoryStore, StoreError, StoreResult, STORAGE_KEY};

#[cfg(feature = "native")]
pub use store::FileStore;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DeckConfig, LoggingConfig, StorageConfig};
