//! Flipdeck card model
//!
//! - **types**: `Card`, `Face`, `Locale` and face markup helpers
//! - **collection**: `Deck`, the ordered on-screen card sequence
//! - **render**: HTML fragments for cards, the container and a full page
//!
//! # Lifecycle
//!
//! ```text
//! placeholder card → push onto deck → edited in place → popped off the end
//! ```

pub mod collection;
pub mod render;
pub mod types;

pub use collection::{CardId, CardView, Deck};
pub use render::{card_class, render_card, render_container, render_page};
pub use types::{image, paragraph, Card, Face, FaceKind, Locale, ParseLocaleError, SavedCard};
