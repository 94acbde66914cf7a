//! State Management
//!
//! The deck controller and page-level signals.

pub mod deck;

pub use deck::{provide_deck_state, use_deck_state, DeckState};
