//! UI Components

pub mod card;
pub mod controls;
pub mod editor;
pub mod toast;

pub use card::CardList;
pub use controls::Controls;
pub use editor::CardEditor;
pub use toast::Toast;
