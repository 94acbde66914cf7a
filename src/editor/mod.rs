//! Edit mode and the edit controller
//!
//! - **state**: `UiState`, the view/edit/selection state machine
//! - **form**: editor form input for the two faces
//! - **image**: image-to-data-URL loading
//! - **controller**: `EditController`, which owns the deck, the store and the UI state
//! - **error**: Error types
//!
//! # State machine
//!
//! ```text
//!            toggle                click(i)
//!   View ──────────▶ EditNoSelection ──────▶ EditSelected(i) ─┐ click(j)
//!    ▲                     │                     ▲  │         │
//!    └──────── toggle ─────┴─────── toggle ──────┘  └─────────┘
//! ```

pub mod controller;
pub mod error;
pub mod form;
pub mod image;
pub mod state;

pub use controller::{
    resolve_form, ClickOutcome, EditController, EditTarget, FaceOutcome, FaceUpdate, ResolvedEdit,
    SaveReport,
};
pub use error::{EditError, EditResult, ImageError};
pub use form::{EditorForm, FaceEdit};
#[cfg(feature = "native")]
pub use image::FsImageLoader;
pub use image::{data_url, mime_for_path, ImageLoader};
pub use state::UiState;
