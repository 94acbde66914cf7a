//! Flipdeck storage
//!
//! - **kv**: `KeyValueStore` trait and the in-memory backend
//! - **file**: JSON-file backend emulating browser local storage (native only)
//! - **cards**: `CardStore`, the deck persisted under one fixed key
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! "savedCards" → [{"front":"<p>…</p>","back":"<img src=\"data:…\" alt=\"…\">"}, …]
//! ```

pub mod cards;
pub mod error;
#[cfg(feature = "native")]
pub mod file;
pub mod kv;

pub use cards::{CardStore, STORAGE_KEY};
pub use error::{StoreError, StoreResult};
#[cfg(feature = "native")]
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
