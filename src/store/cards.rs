//! The card store: the whole deck as one JSON array under a fixed key

use crate::deck::types::{Card, SavedCard};
use crate::store::error::{StoreError, StoreResult};
use crate::store::kv::KeyValueStore;
use serde_json::Value;

/// Storage key holding the persisted deck
pub const STORAGE_KEY: &str = "savedCards";

/// Reads and writes the full card list
///
/// There is no partial write and no versioning: every save replaces the
/// previous value wholesale.
#[derive(Debug, Clone)]
pub struct CardStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> CardStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Read the persisted card list
    ///
    /// Returns `Ok(None)` when nothing has been saved yet, or when the stored
    /// value is empty. A value that is not a JSON array fails with
    /// [`StoreError::Malformed`]; entries inside the array are read
    /// leniently (see [`SavedCard::from_value`]).
    pub fn load(&self) -> StoreResult<Option<Vec<SavedCard>>> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            tracing::debug!(key = %self.key, "Stored deck is empty");
            return Ok(None);
        }

        let entries: Vec<Value> = serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
            key: self.key.clone(),
            reason: e.to_string(),
        })?;
        let cards: Vec<SavedCard> = entries.iter().map(SavedCard::from_value).collect();

        tracing::debug!(key = %self.key, count = cards.len(), "Loaded saved cards");
        Ok(Some(cards))
    }

    /// Overwrite the persisted value with `cards`, in order
    pub fn save_all<'a>(&mut self, cards: impl IntoIterator<Item = &'a Card>) -> StoreResult<()> {
        let cards: Vec<&Card> = cards.into_iter().collect();
        let json = serde_json::to_string(&cards)?;
        self.backend.set(&self.key, &json)?;
        tracing::info!(key = %self.key, count = cards.len(), "Saved cards");
        Ok(())
    }

    /// Read the raw persisted value, as stored
    pub fn raw(&self) -> StoreResult<Option<String>> {
        self.backend.get(&self.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    #[test]
    fn test_load_absent() {
        let store = CardStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let mut store = CardStore::new(MemoryStore::new());
        let cards = vec![
            Card::new("<p>1</p>", "<p>one</p>"),
            Card::new("<p>2</p>", r#"<img src="data:image/png;base64,AA==" alt="x">"#),
            Card::new("<p>3</p>", "<p>three</p>"),
        ];
        store.save_all(&cards).unwrap();

        let loaded: Vec<Card> = store
            .load()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|saved| Card::new(saved.front.unwrap(), saved.back.unwrap()))
            .collect();
        assert_eq!(loaded, cards);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = CardStore::new(MemoryStore::new());
        let cards = vec![Card::new("<p>a</p>", "<p>b</p>")];

        store.save_all(&cards).unwrap();
        let first = store.raw().unwrap();
        store.save_all(&cards).unwrap();
        let second = store.raw().unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.as_deref(),
            Some(r#"[{"front":"<p>a</p>","back":"<p>b</p>"}]"#)
        );
    }

    #[test]
    fn test_save_empty_writes_empty_array() {
        let mut store = CardStore::new(MemoryStore::new());
        store.save_all(&Vec::new()).unwrap();
        assert_eq!(store.raw().unwrap().as_deref(), Some("[]"));
        assert_eq!(store.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_malformed_json_fails() {
        let store = CardStore::new(MemoryStore::new().with_entry(STORAGE_KEY, "[{"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { ref key, .. } if key == STORAGE_KEY));

        let store = CardStore::new(MemoryStore::new().with_entry(STORAGE_KEY, r#"{"front":"x"}"#));
        assert!(store.load().is_err());
    }

    #[test]
    fn test_load_tolerates_corrupt_entries() {
        let raw = r#"[{"front":"<p>a</p>","back":"<p>b</p>"},null,7,{"front":5}]"#;
        let store = CardStore::new(MemoryStore::new().with_entry(STORAGE_KEY, raw));
        let cards = store.load().unwrap().unwrap();

        assert_eq!(cards.len(), 4);
        assert!(cards[0].is_intact());
        assert_eq!(cards[1], SavedCard::default());
        assert_eq!(cards[2], SavedCard::default());
        assert_eq!(cards[3].front.as_deref(), Some("5"));
        assert_eq!(cards[3].back, None);
    }

    #[test]
    fn test_load_empty_value_is_nothing_saved() {
        let store = CardStore::new(MemoryStore::new().with_entry(STORAGE_KEY, ""));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_custom_key() {
        let mut store = CardStore::with_key(MemoryStore::new(), "deck.spanish");
        store.save_all(&vec![Card::new("a", "b")]).unwrap();
        assert!(store.backend().get(STORAGE_KEY).unwrap().is_none());
        assert!(store.backend().get("deck.spanish").unwrap().is_some());
    }
}
