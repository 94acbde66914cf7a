//! The edit controller
//!
//! Owns the deck, the card store and the UI state. Every mutation of the
//! deck (add, remove, edit) is followed by exactly one `save_all`.
//!
//! Card clicks go through [`EditController::click_card`], which checks the
//! current mode: in edit mode a click selects, otherwise it flips.
//!
//! Saving an edit happens in two steps so that surfaces without `&mut`
//! access across an await (the browser frontend) can reuse it:
//!
//! ```text
//! resolve_form(form)  ── both faces read concurrently, joined ──▶ ResolvedEdit
//! apply_edit(target, resolved) ── faces written, deck persisted once ──▶ SaveReport
//! ```
//!
//! The target is captured when the save starts. If that card is removed
//! before the reads finish, the edit is dropped instead of landing on
//! whichever card now sits at the same index.

use crate::deck::collection::{CardId, Deck};
use crate::deck::types::{image, paragraph, Card, Face, Locale, SavedCard};
use crate::editor::error::{EditError, EditResult, ImageError};
use crate::editor::form::{EditorForm, FaceEdit};
use crate::editor::image::ImageLoader;
use crate::editor::state::UiState;
use crate::store::cards::CardStore;
use crate::store::kv::KeyValueStore;
use futures_util::future::join;

/// What a card click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// View mode: the card flipped
    Flipped { index: usize, flipped: bool },
    /// Edit mode: the card is now the selected card. Editor fields should be cleared.
    Selected(usize),
    /// Selection requested outside edit mode
    Ignored,
}

/// Resolved new content for one face
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceUpdate {
    Set(String),
    Unchanged,
    Failed(ImageError),
}

/// Resolved content for both faces, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEdit {
    pub front: FaceUpdate,
    pub back: FaceUpdate,
}

/// What happened to one face during a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceOutcome {
    Updated,
    Unchanged,
    Failed(ImageError),
}

/// The card an edit was submitted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    pub index: usize,
    pub card: CardId,
}

/// Result of submitting the editor form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReport {
    /// No card selected; nothing changed, nothing persisted
    NoSelection,
    /// The target card left the deck before the edit resolved; nothing changed
    Discarded { index: usize },
    /// Faces applied and the deck persisted
    Saved {
        index: usize,
        front: FaceOutcome,
        back: FaceOutcome,
    },
}

impl SaveReport {
    /// Faces whose image could not be read
    pub fn failures(&self) -> Vec<(Face, &ImageError)> {
        let SaveReport::Saved { front, back, .. } = self else {
            return Vec::new();
        };

        [(Face::Front, front), (Face::Back, back)]
            .into_iter()
            .filter_map(|(face, outcome)| match outcome {
                FaceOutcome::Failed(err) => Some((face, err)),
                _ => None,
            })
            .collect()
    }
}

async fn resolve_face<L: ImageLoader>(
    loader: &L,
    edit: FaceEdit<L::Handle>,
    locale: Locale,
) -> FaceUpdate {
    // An image wins over text
    if let Some(handle) = edit.image {
        match loader.load_data_url(handle).await {
            Ok(url) => FaceUpdate::Set(image(&url, locale.image_alt())),
            Err(err) => FaceUpdate::Failed(err),
        }
    } else if !edit.text.is_empty() {
        FaceUpdate::Set(paragraph(&edit.text))
    } else {
        FaceUpdate::Unchanged
    }
}

/// Resolve both faces of `form` concurrently
///
/// Completes only when both faces have resolved, whichever finishes first.
/// A failed image read on one face does not affect the other.
pub async fn resolve_form<L: ImageLoader>(
    form: EditorForm<L::Handle>,
    loader: &L,
    locale: Locale,
) -> ResolvedEdit {
    let (front, back) = join(
        resolve_face(loader, form.front, locale),
        resolve_face(loader, form.back, locale),
    )
    .await;

    ResolvedEdit { front, back }
}

fn apply_face(card: &mut Card, face: Face, update: FaceUpdate) -> FaceOutcome {
    match update {
        FaceUpdate::Set(html) => {
            card.set_face(face, html);
            FaceOutcome::Updated
        }
        FaceUpdate::Unchanged => FaceOutcome::Unchanged,
        FaceUpdate::Failed(err) => FaceOutcome::Failed(err),
    }
}

pub struct EditController<S> {
    deck: Deck,
    store: CardStore<S>,
    state: UiState,
    locale: Locale,
}

impl<S: KeyValueStore> EditController<S> {
    /// Controller over an empty deck; nothing is read from the store
    pub fn new(store: CardStore<S>, locale: Locale) -> Self {
        Self {
            deck: Deck::new(),
            store,
            state: UiState::View,
            locale,
        }
    }

    /// Controller with the saved deck loaded
    pub fn open(store: CardStore<S>, locale: Locale) -> EditResult<Self> {
        let mut controller = Self::new(store, locale);
        controller.load()?;
        Ok(controller)
    }

    /// Append every saved card to the deck
    ///
    /// When the undefined guard had to repair a face, the repaired deck is
    /// written back. A deck loaded as stored is not rewritten. Returns the
    /// number of cards loaded.
    pub fn load(&mut self) -> EditResult<usize> {
        let Some(saved) = self.store.load()? else {
            tracing::debug!("No saved cards");
            return Ok(0);
        };

        let count = saved.len();
        let repaired = saved.iter().filter(|data| !data.is_intact()).count();
        for data in saved {
            self.deck.push(Card::build(Some(data), self.locale));
        }

        if repaired > 0 {
            self.persist()?;
        }
        tracing::info!(count, repaired, "Loaded deck");
        Ok(count)
    }

    /// Create a card and append it to the deck
    ///
    /// `None` creates a placeholder card. Returns the new card's index.
    pub fn add_card(&mut self, data: Option<SavedCard>) -> EditResult<usize> {
        let index = self.deck.push(Card::build(data, self.locale));
        self.persist()?;
        tracing::debug!(index, "Added card");
        Ok(index)
    }

    /// Remove the last card; does nothing on an empty deck
    pub fn remove_last(&mut self) -> EditResult<Option<Card>> {
        let Some(card) = self.deck.pop() else {
            return Ok(None);
        };

        self.state = self.state.clamp_to(self.deck.len());
        self.persist()?;
        tracing::debug!(remaining = self.deck.len(), "Removed last card");
        Ok(Some(card))
    }

    /// Switch between view and edit mode, returning the new state
    ///
    /// Leaving edit mode clears the selection.
    pub fn toggle_edit_mode(&mut self) -> UiState {
        self.state = self.state.toggled();
        tracing::debug!(state = %self.state, "Toggled edit mode");
        self.state
    }

    /// Handle a click on a card
    pub fn click_card(&mut self, index: usize) -> EditResult<ClickOutcome> {
        if self.state.is_edit_mode() {
            self.select_card(index)
        } else {
            let flipped = self.flip_card(index)?;
            Ok(ClickOutcome::Flipped { index, flipped })
        }
    }

    /// Make `index` the selected card
    ///
    /// Ignored outside edit mode. Any previous selection is replaced.
    pub fn select_card(&mut self, index: usize) -> EditResult<ClickOutcome> {
        if !self.state.is_edit_mode() {
            return Ok(ClickOutcome::Ignored);
        }
        self.check_index(index)?;

        self.state = self.state.select(index);
        tracing::debug!(index, "Selected card");
        Ok(ClickOutcome::Selected(index))
    }

    /// Toggle a card's flip state
    pub fn flip_card(&mut self, index: usize) -> EditResult<bool> {
        let len = self.deck.len();
        self.deck
            .toggle_flip(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }

    /// Apply the editor form to the selected card, then persist the deck
    ///
    /// Does nothing when no card is selected.
    pub async fn save_card_content<L: ImageLoader>(
        &mut self,
        form: EditorForm<L::Handle>,
        loader: &L,
    ) -> EditResult<SaveReport> {
        let Some(target) = self.edit_target() else {
            tracing::debug!("Save requested without a selected card");
            return Ok(SaveReport::NoSelection);
        };

        let edit = resolve_form(form, loader, self.locale).await;
        self.apply_edit(target, edit)
    }

    /// The selected card, as the target of an edit
    pub fn edit_target(&self) -> Option<EditTarget> {
        let index = self.state.selected()?;
        let view = self.deck.get(index)?;
        Some(EditTarget {
            index,
            card: view.id,
        })
    }

    /// Write resolved faces to `target` and persist the deck once
    ///
    /// Returns [`SaveReport::Discarded`] without persisting when the target
    /// card has been removed in the meantime.
    pub fn apply_edit(&mut self, target: EditTarget, edit: ResolvedEdit) -> EditResult<SaveReport> {
        let index = target.index;
        let Some(card) = self.deck.card_mut_if(index, target.card) else {
            tracing::debug!(index, "Edit target left the deck; dropping edit");
            return Ok(SaveReport::Discarded { index });
        };

        let front = apply_face(card, Face::Front, edit.front);
        let back = apply_face(card, Face::Back, edit.back);

        let report = SaveReport::Saved { index, front, back };
        for (face, err) in report.failures() {
            tracing::warn!(index, %face, error = %err, "Face left unchanged");
        }

        self.persist()?;
        Ok(report)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.state.selected() == Some(index)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.state
            .selected()
            .and_then(|index| self.deck.get(index))
            .map(|view| &view.card)
    }

    pub fn store(&self) -> &CardStore<S> {
        &self.store
    }

    /// Save the whole deck as it is now
    pub fn persist(&mut self) -> EditResult<()> {
        self.store.save_all(self.deck.cards())?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> EditResult<()> {
        if index < self.deck.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            })
        }
    }
}
