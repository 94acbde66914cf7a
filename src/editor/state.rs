//! UI state for view and edit modes

use crate::deck::types::Locale;

/// Mode and selection, as one value
///
/// A selection only exists inside edit mode, so leaving edit mode always
/// drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Clicking a card flips it
    #[default]
    View,
    /// Editor shown, nothing targeted
    EditNoSelection,
    /// Editor shown, card at this index targeted
    EditSelected(usize),
}

impl UiState {
    pub fn is_edit_mode(&self) -> bool {
        !matches!(self, UiState::View)
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            UiState::EditSelected(index) => Some(*index),
            _ => None,
        }
    }

    /// Flip between view mode and edit mode
    pub fn toggled(self) -> Self {
        match self {
            UiState::View => UiState::EditNoSelection,
            UiState::EditNoSelection | UiState::EditSelected(_) => UiState::View,
        }
    }

    /// Target a card; has no effect in view mode
    pub fn select(self, index: usize) -> Self {
        match self {
            UiState::View => UiState::View,
            UiState::EditNoSelection | UiState::EditSelected(_) => UiState::EditSelected(index),
        }
    }

    /// Adjust for the deck shrinking to `len` cards
    pub fn clamp_to(self, len: usize) -> Self {
        match self {
            UiState::EditSelected(index) if index >= len => UiState::EditNoSelection,
            other => other,
        }
    }

    /// Label for the toggle control in this state
    pub fn toggle_label(&self, locale: Locale) -> &'static str {
        if self.is_edit_mode() {
            locale.exit_edit_label()
        } else {
            locale.enter_edit_label()
        }
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiState::View => write!(f, "view"),
            UiState::EditNoSelection => write!(f, "edit (no selection)"),
            UiState::EditSelected(index) => write!(f, "edit (card {} selected)", index),
        }
    }
}
