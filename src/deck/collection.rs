//! The ordered deck of cards on screen
//!
//! Index order is display order and persisted order. Cards are only ever
//! appended and popped from the end.

use crate::deck::types::Card;

/// Identifies one card for as long as it stays in the deck
///
/// Ids are never reused, so a card appended after a removal never takes
/// over the removed card's id even though it takes over its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(u64);

/// A card together with its transient view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub card: Card,
    /// Showing the back face. Never persisted.
    pub flipped: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<CardView>,
    next_id: u64,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut deck = Self::new();
        for card in cards {
            deck.push(card);
        }
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card, returning its index
    pub fn push(&mut self, card: Card) -> usize {
        let id = CardId(self.next_id);
        self.next_id += 1;
        self.cards.push(CardView {
            id,
            card,
            flipped: false,
        });
        self.cards.len() - 1
    }

    /// Remove the most recently appended card
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop().map(|view| view.card)
    }

    pub fn get(&self, index: usize) -> Option<&CardView> {
        self.cards.get(index)
    }

    /// The card at `index`, only if it is still the card with `id`
    pub fn card_mut_if(&mut self, index: usize, id: CardId) -> Option<&mut Card> {
        self.cards
            .get_mut(index)
            .filter(|view| view.id == id)
            .map(|view| &mut view.card)
    }

    /// Toggle a card's flip state, returning the new state
    pub fn toggle_flip(&mut self, index: usize) -> Option<bool> {
        let view = self.cards.get_mut(index)?;
        view.flipped = !view.flipped;
        Some(view.flipped)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter()
    }

    /// Cards in display order, without view state
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().map(|view| &view.card)
    }

    pub fn snapshot(&self) -> Vec<Card> {
        self.cards().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::types::Locale;

    #[test]
    fn test_push_pop_is_stack_ordered() {
        let mut deck = Deck::new();
        assert_eq!(deck.push(Card::new("a", "1")), 0);
        assert_eq!(deck.push(Card::new("b", "2")), 1);
        assert_eq!(deck.len(), 2);

        assert_eq!(deck.pop(), Some(Card::new("b", "2")));
        assert_eq!(deck.pop(), Some(Card::new("a", "1")));
        assert_eq!(deck.pop(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_pop() {
        let mut deck = Deck::new();
        deck.push(Card::new("a", "1"));
        deck.push(Card::new("b", "2"));
        let removed = deck.get(1).unwrap().id;

        deck.pop();
        deck.push(Card::new("c", "3"));
        let replacement = deck.get(1).unwrap().id;

        assert_ne!(removed, replacement);
        assert_ne!(deck.get(0).unwrap().id, replacement);
        assert!(deck.card_mut_if(1, removed).is_none());
        assert_eq!(deck.card_mut_if(1, replacement).unwrap().front, "c");
    }

    #[test]
    fn test_flip_is_per_card() {
        let mut deck = Deck::from_cards(vec![
            Card::placeholder(Locale::En),
            Card::placeholder(Locale::En),
        ]);

        assert_eq!(deck.toggle_flip(1), Some(true));
        assert!(!deck.get(0).unwrap().flipped);
        assert!(deck.get(1).unwrap().flipped);
        assert_eq!(deck.toggle_flip(1), Some(false));
        assert_eq!(deck.toggle_flip(5), None);
    }

    #[test]
    fn test_snapshot_drops_flip_state() {
        let mut deck = Deck::from_cards(vec![Card::new("f", "b")]);
        deck.toggle_flip(0);
        assert_eq!(deck.snapshot(), vec![Card::new("f", "b")]);
    }
}
