use crate::domain::model::Card;
use crate::domain::ports::SetFinder;
use crate::utils::error::{CardError, Result};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_TABLE_SIZE: usize = 12;
pub const MIN_TABLE_SIZE: usize = 3;
pub const MAX_TABLE_SIZE: usize = 81;

/// Distinct cards lying on the table, in deal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Deals `size` distinct cards from a full deck.
    pub fn deal<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&size) {
            return Err(CardError::InvalidTableSize { size });
        }

        let deck = Card::all();
        let cards = rand::seq::index::sample(rng, deck.len(), size)
            .into_iter()
            .map(|idx| deck[idx])
            .collect();
        tracing::debug!(size, "dealt table");
        Ok(Self { cards })
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(*card) {
                return Err(CardError::DuplicateCard {
                    spec: card.to_spec(),
                });
            }
        }
        Ok(Self { cards })
    }

    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let cards = specs
            .iter()
            .map(|spec| Card::from_spec(spec.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_cards(cards)
    }

    pub fn full_deck() -> Self {
        Self { cards: Card::all() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn find_sets(&self, finder: &dyn SetFinder) -> Vec<[Card; 3]> {
        let sets = finder.find_sets(&self.cards);
        tracing::debug!(
            algorithm = finder.name(),
            cards = self.cards.len(),
            sets = sets.len(),
            "searched table"
        );
        sets
    }
}
