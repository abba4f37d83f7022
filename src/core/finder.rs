use crate::domain::model::{third_card_bits, Card};
use crate::domain::ports::SetFinder;
use crate::utils::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Tries every triple with [`Card::is_set`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateAndTest;

/// Tries every triple with [`Card::is_set_mod`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateAndTestMod;

/// For every pair, looks the completing card up in a hash map of positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThirdCardLookup;

/// Like [`ThirdCardLookup`], on packed cards with a 256-slot position table.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitLookup;

fn triples(cards: &[Card], test: impl Fn(&Card, &Card, &Card) -> bool) -> Vec<[Card; 3]> {
    let mut found = Vec::new();
    for (i, ci) in cards.iter().enumerate() {
        for (j, cj) in cards.iter().enumerate().skip(i + 1) {
            for ck in cards.iter().skip(j + 1) {
                if test(ci, cj, ck) {
                    found.push([*ci, *cj, *ck]);
                }
            }
        }
    }
    found
}

impl SetFinder for GenerateAndTest {
    fn name(&self) -> &'static str {
        "gnt"
    }

    fn find_sets(&self, cards: &[Card]) -> Vec<[Card; 3]> {
        triples(cards, |a, b, c| a.is_set(b, c))
    }
}

impl SetFinder for GenerateAndTestMod {
    fn name(&self) -> &'static str {
        "gnt-mod"
    }

    fn find_sets(&self, cards: &[Card]) -> Vec<[Card; 3]> {
        triples(cards, |a, b, c| a.is_set_mod(b, c))
    }
}

impl SetFinder for ThirdCardLookup {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn find_sets(&self, cards: &[Card]) -> Vec<[Card; 3]> {
        let have: HashMap<Card, usize> = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (*card, pos))
            .collect();

        let mut found = Vec::new();
        for (i, ci) in cards.iter().enumerate() {
            for (j, cj) in cards.iter().enumerate().skip(i + 1) {
                if let Some(&k) = have.get(&ci.third_card(cj)) {
                    // k > j keeps each set once, in position order
                    if k > j {
                        found.push([*ci, *cj, cards[k]]);
                    }
                }
            }
        }
        found
    }
}

impl SetFinder for BitLookup {
    fn name(&self) -> &'static str {
        "fast"
    }

    fn find_sets(&self, cards: &[Card]) -> Vec<[Card; 3]> {
        let mut have: [Option<usize>; 256] = [None; 256];
        for (pos, card) in cards.iter().enumerate() {
            have[card.bits() as usize] = Some(pos);
        }

        let mut found = Vec::new();
        for (i, ci) in cards.iter().enumerate() {
            for (j, cj) in cards.iter().enumerate().skip(i + 1) {
                let wanted = third_card_bits(ci.bits(), cj.bits());
                match have[wanted as usize] {
                    Some(k) if k > j => found.push([*ci, *cj, cards[k]]),
                    _ => {}
                }
            }
        }
        found
    }
}

/// Selects a [`SetFinder`] by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinderKind {
    Gnt,
    GntMod,
    Simple,
    #[default]
    Fast,
}

impl FinderKind {
    pub const ALL: [FinderKind; 4] = [
        FinderKind::Gnt,
        FinderKind::GntMod,
        FinderKind::Simple,
        FinderKind::Fast,
    ];

    pub fn finder(self) -> Box<dyn SetFinder> {
        match self {
            FinderKind::Gnt => Box::new(GenerateAndTest),
            FinderKind::GntMod => Box::new(GenerateAndTestMod),
            FinderKind::Simple => Box::new(ThirdCardLookup),
            FinderKind::Fast => Box::new(BitLookup),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FinderKind::Gnt => "gnt",
            FinderKind::GntMod => "gnt-mod",
            FinderKind::Simple => "simple",
            FinderKind::Fast => "fast",
        }
    }
}

impl fmt::Display for FinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinderKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        FinderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CardError::InvalidConfigValueError {
                field: "algorithm".to_string(),
                value: s.to_string(),
                reason: "expected one of gnt, gnt-mod, simple, fast".to_string(),
            })
    }
}
