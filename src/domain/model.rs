use crate::utils::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Low bit of each 2-bit attribute field.
pub const MASK0: u8 = 0b0101_0101;
/// High bit of each 2-bit attribute field.
pub const MASK1: u8 = 0b1010_1010;

/// The four card attributes, in spec-string order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Number,
    Shape,
    Color,
    Shading,
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Number,
        Attribute::Shape,
        Attribute::Color,
        Attribute::Shading,
    ];

    /// Reference alphabet; a symbol's position in it is the attribute value.
    pub fn alphabet(self) -> &'static str {
        match self {
            Attribute::Number => "123",
            Attribute::Shape => "sdo",
            Attribute::Color => "rpg",
            Attribute::Shading => "fhe",
        }
    }

    /// Mixed-radix weight used for the image index.
    pub fn weight(self) -> u8 {
        match self {
            Attribute::Number => 1,
            Attribute::Shape => 9,
            Attribute::Color => 3,
            Attribute::Shading => 27,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Number => "number",
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Shading => "shading",
        }
    }

    pub fn decode(self, symbol: char, position: usize) -> Result<u8> {
        self.alphabet()
            .chars()
            .position(|c| c == symbol)
            .map(|idx| idx as u8)
            .ok_or(CardError::UnknownSymbol {
                attribute: self.name(),
                symbol,
                position,
                alphabet: self.alphabet(),
            })
    }

    pub fn symbol(self, value: u8) -> char {
        self.alphabet()
            .chars()
            .nth(value as usize)
            .unwrap_or('?')
    }
}

/// A card: number, shape, color, shading, each 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    attrs: [u8; 4],
}

impl Card {
    pub fn new(attrs: [u8; 4]) -> Result<Self> {
        for (attribute, &value) in Attribute::ALL.iter().zip(attrs.iter()) {
            if value > 2 {
                return Err(CardError::InvalidAttributeValue {
                    attribute: attribute.name(),
                    value,
                });
            }
        }
        Ok(Self { attrs })
    }

    /// Parses a 4-character spec string such as `2dgh`.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let symbols: Vec<char> = spec.chars().collect();
        if symbols.len() != 4 {
            return Err(CardError::InvalidSpecLength {
                spec: spec.to_string(),
                len: symbols.len(),
            });
        }

        let mut attrs = [0u8; 4];
        for (position, (attribute, symbol)) in Attribute::ALL.iter().zip(symbols).enumerate() {
            attrs[position] = attribute.decode(symbol, position)?;
        }
        Ok(Self { attrs })
    }

    pub fn to_spec(&self) -> String {
        Attribute::ALL
            .iter()
            .zip(self.attrs.iter())
            .map(|(attribute, &value)| attribute.symbol(value))
            .collect()
    }

    pub fn attrs(&self) -> [u8; 4] {
        self.attrs
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        self.attrs[attribute as usize]
    }

    /// Image number in `1..=81`.
    pub fn image_index(&self) -> u8 {
        Attribute::ALL
            .iter()
            .zip(self.attrs.iter())
            .map(|(attribute, &value)| value * attribute.weight())
            .sum::<u8>()
            + 1
    }

    /// Two bits per attribute, first attribute in the highest bits.
    pub fn bits(&self) -> u8 {
        self.attrs
            .iter()
            .fold(0u8, |acc, &value| (acc << 2) | value)
    }

    pub fn from_bits(bits: u8) -> Option<Self> {
        let mut attrs = [0u8; 4];
        for (i, slot) in attrs.iter_mut().enumerate() {
            let value = (bits >> (2 * (3 - i))) & 0b11;
            if value > 2 {
                return None;
            }
            *slot = value;
        }
        Some(Self { attrs })
    }

    /// All 81 cards, first attribute varying slowest.
    pub fn all() -> Vec<Card> {
        let mut cards = Vec::with_capacity(81);
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    for d in 0..3 {
                        cards.push(Card {
                            attrs: [a, b, c, d],
                        });
                    }
                }
            }
        }
        cards
    }

    /// Each attribute is either the same on all three cards or different on all three.
    pub fn is_set(&self, card1: &Card, card2: &Card) -> bool {
        (0..4).all(|i| {
            let (v0, v1, v2) = (self.attrs[i], card1.attrs[i], card2.attrs[i]);
            let all_same = v0 == v1 && v1 == v2;
            let all_different = v0 != v1 && v1 != v2 && v0 != v2;
            all_same || all_different
        })
    }

    pub fn is_set_mod(&self, card1: &Card, card2: &Card) -> bool {
        (0..4).all(|i| (self.attrs[i] + card1.attrs[i] + card2.attrs[i]) % 3 == 0)
    }

    /// The unique card completing a set with `self` and `other`.
    pub fn third_card(&self, other: &Card) -> Card {
        let mut attrs = [0u8; 4];
        for (i, slot) in attrs.iter_mut().enumerate() {
            *slot = (6 - self.attrs[i] - other.attrs[i]) % 3;
        }
        Card { attrs }
    }
}

/// `third_card` on the packed representation.
pub fn third_card_bits(x: u8, y: u8) -> u8 {
    let xor = x ^ y;
    let swap = ((xor & MASK1) >> 1) | ((xor & MASK0) << 1);
    (x & y) | (!(x | y) & swap)
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_spec())
    }
}

impl std::str::FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Card::from_spec(s)
    }
}

impl Serialize for Card {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_spec())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Card::from_spec(&spec).map_err(serde::de::Error::custom)
    }
}
