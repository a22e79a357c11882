use crate::cards::{parse_card, Card, CardParseError, ParseOptions, Rank, Suit};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a classified hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// Flat view of [`HandError`] for callers that only need to know which
/// precondition failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidHandSize,
    InvalidRank,
    InvalidSuit,
    MalformedCard,
    DuplicateCard,
}

impl HandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandError::InvalidHandSize(_) => ErrorKind::InvalidHandSize,
            HandError::DuplicateCard(_) => ErrorKind::DuplicateCard,
            HandError::Card(CardParseError::InvalidRank(_)) => ErrorKind::InvalidRank,
            HandError::Card(CardParseError::InvalidSuit(_)) => ErrorKind::InvalidSuit,
            HandError::Card(CardParseError::Malformed(_)) => ErrorKind::MalformedCard,
        }
    }
}

/// Five pairwise distinct cards, kept in the order the caller supplied them.
///
/// ```
/// use poker_hand::cards::ParseOptions;
/// use poker_hand::hand::{ErrorKind, Hand};
///
/// let hand = Hand::from_tokens(&["KH", "AH", "QH", "JH", "10H"], ParseOptions::default()).unwrap();
/// assert_eq!(hand.to_string(), "KH AH QH JH 10H");
///
/// let err = Hand::from_tokens(&["KH", "AH", "QH", "JH"], ParseOptions::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidHandSize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            slice.try_into().map_err(|_| HandError::InvalidHandSize(slice.len()))?;
        Self::try_new(cards)
    }

    /// Parse exactly five tokens. The count is checked before any token is read.
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        options: ParseOptions,
    ) -> Result<Self, HandError> {
        if tokens.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize(tokens.len()));
        }
        let cards = tokens
            .iter()
            .map(|t| parse_card(t.as_ref(), options))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&cards)
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.0.map(Card::rank)
    }

    pub fn suits(&self) -> [Suit; HAND_SIZE] {
        self.0.map(Card::suit)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Tokens separated by whitespace or commas, read with default options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> =
            s.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()).collect();
        Self::from_tokens(&tokens, ParseOptions::default())
    }
}
