pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use straight_info::detect_straight;

use crate::cards::{ParseOptions, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use log::{debug, trace};
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The discriminant is the category's score. A higher score always beats a
/// lower one; hands inside one category are not ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn score(self) -> u8 {
        self as u8
    }

    /// Display name, e.g. `"Full House"`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }

    pub fn from_score(score: u8) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.score() == score)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying one hand. Ordering and equality follow `category` only.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub hand: Hand,
    /// High card of the straight, when the hand is one (Five for the wheel).
    pub straight_high: Option<Rank>,
}

impl Evaluation {
    pub const fn score(&self) -> u8 {
        self.category.score()
    }

    pub const fn name(&self) -> &'static str {
        self.category.name()
    }

    /// The `(score, name)` pair.
    pub const fn as_pair(&self) -> (u8, &'static str) {
        (self.score(), self.name())
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
    }
}

impl Eq for Evaluation {}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (score: {})", self.name(), self.score())
    }
}

/// Classify a validated hand. Input order does not affect the result.
pub fn classify_hand(hand: &Hand) -> Evaluation {
    let analysis = hand_analysis::HandAnalysis::new(hand);
    let category = detector::first_match(&analysis);
    trace!(
        "{hand}: flush={} straight={:?} groups={:?}",
        analysis.is_flush(),
        analysis.straight_info.top_rank,
        analysis.rank_groups.multiplicity()
    );
    Evaluation { category, hand: *hand, straight_high: analysis.straight_info.top_rank }
}

/// Validate and classify five card tokens.
///
/// Fails without a partial result if the token count is not five, a token
/// does not parse, or a card repeats.
///
/// ```
/// use poker_hand::cards::ParseOptions;
/// use poker_hand::evaluator::{classify, Category};
///
/// let eval = classify(&["QC", "JC", "10C", "9C", "8C"], ParseOptions::default()).unwrap();
/// assert_eq!(eval.category, Category::StraightFlush);
/// assert_eq!(eval.as_pair(), (9, "Straight Flush"));
/// ```
pub fn classify<S: AsRef<str>>(
    tokens: &[S],
    options: ParseOptions,
) -> Result<Evaluation, HandError> {
    let hand = Hand::from_tokens(tokens, options).map_err(|e| {
        debug!("rejected hand: {e}");
        e
    })?;
    let eval = classify_hand(&hand);
    debug!("{hand} => {eval}");
    Ok(eval)
}

/// `(score, name)` for five tokens read with default options.
///
/// ```
/// use poker_hand::evaluator::grade;
///
/// assert_eq!(grade(&["KH", "AH", "QH", "JH", "10H"]).unwrap(), (10, "Royal Flush"));
/// ```
pub fn grade<S: AsRef<str>>(tokens: &[S]) -> Result<(u8, &'static str), HandError> {
    classify(tokens, ParseOptions::default()).map(|e| e.as_pair())
}
