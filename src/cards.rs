use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
///
/// The discriminant is the numeric rank used for ordering; the ace only counts
/// as one inside straight detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank text as it appears in a card token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Look up a rank by its numeric value (2..=14).
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// Exact, case-sensitive lookup in the rank table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let r = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Suit symbol of a card.
///
/// Suits carry no ordering meaning; equality is the only operation the
/// classifier relies on. Any character is representable so that tokens from
/// an upstream detector can be taken as-is; use [`Suit::is_standard`] or
/// [`ParseOptions::standard_suits_only`] to restrict to the four real suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Suit(char);

impl Suit {
    pub const CLUBS: Suit = Suit('C');
    pub const DIAMONDS: Suit = Suit('D');
    pub const HEARTS: Suit = Suit('H');
    pub const SPADES: Suit = Suit('S');

    pub const ALL: [Suit; 4] = [Suit::CLUBS, Suit::DIAMONDS, Suit::HEARTS, Suit::SPADES];

    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    pub const fn symbol(self) -> char {
        self.0
    }

    /// True for the conventional `C`, `D`, `H`, `S` symbols.
    pub fn is_standard(self) -> bool {
        Suit::ALL.contains(&self)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use poker_hand::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::HEARTS);
/// assert_eq!(card.to_string(), "10H");
/// assert_eq!("10H".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("malformed card: '{0}'")]
    Malformed(String),
    #[error(transparent)]
    InvalidRank(#[from] RankParseError),
    #[error("invalid suit: '{0}'")]
    InvalidSuit(char),
}

/// How strictly card tokens are read.
///
/// The default matches rank text exactly as supplied and accepts any trailing
/// character as the suit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Upper-case rank and suit before lookup, so `"kh"` reads as `"KH"`.
    pub fold_case: bool,
    /// Reject suits other than `C`, `D`, `H` and `S`.
    pub standard_suits_only: bool,
}

impl ParseOptions {
    /// Exact rank text, standard suits only.
    pub const fn strict() -> Self {
        Self { fold_case: false, standard_suits_only: true }
    }

    /// Case-folded tokens over the four standard suits: `"kh"` reads as
    /// `"KH"`, but `"kx"` is rejected.
    pub const fn normalized() -> Self {
        Self { fold_case: true, standard_suits_only: true }
    }
}

/// Parse a single token such as `"10H"` or `"AC"`: the last character is the
/// suit, everything before it is the rank text.
///
/// ```
/// use poker_hand::cards::{parse_card, CardParseError, ParseOptions, Rank};
///
/// let card = parse_card("QD", ParseOptions::default()).unwrap();
/// assert_eq!(card.rank(), Rank::Queen);
/// assert!(matches!(
///     parse_card("1H", ParseOptions::default()),
///     Err(CardParseError::InvalidRank(_))
/// ));
/// ```
pub fn parse_card(token: &str, options: ParseOptions) -> Result<Card, CardParseError> {
    let mut chars = token.chars();
    let suit_ch =
        chars.next_back().ok_or_else(|| CardParseError::Malformed(token.to_string()))?;
    let rank_text = chars.as_str();
    if rank_text.is_empty() {
        return Err(CardParseError::Malformed(token.to_string()));
    }

    let (rank, symbol) = if options.fold_case {
        (Rank::from_str(&rank_text.to_ascii_uppercase())?, suit_ch.to_ascii_uppercase())
    } else {
        (Rank::from_str(rank_text)?, suit_ch)
    };

    let suit = Suit::new(symbol);
    if options.standard_suits_only && !suit.is_standard() {
        return Err(CardParseError::InvalidSuit(suit_ch));
    }
    Ok(Card::new(rank, suit))
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card(s, ParseOptions::default())
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_hand::cards::{parse_cards, Card, ParseOptions, Rank, Suit};
///
/// let cards = parse_cards("AS, KD 10C", ParseOptions::default()).unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::SPADES));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::DIAMONDS));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::CLUBS));
/// ```
pub fn parse_cards(input: &str, options: ParseOptions) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| parse_card(s, options))
        .collect()
}
