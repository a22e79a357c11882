use crate::cards::Rank;
use std::collections::BTreeSet;

/// The only rank set where the ace plays low.
const WHEEL: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let top_rank = detect_straight(ranks);
        StraightInfo { is_straight: top_rank.is_some(), top_rank }
    }
}

/// Return the high rank if the five ranks form a straight.
///
/// Any repeated rank rules out a straight. The wheel (A-2-3-4-5) is a straight
/// with Five high; otherwise the distinct ranks must span exactly four steps.
///
/// ```
/// use poker_hand::cards::Rank;
/// use poker_hand::evaluator::detect_straight;
///
/// let wheel = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
/// assert_eq!(detect_straight(&wheel), Some(Rank::Five));
/// ```
pub fn detect_straight(ranks: &[Rank; 5]) -> Option<Rank> {
    let distinct: BTreeSet<Rank> = ranks.iter().copied().collect();
    if distinct.len() != 5 {
        return None;
    }
    if distinct.iter().copied().eq(WHEEL) {
        return Some(Rank::Five);
    }
    let low = *distinct.first()?;
    let high = *distinct.last()?;
    (high.value() - low.value() == 4).then_some(high)
}
