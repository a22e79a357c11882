use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::hand::Hand;

/// Facts about a 5-card hand that the category rules are decided on.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(hand: &Hand) -> Self {
        let ranks = hand.ranks();
        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(hand.cards());
        let straight_info = StraightInfo::detect(&ranks);

        Self { rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush
    }

    pub fn is_straight(&self) -> bool {
        self.straight_info.is_straight
    }
}
