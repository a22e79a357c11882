use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|(_, count)| *count > 0)
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Group sizes, largest first: a full house is `[3, 2]`, two pair `[2, 2, 1]`.
    pub fn multiplicity(&self) -> Vec<u8> {
        self.groups.iter().map(|(_, count)| *count).collect()
    }

    /// True if some rank appears exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.groups.iter().any(|(_, count)| *count == n)
    }

    /// True if the sorted group sizes are exactly `shape`.
    pub fn is_shape(&self, shape: &[u8]) -> bool {
        self.groups.iter().map(|(_, count)| *count).eq(shape.iter().copied())
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
