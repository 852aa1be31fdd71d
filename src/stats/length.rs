//! Rank-based length statistics (N20/N50/N80 and fixed-size milestones).
//!
//! Every function walks a [`LengthDistribution`], which is sorted longest first,
//! accumulating a running base count until it strictly exceeds a threshold.

use serde::Serialize;

/// Rank reported when a searched length does not occur in the distribution.
///
/// An unmatched milestone keeps its initial rank of 1 in the report format.
pub const MISSING_RANK: usize = 1;

/// Fixed cumulative-base milestones reported in de novo mode
pub const MILESTONES: [(&str, u64); 7] = [
    ("N50M", 50_000_000),
    ("N100M", 100_000_000),
    ("N200M", 200_000_000),
    ("N300M", 300_000_000),
    ("N500M", 500_000_000),
    ("N800M", 800_000_000),
    ("N1000M", 1_000_000_000),
];

/// Accepted contig lengths in non-increasing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthDistribution(Vec<u64>);

impl LengthDistribution {
    /// Sort lengths longest first.
    #[must_use]
    pub fn from_lengths(mut lengths: Vec<u64>) -> Self {
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        Self(lengths)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.0.last().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.0.first().copied().unwrap_or(0)
    }

    /// Length of the first contig at which the running sum strictly exceeds
    /// `fraction * sum`, or 0 if none does.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rank_at_fraction(&self, fraction: f64, sum: u64) -> u64 {
        let threshold = fraction * sum as f64;
        let mut running = 0u64;
        for &length in &self.0 {
            running += length;
            if threshold < running as f64 {
                return length;
            }
        }
        0
    }

    /// Length of the first contig at which the running sum strictly exceeds
    /// `target` bases, paired with the rank of that length.
    ///
    /// Returns `(0, MISSING_RANK)` when the assembly never reaches `target`.
    /// The rank is looked up by value, so for a missing length it stays at
    /// [`MISSING_RANK`] rather than pointing past the end.
    #[must_use]
    pub fn count_to_length(&self, target: u64) -> (u64, usize) {
        let mut running = 0u64;
        let mut length_at = 0;
        for &length in &self.0 {
            running += length;
            if target < running {
                length_at = length;
                break;
            }
        }
        (length_at, self.rank_of(length_at).unwrap_or(MISSING_RANK))
    }

    /// 0-based index of the first contig with exactly `value` bases.
    #[must_use]
    pub fn rank_of(&self, value: u64) -> Option<usize> {
        self.0.iter().position(|&length| length == value)
    }
}

/// A milestone statistic such as N50M
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub label: &'static str,
    pub target: u64,
    pub length: u64,
    pub rank: usize,
}

/// Summary of a length distribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LengthStatistics {
    /// Number of contigs
    pub count: usize,
    /// 0-based rank of the N50 contig
    pub rank_n50: usize,
    pub min: u64,
    pub n80: u64,
    pub n50: u64,
    pub n20: u64,
    pub max: u64,
    /// Total bases, as accumulated while filtering
    pub sum: u64,
}

impl LengthStatistics {
    /// Compute statistics for `distribution` against the accumulated `sum`.
    ///
    /// An empty distribution yields all zeros.
    #[must_use]
    pub fn compute(distribution: &LengthDistribution, sum: u64) -> Self {
        if distribution.is_empty() {
            return Self {
                sum,
                ..Self::default()
            };
        }

        let n50 = distribution.rank_at_fraction(0.5, sum);
        Self {
            count: distribution.len(),
            rank_n50: distribution.rank_of(n50).unwrap_or(MISSING_RANK),
            min: distribution.min(),
            n80: distribution.rank_at_fraction(0.8, sum),
            n50,
            n20: distribution.rank_at_fraction(0.2, sum),
            max: distribution.max(),
            sum,
        }
    }
}

/// Milestone statistics for every entry of [`MILESTONES`].
///
/// An empty distribution reports every milestone as 0 with rank 0.
#[must_use]
pub fn milestones(distribution: &LengthDistribution) -> Vec<Milestone> {
    MILESTONES
        .iter()
        .map(|&(label, target)| {
            let (length, rank) = if distribution.is_empty() {
                (0, 0)
            } else {
                distribution.count_to_length(target)
            };
            Milestone {
                label,
                target,
                length,
                rank,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(lengths: &[u64]) -> LengthDistribution {
        LengthDistribution::from_lengths(lengths.to_vec())
    }

    #[test]
    fn test_from_lengths_sorts_descending() {
        let dist = distribution(&[25, 100, 50, 50]);
        assert_eq!(dist.as_slice(), &[100, 50, 50, 25]);
        assert_eq!(dist.min(), 25);
        assert_eq!(dist.max(), 100);
    }

    #[test]
    fn test_three_contig_scenario() {
        let dist = distribution(&[100, 50, 25]);
        let stats = LengthStatistics::compute(&dist, 175);

        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 25);
        assert_eq!(stats.max, 100);
        assert_eq!(stats.sum, 175);
        // 87.5 is first exceeded by the first contig
        assert_eq!(stats.n50, 100);
        assert_eq!(stats.rank_n50, 0);
        // 35 is first exceeded by the first contig
        assert_eq!(stats.n20, 100);
        // 140 is first exceeded at 100 + 50
        assert_eq!(stats.n80, 50);
    }

    #[test]
    fn test_threshold_must_be_strictly_exceeded() {
        // half of 200 is 100, reached but not exceeded by the first contig
        let dist = distribution(&[100, 60, 40]);
        assert_eq!(dist.rank_at_fraction(0.5, 200), 60);
    }

    #[test]
    fn test_rank_of_returns_first_occurrence() {
        let dist = distribution(&[10, 30, 30, 20, 30]);
        assert_eq!(dist.as_slice(), &[30, 30, 30, 20, 10]);
        assert_eq!(dist.rank_of(30), Some(0));
        assert_eq!(dist.rank_of(20), Some(3));
        assert_eq!(dist.rank_of(99), None);

        let stats = LengthStatistics::compute(&dist, 120);
        assert_eq!(stats.n50, 30);
        assert_eq!(stats.rank_n50, 0);
    }

    #[test]
    fn test_empty_distribution_is_all_zero() {
        let stats = LengthStatistics::compute(&LengthDistribution::default(), 0);
        assert_eq!(stats, LengthStatistics::default());

        for milestone in milestones(&LengthDistribution::default()) {
            assert_eq!(milestone.length, 0);
            assert_eq!(milestone.rank, 0);
        }
    }

    #[test]
    fn test_zero_length_contigs() {
        let dist = distribution(&[0, 0]);
        let stats = LengthStatistics::compute(&dist, 0);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.n50, 0);
        assert_eq!(stats.rank_n50, 0);
    }

    #[test]
    fn test_count_to_length_reached() {
        let dist = distribution(&[40_000_000, 30_000_000, 20_000_000]);
        assert_eq!(dist.count_to_length(50_000_000), (30_000_000, 1));
        assert_eq!(dist.count_to_length(10), (40_000_000, 0));
    }

    #[test]
    fn test_count_to_length_unreached_keeps_missing_rank() {
        let dist = distribution(&[100, 50, 25]);
        assert_eq!(dist.count_to_length(50_000_000), (0, MISSING_RANK));
    }

    #[test]
    fn test_milestones_labels_and_order() {
        let dist = distribution(&[600_000_000, 500_000_000]);
        let result = milestones(&dist);
        let labels: Vec<&str> = result.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["N50M", "N100M", "N200M", "N300M", "N500M", "N800M", "N1000M"]
        );
        assert_eq!(result[0].length, 600_000_000);
        assert_eq!(result[5].length, 500_000_000);
        assert_eq!(result[5].rank, 1);
        // 1,100,000,000 total bases exceed 1,000,000,000 only at the second contig
        assert_eq!(result[6].length, 500_000_000);
    }

    #[test]
    fn test_n50_property_holds() {
        let dist = distribution(&[7, 3, 9, 1, 12, 5, 5, 8]);
        let sum: u64 = dist.as_slice().iter().sum();
        let n50 = dist.rank_at_fraction(0.5, sum);

        let mut running = 0;
        for (index, &length) in dist.as_slice().iter().enumerate() {
            running += length;
            if running * 2 > sum {
                assert_eq!(length, n50);
                // every earlier cumulative sum stays at or below half
                let before: u64 = dist.as_slice()[..index].iter().sum();
                assert!(before * 2 <= sum);
                break;
            }
        }
    }
}
