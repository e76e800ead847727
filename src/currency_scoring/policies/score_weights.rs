use crate::currency_scoring::domain::SeverityCounts;

/// Weights for the simple report, applied to the server's aggregate counts.
///
/// Values follow `spacewalk-report system-currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleWeights {
    pub security: u64,
    pub bugfix: u64,
    pub enhancement: u64,
}

impl SimpleWeights {
    pub const STANDARD: SimpleWeights = SimpleWeights {
        security: 8,
        bugfix: 2,
        enhancement: 1,
    };

    /// Weighted sum of the counts, saturating at `u64::MAX`
    pub fn weigh(&self, security: u64, bugfix: u64, enhancement: u64) -> u64 {
        weighted_sum(&[
            (security, self.security),
            (bugfix, self.bugfix),
            (enhancement, self.enhancement),
        ])
    }
}

impl Default for SimpleWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Weights for the advanced report. Each security severity step doubles
/// the weight of the one below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityWeights {
    pub critical: u64,
    pub important: u64,
    pub moderate: u64,
    pub low: u64,
    pub bugfix: u64,
    pub enhancement: u64,
}

impl SeverityWeights {
    pub const STANDARD: SeverityWeights = SeverityWeights {
        critical: 32,
        important: 16,
        moderate: 8,
        low: 4,
        bugfix: 2,
        enhancement: 1,
    };

    /// Weighted sum of the counts, saturating at `u64::MAX`
    pub fn weigh(&self, counts: &SeverityCounts) -> u64 {
        weighted_sum(&[
            (counts.critical, self.critical),
            (counts.important, self.important),
            (counts.moderate, self.moderate),
            (counts.low, self.low),
            (counts.bugfix, self.bugfix),
            (counts.enhancement, self.enhancement),
        ])
    }
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Counts come from server JSON unchecked
fn weighted_sum(terms: &[(u64, u64)]) -> u64 {
    terms.iter().fold(0u64, |sum, &(count, weight)| {
        sum.saturating_add(count.saturating_mul(weight))
    })
}
