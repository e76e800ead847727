use crate::currency_scoring::domain::{ErrataCounts, SeverityCounts};
use crate::currency_scoring::policies::{SeverityWeights, SimpleWeights};

/// CurrencyScorer domain service
///
/// Turns errata counts into the weighted currency score. Higher means the
/// host is further behind on updates; 0 means nothing is outstanding (or,
/// in the simple report, that the server could not count).
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyScorer {
    simple_weights: SimpleWeights,
    severity_weights: SeverityWeights,
}

impl CurrencyScorer {
    pub fn new(simple_weights: SimpleWeights, severity_weights: SeverityWeights) -> Self {
        Self {
            simple_weights,
            severity_weights,
        }
    }

    /// Score for the simple report. A null count anywhere yields 0.
    pub fn simple_score(&self, counts: &ErrataCounts) -> u64 {
        match counts.complete() {
            Some((security, bugfix, enhancement)) => {
                self.simple_weights.weigh(security, bugfix, enhancement)
            }
            None => 0,
        }
    }

    /// Score for the advanced report
    pub fn advanced_score(&self, counts: &SeverityCounts) -> u64 {
        self.severity_weights.weigh(counts)
    }
}
