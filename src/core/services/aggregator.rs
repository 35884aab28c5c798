//! Verdict aggregator - combines item results into an overall verdict
//!
//! The rule is fail-safe and criticality-weighted. The verdict depends only
//! on the multiset of (status, criticality) pairs, so it is independent of
//! result ordering; recommendations still follow the input (checklist) order.

use crate::core::models::{Criticality, ItemResult, ItemStatus, Verdict};

/// The aggregator's output: overall verdict plus recommendations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOutcome {
    /// Overall safety verdict
    pub verdict: Verdict,
    /// One recommendation per non-passing item, in input order
    pub recommendations: Vec<String>,
}

/// Aggregate item results into an overall verdict with recommendations
///
/// Rules, in order:
/// 1. any critical result on a high-criticality item -> unsafe
/// 2. else count critical results on medium/low items plus warnings on high
///    items; above `tolerance` -> unsafe, otherwise caution
/// 3. else any warning or unknown -> caution
/// 4. else -> safe
///
/// `tolerance` is the configured escalation tolerance (default 0).
#[must_use]
pub fn aggregate(results: &[ItemResult], tolerance: usize) -> AggregateOutcome {
    let mut critical_high = false;
    let mut escalations = 0usize;
    let mut degraded = false;

    for result in results {
        match (result.status, result.criticality) {
            (ItemStatus::Critical, Criticality::High) => critical_high = true,
            (ItemStatus::Critical, _) | (ItemStatus::Warning, Criticality::High) => {
                escalations += 1;
            },
            (ItemStatus::Warning | ItemStatus::Unknown, _) => degraded = true,
            (ItemStatus::Pass, _) => {},
        }
    }

    let verdict = if critical_high || escalations > tolerance {
        Verdict::Unsafe
    } else if escalations > 0 || degraded {
        Verdict::Caution
    } else {
        Verdict::Safe
    };

    let recommendations = results
        .iter()
        .filter(|r| r.status.needs_attention())
        .map(|r| format!("{}: {}", r.name, r.explanation))
        .collect();

    log::info!(
        "aggregated {} result(s): verdict {verdict}, {escalations} escalation(s)",
        results.len()
    );

    AggregateOutcome {
        verdict,
        recommendations,
    }
}
