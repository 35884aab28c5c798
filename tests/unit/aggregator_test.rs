//! Tests for the verdict aggregator
//!
//! Covers the fail-safe aggregation rules, the configurable escalation
//! tolerance, and the required monotonicity and order-independence
//! properties.

use liftcheck::core::models::{Criticality, ItemStatus, Verdict};
use liftcheck::core::services::aggregate;

use crate::common::fixtures::make_result;

// =============================================================================
// Base rules
// =============================================================================

#[test]
fn all_pass_is_safe_with_no_recommendations() {
    let results = vec![
        make_result("a", ItemStatus::Pass, Criticality::High),
        make_result("b", ItemStatus::Pass, Criticality::Medium),
        make_result("c", ItemStatus::Pass, Criticality::Low),
    ];
    let outcome = aggregate(&results, 0);
    assert_eq!(outcome.verdict, Verdict::Safe);
    assert!(outcome.recommendations.is_empty());
}

#[test]
fn critical_on_high_criticality_item_is_unsafe() {
    let results = vec![
        make_result("a", ItemStatus::Pass, Criticality::Low),
        make_result("b", ItemStatus::Critical, Criticality::High),
    ];
    assert_eq!(aggregate(&results, 0).verdict, Verdict::Unsafe);
}

#[test]
fn critical_on_high_item_is_unsafe_regardless_of_tolerance() {
    let results = vec![make_result("a", ItemStatus::Critical, Criticality::High)];
    assert_eq!(aggregate(&results, 100).verdict, Verdict::Unsafe);
}

#[test]
fn warning_is_caution() {
    let results = vec![
        make_result("a", ItemStatus::Pass, Criticality::High),
        make_result("b", ItemStatus::Warning, Criticality::Low),
    ];
    assert_eq!(aggregate(&results, 0).verdict, Verdict::Caution);
}

#[test]
fn unknown_is_caution_not_unsafe() {
    // Missing-sensor scenario: high-criticality item with no reading
    let results = vec![make_result("motor_temp", ItemStatus::Unknown, Criticality::High)];
    assert_eq!(aggregate(&results, 0).verdict, Verdict::Caution);
}

#[test]
fn empty_results_are_safe() {
    let outcome = aggregate(&[], 0);
    assert_eq!(outcome.verdict, Verdict::Safe);
    assert!(outcome.recommendations.is_empty());
}

// =============================================================================
// Escalation tolerance
// =============================================================================

#[test]
fn low_criticality_critical_exceeding_tolerance_is_unsafe() {
    let results = vec![make_result("a", ItemStatus::Critical, Criticality::Low)];
    assert_eq!(aggregate(&results, 0).verdict, Verdict::Unsafe);
}

#[test]
fn escalations_within_tolerance_are_caution() {
    let results = vec![
        make_result("a", ItemStatus::Critical, Criticality::Low),
        make_result("b", ItemStatus::Warning, Criticality::High),
    ];
    assert_eq!(aggregate(&results, 2).verdict, Verdict::Caution);
    assert_eq!(aggregate(&results, 1).verdict, Verdict::Unsafe);
}

#[test]
fn high_criticality_warning_counts_toward_escalation() {
    let results = vec![make_result("a", ItemStatus::Warning, Criticality::High)];
    assert_eq!(aggregate(&results, 0).verdict, Verdict::Unsafe);
    assert_eq!(aggregate(&results, 1).verdict, Verdict::Caution);
}

// =============================================================================
// Required properties
// =============================================================================

#[test]
fn verdict_is_order_independent() {
    let results = vec![
        make_result("a", ItemStatus::Pass, Criticality::High),
        make_result("b", ItemStatus::Warning, Criticality::High),
        make_result("c", ItemStatus::Critical, Criticality::Low),
        make_result("d", ItemStatus::Unknown, Criticality::Medium),
    ];
    let baseline = aggregate(&results, 1).verdict;

    // Rotate through every cyclic permutation
    let mut rotated = results;
    for _ in 0..4 {
        rotated.rotate_left(1);
        assert_eq!(aggregate(&rotated, 1).verdict, baseline);
    }
}

#[test]
fn raising_severity_never_lowers_the_verdict() {
    let severities = [
        ItemStatus::Pass,
        ItemStatus::Unknown,
        ItemStatus::Warning,
        ItemStatus::Critical,
    ];
    let base = vec![
        make_result("a", ItemStatus::Warning, Criticality::Medium),
        make_result("b", ItemStatus::Pass, Criticality::High),
    ];

    for criticality in [Criticality::Low, Criticality::Medium, Criticality::High] {
        for (i, lower) in severities.iter().enumerate() {
            for higher in &severities[i..] {
                let mut with_lower = base.clone();
                with_lower.push(make_result("x", *lower, criticality));
                let mut with_higher = base.clone();
                with_higher.push(make_result("x", *higher, criticality));

                let v_lower = aggregate(&with_lower, 0).verdict;
                let v_higher = aggregate(&with_higher, 0).verdict;
                assert!(
                    v_higher >= v_lower,
                    "replacing {lower} with {higher} at {criticality} lowered {v_lower} to {v_higher}"
                );
            }
        }
    }
}

// =============================================================================
// Recommendations
// =============================================================================

#[test]
fn one_recommendation_per_non_pass_item_in_order() {
    let results = vec![
        make_result("first", ItemStatus::Warning, Criticality::Low),
        make_result("second", ItemStatus::Pass, Criticality::High),
        make_result("third", ItemStatus::Critical, Criticality::High),
        make_result("fourth", ItemStatus::Unknown, Criticality::Low),
    ];
    let outcome = aggregate(&results, 0);
    assert_eq!(outcome.recommendations.len(), 3);
    assert!(outcome.recommendations[0].starts_with("first"));
    assert!(outcome.recommendations[1].starts_with("third"));
    assert!(outcome.recommendations[2].starts_with("fourth"));
}

#[test]
fn recommendations_carry_the_item_explanation() {
    let results = vec![make_result("vibration", ItemStatus::Warning, Criticality::High)];
    let outcome = aggregate(&results, 1);
    assert_eq!(outcome.recommendations[0], "vibration: vibration explanation");
}
