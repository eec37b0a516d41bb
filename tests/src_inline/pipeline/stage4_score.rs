use super::*;
use crate::model::confidence::{FixedConfidence, RandomConfidence};

fn profile() -> ThresholdProfile {
    ThresholdProfile::default_v1()
}

fn pct(forest: f64, agriculture: f64, urban: f64) -> ClassPercentages {
    ClassPercentages::from_pairs([
        ("forest", forest),
        ("agriculture", agriculture),
        ("urban", urban),
    ])
}

#[test]
fn test_low_forest_is_detected() {
    let v = score(&pct(15.0, 10.0, 2.0), &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 40);
    assert!(v.detected);
    // Band is strictly above 40, so a score of exactly 40 takes the 55 base.
    assert_eq!(v.confidence, 55.0);
}

#[test]
fn test_low_forest_confidence_range() {
    let mut src = RandomConfidence::seeded(11);
    for _ in 0..200 {
        let v = score(&pct(15.0, 10.0, 2.0), &profile(), &mut src);
        assert!(v.confidence >= 55.0 && v.confidence <= 65.0);
    }
}

#[test]
fn test_score_just_above_forty_takes_next_band() {
    // 40 + 0 + 5
    let v = score(&pct(15.0, 10.0, 6.0), &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 45);
    assert_eq!(v.confidence, 65.0);
}

#[test]
fn test_healthy_forest_not_detected() {
    let v = score(&pct(90.0, 5.0, 1.0), &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 0);
    assert!(!v.detected);
    assert_eq!(v.confidence, 85.0);

    let v = score(&pct(90.0, 5.0, 1.0), &profile(), &mut FixedConfidence(0.999));
    assert_eq!(v.confidence, 94.99);
}

#[test]
fn test_score_bands_for_detected_confidence() {
    let t = profile();
    // 20 + 25 + 15
    let v = score(&pct(50.0, 40.0, 25.0), &t, &mut FixedConfidence(0.0));
    assert_eq!(v.score, 60);
    assert!(v.detected);
    assert_eq!(v.confidence, 75.0);

    // 40 + 30 + 20
    let v = score(&pct(10.0, 60.0, 35.0), &t, &mut FixedConfidence(0.0));
    assert_eq!(v.score, 90);
    assert_eq!(v.confidence, 85.0);

    // 30 + 0 + 5 -> just above the threshold
    let v = score(&pct(30.0, 5.0, 6.0), &t, &mut FixedConfidence(0.0));
    assert_eq!(v.score, 35);
    assert!(v.detected);
    assert_eq!(v.confidence, 55.0);
}

#[test]
fn test_score_at_threshold_is_not_detected() {
    let v = score(&pct(30.0, 5.0, 2.0), &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 30);
    assert!(!v.detected);
    // Not detected: base follows forest (30 -> 55).
    assert_eq!(v.confidence, 55.0);
}

#[test]
fn test_not_detected_confidence_follows_forest() {
    let t = profile();
    let v = score(&pct(70.0, 5.0, 3.0), &t, &mut FixedConfidence(0.0));
    assert_eq!(v.score, 10);
    assert_eq!(v.confidence, 75.0);

    let v = score(&pct(61.0, 12.0, 3.0), &t, &mut FixedConfidence(0.0));
    assert_eq!(v.score, 20);
    assert_eq!(v.confidence, 75.0);
}

#[test]
fn test_missing_keys_score_as_zero() {
    let only_forest = ClassPercentages::from_pairs([("forest", 85.0)]);
    let v = score(&only_forest, &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 0);
    assert!(!v.detected);

    let empty = ClassPercentages::default();
    let v = score(&empty, &profile(), &mut FixedConfidence(0.0));
    assert_eq!(v.score, 40);
    assert!(v.detected);
}

#[test]
fn test_negative_fields_score_as_zero() {
    let p = ClassPercentages {
        forest: -50.0,
        ..Default::default()
    };
    assert_eq!(deforestation_score(&p, &profile()), 40);
}

#[test]
fn test_compare_forest_loss_detected() {
    let before = ClassPercentages::from_pairs([("forest", 80.0)]);
    let after = ClassPercentages::from_pairs([("forest", 70.0)]);
    let v = compare(&before, &after, &profile());
    assert!(v.detected);
    assert_eq!(v.forest_loss, 10.0);
    assert_eq!(v.confidence_percent, 95.0);
}

#[test]
fn test_compare_small_loss() {
    let before = ClassPercentages::from_pairs([("forest", 80.0)]);
    let after = ClassPercentages::from_pairs([("forest", 78.0)]);
    let v = compare(&before, &after, &profile());
    assert!(!v.detected);
    assert_eq!(v.confidence_percent, 90.0);
}

#[test]
fn test_compare_loss_at_threshold_not_detected() {
    let before = ClassPercentages::from_pairs([("forest", 50.0)]);
    let after = ClassPercentages::from_pairs([("forest", 45.0)]);
    let v = compare(&before, &after, &profile());
    assert!(!v.detected);
    assert_eq!(v.confidence_percent, 95.0);
}

#[test]
fn test_compare_forest_gain_floors_confidence() {
    let before = ClassPercentages::from_pairs([("forest", 50.0)]);
    let after = ClassPercentages::from_pairs([("forest", 70.0)]);
    let v = compare(&before, &after, &profile());
    assert!(!v.detected);
    assert_eq!(v.forest_loss, -20.0);
    assert_eq!(v.confidence_percent, 60.0);
}

#[test]
fn test_compare_rounds_confidence() {
    let before = ClassPercentages::from_pairs([("forest", 40.0)]);
    let after = ClassPercentages::from_pairs([("forest", 40.75)]);
    let v = compare(&before, &after, &profile());
    // -0.75 * 10 + 70 = 62.5
    assert_eq!(v.confidence_percent, 63.0);
}

#[test]
fn test_compare_sequence_pairs() {
    let frames = vec![
        ClassPercentages::from_pairs([("forest", 80.0)]),
        ClassPercentages::from_pairs([("forest", 70.0)]),
        ClassPercentages::from_pairs([("forest", 69.0)]),
    ];
    let out = compare_sequence(&frames, &profile());
    assert_eq!(out.len(), 2);
    assert!(out[0].detected);
    assert!(!out[1].detected);
    assert!(compare_sequence(&frames[..1], &profile()).is_empty());
}
