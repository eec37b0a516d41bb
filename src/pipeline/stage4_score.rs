use crate::model::classes::{ClassPercentages, LandCoverClass, round2};
use crate::model::confidence::ConfidenceSource;
use crate::model::scores::{ComparisonVerdict, DeforestationVerdict};
use crate::model::thresholds::ThresholdProfile;

/// Sum of the forest, agriculture and urban tier contributions.
pub fn deforestation_score(percentages: &ClassPercentages, thresholds: &ThresholdProfile) -> u32 {
    let forest = percentages.scored(LandCoverClass::Forest);
    let agriculture = percentages.scored(LandCoverClass::Agriculture);
    let urban = percentages.scored(LandCoverClass::Urban);

    thresholds.forest_points.lookup(forest)
        + thresholds.agriculture_points.lookup(agriculture)
        + thresholds.urban_points.lookup(urban)
}

/// Single-image verdict.
///
/// A detected verdict draws its confidence base from the score; otherwise the
/// base follows forest cover. The source adds an offset in
/// `[0, confidence_jitter)` on top of the base.
pub fn score(
    percentages: &ClassPercentages,
    thresholds: &ThresholdProfile,
    source: &mut dyn ConfidenceSource,
) -> DeforestationVerdict {
    let score = deforestation_score(percentages, thresholds);
    let detected = score > thresholds.detection_score_min;

    let base = if detected {
        thresholds.detected_confidence.lookup(score as f64)
    } else {
        thresholds
            .healthy_confidence
            .lookup(percentages.scored(LandCoverClass::Forest))
    };
    let offset = source.offset(thresholds.confidence_jitter);
    let confidence = round2(base as f64 + offset).clamp(0.0, 100.0);

    crate::debug!("deforestation score={score} detected={detected} confidence={confidence:.2}");

    DeforestationVerdict {
        detected,
        confidence,
        score,
    }
}

/// Before/after verdict from the drop in forest cover.
pub fn compare(
    before: &ClassPercentages,
    after: &ClassPercentages,
    thresholds: &ThresholdProfile,
) -> ComparisonVerdict {
    let forest_loss =
        before.scored(LandCoverClass::Forest) - after.scored(LandCoverClass::Forest);
    let detected = forest_loss > thresholds.loss_threshold;
    let confidence_percent = (forest_loss * thresholds.loss_slope + thresholds.loss_intercept)
        .clamp(thresholds.loss_confidence_min, thresholds.loss_confidence_max)
        .round();

    ComparisonVerdict {
        detected,
        confidence_percent,
        forest_loss: round2(forest_loss),
    }
}

/// Verdicts for each consecutive pair of frames.
pub fn compare_sequence(
    frames: &[ClassPercentages],
    thresholds: &ThresholdProfile,
) -> Vec<ComparisonVerdict> {
    frames
        .windows(2)
        .map(|pair| compare(&pair[0], &pair[1], thresholds))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_score.rs"]
mod tests;
