use image::{DynamicImage, RgbaImage};

use crate::model::classes::{ClassPercentages, LandCoverClass, round2};
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_decode::analysis_buffer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    pub green: u64,
    pub brown: u64,
    pub blue: u64,
    pub sampled: u64,
}

#[derive(Debug, Clone)]
pub struct Estimate {
    pub percentages: ClassPercentages,
    pub counts: BucketCounts,
    pub analysis_size: (u32, u32),
    pub degraded: bool,
}

impl Estimate {
    pub fn fallback(thresholds: &ThresholdProfile) -> Self {
        Self {
            percentages: thresholds.fallback,
            counts: BucketCounts::default(),
            analysis_size: (0, 0),
            degraded: true,
        }
    }
}

/// Dominance rules, first match wins: green, then red/brown, then blue.
pub fn classify_pixel(rgb: [u8; 3], thresholds: &ThresholdProfile) -> Option<LandCoverClass> {
    let [r, g, b] = rgb;
    if g > r && g > b && g > thresholds.forest_min_green {
        return Some(LandCoverClass::Forest);
    }
    if r > g && r > b && r > thresholds.agriculture_min_red {
        return Some(LandCoverClass::Agriculture);
    }
    if b > r && b > g && b > thresholds.water_min_blue {
        return Some(LandCoverClass::Water);
    }
    None
}

/// Samples every `stride`-th pixel of the row-major pixel sequence.
pub fn count_buckets(buffer: &RgbaImage, thresholds: &ThresholdProfile) -> BucketCounts {
    let mut counts = BucketCounts::default();
    for px in buffer.pixels().step_by(thresholds.stride.max(1)) {
        counts.sampled += 1;
        match classify_pixel([px[0], px[1], px[2]], thresholds) {
            Some(LandCoverClass::Forest) => counts.green += 1,
            Some(LandCoverClass::Agriculture) => counts.brown += 1,
            Some(LandCoverClass::Water) => counts.blue += 1,
            _ => {}
        }
    }
    counts
}

pub fn percentages_from_counts(
    counts: &BucketCounts,
    thresholds: &ThresholdProfile,
) -> Option<ClassPercentages> {
    if counts.sampled == 0 {
        return None;
    }
    let total = counts.sampled as f64;
    let mut forest = round2(counts.green as f64 / total * 100.0);
    let mut agriculture = round2(counts.brown as f64 / total * 100.0);
    let mut water = round2(counts.blue as f64 / total * 100.0);

    // Rounded buckets may overshoot 100 by a few hundredths; the largest
    // absorbs the excess.
    let excess = round2(forest + agriculture + water - 100.0);
    if excess > 0.0 {
        if forest >= agriculture && forest >= water {
            forest = round2(forest - excess);
        } else if agriculture >= water {
            agriculture = round2(agriculture - excess);
        } else {
            water = round2(water - excess);
        }
    }

    let residual = (100.0 - forest - agriculture - water).max(0.0);
    let urban = round2(residual * thresholds.urban_residual_share);
    let road = round2(residual * thresholds.road_residual_share);

    Some(ClassPercentages::new(forest, agriculture, urban, water, road))
}

pub fn estimate(image: &DynamicImage, thresholds: &ThresholdProfile) -> Estimate {
    let buffer = analysis_buffer(image, thresholds.max_side);
    let counts = count_buckets(&buffer, thresholds);
    crate::debug!(
        "sampled {} pixels: green={}, brown={}, blue={}",
        counts.sampled,
        counts.green,
        counts.brown,
        counts.blue
    );
    match percentages_from_counts(&counts, thresholds) {
        Some(percentages) => Estimate {
            percentages,
            counts,
            analysis_size: buffer.dimensions(),
            degraded: false,
        },
        None => {
            crate::warn!("analysis buffer has no pixels; using default distribution");
            Estimate::fallback(thresholds)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_estimate.rs"]
mod tests;
