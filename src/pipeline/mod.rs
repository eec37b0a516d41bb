pub mod stage1_decode;
pub mod stage2_estimate;
pub mod stage3_render;
pub mod stage4_score;
pub mod stage5_report;

use image::DynamicImage;

use crate::model::classes::ClassPercentages;
use crate::model::confidence::ConfidenceSource;
use crate::model::scores::DeforestationVerdict;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_decode::decode_image;
use crate::pipeline::stage2_estimate::{Estimate, estimate};
use crate::pipeline::stage3_render::{
    MASK_SIZE, RenderError, encode_png, render_mask, render_overlay,
};
use crate::pipeline::stage4_score::score;
use crate::report::FrameRow;

/// Outcome of analysing one image. Built once by [`predict`] and never
/// modified afterwards.
#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub original_image: Vec<u8>,
    pub segmentation_mask: Vec<u8>,
    pub overlay: Vec<u8>,
    pub class_percentages: ClassPercentages,
    pub original_size: (u32, u32),
    pub prediction_size: (u32, u32),
    pub degraded: bool,
}

pub fn predict(
    bytes: &[u8],
    thresholds: &ThresholdProfile,
) -> Result<PredictionResult, RenderError> {
    let mask = render_mask(MASK_SIZE, MASK_SIZE);

    let (analysis, original_size, overlay) = match decode_image(bytes) {
        Ok(image) => {
            let analysis = estimate(&image, thresholds);
            let overlay = render_overlay(&image.to_rgba8());
            (analysis, (image.width(), image.height()), overlay)
        }
        Err(err) => {
            crate::warn!("image decode failed ({err}); using default distribution");
            let overlay = render_overlay(&DynamicImage::ImageRgb8(mask.clone()).to_rgba8());
            (Estimate::fallback(thresholds), (0, 0), overlay)
        }
    };

    crate::debug!(
        "analysis buffer {}x{} ({} samples, degraded={})",
        analysis.analysis_size.0,
        analysis.analysis_size.1,
        analysis.counts.sampled,
        analysis.degraded
    );

    let segmentation_mask = encode_png(&DynamicImage::ImageRgb8(mask))?;
    let overlay = encode_png(&DynamicImage::ImageRgba8(overlay))?;

    Ok(PredictionResult {
        original_image: bytes.to_vec(),
        segmentation_mask,
        overlay,
        class_percentages: analysis.percentages,
        original_size,
        prediction_size: analysis.analysis_size,
        degraded: analysis.degraded,
    })
}

/// A prediction together with its single-image verdict.
#[derive(Debug, Clone)]
pub struct AnalyzedFrame {
    pub name: String,
    pub prediction: PredictionResult,
    pub verdict: DeforestationVerdict,
}

impl AnalyzedFrame {
    pub fn row(&self) -> FrameRow {
        FrameRow {
            name: self.name.clone(),
            original_bytes: self.prediction.original_image.len(),
            original_size: self.prediction.original_size,
            prediction_size: self.prediction.prediction_size,
            degraded: self.prediction.degraded,
            percentages: self.prediction.class_percentages,
            verdict: self.verdict,
        }
    }
}

pub fn analyze_frame(
    name: &str,
    bytes: &[u8],
    thresholds: &ThresholdProfile,
    source: &mut dyn ConfidenceSource,
) -> Result<AnalyzedFrame, RenderError> {
    let prediction = predict(bytes, thresholds)?;
    let verdict = score(&prediction.class_percentages, thresholds, source);
    crate::info!(
        "{}: forest={:.2} agriculture={:.2} urban={:.2} water={:.2} road={:.2} score={} detected={}",
        name,
        prediction.class_percentages.forest,
        prediction.class_percentages.agriculture,
        prediction.class_percentages.urban,
        prediction.class_percentages.water,
        prediction.class_percentages.road,
        verdict.score,
        verdict.detected
    );
    Ok(AnalyzedFrame {
        name: name.to_string(),
        prediction,
        verdict,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
