pub mod json;
pub mod text;

use crate::model::classes::{ClassPercentages, LandCoverClass};
use crate::model::scores::{ComparisonVerdict, DeforestationVerdict};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One analysed frame as seen by the report writers.
#[derive(Debug, Clone)]
pub struct FrameRow {
    pub name: String,
    pub original_bytes: usize,
    pub original_size: (u32, u32),
    pub prediction_size: (u32, u32),
    pub degraded: bool,
    pub percentages: ClassPercentages,
    pub verdict: DeforestationVerdict,
}

#[derive(Debug, Clone)]
pub struct TransitionRow {
    pub from: String,
    pub to: String,
    pub forest_before: f64,
    pub forest_after: f64,
    pub verdict: ComparisonVerdict,
}

#[derive(Debug, Clone, Copy)]
pub struct ForestTrend {
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub net_loss: f64,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn forest_trend(frames: &[FrameRow]) -> Option<ForestTrend> {
    let first = frames.first()?.percentages.forest;
    let last = frames.last()?.percentages.forest;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for f in frames {
        min = min.min(f.percentages.forest);
        max = max.max(f.percentages.forest);
    }
    Some(ForestTrend {
        first,
        last,
        min,
        max,
        net_loss: first - last,
    })
}

pub fn cover_statement(percentages: &ClassPercentages) -> &'static str {
    match percentages.dominant() {
        LandCoverClass::Forest => "Scene is dominated by forest-like cover.",
        LandCoverClass::Agriculture => "Scene is dominated by cleared or cultivated land.",
        LandCoverClass::Urban => "Scene is dominated by built-up or unclassified surfaces.",
        LandCoverClass::Water => "Scene is dominated by water.",
        LandCoverClass::Road => "Scene is dominated by road-like surfaces.",
    }
}

pub fn verdict_label(detected: bool) -> &'static str {
    if detected {
        "DEFORESTATION_DETECTED"
    } else {
        "NO_DEFORESTATION"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
