use serde::Serialize;

use crate::model::classes::{ClassPercentages, LandCoverClass, legend_order};
use crate::model::scores::{ComparisonVerdict, DeforestationVerdict};
use crate::model::thresholds::ThresholdProfile;
use crate::report::{FrameRow, TransitionRow, forest_trend};

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeuristicInfo {
    pub max_side: u32,
    pub stride: usize,
    pub detection_score_min: u32,
    pub loss_threshold: f64,
}

impl HeuristicInfo {
    pub fn from_profile(thresholds: &ThresholdProfile) -> Self {
        Self {
            max_side: thresholds.max_side,
            stride: thresholds.stride,
            detection_score_min: thresholds.detection_score_min,
            loss_threshold: thresholds.loss_threshold,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameSummary<'a> {
    pub name: &'a str,
    pub original_bytes: usize,
    pub original_size: [u32; 2],
    pub prediction_size: [u32; 2],
    pub degraded: bool,
    pub class_percentages: &'a ClassPercentages,
    pub dominant_class: LandCoverClass,
    pub verdict: &'a DeforestationVerdict,
}

impl<'a> FrameSummary<'a> {
    pub fn from_row(row: &'a FrameRow) -> Self {
        Self {
            name: &row.name,
            original_bytes: row.original_bytes,
            original_size: [row.original_size.0, row.original_size.1],
            prediction_size: [row.prediction_size.0, row.prediction_size.1],
            degraded: row.degraded,
            class_percentages: &row.percentages,
            dominant_class: row.percentages.dominant(),
            verdict: &row.verdict,
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalysisSummary<'a> {
    tool: ToolInfo,
    heuristic: HeuristicInfo,
    frame: FrameSummary<'a>,
}

#[derive(Debug, Serialize)]
struct ComparisonSummary<'a> {
    tool: ToolInfo,
    heuristic: HeuristicInfo,
    before: FrameSummary<'a>,
    after: FrameSummary<'a>,
    comparison: &'a ComparisonVerdict,
}

#[derive(Debug, Serialize)]
struct TransitionSummary<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(flatten)]
    verdict: &'a ComparisonVerdict,
}

#[derive(Debug, Serialize)]
struct TrendSummary {
    first: f64,
    last: f64,
    min: f64,
    max: f64,
    net_loss: f64,
}

#[derive(Debug, Serialize)]
struct TimelapseSummary<'a> {
    tool: ToolInfo,
    heuristic: HeuristicInfo,
    n_frames: usize,
    frames: Vec<FrameSummary<'a>>,
    transitions: Vec<TransitionSummary<'a>>,
    forest_trend: Option<TrendSummary>,
    any_transition_detected: bool,
}

#[derive(Debug, Serialize)]
struct ClassEntry {
    class: LandCoverClass,
    color: [u8; 3],
}

#[derive(Debug, Serialize)]
struct ClassCatalog {
    loaded: bool,
    classes: Vec<LandCoverClass>,
    class_dict: Vec<ClassEntry>,
    num_classes: usize,
}

pub fn render_analysis_json(
    row: &FrameRow,
    thresholds: &ThresholdProfile,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AnalysisSummary {
        tool: ToolInfo::current(),
        heuristic: HeuristicInfo::from_profile(thresholds),
        frame: FrameSummary::from_row(row),
    })
}

pub fn render_comparison_json(
    before: &FrameRow,
    after: &FrameRow,
    verdict: &ComparisonVerdict,
    thresholds: &ThresholdProfile,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ComparisonSummary {
        tool: ToolInfo::current(),
        heuristic: HeuristicInfo::from_profile(thresholds),
        before: FrameSummary::from_row(before),
        after: FrameSummary::from_row(after),
        comparison: verdict,
    })
}

pub fn render_timelapse_json(
    frames: &[FrameRow],
    transitions: &[TransitionRow],
    thresholds: &ThresholdProfile,
) -> Result<String, serde_json::Error> {
    let trend = forest_trend(frames).map(|t| TrendSummary {
        first: t.first,
        last: t.last,
        min: t.min,
        max: t.max,
        net_loss: t.net_loss,
    });
    serde_json::to_string_pretty(&TimelapseSummary {
        tool: ToolInfo::current(),
        heuristic: HeuristicInfo::from_profile(thresholds),
        n_frames: frames.len(),
        frames: frames.iter().map(FrameSummary::from_row).collect(),
        transitions: transitions
            .iter()
            .map(|t| TransitionSummary {
                from: &t.from,
                to: &t.to,
                verdict: &t.verdict,
            })
            .collect(),
        forest_trend: trend,
        any_transition_detected: transitions.iter().any(|t| t.verdict.detected),
    })
}

pub fn render_verdict_json(
    percentages: &ClassPercentages,
    verdict: &DeforestationVerdict,
) -> Result<String, serde_json::Error> {
    #[derive(Serialize)]
    struct Scored<'a> {
        class_percentages: &'a ClassPercentages,
        #[serde(flatten)]
        verdict: &'a DeforestationVerdict,
    }
    serde_json::to_string_pretty(&Scored {
        class_percentages: percentages,
        verdict,
    })
}

/// Class catalogue in legend order, as served by a model-status endpoint.
pub fn render_classes_json() -> Result<String, serde_json::Error> {
    let classes = legend_order().to_vec();
    serde_json::to_string_pretty(&ClassCatalog {
        loaded: true,
        num_classes: classes.len(),
        class_dict: legend_order()
            .iter()
            .map(|&class| ClassEntry {
                class,
                color: class.color(),
            })
            .collect(),
        classes,
    })
}
