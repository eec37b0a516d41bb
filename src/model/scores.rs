use serde::Serialize;

/// Single-image verdict from the tiered deforestation score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeforestationVerdict {
    pub detected: bool,
    pub confidence: f64,
    pub score: u32,
}

/// Before/after verdict driven by forest loss in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonVerdict {
    pub detected: bool,
    pub confidence_percent: f64,
    pub forest_loss: f64,
}
