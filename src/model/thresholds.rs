use crate::model::classes::ClassPercentages;

/// Fixed policy for the colour heuristic and the deforestation scorer.
///
/// All constants are collected here so a real model can replace the
/// heuristic without touching call sites.
#[derive(Debug, Clone)]
pub struct ThresholdProfile {
    pub max_side: u32,
    pub stride: usize,
    pub forest_min_green: u8,
    pub agriculture_min_red: u8,
    pub water_min_blue: u8,
    pub urban_residual_share: f64,
    pub road_residual_share: f64,
    pub fallback: ClassPercentages,

    pub forest_points: TierTable,
    pub agriculture_points: TierTable,
    pub urban_points: TierTable,
    pub detection_score_min: u32,
    pub detected_confidence: TierTable,
    pub healthy_confidence: TierTable,
    pub confidence_jitter: f64,

    pub loss_threshold: f64,
    pub loss_slope: f64,
    pub loss_intercept: f64,
    pub loss_confidence_min: f64,
    pub loss_confidence_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierCmp {
    Below,
    Above,
}

/// Ordered bands; the first band whose bound the value passes wins,
/// otherwise `fallback` applies.
#[derive(Debug, Clone)]
pub struct TierTable {
    pub cmp: TierCmp,
    pub bands: Vec<(f64, u32)>,
    pub fallback: u32,
}

impl TierTable {
    pub fn below(bands: &[(f64, u32)], fallback: u32) -> Self {
        Self {
            cmp: TierCmp::Below,
            bands: bands.to_vec(),
            fallback,
        }
    }

    pub fn above(bands: &[(f64, u32)], fallback: u32) -> Self {
        Self {
            cmp: TierCmp::Above,
            bands: bands.to_vec(),
            fallback,
        }
    }

    pub fn lookup(&self, value: f64) -> u32 {
        for &(bound, points) in &self.bands {
            let hit = match self.cmp {
                TierCmp::Below => value < bound,
                TierCmp::Above => value > bound,
            };
            if hit {
                return points;
            }
        }
        self.fallback
    }
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            max_side: 100,
            stride: 2,
            forest_min_green: 60,
            agriculture_min_red: 80,
            water_min_blue: 80,
            urban_residual_share: 0.6,
            road_residual_share: 0.4,
            fallback: ClassPercentages::new(50.0, 30.0, 10.0, 5.0, 5.0),

            forest_points: TierTable::below(&[(20.0, 40), (40.0, 30), (60.0, 20), (80.0, 10)], 0),
            agriculture_points: TierTable::above(
                &[(50.0, 30), (35.0, 25), (20.0, 15), (10.0, 10)],
                0,
            ),
            urban_points: TierTable::above(&[(30.0, 20), (20.0, 15), (10.0, 10), (5.0, 5)], 0),
            detection_score_min: 30,
            detected_confidence: TierTable::above(&[(70.0, 85), (50.0, 75), (40.0, 65)], 55),
            healthy_confidence: TierTable::above(&[(80.0, 85), (60.0, 75), (40.0, 65)], 55),
            confidence_jitter: 10.0,

            loss_threshold: 5.0,
            loss_slope: 10.0,
            loss_intercept: 70.0,
            loss_confidence_min: 60.0,
            loss_confidence_max: 95.0,
        }
    }
}

impl Default for ThresholdProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
