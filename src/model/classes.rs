use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandCoverClass {
    Forest,
    Agriculture,
    Urban,
    Water,
    Road,
}

impl LandCoverClass {
    pub fn key(self) -> &'static str {
        match self {
            LandCoverClass::Forest => "forest",
            LandCoverClass::Agriculture => "agriculture",
            LandCoverClass::Urban => "urban",
            LandCoverClass::Water => "water",
            LandCoverClass::Road => "road",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "forest" => Some(LandCoverClass::Forest),
            "agriculture" => Some(LandCoverClass::Agriculture),
            "urban" => Some(LandCoverClass::Urban),
            "water" => Some(LandCoverClass::Water),
            "road" => Some(LandCoverClass::Road),
            _ => None,
        }
    }

    /// Legend colour used by the segmentation mask.
    pub fn color(self) -> [u8; 3] {
        match self {
            LandCoverClass::Urban => [0, 255, 255],
            LandCoverClass::Water => [0, 0, 255],
            LandCoverClass::Forest => [0, 255, 0],
            LandCoverClass::Agriculture => [255, 255, 0],
            LandCoverClass::Road => [255, 0, 255],
        }
    }
}

/// Report order.
pub fn class_order() -> &'static [LandCoverClass] {
    &[
        LandCoverClass::Forest,
        LandCoverClass::Agriculture,
        LandCoverClass::Urban,
        LandCoverClass::Water,
        LandCoverClass::Road,
    ]
}

/// Mask legend order; a pixel's legend index selects from this list.
pub fn legend_order() -> &'static [LandCoverClass] {
    &[
        LandCoverClass::Urban,
        LandCoverClass::Water,
        LandCoverClass::Forest,
        LandCoverClass::Agriculture,
        LandCoverClass::Road,
    ]
}

/// Percentage of the analysed area attributed to each class.
///
/// Every value is non-negative. The five values are not required to sum to
/// exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassPercentages {
    pub forest: f64,
    pub agriculture: f64,
    pub urban: f64,
    pub water: f64,
    pub road: f64,
}

impl ClassPercentages {
    pub fn new(forest: f64, agriculture: f64, urban: f64, water: f64, road: f64) -> Self {
        Self {
            forest: sanitize(forest),
            agriculture: sanitize(agriculture),
            urban: sanitize(urban),
            water: sanitize(water),
            road: sanitize(road),
        }
    }

    /// Builds percentages from loosely keyed values. Unknown keys are ignored;
    /// missing, negative and non-finite values become 0.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut out = Self::default();
        for (key, value) in pairs {
            if let Some(class) = LandCoverClass::from_key(key) {
                out.set(class, value);
            }
        }
        out
    }

    pub fn get(&self, class: LandCoverClass) -> f64 {
        match class {
            LandCoverClass::Forest => self.forest,
            LandCoverClass::Agriculture => self.agriculture,
            LandCoverClass::Urban => self.urban,
            LandCoverClass::Water => self.water,
            LandCoverClass::Road => self.road,
        }
    }

    pub fn set(&mut self, class: LandCoverClass, value: f64) {
        let value = sanitize(value);
        match class {
            LandCoverClass::Forest => self.forest = value,
            LandCoverClass::Agriculture => self.agriculture = value,
            LandCoverClass::Urban => self.urban = value,
            LandCoverClass::Water => self.water = value,
            LandCoverClass::Road => self.road = value,
        }
    }

    /// Values as read by the scorer: anything that slipped past construction
    /// (direct field writes, deserialised negatives) reads as 0.
    pub fn scored(&self, class: LandCoverClass) -> f64 {
        sanitize(self.get(class))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandCoverClass, f64)> + '_ {
        class_order().iter().map(move |&c| (c, self.get(c)))
    }

    pub fn dominant(&self) -> LandCoverClass {
        let mut best = LandCoverClass::Forest;
        let mut best_value = f64::NEG_INFINITY;
        for (class, value) in self.iter() {
            if value > best_value {
                best = class;
                best_value = value;
            }
        }
        best
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
