pub mod classes;
pub mod confidence;
pub mod scores;
pub mod thresholds;
