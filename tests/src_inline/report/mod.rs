use super::*;
use crate::report::json::render_classes_json;
use crate::report::text::render_timelapse_text;

fn row(name: &str, forest: f64, detected: bool) -> FrameRow {
    FrameRow {
        name: name.to_string(),
        original_bytes: 1024,
        original_size: (800, 600),
        prediction_size: (100, 75),
        degraded: false,
        percentages: ClassPercentages::new(forest, 100.0 - forest, 0.0, 0.0, 0.0),
        verdict: DeforestationVerdict {
            detected,
            confidence: 70.0,
            score: if detected { 40 } else { 0 },
        },
    }
}

#[test]
fn test_format_f64_2() {
    assert_eq!(format_f64_2(1.0), "1.00");
    assert_eq!(format_f64_2(33.333), "33.33");
}

#[test]
fn test_forest_trend() {
    let frames = vec![row("a", 80.0, false), row("b", 60.0, false), row("c", 70.0, false)];
    let t = forest_trend(&frames).unwrap();
    assert_eq!(t.first, 80.0);
    assert_eq!(t.last, 70.0);
    assert_eq!(t.min, 60.0);
    assert_eq!(t.max, 80.0);
    assert_eq!(t.net_loss, 10.0);
    assert!(forest_trend(&[]).is_none());
}

#[test]
fn test_cover_statement_and_label() {
    let r = row("a", 10.0, true);
    assert!(cover_statement(&r.percentages).contains("cultivated"));
    assert_eq!(verdict_label(true), "DEFORESTATION_DETECTED");
    assert_eq!(verdict_label(false), "NO_DEFORESTATION");
}

#[test]
fn test_classes_json() {
    let v: serde_json::Value = serde_json::from_str(&render_classes_json().unwrap()).unwrap();
    assert_eq!(v["num_classes"], 5);
    assert_eq!(v["classes"][0], "urban");
    assert_eq!(v["class_dict"][2]["class"], "forest");
    assert_eq!(v["class_dict"][2]["color"], serde_json::json!([0, 255, 0]));
}

#[test]
fn test_timelapse_text_single_frame() {
    let text = render_timelapse_text(&[row("only", 55.0, false)], &[]);
    assert!(text.contains("Frames analysed: 1"));
    assert!(text.contains("Single frame; no transitions."));
    assert!(text.contains("Net forest loss (points): 0.00"));
}
