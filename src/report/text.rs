use crate::model::classes::ClassPercentages;
use crate::model::scores::ComparisonVerdict;
use crate::report::{
    FrameRow, TransitionRow, cover_statement, forest_trend, format_f64_2, verdict_label,
};

pub fn render_analysis_text(row: &FrameRow) -> String {
    let mut out = String::new();
    out.push_str("Land-Cover & Deforestation Report\n");
    out.push_str("=================================\n\n");
    push_frame_section(&mut out, "1. Scene", row);
    out.push_str("2. Caveats\n");
    out.push_str(&caveat_statement(row.degraded));
    out
}

pub fn render_comparison_text(
    before: &FrameRow,
    after: &FrameRow,
    verdict: &ComparisonVerdict,
) -> String {
    let mut out = String::new();
    out.push_str("Before/After Deforestation Report\n");
    out.push_str("=================================\n\n");
    push_frame_section(&mut out, "1. Before", before);
    push_frame_section(&mut out, "2. After", after);

    out.push_str("3. Change\n");
    out.push_str(&format!(
        "Forest cover: {} -> {}\n",
        format_f64_2(before.percentages.forest),
        format_f64_2(after.percentages.forest)
    ));
    out.push_str(&format!(
        "Forest loss (points): {}\n",
        format_f64_2(verdict.forest_loss)
    ));
    out.push_str(&format!("Verdict: {}\n", verdict_label(verdict.detected)));
    out.push_str(&format!(
        "Confidence: {}%\n\n",
        format_f64_2(verdict.confidence_percent)
    ));

    out.push_str("4. Caveats\n");
    out.push_str(&caveat_statement(before.degraded || after.degraded));
    out
}

pub fn render_timelapse_text(frames: &[FrameRow], transitions: &[TransitionRow]) -> String {
    let mut out = String::new();
    out.push_str("Historical Land-Cover Report\n");
    out.push_str("============================\n\n");

    out.push_str("1. Frames\n");
    out.push_str(&format!("Frames analysed: {}\n", frames.len()));
    for f in frames {
        out.push_str(&format!(
            "  {}: forest {} | agriculture {} | urban {} ({})\n",
            f.name,
            format_f64_2(f.percentages.forest),
            format_f64_2(f.percentages.agriculture),
            format_f64_2(f.percentages.urban),
            verdict_label(f.verdict.detected)
        ));
    }
    out.push('\n');

    out.push_str("2. Transitions\n");
    if transitions.is_empty() {
        out.push_str("Single frame; no transitions.\n");
    }
    for t in transitions {
        out.push_str(&format!(
            "  {} -> {}: loss {} ({}, confidence {}%)\n",
            t.from,
            t.to,
            format_f64_2(t.verdict.forest_loss),
            verdict_label(t.verdict.detected),
            format_f64_2(t.verdict.confidence_percent)
        ));
    }
    out.push('\n');

    out.push_str("3. Forest trend\n");
    if let Some(trend) = forest_trend(frames) {
        out.push_str(&format!(
            "First: {}  Last: {}  Min: {}  Max: {}\n",
            format_f64_2(trend.first),
            format_f64_2(trend.last),
            format_f64_2(trend.min),
            format_f64_2(trend.max)
        ));
        out.push_str(&format!(
            "Net forest loss (points): {}\n\n",
            format_f64_2(trend.net_loss)
        ));
    }

    out.push_str("4. Caveats\n");
    out.push_str(&caveat_statement(frames.iter().any(|f| f.degraded)));
    out
}

fn push_frame_section(out: &mut String, title: &str, row: &FrameRow) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("Image: {}\n", row.name));
    out.push_str(&format!(
        "Original size: {}x{}  Analysis size: {}x{}\n",
        row.original_size.0, row.original_size.1, row.prediction_size.0, row.prediction_size.1
    ));
    push_percentages(out, &row.percentages);
    out.push_str(&format!("{}\n", cover_statement(&row.percentages)));
    out.push_str(&format!(
        "Deforestation score: {}\nVerdict: {}\nConfidence: {}%\n\n",
        row.verdict.score,
        verdict_label(row.verdict.detected),
        format_f64_2(row.verdict.confidence)
    ));
}

fn push_percentages(out: &mut String, percentages: &ClassPercentages) {
    for (class, value) in percentages.iter() {
        out.push_str(&format!("  {:<12} {:>6}%\n", class.key(), format_f64_2(value)));
    }
}

fn caveat_statement(degraded: bool) -> String {
    let mut out = String::from(
        "Estimates come from a colour-dominance heuristic, not a trained model.\n",
    );
    if degraded {
        out.push_str("At least one image could not be decoded; the default distribution was used.\n");
    }
    out.push_str("Single-image confidence carries a random offset and is not calibrated.\n");
    out
}
