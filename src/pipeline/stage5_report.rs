use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::classes::class_order;
use crate::model::scores::ComparisonVerdict;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::AnalyzedFrame;
use crate::report::json::{render_analysis_json, render_comparison_json, render_timelapse_json};
use crate::report::text::{render_analysis_text, render_comparison_text, render_timelapse_text};
use crate::report::{FrameRow, ReportError, TransitionRow, format_f64_2};

pub fn write_analysis_reports(
    frame: &AnalyzedFrame,
    thresholds: &ThresholdProfile,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    let row = frame.row();

    write_landcover_tsv(std::slice::from_ref(&row), &out_dir.join("landcover.tsv"))?;
    write_text(
        &out_dir.join("summary.json"),
        &render_analysis_json(&row, thresholds)?,
    )?;
    write_text(&out_dir.join("report.txt"), &render_analysis_text(&row))?;
    write_bytes(&out_dir.join("mask.png"), &frame.prediction.segmentation_mask)?;
    write_bytes(&out_dir.join("overlay.png"), &frame.prediction.overlay)?;

    crate::info!("wrote analysis reports to {}", out_dir.display());
    Ok(())
}

pub fn write_comparison_reports(
    before: &AnalyzedFrame,
    after: &AnalyzedFrame,
    verdict: &ComparisonVerdict,
    thresholds: &ThresholdProfile,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    write_analysis_reports(before, thresholds, &out_dir.join("before"))?;
    write_analysis_reports(after, thresholds, &out_dir.join("after"))?;

    let before_row = before.row();
    let after_row = after.row();
    write_text(
        &out_dir.join("comparison.json"),
        &render_comparison_json(&before_row, &after_row, verdict, thresholds)?,
    )?;
    write_text(
        &out_dir.join("report.txt"),
        &render_comparison_text(&before_row, &after_row, verdict),
    )?;

    crate::info!("wrote comparison reports to {}", out_dir.display());
    Ok(())
}

pub fn write_timelapse_reports(
    frames: &[AnalyzedFrame],
    transitions: &[ComparisonVerdict],
    thresholds: &ThresholdProfile,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let rows = frames.iter().map(AnalyzedFrame::row).collect::<Vec<_>>();
    let transition_rows = transition_rows(&rows, transitions);

    write_landcover_tsv(&rows, &out_dir.join("landcover.tsv"))?;
    write_transitions_tsv(&transition_rows, &out_dir.join("transitions.tsv"))?;
    write_text(
        &out_dir.join("summary.json"),
        &render_timelapse_json(&rows, &transition_rows, thresholds)?,
    )?;
    write_text(
        &out_dir.join("report.txt"),
        &render_timelapse_text(&rows, &transition_rows),
    )?;

    for (idx, frame) in frames.iter().enumerate() {
        write_bytes(
            &out_dir.join(format!("frame_{:03}_mask.png", idx)),
            &frame.prediction.segmentation_mask,
        )?;
        write_bytes(
            &out_dir.join(format!("frame_{:03}_overlay.png", idx)),
            &frame.prediction.overlay,
        )?;
    }

    crate::info!(
        "wrote timelapse reports for {} frames to {}",
        frames.len(),
        out_dir.display()
    );
    Ok(())
}

fn transition_rows(rows: &[FrameRow], transitions: &[ComparisonVerdict]) -> Vec<TransitionRow> {
    rows.windows(2)
        .zip(transitions)
        .map(|(pair, verdict)| TransitionRow {
            from: pair[0].name.clone(),
            to: pair[1].name.clone(),
            forest_before: pair[0].percentages.forest,
            forest_after: pair[1].percentages.forest,
            verdict: *verdict,
        })
        .collect()
}

fn write_landcover_tsv(rows: &[FrameRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);

    let mut header = vec![
        "frame",
        "original_width",
        "original_height",
        "prediction_width",
        "prediction_height",
        "degraded",
    ];
    header.extend(class_order().iter().map(|c| c.key()));
    header.extend(["dominant", "score", "detected", "confidence"]);
    writeln!(w, "{}", header.join("\t"))?;

    for row in rows {
        let mut fields = vec![
            row.name.clone(),
            row.original_size.0.to_string(),
            row.original_size.1.to_string(),
            row.prediction_size.0.to_string(),
            row.prediction_size.1.to_string(),
            row.degraded.to_string(),
        ];
        fields.extend(row.percentages.iter().map(|(_, v)| format_f64_2(v)));
        fields.push(row.percentages.dominant().key().to_string());
        fields.push(row.verdict.score.to_string());
        fields.push(row.verdict.detected.to_string());
        fields.push(format_f64_2(row.verdict.confidence));
        writeln!(w, "{}", fields.join("\t"))?;
    }
    w.flush()
}

fn write_transitions_tsv(rows: &[TransitionRow], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "from",
        "to",
        "forest_before",
        "forest_after",
        "forest_loss",
        "detected",
        "confidence",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for row in rows {
        let line = [
            row.from.clone(),
            row.to.clone(),
            format_f64_2(row.forest_before),
            format_f64_2(row.forest_after),
            format_f64_2(row.verdict.forest_loss),
            row.verdict.detected.to_string(),
            format_f64_2(row.verdict.confidence_percent),
        ]
        .join("\t");
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    write_bytes(path, contents.as_bytes())
}

fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents)?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
