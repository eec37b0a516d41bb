use std::fs;
use std::path::{Path, PathBuf};

use crate::input::InputError;

const FRAME_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "bmp", "webp"];

pub fn is_frame_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            FRAME_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Image files directly inside `dir`, ordered by file name.
pub fn discover_frames(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "frame directory not found: {}",
            dir.display()
        )));
    }

    let mut frames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_frame_file(&path) {
            frames.push(path);
        }
    }
    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if frames.is_empty() {
        return Err(InputError::MissingInput(format!(
            "no image frames (jpeg|jpg|png|gif|bmp|webp) in {}",
            dir.display()
        )));
    }
    Ok(frames)
}
