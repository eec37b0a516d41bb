use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

pub mod frames;
pub mod percentages;

pub use frames::discover_frames;
pub use percentages::load_percentages;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw payload of one image file, kept mapped until the pipeline has
/// decoded it. Decoding happens later so an unreadable or empty raster
/// degrades instead of failing the run.
#[derive(Debug)]
pub struct ImageSource {
    pub name: String,
    data: Option<Mmap>,
}

impl ImageSource {
    pub fn bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or(&[])
    }
}

pub fn read_image(path: &Path) -> Result<ImageSource, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "image file not found: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let data = if len == 0 {
        crate::warn!("{} is empty", path.display());
        None
    } else {
        Some(unsafe { Mmap::map(&file)? })
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    crate::info!("read {} ({} bytes)", path.display(), len);

    Ok(ImageSource { name, data })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
