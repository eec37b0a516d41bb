use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, RgbaImage};

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes)
}

/// Target size for the analysis buffer: the longest side becomes `max_side`
/// preserving aspect ratio, so small images are upscaled too.
pub fn analysis_size(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let (max_side, width, height) = (max_side as u64, width as u64, height as u64);
    let (w, h) = if width >= height {
        (max_side, height * max_side / width)
    } else {
        (width * max_side / height, max_side)
    };
    (w.max(1) as u32, h.max(1) as u32)
}

pub fn analysis_buffer(image: &DynamicImage, max_side: u32) -> RgbaImage {
    let rgba = image.to_rgba8();
    let (w, h) = analysis_size(rgba.width(), rgba.height(), max_side);
    if (w, h) == rgba.dimensions() {
        return rgba;
    }
    imageops::resize(&rgba, w, h, FilterType::Triangle)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_decode.rs"]
mod tests;
