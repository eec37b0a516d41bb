use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use crate::model::classes::legend_order;

pub const MASK_SIZE: u32 = 256;

// 0.6 global alpha applied to 0.3 alpha gradient stops.
const OVERLAY_ALPHA: f64 = 0.6 * 0.3;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Diagonal class-colour pattern standing in for a segmentation mask.
pub fn render_mask(width: u32, height: u32) -> RgbImage {
    let legend = legend_order();
    let n = legend.len();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((x as f64 * 0.1 + y as f64 * 0.1) * n as f64).floor() as usize % n;
        Rgb(legend[idx].color())
    })
}

/// Gradient colour at position `t` in [0, 1]: green, yellow at 0.5, cyan.
fn gradient_color(t: f64) -> [f64; 3] {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        let k = t / 0.5;
        [255.0 * k, 255.0, 0.0]
    } else {
        let k = (t - 0.5) / 0.5;
        [255.0 * (1.0 - k), 255.0, 255.0 * k]
    }
}

/// Multiplies `base` with a top-left to bottom-right gradient.
pub fn render_overlay(base: &RgbaImage) -> RgbaImage {
    let (w, h) = base.dimensions();
    let (wf, hf) = (w as f64, h as f64);
    let denom = wf * wf + hf * hf;
    RgbaImage::from_fn(w, h, |x, y| {
        let src = base.get_pixel(x, y);
        let t = if denom > 0.0 {
            ((x as f64 + 0.5) * wf + (y as f64 + 0.5) * hf) / denom
        } else {
            0.0
        };
        let tint = gradient_color(t);
        let mut out = [0u8; 4];
        for c in 0..3 {
            let dst = src[c] as f64;
            let blended = dst * (1.0 - OVERLAY_ALPHA) + dst * (tint[c] / 255.0) * OVERLAY_ALPHA;
            out[c] = blended.round().clamp(0.0, 255.0) as u8;
        }
        out[3] = src[3];
        Rgba(out)
    })
}

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_render.rs"]
mod tests;
