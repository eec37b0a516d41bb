use super::*;
use crate::model::classes::LandCoverClass;

#[test]
fn test_mask_dimensions() {
    let mask = render_mask(MASK_SIZE, MASK_SIZE);
    assert_eq!(mask.dimensions(), (256, 256));
}

#[test]
fn test_mask_diagonal_pattern() {
    let mask = render_mask(32, 32);
    assert_eq!(mask.get_pixel(0, 0).0, LandCoverClass::Urban.color());
    assert_eq!(mask.get_pixel(3, 0).0, LandCoverClass::Water.color());
    assert_eq!(mask.get_pixel(5, 0).0, LandCoverClass::Forest.color());
    assert_eq!(mask.get_pixel(0, 5).0, LandCoverClass::Forest.color());
    assert_eq!(mask.get_pixel(10, 10).0, LandCoverClass::Urban.color());
}

#[test]
fn test_gradient_stops() {
    assert_eq!(gradient_color(0.0), [0.0, 255.0, 0.0]);
    assert_eq!(gradient_color(0.5), [255.0, 255.0, 0.0]);
    assert_eq!(gradient_color(1.0), [0.0, 255.0, 255.0]);
    assert_eq!(gradient_color(2.0), [0.0, 255.0, 255.0]);
}

#[test]
fn test_overlay_keeps_size_and_alpha() {
    let base = RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 200]));
    let overlay = render_overlay(&base);
    assert_eq!(overlay.dimensions(), (40, 20));
    for px in overlay.pixels() {
        assert_eq!(px[3], 200);
        assert_eq!(px[1], 255);
    }
}

#[test]
fn test_overlay_tints_white_toward_gradient() {
    let base = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
    let overlay = render_overlay(&base);
    // Top-left is near the green stop: red and blue are darkened.
    let tl = overlay.get_pixel(0, 0);
    assert!(tl[0] < 255);
    assert!(tl[2] < 255);
    // Darkening is bounded by the overlay alpha.
    assert!(tl[0] >= 209);
    assert!(tl[2] >= 209);
}

#[test]
fn test_overlay_black_stays_black() {
    let base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let overlay = render_overlay(&base);
    for px in overlay.pixels() {
        assert_eq!(px.0, [0, 0, 0, 255]);
    }
}

#[test]
fn test_encode_png_round_trip_dimensions() {
    let mask = render_mask(16, 8);
    let bytes = encode_png(&DynamicImage::ImageRgb8(mask)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (16, 8));
}
