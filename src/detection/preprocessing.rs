use image::{DynamicImage, GrayImage, Luma, Rgb};
use imageproc::contrast::{threshold, ThresholdType};

/// Rec.601 luma, the weighting camera-oriented BGR-to-gray conversions use
pub fn luminance(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round() as u8
}

/// Convert image to grayscale (Rec.601 weights)
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| Luma([luminance(rgb.get_pixel(x, y))]))
}

/// Fixed threshold: pixels strictly brighter than `level` become 255, the rest 0
pub fn binarize(gray: &GrayImage, level: u8) -> GrayImage {
    threshold(gray, level, ThresholdType::Binary)
}
