use image::{ImageBuffer, Luma, Rgb, RgbImage};
use tempfile::NamedTempFile;

pub const TABLE: Rgb<u8> = Rgb([30, 70, 30]);
pub const DIE_WHITE: Rgb<u8> = Rgb([235, 235, 235]);
pub const PIP_BLACK: Rgb<u8> = Rgb([15, 15, 15]);

/// A 100x100 die face (outer contour area 99 * 99)
pub const DIE_SIDE: u32 = 100;
/// An 18x18 pip, its hole border encloses roughly 360 px
pub const PIP_SIDE: u32 = 18;

pub fn fill(img: &mut RgbImage, x0: u32, y0: u32, side: u32, color: Rgb<u8>) {
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            img.put_pixel(x, y, color);
        }
    }
}

/// Green table, no dice
pub fn empty_table(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, TABLE)
}

/// One die at `origin` with pips at the given offsets inside the face
pub fn add_die(img: &mut RgbImage, origin: (u32, u32), pips: &[(u32, u32)]) {
    fill(img, origin.0, origin.1, DIE_SIDE, DIE_WHITE);
    for &(dx, dy) in pips {
        fill(img, origin.0 + dx, origin.1 + dy, PIP_SIDE, PIP_BLACK);
    }
}

/// Pip offsets for a die face showing `n` (1..=6)
pub fn face(n: usize) -> Vec<(u32, u32)> {
    let (lo, mid, hi) = (15, 41, 67);
    match n {
        1 => vec![(mid, mid)],
        2 => vec![(lo, lo), (hi, hi)],
        3 => vec![(lo, lo), (mid, mid), (hi, hi)],
        4 => vec![(lo, lo), (hi, lo), (lo, hi), (hi, hi)],
        5 => vec![(lo, lo), (hi, lo), (mid, mid), (lo, hi), (hi, hi)],
        6 => vec![(lo, lo), (hi, lo), (lo, mid), (hi, mid), (lo, hi), (hi, hi)],
        _ => vec![],
    }
}

/// Binary mask with one white square and black holes where the pips are
pub fn die_mask(pips: &[(u32, u32)]) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let mut mask = ImageBuffer::from_pixel(200, 200, Luma([0u8]));
    for y in 50..50 + DIE_SIDE {
        for x in 50..50 + DIE_SIDE {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    for &(dx, dy) in pips {
        for y in 50 + dy..50 + dy + PIP_SIDE {
            for x in 50 + dx..50 + dx + PIP_SIDE {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
    }
    mask
}

/// Writes the image to a temp file with the given extension.
/// The file will be automatically cleaned up when dropped.
pub fn write_temp_image(img: &RgbImage, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp image file");
    img.save(file.path()).expect("Failed to save test image");
    file
}
