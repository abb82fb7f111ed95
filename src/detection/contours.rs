use image::GrayImage;
use imageproc::point::Point;

use crate::models::Contour;

/// Trace every border in the mask, outer and hole alike, keeping all points.
/// The parent links imageproc fills in are dropped, nothing downstream uses them.
pub fn find_contours(mask: &GrayImage) -> Vec<Contour> {
    imageproc::contours::find_contours::<i32>(mask)
        .into_iter()
        .map(|mut contour| {
            contour.parent = None;
            contour
        })
        .collect()
}

/// Enclosed area of the closed polygon (shoelace formula, orientation ignored)
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }

    twice_area.abs() as f64 / 2.0
}
