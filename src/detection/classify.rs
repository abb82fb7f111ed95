use crate::detection::contours::contour_area;
use crate::models::{AreaRange, Contour};

/// Keep the contours whose enclosed area falls strictly inside `range`
pub fn filter_contours_by_area(contours: &[Contour], range: AreaRange) -> Vec<Contour> {
    contours
        .iter()
        .filter(|c| range.contains(contour_area(&c.points)))
        .cloned()
        .collect()
}
