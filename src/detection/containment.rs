use imageproc::point::Point;

use crate::config::ContainmentMode;
use crate::models::{BoundingBox, Contour, DiceReport, DieCount};

/// Where `point` sits relative to the closed polygon: 1.0 strictly inside,
/// 0.0 on an edge or vertex, -1.0 outside. An empty polygon contains nothing.
pub fn point_polygon_test(polygon: &[Point<i32>], point: Point<i32>) -> f64 {
    if polygon.is_empty() {
        return -1.0;
    }

    let (px, py) = (point.x as i64, point.y as i64);
    let mut inside = false;

    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let (ax, ay, bx, by) = (a.x as i64, a.y as i64, b.x as i64, b.y as i64);

        // signed area of (a, b, p); zero means p is on the line through a and b
        let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);

        if cross == 0
            && px >= ax.min(bx)
            && px <= ax.max(bx)
            && py >= ay.min(by)
            && py <= ay.max(by)
        {
            return 0.0;
        }

        // horizontal ray towards +x, half-open in y so shared vertices count once
        if (ay > py) != (by > py) && (cross > 0) == (by > ay) {
            inside = !inside;
        }
    }

    if inside { 1.0 } else { -1.0 }
}

/// Whether `dot` lies inside `die`.
///
/// With [`ContainmentMode::FirstPoint`] only the first boundary point is tested, which
/// relies on dot contours never crossing a die boundary. A dot cut by the image edge
/// or touching its die can be missed or misattributed in that mode.
pub fn dot_inside(die: &Contour, dot: &Contour, mode: ContainmentMode) -> bool {
    match mode {
        ContainmentMode::FirstPoint => dot
            .points
            .first()
            .is_some_and(|p| point_polygon_test(&die.points, *p) > 0.0),
        ContainmentMode::AllPoints => {
            !dot.points.is_empty()
                && dot.points.iter().all(|p| point_polygon_test(&die.points, *p) > 0.0)
        }
    }
}

/// Count the dots inside each die and the total over all dice.
///
/// A dot inside two overlapping dice is counted for both. Which die it really
/// belongs to is not decided here, only reported.
pub fn match_dots(dice: Vec<Contour>, dots: Vec<Contour>, mode: ContainmentMode) -> DiceReport {
    let mut hits = vec![0usize; dots.len()];
    let mut counted = Vec::with_capacity(dice.len());
    let mut total = 0;

    for die in dice {
        let mut count = 0;
        for (dot, hit) in dots.iter().zip(hits.iter_mut()) {
            if dot_inside(&die, dot, mode) {
                count += 1;
                *hit += 1;
            }
        }

        let Some(bounds) = BoundingBox::from_points(&die.points) else {
            continue;
        };
        log::debug!("die at ({}, {}) {}x{}: {} dots", bounds.x, bounds.y, bounds.width, bounds.height, count);

        total += count;
        counted.push(DieCount { contour: die, bounds, dots: count });
    }

    let shared = hits.iter().filter(|&&h| h > 1).count();
    if shared > 0 {
        log::warn!("{} dots lie inside more than one die and were counted for each", shared);
    }

    DiceReport { dice: counted, dots, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::contours::BorderType;

    fn contour(points: &[(i32, i32)]) -> Contour {
        Contour {
            points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            border_type: BorderType::Outer,
            parent: None,
        }
    }

    fn square(x0: i32, y0: i32, side: i32) -> Contour {
        contour(&[(x0, y0), (x0 + side, y0), (x0 + side, y0 + side), (x0, y0 + side)])
    }

    #[test]
    fn inside_outside_and_on_edge() {
        let die = square(0, 0, 100);
        assert_eq!(point_polygon_test(&die.points, Point::new(50, 50)), 1.0);
        assert_eq!(point_polygon_test(&die.points, Point::new(150, 50)), -1.0);
        assert_eq!(point_polygon_test(&die.points, Point::new(-1, 50)), -1.0);
        assert_eq!(point_polygon_test(&die.points, Point::new(100, 50)), 0.0);
        assert_eq!(point_polygon_test(&die.points, Point::new(0, 0)), 0.0);
        assert_eq!(point_polygon_test(&die.points, Point::new(30, 100)), 0.0);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        let diamond = contour(&[(50, 0), (100, 50), (50, 100), (0, 50)]);
        assert_eq!(point_polygon_test(&diamond.points, Point::new(50, 50)), 1.0);
        assert_eq!(point_polygon_test(&diamond.points, Point::new(10, 0)), -1.0);
        assert_eq!(point_polygon_test(&diamond.points, Point::new(10, 50)), 1.0);
        assert_eq!(point_polygon_test(&diamond.points, Point::new(75, 25)), 0.0);
    }

    #[test]
    fn concave_notch_is_outside() {
        let u_shape = contour(&[(0, 0), (30, 0), (30, 90), (60, 90), (60, 0), (90, 0), (90, 100), (0, 100)]);
        assert_eq!(point_polygon_test(&u_shape.points, Point::new(45, 40)), -1.0);
        assert_eq!(point_polygon_test(&u_shape.points, Point::new(15, 40)), 1.0);
        assert_eq!(point_polygon_test(&u_shape.points, Point::new(45, 95)), 1.0);
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert_eq!(point_polygon_test(&[], Point::new(0, 0)), -1.0);
    }

    #[test]
    fn dot_on_die_edge_is_not_contained() {
        let die = square(0, 0, 100);
        let dot = square(100, 40, 15);
        assert!(!dot_inside(&die, &dot, ContainmentMode::FirstPoint));

        let report = match_dots(vec![die], vec![dot], ContainmentMode::FirstPoint);
        assert_eq!(report.dice[0].dots, 0);
        assert_eq!(report.total, 0);
    }

    #[test]
    fn straddling_dot_depends_on_mode() {
        let die = square(0, 0, 100);
        // first point inside, the rest crosses the right edge
        let dot = square(90, 40, 20);
        assert!(dot_inside(&die, &dot, ContainmentMode::FirstPoint));
        assert!(!dot_inside(&die, &dot, ContainmentMode::AllPoints));
    }

    #[test]
    fn empty_dot_is_never_inside() {
        let die = square(0, 0, 100);
        let dot = contour(&[]);
        assert!(!dot_inside(&die, &dot, ContainmentMode::FirstPoint));
        assert!(!dot_inside(&die, &dot, ContainmentMode::AllPoints));
    }

    #[test]
    fn counts_per_die_and_total() {
        let dice = vec![square(0, 0, 100), square(200, 0, 100)];
        let dots = vec![
            square(10, 10, 15),
            square(40, 40, 15),
            square(70, 70, 15),
            square(240, 40, 15),
            square(150, 40, 15),
        ];

        let report = match_dots(dice, dots, ContainmentMode::FirstPoint);
        let counts: Vec<usize> = report.dice.iter().map(|d| d.dots).collect();
        assert_eq!(counts, vec![3, 1]);
        assert_eq!(report.total, 4);
        assert_eq!(report.dots.len(), 5);
        assert_eq!(report.dice[1].bounds.bottom_right(), (301, 101));
    }

    #[test]
    fn shared_dot_is_counted_for_each_die() {
        let dice = vec![square(0, 0, 100), square(50, 0, 100)];
        let dots = vec![square(60, 40, 10)];
        let report = match_dots(dice, dots, ContainmentMode::FirstPoint);
        assert_eq!(report.total, 2);
    }

    #[test]
    fn no_dice_means_zero_total() {
        let report = match_dots(vec![], vec![square(0, 0, 10)], ContainmentMode::FirstPoint);
        assert!(report.dice.is_empty());
        assert_eq!(report.total, 0);
    }
}
