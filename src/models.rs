use imageproc::point::Point;

/// Closed boundary traced from the binary mask. Only `points` is meaningful here,
/// the hierarchy fields are ignored.
pub type Contour = imageproc::contours::Contour<i32>;

/// Axis-aligned bounding box, inclusive of both edge pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Smallest box holding every point, `None` for an empty slice
    pub fn from_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    /// The corner just past the bottom-right pixel, where per-die labels are anchored
    pub fn bottom_right(&self) -> (i32, i32) {
        (self.x + self.width as i32, self.y + self.height as i32)
    }
}

/// Open interval of enclosed areas, both bounds exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRange {
    pub min: f64,
    pub max: f64,
}

impl AreaRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, area: f64) -> bool {
        area > self.min && area < self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// One die and the number of dots found inside it
#[derive(Debug, Clone)]
pub struct DieCount {
    pub contour: Contour,
    pub bounds: BoundingBox,
    pub dots: usize,
}

/// Result of matching dots to dice for one image
#[derive(Debug, Clone, Default)]
pub struct DiceReport {
    pub dice: Vec<DieCount>,
    pub dots: Vec<Contour>,
    pub total: usize,
}

impl DiceReport {
    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty() && self.dots.is_empty()
    }
}
