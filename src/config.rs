use crate::error::CountError;
use crate::models::AreaRange;

/// Gray level above which a pixel is foreground. Fixed because Otsu picks
/// nonsense on frames with no dice in them.
pub const DEFAULT_THRESHOLD: u8 = 160;

/// Dice are roughly 11000 px in the reference scene
pub const DEFAULT_DIE_AREA: AreaRange = AreaRange::new(5000.0, 30000.0);

/// Pips are roughly 400 px. The range also drops pips on the side faces and small noise.
pub const DEFAULT_DOT_AREA: AreaRange = AreaRange::new(200.0, 1000.0);

/// How a dot contour is decided to lie inside a die contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainmentMode {
    /// Test only the first boundary point of the dot. Correct as long as dot
    /// contours never cross a die boundary.
    #[default]
    FirstPoint,
    /// Every boundary point of the dot must be strictly inside.
    AllPoints,
}

/// Calibration values for one counting run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountConfig {
    pub threshold: u8,
    pub die_area: AreaRange,
    pub dot_area: AreaRange,
    pub containment: ContainmentMode,
}

impl CountConfig {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            die_area: DEFAULT_DIE_AREA,
            dot_area: DEFAULT_DOT_AREA,
            containment: ContainmentMode::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_die_area(mut self, range: AreaRange) -> Self {
        self.die_area = range;
        self
    }

    pub fn with_dot_area(mut self, range: AreaRange) -> Self {
        self.dot_area = range;
        self
    }

    pub fn with_containment(mut self, mode: ContainmentMode) -> Self {
        self.containment = mode;
        self
    }

    /// Reject ranges that can never match anything
    pub fn validate(&self) -> Result<(), CountError> {
        if !self.die_area.is_valid() {
            return Err(CountError::InvalidRange { name: "die", range: self.die_area });
        }
        if !self.dot_area.is_valid() {
            return Err(CountError::InvalidRange { name: "dot", range: self.dot_area });
        }
        Ok(())
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::new()
    }
}
