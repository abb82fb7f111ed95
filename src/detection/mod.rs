pub mod preprocessing;
pub mod contours;
pub mod classify;
pub mod containment;

use image::{DynamicImage, GenericImageView, GrayImage};

use crate::config::CountConfig;
use crate::error::CountError;
use crate::models::{Contour, DiceReport};

/// Runs threshold, contour tracing, area classification and dot matching on one image
pub struct DiceDetector {
    pub config: CountConfig,
}

impl DiceDetector {
    pub fn new(config: CountConfig) -> Self {
        Self { config }
    }

    /// Count the dots on every die in the image
    pub fn detect(&self, img: &DynamicImage) -> Result<DiceReport, CountError> {
        let mask = self.get_mask(img)?;
        Ok(self.detect_in_mask(&mask))
    }

    /// Same as [`detect`](Self::detect) for an already binarized image
    pub fn detect_in_mask(&self, mask: &GrayImage) -> DiceReport {
        let all_contours = contours::find_contours(mask);
        log::debug!("Found {} contours", all_contours.len());

        let dice = classify::filter_contours_by_area(&all_contours, self.config.die_area);
        let dots = classify::filter_contours_by_area(&all_contours, self.config.dot_area);
        log::debug!("{} die candidates, {} dot candidates", dice.len(), dots.len());

        let report = containment::match_dots(dice, dots, self.config.containment);
        log::debug!("{} dots on {} dice", report.total, report.die_count());
        report
    }

    /// Binary mask of the image (for debugging)
    pub fn get_mask(&self, img: &DynamicImage) -> Result<GrayImage, CountError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(CountError::EmptyImage);
        }

        let gray = preprocessing::to_grayscale(img);
        Ok(preprocessing::binarize(&gray, self.config.threshold))
    }

    /// All traced contours before classification (for debugging)
    pub fn get_contours(&self, img: &DynamicImage) -> Result<Vec<Contour>, CountError> {
        let mask = self.get_mask(img)?;
        Ok(contours::find_contours(&mask))
    }
}

impl Default for DiceDetector {
    fn default() -> Self {
        Self::new(CountConfig::default())
    }
}
