use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{DynamicImage, ImageReader, RgbImage};

use crate::annotate::{self, Annotator};
use crate::config::CountConfig;
use crate::detection::{DiceDetector, preprocessing};
use crate::error::CountError;
use crate::models::DiceReport;

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// Save one stage image as `NN_stage/01.png`
    fn save(&self, index: usize, stage: &str, image: &DynamicImage) -> Result<()> {
        let stage_dir_name = format!("{:02}_{}", index, stage);
        let stage_dir = self.output_dir.join(&stage_dir_name);
        std::fs::create_dir_all(&stage_dir)?;

        image
            .save(stage_dir.join("01.png"))
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;

        log::debug!("Debug: saved {}/01.png", stage_dir_name);
        Ok(())
    }
}

/// Options for one run
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub debug: Option<DebugConfig>,
}

/// What a run produces: the counts and the labelled copy of the input
pub struct PipelineOutput {
    pub report: DiceReport,
    pub annotated: RgbImage,
}

/// Read and decode an image, format guessed from its content
pub fn load_image(path: &Path) -> Result<DynamicImage, CountError> {
    let open_error = |source: image::ImageError| CountError::ImageOpen { path: path.to_path_buf(), source };

    ImageReader::open(path)
        .map_err(|e| open_error(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| open_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(open_error)
}

/// Encode the image, format inferred from the path's extension
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), CountError> {
    image.save(path).map_err(|source| CountError::ImageWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Binarize, trace, classify, match and annotate one image
pub struct Pipeline {
    detector: DiceDetector,
    annotator: Annotator<'static>,
    context: PipelineContext,
}

impl Pipeline {
    pub fn new() -> Result<Self> {
        Ok(Self {
            detector: DiceDetector::default(),
            annotator: Annotator::new()?,
            context: PipelineContext::default(),
        })
    }

    pub fn with_config(mut self, config: CountConfig) -> Result<Self> {
        config.validate()?;
        self.detector = DiceDetector::new(config);
        Ok(self)
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(CountError::DebugDir { path: output_dir }.into());
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Run every stage on `input`. The input itself is consumed and becomes the annotated image.
    pub fn run(&self, input: DynamicImage) -> Result<PipelineOutput> {
        log::debug!("Image: {}x{}", input.width(), input.height());

        let mask = self.detector.get_mask(&input)?;
        let report = self.detector.detect_in_mask(&mask);

        if let Some(debug) = &self.context.debug {
            debug.save(0, "input", &input)?;
            debug.save(1, "grayscale", &DynamicImage::ImageLuma8(preprocessing::to_grayscale(&input)))?;
            debug.save(2, "threshold", &DynamicImage::ImageLuma8(mask.clone()))?;

            let mut traced = input.to_rgb8();
            let all_contours = crate::detection::contours::find_contours(&mask);
            annotate::draw_contours(&mut traced, &all_contours, self.annotator.style.die_color, 1);
            debug.save(3, "contours", &DynamicImage::ImageRgb8(traced))?;
        }

        let mut annotated = input.into_rgb8();
        self.annotator.annotate(&mut annotated, &report);

        if let Some(debug) = &self.context.debug {
            debug.save(4, "annotated", &DynamicImage::ImageRgb8(annotated.clone()))?;
        }

        log::debug!("Counted {} dots on {} dice", report.total, report.die_count());

        Ok(PipelineOutput { report, annotated })
    }
}
