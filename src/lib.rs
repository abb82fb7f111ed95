pub mod annotate;
pub mod config;
pub mod detection;
pub mod display;
pub mod error;
pub mod models;
pub mod pipeline;

pub use annotate::{AnnotationStyle, Annotator};
pub use config::{ContainmentMode, CountConfig};
pub use detection::DiceDetector;
pub use error::CountError;
pub use models::{AreaRange, BoundingBox, Contour, DiceReport, DieCount};
pub use pipeline::{Pipeline, PipelineContext, PipelineOutput, load_image, save_image};
