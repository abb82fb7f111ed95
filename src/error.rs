use std::path::PathBuf;

use thiserror::Error;

use crate::models::AreaRange;

/// Failures that end a counting run
#[derive(Debug, Error)]
pub enum CountError {
    #[error("Could not open the image {}: {source}", .path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not write the image {}: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Invalid {name} area range: min {} must be below max {}", .range.min, .range.max)]
    InvalidRange { name: &'static str, range: AreaRange },

    #[error("Debug directory is not usable: {}", .path.display())]
    DebugDir { path: PathBuf },
}
