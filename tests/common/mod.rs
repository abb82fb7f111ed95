#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from countdice for tests
pub use countdice::{
    AreaRange, ContainmentMode, CountConfig, DiceDetector, DiceReport, Pipeline, load_image,
};
