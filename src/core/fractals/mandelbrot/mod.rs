pub mod adaptive_iterations;
pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod escape_result;
pub mod explorer_config;

pub use adaptive_iterations::AdaptiveIterationPolicy;
pub use algorithm::{MandelbrotAlgorithm, escape_time};
pub use colour_map::{OvershootPolicy, TwoToneColourMap, map_escape};
pub use errors::MandelbrotError;
pub use escape_result::EscapeResult;
pub use explorer_config::ExplorerConfig;
