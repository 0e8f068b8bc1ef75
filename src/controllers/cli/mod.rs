pub mod options;
pub mod still;
