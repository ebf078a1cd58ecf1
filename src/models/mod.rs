// Module exports for models

pub mod occurrence;
pub mod pattern;
pub mod source;
