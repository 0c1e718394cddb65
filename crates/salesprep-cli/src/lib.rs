//! CLI library components for the sales dataset converter.

pub mod logging;
pub mod pipeline;
