//! CLI library components for lead intake.

pub mod logging;
pub mod render;
