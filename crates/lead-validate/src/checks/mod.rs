//! Individual validation checks, run in the order declared here.

pub mod country;
pub mod email;
pub mod required;
