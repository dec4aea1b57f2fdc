//! CLI library components for the MVC converter.

pub mod logging;
pub mod pipeline;
pub mod types;
