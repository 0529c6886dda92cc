//! Pipeline and CLI support for season analytics.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
