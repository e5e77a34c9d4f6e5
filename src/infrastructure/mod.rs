//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! file export, configuration loading, and log output.

pub mod config;
pub mod export;
pub mod logging;

pub use config::*;
pub use export::*;
pub use logging::*;
