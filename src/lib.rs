//! projdeck - Terminal Project Board Library
//!
//! An observable in-memory project store with a terminal board on top:
//! a form to add projects and two lists to move them between.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
