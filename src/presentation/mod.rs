//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the form and both project lists with ratatui
//! and translates key presses into application actions.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
