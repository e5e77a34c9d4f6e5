//! Application layer managing state and user workflows.
//!
//! This module wires the project store to the form and list views and
//! holds the UI state the presentation layer renders.

pub mod form;
pub mod list;
pub mod state;

pub use form::*;
pub use list::*;
pub use state::*;
