//! Core domain types for Task Hub.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod counter;
mod display;
mod notification;
pub mod ui;

pub use counter::TaskCounter;
pub use display::{DisplayMode, ParseDisplayModeError};
pub use notification::{AccentColor, Icon, Notification};
pub use ui::{Focus, UiOptions};
