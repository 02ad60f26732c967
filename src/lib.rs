//! tcalc
//!
//! Terminal four-function calculator with a clickable keypad.
//!
//! The crate follows a pure core / impure shell split: [`state`] holds the
//! input state machine and the display commands it emits, [`model`] the
//! key vocabulary, and [`view`] the terminal shell that feeds classified
//! key presses in and renders the display out.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
