//! Autocomplete text field over a label/value dataset.
//!
//! The component logic lives in [`autocomplete`] and talks to its elements
//! through the [`node::NodeHost`] trait. [`app`] hosts it in a terminal UI.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod layout;
pub mod node;
pub mod widgets;
