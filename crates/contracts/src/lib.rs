//! Framework-free core of the chat info panel header.
//!
//! Everything here is pure and host-testable; the Leptos crate only renders
//! what these types decide.

pub mod right_header;
pub mod shared;
