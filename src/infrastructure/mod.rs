//! Infrastructure layer - hardware bindings and runtime tasks
//!
//! Everything that touches real hardware lives here; the pattern logic
//! itself is in the `triglow-patterns` crate and stays hardware-free.

pub mod config;
pub mod drivers;
pub mod tasks;
