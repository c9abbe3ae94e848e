//! Step definitions for overlay command scenarios.

mod given;
mod then;
mod when;
pub mod world;
