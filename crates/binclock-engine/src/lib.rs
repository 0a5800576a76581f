//! binclock engine crate.
//!
//! Owns the platform + GPU runtime pieces and the 2D shape renderers used by
//! the clock application.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
