//! Animated mixed-radix clock.
//!
//! A row of digit readouts above a row of dials. Each position's hand turns
//! once per full cycle of the position to its right, so the whole row counts
//! like a seconds/minutes/hours clock in whatever bases are configured.
//!
//! Layers, bottom up:
//! - [`radix`]: frequency, period and digit math
//! - [`canvas`]: retained primitives on square surfaces
//! - [`widgets`]: dial and digit widgets driving those primitives
//! - [`clock`]: assembles the grid and steps the animation
//! - [`app`]: plugs the clock into the engine runtime

pub mod animation;
pub mod app;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod layout;
pub mod radix;
pub mod widgets;
