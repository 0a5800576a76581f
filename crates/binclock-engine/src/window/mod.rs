//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and
//! paces timer-driven animation.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
