use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime separates animation from presentation: `on_tick` is called on
/// the fixed frame interval and may mutate state, `on_frame` draws whatever
/// the state currently is. Redraws requested by the OS (expose, resize) only
/// reach `on_frame`.
pub trait App {
    /// Advances animation state by one timer tick.
    ///
    /// Only called while [`is_animating`](Self::is_animating) returns true and
    /// the runtime has a frame interval configured.
    fn on_tick(&mut self, time: FrameTime, runtime: &mut RuntimeCtx) -> AppControl {
        let _ = (time, runtime);
        AppControl::Continue
    }

    /// Whether the app still wants timer ticks.
    fn is_animating(&self) -> bool {
        false
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
