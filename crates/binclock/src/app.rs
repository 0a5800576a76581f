use binclock_engine::coords::Rect;
use binclock_engine::core::{App as EngineApp, AppControl, FrameCtx};
use binclock_engine::render::ShapeRenderers;
use binclock_engine::scene::DrawList;
use binclock_engine::text::FontSystem;
use binclock_engine::time::FrameTime;
use binclock_engine::window::RuntimeCtx;

use crate::clock::Clock;
use crate::config::ClockConfig;

/// Engine-facing application: steps the clock on timer ticks and renders it.
pub struct ClockApp {
    config: ClockConfig,
    clock: Clock,
    fonts: FontSystem,
    renderers: ShapeRenderers,
    draw_list: DrawList,
    /// Window width the point sizes were chosen for.
    initial_width: f32,
    /// The last frame has been stepped but not yet presented.
    final_frame_pending: bool,
}

impl ClockApp {
    /// `config` must be valid. Text uses the first font in `fonts`, if any.
    pub fn new(config: ClockConfig, fonts: FontSystem) -> Self {
        let size = config.initial_size();
        let bounds = Rect::new(0.0, 0.0, size.width as f32, size.height as f32);
        let clock = Clock::new(&config, bounds, fonts.default_font());

        Self {
            initial_width: bounds.size.x,
            config,
            clock,
            fonts,
            renderers: ShapeRenderers::new(),
            draw_list: DrawList::new(),
            final_frame_pending: false,
        }
    }

    /// Points to logical pixels, scaled with the window width.
    fn pt_to_px(&self, width: f32) -> f32 {
        self.config.px_per_pt() * width / self.initial_width.max(1.0)
    }
}

impl EngineApp for ClockApp {
    fn on_tick(&mut self, _time: FrameTime, _runtime: &mut RuntimeCtx) -> AppControl {
        if self.clock.step().is_some() && self.clock.is_finished() {
            self.final_frame_pending = true;
        }
        AppControl::Continue
    }

    fn is_animating(&self) -> bool {
        !self.clock.is_finished()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();
        if !viewport.is_valid() {
            return AppControl::Continue;
        }

        self.clock.relayout(viewport.bounds());
        let pt_to_px = self.pt_to_px(viewport.width);

        self.draw_list.clear();
        self.clock.compose(&mut self.draw_list, &self.fonts, pt_to_px);

        let renderers = &mut self.renderers;
        let dl = &mut self.draw_list;
        let fonts = &self.fonts;

        let control = ctx.render(self.config.theme.background, |rctx, target| {
            renderers.render(rctx, target, dl, fonts);
        });
        if control == AppControl::Exit {
            return AppControl::Exit;
        }

        if std::mem::take(&mut self.final_frame_pending) && self.config.close_when_finished {
            log::info!("last frame shown; closing");
            return AppControl::Exit;
        }

        AppControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scale_follows_window_width() {
        let app = ClockApp::new(ClockConfig::new(), FontSystem::new());
        let base = app.pt_to_px(1440.0);
        assert!((base - 96.0 / 72.0).abs() < 1e-6);
        assert!((app.pt_to_px(720.0) - base * 0.5).abs() < 1e-6);
    }

    #[test]
    fn ticks_stop_after_the_last_frame() {
        let cfg = ClockConfig::binary(1).f0(1.0).fps(4);
        let mut app = ClockApp::new(cfg, FontSystem::new());
        let mut runtime = RuntimeCtx::default();
        let time = binclock_engine::time::FrameClock::new().tick();

        // One digit: period 1 s, 4 frames.
        let mut ticks = 0;
        while app.is_animating() {
            app.on_tick(time, &mut runtime);
            ticks += 1;
        }
        assert_eq!(ticks, 4);
        assert!(app.final_frame_pending);
        assert!(!runtime.exit_requested());
    }
}
