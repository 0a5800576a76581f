use anyhow::{Context, Result};
use binclock_engine::device::GpuInit;
use binclock_engine::logging::{init_logging, LoggingConfig};
use binclock_engine::text::FontSystem;
use binclock_engine::window::{Runtime, RuntimeConfig};

use binclock::app::ClockApp;
use binclock::config::ClockConfig;

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("binclock: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = ClockConfig::new();
    config.validate().context("invalid clock configuration")?;

    let fonts = load_fonts();

    let runtime = RuntimeConfig {
        title: "Binary clock".to_string(),
        initial_size: config.initial_size(),
        frame_interval: Some(config.frame_interval()),
    };

    Runtime::run(runtime, GpuInit::default(), ClockApp::new(config, fonts))
}

/// Loads the first system font that parses. Text is skipped without one.
fn load_fonts() -> FontSystem {
    let mut fonts = FontSystem::new();

    for path in FONT_PATHS {
        let Ok(bytes) = std::fs::read(path) else { continue };
        match fonts.load_font(&bytes) {
            Ok(_) => {
                log::info!("font: {path}");
                return fonts;
            }
            Err(e) => log::warn!("skipping {path}: {e}"),
        }
    }

    log::warn!("no usable system font found; digits and dial labels will not be drawn");
    fonts
}
