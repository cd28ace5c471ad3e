//! Analog desktop clock.

use anyhow::Context;

use dial_engine::logging::{init_logging, LoggingConfig};
use dial_ui::prelude::*;

use dial_clock::clock::Clock;
use dial_clock::config::ClockConfig;
use dial_clock::theme;
use dial_clock::time::{SystemTimeSource, TimeSource};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = ClockConfig::default();
    let source = SystemTimeSource;

    let now = State::new(source.now_millis());
    log::info!("starting clock, refreshing every {:?}", config.refresh);

    Application::new()
        .title(config.title.clone())
        .size(config.window_width, config.window_height)
        .background(theme::background())
        .repeat_every(config.refresh, {
            let now = now.clone();
            move || {
                now.set(source.now_millis());
            }
        })
        .run_widget(move || {
            let time = move || now.get();
            Container::new()
                .center()
                .child(
                    Clock::new(time)
                        .size(config.clock_size, config.clock_size)
                        .radius(config.circle_radius)
                        .thickness(config.outer_circle_thickness),
                )
                .into()
        })
        .context("clock window failed")
}
