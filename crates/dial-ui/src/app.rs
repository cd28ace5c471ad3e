use std::time::{Duration, Instant};

use anyhow::Context;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::window::WindowId;

use dial_engine::coords::Vec2;
use dial_engine::core::{App as EngineApp, AppControl, FrameCtx, Redraw};
use dial_engine::device::GpuInit;
use dial_engine::paint::Color;
use dial_engine::render::SceneRenderer;
use dial_engine::window::{Runtime, RuntimeConfig};

use crate::effect::Effects;
use crate::scene::UiScene;
use crate::state;
use crate::widget::Element;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the window and any repeating effects, then start the event loop
/// with [`Application::run_widget`].
///
/// ```rust,ignore
/// let now = State::new(read_clock());
/// Application::new()
///     .title("Clock")
///     .size(600.0, 600.0)
///     .repeat_every(Duration::from_millis(200), {
///         let now = now.clone();
///         move || { now.set(read_clock()); }
///     })
///     .run_widget(move || Clock::new(now).into())?;
/// ```
pub struct Application {
    title:      String,
    width:      f64,
    height:     f64,
    background: Color,
    gpu_init:   GpuInit,
    repeating:  Vec<(Duration, Box<dyn FnMut()>)>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:      "dial".to_string(),
            width:      600.0,
            height:     600.0,
            background: Color::from_straight(1.0, 1.0, 1.0, 1.0),
            gpu_init:   GpuInit::default(),
            repeating:  Vec::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Color the surface is cleared to before the widget tree paints.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Override GPU surface/device preferences.
    pub fn gpu(mut self, init: GpuInit) -> Self {
        self.gpu_init = init;
        self
    }

    /// Run `action` every `period` while the window is open.
    ///
    /// The first run happens one period after the event loop starts. Any
    /// [`State`](crate::state::State) the action changes triggers a repaint.
    pub fn repeat_every(mut self, period: Duration, action: impl FnMut() + 'static) -> Self {
        self.repeating.push((period, Box::new(action)));
        self
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Start the event loop with a custom root widget.
    ///
    /// `build` is called once; the returned [`Element`] persists across
    /// frames. Returns when the window is closed, or with the first platform
    /// or GPU error.
    pub fn run_widget<F>(self, build: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> Element,
    {
        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            min_size:     None,
        };
        let gpu_init = self.gpu_init.clone();
        let state = UiAppState::new(self, build());

        Runtime::run(config, gpu_init, state).context("dial runtime failed")
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `dial_engine::core::App`.
///
/// Everything engine-specific (renderers, FrameCtx) lives here.
/// User code never sees this type.
struct UiAppState {
    background: Color,

    ui_scene: UiScene,
    renderer: SceneRenderer,
    root:     Element,

    effects: Effects,
    /// State generation the last presented frame was painted from.
    painted_generation: Option<u64>,
}

impl UiAppState {
    fn new(app: Application, root: Element) -> Self {
        let start = Instant::now();
        let mut effects = Effects::new();
        for (period, action) in app.repeating {
            effects.repeat_from(start, period, action);
        }

        Self {
            background: app.background,
            ui_scene: UiScene::new(),
            renderer: SceneRenderer::new(),
            root,
            effects,
            painted_generation: None,
        }
    }

    fn is_stale(&self) -> bool {
        self.painted_generation != Some(state::generation())
    }
}

impl EngineApp for UiAppState {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        if matches!(event, WindowEvent::CloseRequested) {
            self.effects.cancel_all();
        }
        AppControl::Continue
    }

    fn next_wakeup(&self) -> Option<Instant> {
        self.effects.next_deadline()
    }

    fn on_wakeup(&mut self, now: Instant) -> Redraw {
        self.effects.poll(now);
        if self.is_stale() { Redraw::Request } else { Redraw::Skip }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);

        // ── Layout + paint ────────────────────────────────────────────────
        self.painted_generation = Some(state::generation());
        let dl = self.ui_scene.frame_ref(&self.root, viewport);
        log::trace!("painted {} draw commands", dl.len());

        // ── Render ────────────────────────────────────────────────────────
        let renderer = &mut self.renderer;
        ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}
