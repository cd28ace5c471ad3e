use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Whether a timer wake-up changed anything that needs repainting.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Redraw {
    Skip,
    Request,
}

/// Application contract implemented by higher layers.
///
/// The runtime does not redraw continuously: a frame is produced after
/// creation, after resize, and whenever [`App::on_wakeup`] asks for one.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Earliest instant the app wants to be woken, if any.
    fn next_wakeup(&self) -> Option<Instant> {
        None
    }

    /// Called when the event loop wakes (timer deadline or any other event).
    fn on_wakeup(&mut self, now: Instant) -> Redraw {
        let _ = now;
        Redraw::Skip
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
