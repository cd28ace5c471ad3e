//! Dial UI: retained widget tree on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dial_ui::prelude::*;
//!
//! let now = State::new(0_i64);
//! Application::new()
//!     .title("Hello")
//!     .repeat_every(Duration::from_millis(200), {
//!         let now = now.clone();
//!         move || now.set(read_clock())
//!     })
//!     .run_widget(move || Container::new().center().child(MyDial::new(now)).into())?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`] is accepted:
//!
//! ```rust,ignore
//! use dial_ui::prelude::*;
//!
//! pub struct Dot { color: Color }
//!
//! impl Widget for Dot {
//!     fn measure(&self, constraints: Constraints) -> Vec2 {
//!         constraints.constrain(Vec2::new(24.0, 24.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_circle(rect.center(), rect.min_dimension() / 2.0, self.color);
//!     }
//! }
//! ```

pub mod app;
pub mod constraints;
pub mod effect;
pub mod painter;
pub mod scene;
pub mod state;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything you need to build and extend UI; import this in your widget files.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::constraints::Constraints;
    pub use crate::effect::Effects;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::state::State;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::container::Container;

    // Re-export the engine primitives everyone needs.
    pub use dial_engine::coords::{Rect, Vec2};
    pub use dial_engine::paint::{Color, LinearGradient, Paint, RadialGradient};
}
