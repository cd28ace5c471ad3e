//! Clock palette.

use dial_engine::paint::Color;

pub fn white() -> Color {
    Color::from_argb_hex(0xFFFFFFFF)
}

pub fn dark_gray() -> Color {
    Color::from_argb_hex(0xFF444444)
}

pub fn gray() -> Color {
    Color::from_argb_hex(0xFF888888)
}

pub fn red_orange() -> Color {
    Color::from_argb_hex(0xFFFF5722)
}

/// Window clear color behind the dial.
pub fn background() -> Color {
    Color::from_argb_hex(0xFFF2F2F2)
}
