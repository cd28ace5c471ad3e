/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Matches the premultiplied blend state every shape pipeline is built with.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`-`255`).
    ///
    /// RGB is decoded to linear; alpha is already linear. The sRGB surface
    /// re-encodes on write, so `0x88` lands on screen as `0x88`.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Creates a premultiplied color from a `0xAARRGGBB` literal.
    #[inline]
    pub fn from_argb_hex(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue with its straight alpha replaced by `alpha`.
    ///
    /// A fully transparent color has lost its hue and stays black.
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, alpha)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// sRGB transfer function, inverted.
fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    /// What an sRGB render target stores for a linear channel value.
    fn linear_to_srgb_u8(c: f32) -> u8 {
        let s = if c <= 0.003_130_8 { c * 12.92 } else { 1.055 * c.powf(1.0 / 2.4) - 0.055 };
        (s.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert!(approx(c.r, 0.5));
        assert!(approx(c.g, 0.25));
        assert!(approx(c.b, 0.0));
        assert!(approx(c.a, 0.5));
    }

    #[test]
    fn with_alpha_keeps_hue() {
        let white = Color::from_straight(1.0, 1.0, 1.0, 1.0);
        let c = white.with_alpha(0.45);
        assert!(approx(c.a, 0.45));
        let (r, g, b, _) = c.to_straight();
        assert!(approx(r, 1.0) && approx(g, 1.0) && approx(b, 1.0));
    }

    #[test]
    fn argb_hex_unpacks_channels() {
        let c = Color::from_argb_hex(0xFF_FF_00_00);
        assert!(approx(c.r, 1.0) && c.g == 0.0 && c.b == 0.0 && c.a == 1.0, "{c:?}");
    }

    #[test]
    fn hex_gray_survives_the_srgb_surface() {
        let c = Color::from_argb_hex(0xFF_88_88_88);
        assert!(c.r < 0.5, "0x88 must decode below mid-gray, got {}", c.r);
        assert_eq!(linear_to_srgb_u8(c.r), 0x88);
        assert_eq!(linear_to_srgb_u8(c.g), 0x88);
        assert_eq!(linear_to_srgb_u8(c.b), 0x88);
    }

    #[test]
    fn every_byte_round_trips_through_the_surface_encoding() {
        for v in 0..=255u8 {
            assert_eq!(linear_to_srgb_u8(srgb_to_linear(v)), v, "byte {v}");
        }
    }

    #[test]
    fn alpha_is_not_gamma_decoded() {
        let c = Color::from_argb_hex(0x80_FF_FF_FF);
        assert!(approx(c.a, 128.0 / 255.0));
        let (r, _, _, _) = c.to_straight();
        assert!(approx(r, 1.0));
    }

    #[test]
    fn to_straight_of_transparent_is_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
