use std::time::Duration;

/// Window and dial geometry for the clock app, in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub title: String,
    pub window_width: f64,
    pub window_height: f64,

    /// Side of the square box the dial is laid out in.
    pub clock_size: f32,
    /// Radius of the face disc; ticks and hands scale with it.
    pub circle_radius: f32,
    /// Width of the ring drawn just outside the face.
    pub outer_circle_thickness: f32,

    /// How often the displayed time is refreshed.
    pub refresh: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: "Clock".to_string(),
            window_width: 600.0,
            window_height: 600.0,
            clock_size: 500.0,
            circle_radius: 180.0,
            outer_circle_thickness: 18.0,
            refresh: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dial_fits_its_box() {
        let c = ClockConfig::default();
        assert!((c.circle_radius + c.outer_circle_thickness) * 2.0 <= c.clock_size);
        assert!(f64::from(c.clock_size) <= c.window_width.min(c.window_height));
    }

    #[test]
    fn refreshes_five_times_a_second() {
        assert_eq!(ClockConfig::default().refresh, Duration::from_millis(200));
    }
}
