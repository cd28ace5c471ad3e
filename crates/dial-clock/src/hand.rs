use dial_engine::paint::Color;

use crate::theme;
use crate::time::TimeOfDay;

/// One of the three clock hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockHand {
    Seconds,
    Minutes,
    Hour,
}

impl ClockHand {
    /// Paint order: the hour hand ends up on top.
    pub const ALL: [ClockHand; 3] = [ClockHand::Seconds, ClockHand::Minutes, ClockHand::Hour];

    /// Clockwise angle from 12 o'clock in degrees, in `[0, 360)`.
    ///
    /// The minute hand advances with the seconds and the hour hand with the
    /// minutes, so neither jumps on the boundary.
    pub fn angle(self, t: &TimeOfDay) -> f32 {
        let h = (t.hour % 12) as f32;
        let m = t.minute as f32;
        let s = t.second as f32;
        match self {
            ClockHand::Seconds => s * 6.0,
            ClockHand::Minutes => (m + s / 60.0) * 6.0,
            ClockHand::Hour => (h / 12.0 * 60.0 + m / 12.0) * 6.0,
        }
    }

    /// Length as a fraction of the face radius.
    pub fn length_fraction(self) -> f32 {
        match self {
            ClockHand::Seconds => 0.8,
            ClockHand::Minutes => 0.7,
            ClockHand::Hour => 0.5,
        }
    }

    pub fn thickness(self) -> f32 {
        match self {
            ClockHand::Seconds => 3.0,
            ClockHand::Minutes => 7.0,
            ClockHand::Hour => 9.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ClockHand::Seconds => theme::red_orange(),
            ClockHand::Minutes | ClockHand::Hour => theme::gray(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_second_of_the_day() -> impl Iterator<Item = TimeOfDay> {
        (0..24).flat_map(|h| (0..60).flat_map(move |m| (0..60).map(move |s| TimeOfDay::new(h, m, s))))
    }

    #[test]
    fn angles_stay_within_a_turn() {
        for t in every_second_of_the_day() {
            for hand in ClockHand::ALL {
                let a = hand.angle(&t);
                assert!((0.0..360.0).contains(&a), "{hand:?} at {t:?} = {a}");
            }
        }
    }

    #[test]
    fn quarter_past_three_and_a_half() {
        let t = TimeOfDay::new(3, 15, 30);
        assert_eq!(ClockHand::Seconds.angle(&t), 180.0);
        assert_eq!(ClockHand::Minutes.angle(&t), 93.0);
        assert_eq!(ClockHand::Hour.angle(&t), 97.5);
    }

    #[test]
    fn minute_hand_creeps_with_seconds() {
        for s in 1..60 {
            let before = ClockHand::Minutes.angle(&TimeOfDay::new(10, 20, s - 1));
            let after = ClockHand::Minutes.angle(&TimeOfDay::new(10, 20, s));
            assert!(after > before, "second {s}");
        }
    }

    #[test]
    fn hour_hand_creeps_with_minutes() {
        for m in 1..60 {
            let before = ClockHand::Hour.angle(&TimeOfDay::new(7, m - 1, 0));
            let after = ClockHand::Hour.angle(&TimeOfDay::new(7, m, 0));
            assert!(after > before, "minute {m}");
        }
    }

    #[test]
    fn afternoon_hours_fold_onto_the_dial() {
        let am = TimeOfDay::new(3, 0, 0);
        let pm = TimeOfDay::new(15, 0, 0);
        assert_eq!(ClockHand::Hour.angle(&am), ClockHand::Hour.angle(&pm));
        assert_eq!(ClockHand::Hour.angle(&TimeOfDay::new(12, 0, 0)), 0.0);
    }

    #[test]
    fn seconds_hand_stands_out() {
        assert_ne!(ClockHand::Seconds.color(), ClockHand::Minutes.color());
        assert_eq!(ClockHand::Minutes.color(), ClockHand::Hour.color());
    }

    #[test]
    fn hands_get_shorter_and_thicker() {
        let [s, m, h] = ClockHand::ALL;
        assert!(s.length_fraction() > m.length_fraction());
        assert!(m.length_fraction() > h.length_fraction());
        assert!(s.thickness() < m.thickness() && m.thickness() < h.thickness());
    }
}
