//! Wall-clock input and calendar decomposition.

use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

/// Source of "now" as milliseconds since the Unix epoch.
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<F: Fn() -> i64> TimeSource for F {
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Hour-of-day, minute and second of a timestamp in some timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    /// 0..24
    pub hour: u32,
    /// 0..60
    pub minute: u32,
    /// 0..60
    pub second: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    /// Builds a time of day, wrapping each field into its range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour: hour % 24, minute: minute % 60, second: second % 60 }
    }

    /// Decomposes `millis` in the platform's local timezone.
    pub fn from_millis_local(millis: i64) -> Self {
        Self::from_millis_in(millis, &Local)
    }

    /// Decomposes `millis` in `tz`.
    ///
    /// Timestamps chrono cannot represent decompose to midnight.
    pub fn from_millis_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> Self {
        match DateTime::<Utc>::from_timestamp_millis(millis) {
            Some(utc) => {
                let t = utc.with_timezone(tz);
                Self { hour: t.hour(), minute: t.minute(), second: t.second() }
            }
            None => {
                log::warn!("timestamp {millis} ms is out of range; showing midnight");
                Self::MIDNIGHT
            }
        }
    }
}
