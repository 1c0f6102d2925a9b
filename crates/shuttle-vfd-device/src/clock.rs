//! Wall-clock seam for the clock display mode.

use chrono::{Datelike, Local, Timelike};
use shuttle_vfd_protocol::VfdDateTime;
use tracing::warn;

/// Source of the time loaded into the panel's clock.
pub trait ClockSource: Send {
    /// Current local time, or `None` when no valid reading is available.
    fn now(&self) -> Option<VfdDateTime>;
}

/// System wall clock via `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Option<VfdDateTime> {
        let now = Local::now();
        let year = now.year();
        // The panel stores two year digits; a reading outside 2000-2099 is
        // as good as no reading.
        if !(2000..=2099).contains(&year) {
            return None;
        }
        Some(VfdDateTime {
            seconds: now.second().min(59) as u8,
            minutes: now.minute() as u8,
            hours: now.hour() as u8,
            weekday: now.weekday().number_from_monday() as u8,
            day: now.day() as u8,
            month: now.month() as u8,
            year: (year - 2000) as u8,
        })
    }
}

// Degrade a missing or invalid reading to the all-zero time instead of
// failing the mode switch.
pub(crate) fn read_or_zero(clock: &dyn ClockSource) -> VfdDateTime {
    clock.now().unwrap_or_else(|| {
        warn!("no valid clock reading, loading zeroed time");
        VfdDateTime::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoClock;

    impl ClockSource for NoClock {
        fn now(&self) -> Option<VfdDateTime> {
            None
        }
    }

    #[test]
    fn system_clock_yields_plausible_fields() {
        let now = SystemClock.now().expect("host clock should be in range");
        assert!(now.seconds <= 59);
        assert!(now.minutes <= 59);
        assert!(now.hours <= 23);
        assert!((1..=7).contains(&now.weekday));
        assert!((1..=31).contains(&now.day));
        assert!((1..=12).contains(&now.month));
        assert!(now.year <= 99);
    }

    #[test]
    fn missing_reading_degrades_to_zero_time() {
        assert_eq!(read_or_zero(&NoClock), VfdDateTime::default());
    }
}
