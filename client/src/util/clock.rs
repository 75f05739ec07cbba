//! Wall-clock reading and formatting for the terminal status bar.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Refresh interval for the status bar clock.
pub const CLOCK_TICK_MS: u64 = 1_000;

/// Placeholder shown before the first client-side tick.
pub const CLOCK_PLACEHOLDER: &str = "--:--:--";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    /// Local time from the host clock. `None` outside a hydrated client.
    pub fn now() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let date = js_sys::Date::new_0();
            Some(Self { hours: date.get_hours(), minutes: date.get_minutes(), seconds: date.get_seconds() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// `HH:MM:SS`, zero padded, 24-hour.
    pub fn format(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours % 24, self.minutes % 60, self.seconds % 60)
    }
}

pub fn format_clock(time: Option<ClockTime>) -> String {
    time.map_or_else(|| CLOCK_PLACEHOLDER.to_owned(), |t| t.format())
}
