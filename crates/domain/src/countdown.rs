use crate::timer::DisplayOptions;
use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Whole-unit breakdown of the time remaining until a timer expires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }
}

impl TimeLeft {
    /// `None` once the deadline has passed.
    pub fn until(end_ts: i64, now: i64) -> Option<Self> {
        let remaining = end_ts - now;
        if remaining <= 0 {
            return None;
        }
        Some(Self {
            days: remaining / MILLIS_PER_DAY,
            hours: (remaining % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (remaining % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (remaining % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        })
    }

    /// Units the widget should render given the shop's display options.
    /// Days are hidden when the countdown is below a day.
    pub fn visible_units(&self, opts: &DisplayOptions) -> Vec<(TimeUnit, i64)> {
        let mut units = Vec::with_capacity(4);
        if opts.show_days && self.days > 0 {
            units.push((TimeUnit::Days, self.days));
        }
        if opts.show_hours {
            units.push((TimeUnit::Hours, self.hours));
        }
        if opts.show_minutes {
            units.push((TimeUnit::Minutes, self.minutes));
        }
        if opts.show_seconds {
            units.push((TimeUnit::Seconds, self.seconds));
        }
        units
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_decomposes_remaining_time() {
        let remaining = 2 * MILLIS_PER_DAY + 3 * MILLIS_PER_HOUR + 4 * MILLIS_PER_MINUTE + 5 * MILLIS_PER_SECOND;
        let time_left = TimeLeft::until(remaining, 0).expect("Not expired");
        assert_eq!(
            time_left,
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn it_floors_partial_units() {
        let time_left = TimeLeft::until(MILLIS_PER_SECOND + 999, 0).expect("Not expired");
        assert_eq!(time_left.seconds, 1);
        assert_eq!(time_left.minutes, 0);
    }

    #[test]
    fn it_is_none_at_and_after_expiry() {
        assert!(TimeLeft::until(1000, 1000).is_none());
        assert!(TimeLeft::until(1000, 1001).is_none());
        assert!(TimeLeft::until(1000, 999).is_some());
    }

    #[test]
    fn visible_units_follow_display_options() {
        let time_left = TimeLeft {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        let mut opts = DisplayOptions::default();
        opts.show_minutes = false;
        let units = time_left.visible_units(&opts);
        assert_eq!(
            units,
            vec![
                (TimeUnit::Days, 1),
                (TimeUnit::Hours, 2),
                (TimeUnit::Seconds, 4)
            ]
        );
    }

    #[test]
    fn zero_days_are_suppressed() {
        let time_left = TimeLeft {
            days: 0,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        let units = time_left.visible_units(&DisplayOptions::default());
        assert!(!units.iter().any(|(unit, _)| *unit == TimeUnit::Days));
        assert_eq!(units.len(), 3);
    }
}
