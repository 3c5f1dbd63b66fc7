//! Text for the time and days columns of a medicine row.

use chrono::{NaiveTime, Weekday};

use crate::config::{ClockStyle, FormatterConfig};
use crate::models::DaysOfWeek;

/// Turns raw schedule fields into display strings.
///
/// Implementations must be pure: same input, same output, no side effects.
pub trait RowFormatter {
    fn format_time(&self, hour_of_day: u32, minute: u32) -> String;
    fn format_days(&self, days: DaysOfWeek) -> String;
}

/// Formatter used when the host does not supply its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultRowFormatter {
    clock: ClockStyle,
}

impl DefaultRowFormatter {
    pub fn new(clock: ClockStyle) -> Self {
        Self { clock }
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.clock)
    }
}

impl RowFormatter for DefaultRowFormatter {
    fn format_time(&self, hour_of_day: u32, minute: u32) -> String {
        let Some(time) = NaiveTime::from_hms_opt(hour_of_day, minute, 0) else {
            // Out-of-range values are shown raw.
            return format!("{hour_of_day:02}:{minute:02}");
        };
        match self.clock {
            ClockStyle::TwentyFourHour => time.format("%H:%M").to_string(),
            ClockStyle::TwelveHour => time.format("%-I:%M %p").to_string(),
        }
    }

    fn format_days(&self, days: DaysOfWeek) -> String {
        if days.is_empty() {
            return "No days".to_string();
        }
        if days == DaysOfWeek::EVERY_DAY {
            return "Every day".to_string();
        }
        if days == DaysOfWeek::WEEKDAYS {
            return "Weekdays".to_string();
        }
        if days == DaysOfWeek::WEEKENDS {
            return "Weekends".to_string();
        }
        days.iter().map(short_name).collect::<Vec<_>>().join(", ")
    }
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_24h_is_zero_padded() {
        let f = DefaultRowFormatter::default();
        assert_eq!(f.format_time(8, 5), "08:05");
        assert_eq!(f.format_time(0, 0), "00:00");
        assert_eq!(f.format_time(23, 59), "23:59");
    }

    #[test]
    fn time_12h_uses_am_pm() {
        let f = DefaultRowFormatter::new(ClockStyle::TwelveHour);
        assert_eq!(f.format_time(8, 5), "8:05 AM");
        assert_eq!(f.format_time(0, 30), "12:30 AM");
        assert_eq!(f.format_time(12, 0), "12:00 PM");
        assert_eq!(f.format_time(21, 45), "9:45 PM");
    }

    #[test]
    fn time_out_of_range_shows_raw_values() {
        let f = DefaultRowFormatter::new(ClockStyle::TwelveHour);
        assert_eq!(f.format_time(25, 7), "25:07");
    }

    #[test]
    fn days_named_sets() {
        let f = DefaultRowFormatter::default();
        assert_eq!(f.format_days(DaysOfWeek::NONE), "No days");
        assert_eq!(f.format_days(DaysOfWeek::EVERY_DAY), "Every day");
        assert_eq!(f.format_days(DaysOfWeek::WEEKDAYS), "Weekdays");
        assert_eq!(f.format_days(DaysOfWeek::WEEKENDS), "Weekends");
    }

    #[test]
    fn days_listed_monday_first() {
        let f = DefaultRowFormatter::default();
        let days: DaysOfWeek = [Weekday::Fri, Weekday::Mon, Weekday::Wed]
            .into_iter()
            .collect();
        assert_eq!(f.format_days(days), "Mon, Wed, Fri");

        let single: DaysOfWeek = [Weekday::Sun].into_iter().collect();
        assert_eq!(f.format_days(single), "Sun");
    }

    #[test]
    fn from_config_uses_clock() {
        let config = FormatterConfig {
            clock: ClockStyle::TwelveHour,
        };
        let f = DefaultRowFormatter::from_config(&config);
        assert_eq!(f.format_time(13, 0), "1:00 PM");
    }
}
