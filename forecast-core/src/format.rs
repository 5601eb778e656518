//! Unit, temperature, weekday and time rendering shared by both views.

use std::fmt::Write as _;

use chrono::{
    Weekday,
    format::{Item, StrftimeItems},
};
use serde::{Deserialize, Serialize};

use crate::model::{Temperature, Timestamp};

/// Unit system the forecast was requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    pub fn degree_suffix(&self) -> &'static str {
        match self {
            Units::Imperial => "F",
            Units::Metric => "C",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Imperial => "imperial",
            Units::Metric => "metric",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Imperial, Units::Metric]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "imperial" | "us" | "f" => Ok(Units::Imperial),
            "metric" | "si" | "c" => Ok(Units::Metric),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: imperial, metric."
            )),
        }
    }
}

/// Fixed weekday label sets for the hourly view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayNames {
    #[default]
    Chinese,
    English,
}

impl WeekdayNames {
    pub fn label(&self, day: Weekday) -> &'static str {
        match self {
            WeekdayNames::Chinese => match day {
                Weekday::Sun => "星期天",
                Weekday::Mon => "星期一",
                Weekday::Tue => "星期二",
                Weekday::Wed => "星期三",
                Weekday::Thu => "星期四",
                Weekday::Fri => "星期五",
                Weekday::Sat => "星期六",
            },
            WeekdayNames::English => match day {
                Weekday::Sun => "Sunday",
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekdayNames::Chinese => "chinese",
            WeekdayNames::English => "english",
        }
    }

    pub const fn all() -> &'static [WeekdayNames] {
        &[WeekdayNames::Chinese, WeekdayNames::English]
    }
}

impl std::fmt::Display for WeekdayNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WeekdayNames {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "chinese" | "zh" => Ok(WeekdayNames::Chinese),
            "english" | "en" => Ok(WeekdayNames::English),
            _ => Err(anyhow::anyhow!(
                "Unknown weekday names '{value}'. Supported: chinese, english."
            )),
        }
    }
}

const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// `61°F`
pub fn degrees(temp: Temperature, units: Units) -> String {
    format!("{}°{}", temp.whole(), units.degree_suffix())
}

/// `75/60°F`
pub fn high_low(high: Temperature, low: Temperature, units: Units) -> String {
    format!("{}/{}°{}", high.whole(), low.whole(), units.degree_suffix())
}

/// Whether `format` is a strftime string chrono can render.
pub fn is_valid_time_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Render `time` with a strftime `format`, falling back to 24-hour time when
/// the format cannot be rendered.
pub fn format_time(time: Timestamp, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_ok() {
        return out;
    }

    tracing::debug!(format, "unrenderable time format, using {FALLBACK_TIME_FORMAT}");
    time.format(FALLBACK_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::at;

    #[test]
    fn degrees_use_unit_suffix() {
        assert_eq!(degrees(Temperature(61.6), Units::Imperial), "62°F");
        assert_eq!(degrees(Temperature(-0.4), Units::Metric), "0°C");
    }

    #[test]
    fn high_low_rounds_both() {
        assert_eq!(high_low(Temperature(74.6), Temperature(60.2), Units::Imperial), "75/60°F");
    }

    #[test]
    fn every_weekday_has_a_label() {
        let days = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];

        for names in WeekdayNames::all() {
            let labels: Vec<_> = days.iter().map(|d| names.label(*d)).collect();
            let mut unique = labels.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 7, "{names} labels must be distinct");
        }

        assert_eq!(WeekdayNames::Chinese.label(Weekday::Sun), "星期天");
        assert_eq!(WeekdayNames::English.label(Weekday::Sat), "Saturday");
    }

    #[test]
    fn units_parse_and_display() {
        for units in Units::all() {
            assert_eq!(Units::try_from(units.as_str()).unwrap(), *units);
        }
        assert!(Units::try_from("kelvin").is_err());
    }

    #[test]
    fn time_format_validation() {
        assert!(is_valid_time_format("%-I:%M %p"));
        assert!(is_valid_time_format("%H:%M"));
        assert!(!is_valid_time_format("%Q"));
    }

    #[test]
    fn format_time_falls_back_on_bad_format() {
        let t = at("2026-10-19T15:05:00-07:00");

        assert_eq!(format_time(t, "%-I:%M %p"), "3:05 PM");
        assert_eq!(format_time(t, "%Q"), "15:05");
    }
}
