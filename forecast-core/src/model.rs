use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Timestamps keep the UTC offset of the forecast location.
pub type Timestamp = DateTime<FixedOffset>;

/// A resolved place, as named by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
}

/// A temperature in whatever unit the provider was asked for.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(pub f64);

impl Temperature {
    /// Nearest whole degree.
    pub fn whole(self) -> i64 {
        self.0.round() as i64
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub summary: String,
    pub icon: String,
    pub temp: Temperature,
    pub time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: Timestamp,
    pub summary: String,
    pub icon: String,
    pub high_temp: Temperature,
    pub low_temp: Temperature,
    /// Chance of precipitation, 0-100.
    pub precip: u8,
    pub sunrise: Timestamp,
    #[serde(default)]
    pub sunset: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourEntry {
    pub time: Timestamp,
    pub summary: String,
    pub icon: String,
    pub temp: Temperature,
    pub apparent_temp: Temperature,
    /// Chance of precipitation, 0-100.
    pub precip: u8,
}

/// A weather warning issued for the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expires: Option<Timestamp>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Alert {
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.expires.is_none_or(|expires| expires > now)
    }
}

/// One forecast snapshot for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub current: ConditionEntry,
    #[serde(default)]
    pub daily: Vec<DayEntry>,
    #[serde(default)]
    pub hourly: Vec<HourEntry>,
    /// Browser-openable page with the full forecast.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl Weather {
    /// Sort daily and hourly entries chronologically and clamp precipitation
    /// chances into 0-100.
    pub fn normalized(mut self) -> Self {
        self.daily.sort_by_key(|d| d.date);
        self.hourly.sort_by_key(|h| h.time);

        for day in &mut self.daily {
            day.precip = day.precip.min(100);
        }
        for hour in &mut self.hourly {
            hour.precip = hour.precip.min(100);
        }

        self
    }

    /// Whether `now` falls outside daylight, judged by the sunrise and sunset
    /// of the daily entry for `now`'s calendar date. Without such an entry it
    /// is considered day.
    pub fn is_at_night(&self, now: Timestamp) -> bool {
        let today = now.date_naive();

        let Some(day) = self.daily.iter().find(|d| d.date.date_naive() == today) else {
            return false;
        };

        if now < day.sunrise {
            return true;
        }

        day.sunset.is_some_and(|sunset| now >= sunset)
    }
}
