//! End-to-end tests of both views through the provider seam.

use async_trait::async_trait;
use chrono::DateTime;
use forecast_core::{
    ActiveAlerts, Alert, BuildError, ConditionEntry, DayEntry, DisplayConfig, HourEntry,
    HourlyAnchor, Location, NoIcons, ProviderError, Temperature, Timestamp, View, ViewContext,
    Weather, WeatherProvider, build_daily, build_hourly,
};

fn at(rfc3339: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(rfc3339).unwrap()
}

#[derive(Debug)]
struct Fixed(Location, Weather);

#[async_trait]
impl WeatherProvider for Fixed {
    async fn resolve(&self, _query: &str) -> Result<(Location, Weather), ProviderError> {
        Ok((self.0.clone(), self.1.clone()))
    }
}

#[derive(Debug)]
struct Failing;

#[async_trait]
impl WeatherProvider for Failing {
    async fn resolve(&self, query: &str) -> Result<(Location, Weather), ProviderError> {
        Err(ProviderError::UnknownLocation(query.to_string()))
    }
}

fn hour(time: &str, summary: &str) -> HourEntry {
    HourEntry {
        time: at(time),
        summary: summary.to_string(),
        icon: "cloudy".to_string(),
        temp: Temperature(50.0),
        apparent_temp: Temperature(48.0),
        precip: 20,
    }
}

fn day(date: &str, sunrise: &str, summary: &str) -> DayEntry {
    DayEntry {
        date: at(date),
        summary: summary.to_string(),
        icon: "cloudy".to_string(),
        high_temp: Temperature(58.0),
        low_temp: Temperature(45.0),
        precip: 30,
        sunrise: at(sunrise),
        sunset: None,
    }
}

fn denver() -> Fixed {
    Fixed(
        Location {
            name: "Denver, CO".to_string(),
        },
        Weather {
            current: ConditionEntry {
                summary: "Overcast".to_string(),
                icon: "cloudy".to_string(),
                temp: Temperature(49.0),
                time: at("2026-10-19T08:10:00-06:00"),
            },
            daily: vec![
                day("2026-10-19T00:00:00-06:00", "2026-10-19T07:11:00-06:00", "Overcast"),
                day("2026-10-20T00:00:00-06:00", "2026-10-20T07:12:00-06:00", "Snow"),
            ],
            hourly: vec![
                hour("2026-10-19T08:00:00-06:00", "Overcast"),
                hour("2026-10-19T09:00:00-06:00", "Overcast"),
                hour("2026-10-20T07:00:00-06:00", "Flurries"),
                hour("2026-10-20T08:00:00-06:00", "Snow"),
            ],
            url: Some("https://forecast.example/denver".to_string()),
            alerts: vec![Alert {
                title: "Winter Storm Watch".to_string(),
                description: None,
                expires: Some(at("2026-10-21T00:00:00-06:00")),
                uri: None,
            }],
        },
    )
}

#[tokio::test]
async fn daily_then_hourly_from_selected_day() {
    let provider = denver();
    let display = DisplayConfig::default();
    let ctx = ViewContext::new(&display, &NoIcons, &ActiveAlerts, at("2026-10-19T08:15:00-06:00"));

    let daily = build_daily(&provider, &ctx, "denver").await.unwrap();
    assert_eq!(daily.len(), 2 + 2);
    assert_eq!(daily[3].title, "Tuesday: Snow");

    // Selecting Tuesday hands its sunrise to the hourly view.
    let arg = daily[3].arg.clone().unwrap();
    assert_eq!(arg.keyword, View::Hourly);

    let hourly = build_hourly(&provider, &ctx, "denver", arg.data.as_deref()).await.unwrap();

    // heading + storm watch + hours at or after 07:12 on Tuesday
    assert_eq!(hourly.len(), 1 + 1 + 1);
    assert_eq!(hourly[1].title, "⚠ Winter Storm Watch");
    assert!(hourly[2].title.ends_with(": Snow"));
}

#[tokio::test]
async fn current_conditions_anchor_at_observation_time() {
    let provider = denver();
    let display = DisplayConfig::default();
    let ctx = ViewContext::new(&display, &NoIcons, &ActiveAlerts, at("2026-10-19T08:15:00-06:00"));

    let daily = build_daily(&provider, &ctx, "denver").await.unwrap();
    let data = daily[1].arg.as_ref().and_then(|a| a.data.clone()).unwrap();

    assert_eq!(
        HourlyAnchor::decode(&data).unwrap(),
        HourlyAnchor::at(at("2026-10-19T08:10:00-06:00"))
    );

    let hourly = build_hourly(&provider, &ctx, "denver", Some(&data)).await.unwrap();
    assert_eq!(hourly.len(), 1 + 1 + 3);
}

#[tokio::test]
async fn malformed_anchor_starts_from_first_hour() {
    let provider = denver();
    let display = DisplayConfig::default();
    let ctx = ViewContext::new(&display, &NoIcons, &ActiveAlerts, at("2026-10-19T08:15:00-06:00"));

    let hourly = build_hourly(&provider, &ctx, "denver", Some("{not json")).await.unwrap();

    assert_eq!(hourly.len(), 1 + 1 + 4);
    assert!(hourly[2].title.contains("8:00 AM"));
}

#[tokio::test]
async fn provider_errors_propagate_unchanged() {
    let display = DisplayConfig::default();
    let ctx = ViewContext::new(&display, &NoIcons, &ActiveAlerts, at("2026-10-19T08:15:00-06:00"));

    let err = build_daily(&Failing, &ctx, "Atlantis").await.unwrap_err();
    assert!(matches!(
        err,
        BuildError::Provider(ProviderError::UnknownLocation(ref q)) if q == "Atlantis"
    ));
    assert_eq!(err.to_string(), "No forecast available for 'Atlantis'");

    let err = build_hourly(&Failing, &ctx, "Atlantis", None).await.unwrap_err();
    assert!(matches!(err, BuildError::Provider(_)));
}
