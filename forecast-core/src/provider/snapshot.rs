use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

use crate::{
    error::ProviderError,
    model::{Location, Weather},
};

use super::WeatherProvider;

/// Reads forecasts that were saved to a local JSON document.
///
/// The document is either a single `{"location": .., "weather": ..}` record or
/// `{"forecasts": [record, ..]}`. The file is re-read on every request.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Vec<SnapshotRecord>, ProviderError> {
        let body = tokio::fs::read_to_string(&self.path).await.map_err(|source| {
            ProviderError::Read {
                path: self.path.clone(),
                source,
            }
        })?;

        let parsed: SnapshotDocument =
            serde_json::from_str(&body).map_err(|source| ProviderError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(match parsed {
            SnapshotDocument::Many { forecasts } => forecasts,
            SnapshotDocument::One(record) => vec![record],
        })
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotRecord {
    location: Location,
    weather: Weather,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    Many { forecasts: Vec<SnapshotRecord> },
    One(SnapshotRecord),
}

/// Empty queries pick the first record; otherwise the first location whose
/// name contains the query, ignoring case.
fn select(records: Vec<SnapshotRecord>, query: &str) -> Option<SnapshotRecord> {
    let needle = query.trim().to_lowercase();

    records
        .into_iter()
        .find(|r| needle.is_empty() || r.location.name.to_lowercase().contains(&needle))
}

#[async_trait]
impl WeatherProvider for SnapshotProvider {
    async fn resolve(&self, query: &str) -> Result<(Location, Weather), ProviderError> {
        let records = self.load().await?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "loaded snapshot");

        let record =
            select(records, query).ok_or_else(|| ProviderError::UnknownLocation(query.to_string()))?;

        Ok((record.location, record.weather.normalized()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PORTLAND: &str = r#"{
        "location": {"name": "Portland, OR"},
        "weather": {
            "current": {"summary": "Drizzle", "icon": "rain", "temp": 54.2, "time": "2026-10-19T09:00:00-07:00"},
            "hourly": [
                {"time": "2026-10-19T11:00:00-07:00", "summary": "Rain", "icon": "rain", "temp": 55.0, "apparent_temp": 53.0, "precip": 80},
                {"time": "2026-10-19T10:00:00-07:00", "summary": "Drizzle", "icon": "rain", "temp": 54.0, "apparent_temp": 52.0, "precip": 60}
            ],
            "url": "https://forecast.example/portland"
        }
    }"#;

    fn write_snapshot(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forecast.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn single_record_resolves_and_sorts() {
        let (_dir, path) = write_snapshot(PORTLAND);
        let provider = SnapshotProvider::new(&path);

        let (loc, weather) = provider.resolve("").await.unwrap();

        assert_eq!(loc.name, "Portland, OR");
        assert!(weather.daily.is_empty());
        assert!(weather.alerts.is_empty());
        assert_eq!(weather.hourly[0].summary, "Drizzle");
        assert_eq!(weather.url.as_deref(), Some("https://forecast.example/portland"));
    }

    #[tokio::test]
    async fn query_matches_name_case_insensitively() {
        let doc = format!(
            r#"{{"forecasts": [
                {{"location": {{"name": "Seattle, WA"}}, "weather": {{"current": {{"summary": "Clear", "icon": "clear-day", "temp": 60, "time": "2026-10-19T09:00:00-07:00"}}}}}},
                {PORTLAND}
            ]}}"#
        );
        let (_dir, path) = write_snapshot(&doc);
        let provider = SnapshotProvider::new(&path);

        let (loc, _) = provider.resolve("  portland ").await.unwrap();
        assert_eq!(loc.name, "Portland, OR");

        let (loc, _) = provider.resolve("").await.unwrap();
        assert_eq!(loc.name, "Seattle, WA");
    }

    #[tokio::test]
    async fn unknown_location_is_reported() {
        let (_dir, path) = write_snapshot(PORTLAND);
        let provider = SnapshotProvider::new(&path);

        let err = provider.resolve("Reykjavik").await.unwrap_err();
        assert!(matches!(err, ProviderError::UnknownLocation(ref q) if q == "Reykjavik"));
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SnapshotProvider::new(dir.path().join("absent.json"));

        let err = provider.resolve("").await.unwrap_err();
        assert!(matches!(err, ProviderError::Read { .. }));
    }

    #[tokio::test]
    async fn garbage_is_a_parse_error() {
        let (_dir, path) = write_snapshot("not a forecast");
        let provider = SnapshotProvider::new(&path);

        let err = provider.resolve("").await.unwrap_err();
        assert!(matches!(err, ProviderError::Parse { .. }));
        assert!(err.to_string().contains("forecast.json"));
    }
}
