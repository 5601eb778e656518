//! Hour-by-hour breakdown.

use chrono::Datelike;

use crate::{
    anchor::{DailyAction, HourlyAnchor},
    error::BuildError,
    format::{degrees, format_time},
    item::{Item, ItemArg, ItemMod, LINE, Mode, Modifier, View},
    model::{HourEntry, Location, Weather},
    provider::WeatherProvider,
    view::ViewContext,
};

/// Resolve `query` and list hours from the anchor carried in `data`, or from
/// the first forecast hour when there is none.
pub async fn build_hourly(
    provider: &dyn WeatherProvider,
    ctx: &ViewContext<'_>,
    query: &str,
    data: Option<&str>,
) -> Result<Vec<Item>, BuildError> {
    tracing::debug!(query, data, "building hourly view");

    let anchor = HourlyAnchor::from_payload(data);
    let (location, weather) = provider.resolve(query).await?;
    hourly_items(&location, &weather, &anchor, ctx)
}

pub fn hourly_items(
    location: &Location,
    weather: &Weather,
    anchor: &HourlyAnchor,
    ctx: &ViewContext<'_>,
) -> Result<Vec<Item>, BuildError> {
    let start = anchor.start.or_else(|| weather.hourly.first().map(|h| h.time));

    let mut items = vec![heading(location, weather)?];

    ctx.alerts.inject(weather, ctx, &mut items)?;

    let Some(start) = start else {
        return Ok(items);
    };

    items.extend(
        weather
            .hourly
            .iter()
            .filter(|entry| entry.time >= start)
            .map(|entry| hour_item(entry, ctx)),
    );

    Ok(items)
}

/// Back to the daily view; with a forecast page, the cmd modifier opens it.
fn heading(location: &Location, weather: &Weather) -> Result<Item, BuildError> {
    let mut heading = Item::new(format!("Weather for {}", location.name), LINE)
        .with_arg(ItemArg::to(View::Daily));

    if let Some(url) = weather.url.as_deref().filter(|u| !u.is_empty()) {
        heading.add_mod(
            Modifier::Cmd,
            ItemMod {
                subtitle: "Open this forecast in a browser".to_string(),
                arg: ItemArg::to(View::Daily)
                    .with_mode(Mode::Do)
                    .with_data(DailyAction::open(url).encode()?),
            },
        );
    }

    Ok(heading)
}

fn hour_item(entry: &HourEntry, ctx: &ViewContext<'_>) -> Item {
    let display = ctx.display;
    let weekday = display.weekday_names.label(entry.time.weekday());

    Item::new(
        format!(
            "{weekday} {}: {}",
            format_time(entry.time, &display.time_format),
            entry.summary
        ),
        format!(
            "{} ({})   ☂ {}%",
            degrees(entry.temp, display.units),
            degrees(entry.apparent_temp, display.units),
            entry.precip
        ),
    )
    .with_icon(ctx.icons.resolve(&entry.icon))
}
