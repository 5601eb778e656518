//! Multi-day outlook.

use crate::{
    anchor::HourlyAnchor,
    error::BuildError,
    format::{degrees, high_low},
    icons::NIGHT_PREFIX,
    item::{Item, ItemArg, LINE, View},
    model::{DayEntry, Location, Weather},
    provider::WeatherProvider,
    view::ViewContext,
};

/// Resolve `query` and list the current conditions followed by one row per
/// forecast day.
pub async fn build_daily(
    provider: &dyn WeatherProvider,
    ctx: &ViewContext<'_>,
    query: &str,
) -> Result<Vec<Item>, BuildError> {
    tracing::debug!(query, "building daily view");

    let (location, weather) = provider.resolve(query).await?;
    daily_items(&location, &weather, ctx)
}

pub fn daily_items(
    location: &Location,
    weather: &Weather,
    ctx: &ViewContext<'_>,
) -> Result<Vec<Item>, BuildError> {
    let units = ctx.display.units;
    let mut items = Vec::with_capacity(weather.daily.len() + 2);

    items.push(Item::new(format!("Weather for {}", location.name), LINE));

    let current = &weather.current;
    items.push(
        Item::new(format!("Currently: {}", current.summary), degrees(current.temp, units))
            .with_icon(ctx.icons.resolve(&current.icon))
            .with_arg(hourly_from(HourlyAnchor::at(current.time))?),
    );

    for entry in &weather.daily {
        let (label, conditions, icon) = describe_day(entry, weather, ctx);

        items.push(
            Item::new(
                format!("{label}: {conditions}"),
                format!("{}, {}%", high_low(entry.high_temp, entry.low_temp, units), entry.precip),
            )
            .with_icon(ctx.icons.resolve(&icon))
            .with_arg(hourly_from(HourlyAnchor::at(entry.sunrise))?),
        );
    }

    Ok(items)
}

/// Label, conditions text and icon code for one day. Today's row switches to
/// its night wording once the sun is down.
fn describe_day(entry: &DayEntry, weather: &Weather, ctx: &ViewContext<'_>) -> (String, String, String) {
    if entry.date.date_naive() != ctx.now.date_naive() {
        return (
            entry.date.format("%A").to_string(),
            entry.summary.clone(),
            entry.icon.clone(),
        );
    }

    if weather.is_at_night(ctx.now) {
        (
            "Tonight".to_string(),
            entry.summary.replace(" day", " night"),
            format!("{NIGHT_PREFIX}{}", entry.icon),
        )
    } else {
        ("Today".to_string(), entry.summary.clone(), entry.icon.clone())
    }
}

fn hourly_from(anchor: HourlyAnchor) -> Result<ItemArg, BuildError> {
    Ok(ItemArg::to(View::Hourly).with_data(anchor.encode()?))
}
