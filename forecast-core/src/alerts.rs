use crate::{
    anchor::DailyAction,
    error::BuildError,
    format::format_time,
    item::{Item, ItemArg, Mode, View},
    model::{Alert, Weather},
    view::ViewContext,
};

const ALERT_ICON: &str = "alert";

/// Adds rows for weather warnings to a view.
pub trait AlertInjector: Send + Sync {
    fn inject(
        &self,
        weather: &Weather,
        ctx: &ViewContext<'_>,
        items: &mut Vec<Item>,
    ) -> Result<(), BuildError>;
}

/// One row per alert that has not yet expired, in provider order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveAlerts;

impl AlertInjector for ActiveAlerts {
    fn inject(
        &self,
        weather: &Weather,
        ctx: &ViewContext<'_>,
        items: &mut Vec<Item>,
    ) -> Result<(), BuildError> {
        for alert in weather.alerts.iter().filter(|a| a.is_active(ctx.now)) {
            items.push(alert_item(alert, ctx)?);
        }
        Ok(())
    }
}

fn alert_item(alert: &Alert, ctx: &ViewContext<'_>) -> Result<Item, BuildError> {
    let subtitle = match (&alert.description, alert.expires) {
        (Some(description), _) => description.clone(),
        (None, Some(expires)) => format!("Until {}", format_time(expires, &ctx.display.time_format)),
        (None, None) => String::new(),
    };

    let mut item =
        Item::new(format!("⚠ {}", alert.title), subtitle).with_icon(ctx.icons.resolve(ALERT_ICON));

    if let Some(uri) = &alert.uri {
        let data = DailyAction::open(uri.clone()).encode()?;
        item = item.with_arg(ItemArg::to(View::Daily).with_mode(Mode::Do).with_data(data));
    }

    Ok(item)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoAlerts;

impl AlertInjector for NoAlerts {
    fn inject(&self, _: &Weather, _: &ViewContext<'_>, _: &mut Vec<Item>) -> Result<(), BuildError> {
        Ok(())
    }
}
