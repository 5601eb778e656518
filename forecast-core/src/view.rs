use crate::{
    alerts::AlertInjector, config::DisplayConfig, icons::IconResolver, model::Timestamp,
};

/// Everything a view needs besides the forecast itself. Builders read the
/// clock and the settings only through this value.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub display: &'a DisplayConfig,
    pub icons: &'a dyn IconResolver,
    pub alerts: &'a dyn AlertInjector,
    pub now: Timestamp,
}

impl<'a> ViewContext<'a> {
    pub fn new(
        display: &'a DisplayConfig,
        icons: &'a dyn IconResolver,
        alerts: &'a dyn AlertInjector,
        now: Timestamp,
    ) -> Self {
        Self {
            display,
            icons,
            alerts,
            now,
        }
    }
}
