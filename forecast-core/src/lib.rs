//! Core library for the `forecast` launcher workflow.
//!
//! This crate defines:
//! - The forecast data model and the provider abstraction that supplies it
//! - The daily and hourly views that project a forecast into launcher items
//! - The payloads that carry a view's cursor through a follow-up action
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but the views are plain functions over a
//! forecast snapshot and can be driven by any other host.

pub mod alerts;
pub mod anchor;
pub mod config;
pub mod daily;
pub mod error;
pub mod format;
pub mod hourly;
pub mod icons;
pub mod item;
pub mod model;
pub mod provider;
pub mod view;

pub use alerts::{ActiveAlerts, AlertInjector, NoAlerts};
pub use anchor::{DailyAction, HourlyAnchor};
pub use config::{Config, DisplayConfig, ProviderConfig};
pub use daily::{build_daily, daily_items};
pub use error::{BuildError, ProviderError};
pub use format::{Units, WeekdayNames};
pub use hourly::{build_hourly, hourly_items};
pub use icons::{IconDir, IconResolver, NoIcons};
pub use item::{Item, ItemArg, ItemMod, Mode, Modifier, ScriptFilter, View};
pub use model::{Alert, ConditionEntry, DayEntry, HourEntry, Location, Temperature, Timestamp, Weather};
pub use provider::{ProviderId, WeatherProvider};
pub use view::ViewContext;
