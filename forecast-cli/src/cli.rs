use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use forecast_core::{
    ActiveAlerts, Config, DailyAction, IconDir, IconResolver, ItemArg, Mode, NoIcons, ProviderId,
    ScriptFilter, Units, View, ViewContext, WeekdayNames, build_daily, build_hourly,
    provider::default_provider_from_config,
};
use inquire::{Select, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Daily and hourly forecasts as launcher script-filter items"
)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true, env = "FORECAST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a forecast for the next few days.
    Daily {
        /// Location to look up.
        query: Vec<String>,

        /// `tell` lists items, `do` opens the forecast page carried in --data.
        #[arg(long, value_parser = parse_mode, default_value = "tell")]
        mode: Mode,

        /// Payload handed back from a previously listed item.
        #[arg(long)]
        data: Option<String>,
    },

    /// List a forecast hour by hour.
    Hourly {
        /// Location to look up.
        query: Vec<String>,

        /// Anchor payload handed back from a daily item.
        #[arg(long)]
        data: Option<String>,
    },

    /// Run the action of a previously listed item.
    Do {
        /// The item's `arg` string.
        arg: String,

        /// Location to look up.
        query: Vec<String>,
    },

    /// Update the configuration file. Prompts when no option is given.
    Configure(ConfigureArgs),
}

#[derive(Debug, Default, Args)]
pub struct ConfigureArgs {
    /// imperial or metric.
    #[arg(long, value_parser = parse_units)]
    pub units: Option<Units>,

    /// chrono strftime string used for hourly times.
    #[arg(long)]
    pub time_format: Option<String>,

    /// chinese or english.
    #[arg(long, value_parser = parse_weekday_names)]
    pub weekday_names: Option<WeekdayNames>,

    /// Directory of `<icon-code>.png` files.
    #[arg(long)]
    pub icon_dir: Option<PathBuf>,

    /// Forecast snapshot file to read forecasts from.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl ConfigureArgs {
    fn is_empty(&self) -> bool {
        self.units.is_none()
            && self.time_format.is_none()
            && self.weekday_names.is_none()
            && self.icon_dir.is_none()
            && self.snapshot.is_none()
    }

    fn apply(self, cfg: &mut Config) -> anyhow::Result<()> {
        if let Some(units) = self.units {
            cfg.units = units;
        }
        if let Some(format) = self.time_format {
            cfg.set_time_format(&format)?;
        }
        if let Some(names) = self.weekday_names {
            cfg.weekday_names = names;
        }
        if let Some(dir) = self.icon_dir {
            cfg.icon_dir = Some(dir);
        }
        if let Some(path) = self.snapshot {
            cfg.upsert_provider_source(ProviderId::Snapshot, path.display().to_string());
            cfg.set_default_provider(ProviderId::Snapshot);
        }
        Ok(())
    }
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    match s.to_lowercase().as_str() {
        "tell" => Ok(Mode::Tell),
        "do" => Ok(Mode::Do),
        _ => Err(format!("Unknown mode '{s}'. Supported modes: tell, do.")),
    }
}

fn parse_units(s: &str) -> Result<Units, String> {
    Units::try_from(s).map_err(|e| e.to_string())
}

fn parse_weekday_names(s: &str) -> Result<WeekdayNames, String> {
    WeekdayNames::try_from(s).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Configure(args) => configure(&config_path, args),
            Command::Daily { query, mode, data } => {
                dispatch(&config_path, View::Daily, mode, &query.join(" "), data.as_deref()).await
            }
            Command::Hourly { query, data } => {
                dispatch(&config_path, View::Hourly, Mode::Tell, &query.join(" "), data.as_deref())
                    .await
            }
            Command::Do { arg, query } => {
                let arg = ItemArg::decode(&arg).context("Unreadable item arg")?;
                tracing::debug!(keyword = %arg.keyword, mode = ?arg.mode, "running item action");
                dispatch(
                    &config_path,
                    arg.keyword,
                    arg.mode.unwrap_or_default(),
                    &query.join(" "),
                    arg.data.as_deref(),
                )
                .await
            }
        }
    }
}

async fn dispatch(
    config_path: &Path,
    view: View,
    mode: Mode,
    query: &str,
    data: Option<&str>,
) -> anyhow::Result<()> {
    match (view, mode) {
        (View::Daily, Mode::Do) => open_forecast(data),
        _ => {
            let config = Config::load_from(config_path)?;
            list(&config, view, query, data).await
        }
    }
}

async fn list(config: &Config, view: View, query: &str, data: Option<&str>) -> anyhow::Result<()> {
    if !config.is_service_ready() {
        bail!(
            "No forecast service configured.\n\
             Hint: run `forecast configure --snapshot <path>` first."
        );
    }

    let provider = default_provider_from_config(config)?;
    let display = config.display();
    let icons: Box<dyn IconResolver> = match &config.icon_dir {
        Some(dir) => Box::new(IconDir::new(dir)),
        None => Box::new(NoIcons),
    };
    let ctx = ViewContext::new(&display, icons.as_ref(), &ActiveAlerts, Local::now().fixed_offset());

    let items = match view {
        View::Daily => build_daily(provider.as_ref(), &ctx, query).await?,
        View::Hourly => build_hourly(provider.as_ref(), &ctx, query, data).await?,
    };

    println!("{}", ScriptFilter::new(items).to_json()?);
    Ok(())
}

fn open_forecast(data: Option<&str>) -> anyhow::Result<()> {
    let Some(url) = DailyAction::from_payload(data).to_open else {
        tracing::warn!("daily action without a page to open");
        return Ok(());
    };

    tracing::info!(url, "opening forecast in browser");
    webbrowser::open(&url).with_context(|| format!("Failed to open {url} in a browser"))?;
    Ok(())
}

fn configure(path: &Path, args: ConfigureArgs) -> anyhow::Result<()> {
    let mut cfg = Config::load_from(path)?;

    if args.is_empty() {
        prompt(&mut cfg)?;
    } else {
        args.apply(&mut cfg)?;
    }

    cfg.save_to(path)?;
    eprintln!("Saved configuration to {}", path.display());
    Ok(())
}

fn prompt(cfg: &mut Config) -> anyhow::Result<()> {
    cfg.units = Select::new("Units:", Units::all().to_vec()).prompt()?;

    let format = Text::new("Time format:")
        .with_default(&cfg.time_format)
        .with_help_message("chrono strftime, e.g. %-I:%M %p or %H:%M")
        .prompt()?;
    cfg.set_time_format(&format)?;

    cfg.weekday_names = Select::new("Weekday names:", WeekdayNames::all().to_vec()).prompt()?;

    let current = cfg.provider_source(ProviderId::Snapshot).unwrap_or_default().to_string();
    let source = Text::new("Forecast snapshot file:").with_default(&current).prompt()?;
    if !source.trim().is_empty() {
        cfg.upsert_provider_source(ProviderId::Snapshot, source.trim().to_string());
        cfg.set_default_provider(ProviderId::Snapshot);
    }

    Ok(())
}
