//! Launcher items and the Alfred script-filter JSON they serialize to.

use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

/// Subtitle used for heading rows.
pub const LINE: &str = "──────────────────────────────────────────────";

/// The view a follow-up action re-invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Daily,
    Hourly,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Daily => "daily",
            View::Hourly => "hourly",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the target view should treat the payload: `Tell` lists items,
/// `Do` performs the view's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Tell,
    Do,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Cmd,
    Alt,
    Ctrl,
    Shift,
}

/// Follow-up action carried by an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemArg {
    pub keyword: View,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl ItemArg {
    pub fn to(keyword: View) -> Self {
        Self {
            keyword,
            mode: None,
            data: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Parse an arg string previously emitted in script-filter output.
    pub fn decode(arg: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(arg)
    }
}

/// Alternate action offered while a modifier key is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMod {
    pub subtitle: String,
    #[serde(serialize_with = "stringify_arg")]
    pub arg: ItemArg,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub title: String,
    pub subtitle: String,
    pub icon: Option<PathBuf>,
    pub arg: Option<ItemArg>,
    pub mods: BTreeMap<Modifier, ItemMod>,
}

impl Item {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }

    pub fn with_icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_arg(mut self, arg: ItemArg) -> Self {
        self.arg = Some(arg);
        self
    }

    pub fn add_mod(&mut self, modifier: Modifier, item_mod: ItemMod) {
        self.mods.insert(modifier, item_mod);
    }

    /// Items without an action are shown but cannot be actioned.
    pub fn is_valid(&self) -> bool {
        self.arg.is_some()
    }
}

#[derive(Serialize)]
struct IconRef<'a> {
    path: &'a PathBuf,
}

#[derive(Serialize)]
struct WireItem<'a> {
    title: &'a str,
    subtitle: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<IconRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arg: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mods: Option<&'a BTreeMap<Modifier, ItemMod>>,
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let arg = self
            .arg
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(S::Error::custom)?;

        WireItem {
            title: &self.title,
            subtitle: &self.subtitle,
            icon: self.icon.as_ref().map(|path| IconRef { path }),
            arg,
            valid: self.is_valid(),
            mods: (!self.mods.is_empty()).then_some(&self.mods),
        }
        .serialize(serializer)
    }
}

fn stringify_arg<S: Serializer>(arg: &ItemArg, serializer: S) -> Result<S::Ok, S::Error> {
    let encoded = serde_json::to_string(arg).map_err(S::Error::custom)?;
    serializer.serialize_str(&encoded)
}

/// Top-level script-filter document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

impl ScriptFilter {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
