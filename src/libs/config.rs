//! Application configuration.
//!
//! Settings live in `config.json` in the data directory and are entirely
//! optional: a missing file means defaults everywhere. `shiftbook init`
//! runs [`Config::init`], a wizard that lets the user pick which sections to
//! set up.
//!
//! ```json
//! {
//!   "shift": { "start": "08:00", "end": "17:00", "break_minutes": 60, "shift_type": "Work" },
//!   "export": { "title": "Timesheet", "format": "excel" }
//! }
//! ```

use super::data_storage::DataStorage;
use super::export::{ExportFormat, DEFAULT_TITLE};
use super::messages::Message;
use super::shift::ShiftType;
use super::time::parse_time;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Values pre-filled when adding a shift.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShiftDefaults {
    pub start: String,
    pub end: String,
    pub break_minutes: u32,
    #[serde(default)]
    pub shift_type: ShiftType,
}

impl Default for ShiftDefaults {
    fn default() -> Self {
        Self {
            start: "08:00".to_string(),
            end: "17:00".to_string(),
            break_minutes: 60,
            shift_type: ShiftType::Work,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    pub title: String,
    #[serde(default)]
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            format: ExportFormat::Excel,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftDefaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Loads `config.json`, or the defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns whether there was one.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn shift_defaults(&self) -> ShiftDefaults {
        self.shift.clone().unwrap_or_default()
    }

    pub fn export_config(&self) -> ExportConfig {
        self.export.clone().unwrap_or_default()
    }

    /// Interactive setup, starting from the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "shift".to_string(),
                name: "Shift defaults".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "shift" => {
                    msg_print!(Message::ConfigModuleShift);
                    config.shift = Some(init_shift_defaults(&config.shift_defaults())?);
                }
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    config.export = Some(init_export(&config.export_config())?);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn init_shift_defaults(default: &ShiftDefaults) -> Result<ShiftDefaults> {
    let start = prompt_time(Message::PromptShiftStart, &default.start)?;
    let end = prompt_time(Message::PromptShiftEnd, &default.end)?;
    let break_minutes: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptBreakMinutes.to_string())
        .default(default.break_minutes)
        .interact_text()?;

    let types = [ShiftType::Work, ShiftType::Ot, ShiftType::Leave, ShiftType::Other];
    let current = types.iter().position(|t| *t == default.shift_type).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptShiftType.to_string())
        .items(&types.iter().map(ShiftType::label).collect::<Vec<_>>())
        .default(current)
        .interact()?;

    Ok(ShiftDefaults {
        start,
        end,
        break_minutes,
        shift_type: types[selection],
    })
}

fn init_export(default: &ExportConfig) -> Result<ExportConfig> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExportTitle.to_string())
        .default(default.title.clone())
        .interact_text()?;

    let formats = [ExportFormat::Excel, ExportFormat::Csv, ExportFormat::Json];
    let current = formats.iter().position(|f| *f == default.format).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExportFormat.to_string())
        .items(&formats.iter().map(ExportFormat::extension).collect::<Vec<_>>())
        .default(current)
        .interact()?;

    Ok(ExportConfig {
        title,
        format: formats[selection],
    })
}

fn prompt_time(prompt: Message, default: &str) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|input: &String| -> Result<(), String> { parse_time(input).map(|_| ()).map_err(|e| e.to_string()) })
        .interact_text()?;
    Ok(value.trim().to_string())
}
