use crate::{directories::Directories, util};
use raiseexplorer_core::{hotkey::Hotkey, restack::*};
use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct HotkeySettings {
    hotkey: String,
}

impl Default for HotkeySettings {
    fn default() -> Self {
        Self {
            hotkey: String::from("ctrl+shift+e"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RaiseSettings {
    settle_delay_ms: u64,
    exit_on_foreground_failure: bool,
    filter_by_virtual_desktop: bool,
}

impl Default for RaiseSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            exit_on_foreground_failure: true,
            filter_by_virtual_desktop: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MiscSettings {
    show_tray_icon: bool,
    log_level: String,
}

impl Default for MiscSettings {
    fn default() -> Self {
        Self {
            show_tray_icon: true,
            log_level: String::from("info"),
        }
    }
}

/// The shape of `settings.json`.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UserSettings {
    hotkey_settings: HotkeySettings,
    raise_settings: RaiseSettings,
    misc_settings: MiscSettings,
}

impl UserSettings {
    pub fn to_settings(&self, warnings: &mut String) -> Settings {
        let hotkey = match self.hotkey_settings.hotkey.parse::<Hotkey>() {
            Ok(val) => val,
            Err(e) => {
                let default = Hotkey::default();
                util::add_to_message(
                    warnings,
                    &format!(
                        "Warning: Invalid hotkey \"{}\": {}\nProceeding with {}",
                        self.hotkey_settings.hotkey, e, default
                    ),
                );
                default
            }
        };
        let failure_policy = if self.raise_settings.exit_on_foreground_failure {
            FailurePolicy::Exit
        } else {
            FailurePolicy::Continue
        };
        let log_level = match self.misc_settings.log_level.parse::<log::LevelFilter>() {
            Ok(_) => self.misc_settings.log_level.clone(),
            Err(_) => {
                let default = MiscSettings::default().log_level;
                util::add_to_message(
                    warnings,
                    &format!(
                        "Warning: Invalid log level \"{}\"\nProceeding with {}",
                        self.misc_settings.log_level, default
                    ),
                );
                default
            }
        };
        return Settings {
            hotkey,
            restack_options: RestackOptions {
                settle_delay: Duration::from_millis(self.raise_settings.settle_delay_ms),
                failure_policy,
            },
            filter_by_virtual_desktop: self.raise_settings.filter_by_virtual_desktop,
            show_tray_icon: self.misc_settings.show_tray_icon,
            log_level,
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub hotkey: Hotkey,
    pub restack_options: RestackOptions,
    pub filter_by_virtual_desktop: bool,
    pub show_tray_icon: bool,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        UserSettings::default().to_settings(&mut String::new())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads `path`, or writes the defaults there if it does not exist yet.
pub fn get_from_file<T>(path: &Path) -> Result<T, SettingsError>
where
    for<'a> T: Default + Deserialize<'a> + Serialize,
{
    match std::fs::read(path) {
        Ok(byte_vector) => {
            return serde_json::from_slice::<T>(byte_vector.as_slice()).map_err(|source| {
                SettingsError::Parse {
                    path: path.to_owned(),
                    source,
                }
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let io_error = |source: std::io::Error| SettingsError::Io {
                path: path.to_owned(),
                source,
            };
            let file = std::fs::File::create_new(path).map_err(io_error)?;
            let default_user_config = T::default();
            serde_json::to_writer_pretty(&file, &default_user_config)
                .map_err(|e| io_error(e.into()))?;
            return Ok(default_user_config);
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_owned(),
                source,
            });
        }
    }
}

pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: String,
}

pub fn get_settings(dirs: Option<&Directories>) -> LoadedSettings {
    let mut warnings = String::new();
    let user_settings = match dirs {
        Some(dirs) => match get_from_file::<UserSettings>(&dirs.settings_file) {
            Ok(val) => val,
            Err(e) => {
                util::add_to_message(
                    &mut warnings,
                    &format!("Warning: {}\nProceeding with default settings", e),
                );
                UserSettings::default()
            }
        },
        None => {
            util::add_to_message(
                &mut warnings,
                "Warning: No configuration directory found\nProceeding with default settings",
            );
            UserSettings::default()
        }
    };
    let settings = user_settings.to_settings(&mut warnings);
    return LoadedSettings { settings, warnings };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_behaviour() {
        let settings = Settings::default();
        assert_eq!(settings.hotkey, Hotkey::default());
        assert_eq!(settings.restack_options, RestackOptions::default());
        assert!(settings.filter_by_virtual_desktop);
        assert!(settings.show_tray_icon);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn deserialize_full_settings() {
        let json = r#"{
            "hotkey_settings": { "hotkey": "win+alt+f9" },
            "raise_settings": {
                "settle_delay_ms": 40,
                "exit_on_foreground_failure": false,
                "filter_by_virtual_desktop": false
            },
            "misc_settings": { "show_tray_icon": false, "log_level": "debug" }
        }"#;
        let user_settings: UserSettings = serde_json::from_str(json).unwrap();
        let mut warnings = String::new();
        let settings = user_settings.to_settings(&mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(settings.hotkey.to_string(), "Alt+Win+F9");
        assert_eq!(settings.restack_options.settle_delay, Duration::from_millis(40));
        assert_eq!(
            settings.restack_options.failure_policy,
            FailurePolicy::Continue
        );
        assert!(!settings.filter_by_virtual_desktop);
        assert!(!settings.show_tray_icon);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn deserialize_partial_uses_defaults() {
        let json = r#"{ "raise_settings": { "settle_delay_ms": 0 } }"#;
        let user_settings: UserSettings = serde_json::from_str(json).unwrap();
        let settings = user_settings.to_settings(&mut String::new());
        assert_eq!(settings.restack_options.settle_delay, Duration::ZERO);
        assert_eq!(settings.restack_options.failure_policy, FailurePolicy::Exit);
        assert_eq!(settings.hotkey, Hotkey::default());
    }

    #[test]
    fn invalid_hotkey_warns_and_falls_back() {
        let json = r#"{ "hotkey_settings": { "hotkey": "e" } }"#;
        let user_settings: UserSettings = serde_json::from_str(json).unwrap();
        let mut warnings = String::new();
        let settings = user_settings.to_settings(&mut warnings);
        assert_eq!(settings.hotkey, Hotkey::default());
        assert!(warnings.contains("Invalid hotkey \"e\""));
        assert!(warnings.contains("Ctrl+Shift+E"));
    }

    #[test]
    fn invalid_log_level_warns_and_falls_back() {
        let json = r#"{ "misc_settings": { "log_level": "verbose" } }"#;
        let user_settings: UserSettings = serde_json::from_str(json).unwrap();
        let mut warnings = String::new();
        let settings = user_settings.to_settings(&mut warnings);
        assert_eq!(settings.log_level, "info");
        assert!(warnings.contains("Invalid log level \"verbose\""));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let json = r#"{ "misc_settings": { "log_level": "WARN" } }"#;
        let user_settings: UserSettings = serde_json::from_str(json).unwrap();
        let mut warnings = String::new();
        let settings = user_settings.to_settings(&mut warnings);
        assert!(warnings.is_empty());
        assert_eq!(settings.log_level, "WARN");
    }

    #[test]
    fn unknown_keys_ignored() {
        let json = r#"{ "future_section": { "key": 42 } }"#;
        let _user_settings: UserSettings = serde_json::from_str(json).unwrap();
    }
}
