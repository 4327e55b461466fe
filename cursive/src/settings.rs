/*  Passmith - a password generator with selectable character classes
    Copyright (C) 2024  The Passmith Developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;

/// Frontend preferences, read once at startup from an optional settings
/// file.  Missing or malformed files fall back to the defaults, the form
/// itself never depends on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long a copied password stays in the clipboard before it is
    /// cleared again.
    pub clipboard_clear_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clipboard_clear_seconds: 40,
        }
    }
}

/// The settings file lives in `$HOME/.config/passmith/settings.toml`, the
/// PASSMITH_CONFIG environment variable overrides the location.
pub fn settings_file_location() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("PASSMITH_CONFIG") {
        return Some(PathBuf::from(path));
    }

    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("passmith")
            .join("settings.toml")
    })
}

fn read_config(path: PathBuf) -> Result<config::Config, config::ConfigError> {
    let mut settings = config::Config::default();
    settings.merge(config::File::from(path).required(false))?;
    Ok(settings)
}

pub fn read(path: Option<PathBuf>) -> Settings {
    let defaults = Settings::default();

    let path = match path {
        Some(path) => path,
        None => return defaults,
    };

    let config = match read_config(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("malformed settings file, falling back to defaults: {err}");
            return defaults;
        }
    };

    let clipboard_clear_seconds = match config.get_int("clipboard_clear_seconds") {
        Ok(seconds) if seconds > 0 => seconds as u64,
        _ => defaults.clipboard_clear_seconds,
    };

    Settings {
        clipboard_clear_seconds,
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings;
