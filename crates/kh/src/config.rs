//! Saved generator configuration.
//!
//! The configuration is a [`PasswordGeneratorRequest`] stored as JSON in the
//! per-user config directory (`~/.config/keyhaven/config.json` on Unix,
//! `%APPDATA%\keyhaven\config.json` on Windows). A missing file means the
//! built-in defaults; an invalid configuration is never written.

use std::{fs, path::PathBuf};

use clap::{Args, Subcommand};
use keyhaven_generators::{GenerationPolicy, PasswordGeneratorRequest};
use thiserror::Error;
use tracing::debug;

use crate::render::{CommandOutput, CommandResult};

/// Errors that can occur while reading or writing the saved configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config directory not found (HOME or APPDATA not set).
    #[error("Config directory not found (HOME or APPDATA environment variable not set)")]
    ConfigDirNotFound,

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The saved configuration could not be parsed.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(target_os = "windows")]
    let base = std::env::var_os("APPDATA").map(PathBuf::from);
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"));

    base.map(|dir| dir.join("keyhaven"))
        .ok_or(ConfigError::ConfigDirNotFound)
}

fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the saved request; a missing file means the built-in defaults.
pub fn load() -> Result<PasswordGeneratorRequest, ConfigError> {
    let path = config_file()?;
    if !path.exists() {
        debug!(path = %path.display(), "no saved config, using defaults");
        return Ok(PasswordGeneratorRequest::default());
    }

    let contents = fs::read_to_string(&path)?;
    let request = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), "loaded saved config");
    Ok(request)
}

/// Like [`load`], but an unresolvable config directory also means defaults,
/// so generation works in stripped-down environments.
pub fn load_or_default() -> Result<PasswordGeneratorRequest, ConfigError> {
    match load() {
        Err(ConfigError::ConfigDirNotFound) => Ok(PasswordGeneratorRequest::default()),
        other => other,
    }
}

fn save(request: &PasswordGeneratorRequest) -> Result<PathBuf, ConfigError> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;

    let path = dir.join("config.json");
    let mut contents = serde_json::to_string_pretty(request)?;
    contents.push('\n');
    fs::write(&path, contents)?;
    debug!(path = %path.display(), "saved config");
    Ok(path)
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,

    /// Change and persist configuration values.
    Set(SetArgs),

    /// Print the config file location.
    Path,
}

#[derive(Args, Clone)]
pub struct SetArgs {
    #[arg(long, help = "Password length (8-64).")]
    pub length: Option<u8>,

    #[arg(long, help = "Passwords per run (1-100).")]
    pub count: Option<u8>,

    #[arg(long, help = "Include lowercase characters (a-z).")]
    pub lowercase: Option<bool>,

    #[arg(long, help = "Include uppercase characters (A-Z).")]
    pub uppercase: Option<bool>,

    #[arg(long, help = "Include digits (0-9).")]
    pub digits: Option<bool>,

    #[arg(long, help = "Include symbols (!@#$%...).")]
    pub symbols: Option<bool>,

    #[arg(long, help = "Exclude ambiguous characters (I, l, 1, O, 0).")]
    pub avoid_ambiguous: Option<bool>,
}

impl ConfigCommand {
    pub fn run(self) -> CommandResult {
        match self {
            ConfigCommand::Show => {
                let request = load_or_default()?;
                Ok(CommandOutput::Object(serde_json::to_value(&request)?))
            }

            ConfigCommand::Set(args) => {
                let mut request = load_or_default()?;
                args.apply(&mut request);

                // Never persist a configuration that fails validation.
                GenerationPolicy::try_from(request.clone())?;

                let path = save(&request)?;
                Ok(format!("Saved to {}", path.display()).into())
            }

            ConfigCommand::Path => Ok(config_file()?.display().to_string().into()),
        }
    }
}

impl SetArgs {
    fn apply(&self, request: &mut PasswordGeneratorRequest) {
        if let Some(length) = self.length {
            request.length = length;
        }
        if let Some(count) = self.count {
            request.count = count;
        }
        if let Some(lowercase) = self.lowercase {
            request.lowercase = lowercase;
        }
        if let Some(uppercase) = self.uppercase {
            request.uppercase = uppercase;
        }
        if let Some(digits) = self.digits {
            request.digits = digits;
        }
        if let Some(symbols) = self.symbols {
            request.symbols = symbols;
        }
        if let Some(avoid_ambiguous) = self.avoid_ambiguous {
            request.avoid_ambiguous = avoid_ambiguous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_the_provided_values() {
        let args = SetArgs {
            length: Some(24),
            count: None,
            lowercase: None,
            uppercase: Some(false),
            digits: None,
            symbols: None,
            avoid_ambiguous: Some(true),
        };

        let mut request = PasswordGeneratorRequest::default();
        args.apply(&mut request);

        assert_eq!(request.length, 24);
        assert_eq!(request.count, 1);
        assert!(request.lowercase);
        assert!(!request.uppercase);
        assert!(request.avoid_ambiguous);
    }
}
