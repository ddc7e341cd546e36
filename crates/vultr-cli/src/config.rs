//! Resolution of the API key and output mode.
//!
//! Precedence, highest first: command-line flag, `VULTR_API_KEY`
//! (API key only), the YAML config file, built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::CliError;
use crate::output::Format;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "VULTR_API_KEY";

/// Config file name looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".vultr-cli.yaml";

/// Process environment relevant to configuration, captured once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Value of `VULTR_API_KEY`, if set.
    pub api_key: Option<String>,
    /// Home directory of the current user.
    pub home: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            home: dirs::home_dir(),
        }
    }
}

/// Settings in effect for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// API key, empty when none was configured.
    pub api_key: String,
    /// Output mode.
    pub output: Format,
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Whether an API key is available.
    #[must_use]
    pub fn auth_present(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
    output: Option<String>,
}

/// Resolve settings from global flags, the environment and the config file.
///
/// # Errors
///
/// Returns [`CliError::Config`] when an explicitly named config file is
/// missing, when the config file is malformed, or when the output mode is
/// not one of `table`, `json`, `yaml`.
pub fn resolve(global: &GlobalArgs, env: &Environment) -> Result<Settings, CliError> {
    let (config_path, file) = match &global.config {
        Some(path) => (Some(path.clone()), load(path, true)?),
        None => match env.home.as_deref() {
            Some(home) => {
                let path = home.join(DEFAULT_CONFIG_FILE);
                let file = load(&path, false)?;
                (path.is_file().then_some(path), file)
            }
            None => (None, ConfigFile::default()),
        },
    };

    let api_key = first_non_empty([
        global.api_key.as_deref(),
        env.api_key.as_deref(),
        file.api_key.as_deref(),
    ])
    .unwrap_or_default();

    let output = match first_non_empty([global.output.as_deref(), file.output.as_deref()]) {
        Some(mode) => mode.parse()?,
        None => Format::default(),
    };

    debug!(
        config = ?config_path,
        %output,
        auth_present = !api_key.is_empty(),
        "Resolved settings"
    );

    Ok(Settings {
        api_key,
        output,
        config_path,
    })
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

fn load(path: &Path, explicit: bool) -> Result<ConfigFile, CliError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
            return Ok(ConfigFile::default());
        }
        Err(e) => {
            return Err(CliError::Config(format!(
                "unable to read config file {}: {e}",
                path.display()
            )));
        }
    };

    let malformed =
        |e: serde_yaml::Error| CliError::Config(format!("invalid config file {}: {e}", path.display()));

    let value: serde_yaml::Value = serde_yaml::from_str(&text).map_err(malformed)?;
    if value.is_null() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_value(value).map_err(malformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use test_case::test_case;

    fn home_with_config(contents: &str) -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), contents).expect("write config");
        dir
    }

    fn env_in(home: &TempDir, api_key: Option<&str>) -> Environment {
        Environment {
            api_key: api_key.map(str::to_string),
            home: Some(home.path().to_path_buf()),
        }
    }

    #[test_case(Some("flag"), Some("env"), "flag" ; "flag wins")]
    #[test_case(None, Some("env"), "env" ; "env beats file")]
    #[test_case(None, None, "file" ; "file is last resort")]
    #[test_case(None, Some(""), "file" ; "empty env is unset")]
    fn api_key_precedence(flag: Option<&str>, env_key: Option<&str>, expected: &str) {
        let home = home_with_config("api-key: file\n");
        let global = GlobalArgs {
            api_key: flag.map(str::to_string),
            ..GlobalArgs::default()
        };
        let settings = resolve(&global, &env_in(&home, env_key)).expect("resolves");
        assert_eq!(settings.api_key, expected);
        assert!(settings.auth_present());
    }

    #[test]
    fn output_flag_overrides_file() {
        let home = home_with_config("output: yaml\n");
        let global = GlobalArgs {
            output: Some("json".into()),
            ..GlobalArgs::default()
        };
        let settings = resolve(&global, &env_in(&home, None)).expect("resolves");
        assert_eq!(settings.output, Format::Json);
    }

    #[test]
    fn output_from_file() {
        let home = home_with_config("output: yaml\nunrelated: true\n");
        let settings = resolve(&GlobalArgs::default(), &env_in(&home, None)).expect("resolves");
        assert_eq!(settings.output, Format::Yaml);
        assert_eq!(
            settings.config_path,
            Some(home.path().join(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let home = TempDir::new().expect("tempdir");
        let settings = resolve(&GlobalArgs::default(), &env_in(&home, None)).expect("resolves");
        assert_eq!(settings, Settings::default());
        assert!(!settings.auth_present());
    }

    #[test]
    fn empty_file_has_no_keys() {
        let home = home_with_config("");
        let settings = resolve(&GlobalArgs::default(), &env_in(&home, None)).expect("resolves");
        assert_eq!(settings.output, Format::Table);
        assert!(settings.api_key.is_empty());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let home = TempDir::new().expect("tempdir");
        let global = GlobalArgs {
            config: Some(home.path().join("nope.yaml")),
            ..GlobalArgs::default()
        };
        let err = resolve(&global, &env_in(&home, None)).expect_err("missing file");
        assert!(matches!(err, CliError::Config(msg) if msg.contains("nope.yaml")));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let home = home_with_config("api-key: [unterminated\n");
        let err = resolve(&GlobalArgs::default(), &env_in(&home, None)).expect_err("malformed");
        assert!(matches!(err, CliError::Config(msg) if msg.contains("invalid config file")));
    }

    #[test]
    fn unknown_output_mode_is_an_error() {
        let home = home_with_config("output: xml\n");
        let err = resolve(&GlobalArgs::default(), &env_in(&home, None)).expect_err("bad mode");
        assert!(err.to_string().contains("xml"));
    }
}
