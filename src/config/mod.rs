//! Defaults file handling.
//!
//! The original workflow prefills every form field with a sensible default
//! (current directory, port 8080, `/tftp`, ...). The CLI equivalent is a
//! read-only TOML file supplying per-server default field values for flags
//! the user did not pass:
//!
//! ```toml
//! output-format = "human"
//!
//! [updog]
//! directory = "/srv/files"
//! port = "8080"
//!
//! [ftp]
//! root = "/srv/ftp"
//! port = "21"
//! ```
//!
//! Located at `~/.config/xfergen/config.toml` (platform equivalent via
//! `dirs`), overridable with the `XG_CONFIG_DIR` environment variable.
//! Precedence per field: CLI flag > config default > absent. The tool never
//! writes this file.
//!
//! Defaults flow into the builders as raw strings and go through the same
//! validation as typed input, so a bad default fails the same way a bad flag
//! does.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable overriding the config directory (test isolation,
/// portable installs).
pub const CONFIG_DIR_ENV: &str = "XG_CONFIG_DIR";

/// Name of the defaults file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Output format preference for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output (default, machine-readable)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "human" => Some(OutputFormat::Human),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default field values for the updog builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UpdogDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
}

/// Default field values for the SimpleHTTPServer builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SimpleHttpDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

/// Default field values for the FTP builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FtpDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

/// Default field values for the TFTP builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TftpDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

/// The full defaults file.
///
/// Every field is optional; an empty file and a missing file behave
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Defaults {
    /// Default output format for CLI commands (`-H` still wins).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    #[serde(default)]
    pub updog: UpdogDefaults,

    #[serde(default, rename = "simple-http")]
    pub simple_http: SimpleHttpDefaults,

    #[serde(default)]
    pub ftp: FtpDefaults,

    #[serde(default)]
    pub tftp: TftpDefaults,
}

impl Defaults {
    /// Parse a defaults file from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Resolve the config directory: `XG_CONFIG_DIR` > platform config dir.
///
/// Returns `None` when neither is available (headless environments with no
/// home directory); the tool then runs with empty defaults.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|d| d.join("xfergen"))
}

/// Path of the defaults file, whether or not it exists.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Load the defaults file.
///
/// A missing file (or unresolvable config directory) yields empty defaults;
/// an unreadable or malformed file is an error the user should see.
pub fn load() -> Result<Defaults> {
    let Some(path) = config_path() else {
        return Ok(Defaults::default());
    };
    if !path.exists() {
        return Ok(Defaults::default());
    }
    let text = std::fs::read_to_string(&path)?;
    Defaults::from_toml(&text)
}
