//! Command implementations for the xfergen CLI.
//!
//! Each function here takes the raw flag values from clap plus the loaded
//! defaults, merges them (flag wins, then config, then absent), hands the
//! result to the matching builder, and wraps the outcome in a type the main
//! binary can print in either output format.

use serde::Serialize;

use crate::builder::{
    self, FtpFields, SimpleHttpFields, TftpFields, UpdogFields,
};
use crate::config::{self, Defaults};
use crate::reference::{self, ServerKind};
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// A successfully generated launch command.
#[derive(Debug, Serialize)]
pub struct GeneratedCommand {
    pub server: &'static str,
    pub command: String,
}

impl Output for GeneratedCommand {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        self.command.clone()
    }
}

/// Merge a CLI flag with a config default into a raw builder field.
fn merge(flag: Option<String>, default: &Option<String>) -> String {
    flag.or_else(|| default.clone()).unwrap_or_default()
}

/// Generate an updog command from flags merged with defaults.
pub fn updog(
    directory: Option<String>,
    port: Option<String>,
    password: Option<String>,
    ssl: bool,
    defaults: &Defaults,
) -> Result<GeneratedCommand> {
    let d = &defaults.updog;
    let fields = UpdogFields {
        directory: merge(directory, &d.directory),
        port: merge(port, &d.port),
        password: merge(password, &d.password),
        // The flag can only turn SSL on; a config default of true stands
        // unless the file is edited.
        ssl: ssl || d.ssl.unwrap_or(false),
    };
    let command = builder::build_updog(&fields)?;
    Ok(GeneratedCommand {
        server: ServerKind::Updog.as_str(),
        command,
    })
}

/// Generate a SimpleHTTPServer command from flags merged with defaults.
pub fn simple_http(port: Option<String>, defaults: &Defaults) -> Result<GeneratedCommand> {
    let fields = SimpleHttpFields {
        port: merge(port, &defaults.simple_http.port),
    };
    let command = builder::build_simple_http(&fields)?;
    Ok(GeneratedCommand {
        server: ServerKind::SimpleHttp.as_str(),
        command,
    })
}

/// Generate a Twisted FTP command from flags merged with defaults.
pub fn ftp(
    root: Option<String>,
    port: Option<String>,
    defaults: &Defaults,
) -> Result<GeneratedCommand> {
    let d = &defaults.ftp;
    let fields = FtpFields {
        root: merge(root, &d.root),
        port: merge(port, &d.port),
    };
    let command = builder::build_ftp(&fields)?;
    Ok(GeneratedCommand {
        server: ServerKind::Ftp.as_str(),
        command,
    })
}

/// Generate an ATFTPD command from flags merged with defaults.
pub fn tftp(
    directory: Option<String>,
    port: Option<String>,
    defaults: &Defaults,
) -> Result<GeneratedCommand> {
    let d = &defaults.tftp;
    let fields = TftpFields {
        directory: merge(directory, &d.directory),
        port: merge(port, &d.port),
    };
    let command = builder::build_tftp(&fields)?;
    Ok(GeneratedCommand {
        server: ServerKind::Tftp.as_str(),
        command,
    })
}

/// One reference block.
#[derive(Debug, Serialize)]
pub struct ReferenceBlock {
    pub server: &'static str,
    pub title: &'static str,
    pub examples: &'static str,
}

impl ReferenceBlock {
    fn for_kind(kind: ServerKind) -> Self {
        Self {
            server: kind.as_str(),
            title: kind.title(),
            examples: reference::client_examples(kind),
        }
    }
}

/// Reference blocks for one or all server kinds.
#[derive(Debug, Serialize)]
pub struct ReferenceResult {
    pub blocks: Vec<ReferenceBlock>,
}

impl Output for ReferenceResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            out.push_str(block.title);
            out.push('\n');
            out.push_str(block.examples);
        }
        out
    }
}

/// Look up client-side reference text.
pub fn reference(server: Option<String>) -> Result<ReferenceResult> {
    let blocks = match server {
        Some(name) => {
            let kind = ServerKind::parse(&name).ok_or(Error::UnknownServer(name))?;
            vec![ReferenceBlock::for_kind(kind)]
        }
        None => ServerKind::ALL.iter().map(|&k| ReferenceBlock::for_kind(k)).collect(),
    };
    Ok(ReferenceResult { blocks })
}

/// Location of the defaults file.
#[derive(Debug, Serialize)]
pub struct ConfigPathResult {
    pub path: Option<String>,
    pub exists: bool,
}

impl Output for ConfigPathResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        match &self.path {
            Some(path) if self.exists => path.clone(),
            Some(path) => format!("{} (not present)", path),
            None => "no config directory available".to_string(),
        }
    }
}

/// Resolve the defaults file location.
pub fn config_path() -> ConfigPathResult {
    let path = config::config_path();
    let exists = path.as_deref().is_some_and(|p| p.exists());
    ConfigPathResult {
        path: path.map(|p| p.display().to_string()),
        exists,
    }
}

/// The loaded defaults, echoed back.
#[derive(Debug, Serialize)]
pub struct ConfigShowResult {
    pub path: Option<String>,
    pub defaults: Defaults,
}

impl Output for ConfigShowResult {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let rendered = toml::to_string_pretty(&self.defaults)
            .unwrap_or_else(|_| String::new());
        if rendered.is_empty() {
            "no defaults set".to_string()
        } else {
            rendered
        }
    }
}

/// Load and echo the defaults file.
pub fn config_show() -> Result<ConfigShowResult> {
    let defaults = config::load()?;
    Ok(ConfigShowResult {
        path: config::config_path().map(|p| p.display().to_string()),
        defaults,
    })
}

/// Overview shown when `xg` runs with no subcommand.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub servers: Vec<&'static str>,
    pub hint: &'static str,
}

impl Output for Overview {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let mut out = String::from("Xfergen - file transfer server command generator\n\nServers:\n");
        for kind in ServerKind::ALL {
            out.push_str(&format!("  {:12} {}\n", kind.as_str(), kind.title()));
        }
        out.push_str("\nRun `xg <server> --help` for the fields each one takes.");
        out
    }
}

/// Build the no-subcommand overview.
pub fn overview() -> Overview {
    Overview {
        servers: ServerKind::ALL.iter().map(|k| k.as_str()).collect(),
        hint: "run `xg <server> --help` for fields",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Defaults, FtpDefaults, UpdogDefaults};

    #[test]
    fn flag_wins_over_config_default() {
        let defaults = Defaults {
            updog: UpdogDefaults {
                port: Some("8080".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = updog(None, Some("9090".to_string()), None, false, &defaults).unwrap();
        assert_eq!(result.command, "updog -p 9090");
    }

    #[test]
    fn config_default_fills_missing_flag() {
        let defaults = Defaults {
            ftp: FtpDefaults {
                root: Some("/srv/ftp".to_string()),
                port: Some("21".to_string()),
            },
            ..Default::default()
        };
        let result = ftp(None, None, &defaults).unwrap();
        assert_eq!(result.command, r#"twistd -n ftp -p 21 --root "/srv/ftp""#);
    }

    #[test]
    fn missing_required_field_survives_merge() {
        let result = ftp(None, Some("21".to_string()), &Defaults::default());
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn ssl_flag_or_config_enables_flag() {
        let defaults = Defaults {
            updog: UpdogDefaults {
                ssl: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = updog(None, None, None, false, &defaults).unwrap();
        assert_eq!(result.command, "updog --ssl");
    }

    #[test]
    fn reference_rejects_unknown_server() {
        assert!(matches!(
            reference(Some("gopher".to_string())),
            Err(Error::UnknownServer(_))
        ));
    }

    #[test]
    fn reference_lists_all_kinds_when_unfiltered() {
        let result = reference(None).unwrap();
        assert_eq!(result.blocks.len(), 4);
    }
}
