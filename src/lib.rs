//! Xfergen - launch-command generation for ad-hoc file transfer servers.
//!
//! This library provides the core functionality for the `xg` CLI tool:
//! building launch commands for updog, Python's SimpleHTTPServer, the
//! Twisted FTP daemon, and ATFTPD from user-supplied field values, plus the
//! defaults-file handling and reference text the tool ships with.
//!
//! Nothing here executes commands or opens sockets; the output is always a
//! string for the operator to run themselves.

pub mod builder;
pub mod cli;
pub mod commands;
pub mod config;
pub mod reference;
#[cfg(feature = "tui")]
pub mod tui;

/// Library-level error type for xfergen operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] builder::ValidationError),

    #[error("unknown server kind: {0}")]
    UnknownServer(String),
}

/// Result type alias for xfergen operations.
pub type Result<T> = std::result::Result<T, Error>;
