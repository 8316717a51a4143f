//! CLI argument definitions for xfergen.
//!
//! Field flags are deliberately all optional at the clap level, including
//! the ones the FTP/TFTP builders require: defaults from the config file can
//! fill them in, and requiredness is the builder's rule, reported through its
//! own validation error rather than a usage error.

use clap::{Parser, Subcommand};

/// Version string with embedded build info from build.rs.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("XG_GIT_COMMIT"),
    ", built ",
    env!("XG_BUILD_TIMESTAMP"),
    ")"
);

/// Xfergen - generate launch commands for ad-hoc file transfer servers.
///
/// Pick a server kind, pass its fields as flags, get the shell command to
/// run. Nothing is executed; the output is always just a string.
#[derive(Parser, Debug)]
#[command(name = "xg")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Generate launch commands for ad-hoc file transfer servers", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an updog web server command
    ///
    /// All fields are optional; absent ones are left out of the command.
    Updog {
        /// Directory to serve (-d)
        #[arg(short = 'd', long)]
        directory: Option<String>,

        /// Port to listen on (-p); must be numeric
        #[arg(short = 'p', long)]
        port: Option<String>,

        /// Upload/download password (--password)
        #[arg(long)]
        password: Option<String>,

        /// Enable SSL (--ssl)
        #[arg(long)]
        ssl: bool,
    },

    /// Generate a Python SimpleHTTPServer command
    ///
    /// A blank port falls back to the literal 8000 rather than being
    /// omitted.
    SimpleHttp {
        /// Port to listen on; must be numeric
        #[arg(short = 'p', long)]
        port: Option<String>,
    },

    /// Generate a Twisted FTP server command
    Ftp {
        /// FTP root directory (--root); required by the builder
        #[arg(short = 'r', long)]
        root: Option<String>,

        /// Port to listen on (-p); required by the builder, must be numeric
        #[arg(short = 'p', long)]
        port: Option<String>,
    },

    /// Generate an ATFTPD TFTP server command
    Tftp {
        /// TFTP directory; required by the builder
        #[arg(short = 'd', long)]
        directory: Option<String>,

        /// Port to listen on; required by the builder, must be numeric
        #[arg(short = 'p', long)]
        port: Option<String>,
    },

    /// Show client-side usage examples for a server kind
    Reference {
        /// Server kind (updog, simple-http, ftp, tftp); all when omitted
        server: Option<String>,
    },

    /// Defaults file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Launch the interactive terminal form (requires 'tui' feature)
    #[cfg(feature = "tui")]
    Tui,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the path of the defaults file
    Path,

    /// Show the loaded defaults
    Show,
}
