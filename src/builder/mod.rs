//! Command-string construction for the supported server kinds.
//!
//! Each server kind gets one build function with the same contract: take a
//! set of raw field values as entered by the user, return either the fully
//! assembled launch command or a [`ValidationError`]. The builders are pure;
//! nothing here touches the filesystem or the network, and no state survives
//! a call.
//!
//! A blank field (empty after trimming) counts as absent. Whether an absent
//! field is an error, gets a default, or is simply omitted from the output
//! depends on the server kind:
//!
//! - updog: everything optional, absent fields are omitted
//! - SimpleHTTPServer: port optional, absent means the literal `8000`
//! - twistd ftp / atftpd: directory and port required

use std::fmt;

/// A field of one of the server forms, used to name the offender in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Directory,
    RootDirectory,
    Port,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Directory => write!(f, "directory"),
            Field::RootDirectory => write!(f, "root directory"),
            Field::Port => write!(f, "port"),
        }
    }
}

/// Validation failure for a single build request.
///
/// Both variants are user-correctable input problems; the caller is expected
/// to surface them and let the user retry. No partial command accompanies an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequiredField(Field),

    #[error("{0} must be a number")]
    NonNumericPort(Field),
}

/// Fields for the updog web server. All optional.
#[derive(Debug, Clone, Default)]
pub struct UpdogFields {
    pub directory: String,
    pub port: String,
    pub password: String,
    pub ssl: bool,
}

/// Fields for Python's built-in SimpleHTTPServer.
#[derive(Debug, Clone, Default)]
pub struct SimpleHttpFields {
    pub port: String,
}

/// Fields for the Twisted FTP daemon. Both required.
#[derive(Debug, Clone, Default)]
pub struct FtpFields {
    pub root: String,
    pub port: String,
}

/// Fields for the ATFTPD TFTP daemon. Both required.
#[derive(Debug, Clone, Default)]
pub struct TftpFields {
    pub directory: String,
    pub port: String,
}

/// Build an `updog` invocation.
///
/// Absent fields are omitted from the output entirely; no placeholder is
/// emitted. A present port must parse as an integer.
pub fn build_updog(fields: &UpdogFields) -> Result<String, ValidationError> {
    let mut command = String::from("updog");

    if let Some(directory) = value(&fields.directory) {
        command.push_str(" -d ");
        command.push_str(&quote(directory));
    }
    if let Some(port) = value(&fields.port) {
        check_port(port)?;
        command.push_str(" -p ");
        command.push_str(port);
    }
    if let Some(password) = value(&fields.password) {
        command.push_str(" --password ");
        command.push_str(&quote(password));
    }
    if fields.ssl {
        command.push_str(" --ssl");
    }

    Ok(command)
}

/// Build a `python -m SimpleHTTPServer` invocation.
///
/// Unlike updog, a blank port is not omitted: the literal `8000` is emitted
/// in its place, so the generated command always carries a port argument.
pub fn build_simple_http(fields: &SimpleHttpFields) -> Result<String, ValidationError> {
    let mut command = String::from("python -m SimpleHTTPServer");

    match value(&fields.port) {
        Some(port) => {
            check_port(port)?;
            command.push(' ');
            command.push_str(port);
        }
        None => command.push_str(" 8000"),
    }

    Ok(command)
}

/// Build a `twistd -n ftp` invocation.
///
/// Root directory and port are both required; the root directory is checked
/// first, so a request missing both reports the root directory.
pub fn build_ftp(fields: &FtpFields) -> Result<String, ValidationError> {
    let root = value(&fields.root)
        .ok_or(ValidationError::MissingRequiredField(Field::RootDirectory))?;
    let port =
        value(&fields.port).ok_or(ValidationError::MissingRequiredField(Field::Port))?;
    check_port(port)?;

    Ok(format!("twistd -n ftp -p {} --root {}", port, quote(root)))
}

/// Build an `atftpd` invocation.
///
/// Directory and port are both required, directory checked first.
pub fn build_tftp(fields: &TftpFields) -> Result<String, ValidationError> {
    let directory = value(&fields.directory)
        .ok_or(ValidationError::MissingRequiredField(Field::Directory))?;
    let port =
        value(&fields.port).ok_or(ValidationError::MissingRequiredField(Field::Port))?;
    check_port(port)?;

    Ok(format!("atftpd --daemon --port {} {}", port, quote(directory)))
}

/// Trim a raw field value, mapping blank to absent.
fn value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Validate that a port field holds a base-10 integer.
///
/// The entire trimmed string must parse; decimals, stray characters, and
/// empty input are all rejected. The parsed value is discarded: the command
/// carries the user's text, not a re-rendering of it.
fn check_port(port: &str) -> Result<(), ValidationError> {
    port.parse::<i64>()
        .map(|_| ())
        .map_err(|_| ValidationError::NonNumericPort(Field::Port))
}

/// Wrap a field value in double quotes for the generated command.
///
/// Characters a POSIX shell still interprets inside double quotes (`"`, `\`,
/// `$`, backtick) are backslash-escaped so a field value cannot terminate the
/// quoted region or expand at the victim shell.
fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
