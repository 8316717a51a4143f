//! Per-server form state for the terminal UI.
//!
//! A form is a flat list of editable text fields plus, for updog, one
//! checkbox row. Field values are raw strings fed to the builders unchanged,
//! so the TUI validates nothing itself; the builder's Result is the only
//! verdict.

use crate::builder::{
    self, FtpFields, SimpleHttpFields, TftpFields, UpdogFields, ValidationError,
};
use crate::config::Defaults;
use crate::reference::ServerKind;

/// One editable text field.
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    pub buffer: String,
}

impl TextField {
    fn new(label: &'static str, prefill: &Option<String>) -> Self {
        Self {
            label,
            buffer: prefill.clone().unwrap_or_default(),
        }
    }
}

/// Form state for one server kind.
#[derive(Debug, Clone)]
pub struct Form {
    pub kind: ServerKind,
    pub fields: Vec<TextField>,
    /// SSL checkbox value; present only on the updog form.
    pub ssl: Option<bool>,
    /// Focused row: field index, or the checkbox row past the last field.
    pub focus: usize,
    /// Result of the last generate action, kept per form across tab
    /// switches.
    pub output: Option<Result<String, ValidationError>>,
}

impl Form {
    /// Build the form for a server kind, prefilled from the defaults file.
    pub fn new(kind: ServerKind, defaults: &Defaults) -> Self {
        let (fields, ssl) = match kind {
            ServerKind::Updog => (
                vec![
                    TextField::new("Directory (-d)", &defaults.updog.directory),
                    TextField::new("Port (-p)", &defaults.updog.port),
                    TextField::new("Password (--password)", &defaults.updog.password),
                ],
                Some(defaults.updog.ssl.unwrap_or(false)),
            ),
            ServerKind::SimpleHttp => (
                vec![TextField::new("Port", &defaults.simple_http.port)],
                None,
            ),
            ServerKind::Ftp => (
                vec![
                    TextField::new("Root Directory (--root)", &defaults.ftp.root),
                    TextField::new("Port (-p)", &defaults.ftp.port),
                ],
                None,
            ),
            ServerKind::Tftp => (
                vec![
                    TextField::new("TFTP Directory", &defaults.tftp.directory),
                    TextField::new("Port", &defaults.tftp.port),
                ],
                None,
            ),
        };
        Self {
            kind,
            fields,
            ssl,
            focus: 0,
            output: None,
        }
    }

    /// Number of focusable rows (fields plus the checkbox when present).
    pub fn rows(&self) -> usize {
        self.fields.len() + usize::from(self.ssl.is_some())
    }

    /// True when the checkbox row is focused.
    pub fn checkbox_focused(&self) -> bool {
        self.ssl.is_some() && self.focus == self.fields.len()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.rows();
    }

    pub fn focus_previous(&mut self) {
        self.focus = (self.focus + self.rows() - 1) % self.rows();
    }

    /// Type a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        if self.checkbox_focused() {
            if c == ' ' {
                self.toggle_checkbox();
            }
            return;
        }
        if c == '\n' || c == '\r' {
            return;
        }
        self.fields[self.focus].buffer.push(c);
    }

    /// Delete the last character of the focused field.
    pub fn pop_char(&mut self) {
        if !self.checkbox_focused() {
            self.fields[self.focus].buffer.pop();
        }
    }

    pub fn toggle_checkbox(&mut self) {
        if let Some(ssl) = self.ssl.as_mut() {
            *ssl = !*ssl;
        }
    }

    /// Run the matching builder over the current field values.
    pub fn generate(&mut self) {
        let result = match self.kind {
            ServerKind::Updog => builder::build_updog(&UpdogFields {
                directory: self.fields[0].buffer.clone(),
                port: self.fields[1].buffer.clone(),
                password: self.fields[2].buffer.clone(),
                ssl: self.ssl.unwrap_or(false),
            }),
            ServerKind::SimpleHttp => builder::build_simple_http(&SimpleHttpFields {
                port: self.fields[0].buffer.clone(),
            }),
            ServerKind::Ftp => builder::build_ftp(&FtpFields {
                root: self.fields[0].buffer.clone(),
                port: self.fields[1].buffer.clone(),
            }),
            ServerKind::Tftp => builder::build_tftp(&TftpFields {
                directory: self.fields[0].buffer.clone(),
                port: self.fields[1].buffer.clone(),
            }),
        };
        self.output = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{Field, ValidationError};
    use crate::config::{Defaults, TftpDefaults};

    #[test]
    fn updog_form_has_checkbox_row() {
        let form = Form::new(ServerKind::Updog, &Defaults::default());
        assert_eq!(form.rows(), 4);
        assert!(form.ssl.is_some());
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = Form::new(ServerKind::Ftp, &Defaults::default());
        form.focus_previous();
        assert_eq!(form.focus, 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut form = Form::new(ServerKind::SimpleHttp, &Defaults::default());
        for c in "9000".chars() {
            form.push_char(c);
        }
        form.pop_char();
        assert_eq!(form.fields[0].buffer, "900");
    }

    #[test]
    fn generate_reports_builder_errors() {
        let mut form = Form::new(ServerKind::Tftp, &Defaults::default());
        form.generate();
        assert_eq!(
            form.output,
            Some(Err(ValidationError::MissingRequiredField(Field::Directory)))
        );
    }

    #[test]
    fn defaults_prefill_fields() {
        let defaults = Defaults {
            tftp: TftpDefaults {
                directory: Some("/tftp".to_string()),
                port: Some("69".to_string()),
            },
            ..Default::default()
        };
        let mut form = Form::new(ServerKind::Tftp, &defaults);
        form.generate();
        assert_eq!(
            form.output,
            Some(Ok(r#"atftpd --daemon --port 69 "/tftp""#.to_string()))
        );
    }
}
