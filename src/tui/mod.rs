//! Terminal user interface for xfergen.
//!
//! A keyboard-driven form with one tab per server kind, the terminal
//! counterpart of the original desktop form: fill the fields, press Enter,
//! read the generated command off the output panel.

mod app;
mod form;

pub use app::run_tui;
pub use form::{Form, TextField};
