//! TUI application - event loop and terminal management.
//!
//! One tab per server kind, the same layout the original desktop form used:
//! editable fields on top, a generated-command panel below, keybindings in a
//! status bar. Everything is synchronous; there is no peer to talk to, so
//! the loop just polls the keyboard.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use super::form::Form;
use crate::config::Defaults;
use crate::reference::ServerKind;

/// TUI application state
pub struct TuiApp {
    forms: Vec<Form>,
    active: usize,
    should_quit: bool,
}

impl TuiApp {
    /// Create the application with one form per server kind, prefilled from
    /// the defaults file.
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            forms: ServerKind::ALL
                .iter()
                .map(|&kind| Form::new(kind, defaults))
                .collect(),
            active: 0,
            should_quit: false,
        }
    }

    fn form(&mut self) -> &mut Form {
        &mut self.forms[self.active]
    }

    fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.forms.len();
    }

    fn previous_tab(&mut self) {
        self.active = (self.active + self.forms.len() - 1) % self.forms.len();
    }

    /// Handle keyboard events
    fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl-C quits even mid-edit; plain characters go to the fields.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.previous_tab(),
            KeyCode::Up => self.form().focus_previous(),
            KeyCode::Down => self.form().focus_next(),
            KeyCode::Enter => self.form().generate(),
            KeyCode::Backspace => self.form().pop_char(),
            KeyCode::Char(c) => self.form().push_char(c),
            _ => {}
        }
    }

    /// Render the full frame
    fn render(&self, frame: &mut Frame) {
        let form = &self.forms[self.active];
        let field_rows = form.rows() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),              // tabs
                Constraint::Length(field_rows + 2), // form fields
                Constraint::Min(4),                 // generated command
                Constraint::Length(3),              // status bar
            ])
            .split(frame.area());

        self.render_tabs(frame, chunks[0]);
        self.render_form(frame, chunks[1]);
        self.render_output(frame, chunks[2]);
        self.render_status_bar(frame, chunks[3]);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self
            .forms
            .iter()
            .map(|form| Line::from(form.kind.title()))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.active)
            .highlight_style(Style::default().fg(Color::Yellow).bold())
            .block(Block::default().borders(Borders::ALL).title(" Servers "));
        frame.render_widget(tabs, area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let form = &self.forms[self.active];
        let focused_style = Style::default().fg(Color::Yellow).bold();

        let mut lines: Vec<Line> = Vec::with_capacity(form.rows());
        for (i, field) in form.fields.iter().enumerate() {
            let marker = if form.focus == i { "> " } else { "  " };
            let style = if form.focus == i {
                focused_style
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{:24}", marker, field.label), style),
                Span::raw(field.buffer.clone()),
            ]));
        }
        if let Some(ssl) = form.ssl {
            let marker = if form.checkbox_focused() { "> " } else { "  " };
            let style = if form.checkbox_focused() {
                focused_style
            } else {
                Style::default()
            };
            let check = if ssl { "[x]" } else { "[ ]" };
            lines.push(Line::from(Span::styled(
                format!("{}{} Enable SSL (--ssl)", marker, check),
                style,
            )));
        }

        let fields = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Fields "));
        frame.render_widget(fields, area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        let form = &self.forms[self.active];
        let (text, style) = match &form.output {
            Some(Ok(command)) => (command.clone(), Style::default().fg(Color::Green)),
            Some(Err(e)) => (format!("Input error: {}", e), Style::default().fg(Color::Red)),
            None => (
                "Press Enter to generate".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        let output = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Generated Command "),
            );
        frame.render_widget(output, area);
    }

    /// Render the status bar with keybindings
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(
            " Tab:Switch Server  Up/Down:Field  Space:Toggle SSL  Enter:Generate  Esc:Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }
}

/// Setup the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the terminal form until the user quits.
pub fn run_tui(defaults: &Defaults) -> io::Result<()> {
    let mut app = TuiApp::new(defaults);
    let mut terminal = setup_terminal()?;

    let result = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e);
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Always restore, even when the loop broke with an error.
    restore_terminal()?;
    result
}
