//! Xfergen CLI - generate launch commands for ad-hoc file transfer servers.

use clap::Parser;
use std::process;

use xfergen::cli::{Cli, Commands, ConfigCommands};
use xfergen::commands::{self, Output};
use xfergen::config::{self, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Defaults feed both field merging and the output-format preference, so
    // a broken defaults file fails every command, not just config ones.
    let defaults = match config::load() {
        Ok(defaults) => defaults,
        Err(e) => {
            print_error(&e, cli.human_readable);
            process::exit(1);
        }
    };

    // Precedence: -H flag > config preference > JSON.
    let human =
        cli.human_readable || defaults.output_format == Some(OutputFormat::Human);

    if let Err(e) = run_command(cli.command, &defaults, human) {
        print_error(&e, human);
        process::exit(1);
    }
}

fn run_command(
    command: Option<Commands>,
    defaults: &config::Defaults,
    human: bool,
) -> Result<(), xfergen::Error> {
    match command {
        Some(Commands::Updog {
            directory,
            port,
            password,
            ssl,
        }) => {
            let result = commands::updog(directory, port, password, ssl, defaults)?;
            output(&result, human);
        }
        Some(Commands::SimpleHttp { port }) => {
            let result = commands::simple_http(port, defaults)?;
            output(&result, human);
        }
        Some(Commands::Ftp { root, port }) => {
            let result = commands::ftp(root, port, defaults)?;
            output(&result, human);
        }
        Some(Commands::Tftp { directory, port }) => {
            let result = commands::tftp(directory, port, defaults)?;
            output(&result, human);
        }
        Some(Commands::Reference { server }) => {
            let result = commands::reference(server)?;
            output(&result, human);
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => output(&commands::config_path(), human),
            ConfigCommands::Show => output(&commands::config_show()?, human),
        },
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => {
            xfergen::tui::run_tui(defaults)?;
        }
        None => output(&commands::overview(), human),
    }

    Ok(())
}

/// Print output in JSON or human-readable format.
fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}

/// Print an error in the active output format.
fn print_error(e: &xfergen::Error, human: bool) {
    if human {
        eprintln!("Error: {}", e);
    } else {
        eprintln!(
            "{}",
            serde_json::json!({ "error": e.to_string() })
        );
    }
}
