use clap::Parser;
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use dict_core::commands::help::print_help;
use dict_core::config::{Cli, Settings};
use dict_core::persistence::load_file;
use dict_core::Shell;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&Settings::from_env());

    if cli.help {
        let mut stdout = io::stdout().lock();
        return match print_help(&mut stdout).and_then(|_| stdout.flush()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    }

    let mut shell = Shell::new();
    if let Some(path) = &cli.file {
        if let Err(e) = load_file(path, shell.dicts_mut()) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    let interactive = stdin.is_tty();
    let mut stdout = io::stdout().lock();

    let result = if interactive {
        eprintln!("{}", "Translation dictionary shell".bold());
        eprintln!("One command per line, Ctrl-D to quit. Run with --help for the command list.\n");
        shell.run_with_prompt(stdin.lock(), &mut stdout, print_prompt)
    } else {
        shell.run(stdin.lock(), &mut stdout)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_prompt() -> io::Result<()> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", "> ".dark_cyan())?;
    stderr.flush()
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let ansi = settings.log_ansi.unwrap_or_else(|| io::stderr().is_tty());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(ansi),
        )
        .init();
}
