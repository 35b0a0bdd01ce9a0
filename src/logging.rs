use crate::cli::Commands;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub const TUI_LOG_FILE: &str = "tui.log";

/// Where log lines are written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// The TUI owns the terminal, so its logs go to a file.
    File { dir: PathBuf, file_name: &'static str },
    Discard,
}

pub fn log_target(command: Option<&Commands>, data_dir: Option<PathBuf>) -> LogTarget {
    match command {
        Some(Commands::Tui { .. }) => match data_dir {
            Some(dir) => LogTarget::File {
                dir: dir.join("gardenops"),
                file_name: TUI_LOG_FILE,
            },
            None => LogTarget::Discard,
        },
        _ => LogTarget::Stderr,
    }
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8, target: &LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File { dir, file_name } => {
            match RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(*file_name)
                .build(dir)
            {
                Ok(appender) => (BoxMakeWriter::new(appender), false),
                Err(e) => {
                    // The alternate screen is not up yet
                    eprintln!("Cannot open log file in {}: {}", dir.display(), e);
                    (BoxMakeWriter::new(std::io::sink), false)
                }
            }
        }
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
