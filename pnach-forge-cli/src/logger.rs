//! `log` backend for the CLI.
//!
//! Info and debug lines go to stdout, warnings and errors to stderr. With
//! `--logfile` every printed line is mirrored to the file with ANSI escapes
//! removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::CliError;

struct CliLogger {
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        if metadata.level() > log::max_level() {
            return false;
        }
        // Debug output from dependencies is noise.
        metadata.level() <= Level::Info || metadata.target().starts_with("pnach_forge")
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record, self.verbose);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        if let Some(mut file) = self.logfile.as_ref().and_then(|f| f.lock().ok()) {
            let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
        }
    }

    fn flush(&self) {
        if let Some(mut file) = self.logfile.as_ref().and_then(|f| f.lock().ok()) {
            let _ = file.flush();
        }
    }
}

/// Render one record the way it is printed.
fn format_record(record: &Record<'_>, verbose: bool) -> String {
    let message = record.args().to_string();
    let line = match record.level() {
        Level::Error => format!("{} {}", "error:".if_supports_color(Stderr, |t| t.red()), message),
        Level::Warn => format!(
            "{} {}",
            "warning:".if_supports_color(Stderr, |t| t.yellow()),
            message
        ),
        Level::Info => message,
        Level::Debug | Level::Trace => {
            format!("{}", message.if_supports_color(Stdout, |t| t.dimmed()))
        }
    };

    if verbose {
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            line
        )
    } else {
        line
    }
}

/// Install the CLI logger. `--verbose` wins over `--quiet`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let logfile = logfile.map(File::create).transpose()?.map(Mutex::new);
    log::set_boxed_logger(Box::new(CliLogger { verbose, logfile }))
        .map_err(|e| CliError::runtime(format!("Failed to install logger: {}", e)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(record: &Record<'_>, verbose: bool) -> String {
        strip_ansi_escapes::strip_str(format_record(record, verbose))
    }

    #[test]
    fn levels_are_prefixed() {
        let warn = plain(
            &Record::builder()
                .args(format_args!("source skipped"))
                .level(Level::Warn)
                .target("pnach_forge_db::io")
                .build(),
            false,
        );
        assert_eq!(warn, "warning: source skipped");

        let info = plain(
            &Record::builder()
                .args(format_args!("Merged 3 games"))
                .level(Level::Info)
                .build(),
            false,
        );
        assert_eq!(info, "Merged 3 games");
    }

    #[test]
    fn verbose_lines_carry_level_and_target() {
        let line = plain(
            &Record::builder()
                .args(format_args!("parsed"))
                .level(Level::Debug)
                .target("pnach_forge_lib::scanner")
                .build(),
            true,
        );
        assert!(line.contains("DEBUG [pnach_forge_lib::scanner] parsed"));
    }
}
