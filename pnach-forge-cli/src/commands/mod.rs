pub(crate) mod codes;
pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod inspect;
pub(crate) mod lookup;
pub(crate) mod merge;
pub(crate) mod scan;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use pnach_forge_core::decode_text_lossy;
use pnach_forge_lib::TitleMapping;

use crate::CliError;
use crate::cli_types::IdentifyArgs;

/// Read a text file, falling back to a lossy decode with a warning.
pub(crate) fn read_text(path: &Path) -> Result<String, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::input(format!("Failed to read {}: {}", path.display(), e)))?;
    let (text, lossy) = decode_text_lossy(&bytes);
    if lossy {
        log::warn!(
            "{} is not valid UTF-8; invalid bytes were replaced",
            path.display()
        );
    }
    Ok(text)
}

/// Write `contents` to `output`, or print it when no output is given.
pub(crate) fn write_or_print(contents: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| {
                CliError::input(format!("Failed to write {}: {}", path.display(), e))
            })?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{contents}"),
    }
    Ok(())
}

/// Load the title mapping named on the command line, if any.
pub(crate) fn load_mapping(path: Option<&Path>) -> Result<Option<TitleMapping>, CliError> {
    let Some(path) = path else {
        return Ok(None);
    };
    TitleMapping::load(path)
        .map(Some)
        .map_err(|e| CliError::input(format!("Failed to load mapping {}: {}", path.display(), e)))
}

/// Emulator logs folder from `--emulog` or the settings file.
pub(crate) fn logs_dir(args: &IdentifyArgs) -> Option<PathBuf> {
    pnach_forge_lib::settings::resolve_logs_dir(args.emulog.clone())
}

pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

pub(crate) fn spinner(quiet: bool, msg: impl Into<String>) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
