use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_lib::{Identification, IdentifyContext, identify_file};

use super::{load_mapping, logs_dir};
use crate::CliError;
use crate::cli_types::IdentifyArgs;

/// Entry point for `inspect`: identify serial, CRC and title per file.
pub(crate) fn run_inspect(
    files: Vec<PathBuf>,
    identify: &IdentifyArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let mapping = load_mapping(identify.mapping.as_deref())?;
    let logs = logs_dir(identify);
    let ctx = IdentifyContext {
        mapping: mapping.as_ref(),
        logs_dir: logs.as_deref(),
    };

    let pb = if quiet || files.len() < 2 {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .expect("static pattern"),
        );
        pb
    };

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        pb.set_message(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        let result = identify_file(&path, ctx);
        results.push((path, result));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut failed = 0usize;
    let mut uncertain = 0usize;
    for (path, result) in &results {
        log::info!(
            "{}",
            path.display().if_supports_color(Stdout, |t| t.bold())
        );
        match result {
            Ok(id) => {
                if id.is_low_confidence() {
                    uncertain += 1;
                }
                print_identification(id);
            }
            Err(e) => {
                failed += 1;
                log::warn!("Failed to read {}: {}", path.display(), e);
            }
        }
    }

    crate::log_blank();
    log::info!(
        "Inspected {} file(s): {} without CRC or serial, {} unreadable",
        results.len(),
        uncertain,
        failed
    );
    Ok(())
}

fn print_identification(id: &Identification) {
    let missing = || "not found".if_supports_color(Stdout, |t| t.yellow()).to_string();

    let crc = match (&id.crc, id.crc_origin) {
        (Some(crc), Some(origin)) => format!(
            "{} {}",
            crc,
            format!("({})", origin).if_supports_color(Stdout, |t| t.dimmed())
        ),
        (Some(crc), None) => crc.clone(),
        (None, _) => missing(),
    };
    let serials = if id.serials.is_empty() {
        missing()
    } else {
        id.serials.join(", ")
    };
    let title = match (&id.title, id.title_origin) {
        (Some(title), Some(origin)) => format!(
            "{} {}",
            title,
            format!("({})", origin).if_supports_color(Stdout, |t| t.dimmed())
        ),
        (Some(title), None) => title.clone(),
        (None, _) => missing(),
    };

    log::info!("  CRC:     {}", crc);
    log::info!("  Serials: {}", serials);
    log::info!("  Title:   {}", title);
    if id.lossy {
        log::info!(
            "  {}",
            "(not valid UTF-8, decoded lossily)".if_supports_color(Stdout, |t| t.dimmed())
        );
    }
}
