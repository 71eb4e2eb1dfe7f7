//! pnach-forge CLI
//!
//! Command-line interface for parsing, labeling and generating PS2 PNACH
//! cheat files and for building cheat databases from them.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Log an empty info line (section spacing).
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let quiet = cli.quiet;
    let result = match cli.command {
        Commands::Generate {
            input,
            mode,
            title,
            serial,
            crc,
            identify,
            output,
        } => commands::generate::run_generate(&input, mode, title, serial, crc, &identify, output),
        Commands::Inspect { files, identify } => {
            commands::inspect::run_inspect(files, &identify, quiet)
        }
        Commands::Codes { input } => commands::codes::run_codes(&input),
        Commands::Scan {
            dir,
            output,
            summary,
            threads,
        } => commands::scan::run_scan(dir, output, summary, threads, quiet),
        Commands::Merge {
            local_folder,
            existing,
            source,
            keep_existing,
            threads,
            output,
        } => commands::merge::run_merge(
            local_folder,
            existing,
            source,
            keep_existing,
            threads,
            output,
            quiet,
        ),
        Commands::Stats { db, json } => commands::stats::run_stats(db, json),
        Commands::Lookup {
            db,
            title,
            serial,
            region,
            codes,
        } => commands::lookup::run_lookup(&db, &title, serial.as_deref(), region, codes),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Set { key, value } => commands::config::run_config_set(&key, &value),
            ConfigAction::Unset { key } => commands::config::run_config_unset(&key),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
}
