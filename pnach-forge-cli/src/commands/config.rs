use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pnach_forge_lib::settings::{self, KNOWN_KEYS};

use crate::CliError;

/// Show the settings file and the values each command will use.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "pnach-forge Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for key in KNOWN_KEYS {
        match settings::get_value_in(&path, key) {
            Some(value) => log::info!(
                "  {} {}",
                format!("{}:", key).if_supports_color(Stdout, |t| t.cyan()),
                display_value(&value),
            ),
            None => log::info!(
                "  {} {}",
                format!("{}:", key).if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
    crate::log_blank();

    log::info!(
        "{}",
        "Effective values".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!(
        "  cheats folder: {}",
        settings::resolve_cheats_dir(None).display()
    );
    log::info!("  database:      {}", settings::resolve_database(None).display());
    log::info!(
        "  logs folder:   {}",
        settings::resolve_logs_dir(None)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    log::info!("  scan workers:  {}", settings::resolve_workers(None));
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    settings::set_value(key, value).map_err(|e| CliError::config(e.to_string()))?;
    log::info!(
        "{} {} = {}",
        "Set".if_supports_color(Stdout, |t| t.green()),
        key,
        value
    );
    Ok(())
}

pub(crate) fn run_config_unset(key: &str) -> Result<(), CliError> {
    settings::unset_value(key).map_err(|e| CliError::config(e.to_string()))?;
    log::info!(
        "{} {}",
        "Removed".if_supports_color(Stdout, |t| t.green()),
        key
    );
    Ok(())
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
