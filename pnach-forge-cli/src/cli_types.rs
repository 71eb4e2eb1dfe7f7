//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use pnach_forge_core::Region;

#[derive(Parser)]
#[command(name = "pnach-forge")]
#[command(about = "Parse, label and generate PS2 PNACH cheat files", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How `generate` should read its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum InputMode {
    /// RAW when the text has no `patch=` lines, PNACH otherwise
    #[default]
    Auto,
    /// Bare "AAAAAAAA VVVVVVVV" pairs, one per line
    Raw,
    /// An existing PNACH file
    Pnach,
}

/// Sources for identifiers missing from the file itself.
#[derive(Args, Clone, Default)]
pub(crate) struct IdentifyArgs {
    /// Title mapping file (JSON object or CSV with key/title columns)
    #[arg(long)]
    pub mapping: Option<PathBuf>,

    /// Emulator logs folder to search for a CRC (defaults to paths.logs_dir)
    #[arg(long)]
    pub emulog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a canonical, labeled PNACH file
    Generate {
        /// Input file (RAW pairs or PNACH)
        input: PathBuf,

        /// Input format
        #[arg(long, value_enum, default_value_t = InputMode::Auto)]
        mode: InputMode,

        /// Game title (overrides the one found in the input)
        #[arg(long)]
        title: Option<String>,

        /// Game serial, may be repeated (e.g., SLUS-21234)
        #[arg(long)]
        serial: Vec<String>,

        /// Game CRC (e.g., DEADBEEF or 0xDEADBEEF)
        #[arg(long)]
        crc: Option<String>,

        #[command(flatten)]
        identify: IdentifyArgs,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show serial, CRC and title found for cheat files
    Inspect {
        /// Files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        identify: IdentifyArgs,
    },

    /// Normalize pasted code lines into `patch=` form
    Codes {
        /// Text file with code lines
        input: PathBuf,
    },

    /// Scan a cheats folder and build a database from it
    Scan {
        /// Folder to scan (defaults to paths.cheats_dir, then "./PS2 Cheats")
        dir: Option<PathBuf>,

        /// Save the resulting database to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print per-file results
        #[arg(long)]
        summary: bool,

        /// Number of concurrent scan workers (defaults to scan.workers)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Merge cheat databases into one
    Merge {
        /// Scan this cheats folder and merge the result last
        #[arg(long)]
        local_folder: Option<PathBuf>,

        /// Existing database to merge into (defaults to paths.database)
        #[arg(long)]
        existing: Option<PathBuf>,

        /// Additional source databases, merged in the order given
        #[arg(long)]
        source: Vec<PathBuf>,

        /// Keep an existing region's cheats unless they are empty
        #[arg(long)]
        keep_existing: bool,

        /// Number of concurrent scan workers for --local-folder
        #[arg(long)]
        threads: Option<usize>,

        /// Output file (default: ps2_cheats_database_merged.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics for a database
    Stats {
        /// Database file (defaults to paths.database)
        db: Option<PathBuf>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a game's cheats in a database
    Lookup {
        /// Database file
        db: PathBuf,

        /// Game title (matched case-insensitively)
        title: String,

        /// Only regions with this serial
        #[arg(long)]
        serial: Option<String>,

        /// Only this region (e.g., ntsc-u, pal, jp)
        #[arg(long)]
        region: Option<Region>,

        /// Print the matching codes too
        #[arg(long)]
        codes: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Set a setting (e.g., paths.database /games/ps2/cheats.json)
    Set {
        /// Setting key
        key: String,

        /// New value
        value: String,
    },

    /// Remove a setting
    Unset {
        /// Setting key
        key: String,
    },
}
