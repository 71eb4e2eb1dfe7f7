//! Filesystem-facing pieces: the local cheats scanner, file name and log
//! fallbacks for identifiers, title mappings and the shared settings file.

pub mod emulog;
pub mod error;
pub mod filename;
pub mod identify;
pub mod mapping;
pub mod scan_pool;
pub mod scanner;
pub mod settings;

pub use emulog::{find_crc_in_log, suggest_crc_from_logs};
pub use error::{MappingError, ScanError};
pub use filename::{FilenameInfo, parse_cheat_filename};
pub use identify::{Identification, IdentifyContext, Origin, identify_file, identify_files, identify_text};
pub use mapping::TitleMapping;
pub use scanner::{
    CHEAT_EXTENSION, ScannedFile, build_database, find_cheat_files, scan_file, scan_folder,
    scan_folder_parallel, scan_text,
};
pub use scan_pool::{ScanOutcome, scan_paths};
