//! PNACH cheat-file parsing, labeling and generation.
//!
//! A PNACH file is line oriented:
//! ```text
//! gametitle=Some Game
//! // serials: SLUS-21234
//! // CRC: 0xDEADBEEF
//! [Cheats/Infinite Health]
//! patch=1,EE,2033A5C0,extended,0000270F
//! ```
//! [`parse_pnach_text`] turns such text into a [`PatchRecord`] that keeps the
//! original interleaving of comments and patch lines. [`label_groups`] splits
//! the patches into named [`CheatGroup`]s and [`generate_pnach`] writes the
//! canonical form back out.

pub mod generator;
pub mod labeler;
pub mod parser;
pub mod record;
pub mod sections;

pub use generator::{GENERATOR_SIGNATURE, generate_pnach, render_pnach};
pub use labeler::{CheatGroup, GroupCandidate, Labeler, collect_groups, is_noise_label, label_groups};
pub use parser::{RawParse, RejectedLine, parse_pnach_text, parse_raw_8x8, parse_raw_8x8_with_diagnostics};
pub use record::{LineItem, PatchRecord};
pub use sections::{NamedSection, extract_sections};
