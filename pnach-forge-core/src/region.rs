use serde::{Deserialize, Serialize};

/// Console release regions a cheat set can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// North America
    #[serde(rename = "NTSC-U")]
    NtscU,
    /// Europe / Australia
    #[serde(rename = "PAL")]
    Pal,
    /// Japan
    #[serde(rename = "NTSC-J")]
    NtscJ,
    /// Korea
    #[serde(rename = "NTSC-K")]
    NtscK,
    /// Anything the serial table does not cover
    #[serde(other)]
    Unknown,
}

const ALL_REGIONS: &[Region] = &[
    Region::NtscU,
    Region::Pal,
    Region::NtscJ,
    Region::NtscK,
    Region::Unknown,
];

impl Region {
    /// All regions in canonical order.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }

    /// The code used in the database JSON (e.g., "NTSC-U").
    pub fn code(&self) -> &'static str {
        match self {
            Self::NtscU => "NTSC-U",
            Self::Pal => "PAL",
            Self::NtscJ => "NTSC-J",
            Self::NtscK => "NTSC-K",
            Self::Unknown => "Unknown",
        }
    }

    /// Derive the region from a serial's catalog prefix.
    ///
    /// Only the publisher prefixes with a well-defined region are mapped;
    /// everything else, including an empty serial, is `Unknown`.
    pub fn from_serial(serial: &str) -> Self {
        let upper = serial.trim().to_ascii_uppercase();
        let prefix = upper.get(..4).unwrap_or("");
        match prefix {
            "SLUS" => Self::NtscU,
            "SLES" => Self::Pal,
            "SLPS" | "SCPS" | "SLPM" => Self::NtscJ,
            "SLKA" => Self::NtscK,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "ntsc-u" | "ntscu" | "us" | "usa" => Ok(Self::NtscU),
            "pal" | "eu" | "europe" => Ok(Self::Pal),
            "ntsc-j" | "ntscj" | "jp" | "japan" => Ok(Self::NtscJ),
            "ntsc-k" | "ntsck" | "kr" | "korea" => Ok(Self::NtscK),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "unknown region '{s}' (expected one of: NTSC-U, PAL, NTSC-J, NTSC-K, Unknown)"
            )),
        }
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
