use serde::{Deserialize, Serialize};

/// Console identifiers for every format the workspace can decode.
///
/// Short names, display names, manufacturer and aliases live here so the
/// registry and CLI never match consoles by ad-hoc strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    // Nintendo
    GameBoy,
    Gba,
    Nes,
    N64,
    Snes,

    // Sega
    MasterSystem,
    Genesis,
    Dreamcast,

    // Sony
    Ps1,
}

/// All platform variants in default registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::GameBoy,
    Platform::Gba,
    Platform::Genesis,
    Platform::MasterSystem,
    Platform::Nes,
    Platform::N64,
    Platform::Snes,
    Platform::Ps1,
    Platform::Dreamcast,
];

impl Platform {
    /// Canonical short name used for CLI arguments and settings.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::GameBoy => "gb",
            Self::Gba => "gba",
            Self::Nes => "nes",
            Self::N64 => "n64",
            Self::Snes => "snes",
            Self::MasterSystem => "sms",
            Self::Genesis => "genesis",
            Self::Dreamcast => "dreamcast",
            Self::Ps1 => "ps1",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GameBoy => "Game Boy / Game Boy Color",
            Self::Gba => "Game Boy Advance",
            Self::Nes => "Nintendo Entertainment System",
            Self::N64 => "Nintendo 64",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::MasterSystem => "Sega Master System / Game Gear",
            Self::Genesis => "Sega Genesis / Mega Drive",
            Self::Dreamcast => "Sega Dreamcast",
            Self::Ps1 => "Sony PlayStation",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::GameBoy | Self::Gba | Self::Nes | Self::N64 | Self::Snes => "Nintendo",
            Self::MasterSystem | Self::Genesis | Self::Dreamcast => "Sega",
            Self::Ps1 => "Sony",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// The canonical short name always comes first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::GameBoy => &["gb", "gbc", "gameboy", "game boy"],
            Self::Gba => &["gba", "game boy advance", "gameboy advance"],
            Self::Nes => &["nes", "famicom", "fc"],
            Self::N64 => &["n64", "nintendo 64", "nintendo64"],
            Self::Snes => &["snes", "sfc", "super famicom", "super nintendo"],
            Self::MasterSystem => &["sms", "master system", "mastersystem", "gg", "game gear"],
            Self::Genesis => &["genesis", "megadrive", "mega drive", "md", "gen"],
            Self::Dreamcast => &["dreamcast", "dc"],
            Self::Ps1 => &["ps1", "psx", "playstation"],
        }
    }

    /// All variants, in default registration order.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.aliases().contains(&lower.as_str()))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
