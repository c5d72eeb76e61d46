//! Facade over the per-vendor decoders.
//!
//! Frontends build a [`ParserRegistry`] once (usually through
//! [`default_registry`]) and dispatch files or buffers through it. Settings
//! and the concurrent [`ParsePool`] live here too so every frontend shares
//! them.

pub mod pool;
pub mod registry;
pub mod settings;

pub use pool::{DispatchMode, ParseOutcome, ParsePool};
pub use registry::{ParserRegistry, RegisteredParser};
pub use settings::{OutputFormat, Settings, SettingsError, settings_path};

pub use rominfo_core::{Platform, PropValue, RomInfoError, RomInfoParser, RomProperties};

/// Registry with every supported format, in dispatch order.
///
/// Genesis comes before PlayStation: both claim `.bin` and `.iso`, and the
/// Genesis decoder rejects images without a SEGA (or embedded Master
/// System) signature, while the PlayStation decoder accepts any image.
pub fn default_registry() -> ParserRegistry {
    let mut registry = ParserRegistry::new();

    registry
        .register(rominfo_nintendo::GameBoyParser::new())
        .register(rominfo_nintendo::GbaParser::new())
        .register(rominfo_sega::GenesisParser::new())
        .register(rominfo_sega::MasterSystemParser::new())
        .register(rominfo_nintendo::NesParser::new())
        .register(rominfo_nintendo::N64Parser::new())
        .register(rominfo_nintendo::SnesParser::new())
        .register(rominfo_sony::Ps1Parser::new())
        .register(rominfo_sega::DreamcastParser::new());

    registry
}
