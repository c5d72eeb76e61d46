//! Game Boy Advance ROM header decoder.
//!
//! The 192-byte cartridge header starts at offset 0: an ARM branch, the
//! compressed Nintendo logo at 0x04, then title, game code and maker code.

use std::path::Path;

use crate::licensee::maker_code_name;
use rominfo_core::util::{byte, field, require_len, sanitize, text};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HEADER_SIZE: usize = 0xC0;
const LOGO_OFFSET: usize = 0x04;

/// Compressed Nintendo logo at 0x04-0x9F, verified by the BIOS at boot.
pub(crate) const NINTENDO_LOGO: [u8; 156] = [
    0x24, 0xFF, 0xAE, 0x51, 0x69, 0x9A, 0xA2, 0x21, 0x3D, 0x84, 0x82, 0x0A, 0x84, 0xE4, 0x09, 0xAD,
    0x11, 0x24, 0x8B, 0x98, 0xC0, 0x81, 0x7F, 0x21, 0xA3, 0x52, 0xBE, 0x19, 0x93, 0x09, 0xCE, 0x20,
    0x10, 0x46, 0x4A, 0x4A, 0xF8, 0x27, 0x31, 0xEC, 0x58, 0xC7, 0xE8, 0x33, 0x82, 0xE3, 0xCE, 0xBF,
    0x85, 0xF4, 0xDF, 0x94, 0xCE, 0x4B, 0x09, 0xC1, 0x94, 0x56, 0x8A, 0xC0, 0x13, 0x72, 0xA7, 0xFC,
    0x9F, 0x84, 0x4D, 0x73, 0xA3, 0xCA, 0x9A, 0x61, 0x58, 0x97, 0xA3, 0x27, 0xFC, 0x03, 0x98, 0x76,
    0x23, 0x1D, 0xC7, 0x61, 0x03, 0x04, 0xAE, 0x56, 0xBF, 0x38, 0x84, 0x00, 0x40, 0xA7, 0x0E, 0xFD,
    0xFF, 0x52, 0xFE, 0x03, 0x6F, 0x95, 0x30, 0xF1, 0x97, 0xFB, 0xC0, 0x85, 0x60, 0xD6, 0x80, 0x25,
    0xA9, 0x63, 0xBE, 0x03, 0x01, 0x4E, 0x38, 0xE2, 0xF9, 0xA2, 0x34, 0xFF, 0xBB, 0x3E, 0x03, 0x44,
    0x78, 0x00, 0x90, 0xCB, 0x88, 0x11, 0x3A, 0x94, 0x65, 0xC0, 0x7C, 0x63, 0x87, 0xF0, 0x3C, 0xAF,
    0xD6, 0x25, 0xE4, 0x8B, 0x38, 0x0A, 0xAC, 0x72, 0x21, 0xD4, 0xF8, 0x07,
];

fn has_logo(data: &[u8]) -> bool {
    field(data, LOGO_OFFSET, NINTENDO_LOGO.len()).is_ok_and(|logo| logo == NINTENDO_LOGO)
}

fn decode_header(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, HEADER_SIZE)?;
    let mut props = RomProperties::new();

    props.set("title", text(data, 0xA0, 12)?);
    props.set("code", text(data, 0xAC, 4)?);

    let publisher_code = sanitize(field(data, 0xB0, 2)?);
    props.set(
        "publisher",
        maker_code_name(&publisher_code).unwrap_or_default(),
    );
    props.set("publisher_code", publisher_code);

    props.set("unit_code", format!("{:02X}", byte(data, 0xB3)?));
    props.set("version", format!("{:02X}", byte(data, 0xBC)?));
    props.set("header_checksum", format!("{:02X}", byte(data, 0xBD)?));
    props.set("platform", "Game Boy Advance");

    Ok(props)
}

/// Parser for Game Boy Advance ROMs.
#[derive(Debug, Default)]
pub struct GbaParser;

impl GbaParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for GbaParser {
    fn platform(&self) -> Platform {
        Platform::Gba
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["gba", "agb"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        has_logo(data)
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if !has_logo(&data) {
            return Err(RomInfoError::mismatch("Nintendo logo not found at 0x04"));
        }
        decode_header(&data)
    }

    fn read_limit(&self, _path: &Path) -> Option<u64> {
        Some(HEADER_SIZE as u64)
    }
}

#[cfg(test)]
#[path = "tests/gba_tests.rs"]
mod tests;
