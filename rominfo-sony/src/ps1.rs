//! PlayStation (PS1/PSX) disc image decoder.
//!
//! Supports:
//! - Cooked ISO images (.iso)
//! - Raw 2352-byte sector images (.bin, .img, .mdf)
//!
//! The license text lives in the system area at sector 4. Images carry no
//! reliable signature there, so this format is picked by extension only.

use std::path::Path;

use crate::ps1_disc::{PVD_SECTOR, RAW_SECTOR_SIZE, is_raw_image, raw_to_iso, read_pvd};
use rominfo_core::util::text;
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

/// License text lines in a cooked image.
const LICENSE_LINE1: usize = 0x2000;
const LICENSE_LINE2: usize = 0x2020;
const LICENSE_LINE_LEN: usize = 32;

/// Raw sectors read from disk: the system area plus the PVD sector.
const READ_SECTORS: usize = PVD_SECTOR + 1;

/// Parser for PlayStation disc images.
#[derive(Debug, Default)]
pub struct Ps1Parser;

impl Ps1Parser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for Ps1Parser {
    fn platform(&self) -> Platform {
        Platform::Ps1
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["iso", "mdf", "img", "bin"]
    }

    fn sniffs_content(&self) -> bool {
        false
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if data.is_empty() {
            return Err(RomInfoError::mismatch("empty image"));
        }
        let iso = if is_raw_image(&data) {
            log::debug!("PS1: raw 2352-byte sectors, converting to ISO");
            raw_to_iso(&data)
        } else {
            data
        };

        let mut props = RomProperties::new();
        props.set("license_line1", text(&iso, LICENSE_LINE1, LICENSE_LINE_LEN)?);
        props.set("license_line2", text(&iso, LICENSE_LINE2, LICENSE_LINE_LEN)?);

        match read_pvd(&iso) {
            Ok(pvd) => {
                props.set("system_id", pvd.system_identifier);
                props.set("volume_id", pvd.volume_identifier);
            }
            Err(e) => log::debug!("PS1: no volume descriptor: {}", e),
        }

        Ok(props)
    }

    fn read_limit(&self, _path: &Path) -> Option<u64> {
        Some((READ_SECTORS * RAW_SECTOR_SIZE) as u64)
    }

    fn accepts_file(&self, data: &[u8]) -> bool {
        !data.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/ps1_tests.rs"]
mod tests;
