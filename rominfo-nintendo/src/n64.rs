//! Nintendo 64 ROM header decoder.
//!
//! Supports:
//! - Big-endian ROMs (.z64)
//! - Byte-swapped ROMs (.v64)
//! - Little-endian and word-swapped ROMs (.n64)
//!
//! The buffer is normalized to big-endian before any field is read. When the
//! IPL3 boot code is present, the CIC lockout variant is identified from it.

use std::path::Path;

use crate::n64_byteorder::{detect_n64_format, normalize_to_big_endian};
use rominfo_core::util::{byte, field, read_u32_be, require_len, sanitize, text};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HEADER_SIZE: usize = 0x40;
const BOOT_CODE_START: usize = 0x40;
const BOOT_CODE_END: usize = 0x1000;

// ---------------------------------------------------------------------------
// CIC detection
// ---------------------------------------------------------------------------

/// Identify the CIC variant from the CRC-32 of the boot code (0x40-0x1000).
/// Boot code must already be big-endian.
fn cic_name(boot_code: &[u8]) -> &'static str {
    match crc32fast::hash(boot_code) {
        0x6170A4A1 => "6101",
        0x90BB6CB5 => "6102",
        0x0B050EE0 => "6103",
        0x98BC2C86 => "6105",
        0xACC8580A => "6106",
        _ => "unknown",
    }
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

fn region_name(code: u8) -> &'static str {
    match code {
        0x41 => "Japan/USA",
        0x44 => "Germany",
        0x45 => "USA",
        0x46 => "France",
        0x49 => "Italy",
        0x4A => "Japan",
        0x50 | 0x58 | 0x20 | 0x21 | 0x38 | 0x70 => "Europe",
        0x53 => "Spain",
        0x55 | 0x59 => "Australia",
        // 0x00 demo carts, 0x37 betas
        _ => "",
    }
}

fn publisher_name(code: &str) -> &'static str {
    match code {
        "N" => "Nintendo",
        _ => "",
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn decode_header(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, HEADER_SIZE)?;
    let mut props = RomProperties::new();

    props.set("title", text(data, 0x20, 20)?);
    props.set("version", format!("{:08X}", read_u32_be(data, 0x0C)?));
    props.set("crc1", format!("{:08X}", read_u32_be(data, 0x10)?));
    props.set("crc2", format!("{:08X}", read_u32_be(data, 0x14)?));

    let publisher_code = sanitize(field(data, 0x38, 4)?);
    props.set("publisher", publisher_name(&publisher_code));
    props.set("publisher_code", publisher_code);

    props.set("code", text(data, 0x3C, 2)?);

    let region = byte(data, 0x3E)?;
    props.set("region", region_name(region));
    props.set("region_code", format!("{:02X}", region));

    if let Ok(boot_code) = field(data, BOOT_CODE_START, BOOT_CODE_END - BOOT_CODE_START) {
        props.set("cic", cic_name(boot_code));
    }

    Ok(props)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parser for Nintendo 64 ROMs in any byte order.
#[derive(Debug, Default)]
pub struct N64Parser;

impl N64Parser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for N64Parser {
    fn platform(&self) -> Platform {
        Platform::N64
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["n64", "v64", "z64"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        data.len() >= HEADER_SIZE && detect_n64_format(data).is_some()
    }

    fn decode(&self, mut data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        require_len(&data, HEADER_SIZE)?;
        let format = detect_n64_format(&data).ok_or_else(|| {
            RomInfoError::mismatch(format!(
                "unrecognized N64 magic [{:02X}, {:02X}, {:02X}, {:02X}]",
                data[0], data[1], data[2], data[3]
            ))
        })?;
        normalize_to_big_endian(&mut data, format);
        decode_header(&data)
    }

    fn read_limit(&self, _path: &Path) -> Option<u64> {
        Some(BOOT_CODE_END as u64)
    }
}

#[cfg(test)]
#[path = "tests/n64_tests.rs"]
mod tests;
