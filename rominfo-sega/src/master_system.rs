//! Sega Master System ROM header decoder.
//!
//! Supports:
//! - Master System and Mark III ROMs (.sms)
//! - Game Gear ROMs (.gg)
//! - SG-1000 ROMs (.sg)
//! - SDSC homebrew tags at 0x7FE0

use rominfo_core::util::{byte, field, read_cstr, read_u16_le, sanitize};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const TMR_SEGA: &[u8; 8] = b"TMR SEGA";

/// Every address a BIOS (or emulator) may look for the header at.
pub(crate) const HEADER_OFFSETS: [usize; 4] = [0x1FF0, 0x3FF0, 0x7FF0, 0x81F0];

/// Offset used when no signature is found.
const DEFAULT_HEADER: usize = 0x7FF0;

const HEADER_SIZE: usize = 0x10;

const SDSC_OFFSET: usize = 0x7FE0;
const SDSC_SIZE: usize = 0x10;

/// Smallest image worth reading: the first header candidate ends here.
const MIN_FILE_SIZE: usize = 0x2000;

// ---------------------------------------------------------------------------
// Header location
// ---------------------------------------------------------------------------

fn has_signature(data: &[u8], offset: usize) -> bool {
    field(data, offset, TMR_SEGA.len()).is_ok_and(|sig| sig == TMR_SEGA)
}

/// First offset, in probe order, carrying the `TMR SEGA` signature.
pub(crate) fn find_signature(data: &[u8]) -> Option<usize> {
    HEADER_OFFSETS
        .into_iter()
        .find(|&offset| has_signature(data, offset))
}

/// Header offset used for decoding. The default slot is checked last.
fn header_offset(data: &[u8]) -> usize {
    [0x1FF0, 0x3FF0, 0x81F0]
        .into_iter()
        .find(|&offset| has_signature(data, offset))
        .unwrap_or(DEFAULT_HEADER)
}

fn has_sdsc(data: &[u8]) -> bool {
    field(data, SDSC_OFFSET, 4).is_ok_and(|tag| tag == b"SDSC")
}

// ---------------------------------------------------------------------------
// Field helpers (shared with the Genesis fallback)
// ---------------------------------------------------------------------------

/// Console named by the high nibble of the last header byte.
pub(crate) fn console_name(region_nibble: u8) -> &'static str {
    match region_nibble {
        3 | 4 => "Sega Master System",
        5..=7 => "Game Gear",
        _ => "",
    }
}

pub(crate) fn region_name(region_nibble: u8) -> &'static str {
    match region_nibble {
        3 | 5 => "Japan",
        4 | 6 => "Export",
        7 => "International",
        _ => "",
    }
}

/// Product code: two BCD bytes plus a high-nibble prefix digit.
pub(crate) fn product_code(header: &[u8]) -> Result<String, RomInfoError> {
    Ok(format!(
        "{:02}{:02X}{:02X}",
        byte(header, 0x0E)? >> 4,
        byte(header, 0x0D)?,
        byte(header, 0x0C)?
    ))
}

pub(crate) fn version(header: &[u8]) -> Result<String, RomInfoError> {
    Ok(format!("{:02X}", byte(header, 0x0E)? & 0x0F))
}

/// Stored little-endian, as the Z80 reads it. Some header dumpers print the
/// two bytes in file order instead, which reverses them.
pub(crate) fn checksum(header: &[u8]) -> Result<String, RomInfoError> {
    Ok(format!("{:04X}", read_u16_le(header, 0x0A)?))
}

fn rom_size_name(code: u8) -> &'static str {
    match code {
        0xA => "8 KB",
        0xB => "16 KB",
        0xC => "32 KB",
        0xD => "48 KB",
        0xE => "64 KB",
        0xF => "128 KB",
        0x0 => "256 KB",
        0x1 => "512 KB",
        0x2 => "1024 KB",
        _ => "",
    }
}

/// Signature characters hidden in the checksum bytes, e.g. "KA" of "NAKA".
fn checksum_ascii(header: &[u8]) -> Result<Vec<String>, RomInfoError> {
    let word = sanitize(field(header, 0x0A, 2)?);
    Ok(word
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '/')
        .map(String::from)
        .collect())
}

/// String at a 16-bit ROM pointer. 0x0000 and 0xFFFF mean "none".
fn pointer_text(data: &[u8], ptr: u16) -> String {
    if ptr == 0 || ptr == 0xFFFF {
        return String::new();
    }
    read_cstr(data, ptr as usize)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn decode_header(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    let offset = header_offset(data);
    let header = field(data, offset, HEADER_SIZE)?;
    let mut props = RomProperties::new();

    props.set("header_id", sanitize(&header[..8]));
    props.set("reserved_word", sanitize(&header[0x08..0x0A]));
    props.set("checksum", checksum(header)?);
    props.set("checksum_ascii", checksum_ascii(header)?);
    props.set("code", product_code(header)?);
    props.set("version", version(header)?);

    let last = header[0x0F];
    props.set("console", console_name(last >> 4));
    props.set("region", region_name(last >> 4));
    props.set("rom_size", rom_size_name(last & 0x0F));

    match field(data, SDSC_OFFSET, SDSC_SIZE) {
        Ok(sdsc) if has_sdsc(data) && data.len() > SDSC_OFFSET + SDSC_SIZE => {
            log::debug!("SMS: SDSC tag present");
            props.set("version", format!("{:X}.{:02X}", sdsc[0x04], sdsc[0x05]));
            props.set(
                "date",
                format!(
                    "{:02X}{:02X}-{:02X}-{:02X}",
                    sdsc[0x09], sdsc[0x08], sdsc[0x07], sdsc[0x06]
                ),
            );
            props.set("author", pointer_text(data, read_u16_le(sdsc, 0x0A)?));
            props.set("title", pointer_text(data, read_u16_le(sdsc, 0x0C)?));
            props.set("description", pointer_text(data, read_u16_le(sdsc, 0x0E)?));
        }
        _ => {
            props.set("date", "");
            props.set("author", "");
            props.set("title", "");
            props.set("description", "");
        }
    }

    Ok(props)
}

/// Parser for Master System, Game Gear and SG-1000 ROMs.
#[derive(Debug, Default)]
pub struct MasterSystemParser;

impl MasterSystemParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for MasterSystemParser {
    fn platform(&self) -> Platform {
        Platform::MasterSystem
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["sms", "gg", "sg"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        find_signature(data).is_some() || has_sdsc(data)
    }

    /// Homebrew and some licensed carts customize the signature, so the
    /// header is decoded from its default slot even without one.
    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        decode_header(&data)
    }

    fn accepts_file(&self, data: &[u8]) -> bool {
        data.len() >= MIN_FILE_SIZE
    }
}

#[cfg(test)]
#[path = "tests/master_system_tests.rs"]
mod tests;
