//! Game Boy / Game Boy Color ROM header decoder.
//!
//! Supports:
//! - Game Boy ROMs (.gb)
//! - Game Boy Color ROMs (.gbc, .cgb)
//! - Super Game Boy enhanced ROMs (.sgb)
//!
//! The cartridge header occupies 0x0100-0x014F; only the first 0x150 bytes
//! of a file are ever read.

use std::path::Path;

use crate::licensee::maker_code_name;
use rominfo_core::util::{byte, field, require_len, sanitize, text};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HEADER_END: usize = 0x150;
const LOGO_OFFSET: usize = 0x104;

/// Boot ROM logo bitmap at 0x0104-0x0133. The console locks up if it differs.
pub(crate) const GB_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

fn cartridge_type_name(code: u8) -> &'static str {
    match code {
        0x00 => "ROM",
        0x01 => "ROM+MBC1",
        0x02 => "ROM+MBC1+RAM",
        0x03 => "ROM+MBC1+RAM+BATT",
        0x05 => "ROM+MBC2",
        0x06 => "ROM+MBC2+BATT",
        0x0B => "ROM+MMM01",
        0x0C => "ROM+MMM01+RAM",
        0x0D => "ROM+MMM01+RAM+BATT",
        0x0F => "ROM+MBC3+TIMER+BATT",
        0x10 => "ROM+MBC3+TIMER+RAM+BATT",
        0x11 => "ROM+MBC3",
        0x12 => "ROM+MBC3+RAM",
        0x13 => "ROM+MBC3+RAM+BATT",
        0x19 => "ROM+MBC5",
        0x1A => "ROM+MBC5+RAM",
        0x1B => "ROM+MBC5+RAM+BATT",
        0x1C => "ROM+MBC5+RUMBLE",
        0x1D => "ROM+MBC5+RUMBLE+RAM",
        0x1E => "ROM+MBC5+RUMBLE+RAM+BATT",
        0x22 => "ROM+MBC7+BATT",
        0x55 => "GameGenie",
        0x56 => "GameShark V3.0",
        0xFC => "ROM+POCKET CAMERA",
        0xFD => "ROM+BANDAI TAMA5",
        0xFE => "ROM+HuC-3",
        0xFF => "ROM+HuC-1",
        _ => "",
    }
}

fn rom_size_name(code: u8) -> &'static str {
    match code {
        0 => "32KB",
        1 => "64KB",
        2 => "128KB",
        3 => "256KB",
        4 => "512KB",
        5 => "1MB",
        6 => "2MB",
        7 => "4MB",
        _ => "",
    }
}

fn ram_size_name(code: u8) -> &'static str {
    match code {
        0 => "0KB",
        1 => "2KB",
        2 => "8KB",
        3 => "32KB",
        4 => "128KB",
        5 => "64KB",
        _ => "",
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn has_logo(data: &[u8]) -> bool {
    field(data, LOGO_OFFSET, GB_LOGO.len()).is_ok_and(|logo| logo == GB_LOGO)
}

fn platform_name(cgb_flag: u8, sgb_flag: u8) -> &'static str {
    if cgb_flag & 0x80 != 0 {
        "Game Boy Color"
    } else if sgb_flag == 0x03 {
        "Super Game Boy"
    } else {
        "Game Boy"
    }
}

fn decode_header(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, HEADER_END)?;
    let mut props = RomProperties::new();

    props.set("title", text(data, 0x134, 16)?);

    let sgb_flag = byte(data, 0x146)?;
    props.set("platform", platform_name(byte(data, 0x143)?, sgb_flag));
    props.set("sgb_support", if sgb_flag == 0x03 { "yes" } else { "" });

    // 0x33 in the old licensee byte defers to the two-character new code
    let old_licensee = byte(data, 0x14B)?;
    let publisher_code = if old_licensee == 0x33 {
        sanitize(field(data, 0x144, 2)?)
    } else {
        format!("{:02X}", old_licensee)
    };
    props.set(
        "publisher",
        maker_code_name(&publisher_code).unwrap_or_default(),
    );
    props.set("publisher_code", publisher_code);

    let cart_type = byte(data, 0x147)?;
    props.set("cartridge_type", cartridge_type_name(cart_type));
    props.set("cartridge_type_code", format!("{:02X}", cart_type));

    let rom_size = byte(data, 0x148)?;
    props.set("rom_size", rom_size_name(rom_size));
    props.set("rom_size_code", format!("{:02X}", rom_size));

    let ram_size = byte(data, 0x149)?;
    props.set("ram_size", ram_size_name(ram_size));
    props.set("ram_size_code", format!("{:02X}", ram_size));

    props.set(
        "destination",
        if byte(data, 0x14A)? == 0x00 { "Japan" } else { "" },
    );
    props.set("version", format!("{:02X}", byte(data, 0x14C)?));
    props.set("header_checksum", format!("{:02X}", byte(data, 0x14D)?));

    let global = (u16::from(byte(data, 0x14E)?) << 8) | u16::from(byte(data, 0x14F)?);
    props.set("global_checksum", format!("{:04X}", global));

    Ok(props)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parser for Game Boy and Game Boy Color ROMs.
#[derive(Debug, Default)]
pub struct GameBoyParser;

impl GameBoyParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for GameBoyParser {
    fn platform(&self) -> Platform {
        Platform::GameBoy
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["gb", "gbc", "cgb", "sgb"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        has_logo(data)
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if !has_logo(&data) {
            return Err(RomInfoError::mismatch("Nintendo logo not found at 0x104"));
        }
        decode_header(&data)
    }

    fn read_limit(&self, _path: &Path) -> Option<u64> {
        Some(HEADER_END as u64)
    }
}

#[cfg(test)]
#[path = "tests/gameboy_tests.rs"]
mod tests;
