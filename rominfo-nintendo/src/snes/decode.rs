//! Field decoding from a resolved 0x50-byte header window.
//!
//! The window starts 0x10 bytes before the internal header so the extended
//! maker code (0x00-0x01) is included. Offsets below are relative to it.

use super::chips::{cartridge_type, chip_name};
use super::interleave::ExtendedFormat;
use super::MapType;
use crate::licensee::snes_company_name;
use rominfo_core::RomProperties;
use rominfo_core::util::sanitize;

pub(crate) const HEADER_LEN: usize = 0x50;

const TITLE: usize = 0x10;
const TITLE_LEN: usize = 21;
const MAP_MODE: usize = 0x25;
const ROM_TYPE: usize = 0x26;
const ROM_SIZE: usize = 0x27;
const RAM_SIZE: usize = 0x28;
const REGION: usize = 0x29;
const LICENSEE: usize = 0x2A;
const VERSION: usize = 0x2B;
const COMPLEMENT: usize = 0x2C;
const CHECKSUM: usize = 0x2E;

/// Offset of the header window for a resolved layout.
pub(crate) fn header_offset(map: MapType, extended: ExtendedFormat) -> usize {
    let mut offset = 0x7FB0;
    // Extended images are in canonical order by now, header in the upper part
    if extended != ExtendedFormat::None {
        offset += 0x400000;
    }
    if map == MapType::HiRom {
        offset += 0x8000;
    }
    offset
}

pub(crate) fn memory_layout(map: MapType, extended: ExtendedFormat) -> &'static str {
    match (extended, map) {
        (ExtendedFormat::None, MapType::LoRom) => "LoROM",
        (ExtendedFormat::None, MapType::HiRom) => "HiROM",
        (_, MapType::LoRom) => "ExLoROM",
        (_, MapType::HiRom) => "ExHiROM",
    }
}

/// Rewrite a BS-X download header into the standard layout.
///
/// Satellaview games keep their title in 16 bytes and their speed byte
/// where the RAM size normally sits; size and region are not stored.
pub(crate) fn apply_bs_substitutions(header: &mut [u8], image_len: usize) {
    header[TITLE + 16..TITLE + TITLE_LEN].fill(b' ');
    header[MAP_MODE] = header[RAM_SIZE];
    header[ROM_TYPE] = 0xE5;
    let mut p = 0u32;
    while p < usize::BITS - 1 && (1usize << p) < image_len {
        p += 1;
    }
    header[ROM_SIZE] = p.saturating_sub(10) as u8;
    // 256 Kbit, the common copier default
    header[RAM_SIZE] = 0x05;
    header[REGION] = 0;
}

fn region_name(code: u8) -> &'static str {
    match code {
        0 => "Japan",
        1 => "USA/Canada",
        2 => "Europe/Asia/Oceania",
        3 => "Sweden",
        4 => "Finland",
        5 => "Denmark",
        6 => "France",
        7 => "Holland",
        8 => "Spain",
        9 => "Germany/Austria/Switzerland",
        10 => "Italy",
        11 => "Hong Kong/China",
        12 => "Indonesia",
        13 => "South Korea",
        _ => "",
    }
}

fn video_output(code: u8) -> &'static str {
    match code {
        0 | 1 | 13 => "NTSC",
        2..=12 => "PAL",
        _ => "",
    }
}

/// Company number from the licensee byte, or from the two base-36 maker
/// characters when the byte is 0x33.
fn company_code(header: &[u8]) -> Option<u16> {
    let licensee = header[LICENSEE];
    if licensee != 0x33 {
        return Some(u16::from(licensee >> 4) * 36 + u16::from(licensee & 0x0F));
    }
    let hi = char::from(header[0]).to_digit(36)?;
    let lo = char::from(header[1]).to_digit(36)?;
    Some((hi * 36 + lo) as u16)
}

fn rom_size_text(code: u8) -> String {
    1u64.checked_shl(u32::from(code.saturating_sub(7)))
        .map(|mbit| format!("{} Mbit", mbit))
        .unwrap_or_default()
}

fn ram_size_text(code: u8) -> String {
    match code {
        // No cartridge RAM
        0 => "0 Kbit".to_string(),
        1..=0x0C => format!("{} Kbit", 1u32 << (3 + code)),
        _ => String::new(),
    }
}

/// Decode the final property set.
///
/// `bs` marks Satellaview images, whose chip is always reported as "BS".
pub(crate) fn decode_fields(
    header: &[u8],
    map: MapType,
    extended: ExtendedFormat,
    bs: bool,
    special: &str,
) -> RomProperties {
    let mut props = RomProperties::new();

    props.set("title", sanitize(&header[TITLE..TITLE + TITLE_LEN]));
    props.set("memory_layout", memory_layout(map, extended));

    let map_mode = header[MAP_MODE];
    props.set(
        "rom_speed",
        if map_mode & 0x10 != 0 { "FastROM" } else { "SlowROM" },
    );

    let rom_type = header[ROM_TYPE];
    let chip = if bs {
        Some("BS")
    } else {
        chip_name(rom_type, map_mode, header[LICENSEE], header[ROM_SIZE])
    };
    props.set("cartridge_type", cartridge_type(rom_type, chip));
    props.set("chip", chip.unwrap_or_default());

    props.set("rom_size", rom_size_text(header[ROM_SIZE]));
    props.set("ram_size", ram_size_text(header[RAM_SIZE]));

    let region = header[REGION];
    props.set("region", region_name(region));
    props.set("video_output", video_output(region));

    match company_code(header) {
        Some(company) => {
            props.set("publisher", snes_company_name(company).unwrap_or_default());
            props.set("publisher_code", format!("{:04X}", company));
        }
        None => {
            props.set("publisher", "");
            props.set("publisher_code", "");
        }
    }

    props.set("version", format!("1.{}", header[VERSION]));
    let complement = u16::from_le_bytes([header[COMPLEMENT], header[COMPLEMENT + 1]]);
    let checksum = u16::from_le_bytes([header[CHECKSUM], header[CHECKSUM + 1]]);
    props.set("checksum", format!("{:04X}", checksum));
    props.set("checksum_complement", format!("{:04X}", complement));
    props.set("special_cartridge", special);

    props
}

#[cfg(test)]
#[path = "tests/decode_tests.rs"]
mod tests;
