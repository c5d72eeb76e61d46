//! NES ROM header decoder.
//!
//! Supports:
//! - iNES and NES 2.0 images (.nes, .nez): 16-byte header at offset 0
//! - UNIF images (.unf, .unif): 32-byte header followed by tagged chunks
//!
//! FDS images carry nothing useful and are not recognized.

use std::path::Path;

use rominfo_core::util::{byte, field, format_bytes, read_u32_le, require_len, sanitize};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties, file_extension};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const INES_MAGIC: &[u8; 4] = b"NES\x1A";
const UNIF_MAGIC: &[u8; 4] = b"UNIF";
const INES_HEADER_SIZE: usize = 16;
const UNIF_CHUNKS_START: usize = 0x20;
const CHUNK_HEADER_SIZE: usize = 8;
const PRG_UNIT: u64 = 16 * 1024;
const CHR_UNIT: u64 = 8 * 1024;

fn yes_if(flag: bool) -> &'static str {
    if flag { "yes" } else { "" }
}

// ---------------------------------------------------------------------------
// iNES / NES 2.0
// ---------------------------------------------------------------------------

/// ROM area size from the NES 2.0 size fields.
///
/// When the high nibble is 0xF the low byte is an exponent-multiplier pair
/// (`2^E * (MM * 2 + 1)` bytes) instead of a unit count.
fn rom_area_size(lsb: u8, msb_nibble: u8, unit: u64) -> Option<u64> {
    if msb_nibble == 0x0F {
        let exponent = u32::from(lsb >> 2);
        let multiplier = u64::from(lsb & 0x03) * 2 + 1;
        1u64.checked_shl(exponent)?.checked_mul(multiplier)
    } else {
        Some((u64::from(msb_nibble) << 8 | u64::from(lsb)) * unit)
    }
}

fn size_text(size: Option<u64>) -> String {
    size.map(format_bytes).unwrap_or_default()
}

fn decode_ines(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, INES_HEADER_SIZE)?;
    let mut props = RomProperties::new();

    let flags6 = byte(data, 0x06)?;
    let flags7 = byte(data, 0x07)?;
    props.set("battery", yes_if(flags6 & 0x02 != 0));
    props.set("trainer", yes_if(flags6 & 0x04 != 0));
    props.set("four_screen_vram", yes_if(flags6 & 0x08 != 0));

    let ines2 = flags7 & 0x0C == 0x08;
    props.set("header", if ines2 { "iNES 2.0" } else { "iNES" });

    let video = if !ines2 {
        ""
    } else if byte(data, 0x0C)? & 0x01 != 0 {
        "PAL"
    } else {
        "NTSC"
    };
    props.set("video_output", video);
    props.set("title", "");

    let mut mapper = u16::from(flags6 >> 4) | u16::from(flags7 & 0xF0);
    let (prg_msb, chr_msb) = if ines2 {
        mapper |= u16::from(byte(data, 0x08)? & 0x0F) << 8;
        let sizes = byte(data, 0x09)?;
        (sizes & 0x0F, sizes >> 4)
    } else {
        (0, 0)
    };
    props.set("mapper", mapper.to_string());
    props.set(
        "prg_rom_size",
        size_text(rom_area_size(byte(data, 0x04)?, prg_msb, PRG_UNIT)),
    );
    props.set(
        "chr_rom_size",
        size_text(rom_area_size(byte(data, 0x05)?, chr_msb, CHR_UNIT)),
    );

    Ok(props)
}

// ---------------------------------------------------------------------------
// UNIF
// ---------------------------------------------------------------------------

fn apply_unif_chunk(props: &mut RomProperties, id: &str, chunk: &[u8]) {
    match id {
        "NAME" => {
            let end = chunk.iter().position(|&b| b == 0).unwrap_or(chunk.len());
            props.set("title", sanitize(&chunk[..end]));
        }
        "TVCI" => {
            let video = match chunk.first() {
                Some(0x00) => "NTSC",
                Some(0x01) => "PAL",
                _ => "",
            };
            props.set("video_output", video);
        }
        "BATR" => {
            props.set("battery", "yes");
        }
        "MIRR" => {
            if chunk.first() == Some(&0x04) {
                props.set("four_screen_vram", "yes");
            }
        }
        "MAPR" => {
            let end = chunk.iter().position(|&b| b == 0).unwrap_or(chunk.len());
            props.set("mapper", sanitize(&chunk[..end]));
        }
        _ => {}
    }
}

/// Walk the chunk list. Every iteration consumes at least the 8-byte chunk
/// header, so the walk always terminates.
fn decode_unif(data: &[u8]) -> RomProperties {
    let mut props = RomProperties::new();
    props
        .set("header", "UNIF")
        .set("battery", "")
        .set("trainer", "")
        .set("four_screen_vram", "")
        .set("video_output", "")
        .set("title", "")
        .set("mapper", "");

    let mut pos = UNIF_CHUNKS_START;
    while data.len().saturating_sub(pos) >= CHUNK_HEADER_SIZE {
        let id = sanitize(&data[pos..pos + 4]);
        let size = match read_u32_le(data, pos + 4) {
            Ok(size) => size as usize,
            Err(_) => break,
        };
        let payload_start = pos + CHUNK_HEADER_SIZE;

        if size == 0 {
            log::debug!("nes: empty UNIF chunk {:?} at {:#X}", id, pos);
            pos = payload_start;
            continue;
        }

        let chunk = match field(data, payload_start, size) {
            Ok(chunk) => chunk,
            Err(_) => {
                let err = RomInfoError::malformed(format!(
                    "UNIF chunk {:?} at {:#X} declares {} bytes, {} remain",
                    id,
                    pos,
                    size,
                    data.len() - payload_start
                ));
                log::warn!("nes: {}", err);
                break;
            }
        };
        apply_unif_chunk(&mut props, &id, chunk);
        pos = payload_start + size;
    }

    props
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parser for iNES, NES 2.0 and UNIF images.
#[derive(Debug, Default)]
pub struct NesParser;

impl NesParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for NesParser {
    fn platform(&self) -> Platform {
        Platform::Nes
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["nes", "nez", "unf", "unif"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        data.starts_with(INES_MAGIC) || data.starts_with(UNIF_MAGIC)
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if data.starts_with(INES_MAGIC) {
            decode_ines(&data)
        } else if data.starts_with(UNIF_MAGIC) {
            Ok(decode_unif(&data))
        } else {
            Err(RomInfoError::mismatch("no iNES or UNIF magic"))
        }
    }

    /// UNIF metadata lives in chunks throughout the file; iNES needs only
    /// its 16-byte header.
    fn read_limit(&self, path: &Path) -> Option<u64> {
        match file_extension(path).as_deref() {
            Some("unf") | Some("unif") => None,
            _ => Some(INES_HEADER_SIZE as u64),
        }
    }
}

#[cfg(test)]
#[path = "tests/nes_tests.rs"]
mod tests;
