//! Sega Genesis / Mega Drive ROM header decoder.
//!
//! Supports:
//! - Plain big-endian images (.gen, .md, .bin)
//! - Super Magic Drive images with a 512-byte copier header (.smd)
//! - Multi Game Doctor interleaved images (.md)
//! - 32X images (.32x)
//! - Master System images carried under Genesis extensions
//!
//! MDX (XOR-encoded) images are recognized and skipped.

use std::path::Path;

use crate::master_system;
use rominfo_core::util::{field, read_u16_be, require_len, sanitize, text};
use rominfo_core::{
    Platform, RomInfoError, RomInfoParser, RomProperties, file_extension, read_file_prefix, settle,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HEADER_END: usize = 0x200;
const CONSOLE_NAME: usize = 0x100;

const SMD_HEADER_SIZE: usize = 0x200;
const SMD_SIGNATURE: [u8; 3] = [0xAA, 0xBB, 0x06];
const SMD_BLOCK: usize = 0x4000;

/// Fingerprints of interleaved dumps that lack the usual "EA"/"SG" pairs.
/// Offsets below 0x2000 hold for MD interleaving as well as SMD.
const INTERLEAVE_EDGE_CASES: [(usize, &[u8]); 11] = [
    (0x00F0, b"OL R-AEAL"),        // Jap Baseball 94
    (0x00F3, b"optrEtranet"),      // Devilish Mahjong Tower
    (0x0100, b"\x3C\x00\x00\x3C"), // Golden Axe 2 Beta
    (0x0090, b"OEARC   "),         // Omega Race
    (0x6708, b" NTEBDKN"),         // Budokan Beta
    (0x02C0, b"so fCXP"),          // CDX-Pro 1.8 BIOS
    (0x0090, b"sio-Wyo "),         // Ishido (hacked)
    (0x0088, b"SS  CAL "),         // Onslaught
    (0x3648, b"SG NEPIE"),         // Tram Terror Pirate
    (0x0007, b"\x1C\x0A\xB8\x0A"), // Breath of Fire 3 Chinese
    (0x1CBE, b"@TTI>"),            // Tetris Pirate
];

// ---------------------------------------------------------------------------
// Interleave detection
// ---------------------------------------------------------------------------

fn bytes_at(data: &[u8], offset: usize, expected: &[u8]) -> bool {
    field(data, offset, expected.len()).is_ok_and(|b| b == expected)
}

/// Test for SMD or MD interleaving in headerless data.
pub(crate) fn is_interleaved(data: &[u8]) -> bool {
    // "SEGA" split into odd bytes (first half) and even bytes (second half)
    if bytes_at(data, 0x80, b"EA") && bytes_at(data, 0x2080, b"SG") {
        return true;
    }
    // Phelios USA redump, Target Earth, Klax (Namcot)
    if bytes_at(data, 0x80, b"SG") && bytes_at(data, 0x2080, b" E") {
        return true;
    }
    // MD: odd bytes of "SEGA MEGA DRIVE" or "SEGA GENESIS"
    if bytes_at(data, 0x80, b"EAMG") || bytes_at(data, 0x80, b"EAGN") {
        return true;
    }
    INTERLEAVE_EDGE_CASES
        .iter()
        .any(|&(offset, expected)| bytes_at(data, offset, expected))
}

/// Detect the 512-byte header written by Super Magic Drive copiers.
pub(crate) fn has_smd_header(data: &[u8]) -> bool {
    if data.len() < SMD_HEADER_SIZE {
        return false;
    }
    if bytes_at(data, 0x08, &SMD_SIGNATURE) {
        return true;
    }
    // Zeroed or corrupt header: no console name and an odd number of
    // 512-byte blocks
    if !bytes_at(data, CONSOLE_NAME, b"SEGA")
        && data.len().is_multiple_of(SMD_HEADER_SIZE)
        && (data.len() / SMD_HEADER_SIZE) % 2 == 1
    {
        return true;
    }
    is_interleaved(&data[SMD_HEADER_SIZE..])
}

fn has_console_name(data: &[u8]) -> bool {
    bytes_at(data, CONSOLE_NAME, b"SEGA MEGA DRIVE")
        || bytes_at(data, CONSOLE_NAME, b"SEGA GENESIS")
}

// ---------------------------------------------------------------------------
// De-interleaving
// ---------------------------------------------------------------------------

/// Undo SMD interleaving: each 16 KB block stores odd bytes in its first
/// half and even bytes in its second half. A trailing partial block is
/// left as is.
pub(crate) fn deinterleave_smd(data: &mut [u8]) {
    let mut scratch = vec![0u8; SMD_BLOCK];
    for block in data.chunks_exact_mut(SMD_BLOCK) {
        scratch.copy_from_slice(block);
        let (odd, even) = scratch.split_at(SMD_BLOCK / 2);
        for (i, pair) in block.chunks_exact_mut(2).enumerate() {
            pair[0] = even[i];
            pair[1] = odd[i];
        }
    }
}

/// Undo MD interleaving: the same split as SMD, applied once across the
/// whole image.
pub(crate) fn deinterleave_md(data: &mut [u8]) {
    let source = data.to_vec();
    let (odd, even) = source.split_at(data.len() / 2);
    for (i, b) in data.iter_mut().enumerate() {
        *b = if i % 2 == 0 { even[i / 2] } else { odd[i / 2] };
    }
}

/// Return the image in plain big-endian layout.
fn normalize(mut data: Vec<u8>) -> Vec<u8> {
    if has_smd_header(&data) {
        log::debug!("Genesis: SMD copier header, de-interleaving 16 KB blocks");
        data.drain(..SMD_HEADER_SIZE);
        deinterleave_smd(&mut data);
    } else if is_interleaved(&data) {
        log::debug!("Genesis: MD interleaving detected");
        deinterleave_md(&mut data);
    }
    data
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

fn device_name(code: char) -> Option<&'static str> {
    match code {
        'J' => Some("3B Joypad"),
        '6' => Some("6B Joypad"),
        'K' => Some("Keyboard"),
        'P' => Some("Printer"),
        'B' => Some("Control Ball"),
        'F' => Some("Floppy Drive"),
        'L' => Some("Activator"),
        '4' => Some("Team Player"),
        '0' => Some("MS Joypad"),
        'R' => Some("RS232C Serial"),
        'T' => Some("Tablet"),
        'V' => Some("Paddle"),
        'C' => Some("CD-ROM"),
        'M' => Some("Mega Mouse"),
        'G' => Some("Menacer"),
        _ => None,
    }
}

/// Publisher by the company field of the copyright line: a four letter
/// name like "SEGA" or a "T-" number.
fn publisher_name(code: &str) -> Option<&'static str> {
    match code {
        "ACLD" => Some("Ballistic"),
        "RSI" => Some("Razorsoft"),
        "SEGA" => Some("SEGA"),
        "TREC" => Some("Treco"),
        "VRGN" => Some("Virgin Games"),
        "WSTN" => Some("Westone"),
        "10" => Some("Takara"),
        "11" => Some("Taito or Accolade"),
        "12" => Some("Capcom"),
        "13" => Some("Data East"),
        "14" => Some("Namco or Tengen"),
        "15" => Some("Sunsoft"),
        "16" => Some("Bandai"),
        "17" => Some("Dempa"),
        "18" => Some("Technosoft"),
        "19" => Some("Technosoft"),
        "20" => Some("Asmik"),
        "22" => Some("Micronet"),
        "23" => Some("Vic Tokai"),
        "24" => Some("American Sammy"),
        "29" => Some("Kyugo"),
        "32" => Some("Wolfteam"),
        "33" => Some("Kaneko"),
        "35" => Some("Toaplan"),
        "36" => Some("Tecmo"),
        "40" => Some("Toaplan"),
        "42" => Some("UFL Company Limited"),
        "43" => Some("Human"),
        "45" => Some("Game Arts"),
        "47" => Some("Sage's Creation"),
        "48" => Some("Tengen"),
        "49" => Some("Renovation or Telenet"),
        "50" => Some("Electronic Arts"),
        "56" => Some("Razorsoft"),
        "58" => Some("Mentrix"),
        "60" => Some("Victor Musical Ind."),
        "69" => Some("Arena"),
        "70" => Some("Virgin"),
        "73" => Some("Soft Vision"),
        "74" => Some("Palsoft"),
        "76" => Some("Koei"),
        "79" => Some("U.S. Gold"),
        "81" => Some("Acclaim/Flying Edge"),
        "83" => Some("Gametek"),
        "86" => Some("Absolute"),
        "87" => Some("Mindscape"),
        "93" => Some("Sony"),
        "95" => Some("Konami"),
        "97" => Some("Tradewest"),
        "100" => Some("T*HQ Software"),
        "101" => Some("Tecmagik"),
        "112" => Some("Designer Software"),
        "113" => Some("Psygnosis"),
        "119" => Some("Accolade"),
        "120" => Some("Code Masters"),
        "125" => Some("Interplay"),
        "130" => Some("Activision"),
        "132" => Some("Shiny & Playmates"),
        "144" => Some("Atlus"),
        "151" => Some("Infogrames"),
        "161" => Some("Fox Interactive"),
        "177" => Some("Ubisoft"),
        "239" => Some("Disney Interactive"),
        _ => None,
    }
}

/// Resolve "(C)SEGA 1991.APR" or "(C)T-12 1992.JAN" into a publisher.
fn publisher_from_copyright(copyright: &str) -> &'static str {
    let company: String = copyright.chars().skip(3).take(4).collect();
    let company = match company.rfind('-') {
        Some(dash) => &company[dash + 1..],
        None => &company[..],
    };
    publisher_name(company.trim_end()).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn decode_header(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, HEADER_END)?;
    let mut props = RomProperties::new();

    props.set("console", text(data, 0x100, 16)?);
    let copyright = text(data, 0x110, 16)?;
    props.set("publisher", publisher_from_copyright(&copyright));
    props.set("copyright", copyright);
    props.set("foreign_title", text(data, 0x120, 48)?);
    props.set("title", text(data, 0x150, 48)?);

    let kind = field(data, 0x180, 2)?;
    let classification = if kind == b"GM" {
        "Game".to_string()
    } else {
        format!("Education ({})", sanitize(kind))
    };
    props.set("classification", classification);

    props.set("code", text(data, 0x183, 8)?);
    props.set("version", text(data, 0x18C, 2)?);
    props.set("checksum", format!("{:04X}", read_u16_be(data, 0x18E)?));

    let device_codes = text(data, 0x190, 16)?;
    let devices: Vec<&str> = device_codes.chars().filter_map(device_name).collect();
    props.set("devices", devices.join(", "));
    props.set("device_codes", device_codes);

    props.set("memo", text(data, 0x1C8, 40)?);
    props.set("country_codes", text(data, 0x1F0, 16)?);

    Ok(props)
}

/// Same keys as a Genesis header, filled from an embedded Master System
/// header. Fields the Master System header lacks are left empty.
fn decode_master_system(data: &[u8], offset: usize) -> Result<RomProperties, RomInfoError> {
    let header = field(data, offset, 0x10)?;
    let nibble = header[0x0F] >> 4;
    let mut props = RomProperties::new();

    props.set("console", master_system::console_name(nibble));
    props.set("code", master_system::product_code(header)?);
    props.set("version", master_system::version(header)?);
    props.set("checksum", master_system::checksum(header)?);
    props.set("country_codes", master_system::region_name(nibble));
    for key in [
        "copyright",
        "publisher",
        "foreign_title",
        "title",
        "classification",
        "device_codes",
        "devices",
        "memo",
    ] {
        props.set(key, "");
    }

    Ok(props)
}

/// Parser for Genesis / Mega Drive ROMs.
#[derive(Debug, Default)]
pub struct GenesisParser;

impl GenesisParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for GenesisParser {
    fn platform(&self) -> Platform {
        Platform::Genesis
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["smd", "gen", "32x", "md", "bin", "iso", "mdx"]
    }

    fn is_valid_data(&self, data: &[u8]) -> bool {
        has_console_name(data) || has_smd_header(data) || is_interleaved(data)
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if data.is_empty() {
            return Err(RomInfoError::mismatch("empty image"));
        }
        let data = normalize(data);

        let console = field(&data, CONSOLE_NAME, 16)
            .map(sanitize)
            .unwrap_or_default();
        if console.contains("SEGA") {
            return decode_header(&data);
        }
        if let Some(offset) = master_system::find_signature(&data) {
            log::debug!("Genesis: Master System header at {:#06X}", offset);
            return decode_master_system(&data, offset);
        }
        Err(RomInfoError::mismatch(
            "no SEGA console name or Master System header",
        ))
    }

    fn accepts_file(&self, data: &[u8]) -> bool {
        !data.is_empty()
    }

    fn parse(&self, path: &Path) -> Result<RomProperties, RomInfoError> {
        if file_extension(path).as_deref() == Some("mdx") {
            return settle(
                self.platform(),
                Err(RomInfoError::unsupported(format!(
                    "MDX image {} is not decoded",
                    path.display()
                ))),
            );
        }
        let data = read_file_prefix(path, None)?;
        if !self.accepts_file(&data) {
            return Ok(RomProperties::new());
        }
        Ok(self.parse_buffer(data))
    }
}

#[cfg(test)]
#[path = "tests/genesis_tests.rs"]
mod tests;
