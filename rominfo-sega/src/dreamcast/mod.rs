//! Sega Dreamcast disc image decoder.
//!
//! Supports:
//! - DiscJuggler images (.cdi)
//! - GD-ROM track lists (.gdi)
//!
//! Both locate the 256-byte IP.BIN boot block at the start of the data
//! track. CHD images are recognized and skipped.

mod cdi;
mod gdi;

use std::fs::File;
use std::path::Path;

use rominfo_core::util::{require_len, sanitize};
use rominfo_core::{
    Platform, RomInfoError, RomInfoParser, RomProperties, file_extension, read_file_prefix, settle,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const IP_BIN_SIZE: usize = 256;

/// MAME compressed hunks of data.
const CHD_MAGIC: &[u8; 8] = b"MComprHD";

/// IP.BIN fields in order, with their widths.
const IP_BIN_FIELDS: [(&str, usize); 11] = [
    ("hardware_id", 16),
    ("maker_id", 16),
    ("disc_id", 16),
    ("areas", 8),
    ("peripherals", 8),
    ("product_id", 10),
    ("product_version", 6),
    ("release_date", 16),
    ("bootfile", 16),
    ("publisher", 16),
    ("product_name", 128),
];

/// Bits of the hex peripherals field.
const PERIPHERALS: [(u32, &str); 22] = [
    (1 << 0, "Windows CE"),
    (1 << 4, "VGA Box"),
    (1 << 8, "Other Expansions"),
    (1 << 9, "Puru Puru Pack"),
    (1 << 10, "Mic Device"),
    (1 << 11, "Memory Card"),
    (1 << 12, "Start, A, B, Directions"),
    (1 << 13, "C Button"),
    (1 << 14, "D Button"),
    (1 << 15, "X Button"),
    (1 << 16, "Y Button"),
    (1 << 17, "Z Button"),
    (1 << 18, "Expanded Direction Buttons"),
    (1 << 19, "Analog R Trigger"),
    (1 << 20, "Analog L Trigger"),
    (1 << 21, "Analog Horizontal Controller"),
    (1 << 22, "Analog Vertical Controller"),
    (1 << 23, "Expanded Analog Horizontal"),
    (1 << 24, "Expanded Analog Vertical"),
    (1 << 25, "Gun"),
    (1 << 26, "Keyboard"),
    (1 << 27, "Mouse"),
];

// ---------------------------------------------------------------------------
// IP.BIN decoding
// ---------------------------------------------------------------------------

/// Names of the peripherals set in a hex bitmask such as "E000F10".
/// Text that is not hex yields no peripherals.
pub fn compatible_peripherals(code: &str) -> Vec<String> {
    let Ok(mask) = u32::from_str_radix(code.trim(), 16) else {
        return Vec::new();
    };
    PERIPHERALS
        .iter()
        .filter(|&&(bit, _)| mask & bit != 0)
        .map(|&(_, name)| name.to_string())
        .collect()
}

fn decode_ip_bin(data: &[u8]) -> Result<RomProperties, RomInfoError> {
    require_len(data, IP_BIN_SIZE)?;
    let ip = &data[..IP_BIN_SIZE];
    if !ip.is_ascii() {
        return Err(RomInfoError::mismatch("IP.BIN contains non-ASCII bytes"));
    }

    let mut props = RomProperties::new();
    let mut offset = 0;
    for (key, len) in IP_BIN_FIELDS {
        props.set(key, sanitize(&ip[offset..offset + len]));
        offset += len;
    }

    let peripherals = compatible_peripherals(props.text("peripherals").unwrap_or_default());
    props.set("compatible_peripherals", peripherals);
    Ok(props)
}

/// Parser for Dreamcast disc images.
#[derive(Debug, Default)]
pub struct DreamcastParser;

impl DreamcastParser {
    pub fn new() -> Self {
        Self
    }

    fn read_ip_bin(&self, path: &Path) -> Result<Vec<u8>, RomInfoError> {
        match file_extension(path).as_deref() {
            Some("cdi") => cdi::read_ip_bin(&mut File::open(path)?),
            Some("gdi") => gdi::read_ip_bin(path),
            Some("chd") => read_file_prefix(path, Some(CHD_MAGIC.len() as u64)),
            _ => Err(RomInfoError::mismatch(format!(
                "{} is not a CDI or GDI image",
                path.display()
            ))),
        }
    }
}

impl RomInfoParser for DreamcastParser {
    fn platform(&self) -> Platform {
        Platform::Dreamcast
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["cdi", "gdi", "chd"]
    }

    fn sniffs_content(&self) -> bool {
        false
    }

    /// Decode an IP.BIN block (the first 256 bytes of the buffer).
    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if data.starts_with(CHD_MAGIC) {
            return Err(RomInfoError::unsupported("CHD images are not decoded"));
        }
        decode_ip_bin(&data)
    }

    fn parse(&self, path: &Path) -> Result<RomProperties, RomInfoError> {
        let result = self.read_ip_bin(path).and_then(|data| self.decode(data));
        settle(self.platform(), result)
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
