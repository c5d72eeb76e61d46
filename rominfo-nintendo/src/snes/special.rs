//! Satellaview (BS-X) and Sufami Turbo cartridges.

use super::scoring::best_header_offset;

pub(crate) const BSX_BIOS_TITLE: &[u8; 21] = b"Satellaview BS-X     ";
const SUFAMI_MAGIC: &[u8; 14] = b"BANDAI SFC-ADX";
const SUFAMI_BIOS_MAGIC: &[u8; 14] = b"SFC-ADX BACKUP";

/// Map-byte values of a BS-X flash cart header.
const BSX_FLASH_MAPS: [u8; 6] = [0x00, 0x80, 0x84, 0x9C, 0xBC, 0xFC];

/// Does the 27-byte window at a header start look like a downloadable
/// BS-X game?
///
/// The date field (0x16-0x17) must be a valid month or the erased value
/// `FF FF`; an all-zero date marks a blank slot and does not count.
pub(crate) fn is_bsx_game(window: &[u8]) -> bool {
    let Some(w) = window.get(..0x1B) else {
        return false;
    };
    let flags_ok = w[0x15] == 0 || w[0x15] & 0x83 == 0x80;
    let map_ok = matches!(w[0x18], 0x20 | 0x21 | 0x30 | 0x31);
    let company_ok = matches!(w[0x1A], 0x33 | 0xFF);
    if !(flags_ok && map_ok && company_ok) {
        return false;
    }
    if w[0x16] == 0 && w[0x17] == 0 {
        return false;
    }
    (w[0x16] == 0xFF && w[0x17] == 0xFF) || (w[0x16] & 0x0F == 0 && w[0x16] >> 4 < 13)
}

fn at(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

fn is_bsx_flash(data: &[u8], ho: usize) -> bool {
    matches!(at(data, ho + 0x13), Some(0x00 | 0xFF))
        && at(data, ho + 0x14) == Some(0x00)
        && at(data, ho + 0x15).is_some_and(|m| BSX_FLASH_MAPS.contains(&m))
        && matches!(at(data, ho + 0x1A), Some(0x33 | 0xFF))
}

/// A `Z?J` marker in the extended header announces a BS-X cartridge slot.
fn has_bsx_slot(data: &[u8], ho: usize) -> bool {
    let Some(ext) = ho.checked_sub(14).and_then(|s| data.get(s..ho)) else {
        return false;
    };
    if ext[0] != b'Z' || ext[3] != b'J' {
        return false;
    }
    if !(ext[1].is_ascii_uppercase() || ext[1].is_ascii_digit()) {
        return false;
    }
    (ext[4] == 0x00 && ext[10] == 0x00) || at(data, ho + 0x1A) == Some(0x33)
}

/// Classify add-on cartridges. Returns "" for an ordinary cart.
///
/// Later checks override earlier ones: Sufami Turbo beats a BS-X slot,
/// which beats a BS-X flash header.
pub(crate) fn special_cartridge(data: &[u8]) -> &'static str {
    let ho = best_header_offset(data);
    let mut kind = "";

    if is_bsx_flash(data, ho) {
        kind = "BS-X Flash";
    }

    if has_bsx_slot(data, ho) {
        kind = if data.get(ho..ho + 21) == Some(&BSX_BIOS_TITLE[..]) {
            "Satellaview BS-X"
        } else {
            "BS-X Slotted"
        };
    }

    if data.starts_with(SUFAMI_MAGIC) {
        kind = if data.get(16..30) == Some(&SUFAMI_BIOS_MAGIC[..]) {
            "Sufami Turbo BIOS"
        } else {
            "Sufami Turbo"
        };
    }

    if !kind.is_empty() {
        log::debug!("snes: {} (header at {:#X})", kind, ho);
    }
    kind
}

#[cfg(test)]
#[path = "tests/special_tests.rs"]
mod tests;
