//! Header-window plausibility scores.
//!
//! Two independent scorers live here. The Hi/Lo comparison scores decide
//! the memory map of the image; they may go negative and are only ever
//! compared with each other. The per-window validity score decides which
//! header to trust for special-cartridge detection and is clamped at zero.

use rominfo_core::util::all_ascii;

/// Score value used when a window lies past the end of the buffer.
pub(crate) const MISSING: i32 = i32::MIN;

pub(crate) const LOROM_HEADER: usize = 0x7FC0;
pub(crate) const HIROM_HEADER: usize = 0xFFC0;
pub(crate) const EXHIROM_HEADER: usize = 0x40FFC0;

// ---------------------------------------------------------------------------
// Hi/Lo comparison scores
// ---------------------------------------------------------------------------

/// Bytes of the 256-byte window that end just past the reset vector.
const WINDOW_LEN: usize = 0xFE;

/// Checks shared by both memory models, applied to the window ending at
/// the interrupt vectors.
fn common_score(w: &[u8]) -> i32 {
    let mut score = 0;
    let map = w[0xD5];

    if map & 0x0F < 4 {
        score += 2;
    }
    // Declared size above 48 Mbit
    if w[0xD7] >= 13 {
        score -= 1;
    }
    if w[0xDA] == 0x33 {
        score += 2;
    }
    let complement = u32::from(u16::from_le_bytes([w[0xDC], w[0xDD]]));
    let checksum = u32::from(u16::from_le_bytes([w[0xDE], w[0xDF]]));
    if complement + checksum == 0xFFFF {
        score += 2;
        if checksum != 0 {
            score += 1;
        }
    }
    let reset = u16::from_le_bytes([w[0xFC], w[0xFD]]);
    if reset > 0xFFB0 {
        score -= 2;
    }
    if reset & 0x8000 == 0 {
        score -= 6;
    }
    if !all_ascii(&w[0xB0..0xB6]) {
        score -= 1;
    }
    if !all_ascii(&w[0xC0..0xD6]) {
        score -= 1;
    }
    score
}

/// Score the HiROM window at `0xFF00 + offset`. `None` if it is missing.
pub(crate) fn score_hirom(data: &[u8], offset: usize) -> Option<i32> {
    let start = 0xFF00 + offset;
    let w = data.get(start..start + WINDOW_LEN)?;
    let mut score = common_score(w);

    if w[0xD4] == 0x20 {
        score += 2;
    }
    if w[0xD5] & 0x01 != 0 {
        score += 2;
    }
    // Mode 0x23 is SA-1, which is LoROM
    if w[0xD5] == 0x23 {
        score -= 2;
    }
    if data.len() > 3 * 1024 * 1024 {
        score += 4;
    }
    Some(score)
}

/// Score the LoROM window at `0x7F00 + offset`. `None` if it is missing.
pub(crate) fn score_lorom(data: &[u8], offset: usize) -> Option<i32> {
    let start = 0x7F00 + offset;
    let w = data.get(start..start + WINDOW_LEN)?;
    let mut score = common_score(w);

    if w[0xD5] & 0x01 == 0 {
        score += 3;
    }
    if w[0xD5] == 0x23 {
        score += 2;
    }
    if data.len() <= 16 * 1024 * 1024 {
        score += 2;
    }
    Some(score)
}

/// Both comparison scores at `offset`, with [`MISSING`] for absent windows.
pub(crate) fn hi_lo_scores(data: &[u8], offset: usize) -> (i32, i32) {
    (
        score_hirom(data, offset).unwrap_or(MISSING),
        score_lorom(data, offset).unwrap_or(MISSING),
    )
}

// ---------------------------------------------------------------------------
// Per-window validity score
// ---------------------------------------------------------------------------

const LIKELY_OPCODES: [u8; 6] = [0x78, 0x18, 0x38, 0x9C, 0x4C, 0x5C];
const PLAUSIBLE_OPCODES: [u8; 11] = [
    0xC2, 0xE2, 0xAD, 0xAE, 0xAC, 0xAF, 0xA9, 0xA2, 0xA0, 0x20, 0x22,
];
const IMPLAUSIBLE_OPCODES: [u8; 6] = [0x40, 0x60, 0x6B, 0xCD, 0xEC, 0xCC];
const UNLIKELY_OPCODES: [u8; 5] = [0x00, 0x02, 0xDB, 0x42, 0xFF];

fn opcode_score(opcode: u8) -> i32 {
    if LIKELY_OPCODES.contains(&opcode) {
        8
    } else if PLAUSIBLE_OPCODES.contains(&opcode) {
        4
    } else if IMPLAUSIBLE_OPCODES.contains(&opcode) {
        -4
    } else if UNLIKELY_OPCODES.contains(&opcode) {
        -8
    } else {
        0
    }
}

fn expected_mapper(offset: usize, mapper: u8) -> bool {
    matches!(
        (offset, mapper),
        (LOROM_HEADER, 0x20) | (LOROM_HEADER, 0x22) | (HIROM_HEADER, 0x21) | (EXHIROM_HEADER, 0x25)
    )
}

/// How much the 64-byte header at `offset` looks like the real one.
///
/// The first opcode executed at the reset vector carries the most weight;
/// a consistent checksum pair comes next. A window that is missing, or
/// whose opcode lies past the end of the buffer, scores zero.
pub(crate) fn infoblock_score(data: &[u8], offset: usize) -> i32 {
    let Some(h) = data.get(offset..offset + 0x40) else {
        return 0;
    };
    let reset = u16::from_le_bytes([h[0x3C], h[0x3D]]);
    if reset < 0x8000 {
        return 0;
    }
    let opcode_at = (offset & !0x7FFF) | usize::from(reset & 0x7FFF);
    let Some(&opcode) = data.get(opcode_at) else {
        return 0;
    };

    let mut score = opcode_score(opcode);

    let complement = u16::from_le_bytes([h[0x1C], h[0x1D]]);
    let checksum = u16::from_le_bytes([h[0x1E], h[0x1F]]);
    if u32::from(checksum) + u32::from(complement) == 0xFFFF && checksum != 0 && complement != 0 {
        score += 4;
    }
    if expected_mapper(offset, h[0x15] & 0xEF) {
        score += 2;
    }
    if h[0x1A] == 0x33 {
        score += 2;
    }
    if h[0x16] < 0x08 {
        score += 1;
    }
    if h[0x17] < 0x10 {
        score += 1;
    }
    if h[0x18] < 0x08 {
        score += 1;
    }
    if h[0x19] < 14 {
        score += 1;
    }

    score.max(0)
}

/// Header offset of the most plausible of the three standard windows.
///
/// ExHiROM gets a +4 bias whenever its window scores at all. Ties go to
/// LoROM, then HiROM.
pub(crate) fn best_header_offset(data: &[u8]) -> usize {
    let lo = infoblock_score(data, LOROM_HEADER);
    let hi = infoblock_score(data, HIROM_HEADER);
    let mut ex = infoblock_score(data, EXHIROM_HEADER);
    if ex > 0 {
        ex += 4;
    }

    if lo >= hi && lo >= ex {
        LOROM_HEADER
    } else if hi >= ex {
        HIROM_HEADER
    } else {
        EXHIROM_HEADER
    }
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
