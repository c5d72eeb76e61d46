//! Super Nintendo ROM header decoder.
//!
//! Supports:
//! - Headerless ROMs (.sfc)
//! - Copier images with a 512-byte SMC/SWC/FIG header (.smc, .swc, .fig)
//!
//! SNES images do not declare where their header lives. The layout is
//! resolved by scoring the LoROM and HiROM header windows, correcting
//! interleaved and split ExHiROM dumps along the way, before any field is
//! decoded. Satellaview and Sufami Turbo cartridges are recognized on top
//! of the resolved image.

mod chips;
mod copier;
mod decode;
mod interleave;
mod scoring;
mod special;

use std::path::Path;

use rominfo_core::util::{byte, field};
use rominfo_core::{Platform, RomInfoError, RomInfoParser, RomProperties};

use copier::{COPIER_HEADER_SIZE, has_copier_header, strip_copier_header};
use decode::{HEADER_LEN, apply_bs_substitutions, decode_fields, header_offset};
use interleave::{
    ExtendedFormat, HALF_SPLIT, convert_interleaved, deinterleave_type1, swap_tales_halves,
};
use scoring::{HIROM_HEADER, LOROM_HEADER, MISSING, hi_lo_scores};
use special::{BSX_BIOS_TITLE, is_bsx_game, special_cartridge};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// 8 MB of ROM plus a copier header.
pub(crate) const MAX_ROM_SIZE: usize = 0x800000 + COPIER_HEADER_SIZE;

/// Map/type identifier pairs that legitimately exceed 4 MB without being
/// split: SA-1 and S-DD1 in the LoROM window, SPC7110 in the HiROM window.
const LARGE_LOROM_IDS: [u16; 4] = [0x3423, 0x3523, 0x4332, 0x4532];
const LARGE_HIROM_IDS: [u16; 2] = [0xF93A, 0xF53A];

/// Titles whose headers defeat the scoring heuristics.
const FORCED_LOROM_TITLES: [(usize, &[u8]); 2] = [
    (0x7FC0, b"YUYU NO QUIZ DE GO!GO!"),
    (0xFFC0, b"BATMAN--REVENGE JOKER"),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapType {
    /// Mode 20: 32 KB banks
    LoRom,
    /// Mode 21: 64 KB banks
    HiRom,
}

/// Result of the Hi/Lo scoring pass.
#[derive(Debug)]
struct Scores {
    hi: i32,
    lo: i32,
    extended: ExtendedFormat,
    /// Start of the 4 MB part that holds the header
    header_reference: usize,
}

/// Memory model and interleave markers read from the winning header.
#[derive(Debug, PartialEq, Eq)]
struct MemoryModel {
    map: MapType,
    interleaved: bool,
    tales: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    map: MapType,
    extended: ExtendedFormat,
}

// ---------------------------------------------------------------------------
// Layout resolution
// ---------------------------------------------------------------------------

/// Type byte and map byte of a header window as one identifier.
fn map_identifier(data: &[u8], header: usize) -> Option<u16> {
    let w = data.get(header + 0x15..header + 0x17)?;
    Some(u16::from(w[1]) << 8 | u16::from(w[0]))
}

fn reset_vector(data: &[u8], header: usize) -> Option<u16> {
    let w = data.get(header + 0x3C..header + 0x3E)?;
    Some(u16::from_le_bytes([w[0], w[1]]))
}

/// Score both memory models, deciding the >4 MB orientation and undoing
/// type-1 interleaving when neither reset vector can be right.
fn score_image(data: &mut [u8], force_interleave_off: bool) -> Scores {
    let (hi, lo) = hi_lo_scores(data, 0);
    let mut scores = Scores {
        hi,
        lo,
        extended: ExtendedFormat::None,
        header_reference: 0,
    };

    let large_exception = map_identifier(data, LOROM_HEADER)
        .is_some_and(|id| LARGE_LOROM_IDS.contains(&id))
        || map_identifier(data, HIROM_HEADER).is_some_and(|id| LARGE_HIROM_IDS.contains(&id));

    if data.len() > HALF_SPLIT && !large_exception {
        let (swapped_hi, swapped_lo) = hi_lo_scores(data, HALF_SPLIT);
        if swapped_lo.max(swapped_hi) >= lo.max(hi) {
            scores.extended = ExtendedFormat::BigFirst;
            scores.hi = swapped_hi;
            scores.lo = swapped_lo;
            scores.header_reference = HALF_SPLIT;
        } else {
            scores.extended = ExtendedFormat::SmallFirst;
        }
        log::debug!("snes: image over 4 MB, {:?}", scores.extended);
    } else if !force_interleave_off
        && reset_vector(data, LOROM_HEADER).is_some_and(|v| v < 0x8000)
        && reset_vector(data, HIROM_HEADER).is_some_and(|v| v < 0x8000)
    {
        log::debug!("snes: both reset vectors invalid, undoing type-1 interleave");
        let len = data.len();
        deinterleave_type1(data, len);
        let (hi, lo) = hi_lo_scores(data, 0);
        scores.hi = hi;
        scores.lo = lo;
    }

    scores
}

fn forced_lorom(data: &[u8]) -> bool {
    FORCED_LOROM_TITLES
        .iter()
        .any(|&(offset, title)| data.get(offset..offset + title.len()) == Some(title))
}

/// Pick LoROM or HiROM (ties favour LoROM) and read the interleave
/// markers from that header's map byte.
fn find_memory_model(data: &[u8], scores: &Scores) -> Result<MemoryModel, RomInfoError> {
    let base = scores.header_reference;
    if scores.lo >= scores.hi {
        let map = byte(data, base + 0x7FD5)?;
        let marked = matches!(map & 0xF0, 0x20 | 0x30);
        Ok(MemoryModel {
            map: MapType::LoRom,
            interleaved: marked && matches!(map & 0x0F, 1 | 5),
            tales: marked && map & 0x0F == 5,
        })
    } else {
        let map = byte(data, base + 0xFFD5)?;
        Ok(MemoryModel {
            map: MapType::HiRom,
            interleaved: matches!(map & 0xF0, 0x20 | 0x30) && matches!(map & 0x0F, 0 | 3),
            tales: false,
        })
    }
}

/// One pass of layout resolution over `data`, correcting it in place.
///
/// Returns `Ok(None)` when interleave correction produced an image whose
/// scores contradict the map type it was corrected to; the caller then
/// retries on a fresh copy with correction disabled.
fn resolve_layout(
    data: &mut [u8],
    force_interleave_off: bool,
) -> Result<Option<Layout>, RomInfoError> {
    let scores = score_image(data, force_interleave_off);
    if scores.hi == MISSING && scores.lo == MISSING {
        return Err(RomInfoError::truncated(0x7F00, 0x100, data.len()));
    }

    let model = if forced_lorom(data) {
        log::debug!("snes: known title, forcing LoROM");
        MemoryModel {
            map: MapType::LoRom,
            interleaved: false,
            tales: false,
        }
    } else {
        find_memory_model(data, &scores)?
    };

    let mut map = model.map;
    if !force_interleave_off && model.interleaved {
        map = convert_interleaved(data, scores.extended, map, model.tales);
        let (hi, lo) = hi_lo_scores(data, 0);
        let contradicted = match map {
            MapType::HiRom => lo >= hi || hi < 0,
            MapType::LoRom => hi > lo || lo < 0,
        };
        if contradicted {
            log::debug!("snes: interleaved image scored against {:?}, retrying", map);
            return Ok(None);
        }
    }

    if model.tales || scores.extended == ExtendedFormat::SmallFirst {
        swap_tales_halves(data);
    }

    log::debug!("snes: resolved {:?} ({:?})", map, scores.extended);
    Ok(Some(Layout {
        map,
        extended: scores.extended,
    }))
}

/// Resolve the image layout, retrying at most once without interleave
/// correction.
fn resolve(data: Vec<u8>) -> Result<(Vec<u8>, Layout), RomInfoError> {
    let mut attempt = data.clone();
    if let Some(layout) = resolve_layout(&mut attempt, false)? {
        return Ok((attempt, layout));
    }
    let mut attempt = data;
    let layout = resolve_layout(&mut attempt, true)?.ok_or_else(|| {
        RomInfoError::malformed("layout unresolved with interleave correction disabled")
    })?;
    Ok((attempt, layout))
}

fn decode_image(mut data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
    if strip_copier_header(&mut data) {
        log::debug!("snes: stripped {}-byte copier header", COPIER_HEADER_SIZE);
    }
    let (data, layout) = resolve(data)?;
    let mut map = layout.map;

    let bsx_bios = data.get(LOROM_HEADER..LOROM_HEADER + BSX_BIOS_TITLE.len())
        == Some(&BSX_BIOS_TITLE[..]);
    let bs = if bsx_bios {
        map = MapType::LoRom;
        true
    } else {
        let lo = data.get(LOROM_HEADER..).is_some_and(is_bsx_game);
        let hi = data.get(HIROM_HEADER..).is_some_and(is_bsx_game);
        if lo || hi {
            map = if lo { MapType::LoRom } else { MapType::HiRom };
        }
        lo || hi
    };

    let offset = header_offset(map, layout.extended);
    let mut header = field(&data, offset, HEADER_LEN)?.to_vec();
    if bs && !bsx_bios {
        apply_bs_substitutions(&mut header, data.len());
    }

    let special = special_cartridge(&data);
    Ok(decode_fields(&header, map, layout.extended, bs, special))
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

fn size_in_range(data: &[u8]) -> bool {
    !data.is_empty() && data.len() <= MAX_ROM_SIZE
}

/// Parser for SNES / Super Famicom ROMs.
#[derive(Debug, Default)]
pub struct SnesParser;

impl SnesParser {
    pub fn new() -> Self {
        Self
    }
}

impl RomInfoParser for SnesParser {
    fn platform(&self) -> Platform {
        Platform::Snes
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["smc", "swc", "fig", "sfc"]
    }

    /// Only a copier header is conclusive; headerless images are picked by
    /// extension.
    fn is_valid_data(&self, data: &[u8]) -> bool {
        size_in_range(data) && has_copier_header(data)
    }

    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError> {
        if !size_in_range(&data) {
            return Err(RomInfoError::mismatch(format!(
                "{} bytes is outside the SNES image size range",
                data.len()
            )));
        }
        decode_image(data)
    }

    fn accepts_file(&self, data: &[u8]) -> bool {
        size_in_range(data)
    }

    fn read_limit(&self, _path: &Path) -> Option<u64> {
        // One byte past the cap so oversized files are rejected, not cut
        Some(MAX_ROM_SIZE as u64 + 1)
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
