//! Interleaved image correction.
//!
//! Some copiers store 32 KB blocks in a shuffled order. In a "type 1"
//! image the upper half of the ROM is woven between the blocks of the lower
//! half. Images over 4 MB may additionally store their two parts in either
//! order.

use super::MapType;

const BLOCK: usize = 0x8000;
pub(crate) const HALF_SPLIT: usize = 0x400000;

/// Where the 4 MB boundary of a >4 MB image sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtendedFormat {
    None,
    /// Header found 4 MB into the image
    BigFirst,
    /// Header found in the first 4 MB; the last 4 MB belong in front
    SmallFirst,
}

/// Undo type-1 interleaving over the first `size` bytes of `data`.
///
/// Blocks are taken in 64 KB pairs: block `2i` receives source block
/// `i + n` and block `2i + 1` receives source block `i`, where `n` is the
/// number of 64 KB units. `size` is clamped to the buffer; any tail that does
/// not fill a pair is left in place.
pub(crate) fn deinterleave_type1(data: &mut [u8], size: usize) {
    let n = size.min(data.len()) >> 16;
    if n == 0 {
        return;
    }
    let source = data[..n * 2 * BLOCK].to_vec();
    for i in 0..n {
        let upper = (i + n) * BLOCK;
        let lower = i * BLOCK;
        data[2 * i * BLOCK..(2 * i + 1) * BLOCK].copy_from_slice(&source[upper..upper + BLOCK]);
        data[(2 * i + 1) * BLOCK..(2 * i + 2) * BLOCK]
            .copy_from_slice(&source[lower..lower + BLOCK]);
    }
}

/// Correct an image whose header declared it interleaved and return the
/// memory model it resolves to.
///
/// "Tales" images (the two ExHiROM parts interleaved separately) come out
/// as HiROM; everything else swaps LoROM and HiROM.
pub(crate) fn convert_interleaved(
    data: &mut [u8],
    extended: ExtendedFormat,
    map: MapType,
    tales: bool,
) -> MapType {
    if !tales {
        let len = data.len();
        deinterleave_type1(data, len);
        return match map {
            MapType::HiRom => MapType::LoRom,
            MapType::LoRom => MapType::HiRom,
        };
    }

    if data.len() <= HALF_SPLIT {
        let len = data.len();
        deinterleave_type1(data, len);
    } else if extended == ExtendedFormat::BigFirst {
        let (front, back) = data.split_at_mut(HALF_SPLIT);
        deinterleave_type1(front, HALF_SPLIT);
        let back_len = back.len();
        deinterleave_type1(back, back_len);
    } else {
        let split = data.len() - HALF_SPLIT;
        let (front, back) = data.split_at_mut(split);
        deinterleave_type1(front, split);
        deinterleave_type1(back, HALF_SPLIT);
    }
    MapType::HiRom
}

/// Move the trailing 4 MB of an ExHiROM image in front of the rest.
pub(crate) fn swap_tales_halves(data: &mut [u8]) {
    if data.len() > HALF_SPLIT {
        data.rotate_right(HALF_SPLIT);
    }
}

#[cfg(test)]
#[path = "tests/interleave_tests.rs"]
mod tests;
