//! N64 byte-order detection and normalization.
//!
//! Dumps circulate in four orderings of the same 32-bit words. The first
//! word of every image is 0x80371240, so its on-disk layout identifies the
//! ordering.

/// N64 ROM byte-order format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum N64Format {
    /// .z64: big-endian, no swap needed
    Z64,
    /// .v64: byte-swapped pairs
    V64,
    /// .n64: little-endian, reversed 4-byte groups
    N64,
    /// 16-bit halves of each word swapped
    WordSwapped,
}

pub const MAGIC_Z64: [u8; 4] = [0x80, 0x37, 0x12, 0x40];
pub const MAGIC_V64: [u8; 4] = [0x37, 0x80, 0x40, 0x12];
pub const MAGIC_N64: [u8; 4] = [0x40, 0x12, 0x37, 0x80];
pub const MAGIC_WORD_SWAPPED: [u8; 4] = [0x12, 0x40, 0x80, 0x37];

/// Detect the byte order from the first 4 bytes of a ROM.
pub fn detect_n64_format(magic: &[u8]) -> Option<N64Format> {
    match magic.get(..4)? {
        m if m == MAGIC_Z64 => Some(N64Format::Z64),
        m if m == MAGIC_V64 => Some(N64Format::V64),
        m if m == MAGIC_N64 => Some(N64Format::N64),
        m if m == MAGIC_WORD_SWAPPED => Some(N64Format::WordSwapped),
        _ => None,
    }
}

/// Rewrite a buffer in place into big-endian (.z64) order.
///
/// - V64: `[A,B,C,D]` → `[B,A,D,C]`
/// - N64: `[A,B,C,D]` → `[D,C,B,A]`
/// - WordSwapped: `[A,B,C,D]` → `[C,D,A,B]`
///
/// A trailing partial group is left untouched.
pub fn normalize_to_big_endian(data: &mut [u8], format: N64Format) {
    match format {
        N64Format::Z64 => {}
        N64Format::V64 => {
            for pair in data.chunks_exact_mut(2) {
                pair.swap(0, 1);
            }
        }
        N64Format::N64 => {
            for word in data.chunks_exact_mut(4) {
                word.reverse();
            }
        }
        N64Format::WordSwapped => {
            for word in data.chunks_exact_mut(4) {
                word.rotate_left(2);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/n64_byteorder_tests.rs"]
mod tests;
