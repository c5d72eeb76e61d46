//! 512-byte copier headers (SMC, SWC, FIG) prepended by backup devices.

pub(crate) const COPIER_HEADER_SIZE: usize = 512;

/// FIG header bytes 4-5 observed in the wild.
const FIG_SIGNATURES: [[u8; 2]; 8] = [
    [0x00, 0x80],
    [0x11, 0x02],
    [0x47, 0x83],
    [0x77, 0x83],
    [0xDD, 0x02],
    [0xDD, 0x82],
    [0xF7, 0x83],
    [0xFD, 0x82],
];

/// True when the buffer appears to start with a copier header.
///
/// Any one of four independent checks is enough:
/// - SMC/SWC identifier `AA BB 04` at 0x08
/// - a known FIG signature at 0x04
/// - a little-endian 8 KB block count at 0x00 that matches the image size
/// - exactly 512 bytes more than a multiple of 32 KB
pub(crate) fn has_copier_header(data: &[u8]) -> bool {
    if data.len() < COPIER_HEADER_SIZE {
        return false;
    }
    if data[8..11] == [0xAA, 0xBB, 0x04] {
        return true;
    }
    if FIG_SIGNATURES.contains(&[data[4], data[5]]) {
        return true;
    }
    let declared_blocks = usize::from(u16::from_le_bytes([data[0], data[1]]));
    if declared_blocks == (data.len() - COPIER_HEADER_SIZE) >> 13 {
        return true;
    }
    data.len() % 0x8000 == COPIER_HEADER_SIZE
}

/// Drop a copier header in place, if there is one.
pub(crate) fn strip_copier_header(data: &mut Vec<u8>) -> bool {
    if has_copier_header(data) {
        data.drain(..COPIER_HEADER_SIZE);
        true
    } else {
        false
    }
}
