//! Byte-field extraction shared by every decoder.
//!
//! All reads are bounds-checked and report [`RomInfoError::Truncated`]
//! instead of panicking, so a short buffer can never cause an
//! out-of-range access.

use crate::RomInfoError;

fn keeps(b: u8) -> bool {
    (0x20..0x7F).contains(&b) || matches!(b, b'\t' | b'\n' | b'\r')
}

/// Turn a raw header field into display text.
///
/// Printable ASCII plus tab, CR and LF pass through; every other byte
/// becomes a space. Leading and trailing whitespace is trimmed.
pub fn sanitize(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| if keeps(b) { b as char } else { ' ' })
        .collect();
    s.trim().to_string()
}

/// True when every byte is printable ASCII (0x20..=0x7E).
pub fn all_ascii(buf: &[u8]) -> bool {
    buf.iter().all(|b| (0x20..0x7F).contains(b))
}

/// Borrow `len` bytes at `offset`.
pub fn field(data: &[u8], offset: usize, len: usize) -> Result<&[u8], RomInfoError> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| RomInfoError::truncated(offset, len, data.len()))
}

/// Sanitized text of the field at `offset`.
pub fn text(data: &[u8], offset: usize, len: usize) -> Result<String, RomInfoError> {
    field(data, offset, len).map(sanitize)
}

pub fn byte(data: &[u8], offset: usize) -> Result<u8, RomInfoError> {
    data.get(offset)
        .copied()
        .ok_or_else(|| RomInfoError::truncated(offset, 1, data.len()))
}

pub fn read_u16_le(data: &[u8], offset: usize) -> Result<u16, RomInfoError> {
    let b = field(data, offset, 2)?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

pub fn read_u16_be(data: &[u8], offset: usize) -> Result<u16, RomInfoError> {
    let b = field(data, offset, 2)?;
    Ok(u16::from_be_bytes([b[0], b[1]]))
}

pub fn read_u32_le(data: &[u8], offset: usize) -> Result<u32, RomInfoError> {
    let b = field(data, offset, 4)?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub fn read_u32_be(data: &[u8], offset: usize) -> Result<u32, RomInfoError> {
    let b = field(data, offset, 4)?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

/// Fail with `Truncated` unless the buffer holds at least `len` bytes.
pub fn require_len(data: &[u8], len: usize) -> Result<(), RomInfoError> {
    if data.len() < len {
        Err(RomInfoError::truncated(0, len, data.len()))
    } else {
        Ok(())
    }
}

/// Read a NUL-terminated string starting at `offset`.
///
/// The scan stops at the first NUL or at the end of the buffer, whichever
/// comes first. An offset outside the buffer yields an empty string.
pub fn read_cstr(data: &[u8], offset: usize) -> String {
    let tail = data.get(offset..).unwrap_or(&[]);
    let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    sanitize(&tail[..end])
}

/// Format a byte count as a human-readable size string (e.g., "4 KB", "2 MB").
///
/// Uses exact integer division; values that aren't clean multiples of KB/MB
/// are shown in bytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 && bytes.is_multiple_of(1024 * 1024) {
        format!("{} MB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes.is_multiple_of(1024) {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
