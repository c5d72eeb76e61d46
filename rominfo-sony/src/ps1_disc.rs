//! PS1 disc sector utilities.
//!
//! Handles raw (2352-byte) to cooked (2048-byte) sector conversion and the
//! ISO 9660 Primary Volume Descriptor.

use rominfo_core::RomInfoError;
use rominfo_core::util::{field, sanitize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// CD sync pattern at the start of every raw (2352-byte) sector.
pub(crate) const CD_SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Standard ISO 9660 sector size (user data only).
pub(crate) const ISO_SECTOR_SIZE: usize = 2048;

/// Raw CD sector size (sync + header + subheader + data + EDC + ECC).
pub(crate) const RAW_SECTOR_SIZE: usize = 2352;

/// Offset to user data within a Mode 2 Form 1 raw sector.
/// 12 (sync) + 4 (header) + 8 (subheader) = 24.
const MODE2_FORM1_DATA_OFFSET: usize = 24;

/// ISO 9660 Primary Volume Descriptor is always at sector 16.
pub(crate) const PVD_SECTOR: usize = 16;

// ---------------------------------------------------------------------------
// Sector conversion
// ---------------------------------------------------------------------------

/// True when the image starts with a raw sector.
pub(crate) fn is_raw_image(data: &[u8]) -> bool {
    data.starts_with(&CD_SYNC_PATTERN)
}

/// Keep the 2048 user-data bytes of every whole raw sector.
pub(crate) fn raw_to_iso(raw: &[u8]) -> Vec<u8> {
    raw.chunks_exact(RAW_SECTOR_SIZE)
        .flat_map(|sector| {
            &sector[MODE2_FORM1_DATA_OFFSET..MODE2_FORM1_DATA_OFFSET + ISO_SECTOR_SIZE]
        })
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// ISO 9660 Primary Volume Descriptor
// ---------------------------------------------------------------------------

/// Identifiers from the ISO 9660 Primary Volume Descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrimaryVolumeDescriptor {
    /// System identifier (offset 8, 32 bytes). e.g. "PLAYSTATION"
    pub system_identifier: String,
    /// Volume identifier (offset 40, 32 bytes).
    pub volume_identifier: String,
}

/// Read the Primary Volume Descriptor from sector 16 of a cooked image.
pub(crate) fn read_pvd(iso: &[u8]) -> Result<PrimaryVolumeDescriptor, RomInfoError> {
    let sector = field(iso, PVD_SECTOR * ISO_SECTOR_SIZE, ISO_SECTOR_SIZE)?;

    // Byte 0: type must be 0x01 (Primary Volume Descriptor)
    if sector[0] != 0x01 {
        return Err(RomInfoError::mismatch(format!(
            "Expected PVD type 0x01, got 0x{:02X}",
            sector[0]
        )));
    }

    // Bytes 1-5: "CD001"
    if &sector[1..6] != b"CD001" {
        return Err(RomInfoError::mismatch("Missing CD001 signature in PVD"));
    }

    Ok(PrimaryVolumeDescriptor {
        system_identifier: sanitize(&sector[8..40]),
        volume_identifier: sanitize(&sector[40..72]),
    })
}

#[cfg(test)]
#[path = "tests/ps1_disc_tests.rs"]
mod tests;
