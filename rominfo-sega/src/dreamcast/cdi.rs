//! DiscJuggler (CDI) track table walker.
//!
//! A CDI image stores raw track data first and a session/track table at
//! the end. The last eight bytes hold the image version and the offset of
//! that table. Walking it gives the file position of the last data track,
//! where IP.BIN lives.

use std::io::{Read, Seek, SeekFrom};

use super::IP_BIN_SIZE;
use rominfo_core::RomInfoError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const CDI_V2: u32 = 0x8000_0004;
pub(crate) const CDI_V3: u32 = 0x8000_0005;
pub(crate) const CDI_V35: u32 = 0x8000_0006;

pub(crate) const TRACK_START_MARK: [u8; 10] = [0, 0, 0x01, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];

/// Marker written by DiscJuggler 4 before extra track data.
const DJ4_MARKER: u32 = 0x8000_0000;

// ---------------------------------------------------------------------------
// Track table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CdiVersion {
    V2,
    V3,
    V35,
}

impl CdiVersion {
    fn from_id(id: u32) -> Option<Self> {
        match id {
            CDI_V2 => Some(Self::V2),
            CDI_V3 => Some(Self::V3),
            CDI_V35 => Some(Self::V35),
            _ => None,
        }
    }
}

/// Where a data track starts in the image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DataTrack {
    pub position: u64,
    pub sector_size: u64,
    pub mode: u32,
}

impl DataTrack {
    /// File offset of the first user-data byte of the track.
    pub fn ip_bin_offset(&self) -> u64 {
        let skip = match (self.sector_size, self.mode) {
            // Mode 2 without sync and header: subheader only
            (2336, _) => 8,
            (2352, 1) => 16,
            (2352, _) => 24,
            _ => 0,
        };
        self.position + skip
    }
}

fn sector_bytes(id: u32) -> Option<u64> {
    match id {
        0 => Some(2048),
        1 => Some(2336),
        2 => Some(2352),
        _ => None,
    }
}

/// Little-endian reader over the track table. Running off the end of the
/// file is a structural error, not an I/O failure.
struct TableReader<'a, R> {
    reader: &'a mut R,
}

impl<R: Read + Seek> TableReader<'_, R> {
    fn bytes<const N: usize>(&mut self) -> Result<[u8; N], RomInfoError> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                RomInfoError::malformed("CDI track table ends early")
            } else {
                RomInfoError::Io(e)
            }
        })?;
        Ok(buf)
    }

    fn u8(&mut self) -> Result<u8, RomInfoError> {
        Ok(self.bytes::<1>()?[0])
    }

    fn u16(&mut self) -> Result<u16, RomInfoError> {
        Ok(u16::from_le_bytes(self.bytes()?))
    }

    fn u32(&mut self) -> Result<u32, RomInfoError> {
        Ok(u32::from_le_bytes(self.bytes()?))
    }

    fn skip(&mut self, n: i64) -> Result<(), RomInfoError> {
        self.reader.seek(SeekFrom::Current(n))?;
        Ok(())
    }
}

/// Walk the session/track table and return the last data track.
pub(crate) fn find_data_track<R: Read + Seek>(reader: &mut R) -> Result<DataTrack, RomInfoError> {
    let size = reader.seek(SeekFrom::End(0))?;
    if size < 8 {
        return Err(RomInfoError::truncated(0, 8, size as usize));
    }
    reader.seek(SeekFrom::End(-8))?;
    let mut table = TableReader { reader };
    let version_id = table.u32()?;
    let header_offset = table.u32()?;

    if header_offset == 0 {
        return Err(RomInfoError::malformed("CDI trailer has no header offset"));
    }
    let version = CdiVersion::from_id(version_id).ok_or_else(|| {
        RomInfoError::malformed(format!("unknown CDI version {:#010X}", version_id))
    })?;
    log::debug!("Dreamcast: CDI {:?}, track table at {:#X}", version, header_offset);

    table.reader.seek(SeekFrom::Start(header_offset as u64))?;
    let sessions = table.u16()?;

    let mut last_data = None;
    let mut track_offset: u64 = 0;
    for _ in 0..sessions {
        let tracks = table.u16()?;
        for _ in 0..tracks {
            // Extra data (DiscJuggler 3.00.780 and up)
            if table.u32()? != 0 {
                table.skip(8)?;
            }
            for _ in 0..2 {
                if table.bytes::<10>()? != TRACK_START_MARK {
                    return Err(RomInfoError::malformed("CDI track start mark missing"));
                }
            }

            table.skip(4)?;
            let name_len = table.u8()?;
            table.skip(name_len as i64 + 11 + 4 + 4)?;
            if table.u32()? == DJ4_MARKER {
                table.skip(8)?;
            }
            table.skip(2)?;
            let pregap = table.u32()? as u64;
            let _length = table.u32()?;
            table.skip(6)?;
            let mode = table.u32()?;
            table.skip(12)?;
            let _start_lba = table.u32()?;
            let total_length = table.u32()? as u64;
            table.skip(16)?;
            let size_id = table.u32()?;

            let sector_size = sector_bytes(size_id).ok_or_else(|| {
                RomInfoError::unsupported(format!("CDI sector size id {}", size_id))
            })?;

            match mode {
                0 => {}
                1 | 2 => {
                    last_data = Some(DataTrack {
                        position: track_offset + pregap * sector_size,
                        sector_size,
                        mode,
                    })
                }
                _ => log::warn!("Dreamcast: unsupported CDI track mode {}", mode),
            }
            track_offset += total_length * sector_size;

            table.skip(29)?;
            if version != CdiVersion::V2 {
                table.skip(5)?;
                // Extra data (DiscJuggler 3.00.780 and up)
                if table.u32()? == 0xFFFF_FFFF {
                    table.skip(78)?;
                }
            }
        }

        // Session trailer
        table.skip(12)?;
        if version != CdiVersion::V2 {
            table.skip(1)?;
        }
    }

    last_data.ok_or_else(|| RomInfoError::malformed("CDI image has no data track"))
}

/// Read the IP.BIN block of a CDI image.
pub(crate) fn read_ip_bin<R: Read + Seek>(reader: &mut R) -> Result<Vec<u8>, RomInfoError> {
    let track = find_data_track(reader)?;
    reader.seek(SeekFrom::Start(track.ip_bin_offset()))?;

    let mut ip = vec![0u8; IP_BIN_SIZE];
    reader.read_exact(&mut ip).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            RomInfoError::malformed("CDI data track lies past the end of the image")
        } else {
            RomInfoError::Io(e)
        }
    })?;
    Ok(ip)
}

#[cfg(test)]
#[path = "tests/cdi_tests.rs"]
mod tests;
