//! GD-ROM track list (.gdi) reader.
//!
//! A GDI file is plain text: the track count on the first line, then one
//! line per track:
//!
//! ```text
//! 3 45000 4 2352 track03.bin 0
//! ```
//!
//! giving number, start LBA, control (4 = data, 0 = audio), sector size,
//! file name (quoted when it contains spaces) and offset. IP.BIN sits at
//! the start of track 3, the first track of the high-density area.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use super::IP_BIN_SIZE;
use rominfo_core::RomInfoError;

/// Track holding IP.BIN.
const BOOT_TRACK: u32 = 3;

/// A track line of a GDI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GdiTrack {
    pub number: u32,
    pub lba: u32,
    pub ctrl: u32,
    pub sector_size: u32,
    pub filename: String,
}

impl GdiTrack {
    pub fn is_data(&self) -> bool {
        self.ctrl != 0
    }

    /// Offset of user data within the track file: past the sync pattern
    /// and header of a raw sector.
    fn user_data_offset(&self) -> u64 {
        if self.sector_size == 2352 { 0x10 } else { 0 }
    }
}

/// Non-blank fields of a record. Runs of spaces (used to align columns)
/// yield empty fields, which carry nothing.
fn record_fields(record: &csv::StringRecord) -> Result<Vec<&str>, RomInfoError> {
    let fields: Vec<&str> = record.iter().filter(|f| !f.trim().is_empty()).collect();
    // A quote left open swallows the following lines
    if fields.iter().any(|f| f.contains(['\r', '\n'])) {
        return Err(RomInfoError::malformed("unterminated quote in GDI track line"));
    }
    Ok(fields)
}

fn parse_number(field: &str, what: &str) -> Result<u32, RomInfoError> {
    field
        .parse()
        .map_err(|_| RomInfoError::malformed(format!("invalid {} '{}' in GDI", what, field)))
}

fn parse_track(fields: &[&str]) -> Result<GdiTrack, RomInfoError> {
    if fields.len() < 5 {
        return Err(RomInfoError::malformed(format!(
            "GDI track line has {} fields",
            fields.len()
        )));
    }
    Ok(GdiTrack {
        number: parse_number(fields[0], "track number")?,
        lba: parse_number(fields[1], "start LBA")?,
        ctrl: parse_number(fields[2], "control")?,
        sector_size: parse_number(fields[3], "sector size")?,
        filename: fields[4].to_string(),
    })
}

/// Parse the text of a GDI file.
///
/// Fields are space separated and a file name may be quoted, so the sheet
/// is read as CSV with a space delimiter.
pub(crate) fn parse_gdi(content: &str) -> Result<Vec<GdiTrack>, RomInfoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .quote(b'"')
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut count = None;
    let mut tracks = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| RomInfoError::malformed(format!("unreadable GDI line: {}", e)))?;
        let fields = record_fields(&record)?;
        if fields.is_empty() {
            continue;
        }
        if count.is_none() {
            let listed = parse_number(fields[0], "track count")?;
            if listed < BOOT_TRACK {
                log::warn!("Dreamcast: GDI lists {} tracks, expected at least 3", listed);
            }
            count = Some(listed);
        } else {
            tracks.push(parse_track(&fields)?);
        }
    }

    if count.is_none() {
        return Err(RomInfoError::mismatch("empty GDI file"));
    }
    Ok(tracks)
}

/// Read the IP.BIN block from track 3 of a GDI image.
pub(crate) fn read_ip_bin(gdi_path: &Path) -> Result<Vec<u8>, RomInfoError> {
    let content = String::from_utf8_lossy(&std::fs::read(gdi_path)?).into_owned();
    let tracks = parse_gdi(&content)?;

    let track = tracks
        .iter()
        .find(|t| t.number == BOOT_TRACK)
        .ok_or_else(|| RomInfoError::malformed("GDI has no track 3"))?;
    if !track.is_data() {
        return Err(RomInfoError::malformed("GDI track 3 is not a data track"));
    }

    let track_path = gdi_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&track.filename);
    log::debug!(
        "Dreamcast: reading IP.BIN from {} (LBA {})",
        track_path.display(),
        track.lba
    );

    let mut file = File::open(&track_path)?;
    file.seek(SeekFrom::Start(track.user_data_offset()))?;
    let mut ip = vec![0u8; IP_BIN_SIZE];
    file.read_exact(&mut ip).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            RomInfoError::malformed("GDI track 3 is shorter than IP.BIN")
        } else {
            RomInfoError::Io(e)
        }
    })?;
    Ok(ip)
}

#[cfg(test)]
#[path = "tests/gdi_tests.rs"]
mod tests;
