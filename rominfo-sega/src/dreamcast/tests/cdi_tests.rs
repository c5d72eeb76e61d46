use rominfo_core::RomInfoParser;
use super::*;

use crate::dreamcast::tests::make_ip_bin;
use std::io::Cursor;

const AUDIO_SECTORS: u32 = 10;
const DATA_SECTORS: u32 = 20;
const PREGAP: u32 = 2;

/// One track descriptor as DiscJuggler writes it.
fn track_entry(version: u32, mode: u32, size_id: u32, total: u32) -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0u32.to_le_bytes());
    t.extend_from_slice(&TRACK_START_MARK);
    t.extend_from_slice(&TRACK_START_MARK);
    t.extend_from_slice(&[0u8; 4]);
    let name = b"C:\\disc\\track.bin";
    t.push(name.len() as u8);
    t.extend_from_slice(name);
    t.extend_from_slice(&[0u8; 11 + 4 + 4]);
    t.extend_from_slice(&0u32.to_le_bytes());
    t.extend_from_slice(&[0u8; 2]);
    t.extend_from_slice(&PREGAP.to_le_bytes());
    t.extend_from_slice(&(total - PREGAP).to_le_bytes());
    t.extend_from_slice(&[0u8; 6]);
    t.extend_from_slice(&mode.to_le_bytes());
    t.extend_from_slice(&[0u8; 12]);
    t.extend_from_slice(&0u32.to_le_bytes());
    t.extend_from_slice(&total.to_le_bytes());
    t.extend_from_slice(&[0u8; 16]);
    t.extend_from_slice(&size_id.to_le_bytes());
    t.extend_from_slice(&[0u8; 29]);
    if version != CDI_V2 {
        t.extend_from_slice(&[0u8; 5]);
        t.extend_from_slice(&0u32.to_le_bytes());
    }
    t
}

/// Append a one-session track table and the trailer to `body`.
fn finish_cdi(mut body: Vec<u8>, version: u32, tracks: &[Vec<u8>]) -> Vec<u8> {
    let header_offset = body.len() as u32;
    body.extend_from_slice(&1u16.to_le_bytes());
    body.extend_from_slice(&(tracks.len() as u16).to_le_bytes());
    for track in tracks {
        body.extend_from_slice(track);
    }
    body.extend_from_slice(&[0u8; 12]);
    if version != CDI_V2 {
        body.push(0);
    }
    body.extend_from_slice(&version.to_le_bytes());
    body.extend_from_slice(&header_offset.to_le_bytes());
    body
}

/// Audio track (2352-byte sectors) followed by a mode 2 data track
/// (2336-byte sectors) holding IP.BIN.
fn make_cdi(version: u32) -> Vec<u8> {
    let audio_len = (AUDIO_SECTORS * 2352) as usize;
    let data_len = (DATA_SECTORS * 2336) as usize;
    let mut body = vec![0u8; audio_len + data_len];
    let ip_at = audio_len + (PREGAP * 2336) as usize + 8;
    body[ip_at..ip_at + IP_BIN_SIZE].copy_from_slice(&make_ip_bin());

    let tracks = [
        track_entry(version, 0, 2, AUDIO_SECTORS),
        track_entry(version, 2, 1, DATA_SECTORS),
    ];
    finish_cdi(body, version, &tracks)
}

#[test]
fn test_finds_last_data_track() {
    let track = find_data_track(&mut Cursor::new(make_cdi(CDI_V35))).unwrap();
    assert_eq!(
        track,
        DataTrack {
            position: (AUDIO_SECTORS * 2352 + PREGAP * 2336) as u64,
            sector_size: 2336,
            mode: 2,
        }
    );
    assert_eq!(track.ip_bin_offset(), track.position + 8);
}

#[test]
fn test_reads_ip_bin_for_every_version() {
    for version in [CDI_V2, CDI_V3, CDI_V35] {
        let ip = read_ip_bin(&mut Cursor::new(make_cdi(version))).unwrap();
        assert_eq!(ip, make_ip_bin(), "version {:#X}", version);
    }
}

#[test]
fn test_raw_sector_offsets() {
    let mode1 = DataTrack {
        position: 1000,
        sector_size: 2352,
        mode: 1,
    };
    assert_eq!(mode1.ip_bin_offset(), 1016);
    let mode2 = DataTrack { mode: 2, ..mode1 };
    assert_eq!(mode2.ip_bin_offset(), 1024);
    let cooked = DataTrack {
        sector_size: 2048,
        ..mode1
    };
    assert_eq!(cooked.ip_bin_offset(), 1000);
}

#[test]
fn test_bad_trailer() {
    let mut image = make_cdi(CDI_V3);
    let len = image.len();
    image[len - 8..len - 4].copy_from_slice(&0x1234_5678u32.to_le_bytes());
    assert!(matches!(
        find_data_track(&mut Cursor::new(image)),
        Err(RomInfoError::MalformedStructure(_))
    ));

    let mut image = make_cdi(CDI_V3);
    let len = image.len();
    image[len - 4..].copy_from_slice(&0u32.to_le_bytes());
    assert!(matches!(
        find_data_track(&mut Cursor::new(image)),
        Err(RomInfoError::MalformedStructure(_))
    ));
}

#[test]
fn test_tiny_file() {
    assert!(matches!(
        find_data_track(&mut Cursor::new(vec![0u8; 7])),
        Err(RomInfoError::Truncated { .. })
    ));
}

#[test]
fn test_missing_start_mark() {
    let mut track = track_entry(CDI_V3, 2, 1, DATA_SECTORS);
    track[4] = 0x7F;
    let image = finish_cdi(vec![0u8; 64], CDI_V3, &[track]);
    assert!(matches!(
        find_data_track(&mut Cursor::new(image)),
        Err(RomInfoError::MalformedStructure(_))
    ));
}

#[test]
fn test_audio_only_image() {
    let tracks = [track_entry(CDI_V3, 0, 2, AUDIO_SECTORS)];
    let image = finish_cdi(vec![0u8; 64], CDI_V3, &tracks);
    assert!(matches!(
        find_data_track(&mut Cursor::new(image)),
        Err(RomInfoError::MalformedStructure(_))
    ));
}

#[test]
fn test_unknown_sector_size() {
    let tracks = [track_entry(CDI_V3, 1, 7, DATA_SECTORS)];
    let image = finish_cdi(vec![0u8; 64], CDI_V3, &tracks);
    assert!(matches!(
        find_data_track(&mut Cursor::new(image)),
        Err(RomInfoError::UnsupportedVariant(_))
    ));
}

#[test]
fn test_table_cut_short() {
    let image = make_cdi(CDI_V35);
    let header_offset = (AUDIO_SECTORS * 2352 + DATA_SECTORS * 2336) as usize;
    // Keep the first track only partly, then the trailer
    let mut cut = image[..header_offset + 40].to_vec();
    cut.extend_from_slice(&image[image.len() - 8..]);
    assert!(matches!(
        find_data_track(&mut Cursor::new(cut)),
        Err(RomInfoError::MalformedStructure(_))
    ));
}

#[test]
fn test_parse_cdi_file() {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(".cdi").tempfile().unwrap();
    file.write_all(&make_cdi(CDI_V35)).unwrap();
    let props = crate::DreamcastParser::new().parse(file.path()).unwrap();
    assert_eq!(props.text("hardware_id"), Some("SEGA SEGAKATANA"));
    assert_eq!(props.text("product_name"), Some("SONIC ADVENTURE"));
}
