use super::*;

/// Write a plausible header at `header` with the reset vector pointing at
/// a `sei` instruction.
fn write_header(rom: &mut [u8], header: usize, map: u8) {
    rom[header..header + 21].copy_from_slice(b"SCORING TEST         ");
    rom[header + 0x15] = map;
    rom[header + 0x16] = 0x02;
    rom[header + 0x17] = 0x0A;
    rom[header + 0x18] = 0x03;
    rom[header + 0x19] = 0x01;
    rom[header + 0x1A] = 0x01;
    rom[header + 0x1C..header + 0x1E].copy_from_slice(&0xEDCBu16.to_le_bytes());
    rom[header + 0x1E..header + 0x20].copy_from_slice(&0x1234u16.to_le_bytes());
    rom[header + 0x3C..header + 0x3E].copy_from_slice(&0x8000u16.to_le_bytes());
    rom[header & !0x7FFF] = 0x78;
}

fn lorom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x100000];
    write_header(&mut rom, LOROM_HEADER, 0x20);
    rom
}

fn hirom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x100000];
    write_header(&mut rom, HIROM_HEADER, 0x21);
    rom
}

#[test]
fn test_lorom_outscores_hirom() {
    let rom = lorom();
    let (hi, lo) = hi_lo_scores(&rom, 0);
    assert_eq!(lo, 9);
    assert_eq!(hi, -6);
}

#[test]
fn test_hirom_outscores_lorom() {
    let rom = hirom();
    let (hi, lo) = hi_lo_scores(&rom, 0);
    assert!(hi > lo, "hi={} lo={}", hi, lo);
}

#[test]
fn test_missing_windows() {
    let rom = vec![0u8; 0x8000];
    assert!(score_lorom(&rom, 0).is_some());
    assert_eq!(score_hirom(&rom, 0), None);
    assert_eq!(hi_lo_scores(&rom, 0).0, MISSING);
    assert_eq!(hi_lo_scores(&[0u8; 0x100], 0), (MISSING, MISSING));
}

#[test]
fn test_oversized_rom_byte_penalty() {
    let mut rom = lorom();
    let base = score_lorom(&rom, 0).unwrap();
    rom[LOROM_HEADER + 0x17] = 13;
    assert_eq!(score_lorom(&rom, 0).unwrap(), base - 1);
    // Below 7 the size is treated as tiny, not as an error
    rom[LOROM_HEADER + 0x17] = 0;
    assert_eq!(score_lorom(&rom, 0).unwrap(), base);
}

#[test]
fn test_infoblock_score_full_marks() {
    assert_eq!(infoblock_score(&lorom(), LOROM_HEADER), 18);
}

#[test]
fn test_infoblock_score_invalid_reset_vector() {
    let mut rom = lorom();
    rom[LOROM_HEADER + 0x3C..LOROM_HEADER + 0x3E].copy_from_slice(&0x7FFFu16.to_le_bytes());
    assert_eq!(infoblock_score(&rom, LOROM_HEADER), 0);
}

#[test]
fn test_infoblock_score_clamped_at_zero() {
    let mut rom = vec![0u8; 0x10000];
    rom[LOROM_HEADER + 0x3C..LOROM_HEADER + 0x3E].copy_from_slice(&0x8000u16.to_le_bytes());
    // brk at the reset vector: -8, then +4 for plausible size fields
    assert_eq!(infoblock_score(&rom, LOROM_HEADER), 0);
}

#[test]
fn test_infoblock_score_missing_window() {
    assert_eq!(infoblock_score(&lorom(), EXHIROM_HEADER), 0);
}

#[test]
fn test_best_header_offset() {
    assert_eq!(best_header_offset(&lorom()), LOROM_HEADER);
    assert_eq!(best_header_offset(&hirom()), HIROM_HEADER);
    assert_eq!(best_header_offset(&[0u8; 0x10]), LOROM_HEADER);
}
