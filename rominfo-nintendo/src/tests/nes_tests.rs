use super::*;

/// 16-byte iNES header followed by a token PRG bank.
fn make_ines(prg_banks: u8, chr_banks: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 16 + 16 * 1024];
    rom[0..4].copy_from_slice(INES_MAGIC);
    rom[4] = prg_banks;
    rom[5] = chr_banks;
    rom[6] = flags6;
    rom[7] = flags7;
    rom
}

fn push_chunk(rom: &mut Vec<u8>, id: &[u8; 4], payload: &[u8]) {
    rom.extend_from_slice(id);
    rom.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    rom.extend_from_slice(payload);
}

fn unif_header() -> Vec<u8> {
    let mut rom = vec![0u8; UNIF_CHUNKS_START];
    rom[0..4].copy_from_slice(UNIF_MAGIC);
    rom[4] = 7; // revision
    rom
}

/// Chunk layout of "Dancing Blocks (1990)(Sachen)(AS)[p][!][SA-013][NES cart].unf".
fn make_dancing_blocks() -> Vec<u8> {
    let mut rom = unif_header();
    push_chunk(&mut rom, b"MAPR", b"UNL-SA-NROM\0");
    push_chunk(&mut rom, b"NAME", b"Dancing Blocks (72 pin cart)\0");
    push_chunk(&mut rom, b"MIRR", &[0x00]);
    push_chunk(&mut rom, b"PRG0", &[0xEA; 0x8000]);
    push_chunk(&mut rom, b"CHR0", &[0x00; 0x2000]);
    rom
}

#[test]
fn test_is_valid_data() {
    let parser = NesParser::new();
    assert!(parser.is_valid_data(&make_ines(2, 1, 0, 0)));
    assert!(parser.is_valid_data(&unif_header()));
    assert!(!parser.is_valid_data(b"NES"));
    assert!(!parser.is_valid_data(&[0u8; 16]));
}

#[test]
fn test_dancing_blocks_unif() {
    let props = NesParser::new().parse_buffer(make_dancing_blocks());
    assert_eq!(props.text("header"), Some("UNIF"));
    assert_eq!(props.text("title"), Some("Dancing Blocks (72 pin cart)"));
    assert_eq!(props.text("battery"), Some(""));
    assert_eq!(props.text("trainer"), Some(""));
    assert_eq!(props.text("four_screen_vram"), Some(""));
    assert_eq!(props.text("video_output"), Some(""));
    assert_eq!(props.text("mapper"), Some("UNL-SA-NROM"));
    assert_eq!(props.len(), 7);
}

#[test]
fn test_unif_flag_chunks() {
    let mut rom = unif_header();
    push_chunk(&mut rom, b"TVCI", &[0x01]);
    push_chunk(&mut rom, b"BATR", &[0x00]);
    push_chunk(&mut rom, b"MIRR", &[0x04]);
    let props = NesParser::new().parse_buffer(rom);
    assert_eq!(props.text("video_output"), Some("PAL"));
    assert_eq!(props.text("battery"), Some("yes"));
    assert_eq!(props.text("four_screen_vram"), Some("yes"));
    assert_eq!(props.text("title"), Some(""));
}

#[test]
fn test_unif_tvci_values() {
    for (value, expected) in [(0x00, "NTSC"), (0x01, "PAL"), (0x02, "")] {
        let mut rom = unif_header();
        push_chunk(&mut rom, b"TVCI", &[value]);
        let props = NesParser::new().parse_buffer(rom);
        assert_eq!(props.text("video_output"), Some(expected));
    }
}

#[test]
fn test_unif_zero_length_chunk_is_skipped() {
    let mut rom = unif_header();
    push_chunk(&mut rom, b"READ", &[]);
    push_chunk(&mut rom, b"NAME", b"After Empty\0");
    let props = NesParser::new().parse_buffer(rom);
    assert_eq!(props.text("title"), Some("After Empty"));
}

#[test]
fn test_unif_overrunning_chunk_keeps_earlier_fields() {
    let mut rom = unif_header();
    push_chunk(&mut rom, b"NAME", b"Kept\0");
    rom.extend_from_slice(b"PRG0");
    rom.extend_from_slice(&0x0010_0000u32.to_le_bytes());
    rom.extend_from_slice(&[0xFF; 32]);
    let props = NesParser::new().parse_buffer(rom);
    assert_eq!(props.text("title"), Some("Kept"));
    assert_eq!(props.text("header"), Some("UNIF"));
}

#[test]
fn test_unif_without_chunks() {
    let props = NesParser::new().parse_buffer(UNIF_MAGIC.to_vec());
    assert_eq!(props.text("header"), Some("UNIF"));
    assert_eq!(props.len(), 7);
}

#[test]
fn test_ines_flags() {
    let props = NesParser::new().parse_buffer(make_ines(2, 1, 0x0E, 0x00));
    assert_eq!(props.text("header"), Some("iNES"));
    assert_eq!(props.text("battery"), Some("yes"));
    assert_eq!(props.text("trainer"), Some("yes"));
    assert_eq!(props.text("four_screen_vram"), Some("yes"));
    assert_eq!(props.text("video_output"), Some(""));
    assert_eq!(props.text("title"), Some(""));
    assert_eq!(props.text("prg_rom_size"), Some("32 KB"));
    assert_eq!(props.text("chr_rom_size"), Some("8 KB"));
    assert_eq!(props.text("mapper"), Some("0"));
}

#[test]
fn test_ines_mapper_nibbles() {
    // MMC3 (mapper 4) in the low nibble, upper nibble 0x10
    let props = NesParser::new().parse_buffer(make_ines(8, 16, 0x40, 0x10));
    assert_eq!(props.text("mapper"), Some("20"));
    assert_eq!(props.text("prg_rom_size"), Some("128 KB"));
    assert_eq!(props.text("chr_rom_size"), Some("128 KB"));
}

#[test]
fn test_nes2_header_and_video() {
    let mut rom = make_ines(2, 0, 0x00, 0x08);
    rom[0x0C] = 0x01;
    let props = NesParser::new().parse_buffer(rom.clone());
    assert_eq!(props.text("header"), Some("iNES 2.0"));
    assert_eq!(props.text("video_output"), Some("PAL"));
    assert_eq!(props.text("chr_rom_size"), Some("0 bytes"));

    rom[0x0C] = 0x00;
    rom[0x08] = 0x01; // mapper bits 8-11
    let props = NesParser::new().parse_buffer(rom);
    assert_eq!(props.text("video_output"), Some("NTSC"));
    assert_eq!(props.text("mapper"), Some("256"));
}

#[test]
fn test_nes2_exponent_rom_size() {
    let mut rom = make_ines(0, 0, 0x00, 0x08);
    rom[0x09] = 0x0F;
    rom[0x04] = (10 << 2) | 0x01; // 2^10 * 3
    let props = NesParser::new().parse_buffer(rom);
    assert_eq!(props.text("prg_rom_size"), Some("3 KB"));
}

#[test]
fn test_empty_and_short_buffers() {
    let parser = NesParser::new();
    assert!(parser.parse_buffer(Vec::new()).is_empty());
    assert!(parser.parse_buffer(make_ines(1, 1, 0, 0)[..15].to_vec()).is_empty());
}

#[test]
fn test_read_limit_by_extension() {
    let parser = NesParser::new();
    assert_eq!(parser.read_limit(Path::new("game.nes")), Some(16));
    assert_eq!(parser.read_limit(Path::new("game.UNF")), None);
    assert_eq!(parser.read_limit(Path::new("game.unif")), None);
}

#[test]
fn test_parse_unif_file() {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(".unf").tempfile().unwrap();
    file.write_all(&make_dancing_blocks()).unwrap();
    let props = NesParser::new().parse(file.path()).unwrap();
    assert_eq!(props.text("title"), Some("Dancing Blocks (72 pin cart)"));
}
