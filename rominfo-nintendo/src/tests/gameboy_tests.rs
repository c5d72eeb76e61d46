use super::*;

/// Build a minimal synthetic GB ROM with a valid logo and a plain DMG header.
fn make_gb_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000]; // 32 KB

    // Entry point: NOP + JP 0x0150
    rom[0x0100] = 0x00;
    rom[0x0101] = 0xC3;
    rom[0x0102] = 0x50;
    rom[0x0103] = 0x01;

    rom[0x0104..0x0134].copy_from_slice(&GB_LOGO);

    let title = b"TESTGAME";
    rom[0x0134..0x0134 + title.len()].copy_from_slice(title);

    rom[0x014A] = 0x01; // non-Japanese
    rom[0x014B] = 0x01; // old licensee: Nintendo
    rom
}

/// Header bytes matching "The Legend of Zelda - Link's Awakening DX".
fn make_zelda_dx() -> Vec<u8> {
    let mut rom = make_gb_rom();
    rom[0x0134..0x0144].copy_from_slice(b"ZELDA\0\0\0\0\0\0AZ6E\x80");
    rom[0x0144..0x0146].copy_from_slice(b"01");
    rom[0x0146] = 0x03; // SGB support
    rom[0x0147] = 0x1B; // MBC5+RAM+BATT
    rom[0x0148] = 0x05; // 1 MB
    rom[0x0149] = 0x03; // 32 KB
    rom[0x014A] = 0x01;
    rom[0x014B] = 0x33; // use new licensee
    rom[0x014C] = 0x00;
    rom[0x014D] = 0x3C;
    rom[0x014E] = 0xE3;
    rom[0x014F] = 0xFD;
    rom
}

#[test]
fn test_is_valid_data() {
    let parser = GameBoyParser::new();
    assert!(parser.is_valid_data(&make_gb_rom()));
}

#[test]
fn test_is_valid_data_rejects_bad_logo() {
    let parser = GameBoyParser::new();
    let mut rom = make_gb_rom();
    rom[0x0110] ^= 0xFF;
    assert!(!parser.is_valid_data(&rom));
    assert!(!parser.is_valid_data(&[]));
}

#[test]
fn test_zelda_dx_reference_values() {
    let props = GameBoyParser::new().parse_buffer(make_zelda_dx());
    assert_eq!(props.text("title"), Some("ZELDA      AZ6E"));
    assert_eq!(props.text("platform"), Some("Game Boy Color"));
    assert_eq!(props.text("sgb_support"), Some("yes"));
    assert_eq!(props.text("publisher"), Some("Nintendo"));
    assert_eq!(props.text("publisher_code"), Some("01"));
    assert_eq!(props.text("cartridge_type"), Some("ROM+MBC5+RAM+BATT"));
    assert_eq!(props.text("cartridge_type_code"), Some("1B"));
    assert_eq!(props.text("rom_size"), Some("1MB"));
    assert_eq!(props.text("rom_size_code"), Some("05"));
    assert_eq!(props.text("ram_size"), Some("32KB"));
    assert_eq!(props.text("ram_size_code"), Some("03"));
    assert_eq!(props.text("destination"), Some(""));
    assert_eq!(props.text("version"), Some("00"));
    assert_eq!(props.text("header_checksum"), Some("3C"));
    assert_eq!(props.text("global_checksum"), Some("E3FD"));
    assert_eq!(props.len(), 15);
}

#[test]
fn test_plain_game_boy() {
    let props = GameBoyParser::new().parse_buffer(make_gb_rom());
    assert_eq!(props.text("title"), Some("TESTGAME"));
    assert_eq!(props.text("platform"), Some("Game Boy"));
    assert_eq!(props.text("sgb_support"), Some(""));
    assert_eq!(props.text("publisher_code"), Some("01"));
    assert_eq!(props.text("publisher"), Some("Nintendo"));
    assert_eq!(props.text("cartridge_type"), Some("ROM"));
    assert_eq!(props.text("rom_size"), Some("32KB"));
    assert_eq!(props.text("ram_size"), Some("0KB"));
}

#[test]
fn test_super_game_boy_platform() {
    let mut rom = make_gb_rom();
    rom[0x0146] = 0x03;
    let props = GameBoyParser::new().parse_buffer(rom);
    assert_eq!(props.text("platform"), Some("Super Game Boy"));
}

#[test]
fn test_japan_destination_and_unknown_codes() {
    let mut rom = make_gb_rom();
    rom[0x014A] = 0x00;
    rom[0x0147] = 0x04; // not assigned
    rom[0x014B] = 0xF7; // not in the table
    let props = GameBoyParser::new().parse_buffer(rom);
    assert_eq!(props.text("destination"), Some("Japan"));
    assert_eq!(props.text("cartridge_type"), Some(""));
    assert_eq!(props.text("cartridge_type_code"), Some("04"));
    assert_eq!(props.text("publisher"), Some(""));
    assert_eq!(props.text("publisher_code"), Some("F7"));
}

#[test]
fn test_empty_buffer() {
    assert!(GameBoyParser::new().parse_buffer(Vec::new()).is_empty());
}

#[test]
fn test_minimum_size_boundary() {
    let rom = make_zelda_dx();
    let exact = rom[..0x150].to_vec();
    assert_eq!(GameBoyParser::new().parse_buffer(exact).len(), 15);

    let short = rom[..0x14F].to_vec();
    assert!(GameBoyParser::new().parse_buffer(short).is_empty());
}

#[test]
fn test_parse_reads_header_window() {
    use std::io::Write;
    let mut file = tempfile::Builder::new().suffix(".gbc").tempfile().unwrap();
    file.write_all(&make_zelda_dx()).unwrap();
    let props = GameBoyParser::new().parse(file.path()).unwrap();
    assert_eq!(props.text("global_checksum"), Some("E3FD"));
}
