use super::*;

/// Header window for "Super Mario World (USA)".
fn smw_header() -> Vec<u8> {
    let mut h = vec![0u8; HEADER_LEN];
    h[TITLE..TITLE + TITLE_LEN].copy_from_slice(b"SUPER MARIOWORLD     ");
    h[MAP_MODE] = 0x20;
    h[ROM_TYPE] = 0x02;
    h[ROM_SIZE] = 0x09;
    h[RAM_SIZE] = 0x01;
    h[REGION] = 0x01;
    h[LICENSEE] = 0x01;
    h[VERSION] = 0x00;
    h[COMPLEMENT..COMPLEMENT + 2].copy_from_slice(&0x5F25u16.to_le_bytes());
    h[CHECKSUM..CHECKSUM + 2].copy_from_slice(&0xA0DAu16.to_le_bytes());
    h
}

#[test]
fn test_super_mario_world_fields() {
    let props = decode_fields(&smw_header(), MapType::LoRom, ExtendedFormat::None, false, "");
    assert_eq!(props.text("title"), Some("SUPER MARIOWORLD"));
    assert_eq!(props.text("memory_layout"), Some("LoROM"));
    assert_eq!(props.text("rom_speed"), Some("SlowROM"));
    assert_eq!(props.text("cartridge_type"), Some("ROM+RAM+BAT"));
    assert_eq!(props.text("chip"), Some(""));
    assert_eq!(props.text("rom_size"), Some("4 Mbit"));
    assert_eq!(props.text("ram_size"), Some("16 Kbit"));
    assert_eq!(props.text("region"), Some("USA/Canada"));
    assert_eq!(props.text("video_output"), Some("NTSC"));
    assert_eq!(props.text("publisher"), Some("Nintendo"));
    assert_eq!(props.text("publisher_code"), Some("0001"));
    assert_eq!(props.text("version"), Some("1.0"));
    assert_eq!(props.text("checksum"), Some("A0DA"));
    assert_eq!(props.text("checksum_complement"), Some("5F25"));
    assert_eq!(props.text("special_cartridge"), Some(""));
    assert_eq!(props.len(), 15);
}

#[test]
fn test_extended_maker_code() {
    let mut h = smw_header();
    h[LICENSEE] = 0x33;
    h[0..2].copy_from_slice(b"C3"); // 12 * 36 + 3 = 0x01B3
    let props = decode_fields(&h, MapType::HiRom, ExtendedFormat::None, false, "");
    assert_eq!(props.text("publisher"), Some("Square"));
    assert_eq!(props.text("publisher_code"), Some("01B3"));

    h[0..2].copy_from_slice(b"\0\0");
    let props = decode_fields(&h, MapType::HiRom, ExtendedFormat::None, false, "");
    assert_eq!(props.text("publisher"), Some(""));
    assert_eq!(props.text("publisher_code"), Some(""));
}

#[test]
fn test_region_and_video_table() {
    let mut h = smw_header();
    for (code, region, video) in [
        (0x00, "Japan", "NTSC"),
        (0x02, "Europe/Asia/Oceania", "PAL"),
        (0x0C, "Indonesia", "PAL"),
        (0x0D, "South Korea", "NTSC"),
        (0x0E, "", ""),
    ] {
        h[REGION] = code;
        let props = decode_fields(&h, MapType::LoRom, ExtendedFormat::None, false, "");
        assert_eq!(props.text("region"), Some(region));
        assert_eq!(props.text("video_output"), Some(video));
    }
}

#[test]
fn test_ram_size_zero_code_means_no_ram() {
    let mut header = smw_header();
    header[RAM_SIZE] = 0x00;
    let props = decode_fields(&header, MapType::LoRom, ExtendedFormat::None, false, "");
    assert_eq!(props.text("ram_size"), Some("0 Kbit"));
}

#[test]
fn test_size_guards() {
    assert_eq!(rom_size_text(0x00), "1 Mbit");
    assert_eq!(rom_size_text(0x0C), "32 Mbit");
    assert_eq!(rom_size_text(0xFF), "");
    assert_eq!(ram_size_text(0x00), "0 Kbit");
    assert_eq!(ram_size_text(0x05), "256 Kbit");
    assert_eq!(ram_size_text(0x0D), "");
}

#[test]
fn test_layout_names_and_offsets() {
    assert_eq!(memory_layout(MapType::HiRom, ExtendedFormat::BigFirst), "ExHiROM");
    assert_eq!(memory_layout(MapType::LoRom, ExtendedFormat::SmallFirst), "ExLoROM");
    assert_eq!(header_offset(MapType::LoRom, ExtendedFormat::None), 0x7FB0);
    assert_eq!(header_offset(MapType::HiRom, ExtendedFormat::None), 0xFFB0);
    assert_eq!(header_offset(MapType::HiRom, ExtendedFormat::BigFirst), 0x40FFB0);
}

#[test]
fn test_bs_substitutions() {
    let mut h = smw_header();
    h[TITLE..TITLE + TITLE_LEN].copy_from_slice(b"BS ZELDA NO DENSETSU ");
    h[RAM_SIZE] = 0x30;
    apply_bs_substitutions(&mut h, 0x100000);
    let props = decode_fields(&h, MapType::LoRom, ExtendedFormat::None, true, "");
    assert_eq!(props.text("title"), Some("BS ZELDA NO DENS"));
    assert_eq!(props.text("rom_speed"), Some("FastROM"));
    assert_eq!(props.text("cartridge_type"), Some("ROM+RAM+BAT+BS"));
    assert_eq!(props.text("chip"), Some("BS"));
    assert_eq!(props.text("rom_size"), Some("8 Mbit"));
    assert_eq!(props.text("ram_size"), Some("256 Kbit"));
    assert_eq!(props.text("region"), Some("Japan"));
}
