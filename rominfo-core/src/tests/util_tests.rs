use super::*;

#[test]
fn test_sanitize_replaces_control_bytes() {
    assert_eq!(sanitize(b"HELLO\0\0\0"), "HELLO");
    assert_eq!(sanitize(b"\xFF\xFFABC\xFF\xFF"), "ABC");
    assert_eq!(sanitize(b"A\x01B"), "A B");
}

#[test]
fn test_sanitize_keeps_tab_and_newlines_inside() {
    assert_eq!(sanitize(b"A\tB\r\nC"), "A\tB\r\nC");
    assert_eq!(sanitize(b"\tPADDED\n"), "PADDED");
}

#[test]
fn test_sanitize_is_idempotent() {
    let samples: [&[u8]; 4] = [
        b"  SONIC THE\x00HEDGEHOG  ",
        b"\x80\x81\x82",
        b"",
        b"\tTAB\x7F",
    ];
    for raw in samples {
        let once = sanitize(raw);
        assert_eq!(sanitize(once.as_bytes()), once);
        assert!(once.bytes().all(|b| keeps(b)));
    }
}

#[test]
fn test_all_ascii() {
    assert!(all_ascii(b"TITLE 123"));
    assert!(all_ascii(b""));
    assert!(!all_ascii(b"TAB\t"));
    assert!(!all_ascii(b"\x00"));
    assert!(!all_ascii(b"\x7F"));
}

#[test]
fn test_field_in_range() {
    let data = [1u8, 2, 3, 4];
    assert_eq!(field(&data, 1, 3).unwrap(), &[2, 3, 4]);
    assert_eq!(field(&data, 4, 0).unwrap(), &[] as &[u8]);
}

#[test]
fn test_field_out_of_range_is_truncated() {
    let data = [1u8, 2, 3, 4];
    match field(&data, 2, 3) {
        Err(RomInfoError::Truncated {
            offset,
            needed,
            available,
        }) => {
            assert_eq!(offset, 2);
            assert_eq!(needed, 3);
            assert_eq!(available, 4);
        }
        other => panic!("expected Truncated, got {:?}", other),
    }
    assert!(field(&data, usize::MAX, 2).is_err());
}

#[test]
fn test_integer_reads() {
    let data = [0x12u8, 0x34, 0x56, 0x78];
    assert_eq!(read_u16_le(&data, 0).unwrap(), 0x3412);
    assert_eq!(read_u16_be(&data, 0).unwrap(), 0x1234);
    assert_eq!(read_u32_le(&data, 0).unwrap(), 0x78563412);
    assert_eq!(read_u32_be(&data, 0).unwrap(), 0x12345678);
    assert!(read_u32_be(&data, 1).is_err());
    assert!(byte(&data, 4).is_err());
}

#[test]
fn test_read_cstr() {
    assert_eq!(read_cstr(b"HELLO\0WORLD", 0), "HELLO");
    assert_eq!(read_cstr(b"HELLO\0WORLD", 6), "WORLD");
    assert_eq!(read_cstr(b"ABC", 10), "");
    assert_eq!(read_cstr(b"", 0), "");
}

#[test]
fn test_require_len() {
    assert!(require_len(&[0u8; 16], 16).is_ok());
    assert!(require_len(&[0u8; 15], 16).is_err());
}

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 bytes");
    assert_eq!(format_bytes(8192), "8 KB");
    assert_eq!(format_bytes(16384), "16 KB");
    assert_eq!(format_bytes(1048576), "1 MB");
    assert_eq!(format_bytes(1025), "1025 bytes");
}
