use super::*;

#[test]
fn test_detect_each_ordering() {
    assert_eq!(detect_n64_format(&MAGIC_Z64), Some(N64Format::Z64));
    assert_eq!(detect_n64_format(&MAGIC_V64), Some(N64Format::V64));
    assert_eq!(detect_n64_format(&MAGIC_N64), Some(N64Format::N64));
    assert_eq!(
        detect_n64_format(&MAGIC_WORD_SWAPPED),
        Some(N64Format::WordSwapped)
    );
}

#[test]
fn test_detect_unknown_or_short() {
    assert_eq!(detect_n64_format(&[0xFF, 0xFF, 0xFF, 0xFF]), None);
    assert_eq!(detect_n64_format(&[0x80, 0x37]), None);
}

#[test]
fn test_every_magic_normalizes_to_z64() {
    for magic in [MAGIC_Z64, MAGIC_V64, MAGIC_N64, MAGIC_WORD_SWAPPED] {
        let format = detect_n64_format(&magic).unwrap();
        let mut data = magic.to_vec();
        normalize_to_big_endian(&mut data, format);
        assert_eq!(data, MAGIC_Z64, "{:?}", format);
    }
}

#[test]
fn test_word_swapped_multiple_words() {
    let mut data = vec![3, 4, 1, 2, 7, 8, 5, 6];
    normalize_to_big_endian(&mut data, N64Format::WordSwapped);
    assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_partial_group_untouched() {
    let mut data = vec![0x37, 0x80, 0x40, 0x12, 0xAA];
    normalize_to_big_endian(&mut data, N64Format::V64);
    assert_eq!(data, vec![0x80, 0x37, 0x12, 0x40, 0xAA]);
}
