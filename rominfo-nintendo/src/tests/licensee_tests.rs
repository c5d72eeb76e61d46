use super::*;

#[test]
fn test_maker_code_known() {
    assert_eq!(maker_code_name("01"), Some("Nintendo"));
    assert_eq!(maker_code_name("A4"), Some("Konami"));
    assert_eq!(maker_code_name("HY"), Some("Sachen"));
}

#[test]
fn test_maker_code_unknown() {
    assert_eq!(maker_code_name("ZZ"), None);
    assert_eq!(maker_code_name(""), None);
}

#[test]
fn test_snes_company_from_nibbles() {
    // Old licensee byte 0xC3 -> 12 * 36 + 3
    assert_eq!(snes_company_name(12 * 36 + 3), Some("Square"));
    assert_eq!(snes_company_name(1), Some("Nintendo"));
    assert_eq!(snes_company_name(0), None);
}
