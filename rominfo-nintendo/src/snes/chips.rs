//! Enhancement chip identification.
//!
//! Chips are identified from the (cartridge type, map mode) byte pair, the
//! same identifiers NSRT and Snes9x use.

/// Base contents selected by the low nibble of the cartridge type.
const CONTENTS: [&str; 3] = ["ROM", "ROM+RAM", "ROM+RAM+BAT"];

fn dsp_variant(rom_type: u8, map_mode: u8, licensee: u8) -> Option<&'static str> {
    match (rom_type, map_mode) {
        (0x03, 0x30) => Some("DSP-4"),
        (0x03, _) => Some("DSP-1"),
        (0x05, 0x20) => Some("DSP-2"),
        (0x05, 0x30) if licensee == 0xB2 => Some("DSP-3"),
        (0x05, _) => Some("DSP-1"),
        _ => None,
    }
}

/// Name of the add-on chip, if any.
///
/// `rom_size` is the declared size byte; it tells the ST-011 apart from the
/// ST-010, which share an identifier.
pub(crate) fn chip_name(rom_type: u8, map_mode: u8, licensee: u8, rom_size: u8) -> Option<&'static str> {
    let identifier = u16::from(rom_type) << 8 | u16::from(map_mode);
    let chip = match identifier {
        0x5535 => "S-RTC",
        0xF93A => "SPC7110+RTC",
        0xF53A => "SPC7110",
        0x2530 => "OBC1",
        0xF320 => "C4",
        0x4332 | 0x4532 => "S-DD1",
        0xF530 => "ST-018",
        0xF630 if rom_size == 0x09 => "ST-011",
        0xF630 => "ST-010",
        0x3423 | 0x3523 => "SA-1",
        0x1320 | 0x1420 | 0x1520 | 0x1A20 => "Super FX",
        _ => return dsp_variant(rom_type, map_mode, licensee),
    };
    Some(chip)
}

/// Cartridge type text such as "ROM+RAM+BAT+SA-1".
///
/// A plain type-0 cart is "ROM"; Satellaview downloads always report "BS".
pub(crate) fn cartridge_type(rom_type: u8, chip: Option<&str>) -> String {
    if rom_type == 0 && chip.is_none() {
        return CONTENTS[0].to_string();
    }
    let contents = CONTENTS[usize::from(rom_type & 0x0F) % 3];
    match chip {
        Some(chip) => format!("{}+{}", contents, chip),
        None => contents.to_string(),
    }
}

#[cfg(test)]
#[path = "tests/chips_tests.rs"]
mod tests;
