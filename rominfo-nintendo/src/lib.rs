//! Nintendo console ROM header decoders.
//!
//! This crate provides [`RomInfoParser`](rominfo_core::RomInfoParser)
//! implementations for Nintendo consoles:
//!
//! - NES (Famicom): iNES, NES 2.0 and UNIF
//! - SNES (Super Famicom)
//! - Nintendo 64
//! - Game Boy / Game Boy Color
//! - Game Boy Advance

mod licensee;
pub(crate) mod n64_byteorder;
pub mod gameboy;
pub mod gba;
pub mod n64;
pub mod nes;
pub mod snes;

pub use gameboy::GameBoyParser;
pub use gba::GbaParser;
pub use n64::N64Parser;
pub use nes::NesParser;
pub use snes::SnesParser;
