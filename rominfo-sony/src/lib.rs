//! Sony console disc image decoders.
//!
//! This crate provides [`RomInfoParser`](rominfo_core::RomInfoParser)
//! implementations for Sony consoles:
//!
//! - PlayStation (PS1/PSX): cooked ISO and raw BIN/IMG/MDF images

pub mod ps1;
mod ps1_disc;

pub use ps1::Ps1Parser;
