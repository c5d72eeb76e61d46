//! Sega console ROM/disc header decoders.
//!
//! This crate provides [`RomInfoParser`](rominfo_core::RomInfoParser)
//! implementations for Sega consoles:
//!
//! - Master System / Game Gear / SG-1000 (with SDSC homebrew tags)
//! - Genesis / Mega Drive (plain, SMD and MD images)
//! - Dreamcast (CDI and GDI images)

pub mod dreamcast;
pub mod genesis;
pub mod master_system;

pub use dreamcast::DreamcastParser;
pub use genesis::GenesisParser;
pub use master_system::MasterSystemParser;
