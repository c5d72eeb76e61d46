use std::path::{Path, PathBuf};
use std::sync::Arc;

use rominfo_lib::*;

fn write(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

fn z64_rom(title: &str) -> Vec<u8> {
    let mut rom = vec![0u8; 0x1000];
    rom[..4].copy_from_slice(&[0x80, 0x37, 0x12, 0x40]);
    rom[0x20..0x20 + title.len()].copy_from_slice(title.as_bytes());
    rom[0x3B] = b'N';
    rom[0x3E] = b'E';
    rom
}

/// V64 images swap every byte pair.
fn v64_rom(title: &str) -> Vec<u8> {
    let mut rom = z64_rom(title);
    for pair in rom.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
    rom
}

fn sms_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x7FF0..0x7FF8].copy_from_slice(b"TMR SEGA");
    rom[0x7FFF] = 0x4C;
    rom
}

fn genesis_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x400];
    rom[0x100..0x10F].copy_from_slice(b"SEGA GENESIS   ");
    rom[0x150..0x157].copy_from_slice(b"COLUMNS");
    rom
}

#[test]
fn mixed_collection_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let registry = default_registry();

    let n64 = write(dir.path(), "mario.z64", &z64_rom("SUPER MARIO 64"));
    let (platform, props) = registry.identify_path(&n64).unwrap().unwrap();
    assert_eq!(platform, Platform::N64);
    assert_eq!(props.text("title"), Some("SUPER MARIO 64"));
    assert_eq!(props.text("publisher"), Some("Nintendo"));

    let v64 = write(dir.path(), "mario.v64", &v64_rom("SUPER MARIO 64"));
    let props = registry.parse_path(&v64).unwrap();
    assert_eq!(props.text("title"), Some("SUPER MARIO 64"));

    let sms = write(dir.path(), "game.sms", &sms_rom());
    let (platform, props) = registry.identify_path(&sms).unwrap().unwrap();
    assert_eq!(platform, Platform::MasterSystem);
    assert_eq!(props.text("region"), Some("Export"));
    assert_eq!(props.len(), 13);

    let genesis = write(dir.path(), "columns.gen", &genesis_rom());
    let (platform, props) = registry.identify_path(&genesis).unwrap().unwrap();
    assert_eq!(platform, Platform::Genesis);
    assert_eq!(props.text("title"), Some("COLUMNS"));
}

#[test]
fn buffers_dispatch_by_content() {
    let registry = default_registry();
    let (platform, _) = registry.identify_buffer(z64_rom("ZELDA")).unwrap();
    assert_eq!(platform, Platform::N64);
    let (platform, _) = registry.identify_buffer(genesis_rom()).unwrap();
    assert_eq!(platform, Platform::Genesis);
}

#[tokio::test]
async fn pool_over_directory() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write(dir.path(), "a.z64", &z64_rom("A")),
        write(dir.path(), "b.sms", &sms_rom()),
        write(dir.path(), "c.md", &genesis_rom()),
        dir.path().join("d.nes"),
    ];

    let settings = Settings::default();
    let registry = Arc::new(default_registry().with_sniff_content(settings.parse.sniff_content));
    let outcomes = ParsePool::start(registry, paths, settings.jobs(), DispatchMode::Path)
        .collect_ordered()
        .await;

    let platforms: Vec<Option<Platform>> = outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(Some((platform, _))) => Some(*platform),
            _ => None,
        })
        .collect();
    assert_eq!(
        platforms,
        vec![
            Some(Platform::N64),
            Some(Platform::MasterSystem),
            Some(Platform::Genesis),
            None,
        ]
    );
    assert!(outcomes[3].result.is_err());
}
