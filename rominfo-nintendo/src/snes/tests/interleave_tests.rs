use super::*;

/// Image where every 32 KB block is filled with its own index.
fn numbered_blocks(count: usize) -> Vec<u8> {
    (0..count).flat_map(|i| vec![i as u8; BLOCK]).collect()
}

fn block_ids(data: &[u8]) -> Vec<u8> {
    data.chunks(BLOCK).map(|b| b[0]).collect()
}

#[test]
fn test_deinterleave_type1_order() {
    let mut data = numbered_blocks(4);
    let len = data.len();
    deinterleave_type1(&mut data, len);
    assert_eq!(block_ids(&data), vec![2, 0, 3, 1]);
}

#[test]
fn test_deinterleave_type1_single_pair() {
    let mut data = numbered_blocks(2);
    deinterleave_type1(&mut data, 0x10000);
    assert_eq!(block_ids(&data), vec![1, 0]);
}

#[test]
fn test_deinterleave_type1_clamps_size() {
    let mut data = numbered_blocks(4);
    deinterleave_type1(&mut data, 0x1000000);
    assert_eq!(block_ids(&data), vec![2, 0, 3, 1]);
}

#[test]
fn test_deinterleave_type1_leaves_odd_tail() {
    let mut data = numbered_blocks(5);
    let len = data.len();
    deinterleave_type1(&mut data, len);
    assert_eq!(block_ids(&data), vec![2, 0, 3, 1, 4]);
}

#[test]
fn test_deinterleave_type1_too_small_is_noop() {
    let mut data = numbered_blocks(1);
    deinterleave_type1(&mut data, 0x8000);
    assert_eq!(block_ids(&data), vec![0]);
}

#[test]
fn test_convert_interleaved_swaps_map_type() {
    let mut data = numbered_blocks(4);
    let map = convert_interleaved(&mut data, ExtendedFormat::None, MapType::HiRom, false);
    assert_eq!(map, MapType::LoRom);
    assert_eq!(block_ids(&data), vec![2, 0, 3, 1]);

    let mut data = numbered_blocks(4);
    let map = convert_interleaved(&mut data, ExtendedFormat::None, MapType::LoRom, false);
    assert_eq!(map, MapType::HiRom);
}

#[test]
fn test_convert_interleaved_tales_small_image() {
    let mut data = numbered_blocks(4);
    let map = convert_interleaved(&mut data, ExtendedFormat::None, MapType::LoRom, true);
    assert_eq!(map, MapType::HiRom);
    assert_eq!(block_ids(&data), vec![2, 0, 3, 1]);
}

#[test]
fn test_convert_interleaved_tales_halves_independent() {
    // 4 MB + 128 KB: the front 128 KB and the back 4 MB are separate
    let mut data = numbered_blocks(HALF_SPLIT / BLOCK + 4);
    let map = convert_interleaved(&mut data, ExtendedFormat::SmallFirst, MapType::LoRom, true);
    assert_eq!(map, MapType::HiRom);
    let ids = block_ids(&data);
    assert_eq!(&ids[..4], &[2, 0, 3, 1]);
    // The back part was interleaved with 64 units; its first block comes
    // from 2 MB further in
    assert_eq!(ids[4], 4 + 64);
    assert_eq!(ids[5], 4);
}

#[test]
fn test_swap_tales_halves() {
    let mut data = numbered_blocks(HALF_SPLIT / BLOCK + 2);
    swap_tales_halves(&mut data);
    let ids = block_ids(&data);
    assert_eq!(ids[0], 2);
    assert_eq!(&ids[ids.len() - 2..], &[0u8, 1]);

    let mut small = numbered_blocks(4);
    swap_tales_halves(&mut small);
    assert_eq!(block_ids(&small), vec![0, 1, 2, 3]);
}
