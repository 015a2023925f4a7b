//! Byte <-> word helpers
//!
//! All endianness handling goes through these functions. Offsets are in bytes;
//! callers only ever pass constant-size buffers, so indexing cannot fail.

use crate::params::{BLOCK_SIZE, Block, FULL_BLOCKS, Message, TAIL_SIZE};

#[inline(always)]
pub(crate) fn load_u32_be(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline(always)]
pub(crate) fn load_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline(always)]
pub(crate) fn load_u64_le(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
        bytes[offset + 6],
        bytes[offset + 7],
    ])
}

#[inline(always)]
pub(crate) fn store_u32_be(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

#[inline(always)]
pub(crate) fn store_u32_le(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[inline(always)]
pub(crate) fn store_u64_le(bytes: &mut [u8], offset: usize, value: u64) {
    bytes[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

/// Copy out the `index`-th full 64-byte block of the message
#[inline(always)]
pub(crate) fn full_block(input: &Message, index: usize) -> Block {
    debug_assert!(index < FULL_BLOCKS);
    let mut block = [0u8; BLOCK_SIZE];
    let offset = index * BLOCK_SIZE;
    block.copy_from_slice(&input[offset..offset + BLOCK_SIZE]);
    block
}

/// The trailing 8 input bytes at the start of an otherwise zeroed block
///
/// Each algorithm writes its own padding marker and length field on top.
#[inline(always)]
pub(crate) fn tail_block(input: &Message) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    let offset = FULL_BLOCKS * BLOCK_SIZE;
    block[..TAIL_SIZE].copy_from_slice(&input[offset..offset + TAIL_SIZE]);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::INPUT_SIZE;

    #[test]
    fn test_endian_helpers() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        assert_eq!(load_u32_be(&bytes, 0), 0x0102_0304);
        assert_eq!(load_u32_le(&bytes, 4), 0x0807_0605);
        assert_eq!(load_u64_le(&bytes, 0), 0x0807_0605_0403_0201);

        let mut out = [0u8; 8];
        store_u32_be(&mut out, 0, 0xDEAD_BEEF);
        store_u32_le(&mut out, 4, 0xDEAD_BEEF);
        assert_eq!(out, [0xDE, 0xAD, 0xBE, 0xEF, 0xEF, 0xBE, 0xAD, 0xDE]);

        store_u64_le(&mut out, 0, 0x0807_0605_0403_0201);
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_block_split() {
        let mut input = [0u8; INPUT_SIZE];
        for (i, byte) in input.iter_mut().enumerate() {
            *byte = i as u8;
        }

        let second = full_block(&input, 1);
        assert_eq!(second[0], 64);
        assert_eq!(second[63], 127);

        let tail = tail_block(&input);
        assert_eq!(&tail[..TAIL_SIZE], &[192, 193, 194, 195, 196, 197, 198, 199]);
        assert!(tail[TAIL_SIZE..].iter().all(|&b| b == 0));
    }
}
