//! Skein-512-256 specialized to a 200-byte input
//!
//! Threefish-512 in UBI chaining mode. The message is three 64-byte blocks
//! plus an 8-byte final block, followed by a single output block.

use crate::bytes::{full_block, load_u64_le, store_u64_le, tail_block};
use crate::params::{BLOCK_SIZE, Block, DIGEST_SIZE, Digest, FULL_BLOCKS, Message, TAIL_SIZE};

/// Skein-512 initial chaining value for a 256-bit output
const IV: [u64; 8] = [
    0xCCD044A12FDB3E13,
    0xE83590301A79A9EB,
    0x55AEA0614F816E6F,
    0x2A2767A4AE9B94DB,
    0xEC06025E74DD7683,
    0xE7A436CDC4746251,
    0xC36FBAF9393AD185,
    0x3EEDBA1833EDFC13,
];

/// Key schedule parity constant
const KEY_PARITY: u64 = 0x1BD11BDAA9FC1A22;

const ROUNDS: usize = 72;

/// Subkey injection interval, in rounds
const INJECT_EVERY: usize = 4;

/// MIX rotation amounts, indexed by `round % 8` then MIX position
const ROTATIONS: [[u32; 4]; 8] = [
    [46, 36, 19, 37],
    [33, 27, 14, 42],
    [17, 49, 36, 39],
    [44, 9, 54, 56],
    [39, 30, 34, 24],
    [13, 50, 10, 17],
    [25, 29, 39, 43],
    [8, 35, 56, 22],
];

/// Word pairs fed to the four MIXes, indexed by `round % 4`
const PERMUTATION: [[usize; 8]; 4] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [2, 1, 4, 7, 6, 5, 0, 3],
    [4, 1, 6, 3, 0, 5, 2, 7],
    [6, 1, 0, 7, 2, 5, 4, 3],
];

// Tweak word 1 flags
const FLAG_FIRST: u64 = 1 << 62;
const FLAG_FINAL: u64 = 1 << 63;
const TYPE_MESSAGE: u64 = 48 << 56;
const TYPE_OUTPUT: u64 = 63 << 56;

struct Skein512 {
    state: [u64; 8],
    tweak: [u64; 2],
}

impl Skein512 {
    fn new(iv: [u64; 8], block_type: u64) -> Self {
        Self {
            state: iv,
            tweak: [0, FLAG_FIRST | block_type],
        }
    }

    /// One UBI step: encrypt `block` under the chaining value, then XOR the plaintext back in
    fn process_block(&mut self, block: &Block, byte_count: u64) {
        self.tweak[0] += byte_count;

        let mut key = [0u64; 9];
        key[..8].copy_from_slice(&self.state);
        key[8] = self.state.iter().fold(KEY_PARITY, |acc, word| acc ^ word);
        let tweak = [self.tweak[0], self.tweak[1], self.tweak[0] ^ self.tweak[1]];

        let mut w = [0u64; 8];
        for (i, word) in w.iter_mut().enumerate() {
            *word = load_u64_le(block, i * 8);
        }

        let mut x = w;
        inject_subkey(&mut x, &key, &tweak, 0);
        for round in 0..ROUNDS {
            mix(&mut x, round);
            if round % INJECT_EVERY == INJECT_EVERY - 1 {
                inject_subkey(&mut x, &key, &tweak, round / INJECT_EVERY + 1);
            }
        }

        for i in 0..8 {
            self.state[i] = x[i] ^ w[i];
        }
        self.tweak[1] &= !FLAG_FIRST;
    }

    /// Restart the tweak for a new UBI invocation, keeping the chaining value
    fn start(&mut self, block_type: u64) {
        self.tweak = [0, FLAG_FIRST | block_type];
    }
}

#[inline(always)]
fn mix(x: &mut [u64; 8], round: usize) {
    let order = &PERMUTATION[round % PERMUTATION.len()];
    let rotation = &ROTATIONS[round % ROTATIONS.len()];
    for (pair, r) in order.chunks_exact(2).zip(rotation.iter()) {
        let (a, b) = (pair[0], pair[1]);
        x[a] = x[a].wrapping_add(x[b]);
        x[b] = x[b].rotate_left(*r) ^ x[a];
    }
}

#[inline(always)]
fn inject_subkey(x: &mut [u64; 8], key: &[u64; 9], tweak: &[u64; 3], s: usize) {
    for (i, word) in x.iter_mut().enumerate() {
        *word = word.wrapping_add(key[(s + i) % 9]);
    }
    x[5] = x[5].wrapping_add(tweak[s % 3]);
    x[6] = x[6].wrapping_add(tweak[(s + 1) % 3]);
    x[7] = x[7].wrapping_add(s as u64);
}

/// Skein-512-256 of a 200-byte input
pub fn skein512_256(input: &Message) -> Digest {
    let mut ctx = Skein512::new(IV, TYPE_MESSAGE);

    for index in 0..FULL_BLOCKS {
        ctx.process_block(&full_block(input, index), BLOCK_SIZE as u64);
    }

    ctx.tweak[1] |= FLAG_FINAL;
    ctx.process_block(&tail_block(input), TAIL_SIZE as u64);

    // Output transform over a single zero counter block
    ctx.start(TYPE_OUTPUT | FLAG_FINAL);
    ctx.process_block(&[0u8; BLOCK_SIZE], 8);

    let mut digest = [0u8; DIGEST_SIZE];
    for (i, word) in ctx.state.iter().take(DIGEST_SIZE / 8).enumerate() {
        store_u64_le(&mut digest, i * 8, *word);
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPE_CONFIG: u64 = 4 << 56;

    #[test]
    fn test_iv_derives_from_config_block() {
        // Config UBI: schema "SHA3", version 1, 256 output bits, no tree
        let mut config = [0u8; BLOCK_SIZE];
        config[..4].copy_from_slice(b"SHA3");
        config[4..6].copy_from_slice(&1u16.to_le_bytes());
        config[8..16].copy_from_slice(&256u64.to_le_bytes());

        let mut ctx = Skein512::new([0; 8], TYPE_CONFIG | FLAG_FINAL);
        ctx.process_block(&config, 32);
        assert_eq!(ctx.state, IV);
    }

    #[test]
    fn test_tweak_flags() {
        assert_eq!(FLAG_FIRST | TYPE_MESSAGE, 0x7000_0000_0000_0000);
        assert_eq!(FLAG_FIRST | FLAG_FINAL | TYPE_OUTPUT, 0xFF00_0000_0000_0000);
        assert_eq!(KEY_PARITY, 2004413935125273122);
    }

    #[test]
    fn test_first_flag_cleared_after_block() {
        let mut ctx = Skein512::new(IV, TYPE_MESSAGE);
        ctx.process_block(&[0u8; BLOCK_SIZE], 64);
        assert_eq!(ctx.tweak, [64, TYPE_MESSAGE]);
    }
}
