//! BLAKE-256 specialized to a 200-byte input
//!
//! Three full blocks go through the 14-round compression function, followed
//! by one padded block carrying the 8-byte tail and the 1600-bit length.
//! The salt is always zero.

use crate::bytes::{full_block, load_u32_be, store_u32_be, tail_block};
use crate::params::{Block, DIGEST_SIZE, Digest, FULL_BLOCKS, INPUT_BITS, Message, TAIL_SIZE};

/// Initial chain value (shared with SHA-256)
const IV: [u32; 8] = [
    0x6A09E667, 0xBB67AE85, 0x3C6EF372, 0xA54FF53A, 0x510E527F, 0x9B05688C, 0x1F83D9AB, 0x5BE0CD19,
];

/// Round constants (leading digits of pi)
const CONSTANTS: [u32; 16] = [
    0x243F6A88, 0x85A308D3, 0x13198A2E, 0x03707344, 0xA4093822, 0x299F31D0, 0x082EFA98, 0xEC4E6C89,
    0x452821E6, 0x38D01377, 0xBE5466CF, 0x34E90C6C, 0xC0AC29B7, 0xC97C50DD, 0x3F84D5B5, 0xB5470917,
];

/// Message word permutations; round `r` uses `SIGMA[r % 10]`
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

const ROUNDS: usize = 14;

/// Working-word quadruples touched by the 8 G mixes of a round:
/// four columns, then four diagonals. Mix `i` consumes message words
/// `sigma[2i]` and `sigma[2i + 1]`.
const LANES: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Block size in bits, the counter step for a full block
const BLOCK_BITS: u64 = 512;

struct Blake256 {
    chain: [u32; 8],
    salt: [u32; 4],
    /// Message bits processed so far, including the block being compressed
    counter: u64,
}

impl Blake256 {
    fn new() -> Self {
        Self {
            chain: IV,
            salt: [0; 4],
            counter: 0,
        }
    }

    fn compress(&mut self, block: &Block, bits: u64) {
        self.counter += bits;
        let t0 = self.counter as u32;
        let t1 = (self.counter >> 32) as u32;

        let mut m = [0u32; 16];
        for (i, word) in m.iter_mut().enumerate() {
            *word = load_u32_be(block, i * 4);
        }

        let mut v = [0u32; 16];
        v[..8].copy_from_slice(&self.chain);
        for i in 0..4 {
            v[8 + i] = self.salt[i] ^ CONSTANTS[i];
        }
        v[12] = CONSTANTS[4] ^ t0;
        v[13] = CONSTANTS[5] ^ t0;
        v[14] = CONSTANTS[6] ^ t1;
        v[15] = CONSTANTS[7] ^ t1;

        for round in 0..ROUNDS {
            let sigma = &SIGMA[round % SIGMA.len()];
            for (i, lane) in LANES.iter().enumerate() {
                g(&mut v, lane, &m, sigma[2 * i], sigma[2 * i + 1]);
            }
        }

        for (i, word) in v.iter().enumerate() {
            self.chain[i % 8] ^= word;
        }
        for (i, word) in self.chain.iter_mut().enumerate() {
            *word ^= self.salt[i % 4];
        }
    }

    fn finalize(&self) -> Digest {
        let mut out = [0u8; DIGEST_SIZE];
        for (i, word) in self.chain.iter().enumerate() {
            store_u32_be(&mut out, i * 4, *word);
        }
        out
    }
}

/// The G mixing function on lanes `(a, b, c, d)` with message words `x`, `y`
#[inline(always)]
fn g(v: &mut [u32; 16], lane: &[usize; 4], m: &[u32; 16], x: usize, y: usize) {
    let [a, b, c, d] = *lane;

    v[a] = v[a].wrapping_add(m[x] ^ CONSTANTS[y]).wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);

    v[a] = v[a].wrapping_add(m[y] ^ CONSTANTS[x]).wrapping_add(v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}

/// BLAKE-256 of a 200-byte input
pub fn blake256(input: &Message) -> Digest {
    let mut state = Blake256::new();

    for index in 0..FULL_BLOCKS {
        state.compress(&full_block(input, index), BLOCK_BITS);
    }

    // 0x80 after the data, 0x01 closing the padding right before the length
    let mut last = tail_block(input);
    last[TAIL_SIZE] = 0x80;
    last[55] |= 0x01;
    last[56..].copy_from_slice(&INPUT_BITS.to_be_bytes());
    state.compress(&last, (TAIL_SIZE as u64) * 8);

    debug_assert_eq!(state.counter, INPUT_BITS);
    state.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fract(x: f64) -> f64 {
        let f = x - (x as i64) as f64;
        if f < 0.0 { f + 1.0 } else { f }
    }

    fn pow16_mod(mut exp: u64, modulus: u64) -> u64 {
        let mut result = 1 % modulus;
        let mut base = 16 % modulus;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base % modulus;
            }
            base = base * base % modulus;
            exp >>= 1;
        }
        result
    }

    /// Fractional part of sum_k 16^(d-k) / (8k + j)
    fn bbp_series(j: u64, d: u64) -> f64 {
        let mut sum = 0.0;
        for k in 0..=d {
            let den = 8 * k + j;
            sum = fract(sum + pow16_mod(d - k, den) as f64 / den as f64);
        }
        let mut scale = 1.0 / 16.0;
        for k in d + 1..d + 16 {
            sum += scale / (8 * k + j) as f64;
            scale /= 16.0;
        }
        fract(sum)
    }

    /// Hex digits `8 * index ..` of the fractional part of pi, via Bailey-Borwein-Plouffe
    fn pi_fraction_word(index: usize) -> u32 {
        let d = 8 * index as u64;
        let x = 4.0 * bbp_series(1, d) - 2.0 * bbp_series(4, d) - bbp_series(5, d) - bbp_series(6, d);
        (fract(x) * 4_294_967_296.0) as u32
    }

    #[test]
    fn test_iv_is_square_root_fractions() {
        let primes = [2u128, 3, 5, 7, 11, 13, 17, 19];
        for (i, p) in primes.iter().enumerate() {
            let root = (p << 64).isqrt();
            assert_eq!(root as u32, IV[i], "IV word {}", i);
        }
    }

    #[test]
    fn test_constants_are_pi_digits() {
        for (i, word) in CONSTANTS.iter().enumerate() {
            assert_eq!(pi_fraction_word(i), *word, "constant word {}", i);
        }
    }

    #[test]
    fn test_sigma_rows_are_permutations() {
        for (r, row) in SIGMA.iter().enumerate() {
            let mut seen = [false; 16];
            for &index in row {
                assert!(!seen[index], "sigma row {} repeats index {}", r, index);
                seen[index] = true;
            }
        }
        assert_eq!(SIGMA[0], core::array::from_fn::<usize, 16, _>(|i| i));
    }

    #[test]
    fn test_lanes_cover_every_word_twice() {
        let mut hits = [0u32; 16];
        for lane in &LANES {
            for &word in lane {
                hits[word] += 1;
            }
        }
        assert!(hits.iter().all(|&h| h == 2));
    }

    #[test]
    fn test_final_block_layout() {
        let input = [0xFFu8; 200];
        let mut last = tail_block(&input);
        last[TAIL_SIZE] = 0x80;
        last[55] |= 0x01;
        last[56..].copy_from_slice(&INPUT_BITS.to_be_bytes());

        assert_eq!(&last[..8], &[0xFF; 8]);
        assert_eq!(last[8], 0x80);
        assert_eq!(last[55], 0x01);
        assert_eq!(&last[56..], &[0, 0, 0, 0, 0, 0, 0x06, 0x40]);
        assert!(last[9..55].iter().all(|&b| b == 0));
    }
}
