//! Fixed sizes shared by the whole hash battery
//!
//! Every function in this crate consumes exactly one 200-byte proof-of-work
//! state and produces a 32-byte digest. All four algorithms compress 64-byte
//! blocks, so the input always splits into three full blocks and an 8-byte tail.

/// Input size in bytes
pub const INPUT_SIZE: usize = 200;

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Compression block size in bytes (same for all four algorithms)
pub const BLOCK_SIZE: usize = 64;

/// Number of complete blocks in the input
pub const FULL_BLOCKS: usize = INPUT_SIZE / BLOCK_SIZE;

/// Bytes left over after the full blocks
pub const TAIL_SIZE: usize = INPUT_SIZE % BLOCK_SIZE;

/// Input length in bits, as written into the length-padding fields
pub const INPUT_BITS: u64 = (INPUT_SIZE as u64) * 8;

/// A 200-byte proof-of-work state
pub type Message = [u8; INPUT_SIZE];

/// A 32-byte digest
pub type Digest = [u8; DIGEST_SIZE];

/// A single compression block
pub type Block = [u8; BLOCK_SIZE];
