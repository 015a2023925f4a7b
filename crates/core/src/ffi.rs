//! C FFI bindings for the node's native code
//!
//! Every hash function gets the same C signature:
//!
//! ```c
//! int32_t auxhash_blake256(const uint8_t *input, size_t input_len,
//!                          uint8_t *output, size_t output_len);
//! ```
//!
//! Return codes: `0` success, `-1` null pointer, `-2` input is not 200 bytes,
//! `-3` output is not 32 bytes. Nothing is written on failure.
//!
//! # Safety
//!
//! Null pointers and wrong lengths are caught, but a non-null `input` must
//! point to `input_len` readable bytes and a non-null `output` to
//! `output_len` writable bytes that do not overlap the input.

use crate::{Algorithm, DIGEST_SIZE, INPUT_SIZE, Message};
use core::ptr;

pub const AUXHASH_OK: i32 = 0;
pub const AUXHASH_NULL_POINTER: i32 = -1;
pub const AUXHASH_BAD_INPUT_LENGTH: i32 = -2;
pub const AUXHASH_BAD_OUTPUT_LENGTH: i32 = -3;

/// # Safety
///
/// See the module docs.
unsafe fn hash_raw(
    algorithm: Algorithm,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    if input.is_null() || output.is_null() {
        return AUXHASH_NULL_POINTER;
    }
    if input_len != INPUT_SIZE {
        return AUXHASH_BAD_INPUT_LENGTH;
    }
    if output_len != DIGEST_SIZE {
        return AUXHASH_BAD_OUTPUT_LENGTH;
    }

    // SAFETY: both pointers are non-null and the lengths match the array
    // sizes; the caller vouches for the memory behind them
    unsafe {
        let message = &*(input as *const Message);
        let digest = algorithm.hash(message);
        ptr::copy_nonoverlapping(digest.as_ptr(), output, DIGEST_SIZE);
    }

    AUXHASH_OK
}

/// BLAKE-256 of a 200-byte input into a 32-byte output
///
/// # Safety
///
/// See the module docs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn auxhash_blake256(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    unsafe { hash_raw(Algorithm::Blake256, input, input_len, output, output_len) }
}

/// Groestl-256 of a 200-byte input into a 32-byte output
///
/// # Safety
///
/// See the module docs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn auxhash_groestl256(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    unsafe { hash_raw(Algorithm::Groestl256, input, input_len, output, output_len) }
}

/// JH-256 of a 200-byte input into a 32-byte output
///
/// # Safety
///
/// See the module docs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn auxhash_jh256(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    unsafe { hash_raw(Algorithm::Jh256, input, input_len, output, output_len) }
}

/// Skein-512-256 of a 200-byte input into a 32-byte output
///
/// # Safety
///
/// See the module docs.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn auxhash_skein512_256(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> i32 {
    unsafe { hash_raw(Algorithm::Skein512_256, input, input_len, output, output_len) }
}

/// Benchmark: run N rounds of all four hashes and return total microseconds
#[unsafe(no_mangle)]
pub extern "C" fn auxhash_benchmark(iterations: u32) -> u64 {
    use std::time::Instant;

    let mut input = [0u8; INPUT_SIZE];

    let start = Instant::now();
    for i in 0..iterations {
        input[..4].copy_from_slice(&i.to_le_bytes());
        for algorithm in Algorithm::ALL {
            let _ = core::hint::black_box(algorithm.hash(&input));
        }
    }
    let elapsed = start.elapsed();

    elapsed.as_micros() as u64
}

/// Get hash rate (hashes per second) from a benchmark run
///
/// Each iteration of [`auxhash_benchmark`] computes four hashes.
#[unsafe(no_mangle)]
pub extern "C" fn auxhash_hashrate(iterations: u32, microseconds: u64) -> f64 {
    if microseconds == 0 {
        return 0.0;
    }
    (iterations as f64 * Algorithm::ALL.len() as f64) / (microseconds as f64 / 1_000_000.0)
}
