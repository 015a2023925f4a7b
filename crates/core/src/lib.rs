//! # Auxiliary Proof-of-Work Hashes
//!
//! Four hash functions specialized to the node's proof-of-work state:
//! BLAKE-256, Groestl-256, JH-256 and Skein-512-256. Each one takes exactly
//! 200 bytes and returns a 32-byte digest that is bit-identical to the
//! reference algorithm on that input.
//!
//! The functions are hard-coded for the fixed length: three full 64-byte
//! blocks, then an 8-byte tail with the algorithm's padding. There is no
//! streaming interface and they are not usable for inputs of other sizes.
//!
//! ## Features
//!
//! - **Fixed-size types**: [`Message`] and [`Digest`] are plain arrays, so the
//!   200/32-byte contract is checked by the compiler
//! - **Uniform shape**: every function is a [`HashFn`]; [`Algorithm`] wraps
//!   them for callers that pick one at runtime
//! - **Pure**: no allocation, no shared mutable state, safe to call from any
//!   number of threads
//! - **Self-test**: [`verify_known_answers`] checks pinned reference digests
//!
//! ## Example
//!
//! ```rust
//! use auxhash_core::{Algorithm, blake256, message_from_slice};
//!
//! let state = [0u8; 200];
//! let digest = blake256(&state);
//! assert_eq!(digest.len(), 32);
//!
//! // Runtime selection over a slice of unknown length
//! let bytes = vec![0u8; 200];
//! let message = message_from_slice(&bytes).unwrap();
//! assert_eq!(Algorithm::Blake256.hash(message), digest);
//!
//! // Anything but 200 bytes is rejected
//! assert!(Algorithm::Jh256.hash_slice(&bytes[..199]).is_err());
//! ```
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! auxhash-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod algorithm;
mod blake;
mod bytes;
mod error;
mod groestl;
mod jh;
mod known_answers;
mod params;
mod skein;

#[cfg(feature = "std")]
pub mod ffi;

pub use algorithm::{Algorithm, HashFn, message_from_slice};
pub use blake::blake256;
pub use error::Error;
pub use groestl::groestl256;
pub use jh::jh256;
pub use known_answers::{KNOWN_ANSWERS, KnownAnswer, verify_known_answers};
pub use params::*;
pub use skein::skein512_256;
