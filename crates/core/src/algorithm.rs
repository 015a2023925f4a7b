//! Uniform handle over the four hash functions
//!
//! A dispatcher picks an [`Algorithm`] by whatever rule it owns; this module
//! only names the functions and gives them one shared shape.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::params::{DIGEST_SIZE, Digest, INPUT_SIZE, Message};
use crate::{blake256, groestl256, jh256, skein512_256};

/// Signature shared by all four hash functions
pub type HashFn = fn(&Message) -> Digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Blake256,
    Groestl256,
    Jh256,
    Skein512_256,
}

impl Algorithm {
    /// Every algorithm in the battery
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Blake256,
        Algorithm::Groestl256,
        Algorithm::Jh256,
        Algorithm::Skein512_256,
    ];

    /// Short lowercase name, as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Blake256 => "blake",
            Algorithm::Groestl256 => "groestl",
            Algorithm::Jh256 => "jh",
            Algorithm::Skein512_256 => "skein",
        }
    }

    pub const fn hash_fn(self) -> HashFn {
        match self {
            Algorithm::Blake256 => blake256,
            Algorithm::Groestl256 => groestl256,
            Algorithm::Jh256 => jh256,
            Algorithm::Skein512_256 => skein512_256,
        }
    }

    #[inline]
    pub fn hash(self, input: &Message) -> Digest {
        (self.hash_fn())(input)
    }

    /// Hash a slice, rejecting anything that is not exactly 200 bytes
    pub fn hash_slice(self, input: &[u8]) -> Result<Digest, Error> {
        Ok(self.hash(message_from_slice(input)?))
    }

    /// Hash `input` into a caller-provided 32-byte buffer
    pub fn hash_into(self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        if output.len() != DIGEST_SIZE {
            return Err(Error::InvalidOutputLength {
                expected: DIGEST_SIZE,
                actual: output.len(),
            });
        }
        let digest = self.hash_slice(input)?;
        output.copy_from_slice(&digest);
        Ok(())
    }

    /// Hash many independent inputs
    ///
    /// Digests come back in input order.
    #[cfg(feature = "parallel")]
    pub fn hash_batch(self, inputs: &[Message]) -> Vec<Digest> {
        let f = self.hash_fn();
        inputs.par_iter().map(f).collect()
    }

    /// Hash many independent inputs (sequential fallback)
    #[cfg(not(feature = "parallel"))]
    pub fn hash_batch(self, inputs: &[Message]) -> Vec<Digest> {
        let f = self.hash_fn();
        inputs.iter().map(f).collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let algorithm = if name.eq_ignore_ascii_case("blake") || name.eq_ignore_ascii_case("blake256")
        {
            Algorithm::Blake256
        } else if name.eq_ignore_ascii_case("groestl") || name.eq_ignore_ascii_case("groestl256") {
            Algorithm::Groestl256
        } else if name.eq_ignore_ascii_case("jh") || name.eq_ignore_ascii_case("jh256") {
            Algorithm::Jh256
        } else if name.eq_ignore_ascii_case("skein")
            || name.eq_ignore_ascii_case("skein512-256")
            || name.eq_ignore_ascii_case("skein512_256")
        {
            Algorithm::Skein512_256
        } else {
            return Err(Error::UnknownAlgorithm);
        };
        Ok(algorithm)
    }
}

/// View a slice as a 200-byte message
pub fn message_from_slice(input: &[u8]) -> Result<&Message, Error> {
    input.try_into().map_err(|_| Error::InvalidInputLength {
        expected: INPUT_SIZE,
        actual: input.len(),
    })
}
