//! Pinned reference digests
//!
//! Digests of the all-zero and all-`0xFF` 200-byte inputs, computed once with
//! the reference implementations of each algorithm. [`verify_known_answers`]
//! lets a node check at startup that the battery was built correctly for its
//! target.

use hex_literal::hex;

use crate::Algorithm;
use crate::error::Error;
use crate::params::{Digest, INPUT_SIZE};

/// A filled input and the digest the reference implementation produces for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownAnswer {
    pub algorithm: Algorithm,
    /// Every input byte is set to this value
    pub fill: u8,
    pub digest: Digest,
}

pub const KNOWN_ANSWERS: [KnownAnswer; 8] = [
    KnownAnswer {
        algorithm: Algorithm::Blake256,
        fill: 0x00,
        digest: hex!("6879a6ed74b61e9bf13bd3124b2bca08b33b7226f3bcb328888ba3d4613af43a"),
    },
    KnownAnswer {
        algorithm: Algorithm::Blake256,
        fill: 0xFF,
        digest: hex!("76d8b04ad706ab239f4bef2c17f7fbced9c463ffd2eed186138b306644c1a382"),
    },
    KnownAnswer {
        algorithm: Algorithm::Groestl256,
        fill: 0x00,
        digest: hex!("24e319e51ee50f15f2d9ea4de48fa80bb45d4e5304fd974aa748d901f60c3f70"),
    },
    KnownAnswer {
        algorithm: Algorithm::Groestl256,
        fill: 0xFF,
        digest: hex!("108f73fb26eb26a2d6feae8d2d24233ee21878798be7375d95754c78e252530a"),
    },
    KnownAnswer {
        algorithm: Algorithm::Jh256,
        fill: 0x00,
        digest: hex!("c871ea430737cf748d7419d70adf6474c5e5aff0e779e5e0978d898d3707621f"),
    },
    KnownAnswer {
        algorithm: Algorithm::Jh256,
        fill: 0xFF,
        digest: hex!("6ed6e7b22356869e9e302551851aa265a9591694b9cca4b2c13ee948daeb82f1"),
    },
    KnownAnswer {
        algorithm: Algorithm::Skein512_256,
        fill: 0x00,
        digest: hex!("b20266521d39d623bef4c1b6755b486fc87d02c331c63a3b3ff816876cf8a06a"),
    },
    KnownAnswer {
        algorithm: Algorithm::Skein512_256,
        fill: 0xFF,
        digest: hex!("b4ce5e989bfe368b2b0adb350767175ec050a6bb3187f96627a9be3d62a41a3a"),
    },
];

impl KnownAnswer {
    pub fn input(&self) -> [u8; INPUT_SIZE] {
        [self.fill; INPUT_SIZE]
    }

    pub fn check(&self) -> bool {
        self.algorithm.hash(&self.input()) == self.digest
    }
}

/// Run every known-answer vector, failing on the first mismatch
pub fn verify_known_answers() -> Result<(), Error> {
    for answer in &KNOWN_ANSWERS {
        if !answer.check() {
            return Err(Error::KnownAnswerMismatch {
                algorithm: answer.algorithm,
            });
        }
    }
    Ok(())
}
