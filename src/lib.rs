//! Auxiliary Proof-of-Work Hashes
//!
//! Command-line and reporting layer over [`auxhash_core`].
//!
//! # Overview
//!
//! A node's proof-of-work step produces a 200-byte state, then runs one of
//! four standard hash functions over it to get the final 32-byte digest. The
//! four functions live in the core crate; this crate adds hex input parsing,
//! algorithm selection by name and serializable digest reports.
//!
//! # Example
//!
//! ```rust
//! use auxhash::algorithm::Algorithm;
//! use auxhash::report::{parse_message, DigestReport};
//!
//! let message = parse_message(&"00".repeat(200)).unwrap();
//! let report = DigestReport::new(Algorithm::Blake256, &message);
//!
//! assert_eq!(report.algorithm, "blake");
//! assert_eq!(
//!     report.digest,
//!     "6879a6ed74b61e9bf13bd3124b2bca08b33b7226f3bcb328888ba3d4613af43a"
//! );
//! ```

// Re-export the core algorithms
pub use auxhash_core as algorithm;

pub mod report;

// Convenience re-exports
pub use algorithm::{blake256, groestl256, jh256, skein512_256, Algorithm, Digest, Message};
