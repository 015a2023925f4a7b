//! JH-256 specialized to a 200-byte input
//!
//! Uses the bitslice form of the E8 permutation: the 1024-bit state is eight
//! 128-bit words, each held as two 64-bit lanes. Even words feed the first
//! S-box, odd words the second. The odd words also take the per-round bit
//! swaps.

use crate::bytes::{full_block, load_u64_le, store_u64_le, tail_block};
use crate::params::{Block, DIGEST_SIZE, Digest, FULL_BLOCKS, INPUT_BITS, Message, TAIL_SIZE};

const ROUNDS: usize = 42;

/// Rounds per swap cycle; the last round of each cycle swaps 64-bit lanes
const CYCLE: usize = 7;

type State = [[u64; 2]; 8];

/// JH-256 initial state, as raw bytes
const IV: [u8; 128] = [
    0xeb, 0x98, 0xa3, 0x41, 0x2c, 0x20, 0xd3, 0xeb, 0x92, 0xcd, 0xbe, 0x7b, 0x9c, 0xb2, 0x45, 0xc1,
    0x1c, 0x93, 0x51, 0x91, 0x60, 0xd4, 0xc7, 0xfa, 0x26, 0x00, 0x82, 0xd6, 0x7e, 0x50, 0x8a, 0x03,
    0xa4, 0x23, 0x9e, 0x26, 0x77, 0x26, 0xb9, 0x45, 0xe0, 0xfb, 0x1a, 0x48, 0xd4, 0x1a, 0x94, 0x77,
    0xcd, 0xb5, 0xab, 0x26, 0x02, 0x6b, 0x17, 0x7a, 0x56, 0xf0, 0x24, 0x42, 0x0f, 0xff, 0x2f, 0xa8,
    0x71, 0xa3, 0x96, 0x89, 0x7f, 0x2e, 0x4d, 0x75, 0x1d, 0x14, 0x49, 0x08, 0xf7, 0x7d, 0xe2, 0x62,
    0x27, 0x76, 0x95, 0xf7, 0x76, 0x24, 0x8f, 0x94, 0x87, 0xd5, 0xb6, 0x57, 0x47, 0x80, 0x29, 0x6c,
    0x5c, 0x5e, 0x27, 0x2d, 0xac, 0x8e, 0x0d, 0x6c, 0x51, 0x84, 0x50, 0xc6, 0x57, 0x05, 0x7a, 0x0f,
    0x7b, 0xe4, 0xd3, 0x67, 0x70, 0x24, 0x12, 0xea, 0x89, 0xe3, 0xab, 0x13, 0xd3, 0x1c, 0xd7, 0x69,
];

/// E8 round constants in bitslice layout, one 256-bit constant per round
const ROUND_CONSTANTS: [[u8; 32]; ROUNDS] = [
    [
        0x72, 0xd5, 0xde, 0xa2, 0xdf, 0x15, 0xf8, 0x67, 0x7b, 0x84, 0x15, 0x0a, 0xb7, 0x23, 0x15, 0x57,
        0x81, 0xab, 0xd6, 0x90, 0x4d, 0x5a, 0x87, 0xf6, 0x4e, 0x9f, 0x4f, 0xc5, 0xc3, 0xd1, 0x2b, 0x40,
    ],
    [
        0xea, 0x98, 0x3a, 0xe0, 0x5c, 0x45, 0xfa, 0x9c, 0x03, 0xc5, 0xd2, 0x99, 0x66, 0xb2, 0x99, 0x9a,
        0x66, 0x02, 0x96, 0xb4, 0xf2, 0xbb, 0x53, 0x8a, 0xb5, 0x56, 0x14, 0x1a, 0x88, 0xdb, 0xa2, 0x31,
    ],
    [
        0x03, 0xa3, 0x5a, 0x5c, 0x9a, 0x19, 0x0e, 0xdb, 0x40, 0x3f, 0xb2, 0x0a, 0x87, 0xc1, 0x44, 0x10,
        0x1c, 0x05, 0x19, 0x80, 0x84, 0x9e, 0x95, 0x1d, 0x6f, 0x33, 0xeb, 0xad, 0x5e, 0xe7, 0xcd, 0xdc,
    ],
    [
        0x10, 0xba, 0x13, 0x92, 0x02, 0xbf, 0x6b, 0x41, 0xdc, 0x78, 0x65, 0x15, 0xf7, 0xbb, 0x27, 0xd0,
        0x0a, 0x2c, 0x81, 0x39, 0x37, 0xaa, 0x78, 0x50, 0x3f, 0x1a, 0xbf, 0xd2, 0x41, 0x00, 0x91, 0xd3,
    ],
    [
        0x42, 0x2d, 0x5a, 0x0d, 0xf6, 0xcc, 0x7e, 0x90, 0xdd, 0x62, 0x9f, 0x9c, 0x92, 0xc0, 0x97, 0xce,
        0x18, 0x5c, 0xa7, 0x0b, 0xc7, 0x2b, 0x44, 0xac, 0xd1, 0xdf, 0x65, 0xd6, 0x63, 0xc6, 0xfc, 0x23,
    ],
    [
        0x97, 0x6e, 0x6c, 0x03, 0x9e, 0xe0, 0xb8, 0x1a, 0x21, 0x05, 0x45, 0x7e, 0x44, 0x6c, 0xec, 0xa8,
        0xee, 0xf1, 0x03, 0xbb, 0x5d, 0x8e, 0x61, 0xfa, 0xfd, 0x96, 0x97, 0xb2, 0x94, 0x83, 0x81, 0x97,
    ],
    [
        0x4a, 0x8e, 0x85, 0x37, 0xdb, 0x03, 0x30, 0x2f, 0x2a, 0x67, 0x8d, 0x2d, 0xfb, 0x9f, 0x6a, 0x95,
        0x8a, 0xfe, 0x73, 0x81, 0xf8, 0xb8, 0x69, 0x6c, 0x8a, 0xc7, 0x72, 0x46, 0xc0, 0x7f, 0x42, 0x14,
    ],
    [
        0xc5, 0xf4, 0x15, 0x8f, 0xbd, 0xc7, 0x5e, 0xc4, 0x75, 0x44, 0x6f, 0xa7, 0x8f, 0x11, 0xbb, 0x80,
        0x52, 0xde, 0x75, 0xb7, 0xae, 0xe4, 0x88, 0xbc, 0x82, 0xb8, 0x00, 0x1e, 0x98, 0xa6, 0xa3, 0xf4,
    ],
    [
        0x8e, 0xf4, 0x8f, 0x33, 0xa9, 0xa3, 0x63, 0x15, 0xaa, 0x5f, 0x56, 0x24, 0xd5, 0xb7, 0xf9, 0x89,
        0xb6, 0xf1, 0xed, 0x20, 0x7c, 0x5a, 0xe0, 0xfd, 0x36, 0xca, 0xe9, 0x5a, 0x06, 0x42, 0x2c, 0x36,
    ],
    [
        0xce, 0x29, 0x35, 0x43, 0x4e, 0xfe, 0x98, 0x3d, 0x53, 0x3a, 0xf9, 0x74, 0x73, 0x9a, 0x4b, 0xa7,
        0xd0, 0xf5, 0x1f, 0x59, 0x6f, 0x4e, 0x81, 0x86, 0x0e, 0x9d, 0xad, 0x81, 0xaf, 0xd8, 0x5a, 0x9f,
    ],
    [
        0xa7, 0x05, 0x06, 0x67, 0xee, 0x34, 0x62, 0x6a, 0x8b, 0x0b, 0x28, 0xbe, 0x6e, 0xb9, 0x17, 0x27,
        0x47, 0x74, 0x07, 0x26, 0xc6, 0x80, 0x10, 0x3f, 0xe0, 0xa0, 0x7e, 0x6f, 0xc6, 0x7e, 0x48, 0x7b,
    ],
    [
        0x0d, 0x55, 0x0a, 0xa5, 0x4a, 0xf8, 0xa4, 0xc0, 0x91, 0xe3, 0xe7, 0x9f, 0x97, 0x8e, 0xf1, 0x9e,
        0x86, 0x76, 0x72, 0x81, 0x50, 0x60, 0x8d, 0xd4, 0x7e, 0x9e, 0x5a, 0x41, 0xf3, 0xe5, 0xb0, 0x62,
    ],
    [
        0xfc, 0x9f, 0x1f, 0xec, 0x40, 0x54, 0x20, 0x7a, 0xe3, 0xe4, 0x1a, 0x00, 0xce, 0xf4, 0xc9, 0x84,
        0x4f, 0xd7, 0x94, 0xf5, 0x9d, 0xfa, 0x95, 0xd8, 0x55, 0x2e, 0x7e, 0x11, 0x24, 0xc3, 0x54, 0xa5,
    ],
    [
        0x5b, 0xdf, 0x72, 0x28, 0xbd, 0xfe, 0x6e, 0x28, 0x78, 0xf5, 0x7f, 0xe2, 0x0f, 0xa5, 0xc4, 0xb2,
        0x05, 0x89, 0x7c, 0xef, 0xee, 0x49, 0xd3, 0x2e, 0x44, 0x7e, 0x93, 0x85, 0xeb, 0x28, 0x59, 0x7f,
    ],
    [
        0x70, 0x5f, 0x69, 0x37, 0xb3, 0x24, 0x31, 0x4a, 0x5e, 0x86, 0x28, 0xf1, 0x1d, 0xd6, 0xe4, 0x65,
        0xc7, 0x1b, 0x77, 0x04, 0x51, 0xb9, 0x20, 0xe7, 0x74, 0xfe, 0x43, 0xe8, 0x23, 0xd4, 0x87, 0x8a,
    ],
    [
        0x7d, 0x29, 0xe8, 0xa3, 0x92, 0x76, 0x94, 0xf2, 0xdd, 0xcb, 0x7a, 0x09, 0x9b, 0x30, 0xd9, 0xc1,
        0x1d, 0x1b, 0x30, 0xfb, 0x5b, 0xdc, 0x1b, 0xe0, 0xda, 0x24, 0x49, 0x4f, 0xf2, 0x9c, 0x82, 0xbf,
    ],
    [
        0xa4, 0xe7, 0xba, 0x31, 0xb4, 0x70, 0xbf, 0xff, 0x0d, 0x32, 0x44, 0x05, 0xde, 0xf8, 0xbc, 0x48,
        0x3b, 0xae, 0xfc, 0x32, 0x53, 0xbb, 0xd3, 0x39, 0x45, 0x9f, 0xc3, 0xc1, 0xe0, 0x29, 0x8b, 0xa0,
    ],
    [
        0xe5, 0xc9, 0x05, 0xfd, 0xf7, 0xae, 0x09, 0x0f, 0x94, 0x70, 0x34, 0x12, 0x42, 0x90, 0xf1, 0x34,
        0xa2, 0x71, 0xb7, 0x01, 0xe3, 0x44, 0xed, 0x95, 0xe9, 0x3b, 0x8e, 0x36, 0x4f, 0x2f, 0x98, 0x4a,
    ],
    [
        0x88, 0x40, 0x1d, 0x63, 0xa0, 0x6c, 0xf6, 0x15, 0x47, 0xc1, 0x44, 0x4b, 0x87, 0x52, 0xaf, 0xff,
        0x7e, 0xbb, 0x4a, 0xf1, 0xe2, 0x0a, 0xc6, 0x30, 0x46, 0x70, 0xb6, 0xc5, 0xcc, 0x6e, 0x8c, 0xe6,
    ],
    [
        0xa4, 0xd5, 0xa4, 0x56, 0xbd, 0x4f, 0xca, 0x00, 0xda, 0x9d, 0x84, 0x4b, 0xc8, 0x3e, 0x18, 0xae,
        0x73, 0x57, 0xce, 0x45, 0x30, 0x64, 0xd1, 0xad, 0xe8, 0xa6, 0xce, 0x68, 0x14, 0x5c, 0x25, 0x67,
    ],
    [
        0xa3, 0xda, 0x8c, 0xf2, 0xcb, 0x0e, 0xe1, 0x16, 0x33, 0xe9, 0x06, 0x58, 0x9a, 0x94, 0x99, 0x9a,
        0x1f, 0x60, 0xb2, 0x20, 0xc2, 0x6f, 0x84, 0x7b, 0xd1, 0xce, 0xac, 0x7f, 0xa0, 0xd1, 0x85, 0x18,
    ],
    [
        0x32, 0x59, 0x5b, 0xa1, 0x8d, 0xdd, 0x19, 0xd3, 0x50, 0x9a, 0x1c, 0xc0, 0xaa, 0xa5, 0xb4, 0x46,
        0x9f, 0x3d, 0x63, 0x67, 0xe4, 0x04, 0x6b, 0xba, 0xf6, 0xca, 0x19, 0xab, 0x0b, 0x56, 0xee, 0x7e,
    ],
    [
        0x1f, 0xb1, 0x79, 0xea, 0xa9, 0x28, 0x21, 0x74, 0xe9, 0xbd, 0xf7, 0x35, 0x3b, 0x36, 0x51, 0xee,
        0x1d, 0x57, 0xac, 0x5a, 0x75, 0x50, 0xd3, 0x76, 0x3a, 0x46, 0xc2, 0xfe, 0xa3, 0x7d, 0x70, 0x01,
    ],
    [
        0xf7, 0x35, 0xc1, 0xaf, 0x98, 0xa4, 0xd8, 0x42, 0x78, 0xed, 0xec, 0x20, 0x9e, 0x6b, 0x67, 0x79,
        0x41, 0x83, 0x63, 0x15, 0xea, 0x3a, 0xdb, 0xa8, 0xfa, 0xc3, 0x3b, 0x4d, 0x32, 0x83, 0x2c, 0x83,
    ],
    [
        0xa7, 0x40, 0x3b, 0x1f, 0x1c, 0x27, 0x47, 0xf3, 0x59, 0x40, 0xf0, 0x34, 0xb7, 0x2d, 0x76, 0x9a,
        0xe7, 0x3e, 0x4e, 0x6c, 0xd2, 0x21, 0x4f, 0xfd, 0xb8, 0xfd, 0x8d, 0x39, 0xdc, 0x57, 0x59, 0xef,
    ],
    [
        0x8d, 0x9b, 0x0c, 0x49, 0x2b, 0x49, 0xeb, 0xda, 0x5b, 0xa2, 0xd7, 0x49, 0x68, 0xf3, 0x70, 0x0d,
        0x7d, 0x3b, 0xae, 0xd0, 0x7a, 0x8d, 0x55, 0x84, 0xf5, 0xa5, 0xe9, 0xf0, 0xe4, 0xf8, 0x8e, 0x65,
    ],
    [
        0xa0, 0xb8, 0xa2, 0xf4, 0x36, 0x10, 0x3b, 0x53, 0x0c, 0xa8, 0x07, 0x9e, 0x75, 0x3e, 0xec, 0x5a,
        0x91, 0x68, 0x94, 0x92, 0x56, 0xe8, 0x88, 0x4f, 0x5b, 0xb0, 0x5c, 0x55, 0xf8, 0xba, 0xbc, 0x4c,
    ],
    [
        0xe3, 0xbb, 0x3b, 0x99, 0xf3, 0x87, 0x94, 0x7b, 0x75, 0xda, 0xf4, 0xd6, 0x72, 0x6b, 0x1c, 0x5d,
        0x64, 0xae, 0xac, 0x28, 0xdc, 0x34, 0xb3, 0x6d, 0x6c, 0x34, 0xa5, 0x50, 0xb8, 0x28, 0xdb, 0x71,
    ],
    [
        0xf8, 0x61, 0xe2, 0xf2, 0x10, 0x8d, 0x51, 0x2a, 0xe3, 0xdb, 0x64, 0x33, 0x59, 0xdd, 0x75, 0xfc,
        0x1c, 0xac, 0xbc, 0xf1, 0x43, 0xce, 0x3f, 0xa2, 0x67, 0xbb, 0xd1, 0x3c, 0x02, 0xe8, 0x43, 0xb0,
    ],
    [
        0x33, 0x0a, 0x5b, 0xca, 0x88, 0x29, 0xa1, 0x75, 0x7f, 0x34, 0x19, 0x4d, 0xb4, 0x16, 0x53, 0x5c,
        0x92, 0x3b, 0x94, 0xc3, 0x0e, 0x79, 0x4d, 0x1e, 0x79, 0x74, 0x75, 0xd7, 0xb6, 0xee, 0xaf, 0x3f,
    ],
    [
        0xea, 0xa8, 0xd4, 0xf7, 0xbe, 0x1a, 0x39, 0x21, 0x5c, 0xf4, 0x7e, 0x09, 0x4c, 0x23, 0x27, 0x51,
        0x26, 0xa3, 0x24, 0x53, 0xba, 0x32, 0x3c, 0xd2, 0x44, 0xa3, 0x17, 0x4a, 0x6d, 0xa6, 0xd5, 0xad,
    ],
    [
        0xb5, 0x1d, 0x3e, 0xa6, 0xaf, 0xf2, 0xc9, 0x08, 0x83, 0x59, 0x3d, 0x98, 0x91, 0x6b, 0x3c, 0x56,
        0x4c, 0xf8, 0x7c, 0xa1, 0x72, 0x86, 0x60, 0x4d, 0x46, 0xe2, 0x3e, 0xcc, 0x08, 0x6e, 0xc7, 0xf6,
    ],
    [
        0x2f, 0x98, 0x33, 0xb3, 0xb1, 0xbc, 0x76, 0x5e, 0x2b, 0xd6, 0x66, 0xa5, 0xef, 0xc4, 0xe6, 0x2a,
        0x06, 0xf4, 0xb6, 0xe8, 0xbe, 0xc1, 0xd4, 0x36, 0x74, 0xee, 0x82, 0x15, 0xbc, 0xef, 0x21, 0x63,
    ],
    [
        0xfd, 0xc1, 0x4e, 0x0d, 0xf4, 0x53, 0xc9, 0x69, 0xa7, 0x7d, 0x5a, 0xc4, 0x06, 0x58, 0x58, 0x26,
        0x7e, 0xc1, 0x14, 0x16, 0x06, 0xe0, 0xfa, 0x16, 0x7e, 0x90, 0xaf, 0x3d, 0x28, 0x63, 0x9d, 0x3f,
    ],
    [
        0xd2, 0xc9, 0xf2, 0xe3, 0x00, 0x9b, 0xd2, 0x0c, 0x5f, 0xaa, 0xce, 0x30, 0xb7, 0xd4, 0x0c, 0x30,
        0x74, 0x2a, 0x51, 0x16, 0xf2, 0xe0, 0x32, 0x98, 0x0d, 0xeb, 0x30, 0xd8, 0xe3, 0xce, 0xf8, 0x9a,
    ],
    [
        0x4b, 0xc5, 0x9e, 0x7b, 0xb5, 0xf1, 0x79, 0x92, 0xff, 0x51, 0xe6, 0x6e, 0x04, 0x86, 0x68, 0xd3,
        0x9b, 0x23, 0x4d, 0x57, 0xe6, 0x96, 0x67, 0x31, 0xcc, 0xe6, 0xa6, 0xf3, 0x17, 0x0a, 0x75, 0x05,
    ],
    [
        0xb1, 0x76, 0x81, 0xd9, 0x13, 0x32, 0x6c, 0xce, 0x3c, 0x17, 0x52, 0x84, 0xf8, 0x05, 0xa2, 0x62,
        0xf4, 0x2b, 0xcb, 0xb3, 0x78, 0x47, 0x15, 0x47, 0xff, 0x46, 0x54, 0x82, 0x23, 0x93, 0x6a, 0x48,
    ],
    [
        0x38, 0xdf, 0x58, 0x07, 0x4e, 0x5e, 0x65, 0x65, 0xf2, 0xfc, 0x7c, 0x89, 0xfc, 0x86, 0x50, 0x8e,
        0x31, 0x70, 0x2e, 0x44, 0xd0, 0x0b, 0xca, 0x86, 0xf0, 0x40, 0x09, 0xa2, 0x30, 0x78, 0x47, 0x4e,
    ],
    [
        0x65, 0xa0, 0xee, 0x39, 0xd1, 0xf7, 0x38, 0x83, 0xf7, 0x5e, 0xe9, 0x37, 0xe4, 0x2c, 0x3a, 0xbd,
        0x21, 0x97, 0xb2, 0x26, 0x01, 0x13, 0xf8, 0x6f, 0xa3, 0x44, 0xed, 0xd1, 0xef, 0x9f, 0xde, 0xe7,
    ],
    [
        0x8b, 0xa0, 0xdf, 0x15, 0x76, 0x25, 0x92, 0xd9, 0x3c, 0x85, 0xf7, 0xf6, 0x12, 0xdc, 0x42, 0xbe,
        0xd8, 0xa7, 0xec, 0x7c, 0xab, 0x27, 0xb0, 0x7e, 0x53, 0x8d, 0x7d, 0xda, 0xaa, 0x3e, 0xa8, 0xde,
    ],
    [
        0xaa, 0x25, 0xce, 0x93, 0xbd, 0x02, 0x69, 0xd8, 0x5a, 0xf6, 0x43, 0xfd, 0x1a, 0x73, 0x08, 0xf9,
        0xc0, 0x5f, 0xef, 0xda, 0x17, 0x4a, 0x19, 0xa5, 0x97, 0x4d, 0x66, 0x33, 0x4c, 0xfd, 0x21, 0x6a,
    ],
    [
        0x35, 0xb4, 0x98, 0x31, 0xdb, 0x41, 0x15, 0x70, 0xea, 0x1e, 0x0f, 0xbb, 0xed, 0xcd, 0x54, 0x9b,
        0x9a, 0xd0, 0x63, 0xa1, 0x51, 0x97, 0x40, 0x72, 0xf6, 0x75, 0x9d, 0xbf, 0x91, 0x47, 0x6f, 0xe2,
    ],
];

/// Mask selecting the low bit of each group, per swap width 1, 2, 4, 8, 16, 32
const SWAP_MASKS: [(u64, u32); 6] = [
    (0x5555_5555_5555_5555, 1),
    (0x3333_3333_3333_3333, 2),
    (0x0f0f_0f0f_0f0f_0f0f, 4),
    (0x00ff_00ff_00ff_00ff, 8),
    (0x0000_ffff_0000_ffff, 16),
    (0x0000_0000_ffff_ffff, 32),
];

fn load_state(bytes: &[u8; 128]) -> State {
    let mut x = [[0u64; 2]; 8];
    for (i, word) in x.iter_mut().enumerate() {
        word[0] = load_u64_le(bytes, 16 * i);
        word[1] = load_u64_le(bytes, 16 * i + 8);
    }
    x
}

/// One 4-bit S-box layer over four bitsliced words, selected by constant `c`
#[inline(always)]
fn sbox(m: &mut [u64; 4], c: u64) {
    m[3] = !m[3];
    m[0] ^= !m[2] & c;
    let t = c ^ (m[0] & m[1]);
    m[0] ^= m[2] & m[3];
    m[3] ^= !m[1] & m[2];
    m[1] ^= m[0] & m[2];
    m[2] ^= m[0] & !m[3];
    m[0] ^= m[1] | m[3];
    m[3] ^= m[1] & m[2];
    m[1] ^= t & m[0];
    m[2] ^= t;
}

/// Linear diffusion between the even group `a` and the odd group `b`
#[inline(always)]
fn linear(a: &mut [u64; 4], b: &mut [u64; 4]) {
    b[0] ^= a[1];
    b[1] ^= a[2];
    b[2] ^= a[0] ^ a[3];
    b[3] ^= a[0];
    a[0] ^= b[1];
    a[1] ^= b[2];
    a[2] ^= b[0] ^ b[3];
    a[3] ^= b[0];
}

#[inline(always)]
fn swap_bits(x: u64, mask: u64, width: u32) -> u64 {
    ((x & mask) << width) | ((x & !mask) >> width)
}

fn round(x: &mut State, index: usize) {
    let constant = &ROUND_CONSTANTS[index];
    let step = index % CYCLE;

    for lane in 0..2 {
        let mut even = [x[0][lane], x[2][lane], x[4][lane], x[6][lane]];
        let mut odd = [x[1][lane], x[3][lane], x[5][lane], x[7][lane]];

        sbox(&mut even, load_u64_le(constant, 8 * lane));
        sbox(&mut odd, load_u64_le(constant, 8 * lane + 16));
        linear(&mut even, &mut odd);

        if let Some(&(mask, width)) = SWAP_MASKS.get(step) {
            for word in odd.iter_mut() {
                *word = swap_bits(*word, mask, width);
            }
        }

        for k in 0..4 {
            x[2 * k][lane] = even[k];
            x[2 * k + 1][lane] = odd[k];
        }
    }

    if step == CYCLE - 1 {
        for word in x.iter_mut().skip(1).step_by(2) {
            word.swap(0, 1);
        }
    }
}

/// F8: absorb one block into the first half, permute, feed it forward into the second half
fn f8(x: &mut State, block: &Block) {
    let mut m = [0u64; 8];
    for (i, word) in m.iter_mut().enumerate() {
        *word = load_u64_le(block, i * 8);
    }

    for (i, word) in m.iter().enumerate() {
        x[i / 2][i % 2] ^= word;
    }
    for r in 0..ROUNDS {
        round(x, r);
    }
    for (i, word) in m.iter().enumerate() {
        x[4 + i / 2][i % 2] ^= word;
    }
}

/// JH-256 of a 200-byte input
pub fn jh256(input: &Message) -> Digest {
    let mut x = load_state(&IV);

    for index in 0..FULL_BLOCKS {
        f8(&mut x, &full_block(input, index));
    }

    let mut padding = tail_block(input);
    padding[TAIL_SIZE] = 0x80;
    f8(&mut x, &padding);

    let mut length = [0u8; 64];
    length[56..].copy_from_slice(&INPUT_BITS.to_be_bytes());
    f8(&mut x, &length);

    let mut digest = [0u8; DIGEST_SIZE];
    for (i, word) in x[6].iter().chain(x[7].iter()).enumerate() {
        store_u64_le(&mut digest, i * 8, *word);
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    /// Fractional part of sqrt(2), first 256 bits: the seed of the constant schedule
    const SEED: [u8; 32] = hex!("6a09e667f3bcc908b2fb1366ea957d3e3adec17512775099da2f590b0667322a");

    /// S-box S0; constants always evolve through it
    const S0: [u8; 16] = [9, 0, 4, 11, 13, 12, 3, 15, 1, 10, 2, 6, 7, 5, 8, 14];

    /// Linear transform L on a nibble pair, most significant bit first
    fn linear_nibbles(a: u8, b: u8) -> (u8, u8) {
        let bit = |x: u8, k: u32| (x >> (3 - k)) & 1;
        let pack = |v: [u8; 4]| (v[0] << 3) | (v[1] << 2) | (v[2] << 1) | v[3];

        let d = [
            bit(b, 0) ^ bit(a, 1),
            bit(b, 1) ^ bit(a, 2),
            bit(b, 2) ^ bit(a, 3) ^ bit(a, 0),
            bit(b, 3) ^ bit(a, 0),
        ];
        let c = [
            bit(a, 0) ^ d[1],
            bit(a, 1) ^ d[2],
            bit(a, 2) ^ d[3] ^ d[0],
            bit(a, 3) ^ d[0],
        ];
        (pack(c), pack(d))
    }

    /// Destination of each nibble position under the permutation P_d, d = log2(N)
    fn permutation<const N: usize>() -> [usize; N] {
        let pi = |i: usize| if i % 4 >= 2 { i ^ 1 } else { i };
        let p_prime = |i: usize| if i % 2 == 0 { i / 2 } else { i / 2 + N / 2 };
        let phi = |i: usize| if i >= N / 2 { i ^ 1 } else { i };
        core::array::from_fn(|i| phi(p_prime(pi(i))))
    }

    /// R6 with an all-zero constant: produces the next round constant
    fn next_constant(c: &[u8; 64]) -> [u8; 64] {
        let p6 = permutation::<64>();
        let mut out = [0u8; 64];
        for i in 0..32 {
            let (a, b) = linear_nibbles(S0[c[2 * i] as usize], S0[c[2 * i + 1] as usize]);
            out[p6[2 * i]] = a;
            out[p6[2 * i + 1]] = b;
        }
        out
    }

    /// Spread a constant over the bitslice slots; `slots[p]` is the S-box index held at slot `p`
    fn to_bitslice(c: &[u8; 64], slots: &[usize; 256]) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (p, &q) in slots.iter().enumerate() {
            let bit = (c[q / 4] >> (3 - q % 4)) & 1;
            out[p / 8] |= bit << (7 - p % 8);
        }
        out
    }

    #[test]
    fn test_round_constants_follow_schedule() {
        let p8 = permutation::<256>();
        let mut constant: [u8; 64] = core::array::from_fn(|i| (SEED[i / 2] >> (4 - 4 * (i % 2))) & 0x0f);

        // Even words hold the even S-boxes, odd words the odd ones
        let identity: [usize; 256] = core::array::from_fn(|p| 2 * (p % 128) + p / 128);
        let mut slots = identity;

        for (r, expected) in ROUND_CONSTANTS.iter().enumerate() {
            assert_eq!(&to_bitslice(&constant, &slots), expected, "round constant {}", r);

            // Even words stay in place; odd words take this round's swap
            let width = 1 << (r % CYCLE);
            let mut next = [0usize; 256];
            for j in 0..128 {
                next[j] = p8[slots[j]];
                next[128 + (j ^ width)] = p8[slots[128 + j]];
            }
            slots = next;
            constant = next_constant(&constant);
        }

        assert_eq!(slots, identity, "layout returns home after every cycle");
    }

    #[test]
    fn test_iv_derives_from_output_size() {
        // H(0) = F8(H(-1), 0) where H(-1) starts with the digest size, 256, big-endian
        let mut seed = [0u8; 128];
        seed[..2].copy_from_slice(&256u16.to_be_bytes());
        let mut x = load_state(&seed);
        f8(&mut x, &[0u8; 64]);
        assert_eq!(x, load_state(&IV));
    }

    #[test]
    fn test_swap_bits() {
        assert_eq!(swap_bits(0b01, SWAP_MASKS[0].0, 1), 0b10);
        assert_eq!(
            swap_bits(0x0123_4567_89ab_cdef, SWAP_MASKS[5].0, 32),
            0x89ab_cdef_0123_4567
        );
        assert_eq!(swap_bits(0x00ff, SWAP_MASKS[3].0, 8), 0xff00);
    }

    #[test]
    fn test_round_constants_are_distinct() {
        for i in 0..ROUNDS {
            for j in i + 1..ROUNDS {
                assert_ne!(ROUND_CONSTANTS[i], ROUND_CONSTANTS[j]);
            }
        }
    }
}
