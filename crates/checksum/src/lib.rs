//! Table-driven CRC-32 and CRC-64 checksums.
//!
//! This crate provides the two checksum engines used to verify the integrity
//! of compressed container records:
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc32`] | 0x04C11DB7 | `u32` | IEEE 802.3, gzip, zip, container headers |
//! | [`Crc64`] | 0x42F0E1EBA9EA3693 | `u64` | ECMA-182, XZ Utils, 7-Zip |
//!
//! Both are reflected (LSB-first) CRCs computed with compile-time lookup
//! tables and a slicing-by-N inner loop: slice-by-8 for CRC-32, slice-by-4
//! for CRC-64. Unaligned prefixes, block remainders, and short inputs fall
//! back to a byte-at-a-time step over table row 0; the fast and slow paths
//! are bit-identical for every input length and alignment.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Checksum, Crc32, crc32};
//!
//! // One-shot computation
//! let data = b"123456789";
//! assert_eq!(Crc32::checksum(data), 0xCBF4_3926);
//!
//! // Seed chaining: successive calls over fragments equal one call over the
//! // concatenation. Seed the first call with 0.
//! let part = crc32(b"1234", 0);
//! assert_eq!(crc32(b"56789", part), 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//! ```
//!
//! # Tables
//!
//! Lookup tables are generated by `const fn` and embedded in the binary as
//! read-only `static` data. There is no runtime initialization step, so a
//! checksum call can never observe a partially built table, and concurrent
//! calls share the tables without synchronization.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded
//! use:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod common;
mod crc32;
mod crc64;

pub use crc32::{Crc32, crc32};
pub use crc64::{Crc64, crc64};
// Re-export the trait for convenience
pub use traits::Checksum;
