//! CRC-64 (XZ / ECMA-182) engine.
//!
//! Reflected CRC-64 over the ECMA-182 polynomial 0x42F0E1EBA9EA3693
//! (0xC96C5795D7870F42 reflected), computed with compile-time slice-by-4
//! tables. Used for container record payloads, matching XZ Utils and 7-Zip.
//!
//! # Properties
//!
//! - **Polynomial**: 0x42F0E1EBA9EA3693 (normal), 0xC96C5795D7870F42 (reflected)
//! - **Initial value**: 0xFFFFFFFFFFFFFFFF
//! - **Final XOR**: 0xFFFFFFFFFFFFFFFF
//! - **Reflect input/output**: Yes

mod portable;

mod proptests;

use traits::Checksum;

use crate::common::{
  reference::crc64_bitwise,
  tables::{CRC64_XZ_POLY, generate_crc64_tables_4},
};

/// Slice-by-4 tables, computed at compile time.
mod kernel_tables {
  use super::*;
  pub static XZ_TABLES: [[u64; 256]; 4] = generate_crc64_tables_4(CRC64_XZ_POLY);
}

// Check value verified at compile time against the bitwise definition.
const _: () = assert!(crc64_bitwise(CRC64_XZ_POLY, !0, b"123456789") ^ !0 == 0x995D_C9BB_DF19_39FA);

/// Compute the CRC-64 of `data`, chained from `seed`.
///
/// Seed the first call of a logical stream with `0`; feed each call's return
/// value into the next to checksum a stream in fragments:
///
/// ```rust
/// use checksum::crc64;
///
/// assert_eq!(crc64(b"123456789", 0), 0x995DC9BBDF1939FA);
///
/// let part = crc64(b"12345", 0);
/// assert_eq!(crc64(b"6789", part), 0x995DC9BBDF1939FA);
/// ```
///
/// The accumulator is complemented on entry and exit, so `seed` and the
/// return value are always true (non-complemented) CRC values, and
/// `crc64(&[], seed) == seed`.
#[inline]
#[must_use]
pub fn crc64(data: &[u8], seed: u64) -> u64 {
  portable::crc64_slice4(seed ^ !0, data) ^ !0
}

/// CRC-64 checksum (XZ / ECMA-182).
///
/// Streaming counterpart of [`crc64`]; used by XZ Utils, 7-Zip, and the
/// container record payloads.
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc64};
///
/// let crc = Crc64::checksum(b"123456789");
/// assert_eq!(crc, 0x995DC9BBDF1939FA);
/// ```
#[derive(Clone, Debug)]
pub struct Crc64 {
  /// Current CRC state (inverted; XOR applied on finalize).
  state: u64,
}

impl Crc64 {
  /// Create a hasher that resumes from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u64) -> Self {
    Self { state: crc ^ !0 }
  }
}

impl Default for Crc64 {
  #[inline]
  fn default() -> Self {
    <Self as Checksum>::new()
  }
}

impl Checksum for Crc64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;

  #[inline]
  fn new() -> Self {
    Self { state: !0 }
  }

  #[inline]
  fn with_initial(initial: u64) -> Self {
    Self { state: initial ^ !0 }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = portable::crc64_slice4(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.state ^ !0
  }

  #[inline]
  fn reset(&mut self) {
    self.state = !0;
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
