//! CRC-32 (IEEE 802.3) engine.
//!
//! Reflected CRC-32 over the polynomial 0x04C11DB7 (0xEDB88320 reflected),
//! computed with compile-time slice-by-8 tables. Used for container record
//! headers and any format that stores an IEEE CRC-32.
//!
//! # Properties
//!
//! - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
//! - **Initial value**: 0xFFFFFFFF
//! - **Final XOR**: 0xFFFFFFFF
//! - **Reflect input/output**: Yes

mod portable;

mod proptests;

use traits::Checksum;

use crate::common::{
  reference::crc32_bitwise,
  tables::{CRC32_IEEE_POLY, generate_crc32_tables_8},
};

/// Slice-by-8 tables, computed at compile time.
mod kernel_tables {
  use super::*;
  pub static IEEE_TABLES: [[u32; 256]; 8] = generate_crc32_tables_8(CRC32_IEEE_POLY);
}

// Check value verified at compile time against the bitwise definition.
const _: () = assert!(crc32_bitwise(CRC32_IEEE_POLY, !0, b"123456789") ^ !0 == 0xCBF4_3926);

/// Compute the CRC-32 of `data`, chained from `seed`.
///
/// Seed the first call of a logical stream with `0`; feed each call's return
/// value into the next to checksum a stream in fragments:
///
/// ```rust
/// use checksum::crc32;
///
/// assert_eq!(crc32(b"123456789", 0), 0xCBF4_3926);
///
/// let part = crc32(b"1234", 0);
/// assert_eq!(crc32(b"56789", part), 0xCBF4_3926);
/// ```
///
/// The accumulator is complemented on entry and exit, so `seed` and the
/// return value are always true (non-complemented) CRC values, and
/// `crc32(&[], seed) == seed`.
#[inline]
#[must_use]
pub fn crc32(data: &[u8], seed: u32) -> u32 {
  portable::crc32_slice8(seed ^ !0, data) ^ !0
}

/// CRC-32 checksum (IEEE 802.3 / ISO-HDLC).
///
/// Streaming counterpart of [`crc32`]; used in Ethernet FCS, ZIP, gzip, PNG,
/// and the container record headers.
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32};
///
/// let crc = Crc32::checksum(b"123456789");
/// assert_eq!(crc, 0xCBF43926);
/// ```
#[derive(Clone, Debug)]
pub struct Crc32 {
  /// Current CRC state (inverted; XOR applied on finalize).
  state: u32,
}

impl Crc32 {
  /// Create a hasher that resumes from a previously finalized CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { state: crc ^ !0 }
  }
}

impl Default for Crc32 {
  #[inline]
  fn default() -> Self {
    <Self as Checksum>::new()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self { state: !0 }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self { state: initial ^ !0 }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.state = portable::crc32_slice8(self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
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
