//! Portable CRC-32 kernels (byte-wise and slice-by-8).
//!
//! This module provides polynomial-specific wrappers around the generic
//! slicing implementations in [`crate::common::portable`].

use super::kernel_tables;
use crate::common::portable;

/// CRC-32 (IEEE) byte-at-a-time lookup computation.
///
/// The slow-path oracle: the slicing loop must match this for every input
/// length and alignment.
#[cfg(test)]
#[inline]
pub fn crc32_bytewise(crc: u32, data: &[u8]) -> u32 {
  portable::bytewise_32(crc, data, &kernel_tables::IEEE_TABLES[0])
}

/// CRC-32 (IEEE) slice-by-8 computation.
#[inline]
pub fn crc32_slice8(crc: u32, data: &[u8]) -> u32 {
  portable::slice8_32(crc, data, &kernel_tables::IEEE_TABLES)
}
