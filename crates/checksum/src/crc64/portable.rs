//! Portable CRC-64 kernels (byte-wise and slice-by-4).
//!
//! This module provides polynomial-specific wrappers around the generic
//! slicing implementations in [`crate::common::portable`].

use super::kernel_tables;
use crate::common::portable;

/// CRC-64 (XZ/ECMA-182) byte-at-a-time lookup computation.
///
/// The slow-path oracle: the slicing loop must match this for every input
/// length and alignment.
#[cfg(test)]
#[inline]
pub fn crc64_bytewise(crc: u64, data: &[u8]) -> u64 {
  portable::bytewise_64(crc, data, &kernel_tables::XZ_TABLES[0])
}

/// CRC-64 (XZ/ECMA-182) slice-by-4 computation.
#[inline]
pub fn crc64_slice4(crc: u64, data: &[u8]) -> u64 {
  portable::slice4_64(crc, data, &kernel_tables::XZ_TABLES)
}
