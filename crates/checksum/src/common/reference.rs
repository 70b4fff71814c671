//! Bitwise reference implementations for both CRC widths.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! These implementations process one bit at a time, making them:
//!
//! - **Obviously correct**: The algorithm directly mirrors the mathematical definition
//! - **Audit-friendly**: ~10 lines of code per width, no lookup tables
//! - **Const-evaluable**: Can verify check values at compile time
//!
//! The table-driven slicing implementations must produce identical results to
//! these reference functions for every input length, alignment, and seed.
//!
//! # Performance
//!
//! These are intentionally slow (~8 operations per bit). Use for:
//! - Correctness verification
//! - Test oracles
//! - Generating expected values
//!
//! For production throughput, use [`Crc32`](crate::Crc32) / [`Crc64`](crate::Crc64).

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// Processes input one bit at a time. This is the canonical reference
/// against which the slice-by-8 implementation is verified.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (0xEDB88320 for CRC-32 IEEE)
/// * `init` - Initial register value (typically `!0`)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies the final XOR if needed).
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise CRC-64 computation (reflected, LSB-first).
///
/// Processes input one bit at a time. This is the canonical reference
/// against which the slice-by-4 implementation is verified.
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (0xC96C5795D7870F42 for CRC-64-XZ)
/// * `init` - Initial register value (typically `!0`)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw CRC register state (caller applies the final XOR if needed).
#[must_use]
pub const fn crc64_bitwise(poly: u64, init: u64, data: &[u8]) -> u64 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u64;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
