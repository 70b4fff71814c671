//! Const-fn CRC lookup table generation for both widths.
//!
//! This module provides compile-time table generation for CRC-32 and CRC-64.
//! Tables are computed using `const fn` and embedded directly in the binary,
//! so there is no runtime initialization to order against: every table is
//! fully built before `main`, and all accesses are read-only.
//!
//! # Table Layout
//!
//! Each engine uses `S` tables of 256 entries, where `S` is its slicing
//! factor:
//!
//! | Width | Slicing | Table size |
//! |-------|---------|------------|
//! | 32-bit | slice-by-8 | 8×256×u32 (8 KiB) |
//! | 64-bit | slice-by-4 | 4×256×u64 (8 KiB) |
//!
//! Row 0 holds the CRC of each single byte value, computed by the
//! 8-iteration shift/XOR definition. Row `s` holds row `s-1` advanced by one
//! zero byte, i.e. the CRC contribution of a byte followed by `s` zero bytes.
//! The slicing loops XOR one lookup per row to consume `S` input bytes at
//! once.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-32 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 8 CRC-32 lookup tables for slice-by-8 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc32_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc32_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 Table Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a single CRC-64 lookup table entry.
///
/// Uses bit-by-bit computation with the reflected polynomial.
#[must_use]
pub const fn crc64_table_entry(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate 4 CRC-64 lookup tables for slice-by-4 computation.
///
/// # Arguments
///
/// * `poly` - The reflected polynomial
#[must_use]
pub const fn generate_crc64_tables_4(poly: u64) -> [[u64; 256]; 4] {
  let mut tables = [[0u64; 256]; 4];

  let mut i = 0u16;
  while i < 256 {
    tables[0][i as usize] = crc64_table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 4 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i as usize];
      tables[k][i as usize] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial Constants (Reflected Form)
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 IEEE 802.3 polynomial (0x04C11DB7) in reflected form.
/// Used by Ethernet FCS, gzip, zip, PNG, and the container record headers.
pub const CRC32_IEEE_POLY: u32 = 0xEDB8_8320;

/// CRC-64-XZ polynomial (0x42F0E1EBA9EA3693, ECMA-182) in reflected form.
/// Used by XZ Utils, 7-Zip, and the container record payloads.
pub const CRC64_XZ_POLY: u64 = 0xC96C_5795_D787_0F42;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
