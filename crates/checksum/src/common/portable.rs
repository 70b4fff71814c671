//! Portable CRC implementations using lookup table algorithms.
//!
//! This module provides the slicing-by-N update loops for both widths:
//! slice-by-8 for CRC-32 and slice-by-4 for CRC-64.
//!
//! # Algorithm Overview
//!
//! Slice-by-N processes N bytes per iteration using N precomputed lookup
//! tables. Each table row contains 256 entries representing the CRC
//! contribution of a single byte at a specific distance from the end of the
//! block, so byte position `i` (least-significant first) indexes row
//! `N-1-i`, and one XOR of N lookups equals N sequential byte steps.
//!
//! Each loop runs in three phases:
//!
//! 1. **Head**: byte-at-a-time until the read cursor sits on an N-byte
//!    boundary. Inputs shorter than `2*N` bytes skip the block loop entirely
//!    and are handled here and in the tail.
//! 2. **Blocks**: exact N-byte blocks via the combined table lookup.
//! 3. **Tail**: the leftover `< N` bytes, byte-at-a-time.
//!
//! The byte-wise step is the `N = 1` special case of the block step and uses
//! only table row 0; both paths are bit-identical for every input length,
//! alignment, and accumulator value.
//!
//! The accumulator passed in and out is the complemented ("pre-inverted")
//! CRC register; callers apply the entry/exit complement.

// SAFETY: All array indexing in this module uses bounded indices:
// - as_chunks guarantees chunk sizes
// - table indices are masked with `& 0xFF` or produced by a right shift of
//   a value with at most 8 significant bits remaining
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// Byte-wise steps (shared fallback)
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-32 state one byte at a time using table row 0.
#[inline]
pub fn bytewise_32(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    let index = ((crc ^ (byte as u32)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

/// Update CRC-64 state one byte at a time using table row 0.
#[inline]
pub fn bytewise_64(mut crc: u64, data: &[u8], table: &[u64; 256]) -> u64 {
  for &byte in data {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = table[index] ^ (crc >> 8);
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 slice-by-8
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-32 state using the slice-by-8 algorithm.
///
/// Processes 8 bytes per iteration (2× the CRC width in bytes). The first
/// 4 bytes of each block are XORed with the accumulator; the remaining 4 are
/// looked up directly.
///
/// # Arguments
///
/// * `crc` - Current CRC state (pre-inverted)
/// * `data` - Input data
/// * `tables` - 8 lookup tables (256 entries each)
#[inline]
pub fn slice8_32(mut crc: u32, data: &[u8], tables: &[[u32; 256]; 8]) -> u32 {
  let mut rest = data;

  // The block loop wants at least one full 8-byte read past the cursor, so
  // inputs under 16 bytes stay on the byte-wise path.
  if rest.len() >= 16 {
    // Align the cursor to an 8-byte boundary byte-by-byte. align_offset can
    // decline (usize::MAX); min() degrades that to the byte-wise path.
    let head = rest.as_ptr().align_offset(8).min(rest.len());
    let (unaligned, aligned) = rest.split_at(head);
    crc = bytewise_32(crc, unaligned, &tables[0]);

    let (blocks, tail) = aligned.as_chunks::<8>();
    for block in blocks {
      let lo = u32::from_le_bytes([block[0], block[1], block[2], block[3]]) ^ crc;
      let hi = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);

      crc = tables[7][(lo & 0xFF) as usize]
        ^ tables[6][((lo >> 8) & 0xFF) as usize]
        ^ tables[5][((lo >> 16) & 0xFF) as usize]
        ^ tables[4][(lo >> 24) as usize]
        ^ tables[3][(hi & 0xFF) as usize]
        ^ tables[2][((hi >> 8) & 0xFF) as usize]
        ^ tables[1][((hi >> 16) & 0xFF) as usize]
        ^ tables[0][(hi >> 24) as usize];
    }
    rest = tail;
  }

  // Remaining bytes (< 8), or the whole input when the fast path was skipped
  bytewise_32(crc, rest, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-64 slice-by-4
// ─────────────────────────────────────────────────────────────────────────────

/// Update CRC-64 state using the slice-by-4 algorithm.
///
/// Processes 4 bytes per iteration (half the CRC width), XORing them into the
/// low half of the accumulator; the untouched high half shifts down by 32
/// bits, exactly as four byte-wise steps would move it.
///
/// # Arguments
///
/// * `crc` - Current CRC state (pre-inverted)
/// * `data` - Input data
/// * `tables` - 4 lookup tables (256 entries each)
#[inline]
pub fn slice4_64(mut crc: u64, data: &[u8], tables: &[[u64; 256]; 4]) -> u64 {
  let mut rest = data;

  // Same threshold rule as slice-by-8: below 2 blocks, stay byte-wise.
  if rest.len() >= 8 {
    let head = rest.as_ptr().align_offset(4).min(rest.len());
    let (unaligned, aligned) = rest.split_at(head);
    crc = bytewise_64(crc, unaligned, &tables[0]);

    let (blocks, tail) = aligned.as_chunks::<4>();
    for block in blocks {
      let word = (u32::from_le_bytes(*block) as u64) ^ (crc & 0xFFFF_FFFF);

      crc = (crc >> 32)
        ^ tables[3][(word & 0xFF) as usize]
        ^ tables[2][((word >> 8) & 0xFF) as usize]
        ^ tables[1][((word >> 16) & 0xFF) as usize]
        ^ tables[0][(word >> 24) as usize];
    }
    rest = tail;
  }

  bytewise_64(crc, rest, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::tables::{CRC32_IEEE_POLY, CRC64_XZ_POLY, generate_crc32_tables_8, generate_crc64_tables_4};

  extern crate std;
  use std::vec::Vec;

  /// Deterministic pseudo-random bytes (xorshift).
  fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut out = std::vec![0u8; len];
    let mut x = seed | 1;
    for b in &mut out {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      *b = (x as u8).wrapping_add((x >> 8) as u8);
    }
    out
  }

  #[test]
  fn test_slice8_32_empty() {
    let tables = generate_crc32_tables_8(CRC32_IEEE_POLY);
    assert_eq!(slice8_32(!0, &[], &tables), !0);
    assert_eq!(slice8_32(0x1234_5678, &[], &tables), 0x1234_5678);
  }

  #[test]
  fn test_slice4_64_empty() {
    let tables = generate_crc64_tables_4(CRC64_XZ_POLY);
    assert_eq!(slice4_64(!0, &[], &tables), !0);
    assert_eq!(slice4_64(0xDEAD_BEEF, &[], &tables), 0xDEAD_BEEF);
  }

  /// Exhaustive fast/slow equivalence for CRC-32.
  ///
  /// Alignment and remainder handling is the most bug-prone area, so this
  /// covers every length from 0 to several blocks at every starting
  /// alignment offset, not just spot checks.
  #[test]
  fn test_slice8_32_matches_bytewise_all_lengths_and_alignments() {
    let tables = generate_crc32_tables_8(CRC32_IEEE_POLY);
    let backing = gen_bytes(96, 0x9E37_79B9_7F4A_7C15);

    for offset in 0..8 {
      for len in 0..=64 {
        let data = &backing[offset..offset + len];
        let fast = slice8_32(!0, data, &tables);
        let slow = bytewise_32(!0, data, &tables[0]);
        assert_eq!(fast, slow, "mismatch at offset {offset}, len {len}");
      }
    }
  }

  /// Exhaustive fast/slow equivalence for CRC-64.
  #[test]
  fn test_slice4_64_matches_bytewise_all_lengths_and_alignments() {
    let tables = generate_crc64_tables_4(CRC64_XZ_POLY);
    let backing = gen_bytes(64, 0xD1B5_4A32_D192_ED03);

    for offset in 0..4 {
      for len in 0..=40 {
        let data = &backing[offset..offset + len];
        let fast = slice4_64(!0, data, &tables);
        let slow = bytewise_64(!0, data, &tables[0]);
        assert_eq!(fast, slow, "mismatch at offset {offset}, len {len}");
      }
    }
  }

  /// Lengths just below and at the fast-path threshold (2 blocks).
  #[test]
  fn test_threshold_boundaries() {
    let t32 = generate_crc32_tables_8(CRC32_IEEE_POLY);
    let t64 = generate_crc64_tables_4(CRC64_XZ_POLY);
    let data = gen_bytes(16, 42);

    for len in [15usize, 16] {
      let d = &data[..len];
      assert_eq!(slice8_32(!0, d, &t32), bytewise_32(!0, d, &t32[0]));
    }
    for len in [7usize, 8] {
      let d = &data[..len];
      assert_eq!(slice4_64(!0, d, &t64), bytewise_64(!0, d, &t64[0]));
    }
  }

  #[test]
  fn test_slice8_32_incremental() {
    let tables = generate_crc32_tables_8(CRC32_IEEE_POLY);
    let data = b"hello world, this is a longer test string";
    let full = slice8_32(!0, data, &tables);

    for split in [1, 7, 8, 9, 15, 16, 17, 20] {
      if split < data.len() {
        let crc1 = slice8_32(!0, &data[..split], &tables);
        let crc2 = slice8_32(crc1, &data[split..], &tables);
        assert_eq!(crc2, full, "Incremental failed at split {split}");
      }
    }
  }

  #[test]
  fn test_slice4_64_incremental() {
    let tables = generate_crc64_tables_4(CRC64_XZ_POLY);
    let data = b"hello world, this is a longer test string";
    let full = slice4_64(!0, data, &tables);

    for split in [1, 3, 4, 5, 7, 8, 10, 15] {
      if split < data.len() {
        let crc1 = slice4_64(!0, &data[..split], &tables);
        let crc2 = slice4_64(crc1, &data[split..], &tables);
        assert_eq!(crc2, full, "Incremental failed at split {split}");
      }
    }
  }

  #[test]
  fn test_crc32_ieee_test_vector() {
    // "123456789" should produce 0xCBF43926 for CRC-32 IEEE
    let tables = generate_crc32_tables_8(CRC32_IEEE_POLY);
    let crc = slice8_32(!0, b"123456789", &tables) ^ !0;
    assert_eq!(crc, 0xCBF4_3926);
  }

  #[test]
  fn test_crc64_xz_test_vector() {
    // "123456789" should produce 0x995DC9BBDF1939FA for CRC-64-XZ
    let tables = generate_crc64_tables_4(CRC64_XZ_POLY);
    let crc = slice4_64(!0, b"123456789", &tables) ^ !0;
    assert_eq!(crc, 0x995D_C9BB_DF19_39FA);
  }
}
