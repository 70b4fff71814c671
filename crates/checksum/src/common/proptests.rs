//! Unified property tests for both CRC engines.
//!
//! These tests verify the cross-cutting invariants against the bitwise
//! reference implementation (the mathematical CRC definition):
//!
//! 1. **Reference agreement**: the table-driven engines equal the bitwise
//!    definition for arbitrary data.
//! 2. **Chaining**: `crc(B, crc(A, seed)) == crc(A || B, seed)` for any split
//!    and any seed.
//! 3. **Chunking equivalence**: any chunking of input through the streaming
//!    API equals the one-shot result.
//! 4. **Complement definition**: `crc(data, seed)` equals the raw engine run
//!    from `!seed`, complemented on exit. Reflected CRC is affine in the
//!    seed, not linear, so tests pin the definition itself rather than any
//!    XOR relation between seeds.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use traits::Checksum;

use super::{
  reference::{crc32_bitwise, crc64_bitwise},
  tables::{CRC32_IEEE_POLY, CRC64_XZ_POLY},
};
use crate::{Crc32, Crc64, crc32, crc64};

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  // ───────────────────────────────────────────────────────────────────────────
  // Reference agreement
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc32::checksum(&data);
    let expected = crc32_bitwise(CRC32_IEEE_POLY, !0, &data) ^ !0;
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn crc64_matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let ours = Crc64::checksum(&data);
    let expected = crc64_bitwise(CRC64_XZ_POLY, !0, &data) ^ !0;
    prop_assert_eq!(ours, expected);
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Chaining
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_chaining_correctness(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    seed in any::<u32>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let chained = crc32(b, crc32(a, seed));
    let whole = crc32(&data, seed);

    prop_assert_eq!(chained, whole,
      "crc32(B, crc32(A, seed)) != crc32(A||B, seed) at split {}/{}",
      split, data.len());
  }

  #[test]
  fn crc64_chaining_correctness(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    split in any::<usize>(),
    seed in any::<u64>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let chained = crc64(b, crc64(a, seed));
    let whole = crc64(&data, seed);

    prop_assert_eq!(chained, whole,
      "crc64(B, crc64(A, seed)) != crc64(A||B, seed) at split {}/{}",
      split, data.len());
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Chunking equivalence
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunks in proptest::collection::vec(1usize..=64, 0..=128)
  ) {
    let oneshot = Crc32::checksum(&data);

    let mut hasher = Crc32::new();
    let mut rest = &data[..];
    for len in chunks {
      let take = len.min(rest.len());
      let (head, tail) = rest.split_at(take);
      hasher.update(head);
      rest = tail;
    }
    hasher.update(rest);

    prop_assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn crc64_chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunks in proptest::collection::vec(1usize..=64, 0..=128)
  ) {
    let oneshot = Crc64::checksum(&data);

    let mut hasher = Crc64::new();
    let mut rest = &data[..];
    for len in chunks {
      let take = len.min(rest.len());
      let (head, tail) = rest.split_at(take);
      hasher.update(head);
      rest = tail;
    }
    hasher.update(rest);

    prop_assert_eq!(hasher.finalize(), oneshot);
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Complement definition of seeding
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_seed_is_complemented_register(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    seed in any::<u32>()
  ) {
    let ours = crc32(&data, seed);
    let expected = crc32_bitwise(CRC32_IEEE_POLY, seed ^ !0, &data) ^ !0;
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn crc64_seed_is_complemented_register(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    seed in any::<u64>()
  ) {
    let ours = crc64(&data, seed);
    let expected = crc64_bitwise(CRC64_XZ_POLY, seed ^ !0, &data) ^ !0;
    prop_assert_eq!(ours, expected);
  }
}
