#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use traits::Checksum;

use super::*;

proptest! {
  // ───────────────────────────────────────────────────────────────────────────
  // Fast-path / slow-path equivalence
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc64_slice4_matches_bytewise(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    offset in 0usize..4,
    seed in any::<u64>()
  ) {
    // Random starting offsets vary the pointer alignment seen by the head
    // phase of the slicing loop.
    let offset = offset.min(data.len());
    let data = &data[offset..];

    let fast = portable::crc64_slice4(seed, data);
    let slow = portable::crc64_bytewise(seed, data);
    prop_assert_eq!(fast, slow);
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Cross-validation against the crc crate
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc64_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    const ORACLE: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_XZ);

    let ours = Crc64::checksum(&data);
    prop_assert_eq!(ours, ORACLE.checksum(&data));
  }

  #[test]
  fn crc64_streaming_matches_crc_crate(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    const ORACLE: crc::Crc<u64> = crc::Crc::<u64>::new(&crc::CRC_64_XZ);

    let mut ours = Crc64::new();
    let mut reference = ORACLE.digest();
    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }
}
