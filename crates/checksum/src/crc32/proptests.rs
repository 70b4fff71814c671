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
  fn crc32_slice8_matches_bytewise(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    offset in 0usize..8,
    seed in any::<u32>()
  ) {
    // Random starting offsets vary the pointer alignment seen by the head
    // phase of the slicing loop.
    let offset = offset.min(data.len());
    let data = &data[offset..];

    let fast = portable::crc32_slice8(seed, data);
    let slow = portable::crc32_bytewise(seed, data);
    prop_assert_eq!(fast, slow);
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Cross-validation against the crc crate
  // ───────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    const ORACLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

    let ours = Crc32::checksum(&data);
    prop_assert_eq!(ours, ORACLE.checksum(&data));
  }

  #[test]
  fn crc32_streaming_matches_crc_crate(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    const ORACLE: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

    let mut ours = Crc32::new();
    let mut reference = ORACLE.digest();
    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize());
  }
}
