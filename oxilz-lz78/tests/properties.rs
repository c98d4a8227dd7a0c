//! Property tests for the LZ78 codec.

use oxilz_lz78::{Lz78Decoder, Lz78Encoder, compress, compress_with_protection, decompress};
use proptest::prelude::*;

/// Inputs drawn from a small alphabet repeat often and grow long phrases.
fn low_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..4096)
}

proptest! {
    #[test]
    fn prop_roundtrip_any_bytes(data in prop::collection::vec(any::<u8>(), 0..8192)) {
        let compressed = compress(&data).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn prop_roundtrip_low_entropy(data in low_entropy()) {
        let compressed = compress(&data).unwrap();
        prop_assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn prop_protection_preserved(protection in any::<u16>(), data in prop::collection::vec(any::<u8>(), 0..256)) {
        let compressed = compress_with_protection(&data, protection).unwrap();
        let mut decompressed = Vec::new();
        let decoded = Lz78Decoder::new()
            .unwrap()
            .decode(compressed.as_slice(), &mut decompressed)
            .unwrap();
        prop_assert_eq!(decoded.header.protection, protection);
        prop_assert_eq!(decompressed, data);
    }

    #[test]
    fn prop_codecs_in_lockstep(data in low_entropy()) {
        let mut encoder = Lz78Encoder::new().unwrap();
        let mut compressed = Vec::new();
        let enc_stats = encoder.encode(data.as_slice(), &mut compressed, 0o644).unwrap();

        let mut decoder = Lz78Decoder::new().unwrap();
        let mut decompressed = Vec::new();
        let decoded = decoder.decode(compressed.as_slice(), &mut decompressed).unwrap();

        prop_assert_eq!(encoder.codes_assigned(), decoder.codes_assigned());
        prop_assert_eq!(enc_stats, decoded.stats);
        prop_assert_eq!(enc_stats.compressed_bytes(), compressed.len() as u64);
    }

    #[test]
    fn prop_truncation_detected(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let mut compressed = compress(&data).unwrap();
        compressed.pop();
        let err = decompress(&compressed).unwrap_err();
        prop_assert!(err.is_corruption());
    }
}
