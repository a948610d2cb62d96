use proptest::prelude::*;
use runelen_core::{count_bytes, rune_len, InvalidPolicy, TextStats};

// Decodes like Go's utf8.RuneCount: an invalid or short encoding is one
// rune of width 1.
fn go_rune_count(bytes: &[u8]) -> usize {
    let mut i = 0;
    let mut runes = 0;
    while i < bytes.len() {
        let width = (1..=4)
            .take_while(|w| i + w <= bytes.len())
            .find(|w| std::str::from_utf8(&bytes[i..i + w]).is_ok())
            .unwrap_or(1);
        i += width;
        runes += 1;
    }
    runes
}

#[test]
fn test_go_rune_count_reference() {
    assert_eq!(go_rune_count(b"\xe2\x80X"), 3);
    assert_eq!(go_rune_count("résumé – new".as_bytes()), 12);
}

#[test]
fn test_regression_cases() {
    let cases = vec![
        ("résumé", 8, 6),
        ("résumé – new", 16, 12),
        ("", 0, 0),
    ];

    for (s, byte_len, runes) in cases {
        assert_eq!(s.len(), byte_len, "len({:?}) != {}", s, byte_len);
        assert_eq!(rune_len(s), runes, "rune_len({:?}) != {}", s, runes);
        assert_eq!(TextStats::of(s), TextStats { bytes: byte_len, runes });
    }
}

#[test]
fn test_stats_serialize_shape() {
    let v = serde_json::to_value(TextStats::of("résumé")).unwrap();
    assert_eq!(v, serde_json::json!({ "bytes": 8, "runes": 6 }));
}

proptest! {
    #[test]
    fn ascii_rune_len_equals_byte_len(s in "[ -~]{0,64}") {
        prop_assert_eq!(rune_len(&s), s.len());
    }

    #[test]
    fn rune_len_is_bounded_by_encoding_width(s in any::<String>()) {
        let n = rune_len(&s);
        prop_assert!(n <= s.len());
        prop_assert!(s.len() <= 4 * n);
    }

    #[test]
    fn rune_len_is_idempotent(s in any::<String>()) {
        prop_assert_eq!(rune_len(&s), rune_len(&s));
    }

    #[test]
    fn all_policies_agree_on_valid_text(s in any::<String>()) {
        for p in InvalidPolicy::ALL {
            prop_assert_eq!(count_bytes(s.as_bytes(), p), Ok(rune_len(&s)));
        }
    }

    #[test]
    fn rune_len_is_additive(a in any::<String>(), b in any::<String>()) {
        let joined = format!("{a}{b}");
        prop_assert_eq!(rune_len(&joined), rune_len(&a) + rune_len(&b));
    }

    #[test]
    fn lossy_matches_std_replacement(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let expected = String::from_utf8_lossy(&bytes).chars().count();
        prop_assert_eq!(count_bytes(&bytes, InvalidPolicy::Lossy), Ok(expected));
    }

    #[test]
    fn strict_fails_exactly_on_invalid(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        match std::str::from_utf8(&bytes) {
            Ok(s) => prop_assert_eq!(count_bytes(&bytes, InvalidPolicy::Strict), Ok(rune_len(s))),
            Err(e) => {
                let err = count_bytes(&bytes, InvalidPolicy::Strict).unwrap_err();
                prop_assert_eq!(err.offset(), e.valid_up_to());
            }
        }
    }

    #[test]
    fn per_byte_counts_valid_chars_plus_invalid_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let expected: usize = bytes
            .utf8_chunks()
            .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
            .sum();
        prop_assert_eq!(count_bytes(&bytes, InvalidPolicy::PerByte), Ok(expected));
    }

    #[test]
    fn per_byte_matches_go_rune_count(
        s in any::<String>(),
        noise in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut bytes = noise.clone();
        bytes.extend_from_slice(s.as_bytes());
        bytes.extend_from_slice(&noise);
        prop_assert_eq!(count_bytes(&bytes, InvalidPolicy::PerByte), Ok(go_rune_count(&bytes)));
    }

    #[test]
    fn policy_ordering_holds(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        // Lossy collapses invalid runs, per-byte never does
        let lossy = count_bytes(&bytes, InvalidPolicy::Lossy).unwrap();
        let per_byte = count_bytes(&bytes, InvalidPolicy::PerByte).unwrap();
        prop_assert!(lossy <= per_byte);
        prop_assert!(per_byte <= bytes.len());
    }
}
