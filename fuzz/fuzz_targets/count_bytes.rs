#![no_main]

use libfuzzer_sys::fuzz_target;
use runelen_core::{count_bytes, rune_len, InvalidPolicy};

fuzz_target!(|data: &[u8]| {
    let lossy = count_bytes(data, InvalidPolicy::Lossy).unwrap();
    let per_byte = count_bytes(data, InvalidPolicy::PerByte).unwrap();
    assert!(lossy <= per_byte);
    assert!(per_byte <= data.len());
    assert_eq!(lossy, String::from_utf8_lossy(data).chars().count());

    match std::str::from_utf8(data) {
        Ok(s) => {
            assert_eq!(count_bytes(data, InvalidPolicy::Strict), Ok(rune_len(s)));
            assert_eq!(lossy, per_byte);
        }
        Err(e) => {
            let err = count_bytes(data, InvalidPolicy::Strict).unwrap_err();
            assert_eq!(err.offset(), e.valid_up_to());
        }
    }
});
