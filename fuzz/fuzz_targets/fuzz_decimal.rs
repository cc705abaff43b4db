#![no_main]
use libfuzzer_sys::fuzz_target;

use bigint::BigInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = text.parse::<BigInt>() {
        let canonical = value.to_string();
        assert!(canonical == "0" || !canonical.trim_start_matches('-').starts_with('0'));
        assert_ne!(canonical, "-0");
        let round_tripped: BigInt = canonical.parse().unwrap();
        assert_eq!(round_tripped, value);
    }
});
