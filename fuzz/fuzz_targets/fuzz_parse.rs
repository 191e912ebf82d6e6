#![no_main]

use libfuzzer_sys::fuzz_target;

use apcalc_core::ArbitraryInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap input size so each run stays fast
    if text.len() > 4096 {
        return;
    }

    // Anything that parses must format to a canonical form that parses back
    if let Ok(v) = ArbitraryInt::parse(text) {
        let canonical = v.to_string();
        let again = ArbitraryInt::parse(&canonical).expect("canonical text must parse");
        assert_eq!(again, v);
        assert!(!(v.is_zero() && v.is_negative()));
    }
});
