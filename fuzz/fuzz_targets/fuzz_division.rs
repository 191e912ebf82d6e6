#![no_main]

use libfuzzer_sys::fuzz_target;

use apcalc_core::ArbitraryInt;

/// Build a value from raw bytes: first byte picks the sign, the rest are
/// decimal digits (each byte reduced mod 10).
fn value_from(bytes: &[u8]) -> ArbitraryInt {
    let Some((&sign, digits)) = bytes.split_first() else {
        return ArbitraryInt::zero();
    };
    let mut text: String = digits.iter().map(|b| char::from(b'0' + b % 10)).collect();
    if text.is_empty() {
        text.push('0');
    }
    let v = ArbitraryInt::parse(&text).expect("digit string must parse");
    if sign & 1 == 1 {
        v.negate()
    } else {
        v
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 2048 {
        return;
    }
    let split = usize::from(data[0]) % (data.len() - 1) + 1;
    let (a, b) = data[1..].split_at(split - 1);
    let dividend = value_from(a);
    let divisor = value_from(b);

    match dividend.divide(&divisor) {
        Ok((q, r)) => {
            assert_eq!(divisor.multiply(&q).add(&r), dividend);
            assert_eq!(r.compare_magnitude(&divisor), std::cmp::Ordering::Less);
            assert!(r.is_zero() || r.is_negative() == dividend.is_negative());
        }
        Err(_) => assert!(divisor.is_zero()),
    }
});
