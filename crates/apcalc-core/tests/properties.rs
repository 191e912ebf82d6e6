//! Property-based tests for the arithmetic engine.
//!
//! `num-bigint` serves as the reference for every operation.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

use apcalc_core::{
    ArbitraryInt, KaratsubaStrategy, Multiplier, ParallelKaratsubaStrategy, SchoolbookStrategy,
};

fn reference(v: &ArbitraryInt) -> BigInt {
    v.to_string().parse().unwrap()
}

fn decimal(max_digits: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("-?[0-9]{{1,{max_digits}}}")).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parsing then formatting yields the canonical decimal form.
    #[test]
    fn decimal_roundtrip(text in decimal(400)) {
        let v = ArbitraryInt::parse(&text).unwrap();
        let expected: BigInt = text.parse().unwrap();
        prop_assert_eq!(v.to_string(), expected.to_string());
    }

    #[test]
    fn add_and_subtract_match_reference(a in decimal(200), b in decimal(200)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        let (rx, ry) = (reference(&x), reference(&y));
        prop_assert_eq!(reference(&x.add(&y)), &rx + &ry);
        prop_assert_eq!(reference(&x.subtract(&y)), &rx - &ry);
        prop_assert_eq!(x.add(&y).subtract(&y), x);
    }

    #[test]
    fn commutativity_and_inverse(a in decimal(300), b in decimal(300)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        prop_assert_eq!(x.add(&y), y.add(&x));
        prop_assert_eq!(x.multiply(&y), y.multiply(&x));
        let zero = x.add(&x.negate());
        prop_assert!(zero.is_zero() && !zero.is_negative());
    }

    #[test]
    fn multiply_matches_reference(a in decimal(900), b in decimal(700)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        prop_assert_eq!(reference(&x.multiply(&y)), reference(&x) * reference(&y));
    }

    /// Every strategy produces identical limbs.
    #[test]
    fn strategies_are_bit_identical(a in decimal(600), b in decimal(600)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        let expected = x.multiply_with(&y, &SchoolbookStrategy::new());
        let strategies: [&dyn Multiplier; 3] = [
            &KaratsubaStrategy::new(1),
            &KaratsubaStrategy::new(4),
            &ParallelKaratsubaStrategy::new(2, 4),
        ];
        for s in strategies {
            prop_assert_eq!(&x.multiply_with(&y, s), &expected, "{}", s.name());
        }
    }

    /// dividend == divisor * quotient + remainder, |remainder| < |divisor|.
    #[test]
    fn division_identity(a in decimal(300), b in decimal(120)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        prop_assume!(!y.is_zero());
        let (q, r) = x.divide(&y).unwrap();
        prop_assert_eq!(y.multiply(&q).add(&r), x.clone());
        prop_assert_eq!(r.compare_magnitude(&y), std::cmp::Ordering::Less);
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());

        // BigInt division also truncates toward zero.
        let (rx, ry) = (reference(&x), reference(&y));
        prop_assert_eq!(reference(&q), &rx / &ry);
        prop_assert_eq!(reference(&r), &rx % &ry);
        prop_assert_eq!(x.modulo(&y).unwrap(), r);
    }

    #[test]
    fn power_matches_reference(a in decimal(30), e in 0u32..60) {
        let x = ArbitraryInt::parse(&a).unwrap();
        prop_assert_eq!(reference(&x.pow_u32(e)), num_traits::pow(reference(&x), e as usize));
    }

    #[test]
    fn ordering_matches_reference(a in decimal(50), b in decimal(50)) {
        let (x, y) = (ArbitraryInt::parse(&a).unwrap(), ArbitraryInt::parse(&b).unwrap());
        prop_assert_eq!(x.cmp(&y), reference(&x).cmp(&reference(&y)));
        prop_assert_eq!(x.signum() == 0, reference(&x).is_zero());
        prop_assert_eq!(x.is_negative(), reference(&x).is_negative());
    }

    /// Text rendered in any radix reads back unchanged.
    #[test]
    fn radix_text_roundtrip(a in decimal(120), radix in 2u32..=36) {
        let x = ArbitraryInt::parse(&a).unwrap();
        let text = x.to_str_radix(radix).unwrap();
        prop_assert_eq!(&text, &reference(&x).to_str_radix(radix));
        prop_assert_eq!(ArbitraryInt::from_str_radix(&text, radix).unwrap(), x);
    }

    /// `convert_base` round-trips through every base whose rendering is all digits.
    #[test]
    fn convert_base_roundtrip(a in decimal(80), base in 2u32..=10) {
        let x = ArbitraryInt::parse(&a).unwrap();
        let there = x.convert_base(10, base).unwrap();
        prop_assert_eq!(there.convert_base(base, 10).unwrap(), x);
    }
}

#[test]
fn factorial_matches_reference() {
    let mut expected = BigInt::from(1);
    for n in 1u32..=300 {
        expected *= n;
        assert_eq!(reference(&ArbitraryInt::factorial_u32(n)), expected, "{n}!");
    }
}
