//! Portable radix-10^9 limb arithmetic.
//!
//! Every function works on little-endian limb slices. Inputs may carry
//! most-significant zero limbs; outputs that are documented as trimmed
//! never do (zero is `[0]`).

use std::cmp::Ordering;

use crate::constants::{LIMB_RADIX, LIMB_RADIX_U64};

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
pub fn add_with_carry(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let sum = a + b + carry;
    if sum >= LIMB_RADIX {
        (sum - LIMB_RADIX, 1)
    } else {
        (sum, 0)
    }
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
#[inline]
#[must_use]
pub fn sub_with_borrow(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let rhs = b + borrow;
    if a >= rhs {
        (a - rhs, 0)
    } else {
        (a + LIMB_RADIX - rhs, 1)
    }
}

/// Multiply-accumulate: a * b + acc + carry -> (low limb, carry)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add(a: u32, b: u32, acc: u32, carry: u64) -> (u32, u64) {
    let t = u64::from(a) * u64::from(b) + u64::from(acc) + carry;
    ((t % LIMB_RADIX_U64) as u32, t / LIMB_RADIX_U64)
}

/// Number of limbs up to and including the most significant non-zero limb.
#[inline]
#[must_use]
pub fn significant_len(a: &[u32]) -> usize {
    a.iter().rposition(|&limb| limb != 0).map_or(0, |i| i + 1)
}

/// `true` if every limb is zero (or the slice is empty).
#[inline]
#[must_use]
pub fn is_zero(a: &[u32]) -> bool {
    significant_len(a) == 0
}

/// Drop most-significant zero limbs, keeping canonical zero as `[0]`.
pub fn trim(a: &mut Vec<u32>) {
    a.truncate(significant_len(a));
    if a.is_empty() {
        a.push(0);
    }
}

/// Compare two magnitudes.
#[must_use]
pub fn compare(a: &[u32], b: &[u32]) -> Ordering {
    let (la, lb) = (significant_len(a), significant_len(b));
    if la != lb {
        return la.cmp(&lb);
    }
    a[..la].iter().rev().cmp(b[..lb].iter().rev())
}

/// Add two magnitudes. Result is trimmed.
#[must_use]
pub fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        let other = short.get(i).copied().unwrap_or(0);
        let (sum, c) = add_with_carry(limb, other, carry);
        result.push(sum);
        carry = c;
    }
    if carry > 0 {
        result.push(carry);
    }
    trim(&mut result);
    result
}

/// Subtract `b` from `a`. Requires `a >= b`; result is trimmed.
#[must_use]
pub fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut result = a.to_vec();
    sub_assign(&mut result, b);
    result
}

/// In-place `a -= b`. Requires `a >= b`; `a` is trimmed afterwards.
pub fn sub_assign(a: &mut Vec<u32>, b: &[u32]) {
    debug_assert!(compare(a, b) != Ordering::Less, "magnitude underflow");
    let b = &b[..significant_len(b)];
    let mut borrow = 0;
    for (i, limb) in a.iter_mut().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }
        let (diff, br) = sub_with_borrow(*limb, b.get(i).copied().unwrap_or(0), borrow);
        *limb = diff;
        borrow = br;
    }
    trim(a);
}

/// In-place `acc += b * R^offset`. `acc` must be long enough to hold the sum.
pub fn add_at(acc: &mut [u32], b: &[u32], offset: usize) {
    let mut carry = 0;
    let mut i = offset;
    for &limb in &b[..significant_len(b)] {
        let (sum, c) = add_with_carry(acc[i], limb, carry);
        acc[i] = sum;
        carry = c;
        i += 1;
    }
    while carry > 0 {
        let (sum, c) = add_with_carry(acc[i], 0, carry);
        acc[i] = sum;
        carry = c;
        i += 1;
    }
}

/// Multiply a magnitude by a native scalar. Result is trimmed.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_small(a: &[u32], m: u32) -> Vec<u32> {
    if m == 0 || is_zero(a) {
        return vec![0];
    }
    let mut result = Vec::with_capacity(a.len() + 2);
    let mut carry = 0u64;
    for &limb in a {
        let (low, c) = mul_add(limb, m, 0, carry);
        result.push(low);
        carry = c;
    }
    while carry > 0 {
        result.push((carry % LIMB_RADIX_U64) as u32);
        carry /= LIMB_RADIX_U64;
    }
    trim(&mut result);
    result
}

/// Divide a magnitude by a non-zero native scalar -> (quotient, remainder).
///
/// The quotient is trimmed.
///
/// # Panics
///
/// Panics if `d` is zero. Callers route zero divisors to
/// `ArithError::DivisionByZero` first.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn div_small(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    assert!(d != 0, "div_small by zero");
    let d = u64::from(d);
    let mut quotient = vec![0u32; a.len()];
    let mut rem = 0u64;
    for (i, &limb) in a.iter().enumerate().rev() {
        let cur = rem * LIMB_RADIX_U64 + u64::from(limb);
        quotient[i] = (cur / d) as u32;
        rem = cur % d;
    }
    trim(&mut quotient);
    (quotient, rem as u32)
}
