//! Integer helpers shared by grid puzzles: triangular numbers, gcd/lcm,
//! products and midpoints

use std::ops::{Mul, RangeInclusive};

use num_traits::{One, PrimInt};

use crate::io::error::{Result, overflow};

/// Sum of `1..=n`
///
/// # Errors
///
/// Returns `Overflow` if the result does not fit in `N`
pub fn triangular<N: PrimInt>(n: N) -> Result<N> {
    let two = N::one() + N::one();
    let next = n
        .checked_add(&N::one())
        .ok_or_else(|| overflow("triangular", &"n + 1 exceeds the integer range"))?;
    // Halve whichever factor is even so the product stays exact
    let (left, right) = if (n % two).is_zero() {
        (n / two, next)
    } else {
        (n, next / two)
    };
    left.checked_mul(&right)
        .ok_or_else(|| overflow("triangular", &"product exceeds the integer range"))
}

/// Greatest common divisor of two non-negative integers
pub fn gcd<N: PrimInt>(a: N, b: N) -> N {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two non-negative integers, 0 if either is 0
pub fn lcm<N: PrimInt>(a: N, b: N) -> N {
    if a.is_zero() || b.is_zero() {
        N::zero()
    } else {
        a / gcd(a, b) * b
    }
}

/// Least common multiple of every value
///
/// Undefined for an empty input or one containing 0; both yield 0.
pub fn lowest_common_multiple<N, I>(values: I) -> N
where
    N: PrimInt,
    I: IntoIterator<Item = N>,
{
    let mut result: Option<N> = None;
    for value in values {
        if value.is_zero() {
            return N::zero();
        }
        result = Some(result.map_or(value, |acc| lcm(acc, value)));
    }
    result.unwrap_or_else(N::zero)
}

/// Product of every value, 1 for an empty input
pub fn product<N, I>(values: I) -> N
where
    N: One + Mul<Output = N>,
    I: IntoIterator<Item = N>,
{
    values.into_iter().fold(N::one(), |acc, value| acc * value)
}

/// Product of every value, failing instead of wrapping
///
/// # Errors
///
/// Returns `Overflow` as soon as an intermediate product leaves the range of `N`
pub fn checked_product<N, I>(values: I) -> Result<N>
where
    N: PrimInt,
    I: IntoIterator<Item = N>,
{
    values.into_iter().try_fold(N::one(), |acc, value| {
        acc.checked_mul(&value)
            .ok_or_else(|| overflow("checked_product", &"product exceeds the integer range"))
    })
}

/// Midpoint of an inclusive range, rounded towards its start
pub fn middle<N: PrimInt>(range: &RangeInclusive<N>) -> N {
    let two = N::one() + N::one();
    *range.start() + (*range.end() - *range.start()) / two
}

/// Middle element of an odd-length slice
pub fn middle_element<E>(items: &[E]) -> Option<&E> {
    if items.len() % 2 == 1 {
        items.get(items.len() / 2)
    } else {
        None
    }
}
