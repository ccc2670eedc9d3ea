//! # Random Digits
//!
//! Uniform decimal digits drawn from any [`Rng`]. Generators take the RNG as
//! a parameter so tests can drive them deterministically; production callers
//! pass `rand::rngs::OsRng`.

use rand::Rng;

/// Draw one uniformly distributed decimal digit.
pub fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..10)
}

/// Draw `count` uniformly distributed ASCII digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| crate::checksum::digit_char(random_digit(rng)))
        .collect()
}
