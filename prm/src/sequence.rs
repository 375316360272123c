use nalgebra as na;

use crate::error::{ PrmError, Result };
use crate::utils::*;

/// Radical inverse of `n` in `base`: the base-`base` digits of `n` mirrored
/// around the fractional point.
pub fn radical_inverse(mut n: u64, base: u32) -> f64 {
    let base_u = u64::from(base);
    let base_f = f64::from(base);
    let mut inverse = 0.0;
    let mut multiplier = 1.0 / base_f;

    while n > 0 {
        inverse += (n % base_u) as f64 * multiplier;
        multiplier /= base_f;
        n /= base_u;
    }

    inverse
}

/// An infinite Van der Corput sequence. Each call to `next` yields the radical
/// inverse of the cursor and then advances it, so the first value is always `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct VanDerCorput {
    base: u32,
    index: u64,
}

impl VanDerCorput {
    pub fn new(base: u32) -> Result<Self> {
        if base < 2 {
            return Err(PrmError::InvalidBase(base));
        }
        Ok(VanDerCorput { base, index: 0 })
    }

    /// Rewinds the cursor, the sequence will produce the same values again.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[inline(always)]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Index of the value that the next call to `next` will return.
    #[inline(always)]
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl Default for VanDerCorput {
    /// The classic base 2 sequence.
    fn default() -> Self {
        VanDerCorput { base: 2, index: 0 }
    }
}

impl Iterator for VanDerCorput {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = radical_inverse(self.index, self.base);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Two dimensional Halton sequence, pairing two Van der Corput sequences with
/// coprime bases. Points are fractional, in `[0, 1) x [0, 1)`.
#[derive(Debug, Clone)]
pub struct Halton {
    x_gen: VanDerCorput,
    y_gen: VanDerCorput,
}

impl Halton {
    pub fn new(p: u32, q: u32) -> Result<Self> {
        let x_gen = VanDerCorput::new(p)?;
        let y_gen = VanDerCorput::new(q)?;

        if gcd(p, q) != 1 {
            return Err(PrmError::NonCoprimeBases(p, q));
        }

        Ok(Halton { x_gen, y_gen })
    }

    pub fn reset(&mut self) {
        self.x_gen.reset();
        self.y_gen.reset();
    }

    /// Number of points drawn since construction or the last reset.
    pub fn index(&self) -> u64 {
        self.x_gen.index()
    }
}

impl Iterator for Halton {
    type Item = na::Point2<f64>;

    fn next(&mut self) -> Option<na::Point2<f64>> {
        let x = self.x_gen.next()?;
        let y = self.y_gen.next()?;
        Some(na::Point2::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
