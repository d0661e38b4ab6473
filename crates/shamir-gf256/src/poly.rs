//! Polynomials over GF(2^8)
//!
//! A polynomial is a coefficient slice, lowest degree first: `p[0]` is the
//! constant term.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::gf256;

pub use crate::gf256::degree;

/// An evaluation `(x, y)` of a polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u8,
    pub y: u8,
}

impl Point {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Point {
    fn from((x, y): (u8, u8)) -> Self {
        Self { x, y }
    }
}

/// Random polynomial of exactly `degree` with constant term `constant`.
///
/// Redraws until the leading coefficient is nonzero. Each draw fails with
/// probability 1/256, so there is no retry bound.
pub fn generate<R>(rng: &mut R, degree: usize, constant: u8) -> Zeroizing<Vec<u8>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut p = Zeroizing::new(vec![0u8; degree + 1]);
    loop {
        rng.fill_bytes(&mut p);
        if gf256::degree(&p) == degree {
            break;
        }
    }
    p[0] = constant;
    p
}

/// Evaluate `p` at `x` (Horner's method)
pub fn eval(p: &[u8], x: u8) -> u8 {
    p.iter()
        .rev()
        .fold(0u8, |acc, &c| gf256::add(gf256::mul(acc, x), c))
}

/// Lagrange interpolation at x = 0.
///
/// `points` must have pairwise distinct x-coordinates. Neither distinctness
/// nor point count is checked here.
pub fn interpolate(points: &[Point]) -> u8 {
    let mut secret = 0u8;
    for (i, pi) in points.iter().enumerate() {
        let mut basis = 1u8;
        for (j, pj) in points.iter().enumerate() {
            if i != j {
                let num = gf256::sub(0, pj.x);
                let den = gf256::sub(pi.x, pj.x);
                basis = gf256::mul(basis, gf256::div(num, den));
            }
        }
        secret = gf256::add(secret, gf256::mul(basis, pi.y));
    }
    secret
}
