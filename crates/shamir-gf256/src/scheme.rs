//! (k, n)-threshold split and join
//!
//! Each secret byte gets its own random polynomial of degree k - 1 with the
//! byte as constant term. Part `x` holds every polynomial evaluated at `x`;
//! joining interpolates each position back at x = 0.

use std::collections::BTreeMap;

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, warn};

use crate::parallel::collect_bytes;
use crate::poly::{self, Point};
use crate::{Error, Result};

/// Maximum number of parts (part indices are nonzero bytes)
pub const MAX_PARTS: usize = 255;

/// Parts keyed by their 1-based index
pub type Parts = BTreeMap<u8, Vec<u8>>;

/// Validated (n, k) pair: `n` parts, any `k` of which recover the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SchemeParams", into = "SchemeParams")
)]
pub struct Scheme {
    pub(crate) n: u8,
    pub(crate) k: u8,
}

impl Scheme {
    /// Checks `k > 1`, `n >= k` and `n <= 255`, in that order.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if k <= 1 {
            warn!(k, "rejecting scheme: threshold must be > 1");
            return Err(Error::ThresholdTooLow { k });
        }
        if n < k {
            warn!(n, k, "rejecting scheme: fewer parts than threshold");
            return Err(Error::ThresholdExceedsParts { n, k });
        }
        if n > MAX_PARTS {
            warn!(n, "rejecting scheme: too many parts");
            return Err(Error::TooManyParts { n });
        }
        Ok(Self {
            n: n as u8,
            k: k as u8,
        })
    }

    /// number of parts produced by [`Scheme::split`]
    pub fn n(&self) -> usize {
        self.n as usize
    }

    /// number of parts required by [`Scheme::join`]
    pub fn k(&self) -> usize {
        self.k as usize
    }

    /// Split `secret` into parts `1..=n`, each as long as the secret.
    pub fn split<R>(&self, rng: &mut R, secret: &[u8]) -> Parts
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.split_with_offset(rng, secret, 0)
    }

    /// Split into parts keyed `offset + 1..=offset + n`.
    ///
    /// Part `offset + x` holds the evaluations at `x`, so joining needs the
    /// keys shifted back down by `offset`. `offset + n` must not exceed 255.
    pub(crate) fn split_with_offset<R>(&self, rng: &mut R, secret: &[u8], offset: u8) -> Parts
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        debug!(n = self.n, k = self.k, len = secret.len(), offset, "splitting secret");

        // draws stay sequential on the caller's generator
        let degree = self.k() - 1;
        let polys: Vec<_> = secret
            .iter()
            .map(|&byte| poly::generate(rng, degree, byte))
            .collect();

        (1..=self.n)
            .map(|x| {
                let value = collect_bytes(polys.len(), |i| poly::eval(&polys[i], x));
                (offset + x, value)
            })
            .collect()
    }

    /// Recover the secret from `parts`. See [`join`].
    pub fn join(&self, parts: &Parts) -> Result<Vec<u8>> {
        join(parts)
    }
}

/// Split `secret` into `n` parts, any `k` of which recover it.
pub fn split<R>(rng: &mut R, n: usize, k: usize, secret: &[u8]) -> Result<Parts>
where
    R: RngCore + CryptoRng + ?Sized,
{
    Ok(Scheme::new(n, k)?.split(rng, secret))
}

/// Recover a secret from a set of parts.
///
/// Fails only on an empty set or parts of differing lengths. Fewer than k
/// parts, or corrupted parts, still produce a result: it is just not the
/// original secret. Nothing in the scheme can detect this.
pub fn join(parts: &Parts) -> Result<Vec<u8>> {
    let len = common_length(parts)?;
    debug!(parts = parts.len(), len, "joining parts");

    Ok(collect_bytes(len, |i| {
        let points: Vec<Point> = parts
            .iter()
            .map(|(&x, value)| Point::new(x, value[i]))
            .collect();
        poly::interpolate(&points)
    }))
}

/// Length shared by every part value.
pub(crate) fn common_length(parts: &Parts) -> Result<usize> {
    let mut lengths = parts.values().map(Vec::len);
    let Some(len) = lengths.next() else {
        warn!("rejecting join: no parts");
        return Err(Error::NoParts);
    };
    if lengths.any(|l| l != len) {
        warn!("rejecting join: parts have varying lengths");
        return Err(Error::InconsistentPartLengths);
    }
    Ok(len)
}

/// serialized form of [`Scheme`], validated on the way in
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SchemeParams {
    pub n: usize,
    pub k: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<SchemeParams> for Scheme {
    type Error = Error;

    fn try_from(params: SchemeParams) -> Result<Self> {
        Scheme::new(params.n, params.k)
    }
}

#[cfg(feature = "serde")]
impl From<Scheme> for SchemeParams {
    fn from(scheme: Scheme) -> Self {
        Self {
            n: scheme.n(),
            k: scheme.k(),
        }
    }
}
