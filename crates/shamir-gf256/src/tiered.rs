//! tiered sharing: mandatory parts plus a quorum
//!
//! Parts `1..=m` are mandatory. Any `k - m` of the remaining parts
//! `m+1..=n` complete the set.
//!
//! ```text
//!              secret
//!                │  (m+1)-of-(m+1)
//!      ┌────┬────┴──────┐
//!      ▼    ▼           ▼
//!     [1] .. [m]     bridge
//!                       │  (k-m)-of-(n-m), indices shifted by m
//!               ┌───────┼───────┐
//!               ▼       ▼       ▼
//!             [m+1]   ....     [n]
//! ```

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use crate::scheme::{self, Parts, Scheme, MAX_PARTS};
use crate::{Error, Result};

/// Validated (n, m, k) triple: `n` parts, of which the first `m` are
/// mandatory and `k` in total recover the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TieredParams", into = "TieredParams")
)]
pub struct TieredScheme {
    n: u8,
    m: u8,
    k: u8,
}

impl TieredScheme {
    /// `n` parts in total, `m` of them mandatory, `k` needed overall.
    ///
    /// Requires `k > 2`, `0 < m < k - 1`, `n >= k` and `n <= 255`.
    pub fn new(n: usize, m: usize, k: usize) -> Result<Self> {
        if k <= 2 {
            warn!(k, "rejecting tiered scheme: threshold must be > 2");
            return Err(Error::TieredThresholdTooLow { k });
        }
        if m == 0 || m >= k - 1 {
            warn!(m, k, "rejecting tiered scheme: bad mandatory count");
            return Err(Error::InvalidMandatory { m, k });
        }
        if n < k {
            warn!(n, k, "rejecting tiered scheme: fewer parts than threshold");
            return Err(Error::ThresholdExceedsParts { n, k });
        }
        if n > MAX_PARTS {
            warn!(n, "rejecting tiered scheme: too many parts");
            return Err(Error::TooManyParts { n });
        }
        Ok(Self {
            n: n as u8,
            m: m as u8,
            k: k as u8,
        })
    }

    /// number of parts produced by [`TieredScheme::split`]
    pub fn n(&self) -> usize {
        self.n as usize
    }

    /// number of mandatory parts, indices `1..=m`
    pub fn m(&self) -> usize {
        self.m as usize
    }

    /// total number of parts required by [`TieredScheme::join`]
    pub fn k(&self) -> usize {
        self.k as usize
    }

    /// splits the secret into the mandatory parts plus the bridge part
    fn mandatory_scheme(&self) -> Scheme {
        Scheme {
            n: self.m + 1,
            k: self.m + 1,
        }
    }

    /// splits the bridge part into the quorum parts
    fn quorum_scheme(&self) -> Scheme {
        Scheme {
            n: self.n - self.m,
            k: self.k - self.m,
        }
    }

    /// Split `secret` into parts `1..=n`.
    pub fn split<R>(&self, rng: &mut R, secret: &[u8]) -> Parts
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        debug!(n = self.n, m = self.m, k = self.k, len = secret.len(), "tiered split");

        let bridge_index = self.m + 1;
        let mut parts = self.mandatory_scheme().split(rng, secret);
        let bridge = Zeroizing::new(parts.remove(&bridge_index).unwrap_or_default());

        parts.extend(
            self.quorum_scheme()
                .split_with_offset(rng, &bridge, self.m),
        );
        parts
    }

    /// Recover the secret from every mandatory part and some quorum parts.
    ///
    /// As with [`scheme::join`], fewer than `k - m` quorum parts yield a
    /// wrong secret rather than an error.
    pub fn join(&self, parts: &Parts) -> Result<Vec<u8>> {
        scheme::common_length(parts)?;

        for index in 1..=self.m {
            if !parts.contains_key(&index) {
                warn!(index, "rejecting tiered join: missing mandatory part");
                return Err(Error::MissingMandatoryPart { index });
            }
        }

        let mut quorum: Parts = parts
            .range(self.m + 1..)
            .map(|(&index, value)| (index - self.m, value.clone()))
            .collect();
        if quorum.is_empty() {
            warn!("rejecting tiered join: no quorum parts");
            return Err(Error::NoQuorumParts);
        }
        debug!(mandatory = self.m, quorum = quorum.len(), "tiered join");

        let bridge = scheme::join(&quorum);
        quorum.values_mut().for_each(|value| value.zeroize());
        let bridge = bridge?;

        let mut outer: Parts = parts
            .range(1..=self.m)
            .map(|(&index, value)| (index, value.clone()))
            .collect();
        outer.insert(self.m + 1, bridge);

        let secret = scheme::join(&outer);
        outer.values_mut().for_each(|value| value.zeroize());
        secret
    }
}

/// serialized form of [`TieredScheme`], validated on the way in
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct TieredParams {
    pub n: usize,
    pub m: usize,
    pub k: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<TieredParams> for TieredScheme {
    type Error = Error;

    fn try_from(params: TieredParams) -> Result<Self> {
        TieredScheme::new(params.n, params.m, params.k)
    }
}

#[cfg(feature = "serde")]
impl From<TieredScheme> for TieredParams {
    fn from(scheme: TieredScheme) -> Self {
        Self {
            n: scheme.n(),
            m: scheme.m(),
            k: scheme.k(),
        }
    }
}
