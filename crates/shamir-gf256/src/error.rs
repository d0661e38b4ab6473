//! error types for shamir-gf256

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Parameter validation failures.
///
/// Reconstruction from too few, duplicated or corrupted parts is not an
/// error: it produces a deterministic byte string that is simply not the
/// original secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("threshold must be > 1 (k = {k})")]
    ThresholdTooLow { k: usize },

    #[error("part count must be >= threshold (n = {n}, k = {k})")]
    ThresholdExceedsParts { n: usize, k: usize },

    #[error("part count must be <= 255 (n = {n})")]
    TooManyParts { n: usize },

    #[error("no parts provided")]
    NoParts,

    #[error("parts have varying lengths")]
    InconsistentPartLengths,

    // === tiered scheme errors ===
    #[error("tiered threshold must be > 2 (k = {k})")]
    TieredThresholdTooLow { k: usize },

    #[error("mandatory part count must satisfy 0 < m < k - 1 (m = {m}, k = {k})")]
    InvalidMandatory { m: usize, k: usize },

    #[error("missing mandatory part {index}")]
    MissingMandatoryPart { index: u8 },

    #[error("no quorum parts provided")]
    NoQuorumParts,
}
