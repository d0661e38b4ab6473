//! # shamir-gf256
//!
//! (k, n)-threshold secret sharing over GF(2^8).
//!
//! A secret byte string is split into `n` parts. Any `k` of them recover it
//! exactly; fewer reveal nothing about it.
//!
//! ## architecture
//!
//! ```text
//!   scheme / tiered      split, join
//!         │
//!         ▼
//!       poly             generate, eval, interpolate
//!         │
//!         ▼
//!      gf256             add, sub, mul, div (log/exp tables)
//! ```
//!
//! Every secret byte gets an independent random polynomial whose constant
//! term is that byte. Part `x` stores all polynomials evaluated at `x`.
//!
//! ## limitations
//!
//! There is no integrity check. Joining fewer than `k` parts, or corrupted
//! parts, returns garbage instead of an error. Confidentiality rests entirely
//! on the caller's random number generator.
//!
//! ## usage
//!
//! ```rust
//! use shamir_gf256::{join, split};
//!
//! let mut rng = rand::thread_rng();
//! let secret = b"hello world";
//! let mut parts = split(&mut rng, 5, 3, secret)?;
//!
//! // any 3 of the 5 parts are enough
//! parts.remove(&1);
//! parts.remove(&4);
//! assert_eq!(join(&parts)?, secret);
//! # Ok::<(), shamir_gf256::Error>(())
//! ```

pub mod error;
pub mod gf256;
mod parallel;
pub mod poly;
pub mod scheme;
pub mod tiered;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use poly::Point;
pub use scheme::{join, split, Parts, Scheme, MAX_PARTS};
pub use tiered::TieredScheme;
