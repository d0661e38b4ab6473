//! per-byte fan-out
//!
//! Secret positions are independent, so split and join compute each output
//! byte with a closure over its position. With the `parallel` feature the
//! positions are spread over the rayon pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Build a byte string of `len` bytes where byte `i` is `f(i)`.
pub(crate) fn collect_bytes<F>(len: usize, f: F) -> Vec<u8>
where
    F: Fn(usize) -> u8 + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        (0..len).into_par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..len).map(f).collect()
    }
}
