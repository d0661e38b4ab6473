//! deterministic randomness for unit tests

use rand_core::{impls, CryptoRng, Error, RngCore};

/// Replays a fixed list of draws, one per `fill_bytes` call.
///
/// Panics if a draw has the wrong length or the script runs out.
pub(crate) struct ScriptedRng {
    script: Vec<Vec<u8>>,
    next: usize,
}

impl ScriptedRng {
    pub(crate) fn new(draws: &[&[u8]]) -> Self {
        Self {
            script: draws.iter().map(|d| d.to_vec()).collect(),
            next: 0,
        }
    }

    /// number of draws consumed so far
    pub(crate) fn draws(&self) -> usize {
        self.next
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let draw = &self.script[self.next];
        assert_eq!(draw.len(), dest.len(), "draw {} has the wrong length", self.next);
        dest.copy_from_slice(draw);
        self.next += 1;
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}
