//! Finite stream of generator outputs, decoupled from any printing. A stream
//! is restartable: building a second one from the same seed replays the same
//! values.

use crate::rng::Xorshift64Star;

/// Lazy iterator over the first `count` outputs for a seed.
#[derive(Debug, Clone)]
pub struct OutputStream {
    rng: Xorshift64Star,
    remaining: usize,
}

impl OutputStream {
    pub fn new(seed: u64, count: usize) -> Self {
        Self {
            rng: Xorshift64Star::new(seed),
            remaining: count,
        }
    }
}

impl Iterator for OutputStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.next_u64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for OutputStream {}

/// Collect the first `count` outputs for a seed.
pub fn collect_outputs(seed: u64, count: usize) -> Vec<u64> {
    OutputStream::new(seed, count).collect()
}
