//==============================================================================
// Prime sources: the deliberately slow part of the demo
//==============================================================================

use std::cell::Cell;
use std::time::Instant;
use tracing::{debug, info};

/// Something that can produce the first `count` primes, in order.
///
/// `PrimeHolder` takes one of these on its expensive path so the cost can be
/// swapped out or counted from the outside.
pub trait PrimeSource {
    fn first_primes(&self, count: usize) -> Vec<u64>;
}

/// Trial division against every integer below the candidate.
///
/// No square-root bound, no skipping even numbers. The point is that it is
/// slow enough to notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimeSource for TrialDivision {
    fn first_primes(&self, count: usize) -> Vec<u64> {
        let start = Instant::now();
        info!(count, "computing primes by trial division");

        let mut primes = Vec::with_capacity(count);
        let mut candidate = 2u64;
        let mut divisions = 0u64;

        while primes.len() < count {
            divisions += candidate.saturating_sub(2);
            if is_prime(candidate) {
                primes.push(candidate);
            }
            candidate += 1;
        }

        debug!(divisions, "upper bound on trial divisions performed");
        info!(count, elapsed = ?start.elapsed(), "prime batch ready");
        primes
    }
}

/// Naive primality check: tries every divisor in `[2, n)`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    for divisor in 2..n {
        if n % divisor == 0 {
            return false;
        }
    }

    true
}

/// Wraps another source and counts how often the expensive path runs.
#[derive(Debug, Default)]
pub struct CountingSource<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S: PrimeSource> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        CountingSource {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<S: PrimeSource> PrimeSource for CountingSource<S> {
    fn first_primes(&self, count: usize) -> Vec<u64> {
        self.calls.set(self.calls.get() + 1);
        self.inner.first_primes(count)
    }
}
