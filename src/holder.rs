//==============================================================================
// PrimeHolder: the prototype
//==============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::error::PrimeError;
use crate::sieve::{PrimeSource, TrialDivision};

/// How many primes the expensive path computes up front.
pub const PRIME_BATCH: usize = 50;

/// A holder reachable through more than one handle.
///
/// Every handle sees the same cache and the same index, which is exactly the
/// behaviour `cloned_from` exists to avoid.
pub type SharedHolder = Rc<RefCell<PrimeHolder>>;

/// A batch of precomputed primes plus a cursor into it.
///
/// There are two ways to get one. [`PrimeHolder::create`] pays for the
/// computation; [`PrimeHolder::cloned_from`] copies an existing batch and
/// only picks a new index.
#[derive(Debug, PartialEq, Eq)]
pub struct PrimeHolder {
    cache: Vec<u64>,
    index: usize,
}

impl PrimeHolder {
    /// Expensive path: computes the first [`PRIME_BATCH`] primes by trial
    /// division.
    pub fn create(index: usize) -> Self {
        Self::create_with(&TrialDivision, PRIME_BATCH, index)
    }

    pub fn create_with<S>(source: &S, batch_size: usize, index: usize) -> Self
    where
        S: PrimeSource + ?Sized,
    {
        let cache = source.first_primes(batch_size);
        info!(batch_size, index, "holder created from scratch");
        PrimeHolder { cache, index }
    }

    /// Cheap path: copies `other`'s cache into new storage.
    ///
    /// The returned holder owns its primes outright. Changing its index, or
    /// dropping `other`, has no effect on the other side.
    pub fn cloned_from(other: &PrimeHolder, new_index: usize) -> Self {
        debug!(from = other.index, to = new_index, "holder cloned");
        PrimeHolder {
            cache: other.cache.clone(),
            index: new_index,
        }
    }

    /// Moves this holder behind a shared handle.
    pub fn shared(self) -> SharedHolder {
        Rc::new(RefCell::new(self))
    }

    /// Binds a second handle to the same holder. Nothing is copied.
    pub fn assign(holder: &SharedHolder) -> SharedHolder {
        Rc::clone(holder)
    }

    pub fn number(&self) -> Result<u64, PrimeError> {
        self.cache
            .get(self.index)
            .copied()
            .ok_or(PrimeError::IndexOutOfRange {
                index: self.index,
                len: self.cache.len(),
            })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        debug!(from = self.index, to = index, "index reassigned");
        self.index = index;
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn primes(&self) -> &[u64] {
        &self.cache
    }

    /// True when both holders read from the same backing buffer.
    pub fn shares_storage_with(&self, other: &PrimeHolder) -> bool {
        !self.cache.is_empty() && std::ptr::eq(self.cache.as_ptr(), other.cache.as_ptr())
    }
}

impl fmt::Display for PrimeHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.index.saturating_add(1);
        match self.number() {
            Ok(value) => write!(f, "prime #{} = {}", position, value),
            Err(_) => write!(f, "prime #{} = <out of range>", position),
        }
    }
}
