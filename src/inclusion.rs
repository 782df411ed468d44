//! Sparse inclusion set - the literals a clause currently conjoins.

use smallvec::SmallVec;

/// Inline capacity before spilling to the heap.
///
/// Trained clauses rarely include more than a few dozen literals.
const INLINE_CAPACITY: usize = 32;

/// # Overview
///
/// Sorted set of included literal indices.
///
/// Derived from automaton signs: a clause keeps it equal to
/// `{ i : automata[i].state() > 0 }` after every automaton mutation, so
/// activation only visits included literals instead of all `2n` automata.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::InclusionSet;
///
/// let mut set = InclusionSet::new();
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
/// assert!(set.contains(3));
/// assert!(set.remove(3));
/// assert!(set.is_empty());
/// ```
///
/// Indices are stored as `u32`. [`Config::validate`](crate::Config::validate)
/// caps `n_inputs` so every literal index fits; larger indices are never
/// stored and never reported as present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionSet {
    indices: SmallVec<[u32; INLINE_CAPACITY]>
}

impl InclusionSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        key(index).is_some_and(|key| self.indices.binary_search(&key).is_ok())
    }

    /// Inserts `index`. Returns false if already present or not storable.
    pub fn insert(&mut self, index: usize) -> bool {
        let Some(key) = key(index) else {
            return false;
        };
        match self.indices.binary_search(&key) {
            Ok(_) => false,
            Err(pos) => {
                self.indices.insert(pos, key);
                true
            }
        }
    }

    /// Removes `index`. Returns false if absent.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(key) = key(index) else {
            return false;
        };
        match self.indices.binary_search(&key) {
            Ok(pos) => {
                self.indices.remove(pos);
                true
            }
            Err(_) => false
        }
    }

    /// # Overview
    ///
    /// Makes membership of `index` equal to `included`. Returns true if the
    /// set changed.
    #[inline]
    pub fn sync(&mut self, index: usize, included: bool) -> bool {
        if included {
            self.insert(index)
        } else {
            self.remove(index)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Included literal indices in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&i| i as usize)
    }
}

#[inline]
fn key(index: usize) -> Option<u32> {
    u32::try_from(index).ok()
}
