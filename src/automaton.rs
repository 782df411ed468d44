//! Tsetlin Automaton - the fundamental building block.

/// # Overview
///
/// A single two-action automaton backed by a signed counter.
///
/// State `> 0` produces action=true (include literal), state `<= 0`
/// produces action=false (exclude). New automata start at 0 (excluded).
///
/// Counters are unbounded unless a bound is given, in which case the state
/// saturates in `[-bound, bound]`. The unbounded form still saturates at the
/// `i32` limits instead of overflowing.
///
/// # Examples
///
/// ```
/// use tsetlin_machine::Automaton;
///
/// let mut automaton = Automaton::new();
/// assert!(!automaton.action());
///
/// automaton.increment();
/// assert!(automaton.action());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Automaton {
    state: i32,
    bound: i32
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// # Overview
    ///
    /// Creates an unbounded automaton at state 0.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: 0,
            bound: i32::MAX
        }
    }

    /// # Overview
    ///
    /// Creates an automaton at state 0 saturating in `[-bound, bound]`.
    ///
    /// A non-positive `bound` cannot hold the include/exclude split, so it
    /// yields an unbounded automaton instead.
    #[inline]
    pub fn bounded(bound: i32) -> Self {
        if bound <= 0 {
            return Self::new();
        }
        Self {
            state: 0,
            bound
        }
    }

    /// # Overview
    ///
    /// Creates an automaton from a stored bound, `None` meaning unbounded.
    #[inline]
    pub fn with_bound(bound: Option<i32>) -> Self {
        bound.map_or_else(Self::new, Self::bounded)
    }

    /// # Overview
    ///
    /// Returns true if state > 0 (include literal).
    #[inline]
    pub fn action(&self) -> bool {
        self.state > 0
    }

    #[inline]
    pub fn state(&self) -> i32 {
        self.state
    }

    /// # Overview
    ///
    /// Sets state directly, clamped to the bound.
    #[inline]
    pub fn set_state(&mut self, state: i32) {
        self.state = state.clamp(-self.bound, self.bound);
    }

    /// # Overview
    ///
    /// Increments state. Capped at `bound`.
    #[inline]
    pub fn increment(&mut self) {
        if self.state < self.bound {
            self.state += 1;
        }
    }

    /// # Overview
    ///
    /// Decrements state. Floored at `-bound`.
    #[inline]
    pub fn decrement(&mut self) {
        if self.state > -self.bound {
            self.state -= 1;
        }
    }
}
