//! Predicates deciding whether a repeat decorator restarts or reverses
//!
//! A predicate is asked once per completion event. Predicates may keep state
//! between calls (a [`Times`] counts down), so every decorator owns its own.

/// A zero-argument condition, evaluated once per completion event
pub trait Predicate {
    fn check(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Predicate for F {
    fn check(&mut self) -> bool {
        self()
    }
}

/// Always true
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl Predicate for Always {
    fn check(&mut self) -> bool {
        true
    }
}

/// Never true
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Never;

impl Predicate for Never {
    fn check(&mut self) -> bool {
        false
    }
}

/// True for exactly the first `n` checks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Times {
    remaining: u32,
}

impl Times {
    /// True for the next `count` checks
    pub fn new(count: u32) -> Self {
        Self { remaining: count }
    }

    /// Checks left that will still return true
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl Predicate for Times {
    fn check(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
