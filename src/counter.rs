//! Counter state machine.
//!
//! This module provides the bounded tally counter at the heart of the
//! application: an integer value, a pair of inclusive bounds, and a cached
//! boundary status that is re-derived on every transition.
//!
//! # Example
//!
//! ```rust
//! use tally::counter::{Counter, Status};
//!
//! let mut counter = Counter::new();
//! assert_eq!(counter.value(), 0);
//! assert_eq!(counter.status(), Status::Idle);
//!
//! counter.increment().unwrap();
//! assert_eq!(counter.value(), 1);
//! ```

use std::fmt;

use thiserror::Error;

/// Default inclusive floor for the tally.
pub const DEFAULT_LOWER_BOUND: i32 = -30;

/// Default inclusive ceiling for the tally.
pub const DEFAULT_UPPER_BOUND: i32 = 30;

/// Classification of the tally relative to its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The tally sits strictly between its bounds.
    Idle,
    /// The tally has reached the upper bound.
    AtMax,
    /// The tally has reached the lower bound.
    AtMin,
}

impl Status {
    /// Returns the display label for this status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AtMax => "Max reached",
            Self::AtMin => "Min reached",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced by counter construction, setters, and transitions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    /// The tally is already at the upper bound; incrementing would leave the
    /// configured range.
    #[error("tally is already at the upper bound ({bound})")]
    AtUpperBound {
        /// The inclusive ceiling that was hit.
        bound: i32,
    },

    /// The tally is already at the lower bound; decrementing would leave the
    /// configured range.
    #[error("tally is already at the lower bound ({bound})")]
    AtLowerBound {
        /// The inclusive floor that was hit.
        bound: i32,
    },

    /// The lower bound does not sit strictly below the upper bound.
    #[error("lower bound {lower} must sit strictly below upper bound {upper}")]
    InvalidBounds {
        /// Requested floor.
        lower: i32,
        /// Requested ceiling.
        upper: i32,
    },

    /// The bounds exclude zero, which reset must always be able to reach.
    #[error("bounds [{lower}, {upper}] must include the reset value 0")]
    ZeroExcluded {
        /// Requested floor.
        lower: i32,
        /// Requested ceiling.
        upper: i32,
    },

    /// A value lies outside the configured bounds.
    #[error("value {value} is outside [{lower}, {upper}]")]
    OutOfRange {
        /// The offending value.
        value: i32,
        /// The inclusive floor.
        lower: i32,
        /// The inclusive ceiling.
        upper: i32,
    },
}

/// A bounded tally: current value, inclusive bounds, and cached status.
///
/// The cached status always agrees with the value: `AtMax` exactly when the
/// value equals the upper bound, `AtMin` exactly at the lower bound, `Idle`
/// otherwise. Every constructor, setter, and transition maintains this.
///
/// Transitions that would leave the range are rejected with a
/// [`CounterError`] and leave the counter untouched. The interactive control
/// layer disables the triggering binding before that can happen, so the
/// rejection path is only observable to programmatic callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    value: i32,
    lower: i32,
    upper: i32,
    status: Status,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            value: 0,
            lower: DEFAULT_LOWER_BOUND,
            upper: DEFAULT_UPPER_BOUND,
            status: Status::Idle,
        }
    }
}

impl Counter {
    /// Creates a counter at zero with the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter with an explicit starting value and bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidBounds`] when `lower >= upper`,
    /// [`CounterError::ZeroExcluded`] when the range misses 0, and
    /// [`CounterError::OutOfRange`] when `value` falls outside the range.
    pub fn with_config(value: i32, lower: i32, upper: i32) -> Result<Self, CounterError> {
        Self::validate_bounds(lower, upper)?;
        if value < lower || value > upper {
            return Err(CounterError::OutOfRange {
                value,
                lower,
                upper,
            });
        }
        Ok(Self {
            value,
            lower,
            upper,
            status: Self::derive_status(value, lower, upper),
        })
    }

    fn validate_bounds(lower: i32, upper: i32) -> Result<(), CounterError> {
        if lower >= upper {
            return Err(CounterError::InvalidBounds { lower, upper });
        }
        // Reset always returns to 0, so 0 must be reachable.
        if lower > 0 || upper < 0 {
            return Err(CounterError::ZeroExcluded { lower, upper });
        }
        Ok(())
    }

    fn derive_status(value: i32, lower: i32, upper: i32) -> Status {
        if value == upper {
            Status::AtMax
        } else if value == lower {
            Status::AtMin
        } else {
            Status::Idle
        }
    }

    /// Returns the current tally value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the current boundary status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the inclusive floor.
    #[must_use]
    pub fn lower_bound(&self) -> i32 {
        self.lower
    }

    /// Returns the inclusive ceiling.
    #[must_use]
    pub fn upper_bound(&self) -> i32 {
        self.upper
    }

    /// Returns whether the tally is at its resting value of zero.
    ///
    /// The reset control is disabled while this holds.
    #[must_use]
    pub fn at_rest(&self) -> bool {
        self.value == 0
    }

    /// Steps the tally up by one.
    ///
    /// Reaching the upper bound flips the status to [`Status::AtMax`]; any
    /// other destination is [`Status::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::AtUpperBound`] when the tally already sits at
    /// the ceiling. The counter is left unchanged.
    pub fn increment(&mut self) -> Result<i32, CounterError> {
        if self.value >= self.upper {
            return Err(CounterError::AtUpperBound { bound: self.upper });
        }
        let next = self.value + 1;
        self.status = if next == self.upper {
            Status::AtMax
        } else {
            Status::Idle
        };
        self.value = next;
        Ok(next)
    }

    /// Steps the tally down by one.
    ///
    /// Reaching the lower bound flips the status to [`Status::AtMin`]; any
    /// other destination is [`Status::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::AtLowerBound`] when the tally already sits at
    /// the floor. The counter is left unchanged.
    pub fn decrement(&mut self) -> Result<i32, CounterError> {
        if self.value <= self.lower {
            return Err(CounterError::AtLowerBound { bound: self.lower });
        }
        let next = self.value - 1;
        self.status = if next == self.lower {
            Status::AtMin
        } else {
            Status::Idle
        };
        self.value = next;
        Ok(next)
    }

    /// Returns the tally to zero.
    ///
    /// The status is re-derived from the new value, so a range whose bound is
    /// itself zero lands on the matching boundary status rather than `Idle`.
    pub fn reset(&mut self) {
        self.value = 0;
        self.status = Self::derive_status(0, self.lower, self.upper);
    }

    /// Sets the tally to an arbitrary in-range value, re-deriving the status.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::OutOfRange`] when `value` falls outside the
    /// configured bounds.
    pub fn set_value(&mut self, value: i32) -> Result<(), CounterError> {
        if value < self.lower || value > self.upper {
            return Err(CounterError::OutOfRange {
                value,
                lower: self.lower,
                upper: self.upper,
            });
        }
        self.value = value;
        self.status = Self::derive_status(value, self.lower, self.upper);
        Ok(())
    }

    /// Replaces both bounds, re-deriving the status.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidBounds`] or
    /// [`CounterError::ZeroExcluded`] for an unusable range, and
    /// [`CounterError::OutOfRange`] when the current value would fall outside
    /// the new range.
    pub fn set_bounds(&mut self, lower: i32, upper: i32) -> Result<(), CounterError> {
        Self::validate_bounds(lower, upper)?;
        if self.value < lower || self.value > upper {
            return Err(CounterError::OutOfRange {
                value: self.value,
                lower,
                upper,
            });
        }
        self.lower = lower;
        self.upper = upper;
        self.status = Self::derive_status(self.value, lower, upper);
        Ok(())
    }
}
