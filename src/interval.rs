//! Ranges with an optional lower and upper bound, used by search filters.

use std::fmt;

/// A range of values. Either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Interval<T> {
    pub fn new(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: T) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl<T> Default for Interval<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Bound<'a, T>(&'a Option<T>);

        impl<T: fmt::Display> fmt::Display for Bound<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    Some(value) => value.fmt(f),
                    None => f.write_str("nil"),
                }
            }
        }

        write!(f, "{{Min: {}, Max: {}}}", Bound(&self.min), Bound(&self.max))
    }
}
