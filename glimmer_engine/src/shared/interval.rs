use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// Represents an interval of values. There may/not be a `start` and/or `end` bound.
///
/// # Requirements
/// It is a logic error for `start > end`. This requirement may not necessarily be
/// enforced due to performance reasons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> Interval<T> {
    pub const FULL: Self = Self { start: None, end: None };
}

// region From<> for range types

impl<T> From<RangeFull> for Interval<T> {
    fn from(_value: RangeFull) -> Self { Self { start: None, end: None } }
}
impl<T> From<Range<T>> for Interval<T> {
    fn from(value: Range<T>) -> Self {
        Self {
            start: Some(value.start),
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeInclusive<T>> for Interval<T> {
    fn from(value: RangeInclusive<T>) -> Self {
        let (min, max) = value.into_inner();
        Self {
            start: Some(min),
            end: Some(max),
        }
    }
}
impl<T> From<RangeFrom<T>> for Interval<T> {
    fn from(value: RangeFrom<T>) -> Self {
        Self {
            start: Some(value.start),
            end: None,
        }
    }
}
impl<T> From<RangeTo<T>> for Interval<T> {
    fn from(value: RangeTo<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}
impl<T> From<RangeToInclusive<T>> for Interval<T> {
    fn from(value: RangeToInclusive<T>) -> Self {
        Self {
            start: None,
            end: Some(value.end),
        }
    }
}

// endregion From<> for range types

impl<T: PartialOrd> Interval<T> {
    pub fn contains(&self, item: &T) -> bool {
        match self {
            Self {
                start: Some(start),
                end: Some(end),
            } => start <= item && item <= end,
            Self {
                start: Some(start),
                end: None,
            } => start <= item,
            Self {
                start: None,
                end: Some(end),
            } => item <= end,
            Self { start: None, end: None } => true,
        }
    }

    /// Checks if the given range `min..max` overlaps with the bounds (`self`)
    pub fn range_overlaps(&self, min: &T, max: &T) -> bool {
        return match self {
            Self { start: None, end: None } => true,
            Self {
                start: Some(start),
                end: Some(end),
            } => {
                let low = if min > start { min } else { start };
                let high = if max < end { max } else { end };
                low <= high
            }
            Self {
                start: None,
                end: Some(end),
            } => {
                let high = if max < end { max } else { end };
                min <= high
            }
            Self {
                start: Some(start),
                end: None,
            } => {
                let low = if min > start { min } else { start };
                low <= max
            }
        };
    }
}

impl<T> Interval<T> {
    pub fn with_some_start(self, start: T) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }
    pub fn with_some_end(self, end: T) -> Self {
        Self {
            end: Some(end),
            ..self
        }
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        write!(f, "..")?;
        if let Some(end) = &self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Number;

    #[test]
    fn contains_respects_bounds() {
        let i = Interval::from(1.0..4.0);
        assert!(i.contains(&1.0));
        assert!(i.contains(&4.0));
        assert!(!i.contains(&0.999));
        assert!(!i.contains(&4.001));
        assert!(Interval::<Number>::FULL.contains(&-1e300));
    }

    #[test]
    fn half_open_intervals() {
        let from = Interval::from(2.0..);
        assert!(from.contains(&1e300));
        assert!(!from.contains(&1.0));

        let to = Interval::from(..2.0);
        assert!(to.contains(&-1e300));
        assert!(!to.contains(&3.0));
    }

    #[test]
    fn range_overlaps_cases() {
        let i = Interval::from(1.0..5.0);
        assert!(i.range_overlaps(&0.0, &2.0));
        assert!(i.range_overlaps(&4.0, &10.0));
        assert!(i.range_overlaps(&2.0, &3.0));
        assert!(!i.range_overlaps(&6.0, &10.0));
        assert!(!i.range_overlaps(&-3.0, &0.5));
        // A degenerate range still overlaps if it touches
        assert!(i.range_overlaps(&5.0, &5.0));
    }

    #[test]
    fn shrinking_helpers() {
        let i = Interval::<Number>::from(1.0..).with_some_end(3.0);
        assert!(i.contains(&2.0));
        assert!(!i.contains(&3.5));
    }
}
