use std::fmt::{self, Display, Formatter};

use itertools::{Itertools, MinMaxResult};
use ordered_float::OrderedFloat;

/// Closed interval `[min, max]` of projections onto an axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Smallest interval covering `values`; `None` when there are none.
    pub fn hull<I: IntoIterator<Item = f64>>(values: I) -> Option<Interval> {
        match values.into_iter().minmax_by_key(|v| OrderedFloat(*v)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(Interval { min: v, max: v }),
            MinMaxResult::MinMax(min, max) => Some(Interval { min, max }),
        }
    }

    /// Disjoint iff one ends strictly before the other starts; shared endpoints overlap.
    pub fn overlaps(&self, o: &Interval) -> bool {
        !(self.max < o.min || self.min > o.max)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull() {
        assert_eq!(Interval::hull(vec![]), None);
        assert_eq!(Interval::hull(vec![2.]), Some(Interval { min: 2., max: 2. }));
        assert_eq!(Interval::hull(vec![3., -1., 2.]), Some(Interval { min: -1., max: 3. }));
    }

    #[test]
    fn overlaps() {
        let a = Interval { min: 0., max: 1. };
        assert!(a.overlaps(&Interval { min: 1., max: 2. }));
        assert!(a.overlaps(&Interval { min: 0.25, max: 0.5 }));
        assert!(!a.overlaps(&Interval { min: 1.5, max: 2. }));
        assert!(!Interval { min: 1.5, max: 2. }.overlaps(&a));
    }
}
