use num_traits::Num;
use std::fmt::Debug;

pub trait NumericRule<N> {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Returns whether `value` satisfies the rule.
    fn validate(&self, value: N) -> bool;
}

/// Inclusive bounds over a single numeric type.
///
/// Value and bounds share the type `N`, so an `i8` is compared as an `i8` and
/// an `f32` as an `f32`.
pub struct Range<N: Num + PartialOrd + Copy + Debug> {
    min: Option<N>,
    max: Option<N>,
}

impl<N> Range<N>
where
    N: Num + PartialOrd + Copy + Debug,
{
    pub fn new(min: Option<N>, max: Option<N>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: N) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: N) -> Self {
        Self::new(None, Some(max))
    }
}

impl<N> NumericRule<N> for Range<N>
where
    N: Num + PartialOrd + Copy + Debug,
{
    fn name(&self) -> &'static str {
        match (self.min, self.max) {
            (Some(_), None) => "min",
            (None, Some(_)) => "max",
            _ => "between",
        }
    }

    // Written as `>=` / `<=` rather than negated `<` / `>` so that NaN fails.
    fn validate(&self, value: N) -> bool {
        let above = self.min.is_none_or(|min| value >= min);
        let below = self.max.is_none_or(|max| value <= max);
        above && below
    }
}
