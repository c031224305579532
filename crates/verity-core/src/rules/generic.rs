use crate::rules::string::StringRule;

/// Passes for any non-empty string.
pub struct NotEmpty;

impl StringRule for NotEmpty {
    fn name(&self) -> &'static str {
        "require"
    }

    fn validate(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Checks that a value is one of a fixed set of members.
///
/// Membership is a linear scan using `==`, so floats follow IEEE equality
/// (`NaN` is never a member). An empty member list rejects everything.
pub struct IsInCheck<'a, T> {
    members: &'a [T],
}

impl<'a, T: PartialEq> IsInCheck<'a, T> {
    pub fn new(members: &'a [T]) -> Self {
        Self { members }
    }

    pub fn name(&self) -> &'static str {
        "range"
    }

    pub fn validate(&self, value: &T) -> bool {
        self.members.iter().any(|m| m == value)
    }
}
