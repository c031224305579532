//! The validation accumulator.
//!
//! A `Validator` records one [`Outcome`] per rule call, in call order, and
//! reduces them on demand. Rule methods hand back the outcome they just
//! recorded so the caller can attach a message:
//!
//! ```
//! use verity_core::Validator;
//!
//! let mut v = Validator::new();
//! v.require("alice").message("name is required");
//! v.email("alice@@example.com").message("email is invalid");
//! v.min(17, 18).message("must be an adult");
//!
//! assert_eq!(v.messages(), vec!["email is invalid", "must be an adult"]);
//! assert_eq!(v.validate(), (false, "email is invalid".to_string()));
//! ```
use num_traits::Num;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

use crate::{
    errors::RuleError,
    outcome::Outcome,
    rules::{
        IsInCheck, NotEmpty, NumericRule, Pattern, Range, RegexMatch, StringLengthCheck,
        StringRule,
    },
};

#[derive(Debug, Default, Clone)]
pub struct Validator {
    outcomes: Vec<Outcome>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    /// Record a pre-computed result.
    pub fn check(&mut self, passed: bool) -> &mut Outcome {
        self.record("check", passed)
    }

    /// Passes when `value` is not empty.
    pub fn require(&mut self, value: &str) -> &mut Outcome {
        self.apply(&NotEmpty, value)
    }

    /// Passes when `min <= value.len() <= max`. Lengths are in bytes.
    pub fn size(&mut self, value: &str, min: usize, max: usize) -> &mut Outcome {
        self.apply(&StringLengthCheck::new(Some(min), Some(max)), value)
    }

    pub fn min_size(&mut self, value: &str, min: usize) -> &mut Outcome {
        self.apply(&StringLengthCheck::new(Some(min), None), value)
    }

    pub fn max_size(&mut self, value: &str, max: usize) -> &mut Outcome {
        self.apply(&StringLengthCheck::new(None, Some(max)), value)
    }

    /// Passes when `value >= bound`.
    pub fn min<N>(&mut self, value: N, bound: N) -> &mut Outcome
    where
        N: Num + PartialOrd + Copy + Debug,
    {
        let rule = Range::at_least(bound);
        let passed = rule.validate(value);
        self.record(NumericRule::<N>::name(&rule), passed)
    }

    /// Passes when `value <= bound`.
    pub fn max<N>(&mut self, value: N, bound: N) -> &mut Outcome
    where
        N: Num + PartialOrd + Copy + Debug,
    {
        let rule = Range::at_most(bound);
        let passed = rule.validate(value);
        self.record(NumericRule::<N>::name(&rule), passed)
    }

    /// Passes when `min <= value <= max`.
    pub fn between<N>(&mut self, value: N, min: N, max: N) -> &mut Outcome
    where
        N: Num + PartialOrd + Copy + Debug,
    {
        let rule = Range::new(Some(min), Some(max));
        let passed = rule.validate(value);
        self.record(NumericRule::<N>::name(&rule), passed)
    }

    /// Passes when `value` equals one of `candidates`. Always fails when
    /// `candidates` is empty.
    pub fn range<T: PartialEq>(&mut self, value: T, candidates: &[T]) -> &mut Outcome {
        let rule = IsInCheck::new(candidates);
        let passed = rule.validate(&value);
        self.record(rule.name(), passed)
    }

    /// Passes when the whole of `value` matches the built-in `pattern`.
    pub fn pattern(&mut self, pattern: Pattern, value: &str) -> &mut Outcome {
        self.apply(&pattern, value)
    }

    /// Passes when the whole of `value` matches `pattern`.
    ///
    /// An invalid `pattern` is returned as an error and nothing is recorded.
    pub fn matches(&mut self, pattern: &str, value: &str) -> Result<&mut Outcome, RuleError> {
        let rule = RegexMatch::new(pattern).inspect_err(|e| warn!("{e}"))?;
        Ok(self.apply(&rule, value))
    }

    pub fn email(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Email, value)
    }

    pub fn mobile(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Mobile, value)
    }

    pub fn zip_code(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::ZipCode, value)
    }

    pub fn ipv4(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Ipv4, value)
    }

    pub fn domain(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Domain, value)
    }

    pub fn date(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Date, value)
    }

    pub fn datetime(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Datetime, value)
    }

    pub fn letter(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Letter, value)
    }

    pub fn alpha(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Alpha, value)
    }

    pub fn alpha_dash(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::AlphaDash, value)
    }

    pub fn number(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Number, value)
    }

    pub fn negative(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Negative, value)
    }

    pub fn positive(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Positive, value)
    }

    pub fn float(&mut self, value: &str) -> &mut Outcome {
        self.pattern(Pattern::Float, value)
    }

    /// Returns `(true, "")` when every check passed, otherwise `false` and
    /// the message of the first failed check.
    pub fn validate(&self) -> (bool, String) {
        let first = self.first_error();
        debug!(
            checks = self.outcomes.len(),
            failed = self.failed_count(),
            "validate"
        );
        match first {
            Some(message) => (false, message.to_string()),
            None => (true, String::new()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    /// Messages of the failed checks, in the order they were recorded.
    pub fn messages(&self) -> Vec<&str> {
        self.failures().map(Outcome::text).collect()
    }

    pub fn first_error(&self) -> Option<&str> {
        self.failures().next().map(Outcome::text)
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    fn apply<R: StringRule + ?Sized>(&mut self, rule: &R, value: &str) -> &mut Outcome {
        let passed = rule.validate(value);
        self.record(rule.name(), passed)
    }

    fn record(&mut self, rule: &'static str, passed: bool) -> &mut Outcome {
        trace!(rule, passed, index = self.outcomes.len(), "recorded outcome");
        let index = self.outcomes.len();
        self.outcomes.push(Outcome::for_rule(rule, passed));
        &mut self.outcomes[index]
    }
}
