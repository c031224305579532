/// Message carried by every outcome until the caller sets its own.
pub const DEFAULT_MESSAGE: &str = "Please set the prompt message!";

/// The recorded result of a single check.
///
/// The pass state is fixed when the outcome is created. The message is the
/// only mutable part and is what the reductions on [`Validator`] report for
/// failed checks.
///
/// [`Validator`]: crate::Validator
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    rule: &'static str,
    passed: bool,
    message: String,
}

impl Outcome {
    pub fn new(passed: bool) -> Self {
        Self::for_rule("check", passed)
    }

    pub(crate) fn for_rule(rule: &'static str, passed: bool) -> Self {
        Self {
            rule,
            passed,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Replace the message. Empty strings are kept as they are.
    pub fn message(&mut self, text: impl Into<String>) -> &mut Self {
        self.message = text.into();
        self
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Name of the rule that produced this outcome.
    pub fn rule(&self) -> &'static str {
        self.rule
    }
}
