use regex::Regex;

use crate::errors::RuleError;

/// A trait for defining validation rules on a single string.
pub trait StringRule {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;
    /// Returns whether `value` satisfies the rule.
    fn validate(&self, value: &str) -> bool;
}

/// A rule to check the byte length of a string.
pub struct StringLengthCheck {
    min: Option<usize>,
    max: Option<usize>,
}

impl StringLengthCheck {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl StringRule for StringLengthCheck {
    fn name(&self) -> &'static str {
        match (self.min, self.max) {
            (Some(_), None) => "min_size",
            (None, Some(_)) => "max_size",
            _ => "size",
        }
    }

    fn validate(&self, value: &str) -> bool {
        let len = value.len();
        if let Some(min) = self.min
            && len < min
        {
            return false;
        }
        if let Some(max) = self.max
            && len > max
        {
            return false;
        }
        true
    }
}

/// A rule to check that a whole string matches a caller-supplied pattern.
pub struct RegexMatch {
    regex: Regex,
}

impl RegexMatch {
    /// Compile `pattern`, anchored at both ends.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex =
            Regex::new(&format!("^(?:{pattern})$")).map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }
}

impl StringRule for RegexMatch {
    fn name(&self) -> &'static str {
        "matches"
    }

    fn validate(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_check() {
        let rule = StringLengthCheck::new(Some(3), Some(5));
        assert!(!rule.validate("a"));
        assert!(rule.validate("abc"));
        assert!(rule.validate("abcde"));
        assert!(!rule.validate("abcdef"));
        assert!(!rule.validate(""));
        assert_eq!(rule.name(), "size");
    }

    #[test]
    fn test_string_length_check_min_only() {
        let rule = StringLengthCheck::new(Some(3), None);
        assert!(!rule.validate("ab"));
        assert!(rule.validate("abcdefghij"));
        assert_eq!(rule.name(), "min_size");
    }

    #[test]
    fn test_string_length_check_max_only() {
        let rule = StringLengthCheck::new(None, Some(3));
        assert!(rule.validate(""));
        assert!(!rule.validate("abcd"));
        assert_eq!(rule.name(), "max_size");
    }

    #[test]
    fn test_string_length_counts_bytes() {
        // "é" is two bytes in UTF-8
        let rule = StringLengthCheck::new(None, Some(1));
        assert!(!rule.validate("é"));
    }

    #[test]
    fn test_regex_match() {
        let rule = RegexMatch::new(r"\d{3}").unwrap();
        assert!(rule.validate("123"));
        assert!(!rule.validate("abc"));
        assert!(!rule.validate("12"));
        assert!(!rule.validate("1234"));
    }

    #[test]
    fn test_regex_match_anchors_alternation() {
        // Without the group, `$` would only bind to the last branch.
        let rule = RegexMatch::new("cat|dog").unwrap();
        assert!(rule.validate("dog"));
        assert!(!rule.validate("cats"));
        assert!(!rule.validate("hotdog"));
    }

    #[test]
    fn test_regex_match_invalid_regex() {
        let err = RegexMatch::new("[").err().unwrap();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "["));
        assert!(err.to_string().starts_with("Invalid pattern '['"));
    }
}
