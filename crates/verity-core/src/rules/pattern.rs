use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::{fmt, str::FromStr};

use crate::{errors::RuleError, rules::string::StringRule};

/// The built-in pattern catalog.
///
/// Sources are matched against the whole input. Character classes are ASCII
/// only: `\d` is `[0-9]` and `[[:alpha:]]` is `[A-Za-z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Email,
    /// 11 digit mobile numbers: `1`, then one of `3578`, then 9 digits.
    Mobile,
    /// 6 digit postal codes without a leading zero.
    ZipCode,
    Ipv4,
    /// e.g. `domain.com`, `domain.com.cn`, `domain-test.com`.
    Domain,
    /// `YYYY-MM-DD` or `YYYY/MM/DD`. Days are not checked against the month.
    Date,
    /// A date, 1 to 3 whitespace characters, then `HH:MM:SS`.
    Datetime,
    Letter,
    /// Letters and digits.
    Alpha,
    /// Letters and digits in runs joined by single underscores.
    AlphaDash,
    Number,
    Negative,
    Positive,
    Float,
}

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    Pattern::ALL
        .iter()
        .map(|p| {
            RegexBuilder::new(p.source())
                .unicode(false)
                .build()
                .unwrap_or_else(|e| panic!("built-in pattern '{}' is invalid: {}", p.name(), e))
        })
        .collect()
});

impl Pattern {
    /// Every pattern, in declaration order.
    pub const ALL: [Pattern; 14] = [
        Pattern::Email,
        Pattern::Mobile,
        Pattern::ZipCode,
        Pattern::Ipv4,
        Pattern::Domain,
        Pattern::Date,
        Pattern::Datetime,
        Pattern::Letter,
        Pattern::Alpha,
        Pattern::AlphaDash,
        Pattern::Number,
        Pattern::Negative,
        Pattern::Positive,
        Pattern::Float,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Email => "email",
            Pattern::Mobile => "mobile",
            Pattern::ZipCode => "zip_code",
            Pattern::Ipv4 => "ipv4",
            Pattern::Domain => "domain",
            Pattern::Date => "date",
            Pattern::Datetime => "datetime",
            Pattern::Letter => "letter",
            Pattern::Alpha => "alpha",
            Pattern::AlphaDash => "alpha_dash",
            Pattern::Number => "number",
            Pattern::Negative => "negative",
            Pattern::Positive => "positive",
            Pattern::Float => "float",
        }
    }

    /// The regular expression behind this pattern.
    pub fn source(&self) -> &'static str {
        match self {
            Pattern::Email => r"^[[:alnum:]]+(-[[:alnum:]]+)*@[[:alnum:]]+(\.[[:alpha:]]+){1,2}$",
            Pattern::Mobile => r"^1[3578]\d{9}$",
            Pattern::ZipCode => r"^[1-9]\d{5}$",
            Pattern::Ipv4 => {
                r"^(\d{1,2}|1\d\d|2[0-4]\d|25[0-5])\.(\d{1,2}|1\d\d|2[0-4]\d|25[0-5])\.(\d{1,2}|1\d\d|2[0-4]\d|25[0-5])\.(\d{1,2}|1\d\d|2[0-4]\d|25[0-5])$"
            }
            Pattern::Domain => r"^[[:alnum:]]+(-[[:alnum:]]+)*(\.[[:alpha:]]{2,3}){1,2}$",
            Pattern::Date => r"^[12]\d{3}[-/](0[1-9]|1[0-2])[-/](0[1-9]|[1-2][0-9]|30|31)$",
            Pattern::Datetime => {
                r"^[12]\d{3}[-/](0[1-9]|1[0-2])[-/](0[1-9]|[1-2][0-9]|30|31)([\t\n\f\r ]{1,3}(23|22|21|20|[0-1][0-9]):[0-5][0-9]:[0-5][0-9])$"
            }
            Pattern::Letter => r"^[[:alpha:]]+$",
            Pattern::Alpha => r"^[[:alnum:]]+$",
            Pattern::AlphaDash => r"^[[:alnum:]]+(_[[:alnum:]]+)*$",
            Pattern::Number => r"^-?\d+$",
            Pattern::Negative => r"^-[1-9]\d*$",
            Pattern::Positive => r"^[1-9]\d*$",
            Pattern::Float => r"^-?\d+\.\d+$",
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        COMPILED[*self as usize].is_match(value)
    }
}

impl StringRule for Pattern {
    fn name(&self) -> &'static str {
        Pattern::name(self)
    }

    fn validate(&self, value: &str) -> bool {
        self.is_match(value)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RuleError::UnknownPattern(s.to_string()))
    }
}
