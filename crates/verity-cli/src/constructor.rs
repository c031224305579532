use toml::Value;
use verity_core::{Pattern, Validator};

use crate::{
    errors::CliError,
    parser::{Check, Config},
};

/// Run every check of the plan, in file order, through a fresh validator.
pub fn build_validator(config: &Config) -> Result<Validator, CliError> {
    let mut validator = Validator::new();
    for (i, check) in config.check.iter().enumerate() {
        apply_check(&mut validator, i + 1, check)?;
    }
    Ok(validator)
}

/// A scalar read out of a plan file.
#[derive(Debug, Clone, Copy)]
enum Scalar<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
}

impl<'a> Scalar<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(Scalar::Int(*i)),
            Value::Float(f) => Some(Scalar::Float(*f)),
            Value::String(s) => Some(Scalar::Str(s)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Scalar::Int(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "string",
        }
    }
}

struct CheckContext<'a> {
    rule: &'a str,
    index: usize,
}

impl CheckContext<'_> {
    fn wrong(&self, field: &'static str, field_type: &'static str) -> CliError {
        CliError::WrongRuleData {
            rule_name: self.rule.to_string(),
            index: self.index,
            field,
            field_type,
        }
    }

    fn mixed(&self, left: &'static str, right: &'static str) -> CliError {
        CliError::MixedKinds {
            rule_name: self.rule.to_string(),
            index: self.index,
            left,
            right,
        }
    }

    fn string<'v>(
        &self,
        field: &'static str,
        value: Option<&'v Value>,
    ) -> Result<&'v str, CliError> {
        value
            .and_then(Value::as_str)
            .ok_or_else(|| self.wrong(field, "a string"))
    }

    fn boolean(&self, field: &'static str, value: Option<&Value>) -> Result<bool, CliError> {
        value
            .and_then(Value::as_bool)
            .ok_or_else(|| self.wrong(field, "a boolean"))
    }

    fn length(&self, field: &'static str, value: Option<usize>) -> Result<usize, CliError> {
        value.ok_or_else(|| self.wrong(field, "a non-negative integer"))
    }

    fn number<'v>(
        &self,
        field: &'static str,
        value: Option<&'v Value>,
    ) -> Result<Scalar<'v>, CliError> {
        match value.and_then(Scalar::from_value) {
            Some(Scalar::Str(_)) | None => Err(self.wrong(field, "an integer or a float")),
            Some(n) => Ok(n),
        }
    }

    fn scalar<'v>(
        &self,
        field: &'static str,
        value: Option<&'v Value>,
    ) -> Result<Scalar<'v>, CliError> {
        value
            .and_then(Scalar::from_value)
            .ok_or_else(|| self.wrong(field, "a string, an integer or a float"))
    }

    /// Read a `[low, high]` pair of numbers.
    fn bounds<'v>(
        &self,
        value: Option<&'v [Value]>,
    ) -> Result<(Scalar<'v>, Scalar<'v>), CliError> {
        match value {
            Some([low, high]) => Ok((
                self.number("bounds", Some(low))?,
                self.number("bounds", Some(high))?,
            )),
            _ => Err(self.wrong("bounds", "an array of two numbers")),
        }
    }

    /// Read every candidate as the same kind as the checked value.
    fn candidates<'v, T>(
        &self,
        kind: &'static str,
        candidates: &'v [Value],
        extract: impl Fn(&'v Value) -> Option<T>,
    ) -> Result<Vec<T>, CliError> {
        candidates
            .iter()
            .map(|c| extract(c).ok_or_else(|| self.mixed(kind, c.type_str())))
            .collect()
    }
}

pub fn apply_check(validator: &mut Validator, index: usize, check: &Check) -> Result<(), CliError> {
    let rule = check.rule.as_str();
    let ctx = CheckContext { rule, index };
    let value = check.value.as_ref();

    let outcome = match rule {
        "require" => validator.require(ctx.string("value", value)?),
        "size" => validator.size(
            ctx.string("value", value)?,
            ctx.length("min", check.min)?,
            ctx.length("max", check.max)?,
        ),
        "min_size" => {
            validator.min_size(ctx.string("value", value)?, ctx.length("min", check.min)?)
        }
        "max_size" => {
            validator.max_size(ctx.string("value", value)?, ctx.length("max", check.max)?)
        }
        "min" | "max" => {
            let lower = rule == "min";
            let value = ctx.number("value", value)?;
            let bound = ctx.number("bound", check.bound.as_ref())?;
            match (value, bound) {
                (Scalar::Int(v), Scalar::Int(b)) if lower => validator.min(v, b),
                (Scalar::Int(v), Scalar::Int(b)) => validator.max(v, b),
                (Scalar::Float(v), Scalar::Float(b)) if lower => validator.min(v, b),
                (Scalar::Float(v), Scalar::Float(b)) => validator.max(v, b),
                (v, b) => return Err(ctx.mixed(v.kind(), b.kind())),
            }
        }
        "between" => {
            let value = ctx.number("value", value)?;
            let (low, high) = ctx.bounds(check.bounds.as_deref())?;
            match (value, low, high) {
                (Scalar::Int(v), Scalar::Int(l), Scalar::Int(h)) => validator.between(v, l, h),
                (Scalar::Float(v), Scalar::Float(l), Scalar::Float(h)) => {
                    validator.between(v, l, h)
                }
                (v, l, h) if v.kind() == l.kind() => return Err(ctx.mixed(v.kind(), h.kind())),
                (v, l, _) => return Err(ctx.mixed(v.kind(), l.kind())),
            }
        }
        "range" => {
            let candidates = check
                .candidates
                .as_deref()
                .ok_or_else(|| ctx.wrong("candidates", "an array"))?;
            match ctx.scalar("value", value)? {
                Scalar::Int(v) => {
                    let members = ctx.candidates("integer", candidates, Value::as_integer)?;
                    validator.range(v, &members)
                }
                Scalar::Float(v) => {
                    let members = ctx.candidates("float", candidates, Value::as_float)?;
                    validator.range(v, &members)
                }
                Scalar::Str(v) => {
                    let members = ctx.candidates("string", candidates, Value::as_str)?;
                    validator.range(v, &members)
                }
            }
        }
        "matches" => {
            let pattern = check
                .pattern
                .as_deref()
                .ok_or_else(|| ctx.wrong("pattern", "a string"))?;
            validator.matches(pattern, ctx.string("value", value)?)?
        }
        "check" => validator.check(ctx.boolean("value", value)?),
        name => match name.parse::<Pattern>() {
            Ok(pattern) => validator.pattern(pattern, ctx.string("value", value)?),
            Err(_) => {
                return Err(CliError::UnknownRule {
                    rule_name: name.to_string(),
                    index,
                });
            }
        },
    };

    if let Some(message) = &check.message {
        outcome.message(message.as_str());
    }
    Ok(())
}
