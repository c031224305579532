use thiserror::Error;
use verity_core::RuleError;

#[derive(Error, Debug)]
pub enum CliError {
    // Check construction errors - these need structured handling
    #[error("Unknown rule '{rule_name}' in check #{index}")]
    UnknownRule { rule_name: String, index: usize },
    #[error("Rule '{rule_name}' in check #{index} expected field '{field}' to be {field_type}")]
    WrongRuleData {
        rule_name: String,
        index: usize,
        field: &'static str,
        field_type: &'static str,
    },
    #[error(
        "Rule '{rule_name}' in check #{index} mixes {left} and {right} values; use one kind throughout"
    )]
    MixedKinds {
        rule_name: String,
        index: usize,
        left: &'static str,
        right: &'static str,
    },
    // Errors from core
    #[error("Invalid rule")]
    RuleError(#[from] RuleError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("plan file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Plan file '{path}' contains no check")]
    EmptyPlan { path: String },
}
