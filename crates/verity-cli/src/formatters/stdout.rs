use anyhow::Result;
use std::fmt::Write;
use verity_core::Validator;

use crate::formatters::Reporter;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("Verity v{} - Validation Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn render_result(&self, plan: &str, validator: &Validator) -> String {
        let status = if validator.is_valid() { "PASSED" } else { "FAILED" };
        let mut out = String::new();
        let _ = writeln!(out, "\n{} ({} checks) - {}", plan, validator.len(), status);

        let max_len = validator
            .outcomes()
            .iter()
            .map(|o| o.rule().len())
            .max()
            .unwrap_or(0);

        for (i, outcome) in validator.outcomes().iter().enumerate() {
            let dots = ".".repeat(max_len - outcome.rule().len() + 10);
            if outcome.passed() {
                let _ = writeln!(out, "  #{:<3} {} {} ok", i + 1, outcome.rule(), dots);
            } else {
                let _ = writeln!(
                    out,
                    "  #{:<3} {} {} FAILED: {}",
                    i + 1,
                    outcome.rule(),
                    dots,
                    outcome.text()
                );
            }
        }

        let failed = validator.failed_count();
        let _ = writeln!(out, "\n===================================");
        let _ = write!(
            out,
            "Result: {} failed, {} passed",
            failed,
            validator.len() - failed
        );
        out
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_loading(&self, plan: &str) {
        println!("Loading plan: {}", plan);
    }

    fn on_result(&mut self, plan: &str, validator: &Validator) {
        println!("{}", self.render_result(plan, validator));
    }

    fn on_complete(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result() {
        let mut v = Validator::new();
        v.require("x");
        v.email("nope").message("email is invalid");

        let formatter = StdOutFormatter::new("0.1.0".to_string());
        let out = formatter.render_result("plan.toml", &v);

        assert!(out.contains("plan.toml (2 checks) - FAILED"));
        assert!(out.contains("FAILED: email is invalid"));
        assert!(out.ends_with("Result: 1 failed, 1 passed"));
    }

    #[test]
    fn test_render_result_passed() {
        let mut v = Validator::new();
        v.positive("42");
        let formatter = StdOutFormatter::new("0.1.0".to_string());
        let out = formatter.render_result("plan.toml", &v);
        assert!(out.contains("- PASSED"));
        assert!(out.contains("positive"));
    }
}
