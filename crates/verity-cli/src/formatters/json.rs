use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Error;
use verity_core::Validator;

use crate::formatters::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    plans: Vec<PlanFormatter>,
}

#[derive(Serialize, Deserialize)]
struct PlanFormatter {
    name: String,
    valid: bool,
    first_error: Option<String>,
    checks: Vec<CheckFormatter>,
}

#[derive(Serialize, Deserialize)]
struct CheckFormatter {
    rule: String,
    passed: bool,
    message: String,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            plans: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self, _plan: &str) {}

    fn on_result(&mut self, plan: &str, validator: &Validator) {
        let checks = validator
            .outcomes()
            .iter()
            .map(|o| CheckFormatter {
                rule: o.rule().to_string(),
                passed: o.passed(),
                message: o.text().to_string(),
            })
            .collect();
        self.plans.push(PlanFormatter {
            name: plan.to_string(),
            valid: validator.is_valid(),
            first_error: validator.first_error().map(str::to_string),
            checks,
        });
    }

    fn on_complete(&self) -> Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_report() {
        let mut v = Validator::new();
        v.require("");
        v.range(3, &[1, 2, 3]);

        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_result("plan.toml", &v);
        let json: Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();

        assert_eq!(json["version"], "0.1.0");
        let plan = &json["plans"][0];
        assert_eq!(plan["name"], "plan.toml");
        assert_eq!(plan["valid"], false);
        assert_eq!(plan["first_error"], verity_core::DEFAULT_MESSAGE);
        assert_eq!(plan["checks"][0]["rule"], "require");
        assert_eq!(plan["checks"][1]["passed"], true);
    }

    #[test]
    fn test_json_report_valid_has_null_error() {
        let v = Validator::new();
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_result("empty", &v);
        let json: Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(json["plans"][0]["valid"], true);
        assert!(json["plans"][0]["first_error"].is_null());
    }
}
