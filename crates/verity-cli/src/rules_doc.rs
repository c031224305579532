use verity_core::{DEFAULT_MESSAGE, Pattern};

/// Print the documentation of all available rules
pub fn print_rules_documentation() {
    println!("{}", rules_documentation());
}

fn rules_documentation() -> String {
    format!(
        r#"
VERITY VALIDATION RULES
{}
{}
{}
"#,
        plan_section(),
        value_rules_section(),
        pattern_rules_section()
    )
}

fn plan_section() -> String {
    format!(
        r#"
PLAN FILE
  Checks run in file order. Each `[[check]]` names a `rule`, its inputs and
  an optional `message`. Failed checks without a message report:
    "{DEFAULT_MESSAGE}"

  [[check]]
  rule = "email"
  value = "a-b@domain.com"
  message = "email is invalid"
"#
    )
}

fn value_rules_section() -> String {
    r#"
VALUE RULES
  require     value (string)                     value is not empty
  size        value (string), min, max           min <= byte length <= max
  min_size    value (string), min                byte length >= min
  max_size    value (string), max                byte length <= max
  min         value, bound (both int or float)   value >= bound
  max         value, bound (both int or float)   value <= bound
  between     value, bounds = [low, high]        low <= value <= high
  range       value, candidates (same kind)      value equals a candidate
  matches     value (string), pattern            whole value matches pattern
  check       value (boolean)                    records value as is
"#
    .to_string()
}

fn pattern_rules_section() -> String {
    let width = Pattern::ALL
        .iter()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0);
    let mut s = String::from("\nPATTERN RULES (value: string)\n");
    for p in Pattern::ALL {
        s.push_str(&format!("  {:<width$}  {}\n", p.name(), p.source()));
    }
    s
}
