use verity_core::{DEFAULT_MESSAGE, Outcome, RuleError, Validator};

#[test]
fn test_validator_signup_form() {
    let mut v = Validator::new();
    v.require("alice").message("username is required");
    v.alpha_dash("alice_01").message("username has invalid characters");
    v.size("hunter2", 8, 64).message("password must be 8 to 64 bytes");
    v.email("alice@example.com").message("email is invalid");
    v.min(16u8, 18).message("must be 18 or older");
    v.range("fr", &["en", "de"]).message("unsupported language");

    assert!(!v.is_valid());
    assert_eq!(
        v.messages(),
        vec![
            "password must be 8 to 64 bytes",
            "must be 18 or older",
            "unsupported language"
        ]
    );
    assert_eq!(
        v.validate(),
        (false, "password must be 8 to 64 bytes".to_string())
    );
}

#[test]
fn test_validator_all_passing() {
    let mut v = Validator::new();
    v.require("x").message("never shown");
    v.mobile("13800001111");
    v.max(2.5f64, 3.0);

    assert!(v.is_valid());
    assert_eq!(v.first_error(), None);
    assert_eq!(v.validate(), (true, String::new()));
}

#[test]
fn test_default_message_reported() {
    let mut v = Validator::new();
    v.require("");
    v.min(5, 10);
    assert_eq!(v.messages(), vec![DEFAULT_MESSAGE; 2]);
    assert_eq!(v.validate(), (false, DEFAULT_MESSAGE.to_string()));
}

#[test]
fn test_size_bounds() {
    let mut v = Validator::new();
    assert!(v.size("abc", 2, 5).passed());
    assert!(!v.size("abc", 4, 5).passed());
    assert!(v.min_size("abc", 3).passed());
    assert!(!v.max_size("abc", 2).passed());
}

#[test]
fn test_raw_pattern_full_match() {
    let mut v = Validator::new();
    assert!(v.matches("[a-z]+", "abc").unwrap().passed());
    assert!(!v.matches("[a-z]+", "abc1").unwrap().passed());
    v.matches(r"\d+", "x").unwrap().message("digits only");
    assert_eq!(v.messages(), vec![DEFAULT_MESSAGE, "digits only"]);
}

#[test]
fn test_raw_pattern_invalid_is_error() {
    let mut v = Validator::new();
    let res = v.matches("[", "anything");
    assert!(matches!(res, Err(RuleError::InvalidPattern { .. })));
    assert!(v.is_empty());
}

#[test]
fn test_outcomes_keep_order_and_rule() {
    let mut v = Validator::new();
    v.check(false).message("a");
    v.positive("1").message("b");
    v.check(false).message("c");

    let outcomes: Vec<(&str, bool, &str)> = v
        .outcomes()
        .iter()
        .map(|o| (o.rule(), o.passed(), o.text()))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("check", false, "a"),
            ("positive", true, "b"),
            ("check", false, "c")
        ]
    );
}

#[test]
fn test_message_overwritten_many_times() {
    let mut v = Validator::new();
    let outcome: &mut Outcome = v.check(false);
    outcome.message("one");
    outcome.message("two");
    outcome.message("");
    assert_eq!(v.messages(), vec![""]);
    assert_eq!(v.validate(), (false, String::new()));
}
