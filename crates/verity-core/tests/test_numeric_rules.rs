use verity_core::Validator;
use verity_core::rules::{NumericRule, Range};

#[test]
fn test_min_max_per_width() {
    let mut v = Validator::new();
    assert!(v.min(5i8, 5).passed());
    assert!(!v.min(-128i8, -127).passed());
    assert!(v.max(i16::MAX, i16::MAX).passed());
    assert!(v.min(0i32, i32::MIN).passed());
    assert!(!v.max(i64::MAX, i64::MAX - 1).passed());
    assert!(v.max(u64::MAX, u64::MAX).passed());
    assert!(v.min(1.5f32, 1.5).passed());
    assert!(!v.max(1.000_001f64, 1.0).passed());
    assert_eq!(v.len(), 8);
}

#[test]
fn test_large_i64_not_rounded() {
    // Both values map to the same f64, so a float comparison would pass.
    let mut v = Validator::new();
    assert!(!v.min(9_007_199_254_740_992i64, 9_007_199_254_740_993).passed());
}

#[test]
fn test_nan_is_rejected() {
    let mut v = Validator::new();
    assert!(!v.min(f64::NAN, 0.0).passed());
    assert!(!v.max(f32::NAN, 0.0).passed());
}

#[test]
fn test_range_rule_between() {
    let rule = Range::new(Some(-5i64), Some(5i64));
    let values = [-6, -5, 0, 5, 6];
    let passed: Vec<bool> = values.iter().map(|&x| rule.validate(x)).collect();
    assert_eq!(passed, vec![false, true, true, true, false]);
}

#[test]
fn test_range_membership() {
    let mut v = Validator::new();
    assert!(v.range(3, &[1, 2, 3]).passed());
    assert!(!v.range(4, &[1, 2, 3]).passed());
    assert!(v.range(0.25, &[0.5, 0.25]).passed());
    assert!(!v.range(0.3, &[0.1 + 0.2]).passed());
    assert!(v.range("b", &["a", "b"]).passed());
}

#[test]
fn test_range_empty_candidates_always_fail() {
    let mut v = Validator::new();
    assert!(!v.range(0, &[]).passed());
    assert!(!v.range("", &[]).passed());
    assert!(!v.range(0.0, &[]).passed());
}
