//! Behaviour of the soft path: record, defer, drain, raise once.

mod common;

use serde_json::json;
use softcheck::{Check, SoftAssertions, Value};
use test_case::test_case;

type CheckFn = fn(&mut SoftAssertions);

#[test_case(|sa: &mut SoftAssertions| sa.equals(vec![1, 2, 3], vec![1, 2, 3], "arrays") ; "equals arrays")]
#[test_case(|sa: &mut SoftAssertions| sa.equals(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}), "objects") ; "equals objects")]
#[test_case(|sa: &mut SoftAssertions| sa.equals(f64::NAN, f64::NAN, "nan") ; "equals nan")]
#[test_case(|sa: &mut SoftAssertions| sa.equals(Value::Null, Value::Null, "null") ; "equals null")]
#[test_case(|sa: &mut SoftAssertions| sa.not_equal(1, 2, "different") ; "not equal")]
#[test_case(|sa: &mut SoftAssertions| sa.includes("hello world", "world", "substring") ; "includes substring")]
#[test_case(|sa: &mut SoftAssertions| sa.includes(vec![1, 2, 3], 2, "member") ; "includes member")]
#[test_case(|sa: &mut SoftAssertions| sa.includes(json!({"a": 1}), "a", "key") ; "includes key")]
#[test_case(|sa: &mut SoftAssertions| sa.is_true(true, "true") ; "is true")]
#[test_case(|sa: &mut SoftAssertions| sa.is_false(false, "false") ; "is false")]
#[test_case(|sa: &mut SoftAssertions| sa.greater_than(2, 1, "gt") ; "greater than")]
#[test_case(|sa: &mut SoftAssertions| sa.is_less_than(1.5, 2, "lt") ; "less than")]
#[test_case(|sa: &mut SoftAssertions| sa.not_null(0, "zero") ; "not null")]
#[test_case(|sa: &mut SoftAssertions| sa.is_null(None::<i32>, "none") ; "is null")]
#[test_case(|sa: &mut SoftAssertions| sa.is_defined(Value::Null, "null is defined") ; "is defined")]
#[test_case(|sa: &mut SoftAssertions| sa.is_undefined(Value::Absent, "absent") ; "is undefined")]
#[test_case(|sa: &mut SoftAssertions| sa.is_number(42, "answer") ; "is number")]
#[test_case(|sa: &mut SoftAssertions| sa.is_string("", "empty string") ; "is string")]
fn passing_check_does_not_raise(check: CheckFn) {
    common::init_tracing();
    let mut sa = SoftAssertions::new();
    check(&mut sa);
    assert_eq!(sa.pending_count(), 0);
    assert!(sa.assert_all().is_ok());
}

#[test_case(|sa: &mut SoftAssertions| sa.equals(vec![1, 2, 3], vec![1, 2, 4], "arr-mismatch"), "arr-mismatch", "[1, 2, 4]", "[1, 2, 3]" ; "equals arrays")]
#[test_case(|sa: &mut SoftAssertions| sa.equals(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 3}), "obj-mismatch"), "obj-mismatch", r#"{"a": 1, "b": 3}"#, r#"{"a": 1, "b": 2}"# ; "equals objects")]
#[test_case(|sa: &mut SoftAssertions| sa.not_equal(vec![1], vec![1], "same-list"), "same-list", "anything but [1]", "[1]" ; "not equal")]
#[test_case(|sa: &mut SoftAssertions| sa.includes("hello", "bye", "greeting"), "greeting", r#"to include "bye""#, r#""hello""# ; "includes substring")]
#[test_case(|sa: &mut SoftAssertions| sa.includes(json!({"a": 1}), "z", "keys"), "keys", r#"to have key "z""#, r#"{"a": 1}"# ; "includes key")]
#[test_case(|sa: &mut SoftAssertions| sa.is_true(1, "truthy-one"), "truthy-one", "true", "1 (number)" ; "is true rejects truthy")]
#[test_case(|sa: &mut SoftAssertions| sa.is_false(0, "falsy-zero"), "falsy-zero", "false", "0 (number)" ; "is false rejects falsy")]
#[test_case(|sa: &mut SoftAssertions| sa.greater_than(1, 1, "equal-not-greater"), "equal-not-greater", "> 1", "1 (number)" ; "greater than")]
#[test_case(|sa: &mut SoftAssertions| sa.is_less_than(5, 2, "too-big"), "too-big", "< 2", "5 (number)" ; "less than")]
#[test_case(|sa: &mut SoftAssertions| sa.not_null(Value::Null, "must-exist"), "must-exist", "not null", "null (null)" ; "not null")]
#[test_case(|sa: &mut SoftAssertions| sa.is_null(0, "zero-not-null"), "zero-not-null", "null", "0 (number)" ; "is null")]
#[test_case(|sa: &mut SoftAssertions| sa.is_defined(Value::Absent, "missing"), "missing", "a defined value", "undefined (undefined)" ; "is defined")]
#[test_case(|sa: &mut SoftAssertions| sa.is_undefined(Value::Null, "null-defined"), "null-defined", "undefined", "null (null)" ; "is undefined")]
#[test_case(|sa: &mut SoftAssertions| sa.is_number(f64::NAN, "nan-count"), "nan-count", "a number", "NaN (number)" ; "is number rejects nan")]
#[test_case(|sa: &mut SoftAssertions| sa.is_number("42", "numeric-text"), "numeric-text", "a number", r#""42" (string)"# ; "is number rejects text")]
#[test_case(|sa: &mut SoftAssertions| sa.is_string(123, "not-text"), "not-text", "a string", "123 (number)" ; "is string")]
fn failing_check_raises_once(check: CheckFn, description: &str, expected: &str, actual: &str) {
    common::init_tracing();
    let mut sa = SoftAssertions::new();
    check(&mut sa);
    assert_eq!(sa.pending_count(), 1);

    let err = sa.assert_all().unwrap_err();
    assert_eq!(err.count, 1);
    assert!(err.report.contains(description), "{}", err.report);
    assert!(err.report.contains(expected), "{}", err.report);
    assert!(err.report.contains(actual), "{}", err.report);
    assert!(err.report.contains("❌ [Assertion 1]: \n"), "{}", err.report);
    assert!(!err.report.contains("[Assertion 2]"), "{}", err.report);
}

#[test]
fn test_soft_checks_never_raise_without_assert_all() {
    let mut sa = SoftAssertions::new();
    sa.equals(1, 2, "a");
    sa.is_true(false, "b");
    sa.is_string(1, "c");
    // Dropping the accumulator with pending failures surfaces nothing.
    assert_eq!(sa.pending_count(), 3);
    drop(sa);
}

#[test]
fn test_report_follows_check_order() {
    let mut sa = SoftAssertions::new();
    sa.is_true(true, "a");
    sa.equals("x", "y", "b");
    sa.is_false(true, "c");

    let err = sa.assert_all().unwrap_err();
    assert_eq!(err.count, 2);

    let first = err.report.find("❌ [Assertion 1]: \n[equals] b").unwrap();
    let second = err.report.find("❌ [Assertion 2]: \n[is_false] c").unwrap();
    assert!(first < second);
    assert!(!err.report.contains("[is_true]"));
    assert!(!err.report.contains("[Assertion 3]"));
}

#[test]
fn test_three_failures_numbered_in_order() {
    let mut sa = SoftAssertions::new();
    sa.is_true(false, "a");
    sa.equals("x", "y", "b");
    sa.is_false(true, "c");

    let err = sa.assert_all().unwrap_err();
    let expected = "Soft assertion failures:\n\n\
        ❌ [Assertion 1]: \n[is_true] a\n  expected: true\n  actual:   false (boolean)\n\n\
        ❌ [Assertion 2]: \n[equals] b\n  expected: \"y\"\n  actual:   \"x\"\n\n\
        ❌ [Assertion 3]: \n[is_false] c\n  expected: false\n  actual:   true (boolean)\n";
    assert_eq!(err.report, expected);
    assert_eq!(err.to_string(), expected);
}

#[test]
fn test_drain_is_idempotent() {
    let mut sa = SoftAssertions::new();
    sa.greater_than(1, 2, "count");

    assert!(sa.assert_all().is_err());
    assert_eq!(sa.pending_count(), 0);
    assert!(sa.assert_all().is_ok());
    assert!(sa.assert_all().is_ok());
}

#[test]
fn test_drain_on_empty_list_is_silent() {
    let mut sa = SoftAssertions::new();
    assert!(sa.assert_all().is_ok());
    assert_eq!(sa.pending_count(), 0);
}

#[test]
fn test_accumulator_is_reusable_after_drain() {
    let mut sa = SoftAssertions::new();
    sa.is_null(1, "first session");
    assert!(sa.assert_all().is_err());

    sa.is_null(2, "second session");
    let err = sa.assert_all().unwrap_err();
    assert_eq!(err.count, 1);
    assert!(err.report.contains("second session"));
    assert!(!err.report.contains("first session"));
}

#[test]
fn test_failure_records_keep_structured_fields() {
    let mut sa = SoftAssertions::new();
    sa.includes(vec!["admin", "editor"], "viewer", "roles");

    let record = &sa.pending()[0];
    assert_eq!(record.check, Check::Includes);
    assert_eq!(record.description, "roles");
    assert_eq!(record.expected, r#"to include "viewer""#);
    assert_eq!(record.actual, r#"["admin", "editor"] (array)"#);
}

#[test]
fn test_includes_array_uses_deep_equality() {
    let mut sa = SoftAssertions::new();
    sa.includes(json!([[1, 2], {"k": "v"}]), vec![1, 2], "nested array");
    sa.includes(json!([[1, 2], {"k": "v"}]), json!({"k": "v"}), "nested object");
    assert!(sa.assert_all().is_ok());
}

#[test]
fn test_large_integer_ids_compare_exactly() {
    let mut sa = SoftAssertions::new();
    sa.equals(9_007_199_254_740_993u64, 9_007_199_254_740_992u64, "ids");
    sa.equals(i64::MAX, i64::MAX - 1, "max");
    sa.greater_than(9_007_199_254_740_993u64, 9_007_199_254_740_992u64, "gt");
    sa.is_less_than(u64::MAX - 1, u64::MAX, "lt");

    let err = sa.assert_all().unwrap_err();
    assert_eq!(err.count, 2);
    assert!(err.report.contains(
        "[equals] ids\n  expected: 9007199254740992\n  actual:   9007199254740993"
    ));
    assert!(err.report.contains(
        "[equals] max\n  expected: 9223372036854775806\n  actual:   9223372036854775807"
    ));
    assert!(!err.report.contains("[greater_than]"));
    assert!(!err.report.contains("[is_less_than]"));
}

#[test]
fn test_integers_and_floats_mix_at_the_exactness_edge() {
    let mut sa = SoftAssertions::new();
    // Equal in value, different representation.
    sa.equals(42, 42.0, "int vs float");
    sa.equals(json!([1, 2.0]), vec![1.0, 2.0], "json ints vs floats");
    sa.greater_than(9_007_199_254_740_993u64, 9_007_199_254_740_992.0, "above 2^53");
    sa.is_less_than(2, 2.5, "fraction above");
    sa.greater_than(-2, -2.5, "fraction below");
    assert_eq!(sa.pending_count(), 0);

    // 2^53 + 1 is not representable as f64 and must not equal 2^53.
    sa.equals(9_007_199_254_740_993u64, 9_007_199_254_740_992.0, "rounded float");
    sa.not_equal(3, 3.0, "same number");
    sa.greater_than(2, 2.0, "equal is not greater");

    let err = sa.assert_all().unwrap_err();
    assert_eq!(err.count, 3);
    assert!(err.report.contains("actual:   9007199254740993"));
    assert!(err.report.contains("[not_equal] same number"));
    assert!(err.report.contains("[greater_than] equal is not greater"));
}
