//! Integration tests for deferred error construction.

use std::cell::Cell;

use preconditions::{ErrorBuilder, Errr, PreconditionError, Value};
use serde_json::json;

#[test]
fn test_templated_message() {
    let (id1, id2) = ("billing", "E-1009");
    let err = Errr::new()
        .new_error("(%s): Error ID %s", || true)
        .template_args([id1, id2])
        .test()
        .unwrap_err();
    assert_eq!(err.message, "(billing): Error ID E-1009");
}

#[test]
fn test_set_last_write_wins() {
    let err = Errr::new()
        .check_argument(false, None)
        .set("k", 1)
        .set("k", 2)
        .test()
        .unwrap_err();
    assert_eq!(err.field("k"), Some(&json!(2)));
}

#[test]
fn test_set_all_preserves_order() {
    let fields = vec![("first", json!(1)), ("second", json!(2)), ("third", json!(3))];
    let err = ErrorBuilder::new("x", || true)
        .set("second", json!(0))
        .set_all(fields)
        .test()
        .unwrap_err();

    let entries: Vec<(&str, i64)> = err
        .fields
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_i64().unwrap()))
        .collect();
    assert_eq!(entries, vec![("second", 2), ("first", 1), ("third", 3)]);
}

#[test]
fn test_passing_builder_never_evaluates_decorations() {
    let evaluated = Cell::new(false);
    let value = Value::from("ok");

    let outcome = Errr::new()
        .should_be_string(&value, Some("%s %s %s"))
        .template_args(["only-one"])
        .debug([("big", json!({"payload": [1, 2, 3]}))])
        .set("k", 1)
        .test();
    assert_eq!(outcome, Ok(()));

    let builder = ErrorBuilder::new("lazy", || {
        evaluated.set(true);
        false
    });
    assert!(!evaluated.get());
    assert_eq!(builder.test(), Ok(()));
    assert!(evaluated.get());
}

#[test]
fn test_repeat_test_reevaluates() {
    let failing = Cell::new(false);
    let builder = ErrorBuilder::new("flaky", || failing.get());

    assert!(builder.test().is_ok());
    failing.set(true);
    assert!(builder.t().is_err());
    failing.set(false);
    assert!(builder.test().is_ok());
}

#[test]
fn test_debug_params_rendered_in_trace() {
    let errr = Errr::new();
    let err = errr
        .should_be_defined(None::<&Value>, Some("user %s missing"))
        .template_args(["u-1"])
        .debug([("lookup", json!("by-id")), ("cache", json!(false))])
        .test()
        .unwrap_err();

    assert_eq!(
        err.trace(),
        "PreconditionError[should_be_defined]: user u-1 missing\n\
         Debug Params:\n  lookup: \"by-id\"\n  cache: false"
    );
}

#[test]
fn test_debug_rendering_controlled_by_flag() {
    for verbose in [true, false] {
        let err = Errr::new()
            .check_state(false, None)
            .debug_if([("pool", json!({"idle": 0}))], verbose)
            .test()
            .unwrap_err();
        assert_eq!(err.trace().contains("Debug Params:"), verbose);
    }
}

#[test]
fn test_explicit_debug_flag_wins_over_validator_setting() {
    for (validator_renders, explicit) in [(true, false), (false, true)] {
        let err = Errr::new()
            .render_debug(validator_renders)
            .check_argument(false, None)
            .debug_if([("token", json!("t-1"))], explicit)
            .render_debug(validator_renders)
            .test()
            .unwrap_err();
        assert_eq!(err.trace().contains("token"), explicit);
    }
}

#[test]
fn test_append_to_existing_error() {
    let cause = PreconditionError::new("disk full")
        .with_code("io")
        .with_field("device", "sda1")
        .with_field("retryable", false);

    let err = Errr::new()
        .check_state(false, Some("write failed"))
        .set("retryable", true)
        .append_to(cause.clone())
        .test()
        .unwrap_err();

    assert_eq!(err.message, "write failed");
    assert_eq!(err.code, "check_state");
    assert_eq!(err.field("device"), Some(&json!("sda1")));
    // Fields set on the builder take precedence over the appended error's.
    assert_eq!(err.field("retryable"), Some(&json!(true)));
    assert_eq!(err.appended(), Some(&cause));
    assert_eq!(
        err.trace_lines(),
        vec![
            "PreconditionError[check_state]: write failed".to_string(),
            "PreconditionError[io]: disk full".to_string(),
        ]
    );
}

#[test]
fn test_value_checks_return_builders() {
    let errr = Errr::new();
    let list = Value::from(json!([1]));

    assert!(errr.should_be_array(&list, None).t().is_ok());
    assert!(errr.should_not_be_empty(&list, None).t().is_ok());
    assert!(errr.should_be_truthy(&list, None).t().is_ok());

    let err = errr.should_be_reg_exp(&list, None).t().unwrap_err();
    assert_eq!(err.message, "value should be a regular expression");
    assert_eq!(err.code, "should_be_reg_exp");
}

#[test]
fn test_question_mark_propagation() {
    fn load(limit: i64) -> preconditions::Result<i64> {
        let errr = Errr::new();
        errr.check_argument(limit > 0, Some("limit %s must be positive"))
            .template_args([limit.to_string()])
            .t()?;
        Ok(limit * 2)
    }

    assert_eq!(load(4).unwrap(), 8);
    assert_eq!(load(-2).unwrap_err().message, "limit -2 must be positive");
}
