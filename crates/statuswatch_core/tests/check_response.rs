use serde_json::json;
use statuswatch_core::{check_response, ContentError};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

#[test]
fn homeworks_pass_through_unchanged_and_in_order() {
    init_logging();
    let payload = json!({
        "homeworks": [
            {"homework_name": "hw2", "status": "reviewing"},
            {"homework_name": "hw1", "status": "approved"},
        ],
        "current_date": 1_700_000_000,
    });

    let checked = check_response(&payload).expect("valid payload");

    assert_eq!(checked.homeworks.len(), 2);
    assert_eq!(checked.homeworks[0]["homework_name"], "hw2");
    assert_eq!(checked.homeworks[1]["homework_name"], "hw1");
    assert_eq!(checked.current_date, Some(1_700_000_000));
}

#[test]
fn empty_list_is_valid() {
    init_logging();
    let payload = json!({ "homeworks": [] });

    let checked = check_response(&payload).expect("valid payload");

    assert!(checked.homeworks.is_empty());
    assert_eq!(checked.current_date, None);
}

#[test]
fn missing_homeworks_field_is_rejected() {
    init_logging();
    let payload = json!({ "current_date": 1_700_000_000 });

    let err = check_response(&payload).unwrap_err();
    assert_eq!(err, ContentError::MissingHomeworks);
}

#[test]
fn non_object_payload_is_rejected() {
    init_logging();
    let payload = json!(["not", "an", "object"]);

    let err = check_response(&payload).unwrap_err();
    assert_eq!(err, ContentError::MissingHomeworks);
}

#[test]
fn homeworks_that_is_not_a_list_is_rejected() {
    init_logging();
    let payload = json!({ "homeworks": "hw1" });

    let err = check_response(&payload).unwrap_err();
    assert_eq!(err, ContentError::NotAList);
}

#[test]
fn malformed_first_entry_is_rejected() {
    init_logging();
    let payload = json!({ "homeworks": [42, {"homework_name": "hw1", "status": "approved"}] });

    let err = check_response(&payload).unwrap_err();
    assert_eq!(err, ContentError::MalformedEntry);
}

#[test]
fn only_the_first_entry_shape_is_checked() {
    init_logging();
    // Later entries are never consumed, so their shape is not validated.
    let payload = json!({
        "homeworks": [
            {"homework_name": "hw1", "status": "approved"},
            "garbage",
        ],
    });

    let checked = check_response(&payload).expect("valid payload");
    assert_eq!(checked.homeworks.len(), 2);
}

#[test]
fn non_integer_cursor_is_treated_as_absent() {
    init_logging();
    let payload = json!({ "homeworks": [], "current_date": "soon" });

    let checked = check_response(&payload).expect("valid payload");
    assert_eq!(checked.current_date, None);
}
