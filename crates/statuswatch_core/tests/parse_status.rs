use serde_json::json;
use statuswatch_core::{parse_status, ParseError};

fn init_logging() {
    watch_logging::initialize_for_tests();
}

#[test]
fn approved_status_renders_the_exact_template() {
    init_logging();
    let record = json!({"homework_name": "hw1", "status": "approved"});

    assert_eq!(
        parse_status(&record).expect("recognized status"),
        "Изменился статус проверки работы \"hw1\". \
         Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn reviewing_status_renders_the_exact_template() {
    init_logging();
    let record = json!({"homework_name": "final project", "status": "reviewing"});

    assert_eq!(
        parse_status(&record).expect("recognized status"),
        "Изменился статус проверки работы \"final project\". \
         Работа взята на проверку ревьюером."
    );
}

#[test]
fn rejected_status_renders_the_exact_template() {
    init_logging();
    let record = json!({"homework_name": "hw3", "status": "rejected"});

    assert_eq!(
        parse_status(&record).expect("recognized status"),
        "Изменился статус проверки работы \"hw3\". \
         Работа проверена: у ревьюера есть замечания."
    );
}

#[test]
fn unknown_status_is_rejected() {
    init_logging();
    let record = json!({"homework_name": "hw2", "status": "unknown_code"});

    let err = parse_status(&record).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownStatus {
            status: "unknown_code".to_string()
        }
    );
}

#[test]
fn missing_name_is_rejected() {
    init_logging();
    let record = json!({"status": "approved"});

    let err = parse_status(&record).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingField {
            field: "homework_name"
        }
    );
}

#[test]
fn missing_status_is_rejected() {
    init_logging();
    let record = json!({"homework_name": "hw1"});

    let err = parse_status(&record).unwrap_err();
    assert_eq!(err, ParseError::MissingField { field: "status" });
}

#[test]
fn non_string_field_counts_as_missing() {
    init_logging();
    let record = json!({"homework_name": "hw1", "status": 7});

    let err = parse_status(&record).unwrap_err();
    assert_eq!(err, ParseError::MissingField { field: "status" });
}

#[test]
fn non_object_record_is_rejected() {
    init_logging();
    let record = json!("hw1: approved");

    let err = parse_status(&record).unwrap_err();
    assert_eq!(err, ParseError::NotAnObject);
}
