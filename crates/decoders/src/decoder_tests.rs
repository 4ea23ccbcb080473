//! Tests for response validation and status extraction.
//!
//! Payloads mirror what the homework status API actually returns: a
//! `homeworks` array (newest first) plus the server's `current_date`.

use serde_json::json;

use homework_common::error::PollError;
use homework_common::types::HomeworkRecord;

use crate::{CheckedResponse, check_response, parse_status};

// ───────────────────────────── helpers ──────────────────────────────

const CURRENT_DATE: i64 = 1_700_000_000;

fn record(name: &str, status: &str) -> HomeworkRecord {
    HomeworkRecord {
        homework_name: Some(name.to_string()),
        status: Some(status.to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  check_response
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_latest_record_is_first_element() {
    let response = json!({
        "homeworks": [
            {"id": 2, "homework_name": "newest.zip", "status": "reviewing", "reviewer_comment": ""},
            {"id": 1, "homework_name": "older.zip", "status": "approved"}
        ],
        "current_date": CURRENT_DATE
    });

    let checked = check_response(&response).unwrap();
    assert_eq!(
        checked,
        CheckedResponse::Latest {
            homework: record("newest.zip", "reviewing"),
            current_date: CURRENT_DATE,
        }
    );
}

#[test]
fn test_empty_homeworks_means_no_recent_changes() {
    let response = json!({"homeworks": [], "current_date": CURRENT_DATE});
    assert_eq!(
        check_response(&response).unwrap(),
        CheckedResponse::NoRecentChanges
    );
}

#[test]
fn test_empty_homeworks_without_current_date_is_still_benign() {
    let response = json!({"homeworks": []});
    assert_eq!(
        check_response(&response).unwrap(),
        CheckedResponse::NoRecentChanges
    );
}

#[test]
fn test_missing_homeworks_key() {
    for response in [
        json!({}),
        json!({"current_date": CURRENT_DATE}),
        json!({"homework": [], "current_date": CURRENT_DATE}),
    ] {
        let err = check_response(&response).unwrap_err();
        assert!(
            matches!(err, PollError::MissingField("homeworks")),
            "unexpected error for {}: {:?}",
            response,
            err
        );
    }
}

#[test]
fn test_top_level_not_an_object() {
    for response in [json!([]), json!("homeworks"), json!(null), json!(42)] {
        let err = check_response(&response).unwrap_err();
        assert!(matches!(err, PollError::MalformedResponse(_)));
    }
}

#[test]
fn test_homeworks_as_object_is_unexpected_shape() {
    let response = json!({
        "homeworks": {"homework_name": "hw.zip", "status": "approved"},
        "current_date": CURRENT_DATE
    });
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, PollError::UnexpectedShape(_)));
}

#[test]
fn test_homeworks_as_scalar_is_unexpected_shape() {
    let response = json!({"homeworks": "hw.zip", "current_date": CURRENT_DATE});
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, PollError::UnexpectedShape(_)));
}

#[test]
fn test_record_not_an_object() {
    let response = json!({"homeworks": ["hw.zip"], "current_date": CURRENT_DATE});
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, PollError::MalformedResponse(_)));
}

#[test]
fn test_missing_current_date() {
    let response = json!({"homeworks": [{"homework_name": "hw.zip", "status": "approved"}]});
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, PollError::MissingField("current_date")));
}

#[test]
fn test_non_integer_current_date() {
    let response = json!({
        "homeworks": [{"homework_name": "hw.zip", "status": "approved"}],
        "current_date": "yesterday"
    });
    let err = check_response(&response).unwrap_err();
    assert!(matches!(err, PollError::MalformedResponse(_)));
}

#[test]
fn test_record_with_missing_fields_passes_validation() {
    // Field presence is the extractor's job
    let response = json!({"homeworks": [{"id": 3}], "current_date": CURRENT_DATE});
    let checked = check_response(&response).unwrap();
    assert_eq!(
        checked,
        CheckedResponse::Latest {
            homework: HomeworkRecord::default(),
            current_date: CURRENT_DATE,
        }
    );
}

// ═══════════════════════════════════════════════════════════════════
//  parse_status
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_parse_status_approved() {
    let message = parse_status(&record("X", "approved")).unwrap();
    assert_eq!(
        message,
        "Changed status for \"X\": Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_parse_status_reviewing() {
    let message = parse_status(&record("hw_python_oop.zip", "reviewing")).unwrap();
    assert_eq!(
        message,
        "Changed status for \"hw_python_oop.zip\": Работа взята на проверку ревьюером."
    );
}

#[test]
fn test_parse_status_rejected() {
    let message = parse_status(&record("hw05_final.zip", "rejected")).unwrap();
    assert_eq!(
        message,
        "Changed status for \"hw05_final.zip\": Работа проверена: у ревьюера есть замечания."
    );
}

#[test]
fn test_parse_status_missing_name() {
    let homework = HomeworkRecord {
        homework_name: None,
        status: Some("approved".to_string()),
    };
    let err = parse_status(&homework).unwrap_err();
    assert!(matches!(err, PollError::MissingField("homework_name")));
}

#[test]
fn test_parse_status_missing_status() {
    let homework = HomeworkRecord {
        homework_name: Some("hw.zip".to_string()),
        status: None,
    };
    let err = parse_status(&homework).unwrap_err();
    assert!(matches!(err, PollError::MissingField("status")));
}

#[test]
fn test_parse_status_name_checked_before_status() {
    let err = parse_status(&HomeworkRecord::default()).unwrap_err();
    assert!(matches!(err, PollError::MissingField("homework_name")));
}

#[test]
fn test_parse_status_unknown_status() {
    let err = parse_status(&record("hw.zip", "pending")).unwrap_err();
    assert!(matches!(err, PollError::UnknownStatus(ref s) if s == "pending"));
}
