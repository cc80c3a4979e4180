use super::*;
use crate::state::records::{JobId, Role, UserId};

#[test]
fn fixture_source_returns_samples() {
    assert_eq!(FixtureSource.users(), sample_users());
    assert_eq!(FixtureSource.jobs(), sample_jobs());
}

#[test]
fn json_source_reads_both_sequences_in_order() {
    let raw = r#"{
        "users": [
            {"id": 2, "name": "B", "email": "b@example.com", "role": "user"},
            {"id": 1, "name": "A", "email": "a@example.com", "role": "admin"}
        ],
        "jobs": [
            {"id": 9, "title": "T", "company": "C", "location": "L", "status": "Open"}
        ]
    }"#;
    let source = JsonSource::try_parse(raw).unwrap();
    let users = source.users();
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![UserId(2), UserId(1)]);
    assert_eq!(users[1].role, Role::Admin);
    assert_eq!(source.jobs()[0].id, JobId(9));
}

#[test]
fn json_source_missing_keys_are_empty() {
    let source = JsonSource::try_parse(r#"{"users": []}"#).unwrap();
    assert!(source.users().is_empty());
    assert!(source.jobs().is_empty());
}

#[test]
fn json_source_try_parse_rejects_unknown_role() {
    let raw = r#"{"users": [{"id": 1, "name": "A", "email": "a@x", "role": "owner"}]}"#;
    let err = JsonSource::try_parse(raw).unwrap_err();
    assert!(err.to_string().starts_with("record document rejected"));
}

#[test]
fn json_source_parse_degrades_to_empty() {
    let source = JsonSource::parse("not json");
    assert!(source.users().is_empty());
    assert!(source.jobs().is_empty());
}

#[test]
fn json_source_try_parse_rejects_duplicate_user_ids() {
    let raw = r#"{"users": [
        {"id": 1, "name": "A", "email": "a@x", "role": "user"},
        {"id": 1, "name": "B", "email": "b@x", "role": "admin"}
    ]}"#;
    let err = JsonSource::try_parse(raw).unwrap_err();
    assert!(matches!(err, SourceError::DuplicateUserId(UserId(1))));
}

#[test]
fn json_source_try_parse_rejects_duplicate_job_ids() {
    let raw = r#"{"jobs": [
        {"id": 4, "title": "T", "company": "C", "location": "L", "status": "Open"},
        {"id": 4, "title": "U", "company": "D", "location": "M", "status": "Open"}
    ]}"#;
    let err = JsonSource::try_parse(raw).unwrap_err();
    assert!(matches!(err, SourceError::DuplicateJobId(JobId(4))));
    assert!(err.to_string().starts_with("record document rejected"));
}

#[test]
fn json_source_parse_degrades_duplicates_to_empty() {
    let raw = r#"{"users": [
        {"id": 2, "name": "A", "email": "a@x", "role": "user"},
        {"id": 2, "name": "B", "email": "b@x", "role": "user"}
    ]}"#;
    assert!(JsonSource::parse(raw).users().is_empty());
}
