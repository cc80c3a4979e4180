use std::collections::HashSet;

use super::*;
use crate::state::source::FixtureSource;

// =============================================================
// Fixtures
// =============================================================

#[test]
fn sample_users_keep_fixture_order_and_roles() {
    let users = sample_users();
    let summary: Vec<(u32, &str, &str)> = users
        .iter()
        .map(|u| (u.id.0, u.name.as_str(), u.role.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "John Doe", "admin"), (2, "Jane Smith", "user"), (3, "Mike Johnson", "user")]
    );
    assert_eq!(users[0].email, "john@example.com");
}

#[test]
fn sample_jobs_are_all_open() {
    let jobs = sample_jobs();
    assert_eq!(jobs.len(), 3);
    assert!(jobs.iter().all(|j| j.status == JobStatus::Open));
    assert_eq!(jobs[2].title, "Product Manager");
    assert_eq!(jobs[2].location, "San Francisco");
}

#[test]
fn sample_ids_are_unique() {
    let user_ids: HashSet<_> = sample_users().iter().map(|u| u.id).collect();
    assert_eq!(user_ids.len(), 3);
    let job_ids: HashSet<_> = sample_jobs().iter().map(|j| j.id).collect();
    assert_eq!(job_ids.len(), 3);
}

// =============================================================
// Enums
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
    assert_eq!(serde_json::from_value::<Role>(serde_json::json!("user")).unwrap(), Role::User);
}

#[test]
fn job_status_serializes_as_displayed() {
    assert_eq!(serde_json::to_value(JobStatus::Open).unwrap(), serde_json::json!("Open"));
    assert_eq!(JobStatus::Open.as_str(), "Open");
}

#[test]
fn user_record_reads_plain_id() {
    let raw = r#"{"id":7,"name":"Ann","email":"ann@example.com","role":"admin"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, UserId(7));
    assert_eq!(user.role, Role::Admin);
}

// =============================================================
// DashboardRecords
// =============================================================

#[test]
fn load_from_fixture_source_matches_samples() {
    let records = DashboardRecords::load(&FixtureSource);
    assert_eq!(records.users, sample_users());
    assert_eq!(records.jobs, sample_jobs());
}

#[test]
fn default_records_are_empty() {
    let records = DashboardRecords::default();
    assert!(records.users.is_empty());
    assert!(records.jobs.is_empty());
}
