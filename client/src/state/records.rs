//! Read-only dashboard records and the embedded sample fixtures.
//!
//! DESIGN
//! ======
//! Records are never created or mutated at runtime. `DashboardRecords` is built
//! once from a `RecordSource` and provided through context; tables only read it.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

// =============================================================================
// IDENTIFIERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

// =============================================================================
// USERS
// =============================================================================

/// Account role shown as a badge in the users table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// JOBS
// =============================================================================

/// Posting status shown as a badge in the jobs table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Open,
}

impl JobStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub status: JobStatus,
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// Both record collections, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRecords {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl DashboardRecords {
    /// Snapshot both sequences from `source`.
    pub fn load(source: &impl super::source::RecordSource) -> Self {
        Self { users: source.users(), jobs: source.jobs() }
    }
}

/// Sample users rendered when no other source is injected.
#[must_use]
pub fn sample_users() -> Vec<UserRecord> {
    [
        (1, "John Doe", "john@example.com", Role::Admin),
        (2, "Jane Smith", "jane@example.com", Role::User),
        (3, "Mike Johnson", "mike@example.com", Role::User),
    ]
    .into_iter()
    .map(|(id, name, email, role)| UserRecord {
        id: UserId(id),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
    })
    .collect()
}

/// Sample job postings rendered when no other source is injected.
#[must_use]
pub fn sample_jobs() -> Vec<JobRecord> {
    [
        (1, "Senior React Developer", "Tech Corp", "Remote"),
        (2, "UX Designer", "Design Studio", "New York"),
        (3, "Product Manager", "StartUp Inc", "San Francisco"),
    ]
    .into_iter()
    .map(|(id, title, company, location)| JobRecord {
        id: JobId(id),
        title: title.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        status: JobStatus::Open,
    })
    .collect()
}
