//! Record providers feeding the dashboard tables.
//!
//! TRADE-OFFS
//! ==========
//! Providers have no error channel: a source that cannot produce data yields
//! an empty sequence and the tables render their empty state. Fallible
//! sources log the reason and degrade instead of propagating it.

use std::collections::HashSet;

use super::records::{DashboardRecords, JobId, JobRecord, UserId, UserRecord, sample_jobs, sample_users};

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

/// Synchronous provider of the two ordered record sequences.
pub trait RecordSource {
    fn users(&self) -> Vec<UserRecord>;
    fn jobs(&self) -> Vec<JobRecord>;
}

/// Embedded sample data.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureSource;

impl RecordSource for FixtureSource {
    fn users(&self) -> Vec<UserRecord> {
        sample_users()
    }

    fn jobs(&self) -> Vec<JobRecord> {
        sample_jobs()
    }
}

/// Errors produced while decoding a record document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The document is not valid JSON or does not match the record schema.
    #[error("record document rejected: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two users share an identifier.
    #[error("record document rejected: duplicate user id {0:?}")]
    DuplicateUserId(UserId),

    /// Two jobs share an identifier.
    #[error("record document rejected: duplicate job id {0:?}")]
    DuplicateJobId(JobId),
}

/// Records decoded from a JSON document of the form
/// `{"users": [...], "jobs": [...]}`. Missing keys mean empty sequences.
#[derive(Clone, Debug, Default)]
pub struct JsonSource {
    records: DashboardRecords,
}

impl JsonSource {
    /// Strict decode, for callers that want to see the failure.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Parse`] if `raw` is not a valid record document,
    /// or a duplicate-id error if identifiers repeat within either sequence.
    pub fn try_parse(raw: &str) -> Result<Self, SourceError> {
        let records = serde_json::from_str::<DashboardRecords>(raw)?;
        check_unique_ids(&records)?;
        Ok(Self { records })
    }

    /// Lenient decode: a rejected document becomes an empty source.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; rendering empty tables");
            Self::default()
        })
    }
}

fn check_unique_ids(records: &DashboardRecords) -> Result<(), SourceError> {
    let mut users = HashSet::new();
    if let Some(user) = records.users.iter().find(|u| !users.insert(u.id)) {
        return Err(SourceError::DuplicateUserId(user.id));
    }
    let mut jobs = HashSet::new();
    if let Some(job) = records.jobs.iter().find(|j| !jobs.insert(j.id)) {
        return Err(SourceError::DuplicateJobId(job.id));
    }
    Ok(())
}

impl RecordSource for JsonSource {
    fn users(&self) -> Vec<UserRecord> {
        self.records.users.clone()
    }

    fn jobs(&self) -> Vec<JobRecord> {
        self.records.jobs.clone()
    }
}
