use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::types::error::AppError;
use crate::types::user::{AccessLevel, UserRecord, UserState};

/// The authoritative in-memory set of user records and the sole mutation
/// point. Stands in for a real backend: methods are async so a networked
/// implementation can substitute without touching callers.
pub struct UserDirectory {
    records: Mutex<Vec<UserRecord>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Illustrative fixture data, not part of the contract.
    pub fn seeded() -> Self {
        let record = |email: &str, access_level, state| UserRecord {
            email: email.to_string(),
            access_level,
            state,
        };
        Self {
            records: Mutex::new(vec![
                record("jeff@scalyr.com", AccessLevel::Full, UserState::Active),
                record("susan@scalyr.com", AccessLevel::Full, UserState::Active),
                record("herman@scalyr.com", AccessLevel::Full, UserState::Invited),
                record("mary@scalyr.com", AccessLevel::ReadOnly, UserState::Active),
                record("steve@scalyr.com", AccessLevel::Limited, UserState::Invited),
            ]),
        }
    }

    // Never held across an await, so every operation runs to completion
    // before its result is observable.
    fn records(&self) -> MutexGuard<'_, Vec<UserRecord>> {
        self.records.lock().expect("directory mutex poisoned")
    }

    /// Snapshot of all records in insertion order. Callers get clones;
    /// mutating the returned list cannot touch the directory.
    pub async fn list(&self) -> Vec<UserRecord> {
        self.records().clone()
    }

    /// Invite a batch of emails at the given access level.
    ///
    /// All-or-nothing: every email is validated against the directory (and
    /// against the earlier part of the batch) before anything is inserted,
    /// so a collision anywhere leaves the directory untouched.
    pub async fn invite(&self, emails: &[String], access_level: AccessLevel) -> Result<(), AppError> {
        let mut records = self.records();

        for (i, email) in emails.iter().enumerate() {
            let taken = records.iter().any(|r| &r.email == email)
                || emails[..i].contains(email);
            if taken {
                return Err(AppError::UserAlreadyExists(email.clone()));
            }
        }

        for email in emails {
            records.push(UserRecord {
                email: email.clone(),
                access_level,
                state: UserState::Invited,
            });
        }
        info!("invited {} user(s) with {} access", emails.len(), access_level);
        Ok(())
    }

    /// Acknowledgment only; no record field changes.
    pub async fn resend_invite(&self, email: &str) -> Result<(), AppError> {
        let records = self.records();
        if !records.iter().any(|r| r.email == email) {
            return Err(AppError::UserNotFound(email.to_string()));
        }
        info!("resent invite to {}", email);
        Ok(())
    }

    /// Hard delete, regardless of whether the user is active or invited.
    pub async fn revoke_access(&self, email: &str) -> Result<(), AppError> {
        let mut records = self.records();
        let pos = records
            .iter()
            .position(|r| r.email == email)
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))?;
        records.remove(pos);
        info!("revoked access for {}", email);
        Ok(())
    }

    /// Seed/test support: flips an invited user to active. Not exposed over
    /// HTTP; the administrator contract has no accept step.
    pub async fn mark_active(&self, email: &str) -> Result<(), AppError> {
        let mut records = self.records();
        let record = records
            .iter_mut()
            .find(|r| r.email == email)
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))?;
        record.state = UserState::Active;
        Ok(())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
