//! Audit-number and sample-id allocation.
//!
//! Audit numbers are `HA-YYYYMMDD-SEQ`. The next SEQ for a day is one past
//! the larger of the persisted per-day counter and the highest sequence
//! already present among stored audits and the draft, so deleting an audit
//! never recycles its number. Allocation is serialized within one process
//! by a mutex; two processes sharing a database can still race.

use chrono::{Local, NaiveDate};
use hatch_core::ids::{date_segment, format_audit_number, generate_sample_id, parse_audit_number};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DatabaseError;
use crate::keys;
use crate::service::AuditStore;

/// Persisted counter: last sequence handed out for `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SequenceCounter {
    date: String,
    last: u32,
}

impl AuditStore {
    /// Next audit number for today's local date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn generate_audit_id(&self) -> Result<String, DatabaseError> {
        self.generate_audit_id_on(Local::now().date_naive()).await
    }

    /// Next audit number for `date`. A corrupt counter is logged and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn generate_audit_id_on(&self, date: NaiveDate) -> Result<String, DatabaseError> {
        let _guard = self.id_lock.lock().await;
        let day = date_segment(date);

        let counter = match self.read_json::<SequenceCounter>(keys::AUDIT_SEQUENCE).await {
            Ok(counter) => counter,
            Err(DatabaseError::InvalidState(reason)) => {
                warn!(%reason, "audit sequence counter is unreadable, rebuilding from audits");
                None
            }
            Err(e) => return Err(e),
        };
        let counter_last = counter.filter(|c| c.date == day).map_or(0, |c| c.last);

        let mut numbers: Vec<String> = self
            .get_all_audits()
            .await?
            .into_iter()
            .map(|a| a.audit_number)
            .collect();
        if let Some(draft) = self.get_current_audit().await? {
            numbers.push(draft.audit_number);
        }
        let existing_max = numbers
            .iter()
            .filter_map(|n| parse_audit_number(n).ok())
            .filter(|(d, _)| *d == date)
            .map(|(_, seq)| seq)
            .max()
            .unwrap_or(0);

        let next = counter_last.max(existing_max) + 1;
        self.write_json(
            keys::AUDIT_SEQUENCE,
            &SequenceCounter {
                date: day,
                last: next,
            },
        )
        .await?;

        let number = format_audit_number(date, next);
        debug!(%number, "audit number allocated");
        Ok(number)
    }

    /// Sample id for an audit, dated today. Uniqueness is probabilistic.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if the random source fails.
    pub fn generate_sample_id(&self, audit_number: &str) -> Result<String, DatabaseError> {
        Ok(generate_sample_id(audit_number, Local::now().date_naive())?)
    }
}
