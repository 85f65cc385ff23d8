//! Dashboard statistics over finalized audits.

use chrono::{Local, NaiveDate};
use hatch_core::enums::EnvironmentalClass;
use hatch_core::responses::AuditStatistics;
use hatch_core::schedule::{is_overdue, next_due_date};

use crate::error::DatabaseError;
use crate::service::AuditStore;

impl AuditStore {
    /// Statistics as of today's local date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn audit_statistics(&self) -> Result<AuditStatistics, DatabaseError> {
        self.audit_statistics_on(Local::now().date_naive()).await
    }

    /// Totals, verdict counts, and the next due date. Only completed or
    /// approved audits are counted; drafts and in-progress records are not.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend fails.
    pub async fn audit_statistics_on(&self, today: NaiveDate) -> Result<AuditStatistics, DatabaseError> {
        let audits = self.get_all_audits().await?;
        let settings = self.get_settings().await?;
        let finalized: Vec<_> = audits.iter().filter(|a| a.status.is_finalized()).collect();

        let mut stats = AuditStatistics {
            total_audits: count(audits.len()),
            completed_audits: count(finalized.len()),
            ..AuditStatistics::default()
        };

        let mut score_sum = 0u64;
        for summary in finalized.iter().filter_map(|a| a.summary.as_ref()) {
            score_sum += u64::from(summary.environmental.score);
            match summary.environmental.classification {
                EnvironmentalClass::Good => stats.good_count += 1,
                EnvironmentalClass::Fair => stats.fair_count += 1,
                EnvironmentalClass::Poor => stats.poor_count += 1,
            }
        }
        if !finalized.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let average = score_sum as f64 / finalized.len() as f64;
            stats.average_score = (average * 10.0).round() / 10.0;
        }

        stats.last_audit_date = finalized.iter().map(|a| a.info.date).max();
        let due = next_due_date(stats.last_audit_date, settings.frequency, today);
        stats.next_due_date = Some(due);
        stats.overdue = is_overdue(due, today);
        Ok(stats)
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
