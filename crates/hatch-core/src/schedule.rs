//! Calendar helpers for the recurring audit schedule and plate incubation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::enums::AuditFrequency;

/// Default plate incubation period.
pub const DEFAULT_INCUBATION_DAYS: u32 = 3;

/// Due date of the next audit. With no previous audit the next one is due
/// on `today`.
#[must_use]
pub fn next_due_date(
    last_audit: Option<NaiveDate>,
    frequency: AuditFrequency,
    today: NaiveDate,
) -> NaiveDate {
    last_audit.map_or(today, |last| {
        last + Duration::days(frequency.interval_days())
    })
}

/// Whole days from `today` to `due`; negative once overdue.
#[must_use]
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

#[must_use]
pub fn is_overdue(due: NaiveDate, today: NaiveDate) -> bool {
    due < today
}

/// Whether a reminder should be shown: the due date is within
/// `reminder_days_before` days, or already passed.
#[must_use]
pub fn reminder_active(due: NaiveDate, today: NaiveDate, reminder_days_before: u32) -> bool {
    days_until_due(due, today) <= i64::from(reminder_days_before)
}

#[must_use]
pub fn expected_incubation_end(start: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    start + Duration::days(i64::from(days))
}

/// Quarter label such as `Q1 2026`.
#[must_use]
pub fn quarter_label(date: NaiveDate) -> String {
    format!("Q{} {}", date.month0() / 3 + 1, date.year())
}

/// First and last day of a quarter (1-4). `None` for an invalid quarter.
#[must_use]
pub fn quarter_range(year: i32, quarter: u32) -> Option<(NaiveDate, NaiveDate)> {
    if !(1..=4).contains(&quarter) {
        return None;
    }
    let start = NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)?;
    let next = if quarter == 4 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, quarter * 3 + 1, 1)?
    };
    Some((start, next.pred_opt()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(AuditFrequency::Monthly, d(2026, 1, 31))]
    #[case(AuditFrequency::Quarterly, d(2026, 4, 1))]
    #[case(AuditFrequency::SemiAnnual, d(2026, 7, 2))]
    #[case(AuditFrequency::Annual, d(2027, 1, 1))]
    fn next_due_follows_frequency(#[case] frequency: AuditFrequency, #[case] expected: NaiveDate) {
        assert_eq!(next_due_date(Some(d(2026, 1, 1)), frequency, d(2026, 5, 5)), expected);
    }

    #[test]
    fn first_audit_is_due_today() {
        let today = d(2026, 2, 10);
        assert_eq!(next_due_date(None, AuditFrequency::Quarterly, today), today);
    }

    #[test]
    fn overdue_and_reminders() {
        let today = d(2026, 4, 10);
        assert!(is_overdue(d(2026, 4, 9), today));
        assert!(!is_overdue(today, today));
        assert_eq!(days_until_due(d(2026, 4, 17), today), 7);
        assert!(reminder_active(d(2026, 4, 17), today, 7));
        assert!(!reminder_active(d(2026, 4, 18), today, 7));
        assert!(reminder_active(d(2026, 4, 1), today, 7));
    }

    #[test]
    fn quarters() {
        assert_eq!(quarter_label(d(2026, 3, 31)), "Q1 2026");
        assert_eq!(quarter_label(d(2026, 10, 1)), "Q4 2026");
        assert_eq!(quarter_range(2026, 4), Some((d(2026, 10, 1), d(2026, 12, 31))));
        assert_eq!(quarter_range(2024, 1), Some((d(2024, 1, 1), d(2024, 3, 31))));
        assert_eq!(quarter_range(2026, 5), None);
    }

    #[test]
    fn incubation_end_adds_days() {
        let start = "2026-03-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = expected_incubation_end(start, DEFAULT_INCUBATION_DAYS);
        assert_eq!(end.to_rfc3339(), "2026-03-04T08:00:00+00:00");
    }
}
