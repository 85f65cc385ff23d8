//! Identifier formats.
//!
//! - Audit numbers: `HA-YYYYMMDD-SEQ`, SEQ zero-padded to three digits.
//! - Sample ids: `{auditSeq}-{YYYYMMDD}-{random 3-digit}`.
//! - Opaque record ids: `{prefix}-{8 hex chars}` (`aud-`, `loc-`, `adr-`).

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::errors::CoreError;

pub const AUDIT_NUMBER_PREFIX: &str = "HA";
pub const PREFIX_AUDIT: &str = "aud";
pub const PREFIX_LOCATION: &str = "loc";
pub const PREFIX_AUDITOR: &str = "adr";

/// Sequence segment used when an audit number carries none.
pub const DEFAULT_SEQUENCE_SEGMENT: &str = "001";

/// `YYYYMMDD` as embedded in audit numbers and sample ids.
#[must_use]
pub fn date_segment(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[must_use]
pub fn format_audit_number(date: NaiveDate, sequence: u32) -> String {
    format!("{AUDIT_NUMBER_PREFIX}-{}-{sequence:03}", date_segment(date))
}

/// Split an audit number into its date and sequence.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the value is not `HA-YYYYMMDD-SEQ`.
pub fn parse_audit_number(number: &str) -> Result<(NaiveDate, u32), CoreError> {
    let invalid = || CoreError::Validation(format!("malformed audit number: {number}"));
    let mut parts = number.split('-');
    if parts.next() != Some(AUDIT_NUMBER_PREFIX) {
        return Err(invalid());
    }
    let date = parts
        .next()
        .filter(|d| d.len() == 8 && d.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y%m%d").ok())
        .ok_or_else(invalid)?;
    let sequence = parts
        .next()
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((date, sequence))
}

/// The SEQ segment of an audit number, or `"001"` when absent.
#[must_use]
pub fn audit_sequence_segment(audit_number: &str) -> &str {
    audit_number
        .split('-')
        .nth(2)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SEQUENCE_SEGMENT)
}

#[must_use]
pub fn format_sample_id(audit_number: &str, date: NaiveDate, suffix: u16) -> String {
    format!(
        "{}-{}-{:03}",
        audit_sequence_segment(audit_number),
        date_segment(date),
        suffix % 1000
    )
}

/// Sample id with a random three-digit suffix. Uniqueness is probabilistic.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source fails.
pub fn generate_sample_id(audit_number: &str, date: NaiveDate) -> Result<String, CoreError> {
    Ok(format_sample_id(audit_number, date, random_suffix()?))
}

/// Sample id guaranteed not to be in `existing`.
///
/// Starts from a random suffix and probes forward through the remaining
/// suffixes.
///
/// # Errors
///
/// Returns `CoreError::Validation` when all 1000 suffixes for this audit
/// and date are taken, or `CoreError::Other` if the random source fails.
pub fn generate_unique_sample_id(
    audit_number: &str,
    date: NaiveDate,
    existing: &HashSet<String>,
) -> Result<String, CoreError> {
    let start = random_suffix()?;
    (0..1000u16)
        .map(|offset| format_sample_id(audit_number, date, (start + offset) % 1000))
        .find(|id| !existing.contains(id))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "no free sample id left for {audit_number} on {}",
                date_segment(date)
            ))
        })
}

/// Random opaque id: `{prefix}-{8 hex chars}`.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source fails.
pub fn random_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).map_err(|e| anyhow::anyhow!("random source failed: {e}"))?;
    Ok(format!("{prefix}-{:08x}", u32::from_be_bytes(bytes)))
}

fn random_suffix() -> Result<u16, CoreError> {
    let mut bytes = [0u8; 2];
    getrandom::fill(&mut bytes).map_err(|e| anyhow::anyhow!("random source failed: {e}"))?;
    Ok(u16::from_be_bytes(bytes) % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn audit_number_format() {
        assert_eq!(format_audit_number(date(), 7), "HA-20260115-007");
        assert_eq!(format_audit_number(date(), 1234), "HA-20260115-1234");
    }

    #[test]
    fn audit_number_parse() {
        assert_eq!(parse_audit_number("HA-20260115-012").unwrap(), (date(), 12));
        for bad in [
            "HA-20260115",
            "XX-20260115-001",
            "HA-2026011-001",
            "HA-20260115-0a1",
            "HA-20260115-001-2",
        ] {
            assert!(parse_audit_number(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn sample_id_uses_sequence_segment() {
        assert_eq!(format_sample_id("HA-20260110-004", date(), 42), "004-20260115-042");
        assert_eq!(format_sample_id("", date(), 5), "001-20260115-005");

        let id = generate_sample_id("HA-20260110-004", date()).unwrap();
        assert!(id.starts_with("004-20260115-"));
        assert_eq!(id.len(), "004-20260115-000".len());
    }

    #[test]
    fn unique_sample_id_skips_taken_suffixes() {
        let existing: HashSet<String> = (0..999u16)
            .map(|n| format_sample_id("HA-20260115-001", date(), n))
            .collect();
        let id = generate_unique_sample_id("HA-20260115-001", date(), &existing).unwrap();
        assert_eq!(id, "001-20260115-999");

        let mut full = existing;
        full.insert(id);
        assert!(generate_unique_sample_id("HA-20260115-001", date(), &full).is_err());
    }

    #[test]
    fn random_ids_have_prefix_and_hex_body() {
        let id = random_id(PREFIX_AUDIT).unwrap();
        assert!(id.starts_with("aud-"));
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
