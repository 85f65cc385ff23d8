use chrono::NaiveDate;
use hatch_core::enums::LocationCategory;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a location category key such as `HHV` or `m_chick`.
pub fn parse_category(raw: &str) -> anyhow::Result<LocationCategory> {
    LocationCategory::from_key(raw).ok_or_else(|| {
        let known = LocationCategory::ALL
            .iter()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid category '{raw}' (expected one of {known})")
    })
}

/// Convert a 1-based sample number to an index.
pub fn sample_index(number: usize) -> anyhow::Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("sample numbers start at 1"))
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))
}
