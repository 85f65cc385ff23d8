//! Managed storage keys.

pub const AUDITS: &str = "hatchery-audits";
pub const CURRENT_AUDIT: &str = "hatchery-current-audit";
pub const SETTINGS: &str = "hatchery-settings";
pub const LOCATIONS: &str = "hatchery-locations";
pub const AUDITORS: &str = "hatchery-auditors";
pub const LAST_UPDATED: &str = "hatchery-last-updated";
pub const AUDIT_SEQUENCE: &str = "hatchery-audit-sequence";

/// Throwaway key written and removed by the startup probe.
pub const PROBE: &str = "__hatch_probe__";

/// Every key wiped by a full clear and counted by storage telemetry.
pub const MANAGED: [&str; 7] = [
    AUDITS,
    CURRENT_AUDIT,
    SETTINGS,
    LOCATIONS,
    AUDITORS,
    LAST_UPDATED,
    AUDIT_SEQUENCE,
];
