//! Plate score decision table.
//!
//! | Aspergillus | Other mold | Score |
//! |---|---|---|
//! | > 10 | any | 5 |
//! | 4-10 | any | 4 |
//! | 1-3 | > 40 | 4 |
//! | 1-3 | <= 40 | 3 |
//! | 0 | > 40 | 2 |
//! | 0 | <= 40 | 1 |

/// Aspergillus count above which a plate is critical.
pub const ASPERGILLUS_CRITICAL: u32 = 10;
/// Aspergillus count from which a plate is a warning regardless of other mold.
pub const ASPERGILLUS_WARNING: u32 = 4;
/// Other-mold count above which a plate is heavily contaminated.
pub const OTHER_MOLD_HIGH: u32 = 40;

/// Severity of one plate or swab, 1 (clean) to 5 (critical).
#[must_use]
pub const fn plate_score(aspergillus_count: u32, other_mold_count: u32) -> u8 {
    let heavy = other_mold_count > OTHER_MOLD_HIGH;
    match aspergillus_count {
        n if n > ASPERGILLUS_CRITICAL => 5,
        n if n >= ASPERGILLUS_WARNING => 4,
        0 if heavy => 2,
        0 => 1,
        _ if heavy => 4,
        _ => 3,
    }
}
