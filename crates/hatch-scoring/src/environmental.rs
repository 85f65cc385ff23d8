//! Weighted environmental score.
//!
//! Plate scores are summed per score group, then combined as
//! `2 × (H + HV + HHV + GV) + S + M`. Setter tops and the control plate sit
//! outside the formula, and unscored samples contribute nothing.

use hatch_core::entities::{GroupSums, SampleSet, ScoringThresholds};
use hatch_core::enums::EnvironmentalClass;

/// Per-group sums of assigned plate scores.
#[must_use]
pub fn environmental_breakdown(samples: &SampleSet) -> GroupSums {
    let mut sums = GroupSums::default();
    for (category, list) in samples.iter() {
        let Some(group) = category.score_group() else {
            continue;
        };
        let total: u32 = list.iter().filter_map(|s| s.score).map(u32::from).sum();
        sums.add(group, total);
    }
    sums
}

#[must_use]
pub fn environmental_score(samples: &SampleSet) -> u32 {
    environmental_breakdown(samples).weighted_total()
}

/// Bucket a total: `<= good` GOOD, `<= fair` FAIR, otherwise POOR.
#[must_use]
pub const fn classify_environmental_score(
    total: u32,
    thresholds: &ScoringThresholds,
) -> EnvironmentalClass {
    if total <= thresholds.good {
        EnvironmentalClass::Good
    } else if total <= thresholds.fair {
        EnvironmentalClass::Fair
    } else {
        EnvironmentalClass::Poor
    }
}
