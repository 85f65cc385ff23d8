//! Environmental sampling plan generator.
//!
//! The plan is a fixed table of hatchery zones. [`initialize_samples`]
//! expands it into uncollected placeholders, one list per category.

use std::collections::BTreeMap;

use crate::entities::{Sample, SampleSet};
use crate::enums::{LocationCategory, SampleType};

/// One row of the sampling plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub category: LocationCategory,
    pub code: &'static str,
    pub name: &'static str,
    pub count: usize,
    pub sample_type: SampleType,
}

impl PlanEntry {
    const fn of(category: LocationCategory) -> Self {
        Self {
            category,
            code: category.code(),
            name: category.display_name(),
            count: category.default_count(),
            sample_type: category.sample_type(),
        }
    }
}

/// The fixed plan, in sampling order.
pub const LOCATION_PLAN: [PlanEntry; 11] = [
    PlanEntry::of(LocationCategory::Hatchers),
    PlanEntry::of(LocationCategory::Setters),
    PlanEntry::of(LocationCategory::HatcherVentilation),
    PlanEntry::of(LocationCategory::SetterTop),
    PlanEntry::of(LocationCategory::Hallways),
    PlanEntry::of(LocationCategory::Fans),
    PlanEntry::of(LocationCategory::ChickRoom),
    PlanEntry::of(LocationCategory::ColdRoom),
    PlanEntry::of(LocationCategory::VaccineRoom),
    PlanEntry::of(LocationCategory::CandlingMachine),
    PlanEntry::of(LocationCategory::Control),
];

/// Sampling points in a full plan.
pub const DEFAULT_PLAN_SIZE: usize = 30;

/// Expand the plan into placeholder samples.
#[must_use]
pub fn initialize_samples() -> SampleSet {
    let map: BTreeMap<LocationCategory, Vec<Sample>> = LOCATION_PLAN
        .iter()
        .map(|entry| {
            let samples = (1..=entry.count)
                .map(|i| Sample::placeholder(entry.category, i))
                .collect();
            (entry.category, samples)
        })
        .collect();
    SampleSet::new(map)
}
