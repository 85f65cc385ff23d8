use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LocationCategory, SampleType};
use crate::errors::CoreError;

/// One environmental sampling point (air plate or swab).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    /// `{categoryKey}-{index}`, index starting at 1.
    pub id: String,
    pub name: String,
    pub category: LocationCategory,
    #[serde(rename = "type")]
    pub sample_type: SampleType,
    pub collected: bool,
    pub collection_time: Option<DateTime<Utc>>,
    pub aspergillus_count: Option<u32>,
    /// Other-mold colony count.
    pub colony_count: Option<u32>,
    /// Plate score 1-5, only set together with both counts.
    pub score: Option<u8>,
    #[serde(default)]
    pub notes: String,
}

impl Sample {
    /// Uncollected placeholder for the `index`-th (1-based) point of a category.
    #[must_use]
    pub fn placeholder(category: LocationCategory, index: usize) -> Self {
        Self {
            id: format!("{}-{index}", category.key()),
            name: format!("{} #{index}", category.display_name()),
            category,
            sample_type: category.sample_type(),
            collected: false,
            collection_time: None,
            aspergillus_count: None,
            colony_count: None,
            score: None,
            notes: String::new(),
        }
    }

    /// Whether any field beyond the placeholder defaults has been filled in.
    #[must_use]
    pub const fn has_entered_data(&self) -> bool {
        self.collected
            || self.collection_time.is_some()
            || self.aspergillus_count.is_some()
            || self.colony_count.is_some()
            || self.score.is_some()
    }
}

/// Samples keyed by location category, each list in plan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct SampleSet(BTreeMap<LocationCategory, Vec<Sample>>);

impl SampleSet {
    #[must_use]
    pub const fn new(map: BTreeMap<LocationCategory, Vec<Sample>>) -> Self {
        Self(map)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    /// Samples of one category, empty when the category has none.
    #[must_use]
    pub fn category(&self, category: LocationCategory) -> &[Sample] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate categories in plan order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationCategory, &[Sample])> {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Iterate every sample in plan order.
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.0.values().flatten()
    }

    /// Borrow one sample by category and zero-based index.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the category or index does not exist.
    pub fn get(&self, category: LocationCategory, index: usize) -> Result<&Sample, CoreError> {
        self.0
            .get(&category)
            .and_then(|list| list.get(index))
            .ok_or_else(|| not_found(category, index))
    }

    fn get_mut(&mut self, category: LocationCategory, index: usize) -> Result<&mut Sample, CoreError> {
        self.0
            .get_mut(&category)
            .and_then(|list| list.get_mut(index))
            .ok_or_else(|| not_found(category, index))
    }

    /// Mark one sample as collected. The collection time is stamped only if
    /// the sample does not already carry one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the sample does not exist.
    pub fn mark_collected(
        &mut self,
        category: LocationCategory,
        index: usize,
        at: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let sample = self.get_mut(category, index)?;
        sample.collected = true;
        sample.collection_time.get_or_insert(at);
        Ok(())
    }

    /// Mark every sample of a category as collected. Returns how many changed.
    pub fn collect_all(&mut self, category: LocationCategory, at: DateTime<Utc>) -> usize {
        let Some(list) = self.0.get_mut(&category) else {
            return 0;
        };
        let mut changed = 0;
        for sample in list.iter_mut().filter(|s| !s.collected) {
            sample.collected = true;
            sample.collection_time.get_or_insert(at);
            changed += 1;
        }
        changed
    }

    /// Record both colony counts for a collected sample and assign the score
    /// produced by `scorer`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the sample does not exist, and
    /// `CoreError::Validation` if it has not been collected or the scorer
    /// returns a value outside 1-5.
    pub fn record_result<F>(
        &mut self,
        category: LocationCategory,
        index: usize,
        aspergillus_count: u32,
        colony_count: u32,
        scorer: F,
    ) -> Result<u8, CoreError>
    where
        F: FnOnce(u32, u32) -> u8,
    {
        let sample = self.get_mut(category, index)?;
        if !sample.collected {
            return Err(CoreError::Validation(format!(
                "sample {} has not been collected",
                sample.id
            )));
        }
        let score = scorer(aspergillus_count, colony_count);
        if !(1..=5).contains(&score) {
            return Err(CoreError::Validation(format!(
                "plate score {score} for sample {} is outside 1-5",
                sample.id
            )));
        }
        sample.aspergillus_count = Some(aspergillus_count);
        sample.colony_count = Some(colony_count);
        sample.score = Some(score);
        Ok(score)
    }

    /// Bring every score in line with its counts after a wholesale
    /// replacement. Samples with both counts get `scorer`'s score; samples
    /// missing a count keep no score.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a score outside 1-5 or a score
    /// without both counts. Nothing is changed in that case.
    pub fn rescore<F>(&mut self, scorer: F) -> Result<(), CoreError>
    where
        F: Fn(u32, u32) -> u8,
    {
        for sample in self.samples() {
            match (sample.score, sample.aspergillus_count, sample.colony_count) {
                (Some(score), _, _) if !(1..=5).contains(&score) => {
                    return Err(CoreError::Validation(format!(
                        "plate score {score} for sample {} is outside 1-5",
                        sample.id
                    )));
                }
                (Some(_), None, _) | (Some(_), _, None) => {
                    return Err(CoreError::Validation(format!(
                        "sample {} has a score but is missing a colony count",
                        sample.id
                    )));
                }
                (_, Some(aspergillus), Some(colony))
                    if !(1..=5).contains(&scorer(aspergillus, colony)) =>
                {
                    return Err(CoreError::Validation(format!(
                        "plate score for sample {} is outside 1-5",
                        sample.id
                    )));
                }
                _ => {}
            }
        }

        for sample in self.0.values_mut().flatten() {
            if let (Some(aspergillus), Some(colony)) = (sample.aspergillus_count, sample.colony_count)
            {
                sample.score = Some(scorer(aspergillus, colony));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn collected(&self) -> usize {
        self.samples().filter(|s| s.collected).count()
    }

    #[must_use]
    pub fn scored(&self) -> usize {
        self.samples().filter(|s| s.score.is_some()).count()
    }

    /// Collected share of the plan, rounded, 0 for an empty plan.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let pct = (self.collected() * 200 + total) / (total * 2);
        u8::try_from(pct).unwrap_or(100)
    }

    /// Whether resetting the plan would discard operator input.
    #[must_use]
    pub fn has_entered_data(&self) -> bool {
        self.samples().any(Sample::has_entered_data)
    }
}

fn not_found(category: LocationCategory, index: usize) -> CoreError {
    CoreError::NotFound {
        entity_type: "sample".to_string(),
        id: format!("{}[{index}]", category.key()),
    }
}
