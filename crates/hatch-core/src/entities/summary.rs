use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    ComplianceClass, EnvironmentalClass, IssueCategory, IssuePriority, OverallStatus, ScoreGroup,
};

/// Scores attached to an audit when it is completed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub vaccine_storage: SectionScore,
    pub equipment: SectionScore,
    pub techniques: SectionScore,
    pub environmental: EnvironmentalResult,
    pub overall_status: OverallStatus,
}

/// Compliance of one checklist section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    pub passed_count: u32,
    pub total_count: u32,
    /// Rounded 0-100.
    pub percentage: u8,
    pub classification: ComplianceClass,
}

/// Weighted environmental score with its per-group breakdown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalResult {
    pub score: u32,
    pub classification: EnvironmentalClass,
    pub groups: GroupSums,
}

/// Sum of plate scores per score group.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct GroupSums {
    #[serde(rename = "H")]
    pub hatchers: u32,
    #[serde(rename = "HV")]
    pub hatcher_ventilation: u32,
    #[serde(rename = "HHV")]
    pub hallways: u32,
    #[serde(rename = "GV")]
    pub fans: u32,
    #[serde(rename = "S")]
    pub setters: u32,
    #[serde(rename = "M")]
    pub miscellaneous: u32,
}

impl GroupSums {
    #[must_use]
    pub const fn get(&self, group: ScoreGroup) -> u32 {
        match group {
            ScoreGroup::Hatchers => self.hatchers,
            ScoreGroup::HatcherVentilation => self.hatcher_ventilation,
            ScoreGroup::Hallways => self.hallways,
            ScoreGroup::Fans => self.fans,
            ScoreGroup::Setters => self.setters,
            ScoreGroup::Miscellaneous => self.miscellaneous,
        }
    }

    pub const fn add(&mut self, group: ScoreGroup, score: u32) {
        let slot = match group {
            ScoreGroup::Hatchers => &mut self.hatchers,
            ScoreGroup::HatcherVentilation => &mut self.hatcher_ventilation,
            ScoreGroup::Hallways => &mut self.hallways,
            ScoreGroup::Fans => &mut self.fans,
            ScoreGroup::Setters => &mut self.setters,
            ScoreGroup::Miscellaneous => &mut self.miscellaneous,
        };
        *slot = slot.saturating_add(score);
    }

    /// `2 × (H + HV + HHV + GV) + S + M`
    #[must_use]
    pub const fn weighted_total(&self) -> u32 {
        let high_risk = self
            .hatchers
            .saturating_add(self.hatcher_ventilation)
            .saturating_add(self.hallways)
            .saturating_add(self.fans);
        high_risk
            .saturating_mul(ScoreGroup::Hatchers.weight())
            .saturating_add(self.setters)
            .saturating_add(self.miscellaneous)
    }
}

/// A rule-detected problem with a recommended action.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CriticalIssue {
    pub category: IssueCategory,
    pub priority: IssuePriority,
    pub issue: String,
    pub recommendation: String,
}
