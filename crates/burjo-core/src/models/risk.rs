// ABOUTME: Risk category enumeration and the assessment value produced by the rule engine
// ABOUTME: Severity is an explicit function so sorting never depends on declaration order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health risk category driving exercise eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// No supervision needed
    Safe,
    /// Start light and self-monitor
    LightSupervision,
    /// Consult a clinician before exercising
    MedicalSupervision,
}

impl RiskCategory {
    /// Every category, mildest first
    pub const ALL: [Self; 3] = [Self::Safe, Self::LightSupervision, Self::MedicalSupervision];

    /// Severity rank used for ordering (0 = mildest)
    #[must_use]
    pub const fn severity(&self) -> u8 {
        match self {
            Self::Safe => 0,
            Self::LightSupervision => 1,
            Self::MedicalSupervision => 2,
        }
    }

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::LightSupervision => "light_supervision",
            Self::MedicalSupervision => "medical_supervision",
        }
    }

    /// Label shown to users
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Safe => "Aman",
            Self::LightSupervision => "Pengawasan Ringan",
            Self::MedicalSupervision => "Supervisi Medis",
        }
    }

    /// Parse from database string representation
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for unknown values
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Ok(Self::Safe),
            "light_supervision" => Ok(Self::LightSupervision),
            "medical_supervision" => Ok(Self::MedicalSupervision),
            other => Err(AppError::invalid_input(format!(
                "Unknown risk category: {other}"
            ))),
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single risk assessment. Computed fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Resolved category
    pub category: RiskCategory,
    /// Advice shown to the user
    pub message: String,
    /// Reasons behind the decision, in evaluation order
    pub factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_category() {
        for category in RiskCategory::ALL {
            assert_eq!(RiskCategory::parse(category.as_str()).unwrap(), category);
        }
        assert!(RiskCategory::parse("critical").is_err());
    }

    #[test]
    fn test_severity_is_strictly_increasing() {
        let ranks: Vec<u8> = RiskCategory::ALL.iter().map(RiskCategory::severity).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }
}
