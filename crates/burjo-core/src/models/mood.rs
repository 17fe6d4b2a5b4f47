// ABOUTME: Mood enumeration and mood log entries
// ABOUTME: Scores are explicit per variant so reordering the enum cannot shift statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Self-reported mood, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodType {
    /// Very good
    SangatBaik,
    /// Good
    Baik,
    /// Neutral
    Sedang,
    /// Bad
    Buruk,
}

impl MoodType {
    /// All moods in declaration order. Tie-breaking in statistics follows this order.
    pub const ALL: [Self; 4] = [Self::SangatBaik, Self::Baik, Self::Sedang, Self::Buruk];

    /// Numeric score used for averaging. Lower is better.
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::SangatBaik => 1,
            Self::Baik => 2,
            Self::Sedang => 3,
            Self::Buruk => 4,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SangatBaik => "Sangat Baik",
            Self::Baik => "Baik",
            Self::Sedang => "Sedang",
            Self::Buruk => "Buruk",
        }
    }

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SangatBaik => "sangat_baik",
            Self::Baik => "baik",
            Self::Sedang => "sedang",
            Self::Buruk => "buruk",
        }
    }

    /// Parse from database string representation
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for unknown values
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sangat_baik" => Ok(Self::SangatBaik),
            "baik" => Ok(Self::Baik),
            "sedang" => Ok(Self::Sedang),
            "buruk" => Ok(Self::Buruk),
            other => Err(AppError::invalid_input(format!("Unknown mood: {other}"))),
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in a user's mood journal. Entries are only ever inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLog {
    /// Entry identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Reported mood
    pub mood: MoodType,
    /// Optional free-text note
    pub notes: Option<String>,
    /// When the mood was logged (UTC)
    pub logged_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_follow_best_to_worst() {
        let scores: Vec<u8> = MoodType::ALL.iter().map(MoodType::score).collect();
        assert_eq!(scores, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let json = serde_json::to_string(&MoodType::SangatBaik).unwrap();
        assert_eq!(json, "\"sangat_baik\"");
        let parsed: MoodType = serde_json::from_str("\"buruk\"").unwrap();
        assert_eq!(parsed, MoodType::Buruk);
    }
}
