// ABOUTME: Weekly mood history and statistics over the append-only mood journal
// ABOUTME: Computes distribution, most frequent mood, and average score with explicit scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

use crate::store::MoodLogStore;
use burjo_core::errors::AppResult;
use burjo_core::models::{MoodLog, MoodType};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Aggregate view of a set of mood entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodStatistics {
    /// Number of entries
    pub total_entries: usize,
    /// Entry count per mood, keyed by display label
    pub distribution: BTreeMap<String, usize>,
    /// Most frequent mood, earliest-declared on ties
    pub most_frequent: Option<MoodType>,
    /// Mean mood score rounded to two decimals (lower is better), zero when empty
    pub average_score: f64,
}

/// Mood entries for one week plus their statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMoodHistory {
    /// First instant of the week
    pub week_start: DateTime<Utc>,
    /// Last instant of the week
    pub week_end: DateTime<Utc>,
    /// Entries, newest first
    pub entries: Vec<MoodLog>,
    /// Statistics over `entries`
    pub statistics: MoodStatistics,
}

/// Monday of the week containing `date`
#[must_use]
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Inclusive bounds of the seven days starting at midnight UTC on `start`
#[must_use]
pub fn week_bounds(start: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let week_start = Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN));
    let week_end = week_start + Duration::days(7) - Duration::nanoseconds(1);
    (week_start, week_end)
}

/// Half-open bounds `[today 00:00, tomorrow 00:00)` in UTC for the day containing `now`
#[must_use]
pub fn utc_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN));
    (start, start + Duration::days(1))
}

/// Compute statistics for `entries`; order of entries does not matter.
/// The average is rounded to two decimals with ties to even.
#[must_use]
pub fn compute_statistics(entries: &[MoodLog]) -> MoodStatistics {
    let mut distribution = BTreeMap::new();
    let mut most_frequent: Option<(MoodType, usize)> = None;

    for mood in MoodType::ALL {
        let count = entries.iter().filter(|e| e.mood == mood).count();
        if count == 0 {
            continue;
        }
        distribution.insert(mood.label().to_owned(), count);
        let beats_current = match most_frequent {
            Some((_, best)) => count > best,
            None => true,
        };
        if beats_current {
            most_frequent = Some((mood, count));
        }
    }

    let average_score = if entries.is_empty() {
        0.0
    } else {
        let total: u32 = entries.iter().map(|e| u32::from(e.mood.score())).sum();
        (f64::from(total) / entries.len() as f64 * 100.0).round_ties_even() / 100.0
    };

    MoodStatistics {
        total_entries: entries.len(),
        distribution,
        most_frequent: most_frequent.map(|(mood, _)| mood),
        average_score,
    }
}

/// Mood journal operations and weekly aggregation
#[derive(Clone)]
pub struct MoodAggregator {
    store: Arc<dyn MoodLogStore>,
}

impl MoodAggregator {
    /// Create an aggregator over `store`
    #[must_use]
    pub fn new(store: Arc<dyn MoodLogStore>) -> Self {
        Self { store }
    }

    /// History for the week starting at `week_start`, or the current ISO week
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn weekly_history(
        &self,
        user_id: Uuid,
        week_start: Option<NaiveDate>,
    ) -> AppResult<WeeklyMoodHistory> {
        self.weekly_history_at(user_id, week_start, Utc::now()).await
    }

    /// [`Self::weekly_history`] with an explicit current time
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn weekly_history_at(
        &self,
        user_id: Uuid,
        week_start: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> AppResult<WeeklyMoodHistory> {
        let start_date = week_start.unwrap_or_else(|| monday_of(now.date_naive()));
        let (start, end) = week_bounds(start_date);

        let mut entries = self.store.get_mood_logs(user_id, start, end).await?;
        entries.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        let statistics = compute_statistics(&entries);

        Ok(WeeklyMoodHistory {
            week_start: start,
            week_end: end,
            entries,
            statistics,
        })
    }

    /// Append a new mood entry
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert
    pub async fn log_mood(
        &self,
        user_id: Uuid,
        mood: MoodType,
        notes: Option<String>,
    ) -> AppResult<MoodLog> {
        let log = self.store.insert_mood_log(user_id, mood, notes).await?;
        info!(user_id = %user_id, mood = mood.as_str(), "Mood logged");
        Ok(log)
    }

    /// Most recent entry, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn latest_mood(&self, user_id: Uuid) -> AppResult<Option<MoodLog>> {
        self.store.get_latest_mood_log(user_id).await
    }

    /// Whether the user logged a mood during the current UTC day
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn has_logged_today(&self, user_id: Uuid) -> AppResult<bool> {
        self.store.has_mood_log_today(user_id).await
    }
}
