// ABOUTME: Decision core for the Burjo fitness backend
// ABOUTME: Risk assessment, recommendation filtering, mood statistics, and conversational dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

#![deny(unsafe_code)]

//! # Burjo Intelligence
//!
//! Stateless engines that turn stored health data into decisions. None of them
//! cache results: every call reads its inputs through the capability traits in
//! [`store`] and computes from scratch, so a concurrent health-condition write
//! is observed either entirely or not at all by the next call.

/// Capability traits the engines read and write through
pub mod store;

/// Rule engine mapping health conditions to a risk category
pub mod risk_assessment;

/// Category-aware exercise selection
pub mod recommendation;

/// Weekly mood statistics
pub mod mood_aggregator;

/// Keyword intent classification and canned replies
pub mod dispatcher;

/// Operating-hours gate and emergency keyword scan for chat
pub mod chat_gate;

#[cfg(test)]
pub(crate) mod test_support;

pub use chat_gate::{
    EmergencyKeywordScanner, GateStatus, HoursFallback, OperatingHoursGate, OperatingHoursSettings,
};
pub use dispatcher::{ChatReply, ConversationalDispatcher, Intent};
pub use mood_aggregator::{MoodAggregator, MoodStatistics, WeeklyMoodHistory};
pub use recommendation::{Recommendations, RecommendationFilter};
pub use risk_assessment::RiskAssessmentEngine;
pub use store::{ExerciseCatalog, HealthProfileStore, MoodLogStore};
