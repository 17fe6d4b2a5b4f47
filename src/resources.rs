// ABOUTME: Centralized resource container for dependency injection into route handlers
// ABOUTME: Builds the database-backed engines, chat gate and emergency scanner once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Server Resources
//!
//! Every handler receives `State<Arc<ServerResources>>`. The intelligence
//! engines are wired to the database through the repository adapters here so
//! handlers never construct them per request.

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::repositories::{
    ExerciseCatalogRepositoryImpl, HealthProfileRepositoryImpl, MoodLogRepositoryImpl,
};
use crate::database::Database;
use burjo_intelligence::{
    ConversationalDispatcher, EmergencyKeywordScanner, MoodAggregator, OperatingHoursGate,
    RecommendationFilter, RiskAssessmentEngine,
};
use std::sync::Arc;

/// Shared server state
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle
    pub database: Arc<Database>,
    /// Token issuer and password hasher
    pub auth_manager: Arc<AuthManager>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Risk categorization
    pub risk_engine: RiskAssessmentEngine,
    /// Exercise recommendations
    pub recommendations: RecommendationFilter,
    /// Mood journal and weekly statistics
    pub moods: MoodAggregator,
    /// Chat intent dispatcher
    pub dispatcher: ConversationalDispatcher,
    /// Chat operating-hours gate
    pub hours_gate: Arc<OperatingHoursGate>,
    /// Chat emergency phrase scanner
    pub emergency_scanner: Arc<EmergencyKeywordScanner>,
}

impl ServerResources {
    /// Wire up engines over `database`
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let risk_engine =
            RiskAssessmentEngine::new(Arc::new(HealthProfileRepositoryImpl::new(database.clone())));
        let recommendations = RecommendationFilter::new(
            risk_engine.clone(),
            Arc::new(ExerciseCatalogRepositoryImpl::new(database.clone())),
        );
        let moods = MoodAggregator::new(Arc::new(MoodLogRepositoryImpl::new(database.clone())));
        let dispatcher =
            ConversationalDispatcher::new(risk_engine.clone(), recommendations.clone(), moods.clone());

        let hours_gate = Arc::new(OperatingHoursGate::new(
            config.chat.operating_hours.clone(),
        ));
        let emergency_scanner = Arc::new(EmergencyKeywordScanner::new(
            &config.chat.emergency_keywords,
            config.chat.emergency_message.clone(),
        ));

        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            config,
            risk_engine,
            recommendations,
            moods,
            dispatcher,
            hours_gate,
            emergency_scanner,
        }
    }
}
