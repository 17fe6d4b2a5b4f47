// ABOUTME: Single-turn chat dispatcher with a prioritized keyword intent table
// ABOUTME: Personalized branches call the engines; failures become a generic apology
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! Conversational dispatcher
//!
//! Keywords match whole words, never substrings of a longer word.
//!
//! Messages are lowercased, trimmed, and split into words. The first entry of
//! [`INTENT_TABLE`] with a keyword present in the message decides the intent.
//! Multi-word keywords match consecutive words, so `"putus asa"` matches
//! "saya putus asa" but `"hi"` never matches "hipertensi".

use crate::mood_aggregator::MoodAggregator;
use crate::recommendation::RecommendationFilter;
use crate::risk_assessment::RiskAssessmentEngine;
use burjo_core::constants::chat_limits::MAX_RECOMMENDATIONS_IN_REPLY;
use burjo_core::errors::AppResult;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Recognized intents, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Salutations
    Greeting,
    /// Mood journal questions
    Mood,
    /// Exercise and recommendation questions
    Exercise,
    /// Health and risk questions
    Health,
    /// Requests for encouragement
    Motivation,
    /// Usage help
    Help,
}

/// Intent keyword table. Earlier rows win.
pub const INTENT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["halo", "hai", "hi", "hello", "selamat", "pagi", "siang", "sore", "malam"],
    ),
    (
        Intent::Mood,
        &["mood", "perasaan", "suasana hati", "bahagia", "sedih", "senang", "kesal"],
    ),
    (
        Intent::Exercise,
        &[
            "olahraga",
            "latihan",
            "senam",
            "fitness",
            "gym",
            "lari",
            "jalan",
            "yoga",
            "rekomendasi",
        ],
    ),
    (
        Intent::Health,
        &["kesehatan", "sehat", "sakit", "penyakit", "dokter", "medis", "risiko"],
    ),
    (
        Intent::Motivation,
        &["motivasi", "semangat", "malas", "lelah", "putus asa", "menyerah"],
    ),
    (
        Intent::Help,
        &["bantuan", "help", "bagaimana", "cara", "tolong", "panduan"],
    ),
];

const MOTIVATIONAL_QUOTES: &[&str] = &[
    "\"Kesehatan adalah kekayaan yang sesungguhnya, bukan emas atau perak.\" - Mahatma Gandhi",
    "\"Tubuh yang sehat adalah tempat jiwa yang bahagia.\" - Juvenal",
    "\"Perubahan dimulai dari langkah pertama, sekecil apa pun langkah itu.\"",
    "\"Konsistensi kecil mengalahkan usaha besar yang tidak konsisten.\"",
    "\"Investasi terbaik adalah investasi pada kesehatan diri sendiri.\"",
    "\"Setiap hari adalah kesempatan baru untuk menjadi versi terbaik dirimu.\"",
    "\"Tidak perlu menunggu sempurna. Mulai sekarang dengan apa yang kamu punya.\"",
];

const APOLOGY: &str = "Maaf, terjadi kesalahan saat menyiapkan jawaban. Silakan coba lagi nanti.";

/// A chat reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Reply text
    pub response: String,
    /// When the reply was composed
    pub timestamp: DateTime<Utc>,
    /// Optional next step for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<String>,
    /// Short follow-up prompts
    pub quick_replies: Vec<String>,
}

impl ChatReply {
    fn new(response: impl Into<String>, quick_replies: &[&str]) -> Self {
        Self {
            response: response.into(),
            timestamp: Utc::now(),
            suggested_actions: None,
            quick_replies: quick_replies.iter().map(|&q| q.to_owned()).collect(),
        }
    }

    fn with_action(mut self, action: impl Into<String>) -> Self {
        self.suggested_actions = Some(action.into());
        self
    }

    /// Generic apology used when a personalized branch fails
    #[must_use]
    pub fn apology() -> Self {
        Self::new(APOLOGY, &[])
    }
}

fn words(message: &str) -> Vec<&str> {
    message
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_keyword(words: &[&str], keyword: &str) -> bool {
    let phrase: Vec<&str> = keyword.split_whitespace().collect();
    !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase.as_slice())
}

/// Classify a message into an intent, or `None` when nothing matches
#[must_use]
pub fn classify(message: &str) -> Option<Intent> {
    let normalized = message.trim().to_lowercase();
    let words = words(&normalized);
    INTENT_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| contains_keyword(&words, k)))
        .map(|(intent, _)| *intent)
}

fn mentions_any(message: &str, keywords: &[&str]) -> bool {
    let words = words(message);
    keywords.iter().any(|k| contains_keyword(&words, k))
}

/// Stateless intent dispatcher
#[derive(Clone)]
pub struct ConversationalDispatcher {
    risk: RiskAssessmentEngine,
    recommendations: RecommendationFilter,
    moods: MoodAggregator,
}

impl ConversationalDispatcher {
    /// Create a dispatcher over the three engines
    #[must_use]
    pub fn new(
        risk: RiskAssessmentEngine,
        recommendations: RecommendationFilter,
        moods: MoodAggregator,
    ) -> Self {
        Self {
            risk,
            recommendations,
            moods,
        }
    }

    /// Compose a reply to `message` from `user_id`. Never fails.
    pub async fn dispatch(&self, user_id: Uuid, message: &str) -> ChatReply {
        let normalized = message.trim().to_lowercase();
        let Some(intent) = classify(&normalized) else {
            return Self::fallback();
        };

        let reply = match intent {
            Intent::Greeting => Ok(Self::greeting()),
            Intent::Mood => self.mood_reply(user_id, &normalized).await,
            Intent::Exercise => self.exercise_reply(user_id, &normalized).await,
            Intent::Health => self.health_reply(user_id, &normalized).await,
            Intent::Motivation => Ok(Self::motivation()),
            Intent::Help => Ok(Self::help()),
        };

        reply.unwrap_or_else(|e| {
            warn!(user_id = %user_id, intent = ?intent, error = %e, "Chat reply failed, sending apology");
            ChatReply::apology()
        })
    }

    /// Opening message for a new conversation
    #[must_use]
    pub fn welcome() -> ChatReply {
        ChatReply::new(
            "Selamat datang di asisten kesehatan Burjo! Saya bisa membantu mencatat mood, \
             memberi rekomendasi olahraga sesuai kondisi kesehatan, dan menyemangati Anda. \
             Mau mulai dari mana?",
            &["Cek mood hari ini", "Lihat rekomendasi olahraga", "Bantuan kesehatan", "Tips motivasi"],
        )
    }

    /// Overview of what the assistant can do
    #[must_use]
    pub fn help() -> ChatReply {
        ChatReply::new(
            "Saya siap membantu! Fitur utama:\n\
             - Mood tracking: catat dan pantau mood harian\n\
             - Rekomendasi olahraga: latihan sesuai kondisi kesehatan\n\
             - Jadwal olahraga: susun jadwal mingguan\n\
             - Penilaian risiko: kategori keamanan olahraga Anda\n\n\
             Anda juga bisa bertanya tentang tips hidup sehat, motivasi, atau cara memakai aplikasi.",
            &["Mulai mood tracking", "Lihat rekomendasi", "Buat jadwal", "Tips sehat"],
        )
    }

    fn fallback() -> ChatReply {
        ChatReply::new(
            "Maaf, saya belum memahami pertanyaan Anda. Berikut beberapa hal yang bisa saya bantu:",
            &["Cek mood", "Rekomendasi olahraga", "Tips kesehatan", "Motivasi", "Bantuan"],
        )
    }

    fn greeting() -> ChatReply {
        ChatReply::new(
            "Halo! Selamat datang di Burjo. Saya di sini untuk menemani perjalanan kesehatan \
             dan kebugaran Anda. Apa yang bisa saya bantu hari ini?",
            &["Cek mood hari ini", "Lihat rekomendasi olahraga", "Bantuan kesehatan", "Tips motivasi"],
        )
    }

    fn motivation() -> ChatReply {
        let quote = MOTIVATIONAL_QUOTES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default();
        ChatReply::new(
            format!(
                "Semangat! {quote}\n\nPerjalanan hidup sehat bukan soal sempurna, tapi soal \
                 konsistensi. Setiap langkah kecil hari ini adalah investasi untuk kesehatan Anda."
            ),
            &["Tips tetap semangat", "Mulai olahraga", "Catat mood baik"],
        )
    }

    async fn mood_reply(&self, user_id: Uuid, message: &str) -> AppResult<ChatReply> {
        let quick = ["Catat mood sekarang", "Lihat riwayat mood", "Tips mood baik"];
        if !mentions_any(message, &["cek", "lihat"]) {
            return Ok(ChatReply::new(
                "Mencatat mood setiap hari penting untuk kesehatan mental. Dengan begitu Anda \
                 bisa mengenali pola emosi dan apa saja yang memengaruhinya.",
                &quick,
            )
            .with_action("Jangan lupa catat mood Anda setiap hari ya!"));
        }

        let Some(latest) = self.moods.latest_mood(user_id).await? else {
            return Ok(ChatReply::new(
                "Anda belum pernah mencatat mood. Yuk mulai mencatat mood harian!",
                &quick,
            )
            .with_action("Buka halaman mood untuk mulai mencatat perasaan Anda."));
        };

        let logged_today = self.moods.has_logged_today(user_id).await?;
        let mut text = format!(
            "Mood terakhir Anda adalah '{}' pada {}. ",
            latest.mood.label(),
            latest.logged_at.format("%d/%m/%Y %H:%M")
        );
        if logged_today {
            text.push_str("Terima kasih sudah mencatat mood hari ini!");
            Ok(ChatReply::new(text, &quick))
        } else {
            text.push_str("Anda belum mencatat mood hari ini. Yuk catat sekarang!");
            Ok(ChatReply::new(text, &quick)
                .with_action("Buka halaman mood untuk mencatat perasaan Anda hari ini."))
        }
    }

    async fn exercise_reply(&self, user_id: Uuid, message: &str) -> AppResult<ChatReply> {
        if mentions_any(message, &["rekomendasi"]) {
            let result = self.recommendations.recommend_with_category(user_id).await?;
            let names: Vec<&str> = result
                .exercises
                .iter()
                .take(MAX_RECOMMENDATIONS_IN_REPLY)
                .map(|e| e.name.as_str())
                .collect();
            let text = if names.is_empty() {
                "Belum ada latihan di katalog untuk kategori Anda.".to_owned()
            } else {
                format!(
                    "Rekomendasi olahraga disesuaikan dengan kategori risiko Anda ({}). \
                     Latihan yang cocok: {}.",
                    result.category.display_label(),
                    names.join(", ")
                )
            };
            let reply = ChatReply::new(
                text,
                &["Lihat rekomendasi", "Buat jadwal olahraga", "Tips olahraga"],
            );
            return Ok(if result.fallback {
                reply.with_action(
                    "Lengkapi profil kesehatan Anda agar rekomendasi lebih sesuai.",
                )
            } else {
                reply
            });
        }

        if mentions_any(message, &["jadwal"]) {
            return Ok(ChatReply::new(
                "Jadwal olahraga rutin adalah kunci hidup sehat. Usahakan berolahraga 3-5 kali \
                 seminggu dengan durasi 30-60 menit per sesi.",
                &["Buat jadwal", "Lihat jadwal saya", "Tips konsisten olahraga"],
            )
            .with_action("Susun jadwal olahraga mingguan yang sesuai dengan aktivitas Anda."));
        }

        Ok(ChatReply::new(
            "Olahraga teratur memperbaiki mood, menguatkan jantung, menurunkan stres, dan \
             membuat tidur lebih nyenyak. Rekomendasi latihan di Burjo disesuaikan dengan \
             kategori risiko kesehatan Anda.",
            &["Rekomendasi olahraga", "Buat jadwal", "Motivasi olahraga"],
        ))
    }

    async fn health_reply(&self, user_id: Uuid, message: &str) -> AppResult<ChatReply> {
        if !mentions_any(message, &["risiko", "penilaian"]) {
            return Ok(ChatReply::new(
                "Kesehatan adalah investasi terbaik. Makan bergizi seimbang, olahraga teratur, \
                 tidur 7-8 jam, kelola stres, dan rutin periksa kesehatan.",
                &["Penilaian risiko", "Tips nutrisi", "Kelola stres"],
            ));
        }

        let assessment = self.risk.assess_for_user(user_id).await?;
        Ok(ChatReply::new(
            format!(
                "Kategori risiko Anda saat ini: {}. {}",
                assessment.category.display_label(),
                assessment.message
            ),
            &["Cek penilaian risiko", "Update data kesehatan", "Tips hidup sehat"],
        )
        .with_action("Pastikan data kesehatan Anda selalu terbaru agar penilaian akurat."))
    }
}
