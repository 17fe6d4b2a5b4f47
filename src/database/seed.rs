// ABOUTME: Reference exercise catalog inserted on first boot
// ABOUTME: Four exercises per risk category, written only when the catalog is empty

use super::{encode_timestamp, ExerciseManager};
use crate::errors::{AppError, AppResult};
use burjo_core::models::RiskCategory;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

/// `(name, description, category)` for each reference exercise
pub const REFERENCE_EXERCISES: &[(&str, &str, RiskCategory)] = &[
    (
        "Jalan Kaki",
        "Aktivitas jalan kaki ringan selama 20-30 menit dengan intensitas rendah. Cocok untuk semua kalangan dan aman untuk pemula.",
        RiskCategory::Safe,
    ),
    (
        "Yoga",
        "Latihan yoga dengan gerakan dasar untuk meningkatkan fleksibilitas dan ketenangan pikiran. Fokus pada pernapasan dan peregangan ringan.",
        RiskCategory::Safe,
    ),
    (
        "Peregangan",
        "Latihan peregangan untuk meningkatkan fleksibilitas otot dan mengurangi ketegangan. Dapat dilakukan di rumah tanpa alat khusus.",
        RiskCategory::Safe,
    ),
    (
        "Tai Chi",
        "Gerakan lambat dan terkontrol yang membantu keseimbangan, koordinasi, dan relaksasi. Sangat aman untuk semua usia.",
        RiskCategory::Safe,
    ),
    (
        "Bersepeda Santai",
        "Bersepeda dengan intensitas ringan di jalur datar. Pantau detak jantung dan istirahat jika merasa lelah berlebihan.",
        RiskCategory::LightSupervision,
    ),
    (
        "Renang Ringan",
        "Berenang gaya bebas atau gaya dada dengan intensitas rendah. Pastikan ada pengawas dan tidak memaksakan diri.",
        RiskCategory::LightSupervision,
    ),
    (
        "Senam Aerobik Ringan",
        "Senam aerobik intensitas rendah dengan gerakan terkontrol, tanpa lompatan tinggi.",
        RiskCategory::LightSupervision,
    ),
    (
        "Latihan Beban Ringan",
        "Dumbbell atau resistance band dengan beban minimal. Repetisi tinggi, beban rendah.",
        RiskCategory::LightSupervision,
    ),
    (
        "Terapi Fisik Terpandu",
        "Program latihan yang dirancang fisioterapis. Harus dilakukan dengan pengawasan medis langsung.",
        RiskCategory::MedicalSupervision,
    ),
    (
        "Jalan Terapi",
        "Jalan kaki yang sangat terkontrol dengan pemantauan detak jantung dan tekanan darah secara berkala.",
        RiskCategory::MedicalSupervision,
    ),
    (
        "Latihan Pernapasan",
        "Teknik pernapasan khusus untuk meningkatkan kapasitas paru-paru, dengan pengawasan tenaga medis.",
        RiskCategory::MedicalSupervision,
    ),
    (
        "Rehabilitasi Kardiak",
        "Program pemulihan jantung. Hanya di fasilitas medis dengan pengawasan dokter spesialis.",
        RiskCategory::MedicalSupervision,
    ),
];

impl ExerciseManager {
    /// Insert the reference catalog if the table is empty
    ///
    /// Returns the number of rows inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert transaction fails
    pub async fn seed_reference_catalog(&self) -> AppResult<usize> {
        if self.count_exercises().await? > 0 {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin seed transaction: {e}")))?;
        let now = encode_timestamp(Utc::now());

        for (name, description, category) in REFERENCE_EXERCISES {
            sqlx::query(
                r"
                INSERT INTO exercises (id, name, description, category, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, NULL)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(*name)
            .bind(*description)
            .bind(category.as_str())
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed exercise {name}: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit seed transaction: {e}")))?;
        info!(count = REFERENCE_EXERCISES.len(), "Seeded reference exercise catalog");
        Ok(REFERENCE_EXERCISES.len())
    }
}
