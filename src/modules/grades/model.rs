use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A recorded grade. `grade_letter` is always derived from `score` on the
/// server; whatever the client supplies is ignored.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subject: String,
    pub score: i32,
    pub grade_letter: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordGradeDto {
    pub student_id: i64,
    pub class_id: i64,
    #[validate(length(min = 1, message = "subject must not be empty"))]
    pub subject: String,
    #[validate(range(min = 0, max = 100, message = "score must be between 0 and 100"))]
    pub score: i32,
    /// Accepted for compatibility with older clients, never used.
    #[serde(default)]
    pub grade_letter: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradeEnvelope {
    pub success: bool,
    pub message: String,
    pub grade: Grade,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GradesListResponse {
    pub success: bool,
    pub count: usize,
    pub grades: Vec<Grade>,
}

/// Fixed thresholds, boundary inclusive: 90+ A, 80+ B, 70+ C, 60+ D,
/// everything below F.
pub fn grade_letter_for(score: i32) -> &'static str {
    match score {
        s if s >= 90 => "A",
        s if s >= 80 => "B",
        s if s >= 70 => "C",
        s if s >= 60 => "D",
        _ => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_letter_boundaries_inclusive() {
        assert_eq!(grade_letter_for(100), "A");
        assert_eq!(grade_letter_for(90), "A");
        assert_eq!(grade_letter_for(89), "B");
        assert_eq!(grade_letter_for(80), "B");
        assert_eq!(grade_letter_for(79), "C");
        assert_eq!(grade_letter_for(70), "C");
        assert_eq!(grade_letter_for(69), "D");
        assert_eq!(grade_letter_for(60), "D");
        assert_eq!(grade_letter_for(59), "F");
        assert_eq!(grade_letter_for(0), "F");
    }

    #[test]
    fn test_grade_letter_for_85_is_b() {
        assert_eq!(grade_letter_for(85), "B");
    }
}
