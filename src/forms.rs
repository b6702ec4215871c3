use serde::Deserialize;

use crate::error::AppError;
use crate::model::FEATURE_COUNT;

/// Raw form submission. Fields stay optional strings so that missing or
/// non-numeric values surface as typed errors instead of a framework
/// fault page.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub hours_studied: Option<String>,
    pub previous_scores: Option<String>,
    pub extracurricular_activities: Option<String>,
    pub sleep_hours: Option<String>,
    pub sample_question_papers: Option<String>,
}

/// A fully parsed prediction request, not yet range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub hours_studied: f64,
    pub previous_scores: f64,
    pub extracurricular: f64,
    pub sleep_hours: f64,
    pub sample_question_papers: f64,
}

fn numeric(value: Option<String>, field: &'static str) -> Result<f64, AppError> {
    let raw = value.ok_or(AppError::MissingField(field))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidNumber(field))
}

impl PredictForm {
    /// Fields are read in form order, so the first absent one is the one
    /// named in the error.
    pub fn parse(self) -> Result<PredictionRequest, AppError> {
        let hours_studied = numeric(self.hours_studied, "hours_studied")?;
        let previous_scores = numeric(self.previous_scores, "previous_scores")?;
        let extracurricular = self
            .extracurricular_activities
            .ok_or(AppError::MissingField("extracurricular_activities"))?;
        let sleep_hours = numeric(self.sleep_hours, "sleep_hours")?;
        let sample_question_papers =
            numeric(self.sample_question_papers, "sample_question_papers")?;

        Ok(PredictionRequest {
            hours_studied,
            previous_scores,
            // Only the exact string "Yes" counts; "No" and anything else is 0.
            extracurricular: if extracurricular == "Yes" { 1.0 } else { 0.0 },
            sleep_hours,
            sample_question_papers,
        })
    }
}

impl PredictionRequest {
    /// Range checks in fixed order, stopping at the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=24.0).contains(&self.hours_studied) {
            return Err("Hours Studied must be between 0 and 24.".to_string());
        }
        if !(0.0..=100.0).contains(&self.previous_scores) {
            return Err("Previous Scores must be between 0 and 100.".to_string());
        }
        let sleep_limit = 24.0 - self.hours_studied;
        if !(0.0..=sleep_limit).contains(&self.sleep_hours) {
            return Err(format!("Sleep Hours must be between 0 and {sleep_limit}."));
        }
        // Written with `!(.. >= ..)` so NaN fails like the range checks above.
        if !(self.sample_question_papers >= 0.0) {
            return Err("Sample Question Papers Practiced must be non-negative.".to_string());
        }
        Ok(())
    }

    pub fn to_features(&self) -> [f32; FEATURE_COUNT] {
        [
            self.hours_studied as f32,
            self.previous_scores as f32,
            self.extracurricular as f32,
            self.sleep_hours as f32,
            self.sample_question_papers as f32,
        ]
    }
}
