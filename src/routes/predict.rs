use serde::{Deserialize, Serialize};

// =========================================================
// What-if prediction types
// =========================================================

/// Prediction for one hypothetical course folded into prior academic history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionData {
    pub total_percent: f64,
    pub grade: String,
    /// Grade point of the hypothetical course itself.
    pub grade_point: f64,
    pub remark: String,
    pub predicted_cgpa: f64,
    /// `predicted_cgpa - previous_cgpa`, rounded to 2 decimals.
    pub cgpa_change: f64,
}

/// Route function name constant for prediction
pub const PREDICT: &str = "predict";
