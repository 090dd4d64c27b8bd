use serde::Serialize;

/// Ground limestone requirement (t/ha) to move the soil from `current_ph` to `target_ph`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimeResult {
    pub current_ph: f64,
    pub target_ph: f64,
    pub soil_type: String,
    pub lime_required: f64,
    pub notes: Vec<String>,
}

impl LimeResult {
    pub fn new(current_ph: f64, target_ph: f64, soil_type: &str) -> Self {
        Self {
            current_ph,
            target_ph,
            soil_type: soil_type.to_string(),
            lime_required: 0.0,
            notes: Vec::new(),
        }
    }
}
