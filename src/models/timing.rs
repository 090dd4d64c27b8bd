use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingSplit {
    pub amount: f64,
    pub timing: String,
}

/// Split-dressing schedule. Split amounts always sum to `round(total_n)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NitrogenTimingResult {
    pub crop: String,
    pub total_n: f64,
    pub splits: Vec<TimingSplit>,
    pub notes: Vec<String>,
}

impl NitrogenTimingResult {
    pub fn allocated(&self) -> f64 {
        self.splits.iter().map(|s| s.amount).sum()
    }
}
