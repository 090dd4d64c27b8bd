use super::crop::Crop;
use super::soil::{FruitSoilCategory, OrchardManagement, SoilType};
use crate::error::{unknown_option, Result};
use serde::{Deserialize, Serialize};

/// What happens to cereal straw; changes the potash table used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Straw {
    #[default]
    Removed,
    Incorporated,
}

impl Straw {
    pub fn as_str(&self) -> &'static str {
        match self {
            Straw::Removed => "removed",
            Straw::Incorporated => "incorporated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "removed" | "baled" => Some(Straw::Removed),
            "incorporated" => Some(Straw::Incorporated),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| unknown_option("straw option", s, ["removed", "incorporated"]))
    }
}

impl std::fmt::Display for Straw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which half of K Index 2 the soil analysis falls in (2- or 2+).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexHalf {
    #[default]
    Lower,
    Upper,
}

impl IndexHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexHalf::Lower => "2-",
            IndexHalf::Upper => "2+",
        }
    }
}

/// Final nutrient recommendation in kg/ha of N, P2O5, K2O, MgO, SO3 and Na2O.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRecommendation {
    pub crop: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub magnesium: f64,
    pub sulfur: f64,
    pub sodium: f64,
    pub notes: Vec<String>,
}

impl NutrientRecommendation {
    pub fn new(crop: &str) -> Self {
        Self {
            crop: crop.to_string(),
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            magnesium: 0.0,
            sulfur: 0.0,
            sodium: 0.0,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));
        self
    }
}

/// Inputs for a full arable/grassland/vegetable recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub crop: Crop,
    pub sns_index: i32,
    pub p_index: i32,
    pub k_index: i32,
    pub mg_index: i32,
    pub straw: Straw,
    pub soil_type: Option<SoilType>,
    pub expected_yield: Option<f64>,
    pub ber: Option<f64>,
    pub k_half: IndexHalf,
}

impl RecommendRequest {
    pub fn new(crop: Crop, sns_index: i32, p_index: i32, k_index: i32) -> Self {
        Self {
            crop,
            sns_index,
            p_index,
            k_index,
            mg_index: 2,
            straw: Straw::Removed,
            soil_type: None,
            expected_yield: None,
            ber: None,
            k_half: IndexHalf::Lower,
        }
    }

    pub fn with_mg_index(mut self, mg_index: i32) -> Self {
        self.mg_index = mg_index;
        self
    }

    pub fn with_straw(mut self, straw: Straw) -> Self {
        self.straw = straw;
        self
    }

    pub fn with_soil_type(mut self, soil_type: SoilType) -> Self {
        self.soil_type = Some(soil_type);
        self
    }

    pub fn with_expected_yield(mut self, expected_yield: f64) -> Self {
        self.expected_yield = Some(expected_yield);
        self
    }

    pub fn with_ber(mut self, ber: f64) -> Self {
        self.ber = Some(ber);
        self
    }

    pub fn with_k_half(mut self, k_half: IndexHalf) -> Self {
        self.k_half = k_half;
        self
    }
}

/// Inputs for a fruit, vine or hop recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct FruitRequest {
    pub crop: Crop,
    pub soil_category: FruitSoilCategory,
    pub p_index: i32,
    pub k_index: i32,
    pub mg_index: i32,
    pub orchard_management: Option<OrchardManagement>,
    pub sns_index: Option<i32>,
}

impl FruitRequest {
    pub fn new(
        crop: Crop,
        soil_category: FruitSoilCategory,
        p_index: i32,
        k_index: i32,
        mg_index: i32,
    ) -> Self {
        Self {
            crop,
            soil_category,
            p_index,
            k_index,
            mg_index,
            orchard_management: None,
            sns_index: None,
        }
    }

    pub fn with_orchard_management(mut self, management: OrchardManagement) -> Self {
        self.orchard_management = Some(management);
        self
    }

    pub fn with_sns_index(mut self, sns_index: i32) -> Self {
        self.sns_index = Some(sns_index);
        self
    }
}
