use crate::error::{unknown_option, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganicMaterial {
    CattleFym,
    PigFym,
    SheepFym,
    HorseFym,
    PoultryLitter,
    LayerManure,
    CattleSlurry,
    PigSlurry,
    GreenCompost,
    GreenFoodCompost,
    BiosolidsCake,
    PaperCrumble,
}

impl OrganicMaterial {
    pub const ALL: [OrganicMaterial; 12] = [
        OrganicMaterial::CattleFym,
        OrganicMaterial::PigFym,
        OrganicMaterial::SheepFym,
        OrganicMaterial::HorseFym,
        OrganicMaterial::PoultryLitter,
        OrganicMaterial::LayerManure,
        OrganicMaterial::CattleSlurry,
        OrganicMaterial::PigSlurry,
        OrganicMaterial::GreenCompost,
        OrganicMaterial::GreenFoodCompost,
        OrganicMaterial::BiosolidsCake,
        OrganicMaterial::PaperCrumble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrganicMaterial::CattleFym => "cattle-fym",
            OrganicMaterial::PigFym => "pig-fym",
            OrganicMaterial::SheepFym => "sheep-fym",
            OrganicMaterial::HorseFym => "horse-fym",
            OrganicMaterial::PoultryLitter => "poultry-litter",
            OrganicMaterial::LayerManure => "layer-manure",
            OrganicMaterial::CattleSlurry => "cattle-slurry",
            OrganicMaterial::PigSlurry => "pig-slurry",
            OrganicMaterial::GreenCompost => "green-compost",
            OrganicMaterial::GreenFoodCompost => "green-food-compost",
            OrganicMaterial::BiosolidsCake => "biosolids-cake",
            OrganicMaterial::PaperCrumble => "paper-crumble",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|m| m.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("organic material", s, Self::ALL.iter().map(|m| m.as_str()))
        })
    }
}

impl std::fmt::Display for OrganicMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Season of application for the nitrogen availability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationTiming {
    Autumn,
    Winter,
    Spring,
    Summer,
}

impl ApplicationTiming {
    pub const ALL: [ApplicationTiming; 4] = [
        ApplicationTiming::Autumn,
        ApplicationTiming::Winter,
        ApplicationTiming::Spring,
        ApplicationTiming::Summer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationTiming::Autumn => "autumn",
            ApplicationTiming::Winter => "winter",
            ApplicationTiming::Spring => "spring",
            ApplicationTiming::Summer => "summer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("application timing", s, Self::ALL.iter().map(|t| t.as_str()))
        })
    }
}

impl std::fmt::Display for ApplicationTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil grouping of the manure N availability tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManureSoil {
    Sandy,
    MediumHeavy,
}

impl ManureSoil {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManureSoil::Sandy => "sandy/shallow",
            ManureSoil::MediumHeavy => "medium/heavy",
        }
    }
}

/// Nutrients supplied by an organic material application (kg/ha).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganicResult {
    pub material: String,
    pub rate: f64,
    pub unit: String,
    pub total_n: f64,
    pub available_n: f64,
    pub p2o5: f64,
    pub k2o: f64,
    pub mgo: f64,
    pub so3: f64,
    pub notes: Vec<String>,
}
