use crate::error::{unknown_option, Result};
use serde::{Deserialize, Serialize};

/// Arable/grassland soil type used by the field assessment, nitrogen and lime tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Light,
    Medium,
    Heavy,
    Organic,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Light,
        SoilType::Medium,
        SoilType::Heavy,
        SoilType::Organic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Light => "light",
            SoilType::Medium => "medium",
            SoilType::Heavy => "heavy",
            SoilType::Organic => "organic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" | "sandy" => Some(SoilType::Light),
            "medium" => Some(SoilType::Medium),
            "heavy" | "clay" => Some(SoilType::Heavy),
            "organic" | "peaty" => Some(SoilType::Organic),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| unknown_option("soil type", s, Self::ALL.iter().map(|v| v.as_str())))
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Excess winter rainfall category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rainfall {
    Low,
    Medium,
    High,
}

impl Rainfall {
    pub const ALL: [Rainfall; 3] = [Rainfall::Low, Rainfall::Medium, Rainfall::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rainfall::Low => "low",
            Rainfall::Medium => "medium",
            Rainfall::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Rainfall::Low),
            "medium" => Some(Rainfall::Medium),
            "high" => Some(Rainfall::High),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("rainfall category", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for Rainfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Land use that selects a default target pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandUse {
    Arable,
    Grassland,
}

impl LandUse {
    pub const ALL: [LandUse; 2] = [LandUse::Arable, LandUse::Grassland];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandUse::Arable => "arable",
            LandUse::Grassland => "grassland",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "arable" => Some(LandUse::Arable),
            "grassland" | "grass" => Some(LandUse::Grassland),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| unknown_option("land use", s, Self::ALL.iter().map(|v| v.as_str())))
    }
}

impl std::fmt::Display for LandUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil classes of the vegetable SNS tables (Tables 6.2-6.4).
///
/// Organic and peat soils have no table entry; they resolve to an
/// advisory index instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VegSoilType {
    LightSand,
    Medium,
    DeepClay,
    DeepSilt,
    Organic,
    Peat,
}

impl VegSoilType {
    pub const ALL: [VegSoilType; 6] = [
        VegSoilType::LightSand,
        VegSoilType::Medium,
        VegSoilType::DeepClay,
        VegSoilType::DeepSilt,
        VegSoilType::Organic,
        VegSoilType::Peat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VegSoilType::LightSand => "light-sand",
            VegSoilType::Medium => "medium",
            VegSoilType::DeepClay => "deep-clay",
            VegSoilType::DeepSilt => "deep-silt",
            VegSoilType::Organic => "organic",
            VegSoilType::Peat => "peat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("vegetable soil type", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }

    pub fn is_advisory_only(&self) -> bool {
        matches!(self, VegSoilType::Organic | VegSoilType::Peat)
    }
}

impl std::fmt::Display for VegSoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rainfall classes of the vegetable SNS tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegRainfall {
    Low,
    Moderate,
    High,
}

impl VegRainfall {
    pub const ALL: [VegRainfall; 3] = [VegRainfall::Low, VegRainfall::Moderate, VegRainfall::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            VegRainfall::Low => "low",
            VegRainfall::Moderate => "moderate",
            VegRainfall::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(VegRainfall::Low),
            "moderate" => Some(VegRainfall::Moderate),
            "high" => Some(VegRainfall::High),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("vegetable rainfall category", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for VegRainfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil categories of the fruit nitrogen tables (Section 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FruitSoilCategory {
    LightSand,
    DeepSilt,
    Clay,
    #[serde(rename = "other-mineral")]
    Other,
}

impl FruitSoilCategory {
    pub const ALL: [FruitSoilCategory; 4] = [
        FruitSoilCategory::LightSand,
        FruitSoilCategory::DeepSilt,
        FruitSoilCategory::Clay,
        FruitSoilCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitSoilCategory::LightSand => "light-sand",
            FruitSoilCategory::DeepSilt => "deep-silt",
            FruitSoilCategory::Clay => "clay",
            FruitSoilCategory::Other => "other-mineral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("fruit soil category", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for FruitSoilCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Orchard floor management for top fruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrchardManagement {
    GrassStrip,
    OverallGrass,
}

impl OrchardManagement {
    pub const ALL: [OrchardManagement; 2] =
        [OrchardManagement::GrassStrip, OrchardManagement::OverallGrass];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrchardManagement::GrassStrip => "grass-strip",
            OrchardManagement::OverallGrass => "overall-grass",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "grass-strip" => Some(OrchardManagement::GrassStrip),
            "overall-grass" => Some(OrchardManagement::OverallGrass),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("orchard management", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for OrchardManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
