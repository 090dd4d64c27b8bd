//! Soil Nitrogen Supply lookup tables (RB209 Section 4 and Section 6).

use crate::models::{NResidue, Rainfall, SoilType, VegPreviousCrop, VegRainfall, VegSoilType};

/// Field assessment SNS index by N residue, soil and excess winter rainfall
/// (low, medium, high).
pub fn field_assessment(residue: NResidue, soil: SoilType, rainfall: Rainfall) -> u8 {
    let row: [u8; 3] = match (residue, soil) {
        (NResidue::Low, SoilType::Light) => [1, 0, 0],
        (NResidue::Low, SoilType::Medium) => [1, 1, 1],
        (NResidue::Low, SoilType::Heavy) => [2, 2, 1],
        (NResidue::Low, SoilType::Organic) => [3, 2, 2],
        (NResidue::Medium, SoilType::Light) => [2, 1, 1],
        (NResidue::Medium, SoilType::Medium) => [3, 2, 2],
        (NResidue::Medium, SoilType::Heavy) => [3, 3, 2],
        (NResidue::Medium, SoilType::Organic) => [4, 3, 3],
        (NResidue::High, SoilType::Light) => [3, 2, 1],
        (NResidue::High, SoilType::Medium) => [4, 3, 2],
        (NResidue::High, SoilType::Heavy) => [4, 3, 3],
        (NResidue::High, SoilType::Organic) => [5, 4, 3],
        (NResidue::VeryHigh, SoilType::Light) => [4, 3, 2],
        (NResidue::VeryHigh, SoilType::Medium) => [5, 4, 3],
        (NResidue::VeryHigh, SoilType::Heavy) => [5, 4, 4],
        (NResidue::VeryHigh, SoilType::Organic) => [6, 5, 4],
    };

    match rainfall {
        Rainfall::Low => row[0],
        Rainfall::Medium => row[1],
        Rainfall::High => row[2],
    }
}

/// Soil grouping of Table 4.6. Heavy soils split on rainfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeySoil {
    Light,
    Medium,
    HeavyLowRainfall,
    HeavyModerateHighRainfall,
}

impl LeySoil {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeySoil::Light => "light",
            LeySoil::Medium => "medium",
            LeySoil::HeavyLowRainfall => "heavy-low",
            LeySoil::HeavyModerateHighRainfall => "heavy-medium-high",
        }
    }
}

/// Management rows of Table 4.6, least to most N residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeyRow {
    LowNOrCut,
    HighNGrazedOrMixed,
    HighNGrazedThreeToFiveYears,
}

impl LeyRow {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeyRow::LowNOrCut => "low-n-or-cut",
            LeyRow::HighNGrazedOrMixed => "high-n-grazed-or-mixed",
            LeyRow::HighNGrazedThreeToFiveYears => "high-n-grazed-35yr",
        }
    }
}

/// SNS index in years 1, 2 and 3 after ploughing out a ley (Table 4.6).
pub fn grass_ley(soil: LeySoil, row: LeyRow) -> [u8; 3] {
    use LeyRow::*;
    use LeySoil::*;

    match (soil, row) {
        (Light, LowNOrCut) => [0, 0, 0],
        (Light, HighNGrazedOrMixed) => [1, 2, 1],
        (Light, HighNGrazedThreeToFiveYears) => [3, 2, 1],
        (Medium, LowNOrCut) => [1, 1, 1],
        (Medium, HighNGrazedOrMixed) => [2, 2, 1],
        (Medium, HighNGrazedThreeToFiveYears) => [3, 3, 2],
        (HeavyLowRainfall, LowNOrCut) => [2, 2, 2],
        (HeavyLowRainfall, HighNGrazedOrMixed) => [3, 3, 2],
        (HeavyLowRainfall, HighNGrazedThreeToFiveYears) => [5, 4, 3],
        (HeavyModerateHighRainfall, LowNOrCut) => [1, 1, 1],
        (HeavyModerateHighRainfall, HighNGrazedOrMixed) => [3, 2, 1],
        (HeavyModerateHighRainfall, HighNGrazedThreeToFiveYears) => [4, 3, 2],
    }
}

/// Table 4.10: (inclusive upper bound in kg N/ha, SNS index). Above the last bound is Index 6.
pub const SNS_VALUE_THRESHOLDS: [(f64, u8); 6] = [
    (60.0, 0),
    (80.0, 1),
    (100.0, 2),
    (120.0, 3),
    (160.0, 4),
    (240.0, 5),
];

/// Vegetable SNS index (Tables 6.2-6.4). Returns `None` for organic and peat
/// soils, which are advisory-only.
pub fn vegetable(previous: VegPreviousCrop, soil: VegSoilType, rainfall: VegRainfall) -> Option<u8> {
    use VegPreviousCrop::*;

    let col = match soil {
        VegSoilType::LightSand => 0,
        VegSoilType::Medium => 1,
        VegSoilType::DeepClay => 2,
        VegSoilType::DeepSilt => 3,
        VegSoilType::Organic | VegSoilType::Peat => return None,
    };

    // Columns: light-sand, medium, deep-clay, deep-silt.
    let row: [u8; 4] = match rainfall {
        VegRainfall::Low => match previous {
            Beans => [1, 2, 3, 3],
            Cereals => [0, 1, 2, 2],
            ForageCut => [0, 1, 2, 2],
            OilseedRape => [1, 2, 3, 3],
            Peas => [1, 2, 3, 3],
            Potatoes => [1, 2, 3, 3],
            SugarBeet => [1, 1, 2, 2],
            Uncropped => [1, 2, 3, 3],
            VegLowN => [0, 1, 2, 2],
            VegMediumN => [1, 3, 3, 3],
            VegHighN => [2, 4, 4, 4],
        },
        VegRainfall::Moderate => match previous {
            Beans => [1, 2, 2, 3],
            Cereals => [0, 1, 1, 1],
            ForageCut => [0, 1, 1, 1],
            OilseedRape => [0, 2, 2, 2],
            Peas => [1, 2, 2, 3],
            Potatoes => [0, 2, 2, 2],
            SugarBeet => [0, 1, 1, 1],
            Uncropped => [1, 2, 2, 2],
            VegLowN => [0, 1, 1, 1],
            VegMediumN => [0, 2, 3, 3],
            VegHighN => [1, 3, 4, 4],
        },
        VegRainfall::High => match previous {
            Beans => [0, 1, 2, 2],
            Cereals => [0, 1, 1, 1],
            ForageCut => [0, 1, 1, 1],
            OilseedRape => [0, 1, 1, 2],
            Peas => [0, 1, 2, 2],
            Potatoes => [0, 1, 1, 2],
            SugarBeet => [0, 1, 1, 1],
            Uncropped => [0, 1, 1, 2],
            VegLowN => [0, 1, 1, 1],
            VegMediumN => [0, 1, 1, 2],
            VegHighN => [1, 2, 2, 3],
        },
    };

    Some(row[col])
}

/// Representative index and advisory for soils the vegetable tables do not cover.
pub fn vegetable_advisory(soil: VegSoilType) -> Option<(u8, &'static str)> {
    match soil {
        VegSoilType::Organic => Some((
            4,
            "Organic soils release large and variable amounts of nitrogen; SNS Index 4 \
             is a typical value. Take SMN samples or consult a FACTS Qualified Adviser \
             before finalising N rates.",
        )),
        VegSoilType::Peat => Some((
            5,
            "Peat soils mineralise large amounts of nitrogen; SNS Index 5 is a typical \
             value. Take SMN samples or consult a FACTS Qualified Adviser before \
             finalising N rates.",
        )),
        _ => None,
    }
}

/// Table 6.6 thresholds for a sampling depth in cm: (inclusive upper bound, index).
pub fn vegetable_smn_thresholds(depth_cm: u32) -> Option<[(f64, u8); 6]> {
    match depth_cm {
        30 => Some([(19.9, 0), (27.0, 1), (33.0, 2), (40.0, 3), (53.0, 4), (80.0, 5)]),
        60 => Some([(39.9, 0), (53.0, 1), (67.0, 2), (80.0, 3), (107.0, 4), (160.0, 5)]),
        90 => Some([(59.9, 0), (80.0, 1), (100.0, 2), (120.0, 3), (160.0, 4), (240.0, 5)]),
        _ => None,
    }
}

pub const VEG_SMN_DEPTHS: [u32; 3] = [30, 60, 90];
