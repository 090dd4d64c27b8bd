//! Ground limestone constants (RB209 Section 1).

use crate::models::{LandUse, SoilType};

/// t/ha of ground limestone to raise pH by one unit.
pub fn factor(soil: SoilType) -> f64 {
    match soil {
        SoilType::Light => 4.0,
        SoilType::Medium => 5.5,
        SoilType::Heavy => 7.5,
        SoilType::Organic => 8.0,
    }
}

pub fn default_target_ph(land_use: LandUse) -> f64 {
    match land_use {
        LandUse::Arable => 6.5,
        LandUse::Grassland => 6.0,
    }
}

/// Largest single dressing in t/ha.
pub const MAX_SINGLE_APPLICATION: f64 = 7.5;

pub const CURRENT_PH_RANGE: (f64, f64) = (3.0, 9.0);
pub const TARGET_PH_RANGE: (f64, f64) = (4.0, 8.5);

/// Below this the soil is very acidic.
pub const VERY_ACIDIC_PH: f64 = 5.0;

pub const GRASSLAND_TRACE_ELEMENT_PH: f64 = 7.0;
pub const MANGANESE_PH: f64 = 7.5;
pub const SANDY_MANGANESE_PH: f64 = 6.5;
pub const ORGANIC_MANGANESE_PH: f64 = 6.0;
