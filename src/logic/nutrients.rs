//! Single-nutrient lookups with index clamping and table fallback.

use crate::data::{magnesium, nitrogen, phosphorus, potassium, sodium, sulfur};
use crate::error::{Rb209Error, Result};
use crate::logic::adjust::{self, YieldNutrient};
use crate::logic::index;
use crate::models::{Crop, CropCategory, IndexHalf, SoilType, Straw};

/// Nitrogen tables in the order they are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NitrogenSource {
    SoilSpecific,
    Generic,
    Vegetable,
}

impl NitrogenSource {
    const CHAIN: [NitrogenSource; 3] = [
        NitrogenSource::SoilSpecific,
        NitrogenSource::Generic,
        NitrogenSource::Vegetable,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            NitrogenSource::SoilSpecific => "soil-specific",
            NitrogenSource::Generic => "generic",
            NitrogenSource::Vegetable => "vegetable",
        }
    }

    fn lookup(&self, crop: Crop, sns: usize, soil: Option<SoilType>) -> Option<f64> {
        match self {
            NitrogenSource::SoilSpecific => nitrogen::soil_specific(crop, soil?)?[sns],
            NitrogenSource::Generic => nitrogen::generic(crop).map(|row| row[sns]),
            NitrogenSource::Vegetable => nitrogen::vegetable(crop).map(|row| row[sns]),
        }
    }
}

pub(crate) fn reject_fruit(crop: Crop) -> Result<()> {
    if crop.category() == CropCategory::Fruit {
        return Err(Rb209Error::invalid(format!(
            "'{}' is a fruit crop; use the fruit recommendation instead",
            crop
        )));
    }
    Ok(())
}

/// Table N before any yield or BER adjustment.
pub fn base_nitrogen(crop: Crop, sns_index: i32, soil_type: Option<SoilType>) -> Result<f64> {
    let sns = index::sns_index(sns_index)?;

    for source in NitrogenSource::CHAIN {
        if let Some(value) = source.lookup(crop, usize::from(sns), soil_type) {
            tracing::debug!(crop = crop.as_str(), sns, source = source.as_str(), value, "nitrogen");
            return Ok(value);
        }
    }

    let soil = soil_type
        .map(|s| format!(" on {} soil", s))
        .unwrap_or_default();
    Err(Rb209Error::invalid(format!(
        "No nitrogen data for crop '{}' at SNS {}{}",
        crop, sns, soil
    )))
}

/// kg N/ha. Yield adjustment runs first, then the break-even ratio; the
/// result is never negative.
pub fn recommend_nitrogen(
    crop: Crop,
    sns_index: i32,
    soil_type: Option<SoilType>,
    expected_yield: Option<f64>,
    ber: Option<f64>,
) -> Result<f64> {
    let base = base_nitrogen(crop, sns_index, soil_type)?;
    let mut n = adjust::apply_yield(crop, base, expected_yield, YieldNutrient::Nitrogen)?;
    if let Some(ber) = ber {
        n += adjust::ber_delta(crop, ber)?;
    }
    Ok(n.max(0.0))
}

/// kg P2O5/ha.
pub fn recommend_phosphorus(crop: Crop, p_index: i32, expected_yield: Option<f64>) -> Result<f64> {
    let p = index::soil_index("P index", p_index, phosphorus::MAX_INDEX)?;
    let row = phosphorus::generic(crop)
        .or_else(|| phosphorus::vegetable(crop))
        .ok_or_else(|| Rb209Error::invalid(format!("No phosphorus data for crop '{}'", crop)))?;
    adjust::apply_yield(crop, row[usize::from(p)], expected_yield, YieldNutrient::Phosphorus)
}

/// kg K2O/ha. Cereals use the straw table; vegetables at K Index 2 can take
/// the upper-half (2+) value.
pub fn recommend_potassium(
    crop: Crop,
    k_index: i32,
    straw: Straw,
    k_half: IndexHalf,
    expected_yield: Option<f64>,
) -> Result<f64> {
    let k = index::soil_index("K index", k_index, potassium::MAX_INDEX)?;

    let upper = if k == 2 && k_half == IndexHalf::Upper {
        potassium::vegetable_k2_upper(crop)
    } else {
        None
    };

    let base = match upper {
        Some(value) => value,
        None => {
            let row = potassium::cereal(crop, straw)
                .or_else(|| potassium::generic(crop))
                .or_else(|| potassium::vegetable(crop))
                .ok_or_else(|| {
                    Rb209Error::invalid(format!("No potassium data for crop '{}'", crop))
                })?;
            row[usize::from(k)]
        }
    };

    adjust::apply_yield(crop, base, expected_yield, YieldNutrient::Potassium)
}

/// kg MgO/ha. Vegetables use their own, higher, table.
pub fn recommend_magnesium(crop: Crop, mg_index: i32) -> Result<f64> {
    reject_fruit(crop)?;
    let mg = index::soil_index("Mg index", mg_index, magnesium::MAX_INDEX)?;
    let table = if crop.category() == CropCategory::Vegetables {
        &magnesium::VEGETABLE
    } else {
        &magnesium::ARABLE
    };
    Ok(table[usize::from(mg)])
}

/// kg SO3/ha for S-responsive situations.
pub fn recommend_sulfur(crop: Crop) -> Result<f64> {
    Ok(sulfur::recommendation(crop))
}

/// kg Na2O/ha. Sugar beet is keyed by K Index, which is then required.
pub fn recommend_sodium(crop: Crop, k_index: Option<i32>) -> Result<f64> {
    let k = k_index
        .map(|k| index::soil_index("K index", k, sodium::SUGAR_BEET_MAX_K_INDEX))
        .transpose()?;

    Ok(match crop {
        Crop::SugarBeet => {
            let k = k.ok_or_else(|| {
                Rb209Error::invalid("K index is required for the sugar beet sodium recommendation")
            })?;
            sodium::SUGAR_BEET_BY_K_INDEX[usize::from(k)]
        }
        Crop::VegAsparagus => sodium::ASPARAGUS_RATE,
        c if c.category() == CropCategory::Grassland => sodium::GRASSLAND_RATE,
        _ => 0.0,
    })
}
