use crate::data::organic::{material_info, AvailabilityTable};
use crate::error::{Rb209Error, Result};
use crate::models::{ApplicationTiming, ManureSoil, OrganicMaterial, OrganicResult, SoilType};

fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Light soils use the sandy/shallow column; everything else, including an
/// unknown soil, reads medium/heavy.
fn manure_soil(soil: Option<SoilType>) -> ManureSoil {
    match soil {
        Some(SoilType::Light) => ManureSoil::Sandy,
        _ => ManureSoil::MediumHeavy,
    }
}

/// Nutrients supplied by `rate` t/ha (or m3/ha for slurries) of `material`.
///
/// Without a timing, available N uses the material's flat first-year
/// coefficient. With one, the availability fraction for the timing, soil
/// column and incorporation replaces it.
pub fn calculate_organic(
    material: OrganicMaterial,
    rate: f64,
    timing: Option<ApplicationTiming>,
    incorporated: bool,
    soil_type: Option<SoilType>,
) -> Result<OrganicResult> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(Rb209Error::invalid(format!(
            "Application rate must be non-negative, got {}",
            rate
        )));
    }

    let info = material_info(material);
    let mut notes = Vec::new();

    let available_n = match timing {
        None => round1(info.available_n * rate),
        Some(timing) => {
            let table = AvailabilityTable::for_material(material).ok_or_else(|| {
                Rb209Error::invalid(format!(
                    "No timing/incorporation factors available for '{}'. \
                     Omit the timing to use the flat available N coefficient.",
                    material
                ))
            })?;
            let soil = manure_soil(soil_type);
            let fraction = table.fraction(timing, soil, incorporated).ok_or_else(|| {
                Rb209Error::invalid(format!(
                    "No N availability factor for '{}' applied in {} on {} soil with \
                     incorporated={}",
                    material,
                    timing,
                    soil.as_str(),
                    incorporated
                ))
            })?;
            tracing::debug!(
                material = material.as_str(),
                timing = timing.as_str(),
                soil = soil.as_str(),
                incorporated,
                fraction,
                "organic N availability"
            );
            notes.push(format!(
                "Available N assumes {}% of total N for {} application on {} soil{}.",
                round1(fraction * 100.0),
                timing,
                soil.as_str(),
                if incorporated { ", incorporated" } else { "" }
            ));
            round1(fraction * info.total_n * rate)
        }
    };

    Ok(OrganicResult {
        material: info.name.to_string(),
        rate,
        unit: format!("{}/ha", info.unit),
        total_n: round1(info.total_n * rate),
        available_n,
        p2o5: round1(info.p2o5 * rate),
        k2o: round1(info.k2o * rate),
        mgo: round1(info.mgo * rate),
        so3: round1(info.so3 * rate),
        notes,
    })
}
