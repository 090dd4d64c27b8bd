use crate::data::lime::{self as table, MAX_SINGLE_APPLICATION};
use crate::error::{Rb209Error, Result};
use crate::models::{Crop, LandUse, LimeResult, SoilType};

/// Ground limestone (t/ha) to raise soil pH to the target.
///
/// The target is the explicit `target_ph` when given, otherwise the default
/// for `land_use`. One of the two is required.
pub fn calculate_lime(
    current_ph: f64,
    target_ph: Option<f64>,
    soil_type: SoilType,
    land_use: Option<LandUse>,
    crop: Option<Crop>,
) -> Result<LimeResult> {
    let target_ph = match (target_ph, land_use) {
        (Some(ph), _) => ph,
        (None, Some(land_use)) => table::default_target_ph(land_use),
        (None, None) => {
            return Err(Rb209Error::invalid(
                "Either a target pH or a land use (arable, grassland) must be provided",
            ))
        }
    };

    check_range("Current pH", current_ph, table::CURRENT_PH_RANGE)?;
    check_range("Target pH", target_ph, table::TARGET_PH_RANGE)?;

    let mut result = LimeResult::new(current_ph, target_ph, soil_type.as_str());

    if current_ph >= target_ph {
        result
            .notes
            .push("Soil pH is already at or above target. No lime required.".to_string());
        return Ok(result);
    }

    let lime = ((target_ph - current_ph) * table::factor(soil_type) * 10.0).round_ties_even() / 10.0;
    result.lime_required = lime;

    if lime > MAX_SINGLE_APPLICATION {
        result.notes.push(format!(
            "Total lime required ({} t/ha) exceeds the single application maximum ({} t/ha). \
             Apply in split dressings over successive years.",
            lime, MAX_SINGLE_APPLICATION
        ));
    }

    if current_ph < table::VERY_ACIDIC_PH {
        result.notes.push(format!(
            "Soil pH {} is very acidic. Liming is strongly recommended before growing \
             acid-sensitive crops.",
            current_ph
        ));
    }

    if lime > 0.0 {
        if crop.is_some_and(|c| c.is_potato()) {
            result.notes.push(
                "Liming immediately before potatoes increases the risk of common scab. Where \
                 possible, lime earlier in the rotation."
                    .to_string(),
            );
        }
        result.notes.extend(over_liming_notes(target_ph, soil_type, land_use));
    }

    Ok(result)
}

/// Trace element warnings; each threshold is checked on its own.
fn over_liming_notes(target_ph: f64, soil: SoilType, land_use: Option<LandUse>) -> Vec<String> {
    let mut notes = Vec::new();

    if land_use == Some(LandUse::Grassland) && target_ph > table::GRASSLAND_TRACE_ELEMENT_PH {
        notes.push(
            "Liming grassland above pH 7.0 can induce copper, cobalt and selenium deficiency \
             in grazing livestock."
                .to_string(),
        );
    }
    if target_ph > table::MANGANESE_PH {
        notes.push(
            "Manganese and other trace element deficiencies are likely above pH 7.5.".to_string(),
        );
    }
    if soil == SoilType::Light && target_ph > table::SANDY_MANGANESE_PH {
        notes.push(
            "On sandy soils, liming above pH 6.5 increases the risk of manganese deficiency."
                .to_string(),
        );
    }
    if soil == SoilType::Organic && target_ph > table::ORGANIC_MANGANESE_PH {
        notes.push(
            "On organic/peaty soils, liming above pH 6.0 increases the risk of manganese \
             deficiency."
                .to_string(),
        );
    }
    notes
}

fn check_range(name: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Rb209Error::invalid(format!(
            "{} must be between {:.1} and {:.1}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lime(current: f64, target: f64, soil: SoilType) -> LimeResult {
        calculate_lime(current, Some(target), soil, None, None).unwrap()
    }

    fn has(r: &LimeResult, needle: &str) -> bool {
        r.notes.iter().any(|n| n.contains(needle))
    }

    #[test]
    fn medium_soil_scenario() {
        let r = lime(5.8, 6.5, SoilType::Medium);
        assert_relative_eq!(r.lime_required, 3.9);
        assert_relative_eq!(r.target_ph, 6.5);
    }

    #[test]
    fn no_lime_when_at_or_above_target() {
        let r = lime(7.0, 6.5, SoilType::Medium);
        assert_eq!(r.lime_required, 0.0);
        assert!(has(&r, "No lime"));
        let r = lime(6.5, 6.5, SoilType::Heavy);
        assert_eq!(r.lime_required, 0.0);
    }

    #[test]
    fn large_requirement_is_split() {
        let r = lime(4.5, 7.5, SoilType::Heavy);
        assert_relative_eq!(r.lime_required, 22.5);
        assert!(r.notes.iter().any(|n| n.to_lowercase().contains("split")));
    }

    #[test]
    fn land_use_defaults() {
        let arable =
            calculate_lime(5.8, None, SoilType::Medium, Some(LandUse::Arable), None).unwrap();
        assert_relative_eq!(arable.target_ph, 6.5);
        assert_relative_eq!(arable.lime_required, 3.9);

        let grass =
            calculate_lime(5.5, None, SoilType::Medium, Some(LandUse::Grassland), None).unwrap();
        assert_relative_eq!(grass.target_ph, 6.0);
        assert_relative_eq!(grass.lime_required, 2.8);
    }

    #[test]
    fn explicit_target_overrides_land_use() {
        let r = calculate_lime(5.0, Some(5.5), SoilType::Light, Some(LandUse::Arable), None)
            .unwrap();
        assert_relative_eq!(r.target_ph, 5.5);
        assert_relative_eq!(r.lime_required, 2.0);
    }

    #[test]
    fn target_or_land_use_required() {
        assert!(calculate_lime(5.8, None, SoilType::Medium, None, None).is_err());
    }

    #[test]
    fn ph_bounds_validated() {
        assert!(calculate_lime(2.9, Some(6.5), SoilType::Medium, None, None).is_err());
        assert!(calculate_lime(5.0, Some(8.6), SoilType::Medium, None, None).is_err());
        assert!(calculate_lime(9.0, Some(8.5), SoilType::Medium, None, None).is_ok());
    }

    #[test]
    fn very_acidic_below_five_only() {
        assert!(has(&lime(4.5, 6.5, SoilType::Medium), "very acidic"));
        assert!(!has(&lime(5.0, 6.5, SoilType::Medium), "very acidic"));
    }

    #[test]
    fn potato_scab_warning_only_when_liming() {
        let with = calculate_lime(
            5.5,
            Some(6.5),
            SoilType::Medium,
            None,
            Some(Crop::PotatoesMaincrop),
        )
        .unwrap();
        assert!(has(&with, "common scab"));

        let none_needed = calculate_lime(
            7.0,
            Some(6.5),
            SoilType::Medium,
            None,
            Some(Crop::PotatoesMaincrop),
        )
        .unwrap();
        assert!(!has(&none_needed, "common scab"));

        let cereal = calculate_lime(
            5.5,
            Some(6.5),
            SoilType::Medium,
            None,
            Some(Crop::WinterWheatFeed),
        )
        .unwrap();
        assert!(!has(&cereal, "common scab"));
    }

    #[test]
    fn over_liming_thresholds_are_independent() {
        let grass = calculate_lime(6.5, Some(7.5), SoilType::Medium, Some(LandUse::Grassland), None)
            .unwrap();
        assert!(has(&grass, "copper, cobalt"));

        let arable = calculate_lime(6.5, Some(7.5), SoilType::Medium, Some(LandUse::Arable), None)
            .unwrap();
        assert!(!has(&arable, "copper, cobalt"));

        assert!(has(&lime(7.0, 8.0, SoilType::Medium), "Manganese"));

        let sandy = lime(6.0, 7.0, SoilType::Light).notes.join(" ");
        assert!(sandy.contains("sandy"));
        assert!(sandy.to_lowercase().contains("manganese"));

        let organic = lime(5.5, 6.5, SoilType::Organic).notes.join(" ");
        assert!(organic.contains("peaty"));
        assert!(organic.to_lowercase().contains("manganese"));
    }

    #[test]
    fn no_over_liming_notes_without_lime() {
        let r = lime(7.0, 6.5, SoilType::Medium);
        assert_eq!(r.notes.len(), 1);
    }
}
