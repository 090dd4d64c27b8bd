use crate::data::timing::{self as table, Portion, TimingRule};
use crate::error::{Rb209Error, Result};
use crate::models::{Crop, NitrogenTimingResult, SoilType, TimingSplit};

const SINGLE_DRESSING: &str = "Single application";

/// Split a total N dose into dated dressings.
///
/// Split amounts always add up to `round(total_n)`: every split but the last
/// is rounded on its own and the last takes whatever is left.
pub fn nitrogen_timing(
    crop: Crop,
    total_n: f64,
    soil_type: Option<SoilType>,
) -> Result<NitrogenTimingResult> {
    if !total_n.is_finite() || total_n < 0.0 {
        return Err(Rb209Error::invalid(format!(
            "Total nitrogen must be non-negative, got {}",
            total_n
        )));
    }

    let rounded = total_n.round_ties_even();
    let mut result = NitrogenTimingResult {
        crop: crop.name().to_string(),
        total_n,
        splits: Vec::new(),
        notes: Vec::new(),
    };

    let Some(rules) = table::rules(crop) else {
        result.splits.push(single(rounded));
        result.notes.push(format!(
            "No specific timing guidance for {}; apply as a single dressing.",
            crop.name()
        ));
        return Ok(result);
    };

    let Some((position, rule)) = rules
        .iter()
        .enumerate()
        .find(|(_, r)| r.matches(total_n, soil_type))
    else {
        tracing::debug!(crop = crop.as_str(), total_n, "no timing rule matched");
        result.splits.push(single(rounded));
        result.notes.push(format!(
            "No timing rule covers {} kg N/ha for {}; apply as a single dressing.",
            rounded,
            crop.name()
        ));
        return Ok(result);
    };

    tracing::debug!(crop = crop.as_str(), total_n, rule = position, "matched timing rule");
    result.splits = allocate(rule, total_n, rounded);
    result.notes = rule.notes.iter().map(|n| n.to_string()).collect();
    Ok(result)
}

fn allocate(rule: &TimingRule, total_n: f64, rounded: f64) -> Vec<TimingSplit> {
    let mut remaining = rounded;
    let last = rule.splits.len().saturating_sub(1);

    rule.splits
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let amount = if i == last {
                remaining
            } else {
                let wanted = match spec.portion {
                    Portion::Fraction(f) => (f * total_n).round_ties_even(),
                    Portion::Fixed(a) => a,
                };
                wanted.clamp(0.0, remaining)
            };
            remaining -= amount;
            TimingSplit {
                amount,
                timing: spec.timing.to_string(),
            }
        })
        .collect()
}

fn single(amount: f64) -> TimingSplit {
    TimingSplit {
        amount,
        timing: SINGLE_DRESSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(r: &NitrogenTimingResult) -> Vec<f64> {
        r.splits.iter().map(|s| s.amount).collect()
    }

    #[test]
    fn winter_barley_200_three_way_with_lodging_note() {
        let r = nitrogen_timing(Crop::WinterBarley, 200.0, None).unwrap();
        assert_eq!(amounts(&r), vec![80.0, 80.0, 40.0]);
        assert!(r.notes.join(" ").contains("lodging"));
    }

    #[test]
    fn winter_wheat_small_dose_single_split() {
        let r = nitrogen_timing(Crop::WinterWheatFeed, 100.0, None).unwrap();
        assert_eq!(amounts(&r), vec![100.0]);
        let r = nitrogen_timing(Crop::WinterWheatFeed, 180.0, None).unwrap();
        assert_eq!(amounts(&r), vec![90.0, 90.0]);
    }

    #[test]
    fn splits_always_sum_to_rounded_total() {
        let crops = [
            Crop::WinterWheatFeed,
            Crop::WinterBarley,
            Crop::SpringBarley,
            Crop::GrassSilage,
            Crop::GrassGrazed,
            Crop::PotatoesMaincrop,
            Crop::VegCarrots,
            Crop::VegAsparagusEst,
            Crop::Linseed,
        ];
        for crop in crops {
            for n in [0.0, 33.3, 99.5, 100.0, 101.0, 150.7, 200.0, 257.5, 333.0] {
                let r = nitrogen_timing(crop, n, Some(SoilType::Light)).unwrap();
                assert_eq!(r.allocated(), f64::round_ties_even(n), "{crop} at {n}");
                assert!(r.splits.iter().all(|s| s.amount >= 0.0));
            }
        }
    }

    #[test]
    fn thirds_carry_rounding_drift_into_last_split() {
        let r = nitrogen_timing(Crop::SpringBarley, 100.0, None).unwrap();
        assert_eq!(amounts(&r), vec![33.0, 67.0]);
        let r = nitrogen_timing(Crop::VegAsparagusEst, 100.0, None).unwrap();
        assert_eq!(amounts(&r), vec![33.0, 33.0, 34.0]);
    }

    #[test]
    fn potatoes_split_only_on_light_soil() {
        let light = nitrogen_timing(Crop::PotatoesMaincrop, 180.0, Some(SoilType::Light)).unwrap();
        assert_eq!(amounts(&light), vec![120.0, 60.0]);
        assert!(light.notes.iter().any(|n| n.contains("leaching")));

        let medium = nitrogen_timing(Crop::PotatoesMaincrop, 180.0, Some(SoilType::Medium)).unwrap();
        assert_eq!(amounts(&medium), vec![180.0]);
        let unknown = nitrogen_timing(Crop::PotatoesMaincrop, 180.0, None).unwrap();
        assert_eq!(unknown.splits.len(), 1);
    }

    #[test]
    fn seedbed_cap_tops_dresses_the_balance() {
        let r = nitrogen_timing(Crop::VegCarrots, 100.0, None).unwrap();
        assert_eq!(amounts(&r), vec![100.0]);
        let r = nitrogen_timing(Crop::VegBrusselsSprouts, 270.0, None).unwrap();
        assert_eq!(amounts(&r), vec![100.0, 170.0]);
    }

    #[test]
    fn crop_without_rules_gets_single_split() {
        let r = nitrogen_timing(Crop::Linseed, 40.0, None).unwrap();
        assert_eq!(amounts(&r), vec![40.0]);
        assert!(r.notes[0].contains("No specific timing guidance"));
    }

    #[test]
    fn gap_between_rules_falls_back_to_single_split() {
        let r = nitrogen_timing(Crop::WinterWheatFeed, 120.5, None).unwrap();
        assert_eq!(amounts(&r), vec![120.0]);
        assert_eq!(r.notes.len(), 1);
    }

    #[test]
    fn n_fixing_veg_not_applicable() {
        let r = nitrogen_timing(Crop::VegPeasMarket, 0.0, None).unwrap();
        assert!(r.splits[0].timing.contains("Not applicable"));
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(nitrogen_timing(Crop::WinterWheatFeed, -1.0, None).is_err());
        assert!(nitrogen_timing(Crop::WinterWheatFeed, f64::INFINITY, None).is_err());
    }
}
