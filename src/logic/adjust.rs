//! Continuous adjustments applied on top of table values: expected yield and
//! the cereal break-even ratio.

use crate::data::ber::BerGroup;
use crate::data::yield_adjustments::{self, YieldAdjustment};
use crate::error::{Rb209Error, Result};
use crate::models::Crop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldNutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl YieldNutrient {
    fn per_tonne(&self, record: &YieldAdjustment) -> f64 {
        match self {
            YieldNutrient::Nitrogen => record.n_per_t,
            YieldNutrient::Phosphorus => record.p_per_t,
            YieldNutrient::Potassium => record.k_per_t,
        }
    }
}

/// Yield record for a crop, or an error naming the crops that have one.
pub fn yield_record(crop: Crop) -> Result<YieldAdjustment> {
    yield_adjustments::lookup(crop).ok_or_else(|| {
        let supported: Vec<&str> = yield_adjustments::supported_crops()
            .map(|c| c.as_str())
            .collect();
        Rb209Error::invalid(format!(
            "No yield adjustment data for crop '{}'. Supported crops: {}",
            crop,
            supported.join(", ")
        ))
    })
}

/// `max(0, base + (min(yield, cap) - baseline) * per_tonne)`.
pub fn apply_yield(
    crop: Crop,
    base: f64,
    expected_yield: Option<f64>,
    nutrient: YieldNutrient,
) -> Result<f64> {
    let Some(expected) = expected_yield else {
        return Ok(base);
    };
    if !expected.is_finite() || expected <= 0.0 {
        return Err(Rb209Error::invalid(format!(
            "Expected yield must be a positive number, got {}",
            expected
        )));
    }

    let record = yield_record(crop)?;
    let effective = match record.max_yield {
        Some(cap) if expected > cap => {
            tracing::warn!(
                crop = crop.as_str(),
                expected,
                cap,
                "expected yield above the adjustment cap; using the cap"
            );
            cap
        }
        _ => expected,
    };

    let adjusted = base + (effective - record.baseline) * nutrient.per_tonne(&record);
    Ok(adjusted.max(0.0))
}

/// Piecewise-linear interpolation over `(ratio, delta)` points sorted by
/// ratio. Ratios outside the table take the nearest end point.
pub fn interpolate(points: &[(f64, f64)], ratio: f64) -> f64 {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if ratio <= first.0 {
        return first.1;
    }
    if ratio >= last.0 {
        return last.1;
    }

    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if ratio <= hi.0 {
            return lo.1 + (ratio - lo.0) / (hi.0 - lo.0) * (hi.1 - lo.1);
        }
    }
    last.1
}

/// N delta (kg/ha) for a break-even ratio. Crops outside the wheat and barley
/// groups are unaffected.
pub fn ber_delta(crop: Crop, ber: f64) -> Result<f64> {
    if !ber.is_finite() || ber <= 0.0 {
        return Err(Rb209Error::invalid(format!(
            "Break-even ratio must be a positive number, got {}",
            ber
        )));
    }
    Ok(match BerGroup::for_crop(crop) {
        Some(group) => {
            let delta = interpolate(group.points(), ber);
            tracing::debug!(group = group.as_str(), ber, delta, "break-even ratio adjustment");
            delta
        }
        None => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn yield_above_and_below_baseline() {
        let up = apply_yield(Crop::WinterWheatFeed, 150.0, Some(10.0), YieldNutrient::Nitrogen);
        assert_relative_eq!(up.unwrap(), 190.0);
        let down = apply_yield(Crop::WinterWheatFeed, 150.0, Some(6.0), YieldNutrient::Nitrogen);
        assert_relative_eq!(down.unwrap(), 110.0);
    }

    #[test]
    fn yield_is_capped() {
        let r = apply_yield(Crop::WinterWheatFeed, 150.0, Some(15.0), YieldNutrient::Nitrogen);
        assert_relative_eq!(r.unwrap(), 250.0);
    }

    #[test]
    fn yield_result_never_negative() {
        let r = apply_yield(Crop::WinterWheatFeed, 40.0, Some(4.0), YieldNutrient::Nitrogen);
        assert_relative_eq!(r.unwrap(), 0.0);
    }

    #[test]
    fn potato_potash_per_tonne() {
        let r = apply_yield(Crop::PotatoesMaincrop, 180.0, Some(60.0), YieldNutrient::Potassium);
        assert_relative_eq!(r.unwrap(), 238.0, epsilon = 1e-9);
        let n = apply_yield(Crop::PotatoesMaincrop, 180.0, Some(70.0), YieldNutrient::Nitrogen);
        assert_relative_eq!(n.unwrap(), 180.0);
    }

    #[test]
    fn no_yield_means_no_change() {
        let r = apply_yield(Crop::Linseed, 40.0, None, YieldNutrient::Nitrogen).unwrap();
        assert_relative_eq!(r, 40.0);
    }

    #[test]
    fn yield_for_unsupported_crop_is_an_error() {
        let err = apply_yield(Crop::Linseed, 40.0, Some(5.0), YieldNutrient::Nitrogen)
            .unwrap_err()
            .to_string();
        assert!(err.contains("linseed"));
        assert!(err.contains("winter-wheat-feed"));
    }

    #[test]
    fn yield_must_be_positive() {
        assert!(apply_yield(Crop::WinterOats, 100.0, Some(0.0), YieldNutrient::Nitrogen).is_err());
    }

    #[test]
    fn interpolation_hits_reference_points_exactly() {
        let points = BerGroup::Wheat.points();
        assert_relative_eq!(interpolate(points, 5.0), 0.0);
        assert_relative_eq!(interpolate(points, 6.0), -10.0);
        assert_relative_eq!(interpolate(points, 2.0), 30.0);
    }

    #[test]
    fn interpolation_between_points() {
        assert_relative_eq!(interpolate(BerGroup::Wheat.points(), 4.5), 5.0);
        assert_relative_eq!(interpolate(BerGroup::Barley.points(), 5.5), -5.0);
        assert_relative_eq!(interpolate(BerGroup::Barley.points(), 9.0), -22.5);
    }

    #[test]
    fn interpolation_clamps_at_ends() {
        assert_relative_eq!(interpolate(BerGroup::Wheat.points(), 1.0), 30.0);
        assert_relative_eq!(interpolate(BerGroup::Wheat.points(), 12.0), -30.0);
    }

    #[test]
    fn ber_ignored_for_non_cereals() {
        assert_relative_eq!(ber_delta(Crop::SugarBeet, 2.0).unwrap(), 0.0);
    }

    #[test]
    fn ber_must_be_positive() {
        assert!(ber_delta(Crop::WinterWheatFeed, 0.0).is_err());
        assert!(ber_delta(Crop::WinterWheatFeed, f64::NAN).is_err());
    }
}
