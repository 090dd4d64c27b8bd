//! Fruit, vine and hop recommendations. These crops have their own soil
//! categories and N tables, so they sit beside the arable path rather than
//! inside its fallback chain.

use super::index;
use crate::data::crop_notes;
use crate::data::fruit::{self as table, FruitGroup};
use crate::error::{Rb209Error, Result};
use crate::models::{
    Crop, FruitRequest, FruitSoilCategory, NutrientRecommendation, OrchardManagement,
};

fn fruit_group(crop: Crop) -> Result<FruitGroup> {
    FruitGroup::for_crop(crop).ok_or_else(|| {
        Rb209Error::invalid(format!(
            "'{}' is not a fruit, vine or hop crop; use the standard recommendation",
            crop
        ))
    })
}

fn no_data(crop: Crop, soil: FruitSoilCategory) -> Rb209Error {
    Rb209Error::invalid(format!(
        "No nitrogen data for '{}' on {} soil",
        crop,
        soil.as_str()
    ))
}

/// kg N/ha for a fruit crop.
///
/// Top fruit needs the orchard floor management and strawberries need an
/// SNS Index; other groups ignore both.
pub fn recommend_fruit_nitrogen(
    crop: Crop,
    soil: FruitSoilCategory,
    management: Option<OrchardManagement>,
    sns_index: Option<i32>,
) -> Result<f64> {
    match fruit_group(crop)? {
        FruitGroup::Preplant | FruitGroup::HopsPreplant => Ok(0.0),
        FruitGroup::TopFruit => {
            let management = management.ok_or_else(|| {
                Rb209Error::invalid(format!(
                    "Orchard management is required for '{}' (grass-strip, overall-grass)",
                    crop
                ))
            })?;
            table::top_fruit_nitrogen(crop, soil, management).ok_or_else(|| no_data(crop, soil))
        }
        FruitGroup::SoftFruit | FruitGroup::SoftFruitLowK => {
            table::soft_fruit_nitrogen(crop, soil).ok_or_else(|| no_data(crop, soil))
        }
        FruitGroup::Strawberry => {
            let sns = sns_index.ok_or_else(|| {
                Rb209Error::invalid(format!("An SNS index is required for '{}'", crop))
            })?;
            let sns = index::clamp_index(index::sns_index(sns)?, table::STRAWBERRY_MAX_SNS);
            let row = table::strawberry_nitrogen(crop, soil).ok_or_else(|| no_data(crop, soil))?;
            Ok(row[usize::from(sns)])
        }
        FruitGroup::Hops => table::hops_nitrogen(soil).ok_or_else(|| {
            Rb209Error::invalid(
                "Hops on light-sand soils are not covered; choose deep-silt, clay or \
                 other-mineral",
            )
        }),
    }
}

/// (P2O5, K2O, MgO) in kg/ha for a fruit crop.
pub fn recommend_fruit_pkm(
    crop: Crop,
    p_index: i32,
    k_index: i32,
    mg_index: i32,
) -> Result<(f64, f64, f64)> {
    let group = fruit_group(crop)?;
    let max = group.max_index();
    let [p_row, k_row, mg_row] = group.pkm();

    let p = index::soil_index("P index", p_index, max)?;
    let k = index::soil_index("K index", k_index, max)?;
    let mg = index::soil_index("Mg index", mg_index, max)?;

    Ok((
        p_row[usize::from(p)],
        k_row[usize::from(k)],
        mg_row[usize::from(mg)],
    ))
}

/// Full fruit recommendation. Sulfur and sodium are not recommended for
/// these crops and stay at zero.
pub fn recommend_fruit_all(request: &FruitRequest) -> Result<NutrientRecommendation> {
    let crop = request.crop;
    let nitrogen = recommend_fruit_nitrogen(
        crop,
        request.soil_category,
        request.orchard_management,
        request.sns_index,
    )?;
    let (phosphorus, potassium, magnesium) =
        recommend_fruit_pkm(crop, request.p_index, request.k_index, request.mg_index)?;

    let mut rec = NutrientRecommendation::new(crop.name());
    rec.nitrogen = nitrogen;
    rec.phosphorus = phosphorus;
    rec.potassium = potassium;
    rec.magnesium = magnesium;
    Ok(rec.with_notes(crop_notes::notes(crop).iter().map(|n| n.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use FruitSoilCategory::*;

    fn n(crop: Crop, soil: FruitSoilCategory) -> Result<f64> {
        recommend_fruit_nitrogen(crop, soil, None, None)
    }

    fn joined(rec: &NutrientRecommendation) -> String {
        rec.notes.join(" ")
    }

    #[test]
    fn preplant_needs_no_nitrogen() {
        assert_eq!(n(Crop::FruitPreplant, Clay).unwrap(), 0.0);
        assert_eq!(n(Crop::HopsPreplant, LightSand).unwrap(), 0.0);
    }

    #[test]
    fn preplant_pkm() {
        assert_eq!(recommend_fruit_pkm(Crop::FruitPreplant, 0, 1, 2).unwrap(), (200.0, 100.0, 85.0));
        assert_eq!(recommend_fruit_pkm(Crop::HopsPreplant, 0, 2, 0).unwrap().0, 250.0);
        assert_eq!(recommend_fruit_pkm(Crop::HopsPreplant, 0, 2, 0).unwrap().1, 200.0);
    }

    #[test]
    fn top_fruit_by_management() {
        let strip = recommend_fruit_nitrogen(
            Crop::FruitDessertApple,
            DeepSilt,
            Some(OrchardManagement::GrassStrip),
            None,
        );
        assert_eq!(strip.unwrap(), 30.0);
        let overall = recommend_fruit_nitrogen(
            Crop::FruitCulinaryApple,
            Clay,
            Some(OrchardManagement::OverallGrass),
            None,
        );
        assert_eq!(overall.unwrap(), 110.0);
        let cherry = recommend_fruit_nitrogen(
            Crop::FruitCherry,
            LightSand,
            Some(OrchardManagement::OverallGrass),
            None,
        );
        assert_eq!(cherry.unwrap(), 180.0);
    }

    #[test]
    fn top_fruit_requires_management() {
        let err = n(Crop::FruitDessertApple, LightSand).unwrap_err().to_string();
        assert!(err.contains("grass-strip"));
    }

    #[test]
    fn soft_fruit_by_soil() {
        assert_eq!(n(Crop::FruitBlackcurrant, LightSand).unwrap(), 160.0);
        assert_eq!(n(Crop::FruitRaspberry, Clay).unwrap(), 80.0);
        assert_eq!(n(Crop::FruitVine, DeepSilt).unwrap(), 0.0);
        assert_eq!(n(Crop::FruitVine, Other).unwrap(), 40.0);
    }

    #[test]
    fn soft_fruit_potash_groups_differ() {
        assert_eq!(recommend_fruit_pkm(Crop::FruitBlackcurrant, 2, 2, 2).unwrap().1, 120.0);
        assert_eq!(recommend_fruit_pkm(Crop::FruitBlackberry, 2, 2, 2).unwrap().1, 80.0);
    }

    #[test]
    fn strawberry_needs_sns_and_clamps_at_five() {
        assert!(n(Crop::FruitStrawberryMain, LightSand).is_err());
        let at = |sns| {
            recommend_fruit_nitrogen(Crop::FruitStrawberryMain, LightSand, None, Some(sns))
                .unwrap()
        };
        assert_eq!(at(0), 60.0);
        assert_eq!(at(5), at(6));
        assert!(
            recommend_fruit_nitrogen(Crop::FruitStrawberryMain, LightSand, None, Some(7)).is_err()
        );
    }

    #[test]
    fn strawberry_clay_reads_other_mineral() {
        let clay = recommend_fruit_nitrogen(Crop::FruitStrawberryEver, Clay, None, Some(2));
        let other = recommend_fruit_nitrogen(Crop::FruitStrawberryEver, Other, None, Some(2));
        assert_eq!(clay.unwrap(), other.unwrap());
    }

    #[test]
    fn hops_nitrogen_and_extended_index() {
        assert_eq!(n(Crop::FruitHops, DeepSilt).unwrap(), 180.0);
        assert_eq!(n(Crop::FruitHops, Other).unwrap(), 220.0);
        assert!(n(Crop::FruitHops, LightSand).is_err());

        assert_eq!(recommend_fruit_pkm(Crop::FruitHops, 5, 3, 2).unwrap(), (0.0, 200.0, 50.0));
        assert_eq!(
            recommend_fruit_pkm(Crop::FruitHops, 6, 6, 6).unwrap(),
            recommend_fruit_pkm(Crop::FruitHops, 5, 5, 5).unwrap()
        );
    }

    #[test]
    fn pkm_rejects_negative_index() {
        assert!(recommend_fruit_pkm(Crop::FruitHops, -1, 0, 0).is_err());
    }

    #[test]
    fn non_fruit_crops_rejected() {
        assert!(n(Crop::WinterWheatFeed, LightSand).is_err());
        assert!(recommend_fruit_pkm(Crop::VegCarrots, 1, 1, 1).is_err());
    }

    #[test]
    fn full_recommendations() {
        let apple = FruitRequest::new(Crop::FruitDessertApple, LightSand, 2, 2, 2)
            .with_orchard_management(OrchardManagement::GrassStrip);
        let rec = recommend_fruit_all(&apple).unwrap();
        assert_eq!(
            (rec.nitrogen, rec.phosphorus, rec.potassium, rec.magnesium),
            (80.0, 20.0, 80.0, 50.0)
        );
        assert_eq!((rec.sulfur, rec.sodium), (0.0, 0.0));

        let raspberry = recommend_fruit_all(&FruitRequest::new(Crop::FruitRaspberry, Other, 1, 1, 1));
        let rec = raspberry.unwrap();
        assert_eq!(
            (rec.nitrogen, rec.phosphorus, rec.potassium, rec.magnesium),
            (100.0, 70.0, 180.0, 65.0)
        );

        let hops = recommend_fruit_all(&FruitRequest::new(Crop::FruitHops, Clay, 2, 2, 2)).unwrap();
        assert_eq!(
            (hops.nitrogen, hops.phosphorus, hops.potassium, hops.magnesium),
            (200.0, 150.0, 275.0, 50.0)
        );
    }

    #[test]
    fn advisory_notes() {
        let culinary = FruitRequest::new(Crop::FruitCulinaryApple, LightSand, 2, 2, 2)
            .with_orchard_management(OrchardManagement::GrassStrip);
        assert!(joined(&recommend_fruit_all(&culinary).unwrap()).contains("cider"));

        let currant = FruitRequest::new(Crop::FruitBlackcurrant, LightSand, 2, 2, 2);
        assert!(joined(&recommend_fruit_all(&currant).unwrap()).contains("Ben-series"));

        let hops = joined(&recommend_fruit_all(&FruitRequest::new(Crop::FruitHops, Clay, 2, 2, 2)).unwrap());
        assert!(hops.contains("Verticillium"));
        assert!(hops.contains("Split N"));

        let strawberry =
            FruitRequest::new(Crop::FruitStrawberryMain, LightSand, 2, 2, 2).with_sns_index(1);
        let rec = recommend_fruit_all(&strawberry).unwrap();
        assert_eq!(rec.nitrogen, 50.0);
        let notes = joined(&rec);
        assert!(notes.contains("SNS Index"));
        assert!(notes.contains("K:Mg ratio"));
    }
}
