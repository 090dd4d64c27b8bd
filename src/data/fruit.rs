//! Fruit, vine and hop tables (RB209 Section 7).

use crate::models::{Crop, FruitSoilCategory, OrchardManagement};

/// How a fruit crop's recommendations are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitGroup {
    /// Table 7.3, fruit and vines before planting.
    Preplant,
    /// Table 7.3, hops before planting.
    HopsPreplant,
    /// Tables 7.4 and 7.5.
    TopFruit,
    /// Tables 7.6 and 7.7, currants, gooseberries and cane fruit.
    SoftFruit,
    /// Tables 7.6 and 7.7, blackberries and vines (lower potash).
    SoftFruitLowK,
    /// Tables 7.8 and 7.9.
    Strawberry,
    /// Table 7.17.
    Hops,
}

impl FruitGroup {
    pub fn for_crop(crop: Crop) -> Option<Self> {
        use Crop::*;

        let group = match crop {
            FruitPreplant => FruitGroup::Preplant,
            HopsPreplant => FruitGroup::HopsPreplant,
            FruitDessertApple | FruitCulinaryApple | FruitPear | FruitCherry | FruitPlum => {
                FruitGroup::TopFruit
            }
            FruitBlackcurrant | FruitRedcurrant | FruitGooseberry | FruitRaspberry
            | FruitLoganberry | FruitTayberry => FruitGroup::SoftFruit,
            FruitBlackberry | FruitVine => FruitGroup::SoftFruitLowK,
            FruitStrawberryMain | FruitStrawberryEver => FruitGroup::Strawberry,
            FruitHops => FruitGroup::Hops,
            _ => return None,
        };
        Some(group)
    }

    /// P2O5, K2O and MgO rows by index. Every row has the same length and the
    /// last entry stands for "that index and above".
    pub fn pkm(&self) -> [&'static [f64]; 3] {
        match self {
            FruitGroup::Preplant => [
                &[200.0, 100.0, 50.0, 50.0, 0.0, 0.0],
                &[200.0, 100.0, 50.0, 0.0, 0.0, 0.0],
                &[165.0, 125.0, 85.0, 0.0, 0.0, 0.0],
            ],
            FruitGroup::HopsPreplant => [
                &[250.0, 175.0, 125.0, 100.0, 50.0, 0.0],
                &[300.0, 250.0, 200.0, 150.0, 100.0, 0.0],
                &[250.0, 165.0, 85.0, 0.0, 0.0, 0.0],
            ],
            FruitGroup::TopFruit | FruitGroup::Strawberry => [
                if *self == FruitGroup::TopFruit {
                    &[80.0, 40.0, 20.0, 20.0, 0.0]
                } else {
                    &[110.0, 70.0, 40.0, 40.0, 0.0]
                },
                &[220.0, 150.0, 80.0, 0.0, 0.0],
                &[100.0, 65.0, 50.0, 0.0, 0.0],
            ],
            FruitGroup::SoftFruit => [
                &[110.0, 70.0, 40.0, 40.0, 0.0],
                &[250.0, 180.0, 120.0, 60.0, 0.0],
                &[100.0, 65.0, 50.0, 0.0, 0.0],
            ],
            FruitGroup::SoftFruitLowK => [
                &[110.0, 70.0, 40.0, 40.0, 0.0],
                &[220.0, 150.0, 80.0, 0.0, 0.0],
                &[100.0, 65.0, 50.0, 0.0, 0.0],
            ],
            FruitGroup::Hops => [
                &[250.0, 200.0, 150.0, 100.0, 50.0, 0.0],
                &[425.0, 350.0, 275.0, 200.0, 100.0, 0.0],
                &[150.0, 100.0, 50.0, 0.0, 0.0, 0.0],
            ],
        }
    }

    /// Highest index key in the P/K/Mg tables for this group.
    pub fn max_index(&self) -> u8 {
        (self.pkm()[0].len() - 1) as u8
    }
}

/// Table 7.4: top fruit N by soil and orchard floor management.
pub fn top_fruit_nitrogen(
    crop: Crop,
    soil: FruitSoilCategory,
    management: OrchardManagement,
) -> Option<f64> {
    use FruitSoilCategory::*;

    // [grass-strip, overall-grass]
    let row: [f64; 2] = match (crop, soil) {
        (Crop::FruitDessertApple, LightSand) => [80.0, 120.0],
        (Crop::FruitDessertApple, DeepSilt) => [30.0, 70.0],
        (Crop::FruitDessertApple, Clay) => [40.0, 80.0],
        (Crop::FruitDessertApple, Other) => [60.0, 100.0],
        (Crop::FruitCulinaryApple, LightSand) => [110.0, 150.0],
        (Crop::FruitCulinaryApple, DeepSilt) => [60.0, 100.0],
        (Crop::FruitCulinaryApple, Clay) => [70.0, 110.0],
        (Crop::FruitCulinaryApple, Other) => [90.0, 130.0],
        (Crop::FruitPear | Crop::FruitCherry | Crop::FruitPlum, LightSand) => [140.0, 180.0],
        (Crop::FruitPear | Crop::FruitCherry | Crop::FruitPlum, DeepSilt) => [90.0, 130.0],
        (Crop::FruitPear | Crop::FruitCherry | Crop::FruitPlum, Clay) => [100.0, 140.0],
        (Crop::FruitPear | Crop::FruitCherry | Crop::FruitPlum, Other) => [120.0, 160.0],
        _ => return None,
    };

    Some(match management {
        OrchardManagement::GrassStrip => row[0],
        OrchardManagement::OverallGrass => row[1],
    })
}

/// Table 7.6: soft fruit and vine N by soil.
pub fn soft_fruit_nitrogen(crop: Crop, soil: FruitSoilCategory) -> Option<f64> {
    use Crop::*;

    // [light-sand, deep-silt, clay, other-mineral]
    let row: [f64; 4] = match crop {
        FruitBlackcurrant => [160.0, 110.0, 120.0, 140.0],
        FruitRedcurrant | FruitGooseberry | FruitRaspberry | FruitLoganberry | FruitTayberry
        | FruitBlackberry => [120.0, 70.0, 80.0, 100.0],
        FruitVine => [60.0, 0.0, 20.0, 40.0],
        _ => return None,
    };

    Some(row[soil_column(soil)])
}

pub const STRAWBERRY_MAX_SNS: u8 = 5;

/// Table 7.8: strawberry N by SNS Index 0-5. Clay soils use the
/// other-mineral row.
pub fn strawberry_nitrogen(crop: Crop, soil: FruitSoilCategory) -> Option<[f64; 6]> {
    use FruitSoilCategory::*;

    let row = match (crop, soil) {
        (Crop::FruitStrawberryMain, LightSand) => [60.0, 50.0, 40.0, 30.0, 20.0, 0.0],
        (Crop::FruitStrawberryMain, DeepSilt) => [0.0; 6],
        (Crop::FruitStrawberryMain, Clay | Other) => [40.0, 40.0, 30.0, 20.0, 0.0, 0.0],
        (Crop::FruitStrawberryEver, LightSand) => [80.0, 70.0, 60.0, 40.0, 20.0, 0.0],
        (Crop::FruitStrawberryEver, DeepSilt) => [40.0, 30.0, 30.0, 20.0, 0.0, 0.0],
        (Crop::FruitStrawberryEver, Clay | Other) => [60.0, 50.0, 40.0, 20.0, 0.0, 0.0],
        _ => return None,
    };
    Some(row)
}

/// Table 7.17: hop N. Light sand and shallow soils are not covered.
pub fn hops_nitrogen(soil: FruitSoilCategory) -> Option<f64> {
    match soil {
        FruitSoilCategory::LightSand => None,
        FruitSoilCategory::DeepSilt => Some(180.0),
        FruitSoilCategory::Clay => Some(200.0),
        FruitSoilCategory::Other => Some(220.0),
    }
}

fn soil_column(soil: FruitSoilCategory) -> usize {
    match soil {
        FruitSoilCategory::LightSand => 0,
        FruitSoilCategory::DeepSilt => 1,
        FruitSoilCategory::Clay => 2,
        FruitSoilCategory::Other => 3,
    }
}
