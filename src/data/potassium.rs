//! Potash tables, kg K2O/ha by K Index 0-4 (4 means 4 and above).

use crate::models::{Crop, Straw};

pub const MAX_INDEX: u8 = 4;

/// Cereal K2O, which depends on whether the straw leaves the field.
pub fn cereal(crop: Crop, straw: Straw) -> Option<[f64; 5]> {
    if !crop.has_straw_option() {
        return None;
    }
    Some(match straw {
        Straw::Removed => [105.0, 75.0, 55.0, 0.0, 0.0],
        Straw::Incorporated => [65.0, 40.0, 25.0, 0.0, 0.0],
    })
}

/// Non-cereal arable, potato and grassland K2O by K Index.
pub fn generic(crop: Crop) -> Option<[f64; 5]> {
    use Crop::*;

    let row = match crop {
        WinterOilseedRape | SpringOilseedRape => [95.0, 65.0, 45.0, 0.0, 0.0],
        Linseed | Peas | FieldBeans => [75.0, 50.0, 35.0, 0.0, 0.0],
        SugarBeet | ForageMaize => [175.0, 130.0, 95.0, 0.0, 0.0],
        PotatoesMaincrop => [300.0, 240.0, 180.0, 0.0, 0.0],
        PotatoesEarly | PotatoesSeed => [250.0, 200.0, 150.0, 0.0, 0.0],
        GrassSilage => [150.0, 100.0, 60.0, 0.0, 0.0],
        GrassHay => [120.0, 80.0, 50.0, 0.0, 0.0],
        GrassGrazed => [60.0, 30.0, 0.0, 0.0, 0.0],
        GrassGrazedOneCut => [100.0, 60.0, 30.0, 0.0, 0.0],
        _ => return None,
    };
    Some(row)
}

/// Vegetable K2O by K Index. The Index 2 column is the lower half (2-).
pub fn vegetable(crop: Crop) -> Option<[f64; 5]> {
    use Crop::*;

    let row = match crop {
        VegAsparagusEst => [250.0, 225.0, 200.0, 150.0, 125.0],
        VegAsparagus => [100.0, 50.0, 50.0, 50.0, 0.0],
        VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec => [300.0, 250.0, 200.0, 60.0, 0.0],
        VegCauliflowerSummer
        | VegCauliflowerWinterSeedbed
        | VegCauliflowerWinterTopdress
        | VegCalabrese => [275.0, 225.0, 175.0, 35.0, 0.0],
        VegCelerySeedbed => [450.0, 400.0, 350.0, 210.0, 50.0],
        VegPeasMarket => [190.0, 140.0, 90.0, 0.0, 0.0],
        VegBeansBroad | VegBeansDwarf => [200.0, 150.0, 100.0, 0.0, 0.0],
        VegRadish | VegSweetcorn => [250.0, 200.0, 150.0, 0.0, 0.0],
        VegLettuceWhole | VegLettuceBaby | VegRocket => [250.0, 200.0, 150.0, 0.0, 0.0],
        VegOnionsBulb | VegOnionsSalad | VegLeeks => [275.0, 225.0, 175.0, 35.0, 0.0],
        VegBeetroot | VegSwedes | VegTurnipsParsnips => [300.0, 250.0, 200.0, 60.0, 0.0],
        VegCarrots => [275.0, 225.0, 175.0, 35.0, 0.0],
        VegBulbs => [300.0, 250.0, 200.0, 60.0, 0.0],
        VegCoriander => [315.0, 265.0, 215.0, 75.0, 0.0],
        VegMintEst => [200.0, 150.0, 100.0, 0.0, 0.0],
        VegMint => [280.0, 230.0, 180.0, 40.0, 0.0],
        VegCourgettesSeedbed => [250.0, 200.0, 150.0, 0.0, 0.0],
        VegCourgettesTopdress => [0.0; 5],
        _ => return None,
    };
    Some(row)
}

/// Upper half of K Index 2 (2+, soil K 181-240 mg/l). Crops without a
/// documented split use the 2- value for both halves.
pub fn vegetable_k2_upper(crop: Crop) -> Option<f64> {
    use Crop::*;

    let value = match crop {
        VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec => 150.0,
        VegCauliflowerSummer
        | VegCauliflowerWinterSeedbed
        | VegCauliflowerWinterTopdress
        | VegCalabrese => 125.0,
        VegCelerySeedbed => 300.0,
        VegPeasMarket => 40.0,
        VegBeansBroad | VegBeansDwarf => 50.0,
        VegRadish | VegSweetcorn | VegLettuceWhole | VegLettuceBaby | VegRocket => 100.0,
        VegOnionsBulb | VegOnionsSalad | VegLeeks => 125.0,
        VegBeetroot | VegSwedes | VegTurnipsParsnips => 150.0,
        VegCarrots => 125.0,
        VegBulbs => 150.0,
        VegCoriander => 165.0,
        VegMintEst => 50.0,
        VegMint => 130.0,
        VegCourgettesSeedbed => 100.0,
        _ => return None,
    };
    Some(value)
}
