//! Phosphate tables, kg P2O5/ha by P Index 0-4 (4 means 4 and above).

use crate::models::Crop;

pub const MAX_INDEX: u8 = 4;

/// Arable, potato and grassland P2O5 by P Index.
pub fn generic(crop: Crop) -> Option<[f64; 5]> {
    use Crop::*;

    let row = match crop {
        WinterWheatFeed | WinterWheatMilling | SpringWheat | WinterBarley | SpringBarley
        | WinterOats | SpringOats | WinterRye => [110.0, 85.0, 60.0, 30.0, 0.0],
        WinterOilseedRape | SpringOilseedRape => [100.0, 75.0, 50.0, 25.0, 0.0],
        Linseed => [80.0, 55.0, 35.0, 15.0, 0.0],
        Peas | FieldBeans => [80.0, 55.0, 30.0, 0.0, 0.0],
        SugarBeet | ForageMaize => [120.0, 95.0, 65.0, 35.0, 0.0],
        PotatoesMaincrop => [250.0, 200.0, 150.0, 50.0, 0.0],
        PotatoesEarly | PotatoesSeed => [200.0, 150.0, 100.0, 35.0, 0.0],
        GrassSilage | GrassHay => [120.0, 80.0, 50.0, 20.0, 0.0],
        GrassGrazed => [80.0, 50.0, 30.0, 0.0, 0.0],
        GrassGrazedOneCut => [100.0, 65.0, 40.0, 10.0, 0.0],
        _ => return None,
    };
    Some(row)
}

/// Vegetable P2O5 by P Index (Section 6).
pub fn vegetable(crop: Crop) -> Option<[f64; 5]> {
    use Crop::*;

    let row = match crop {
        VegAsparagusEst => [175.0, 150.0, 125.0, 100.0, 75.0],
        VegAsparagus => [75.0, 75.0, 50.0, 50.0, 25.0],
        VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec
        | VegCauliflowerSummer
        | VegCauliflowerWinterSeedbed
        | VegCauliflowerWinterTopdress
        | VegCalabrese => [200.0, 150.0, 100.0, 50.0, 0.0],
        VegCelerySeedbed => [250.0, 200.0, 150.0, 100.0, 50.0],
        VegPeasMarket => [185.0, 135.0, 85.0, 35.0, 0.0],
        VegBeansBroad | VegBeansDwarf => [200.0, 150.0, 100.0, 50.0, 0.0],
        VegRadish | VegSweetcorn => [175.0, 125.0, 75.0, 25.0, 0.0],
        VegLettuceWhole | VegLettuceBaby | VegRocket => [250.0, 200.0, 150.0, 100.0, 0.0],
        VegOnionsBulb | VegOnionsSalad | VegLeeks => [200.0, 150.0, 100.0, 50.0, 0.0],
        VegBeetroot | VegSwedes | VegTurnipsParsnips | VegCarrots | VegBulbs => {
            [200.0, 150.0, 100.0, 50.0, 0.0]
        }
        VegCoriander | VegMintEst | VegMint => [175.0, 125.0, 75.0, 25.0, 0.0],
        VegCourgettesSeedbed => [175.0, 125.0, 75.0, 25.0, 0.0],
        // P and K go on with the seedbed dressing.
        VegCourgettesTopdress => [0.0; 5],
        _ => return None,
    };
    Some(row)
}
