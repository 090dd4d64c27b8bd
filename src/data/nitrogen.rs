//! Nitrogen recommendation tables, kg N/ha by SNS Index 0-6.

use crate::models::{Crop, SoilType};

/// Arable, potato and grassland N by SNS Index.
pub fn generic(crop: Crop) -> Option<[f64; 7]> {
    use Crop::*;

    let row = match crop {
        WinterWheatFeed => [220.0, 180.0, 150.0, 120.0, 120.0, 40.0, 0.0],
        WinterWheatMilling => [260.0, 220.0, 190.0, 160.0, 120.0, 80.0, 40.0],
        SpringWheat => [160.0, 130.0, 100.0, 80.0, 50.0, 20.0, 0.0],
        WinterBarley => [180.0, 155.0, 130.0, 100.0, 65.0, 30.0, 0.0],
        SpringBarley => [160.0, 120.0, 100.0, 80.0, 50.0, 20.0, 0.0],
        WinterOats => [170.0, 140.0, 110.0, 80.0, 50.0, 20.0, 0.0],
        SpringOats => [130.0, 100.0, 80.0, 60.0, 30.0, 0.0, 0.0],
        WinterRye => [170.0, 140.0, 110.0, 80.0, 50.0, 20.0, 0.0],
        WinterOilseedRape => [220.0, 190.0, 160.0, 130.0, 80.0, 30.0, 0.0],
        SpringOilseedRape => [150.0, 120.0, 100.0, 80.0, 50.0, 20.0, 0.0],
        Linseed => [100.0, 70.0, 40.0, 20.0, 0.0, 0.0, 0.0],
        Peas | FieldBeans => [0.0; 7],
        SugarBeet => [120.0, 120.0, 80.0, 50.0, 0.0, 0.0, 0.0],
        ForageMaize => [150.0, 120.0, 80.0, 50.0, 0.0, 0.0, 0.0],
        PotatoesMaincrop => [270.0, 220.0, 180.0, 140.0, 100.0, 60.0, 0.0],
        PotatoesEarly => [200.0, 160.0, 130.0, 100.0, 60.0, 30.0, 0.0],
        PotatoesSeed => [160.0, 130.0, 100.0, 80.0, 50.0, 20.0, 0.0],
        GrassGrazed => [250.0, 220.0, 180.0, 150.0, 100.0, 60.0, 0.0],
        GrassSilage => [320.0, 280.0, 240.0, 200.0, 160.0, 100.0, 40.0],
        GrassHay => [200.0, 170.0, 140.0, 110.0, 70.0, 30.0, 0.0],
        GrassGrazedOneCut => [280.0, 240.0, 200.0, 170.0, 130.0, 80.0, 20.0],
        _ => return None,
    };
    Some(row)
}

/// Table 4.17 soil-specific rows. `None` entries are combinations the
/// table marks not applicable (organic soils at SNS 0-2).
pub fn soil_specific(crop: Crop, soil: SoilType) -> Option<[Option<f64>; 7]> {
    match (crop, soil) {
        (Crop::WinterWheatFeed, SoilType::Light) => Some([
            Some(180.0),
            Some(150.0),
            Some(120.0),
            Some(90.0),
            Some(60.0),
            Some(30.0),
            Some(20.0),
        ]),
        (Crop::WinterWheatFeed, SoilType::Medium | SoilType::Heavy) => Some([
            Some(250.0),
            Some(220.0),
            Some(190.0),
            Some(160.0),
            Some(120.0),
            Some(60.0),
            Some(20.0),
        ]),
        (Crop::WinterWheatFeed, SoilType::Organic) => Some([
            None,
            None,
            None,
            Some(120.0),
            Some(80.0),
            Some(60.0),
            Some(20.0),
        ]),
        _ => None,
    }
}

/// Vegetable N by SNS Index (Tables 6.11-6.26).
pub fn vegetable(crop: Crop) -> Option<[f64; 7]> {
    use Crop::*;

    let row = match crop {
        VegAsparagusEst => [150.0, 150.0, 150.0, 90.0, 20.0, 0.0, 0.0],
        VegAsparagus => [120.0; 7],
        VegBrusselsSprouts => [330.0, 300.0, 270.0, 230.0, 180.0, 80.0, 0.0],
        VegCabbageStorage => [340.0, 310.0, 280.0, 240.0, 190.0, 90.0, 0.0],
        VegCabbageHeadPreDec => [325.0, 290.0, 260.0, 220.0, 170.0, 70.0, 0.0],
        VegCabbageHeadPostDec => [240.0, 210.0, 180.0, 140.0, 90.0, 0.0, 0.0],
        VegCollardsPreDec => [210.0, 190.0, 180.0, 160.0, 140.0, 90.0, 0.0],
        VegCollardsPostDec => [310.0, 290.0, 270.0, 240.0, 210.0, 140.0, 90.0],
        VegCauliflowerSummer => [290.0, 260.0, 235.0, 210.0, 170.0, 80.0, 0.0],
        VegCauliflowerWinterSeedbed => [100.0, 100.0, 100.0, 100.0, 60.0, 0.0, 0.0],
        VegCauliflowerWinterTopdress => [190.0, 160.0, 135.0, 110.0, 100.0, 80.0, 0.0],
        VegCalabrese => [235.0, 200.0, 165.0, 135.0, 80.0, 0.0, 0.0],
        VegCelerySeedbed => [75.0, 75.0, 75.0, 75.0, 0.0, 0.0, 0.0],
        VegPeasMarket | VegBeansBroad => [0.0; 7],
        VegBeansDwarf => [180.0, 150.0, 120.0, 80.0, 30.0, 0.0, 0.0],
        VegRadish => [100.0, 90.0, 80.0, 65.0, 50.0, 20.0, 0.0],
        VegSweetcorn => [220.0, 175.0, 125.0, 75.0, 0.0, 0.0, 0.0],
        VegLettuceWhole => [200.0, 180.0, 160.0, 150.0, 125.0, 75.0, 30.0],
        VegLettuceBaby => [60.0, 50.0, 40.0, 30.0, 10.0, 0.0, 0.0],
        VegRocket => [125.0, 115.0, 100.0, 90.0, 75.0, 40.0, 0.0],
        VegOnionsBulb => [160.0, 130.0, 110.0, 90.0, 60.0, 0.0, 0.0],
        VegOnionsSalad => [130.0, 120.0, 110.0, 100.0, 80.0, 50.0, 20.0],
        VegLeeks => [200.0, 190.0, 170.0, 160.0, 130.0, 80.0, 40.0],
        VegBeetroot => [290.0, 260.0, 240.0, 220.0, 190.0, 120.0, 60.0],
        VegSwedes => [135.0, 100.0, 70.0, 30.0, 0.0, 0.0, 0.0],
        VegTurnipsParsnips => [170.0, 130.0, 100.0, 70.0, 20.0, 0.0, 0.0],
        VegCarrots => [100.0, 70.0, 40.0, 0.0, 0.0, 0.0, 0.0],
        VegBulbs => [125.0, 100.0, 50.0, 0.0, 0.0, 0.0, 0.0],
        VegCoriander => [140.0, 125.0, 115.0, 105.0, 90.0, 55.0, 30.0],
        VegMintEst | VegMint => [180.0, 170.0, 160.0, 150.0, 130.0, 100.0, 70.0],
        VegCourgettesSeedbed => [100.0, 100.0, 100.0, 40.0, 0.0, 0.0, 0.0],
        VegCourgettesTopdress => [75.0, 75.0, 75.0, 75.0, 0.0, 0.0, 0.0],
        _ => return None,
    };
    Some(row)
}

/// NVZ whole-farm N-max limit (kg N/ha) for the crop group.
pub fn nvz_nmax(crop: Crop) -> Option<f64> {
    use Crop::*;

    let limit = match crop {
        WinterWheatFeed => 220.0,
        WinterWheatMilling => 260.0,
        SpringWheat => 180.0,
        WinterBarley => 180.0,
        SpringBarley => 150.0,
        WinterOats | SpringOats | WinterRye => 220.0,
        WinterOilseedRape | SpringOilseedRape => 250.0,
        GrassGrazed | GrassHay | GrassGrazedOneCut => 300.0,
        GrassSilage => 340.0,
        SugarBeet => 120.0,
        ForageMaize => 150.0,
        FieldBeans | Peas => 0.0,
        PotatoesMaincrop | PotatoesEarly | PotatoesSeed => 270.0,
        VegAsparagus | VegAsparagusEst | VegCarrots | VegRadish | VegSwedes => 180.0,
        VegCelerySeedbed
        | VegCourgettesSeedbed
        | VegCourgettesTopdress
        | VegBeansDwarf
        | VegLettuceWhole
        | VegLettuceBaby
        | VegOnionsBulb
        | VegOnionsSalad
        | VegTurnipsParsnips
        | VegSweetcorn => 280.0,
        VegBeetroot
        | VegBrusselsSprouts
        | VegCabbageStorage
        | VegCabbageHeadPreDec
        | VegCabbageHeadPostDec
        | VegCollardsPreDec
        | VegCollardsPostDec
        | VegCalabrese
        | VegCauliflowerSummer
        | VegCauliflowerWinterSeedbed
        | VegCauliflowerWinterTopdress
        | VegLeeks => 370.0,
        VegPeasMarket | VegBeansBroad => 0.0,
        _ => return None,
    };
    Some(limit)
}
