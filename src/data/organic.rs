//! Organic material nutrient contents (RB209 Section 2).
//!
//! Contents are kg per tonne fresh weight for solids and kg per m3 for slurries.

use crate::models::{ApplicationTiming, ManureSoil, OrganicMaterial};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialInfo {
    pub name: &'static str,
    pub unit: &'static str,
    pub total_n: f64,
    /// Crop-available N in the first year when no timing is given.
    pub available_n: f64,
    pub p2o5: f64,
    pub k2o: f64,
    pub mgo: f64,
    pub so3: f64,
}

const fn info(
    name: &'static str,
    unit: &'static str,
    [total_n, available_n, p2o5, k2o, mgo, so3]: [f64; 6],
) -> MaterialInfo {
    MaterialInfo {
        name,
        unit,
        total_n,
        available_n,
        p2o5,
        k2o,
        mgo,
        so3,
    }
}

pub fn material_info(material: OrganicMaterial) -> MaterialInfo {
    use OrganicMaterial::*;

    match material {
        CattleFym => info("Cattle FYM", "t", [6.0, 1.2, 3.2, 8.0, 1.8, 3.0]),
        PigFym => info("Pig FYM", "t", [7.0, 1.4, 6.0, 5.0, 1.5, 3.0]),
        SheepFym => info("Sheep FYM", "t", [7.0, 1.4, 3.2, 6.0, 2.0, 4.0]),
        HorseFym => info("Horse FYM", "t", [5.0, 1.0, 3.5, 6.0, 1.5, 2.0]),
        PoultryLitter => info(
            "Poultry Litter (broiler/turkey)",
            "t",
            [19.0, 5.7, 14.0, 9.5, 3.5, 5.0],
        ),
        LayerManure => info("Layer Manure", "t", [16.0, 4.8, 13.0, 8.0, 3.0, 5.5]),
        CattleSlurry => info("Cattle Slurry (6% DM)", "m3", [2.6, 0.8, 1.2, 2.5, 0.5, 0.8]),
        PigSlurry => info("Pig Slurry (4% DM)", "m3", [3.6, 2.167, 2.0, 1.6, 0.5, 0.8]),
        GreenCompost => info("Green Compost", "t", [4.3, 0.4, 3.0, 4.2, 1.5, 2.5]),
        GreenFoodCompost => info("Green/Food Compost", "t", [8.0, 0.8, 4.5, 6.0, 2.0, 4.0]),
        BiosolidsCake => info(
            "Biosolids Cake (sewage sludge)",
            "t",
            [12.5, 2.5, 12.0, 0.5, 2.0, 7.0],
        ),
        PaperCrumble => info("Paper Crumble", "t", [3.0, 0.3, 1.5, 0.5, 2.5, 4.0]),
    }
}

/// Availability tables for the manures RB209 gives timing data for.
/// Composts and paper crumble have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityTable {
    Fym,
    PoultryLitter,
    LayerManure,
    CattleSlurry,
    PigSlurry,
    BiosolidsCake,
}

impl AvailabilityTable {
    pub fn for_material(material: OrganicMaterial) -> Option<Self> {
        use OrganicMaterial::*;

        match material {
            CattleFym | PigFym | SheepFym | HorseFym => Some(AvailabilityTable::Fym),
            PoultryLitter => Some(AvailabilityTable::PoultryLitter),
            LayerManure => Some(AvailabilityTable::LayerManure),
            CattleSlurry => Some(AvailabilityTable::CattleSlurry),
            PigSlurry => Some(AvailabilityTable::PigSlurry),
            BiosolidsCake => Some(AvailabilityTable::BiosolidsCake),
            GreenCompost | GreenFoodCompost | PaperCrumble => None,
        }
    }

    /// Fraction of total N available to the next crop. `None` where RB209
    /// lists the combination as not applicable (incorporation in summer).
    pub fn fraction(
        &self,
        timing: ApplicationTiming,
        soil: ManureSoil,
        incorporated: bool,
    ) -> Option<f64> {
        use ApplicationTiming::*;

        // [sandy, medium/heavy]
        let row: [f64; 2] = match (self, timing, incorporated) {
            (_, Summer, true) => return None,

            (Self::Fym, Autumn, _) => [0.05, 0.10],
            (Self::Fym, Winter | Summer, _) => [0.10, 0.10],
            (Self::Fym, Spring, false) => [0.10, 0.10],
            (Self::Fym, Spring, true) => [0.15, 0.15],

            (Self::PoultryLitter, Autumn, false) => [0.10, 0.25],
            (Self::PoultryLitter, Winter, false) => [0.20, 0.25],
            (Self::PoultryLitter, Spring | Summer, false) => [0.30, 0.30],
            (Self::PoultryLitter, Autumn, true) => [0.10, 0.30],
            (Self::PoultryLitter, Winter, true) => [0.20, 0.30],
            (Self::PoultryLitter, Spring, true) => [0.40, 0.40],

            (Self::LayerManure, Autumn, false) => [0.15, 0.25],
            (Self::LayerManure, Winter, false) => [0.25, 0.25],
            (Self::LayerManure, Spring | Summer, false) => [0.35, 0.35],
            (Self::LayerManure, Autumn, true) => [0.15, 0.35],
            (Self::LayerManure, Winter, true) => [0.25, 0.40],
            (Self::LayerManure, Spring, true) => [0.50, 0.50],

            (Self::CattleSlurry, Autumn, false) => [0.05, 0.25],
            (Self::CattleSlurry, Winter | Summer, false) => [0.25, 0.25],
            (Self::CattleSlurry, Spring, false) => [0.35, 0.35],
            (Self::CattleSlurry, Autumn, true) => [0.05, 0.30],
            (Self::CattleSlurry, Winter, true) => [0.20, 0.30],
            (Self::CattleSlurry, Spring, true) => [0.40, 0.40],

            (Self::PigSlurry, Autumn, false) => [0.10, 0.30],
            (Self::PigSlurry, Winter, false) => [0.35, 0.35],
            (Self::PigSlurry, Spring | Summer, false) => [0.50, 0.50],
            (Self::PigSlurry, Autumn, true) => [0.10, 0.40],
            (Self::PigSlurry, Winter, true) => [0.30, 0.45],
            (Self::PigSlurry, Spring, true) => [0.60, 0.60],

            (Self::BiosolidsCake, Autumn, _) => [0.10, 0.15],
            (Self::BiosolidsCake, Winter | Summer, _) => [0.15, 0.15],
            (Self::BiosolidsCake, Spring, false) => [0.15, 0.15],
            (Self::BiosolidsCake, Spring, true) => [0.20, 0.20],
        };

        Some(match soil {
            ManureSoil::Sandy => row[0],
            ManureSoil::MediumHeavy => row[1],
        })
    }
}
