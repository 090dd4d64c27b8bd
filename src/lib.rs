//! RB209 fertiliser recommendations: table-driven N, P, K, Mg, S and Na
//! advice for arable, grassland, vegetable and fruit crops, plus soil
//! nitrogen supply, organic manures, lime and N timing.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;
pub mod output;

pub use error::{Rb209Error, Result};
pub use logic::{
    calculate_grass_ley_sns, calculate_lime, calculate_organic, calculate_smn_sns, calculate_sns,
    calculate_veg_smn_sns, calculate_veg_sns, combine_sns, nitrogen_timing, recommend_all,
    recommend_fruit_all, recommend_fruit_nitrogen, recommend_fruit_pkm, recommend_magnesium,
    recommend_nitrogen, recommend_phosphorus, recommend_potassium, recommend_sodium,
    recommend_sulfur, smn_to_sns_index_veg, sns_value_to_index, RulesEngine,
};
