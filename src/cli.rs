use crate::models::{
    ApplicationTiming, Crop, CropCategory, FruitSoilCategory, LandUse, LeyAge, LeyManagement,
    LeyNIntensity, OrchardManagement, OrganicMaterial, PreviousCrop, Rainfall, SoilType, Straw,
    VegPreviousCrop, VegRainfall, VegSoilType,
};
use crate::output::OutputFormat;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rb209",
    version,
    about = "RB209 fertiliser recommendations for UK crops and grassland"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full N, P, K, Mg, S and Na recommendation
    Recommend(RecommendArgs),
    /// Nitrogen recommendation
    Nitrogen(NitrogenArgs),
    /// Phosphate recommendation
    Phosphorus(PhosphorusArgs),
    /// Potash recommendation
    Potassium(PotassiumArgs),
    /// Sulfur recommendation
    Sulfur(CropArg),
    /// Sodium recommendation
    Sodium(SodiumArgs),
    /// SNS Index by field assessment
    Sns(SnsArgs),
    /// SNS Index from measured soil mineral N
    SnsSmn(SnsSmnArgs),
    /// SNS Index after ploughing out a grass ley
    SnsLey(SnsLeyArgs),
    /// Vegetable SNS Index by field assessment
    VegSns(VegSnsArgs),
    /// Vegetable SNS Index from a soil mineral N sample
    VegSmn(VegSmnArgs),
    /// Nutrients supplied by an organic material
    Organic(OrganicArgs),
    /// Ground limestone needed to reach a target pH
    Lime(LimeArgs),
    /// Split a total N dose into dressings
    Timing(TimingArgs),
    /// Full recommendation for a fruit, vine or hop crop
    FruitRecommend(FruitRecommendArgs),
    /// Nitrogen for a fruit, vine or hop crop
    FruitNitrogen(FruitNitrogenArgs),
    /// List crop slugs
    ListCrops {
        #[arg(long, value_parser = CropCategory::parse)]
        category: Option<CropCategory>,
    },
    /// List organic material slugs
    ListMaterials,
    /// Write a config file interactively
    Init,
    /// Validate and print the effective config
    Check,
}

#[derive(Args, Debug)]
pub struct CropArg {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,
}

/// Straw handling for cereals. Neither flag means the config default.
#[derive(Args, Debug, Default)]
pub struct StrawArgs {
    /// Straw removed from the field
    #[arg(long, conflicts_with = "straw_incorporated")]
    pub straw_removed: bool,

    /// Straw incorporated into the field
    #[arg(long)]
    pub straw_incorporated: bool,
}

impl StrawArgs {
    pub fn straw(&self) -> Option<Straw> {
        if self.straw_incorporated {
            Some(Straw::Incorporated)
        } else if self.straw_removed {
            Some(Straw::Removed)
        } else {
            None
        }
    }
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long)]
    pub sns_index: i32,

    #[arg(long)]
    pub p_index: i32,

    #[arg(long)]
    pub k_index: i32,

    /// Soil Mg index (defaults to the config value)
    #[arg(long)]
    pub mg_index: Option<i32>,

    #[command(flatten)]
    pub straw: StrawArgs,

    /// Soil type for soil-specific N tables
    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: Option<SoilType>,

    /// Expected yield in t/ha
    #[arg(long)]
    pub expected_yield: Option<f64>,

    /// Break-even ratio (fertiliser N cost / grain value)
    #[arg(long)]
    pub ber: Option<f64>,

    /// Use the K Index 2+ value for vegetables
    #[arg(long)]
    pub k_upper_half: bool,
}

#[derive(Args, Debug)]
pub struct NitrogenArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long)]
    pub sns_index: i32,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: Option<SoilType>,

    #[arg(long)]
    pub expected_yield: Option<f64>,

    #[arg(long)]
    pub ber: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PhosphorusArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long)]
    pub p_index: i32,

    #[arg(long)]
    pub expected_yield: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PotassiumArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long)]
    pub k_index: i32,

    #[command(flatten)]
    pub straw: StrawArgs,

    #[arg(long)]
    pub expected_yield: Option<f64>,

    #[arg(long)]
    pub k_upper_half: bool,
}

#[derive(Args, Debug)]
pub struct SodiumArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    /// Soil K index (required for sugar beet)
    #[arg(long)]
    pub k_index: Option<i32>,
}

#[derive(Args, Debug)]
pub struct SnsArgs {
    #[arg(long, value_parser = PreviousCrop::parse)]
    pub previous_crop: PreviousCrop,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: SoilType,

    #[arg(long, value_parser = Rainfall::parse)]
    pub rainfall: Rainfall,

    /// Grass ley duration, if the field was in grass in the last three years
    #[arg(long, value_parser = LeyAge::parse, requires_all = ["ley_n_intensity", "ley_management"])]
    pub ley_age: Option<LeyAge>,

    #[arg(long, value_parser = LeyNIntensity::parse, requires_all = ["ley_age", "ley_management"])]
    pub ley_n_intensity: Option<LeyNIntensity>,

    #[arg(long, value_parser = LeyManagement::parse, requires_all = ["ley_age", "ley_n_intensity"])]
    pub ley_management: Option<LeyManagement>,

    /// Year after ploughing out the ley
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub ley_year: u8,
}

#[derive(Args, Debug)]
pub struct SnsSmnArgs {
    /// Soil mineral N, 0-90 cm (kg N/ha)
    #[arg(long)]
    pub smn: f64,

    /// Estimated crop N at sampling (kg N/ha)
    #[arg(long)]
    pub crop_n: f64,
}

#[derive(Args, Debug)]
pub struct SnsLeyArgs {
    #[arg(long, value_parser = LeyAge::parse)]
    pub ley_age: LeyAge,

    #[arg(long, value_parser = LeyNIntensity::parse)]
    pub n_intensity: LeyNIntensity,

    #[arg(long, value_parser = LeyManagement::parse)]
    pub management: LeyManagement,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: SoilType,

    #[arg(long, value_parser = Rainfall::parse)]
    pub rainfall: Rainfall,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub year: u8,
}

#[derive(Args, Debug)]
pub struct VegSnsArgs {
    #[arg(long, value_parser = VegPreviousCrop::parse)]
    pub previous_crop: VegPreviousCrop,

    #[arg(long, value_parser = VegSoilType::parse)]
    pub soil_type: VegSoilType,

    #[arg(long, value_parser = VegRainfall::parse)]
    pub rainfall: VegRainfall,
}

#[derive(Args, Debug)]
pub struct VegSmnArgs {
    #[arg(long)]
    pub smn: f64,

    /// Sampling depth in cm (30, 60 or 90)
    #[arg(long)]
    pub depth: u32,
}

#[derive(Args, Debug)]
pub struct OrganicArgs {
    #[arg(long, value_parser = OrganicMaterial::parse)]
    pub material: OrganicMaterial,

    /// t/ha, or m3/ha for slurries and digestate
    #[arg(long)]
    pub rate: f64,

    #[arg(long, value_parser = ApplicationTiming::parse)]
    pub timing: Option<ApplicationTiming>,

    #[arg(long)]
    pub incorporated: bool,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: Option<SoilType>,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .multiple(true)
        .args(["target_ph", "land_use"])
))]
pub struct LimeArgs {
    #[arg(long)]
    pub current_ph: f64,

    #[arg(long)]
    pub target_ph: Option<f64>,

    #[arg(long, value_parser = LandUse::parse)]
    pub land_use: Option<LandUse>,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: SoilType,

    /// Crop to be grown, for crop-specific warnings
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Option<Crop>,
}

#[derive(Args, Debug)]
pub struct TimingArgs {
    #[arg(long, value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long)]
    pub total_n: f64,

    #[arg(long, value_parser = SoilType::parse)]
    pub soil_type: Option<SoilType>,
}

#[derive(Args, Debug)]
pub struct FruitRecommendArgs {
    #[arg(value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long, value_parser = FruitSoilCategory::parse)]
    pub soil_category: FruitSoilCategory,

    #[arg(long)]
    pub p_index: i32,

    #[arg(long)]
    pub k_index: i32,

    #[arg(long)]
    pub mg_index: i32,

    #[arg(long, value_parser = OrchardManagement::parse)]
    pub orchard_management: Option<OrchardManagement>,

    /// SNS Index (strawberries only)
    #[arg(long)]
    pub sns_index: Option<i32>,
}

#[derive(Args, Debug)]
pub struct FruitNitrogenArgs {
    #[arg(value_parser = Crop::parse)]
    pub crop: Crop,

    #[arg(long, value_parser = FruitSoilCategory::parse)]
    pub soil_category: FruitSoilCategory,

    #[arg(long, value_parser = OrchardManagement::parse)]
    pub orchard_management: Option<OrchardManagement>,

    #[arg(long)]
    pub sns_index: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rb209").chain(args.iter().copied())).unwrap()
    }

    fn parse_err(args: &[&str]) -> ErrorKind {
        Cli::try_parse_from(std::iter::once("rb209").chain(args.iter().copied()))
            .unwrap_err()
            .kind()
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn recommend_parses_all_flags() {
        let cli = parse(&[
            "recommend",
            "--crop",
            "winter-wheat-feed",
            "--sns-index",
            "2",
            "--p-index",
            "2",
            "--k-index",
            "1",
            "--straw-incorporated",
            "--soil-type",
            "medium",
            "--expected-yield",
            "10",
            "--ber",
            "4.5",
            "--format",
            "json",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        let Commands::Recommend(args) = cli.command else {
            panic!("expected recommend");
        };
        assert_eq!(args.crop, Crop::WinterWheatFeed);
        assert_eq!(args.k_index, 1);
        assert_eq!(args.mg_index, None);
        assert_eq!(args.straw.straw(), Some(Straw::Incorporated));
        assert_eq!(args.soil_type, Some(SoilType::Medium));
        assert_eq!(args.expected_yield, Some(10.0));
        assert!(!args.k_upper_half);
    }

    #[test]
    fn straw_flags_conflict() {
        assert_eq!(
            parse_err(&[
                "potassium",
                "--crop",
                "winter-barley",
                "--k-index",
                "1",
                "--straw-removed",
                "--straw-incorporated",
            ]),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn unknown_crop_is_a_parse_error() {
        assert_eq!(
            parse_err(&["sulfur", "--crop", "bananas"]),
            ErrorKind::ValueValidation
        );
    }

    #[test]
    fn sns_ley_flags_go_together() {
        let cli = parse(&[
            "sns",
            "--previous-crop",
            "cereals",
            "--soil-type",
            "medium",
            "--rainfall",
            "medium",
            "--ley-age",
            "3-5yr",
            "--ley-n-intensity",
            "high",
            "--ley-management",
            "grazed",
        ]);
        let Commands::Sns(args) = cli.command else {
            panic!("expected sns");
        };
        assert_eq!(args.ley_year, 2);
        assert_eq!(args.ley_management, Some(LeyManagement::Grazed));

        assert_eq!(
            parse_err(&[
                "sns",
                "--previous-crop",
                "cereals",
                "--soil-type",
                "medium",
                "--rainfall",
                "medium",
                "--ley-age",
                "3-5yr",
            ]),
            ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn sns_ley_year_defaults_to_one() {
        let cli = parse(&[
            "sns-ley",
            "--ley-age",
            "1-2yr",
            "--n-intensity",
            "low",
            "--management",
            "cut",
            "--soil-type",
            "heavy",
            "--rainfall",
            "high",
        ]);
        let Commands::SnsLey(args) = cli.command else {
            panic!("expected sns-ley");
        };
        assert_eq!(args.year, 1);
    }

    #[test]
    fn lime_needs_target_or_land_use() {
        assert_eq!(
            parse_err(&["lime", "--current-ph", "5.8", "--soil-type", "medium"]),
            ErrorKind::MissingRequiredArgument
        );
        let cli = parse(&[
            "lime",
            "--current-ph",
            "5.8",
            "--soil-type",
            "medium",
            "--land-use",
            "grassland",
        ]);
        let Commands::Lime(args) = cli.command else {
            panic!("expected lime");
        };
        assert_eq!(args.land_use, Some(LandUse::Grassland));
        assert_eq!(args.target_ph, None);
    }

    #[test]
    fn fruit_crop_is_positional() {
        let cli = parse(&[
            "fruit-nitrogen",
            "fruit-strawberry-main",
            "--soil-category",
            "other-mineral",
            "--sns-index",
            "1",
        ]);
        let Commands::FruitNitrogen(args) = cli.command else {
            panic!("expected fruit-nitrogen");
        };
        assert_eq!(args.crop, Crop::FruitStrawberryMain);
        assert_eq!(args.sns_index, Some(1));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["list-crops", "--category", "arable", "-vv", "--config", "x.yaml"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
        assert!(matches!(
            cli.command,
            Commands::ListCrops {
                category: Some(CropCategory::Arable)
            }
        ));
    }
}
