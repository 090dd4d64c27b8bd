use anyhow::Context;
use clap::Parser;
use rb209::cli::{Cli, Commands};
use rb209::config::Config;
use rb209::logic;
use rb209::models::{FruitRequest, GrassHistory, IndexHalf, RecommendRequest};
use rb209::output::{self, CropList, MaterialList, NutrientValue, OutputFormat};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// RUST_LOG wins, then -v/-vv, then the config file level.
fn init_logging(verbose: u8, config_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new(config_level),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // init must work even when the existing config is broken
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_deref()).context("Failed to load configuration")?,
    };
    init_logging(cli.verbose, &config.logging.level);

    let format = cli.format.unwrap_or(config.output.format);
    let defaults = &config.defaults;

    let text = match cli.command {
        Commands::Recommend(args) => {
            let mut request = RecommendRequest::new(
                args.crop,
                args.sns_index,
                args.p_index,
                args.k_index,
            )
            .with_mg_index(args.mg_index.unwrap_or(defaults.mg_index))
            .with_straw(args.straw.straw().unwrap_or(defaults.straw));
            if let Some(soil) = args.soil_type {
                request = request.with_soil_type(soil);
            }
            if let Some(expected) = args.expected_yield {
                request = request.with_expected_yield(expected);
            }
            if let Some(ber) = args.ber.or(defaults.ber) {
                request = request.with_ber(ber);
            }
            if args.k_upper_half {
                request = request.with_k_half(IndexHalf::Upper);
            }
            output::render(&logic::recommend_all(&request)?, format)?
        }
        Commands::Nitrogen(args) => {
            let value = logic::recommend_nitrogen(
                args.crop,
                args.sns_index,
                args.soil_type,
                args.expected_yield,
                args.ber.or(defaults.ber),
            )?;
            output::render(&NutrientValue::new(args.crop, "Nitrogen (N)", value), format)?
        }
        Commands::Phosphorus(args) => {
            let value = logic::recommend_phosphorus(args.crop, args.p_index, args.expected_yield)?;
            output::render(
                &NutrientValue::new(args.crop, "Phosphate (P2O5)", value),
                format,
            )?
        }
        Commands::Potassium(args) => {
            let k_half = if args.k_upper_half {
                IndexHalf::Upper
            } else {
                IndexHalf::Lower
            };
            let value = logic::recommend_potassium(
                args.crop,
                args.k_index,
                args.straw.straw().unwrap_or(defaults.straw),
                k_half,
                args.expected_yield,
            )?;
            output::render(&NutrientValue::new(args.crop, "Potash (K2O)", value), format)?
        }
        Commands::Sulfur(args) => {
            let value = logic::recommend_sulfur(args.crop)?;
            output::render(&NutrientValue::new(args.crop, "Sulfur (SO3)", value), format)?
        }
        Commands::Sodium(args) => {
            let value = logic::recommend_sodium(args.crop, args.k_index)?;
            output::render(&NutrientValue::new(args.crop, "Sodium (Na2O)", value), format)?
        }
        Commands::Sns(args) => {
            let history = match (args.ley_age, args.ley_n_intensity, args.ley_management) {
                (Some(age), Some(intensity), Some(management)) => {
                    Some(GrassHistory::new(age, intensity, management).with_year(args.ley_year))
                }
                _ => None,
            };
            let result =
                logic::calculate_sns(args.previous_crop, args.soil_type, args.rainfall, history)?;
            output::render(&result, format)?
        }
        Commands::SnsSmn(args) => {
            output::render(&logic::calculate_smn_sns(args.smn, args.crop_n)?, format)?
        }
        Commands::SnsLey(args) => {
            let history = GrassHistory::new(args.ley_age, args.n_intensity, args.management)
                .with_year(args.year);
            let result = logic::calculate_grass_ley_sns(history, args.soil_type, args.rainfall)?;
            output::render(&result, format)?
        }
        Commands::VegSns(args) => {
            let result =
                logic::calculate_veg_sns(args.previous_crop, args.soil_type, args.rainfall)?;
            output::render(&result, format)?
        }
        Commands::VegSmn(args) => {
            output::render(&logic::calculate_veg_smn_sns(args.smn, args.depth)?, format)?
        }
        Commands::Organic(args) => {
            let result = logic::calculate_organic(
                args.material,
                args.rate,
                args.timing,
                args.incorporated,
                args.soil_type,
            )?;
            output::render(&result, format)?
        }
        Commands::Lime(args) => {
            let result = logic::calculate_lime(
                args.current_ph,
                args.target_ph,
                args.soil_type,
                args.land_use,
                args.crop,
            )?;
            output::render(&result, format)?
        }
        Commands::Timing(args) => {
            let result = logic::nitrogen_timing(args.crop, args.total_n, args.soil_type)?;
            output::render(&result, format)?
        }
        Commands::FruitRecommend(args) => {
            let mut request = FruitRequest::new(
                args.crop,
                args.soil_category,
                args.p_index,
                args.k_index,
                args.mg_index,
            );
            if let Some(management) = args.orchard_management {
                request = request.with_orchard_management(management);
            }
            if let Some(sns) = args.sns_index {
                request = request.with_sns_index(sns);
            }
            output::render(&logic::recommend_fruit_all(&request)?, format)?
        }
        Commands::FruitNitrogen(args) => {
            let value = logic::recommend_fruit_nitrogen(
                args.crop,
                args.soil_category,
                args.orchard_management,
                args.sns_index,
            )?;
            output::render(&NutrientValue::new(args.crop, "Nitrogen (N)", value), format)?
        }
        Commands::ListCrops { category } => output::render(&CropList::new(category), format)?,
        Commands::ListMaterials => output::render(&MaterialList::new(), format)?,
        Commands::Check => check(cli.config.as_deref(), &config)?,
        Commands::Init => {
            Config::setup_interactive(cli.config.as_deref())
                .context("Failed to write configuration")?;
            return Ok(());
        }
    };

    print!("{}", text);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn check(config_override: Option<&Path>, config: &Config) -> anyhow::Result<String> {
    config.validate().context("Configuration is invalid")?;

    let source = match config_override {
        Some(path) => path.display().to_string(),
        None => Config::find_config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none (built-in defaults)".into()),
    };

    Ok(format!(
        "Config file: {}\nConfiguration OK\n\n{}",
        source,
        config.to_yaml()?
    ))
}
