//! Text and JSON rendering of engine results for the command line.

use crate::error::Result;
use crate::models::{
    Crop, CropCategory, LimeResult, NitrogenTimingResult, NutrientRecommendation,
    OrganicMaterial, OrganicResult, SnsResult,
};
use crate::data::organic::material_info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed-width text layout for a result.
pub trait TableView {
    fn table(&self) -> String;
}

pub fn render<T: Serialize + TableView>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => value.table(),
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    })
}

const LABEL_WIDTH: usize = 22;

fn row(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH));
}

fn title(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
    out.push_str(&"-".repeat(text.chars().count().max(40)));
    out.push('\n');
}

fn notes(out: &mut String, notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    out.push_str("\nNotes:\n");
    for note in notes {
        out.push_str(&format!("  - {}\n", note));
    }
}

/// kg/ha amounts print without decimals unless they have one.
fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

impl TableView for NutrientRecommendation {
    fn table(&self) -> String {
        let mut out = String::new();
        title(&mut out, &format!("Recommendation: {}", self.crop));
        row(&mut out, "Nitrogen (N)", format!("{} kg/ha", amount(self.nitrogen)));
        row(&mut out, "Phosphate (P2O5)", format!("{} kg/ha", amount(self.phosphorus)));
        row(&mut out, "Potash (K2O)", format!("{} kg/ha", amount(self.potassium)));
        row(&mut out, "Magnesium (MgO)", format!("{} kg/ha", amount(self.magnesium)));
        row(&mut out, "Sulfur (SO3)", format!("{} kg/ha", amount(self.sulfur)));
        row(&mut out, "Sodium (Na2O)", format!("{} kg/ha", amount(self.sodium)));
        notes(&mut out, &self.notes);
        out
    }
}

impl TableView for SnsResult {
    fn table(&self) -> String {
        let mut out = String::new();
        title(&mut out, "Soil Nitrogen Supply");
        row(&mut out, "SNS Index", self.sns_index);
        row(&mut out, "Method", self.method.as_str());
        if let Some(crop) = &self.previous_crop {
            row(&mut out, "Previous crop", crop);
        }
        if let Some(soil) = &self.soil_type {
            row(&mut out, "Soil type", soil);
        }
        if let Some(rainfall) = &self.rainfall {
            row(&mut out, "Rainfall", rainfall);
        }
        if let Some(smn) = self.smn {
            row(&mut out, "SMN", format!("{} kg N/ha", amount(smn)));
        }
        if let Some(crop_n) = self.crop_n {
            row(&mut out, "Crop N", format!("{} kg N/ha", amount(crop_n)));
        }
        if let Some(value) = self.sns_value {
            row(&mut out, "SNS value", format!("{} kg N/ha", amount(value)));
        }
        notes(&mut out, &self.notes);
        out
    }
}

impl TableView for OrganicResult {
    fn table(&self) -> String {
        let mut out = String::new();
        title(&mut out, &format!("Organic material: {}", self.material));
        row(&mut out, "Rate", format!("{} {}", amount(self.rate), self.unit));
        row(&mut out, "Total N", format!("{:.1} kg/ha", self.total_n));
        row(&mut out, "Available N", format!("{:.1} kg/ha", self.available_n));
        row(&mut out, "Phosphate (P2O5)", format!("{:.1} kg/ha", self.p2o5));
        row(&mut out, "Potash (K2O)", format!("{:.1} kg/ha", self.k2o));
        row(&mut out, "Magnesium (MgO)", format!("{:.1} kg/ha", self.mgo));
        row(&mut out, "Sulfur (SO3)", format!("{:.1} kg/ha", self.so3));
        notes(&mut out, &self.notes);
        out
    }
}

impl TableView for LimeResult {
    fn table(&self) -> String {
        let mut out = String::new();
        title(&mut out, "Lime requirement");
        row(&mut out, "Current pH", format!("{:.1}", self.current_ph));
        row(&mut out, "Target pH", format!("{:.1}", self.target_ph));
        row(&mut out, "Soil type", &self.soil_type);
        row(&mut out, "Ground limestone", format!("{:.1} t/ha", self.lime_required));
        notes(&mut out, &self.notes);
        out
    }
}

impl TableView for NitrogenTimingResult {
    fn table(&self) -> String {
        let mut out = String::new();
        title(
            &mut out,
            &format!("N timing: {} ({} kg N/ha)", self.crop, amount(self.total_n)),
        );
        for (i, split) in self.splits.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}. {:>5} kg N/ha  {}\n",
                i + 1,
                amount(split.amount),
                split.timing
            ));
        }
        notes(&mut out, &self.notes);
        out
    }
}

/// A single nutrient amount for one crop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientValue {
    pub crop: String,
    pub nutrient: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl NutrientValue {
    pub fn new(crop: Crop, nutrient: &'static str, value: f64) -> Self {
        Self {
            crop: crop.name().to_string(),
            nutrient,
            value,
            unit: "kg/ha",
        }
    }
}

impl TableView for NutrientValue {
    fn table(&self) -> String {
        let mut out = String::new();
        title(&mut out, &self.crop);
        row(&mut out, self.nutrient, format!("{} {}", amount(self.value), self.unit));
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: &'static str,
}

/// Crop catalogue, optionally filtered to one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CropList(pub Vec<CropEntry>);

impl CropList {
    pub fn new(category: Option<CropCategory>) -> Self {
        CropList(
            Crop::ALL
                .into_iter()
                .filter(|c| category.map_or(true, |cat| c.category() == cat))
                .map(|c| CropEntry {
                    slug: c.as_str(),
                    name: c.name(),
                    category: c.category().as_str(),
                })
                .collect(),
        )
    }
}

impl TableView for CropList {
    fn table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:<34} {:<12} {}\n", "CROP", "CATEGORY", "NAME"));
        for entry in &self.0 {
            out.push_str(&format!("{:<34} {:<12} {}\n", entry.slug, entry.category, entry.name));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MaterialList(pub Vec<MaterialEntry>);

impl MaterialList {
    pub fn new() -> Self {
        MaterialList(
            OrganicMaterial::ALL
                .into_iter()
                .map(|m| {
                    let info = material_info(m);
                    MaterialEntry {
                        slug: m.as_str(),
                        name: info.name,
                        unit: info.unit,
                    }
                })
                .collect(),
        )
    }
}

impl Default for MaterialList {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView for MaterialList {
    fn table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{:<22} {:<6} {}\n", "MATERIAL", "UNIT", "NAME"));
        for entry in &self.0 {
            out.push_str(&format!("{:<22} {:<6} {}\n", entry.slug, entry.unit, entry.name));
        }
        out
    }
}
