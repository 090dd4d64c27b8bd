use crate::error::{unknown_option, Result};
use serde::Serialize;

/// Nitrogen residue left by the previous crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NResidue {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl NResidue {
    pub fn as_str(&self) -> &'static str {
        match self {
            NResidue::Low => "low",
            NResidue::Medium => "medium",
            NResidue::High => "high",
            NResidue::VeryHigh => "very-high",
        }
    }
}

impl std::fmt::Display for NResidue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Previous crop for the arable field assessment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviousCrop {
    Cereals,
    Linseed,
    ForageMaize,
    SugarBeet,
    SetAside,
    Fallow,
    OilseedRape,
    Potatoes,
    PeasBeans,
    Vegetables,
    Grass1To2Yr,
    Grass3To5Yr,
    GrassLongTerm,
    Lucerne,
}

impl PreviousCrop {
    pub const ALL: [PreviousCrop; 14] = [
        PreviousCrop::Cereals,
        PreviousCrop::Linseed,
        PreviousCrop::ForageMaize,
        PreviousCrop::SugarBeet,
        PreviousCrop::SetAside,
        PreviousCrop::Fallow,
        PreviousCrop::OilseedRape,
        PreviousCrop::Potatoes,
        PreviousCrop::PeasBeans,
        PreviousCrop::Vegetables,
        PreviousCrop::Grass1To2Yr,
        PreviousCrop::Grass3To5Yr,
        PreviousCrop::GrassLongTerm,
        PreviousCrop::Lucerne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviousCrop::Cereals => "cereals",
            PreviousCrop::Linseed => "linseed",
            PreviousCrop::ForageMaize => "forage-maize",
            PreviousCrop::SugarBeet => "sugar-beet",
            PreviousCrop::SetAside => "set-aside",
            PreviousCrop::Fallow => "fallow",
            PreviousCrop::OilseedRape => "oilseed-rape",
            PreviousCrop::Potatoes => "potatoes",
            PreviousCrop::PeasBeans => "peas-beans",
            PreviousCrop::Vegetables => "vegetables",
            PreviousCrop::Grass1To2Yr => "grass-1-2yr",
            PreviousCrop::Grass3To5Yr => "grass-3-5yr",
            PreviousCrop::GrassLongTerm => "grass-long-term",
            PreviousCrop::Lucerne => "lucerne",
        }
    }

    pub fn n_residue(&self) -> NResidue {
        match self {
            PreviousCrop::Cereals
            | PreviousCrop::Linseed
            | PreviousCrop::ForageMaize
            | PreviousCrop::SugarBeet
            | PreviousCrop::SetAside
            | PreviousCrop::Fallow => NResidue::Low,
            PreviousCrop::OilseedRape | PreviousCrop::Potatoes => NResidue::Medium,
            PreviousCrop::PeasBeans
            | PreviousCrop::Vegetables
            | PreviousCrop::Grass1To2Yr
            | PreviousCrop::Grass3To5Yr => NResidue::High,
            PreviousCrop::GrassLongTerm | PreviousCrop::Lucerne => NResidue::VeryHigh,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("previous crop", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for PreviousCrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Previous crop categories of the vegetable SNS tables (Tables 6.2-6.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VegPreviousCrop {
    Beans,
    Cereals,
    ForageCut,
    OilseedRape,
    Peas,
    Potatoes,
    SugarBeet,
    Uncropped,
    VegLowN,
    VegMediumN,
    VegHighN,
}

impl VegPreviousCrop {
    pub const ALL: [VegPreviousCrop; 11] = [
        VegPreviousCrop::Beans,
        VegPreviousCrop::Cereals,
        VegPreviousCrop::ForageCut,
        VegPreviousCrop::OilseedRape,
        VegPreviousCrop::Peas,
        VegPreviousCrop::Potatoes,
        VegPreviousCrop::SugarBeet,
        VegPreviousCrop::Uncropped,
        VegPreviousCrop::VegLowN,
        VegPreviousCrop::VegMediumN,
        VegPreviousCrop::VegHighN,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VegPreviousCrop::Beans => "beans",
            VegPreviousCrop::Cereals => "cereals",
            VegPreviousCrop::ForageCut => "forage-cut",
            VegPreviousCrop::OilseedRape => "oilseed-rape",
            VegPreviousCrop::Peas => "peas",
            VegPreviousCrop::Potatoes => "potatoes",
            VegPreviousCrop::SugarBeet => "sugar-beet",
            VegPreviousCrop::Uncropped => "uncropped",
            VegPreviousCrop::VegLowN => "veg-low-n",
            VegPreviousCrop::VegMediumN => "veg-medium-n",
            VegPreviousCrop::VegHighN => "veg-high-n",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("vegetable previous crop", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for VegPreviousCrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeyAge {
    OneToTwoYears,
    ThreeToFiveYears,
}

impl LeyAge {
    pub const ALL: [LeyAge; 2] = [LeyAge::OneToTwoYears, LeyAge::ThreeToFiveYears];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeyAge::OneToTwoYears => "1-2yr",
            LeyAge::ThreeToFiveYears => "3-5yr",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1-2yr" => Some(LeyAge::OneToTwoYears),
            "3-5yr" => Some(LeyAge::ThreeToFiveYears),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s)
            .ok_or_else(|| unknown_option("ley age", s, Self::ALL.iter().map(|v| v.as_str())))
    }
}

impl std::fmt::Display for LeyAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeyNIntensity {
    Low,
    High,
}

impl LeyNIntensity {
    pub const ALL: [LeyNIntensity; 2] = [LeyNIntensity::Low, LeyNIntensity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeyNIntensity::Low => "low",
            LeyNIntensity::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(LeyNIntensity::Low),
            "high" => Some(LeyNIntensity::High),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("ley N intensity", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for LeyNIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeyManagement {
    Cut,
    Grazed,
    OneCutThenGrazed,
}

impl LeyManagement {
    pub const ALL: [LeyManagement; 3] = [
        LeyManagement::Cut,
        LeyManagement::Grazed,
        LeyManagement::OneCutThenGrazed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeyManagement::Cut => "cut",
            LeyManagement::Grazed => "grazed",
            LeyManagement::OneCutThenGrazed => "1-cut-then-grazed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Some(LeyManagement::Cut),
            "grazed" => Some(LeyManagement::Grazed),
            "1-cut-then-grazed" => Some(LeyManagement::OneCutThenGrazed),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            unknown_option("ley management", s, Self::ALL.iter().map(|v| v.as_str()))
        })
    }
}

impl std::fmt::Display for LeyManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grass ley history used to run the ley assessment alongside the field assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrassHistory {
    pub ley_age: LeyAge,
    pub n_intensity: LeyNIntensity,
    pub management: LeyManagement,
    /// Year after ploughing out (1-3).
    pub year: u8,
}

impl GrassHistory {
    pub fn new(ley_age: LeyAge, n_intensity: LeyNIntensity, management: LeyManagement) -> Self {
        Self {
            ley_age,
            n_intensity,
            management,
            year: 2,
        }
    }

    pub fn with_year(mut self, year: u8) -> Self {
        self.year = year;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnsMethod {
    FieldAssessment,
    #[serde(rename = "smn")]
    SmnMeasurement,
    #[serde(rename = "table-4.6")]
    LeyHistory,
    Combined,
    #[serde(rename = "veg-field-assessment")]
    VegFieldAssessment,
    #[serde(rename = "veg-advisory")]
    VegAdvisory,
    #[serde(rename = "veg-smn")]
    VegSmn,
}

impl SnsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnsMethod::FieldAssessment => "field-assessment",
            SnsMethod::SmnMeasurement => "smn",
            SnsMethod::LeyHistory => "table-4.6",
            SnsMethod::Combined => "combined",
            SnsMethod::VegFieldAssessment => "veg-field-assessment",
            SnsMethod::VegAdvisory => "veg-advisory",
            SnsMethod::VegSmn => "veg-smn",
        }
    }
}

impl std::fmt::Display for SnsMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one SNS assessment. `sns_index` is always within 0-6.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnsResult {
    pub sns_index: u8,
    pub method: SnsMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_crop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_n: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sns_value: Option<f64>,
    pub notes: Vec<String>,
}

impl SnsResult {
    pub fn new(sns_index: u8, method: SnsMethod) -> Self {
        Self {
            sns_index: sns_index.min(6),
            method,
            previous_crop: None,
            soil_type: None,
            rainfall: None,
            smn: None,
            crop_n: None,
            sns_value: None,
            notes: Vec::new(),
        }
    }

    /// Fixed index for soils the tables do not cover; the advisory text is mandatory.
    pub fn advisory(sns_index: u8, advisory: impl Into<String>) -> Self {
        Self::new(sns_index, SnsMethod::VegAdvisory).with_note(advisory)
    }

    pub fn with_site(
        mut self,
        previous_crop: impl Into<String>,
        soil_type: impl Into<String>,
        rainfall: impl Into<String>,
    ) -> Self {
        self.previous_crop = Some(previous_crop.into());
        self.soil_type = Some(soil_type.into());
        self.rainfall = Some(rainfall.into());
        self
    }

    pub fn with_measurement(mut self, smn: f64, crop_n: Option<f64>, sns_value: Option<f64>) -> Self {
        self.smn = Some(smn);
        self.crop_n = crop_n;
        self.sns_value = sns_value;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_crop_residue_categories() {
        assert_eq!(PreviousCrop::Cereals.n_residue(), NResidue::Low);
        assert_eq!(PreviousCrop::OilseedRape.n_residue(), NResidue::Medium);
        assert_eq!(PreviousCrop::Grass3To5Yr.n_residue(), NResidue::High);
        assert_eq!(PreviousCrop::GrassLongTerm.n_residue(), NResidue::VeryHigh);
    }

    #[test]
    fn previous_crop_parse_rejects_unknown() {
        let err = PreviousCrop::parse("bananas").unwrap_err().to_string();
        assert!(err.contains("Unknown previous crop 'bananas'"));
        assert!(err.contains("grass-long-term"));
    }

    #[test]
    fn veg_previous_crop_rejects_arable_slug() {
        assert!(VegPreviousCrop::parse("winter-wheat").is_err());
        assert_eq!(VegPreviousCrop::parse("veg-high-n").unwrap(), VegPreviousCrop::VegHighN);
    }

    #[test]
    fn ley_slugs_round_trip() {
        for age in LeyAge::ALL {
            assert_eq!(LeyAge::from_str(age.as_str()), Some(age));
        }
        for m in LeyManagement::ALL {
            assert_eq!(LeyManagement::from_str(m.as_str()), Some(m));
        }
    }

    #[test]
    fn sns_result_index_is_capped() {
        assert_eq!(SnsResult::new(9, SnsMethod::SmnMeasurement).sns_index, 6);
    }

    #[test]
    fn advisory_result_always_has_note() {
        let r = SnsResult::advisory(4, "Consult a FACTS Qualified Adviser.");
        assert_eq!(r.method, SnsMethod::VegAdvisory);
        assert_eq!(r.notes.len(), 1);
    }

    #[test]
    fn grass_history_defaults_to_year_two() {
        let h = GrassHistory::new(LeyAge::OneToTwoYears, LeyNIntensity::Low, LeyManagement::Cut);
        assert_eq!(h.year, 2);
        assert_eq!(h.with_year(1).year, 1);
    }
}
